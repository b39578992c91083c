//! # Snapshot Testing Support
//!
//! Utilities for testing the pipeline via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts scoped tokens to a stable, line-per-token text
//!   format for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (spans in bounds
//!   and ordered, ids unique, clause glyphs, background stack discipline)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{TokenSnap, normalize, render};
