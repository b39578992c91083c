//! # Lexical Kinds
//!
//! Types that own the delimiters of the annotation markup.
//!
//! ## Types
//!
//! - **`Clause`**: the ten clause delimiters, ordered longest first
//! - **`Annotation`**: `[content/field/...]` brackets and field separator
//! - **`LegacyParen`**: `(content)` rewritten as a blue bracket marker
//! - **`Divider`**: the dropped `/` and `/ / bg` sequences
//!
//! The scanner reads these constants; it never hardcodes `((({` or `/`.

pub mod annotation;
pub mod clause;
pub mod legacy;

pub use annotation::Annotation;
pub use clause::{Clause, ClauseEdge};
pub use legacy::{Divider, LegacyParen};
