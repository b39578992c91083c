//! # sentence-analysis-engine
//!
//! Parser, scope resolver and formatter for annotated reading sentences.
//!
//! ```text
//! raw &str → parsing::parse → scope::resolve_scopes → format::format_tokens
//!            (flat tokens)    (clause backgrounds)    (style + note segments)
//! ```
//!
//! ```
//! use sentence_analysis_engine::{analyze, Background};
//!
//! let tokens = analyze("The (({cat})) sat.");
//! let cat = tokens.iter().find(|t| t.text == "cat").unwrap();
//! assert_eq!(cat.bg, Some(Background::ClauseBlue));
//! ```

pub mod format;
pub mod io;
pub mod models;
pub mod parsing;
pub mod scope;
pub mod snapshot;

// Re-export key types for easier usage
pub use format::{RenderToken, format_token, format_tokens, select_display_tag, split_note};
pub use models::{
    Background, ClauseColor, Ink, NoteColor, Passage, PassageSource, Sentence, SentenceSource,
    Token, TokenKind,
};
pub use parsing::{parse, parse_indexed};
pub use scope::{ScopeReport, resolve_scopes};

/// Parses `raw` and resolves clause backgrounds.
pub fn analyze(raw: &str) -> Vec<Token> {
    resolve_scopes(parse(raw))
}
