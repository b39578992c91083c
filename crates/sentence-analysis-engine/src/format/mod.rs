//! # Token Formatting
//!
//! Maps scoped tokens to a render-ready contract for display collaborators.
//!
//! ## Modules
//!
//! - **`style`**: `style_for()` lookup table keyed by kind and background
//! - **`note`**: `split_note()` over the static marker table
//! - **`tags`**: `select_display_tag()` by fixed priority

pub mod note;
pub mod style;
pub mod tags;

pub use note::{NoteMark, NoteSegment, split_note};
pub use style::{Border, Decoration, Swatch, TokenStyle, Weight, style_for};
pub use tags::{TagKind, select_display_tag};

use crate::models::token::{Token, TokenKind};

/// A token plus everything needed to draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderToken<'a> {
    pub token: &'a Token,
    pub glyph: &'a str,
    pub style: TokenStyle,
    /// Segmented note; empty when the token has none.
    pub note: Vec<NoteSegment>,
}

/// The glyph drawn for a token. Clause delimiters always draw as `[` or `]`.
pub fn display_glyph(token: &Token) -> &str {
    match token.kind {
        TokenKind::ClauseOpen(_) => "[",
        TokenKind::ClauseClose(_) => "]",
        _ => &token.text,
    }
}

pub fn format_token(token: &Token) -> RenderToken<'_> {
    RenderToken {
        token,
        glyph: display_glyph(token),
        style: style_for(token.kind, token.bg),
        note: token.note.as_deref().map(split_note).unwrap_or_default(),
    }
}

pub fn format_tokens(tokens: &[Token]) -> Vec<RenderToken<'_>> {
    tokens.iter().map(format_token).collect()
}
