//! Resolution of `[content/f1/.../f5]` annotations into a token kind.
//!
//! The rules form an ordered decision table: the first matching row wins, so
//! `box` short-circuits every colour-only row below it.

use crate::models::token::{Ink, NoteColor, TokenKind};

/// Modifier keywords. A first field equal to one of these is a modifier, not a note.
pub const KEYWORDS: &[&str] = &[
    "box",
    "green",
    "red",
    "blue",
    "oval",
    "orange",
    "ox",
    "arrow",
    "bg",
    "gray",
    "verb",
    "line",
    "underline",
    "bold",
    "strike",
];

/// Outcome of resolving one annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub kind: TokenKind,
    pub note: Option<String>,
    pub note_color: Option<NoteColor>,
}

/// Resolves an annotation's content and raw modifier fields.
pub fn resolve(content: &str, fields: &[&str]) -> Resolved {
    let trimmed: Vec<&str> = fields.iter().map(|f| f.trim()).collect();
    let has = |keyword: &str| trimmed.iter().any(|f| *f == keyword);
    let has_line = has("line") || has("underline");

    let (kind, note_color) = match content.trim() {
        "[" | "]" => {
            let ink = if trimmed.first() == Some(&"green") {
                Ink::Green
            } else {
                Ink::Blue
            };
            (TokenKind::Bracket(ink), None)
        }
        _ if has("box") => {
            let ink = if has("green") { Ink::Green } else { Ink::Red };
            (TokenKind::Box(ink), None)
        }
        _ if has("oval") || has("orange") => (TokenKind::Oval, None),
        _ if has("ox") => {
            let ink = if has("blue") { Ink::Blue } else { Ink::Red };
            (TokenKind::Ox(ink), None)
        }
        _ if has("arrow") => (TokenKind::Arrow, None),
        _ if has("bg") || has("gray") => (TokenKind::SoftBackground, None),
        _ if has("verb") || has("green") => (TokenKind::Text, Some(NoteColor::Green)),
        _ if has("red") => (ink_mark(Ink::Red, has_line), Some(NoteColor::Red)),
        _ if has("blue") => (ink_mark(Ink::Blue, has_line), Some(NoteColor::Blue)),
        _ if has("bold") => (TokenKind::Bold, None),
        _ if has("strike") => (TokenKind::Strike, None),
        _ => (TokenKind::Text, None),
    };

    Resolved {
        kind,
        note: note_of(fields),
        note_color,
    }
}

pub fn is_keyword(field: &str) -> bool {
    KEYWORDS.iter().any(|k| *k == field)
}

fn ink_mark(ink: Ink, line: bool) -> TokenKind {
    if line {
        TokenKind::Underline(ink)
    } else {
        TokenKind::Highlight(ink)
    }
}

/// The first field, verbatim, unless it is empty or a modifier keyword.
fn note_of(fields: &[&str]) -> Option<String> {
    let first = fields.first()?;
    let key = first.trim();
    if key.is_empty() || is_keyword(key) {
        None
    } else {
        Some(first.to_string())
    }
}
