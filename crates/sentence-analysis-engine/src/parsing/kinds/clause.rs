use crate::models::token::{ClauseColor, TokenKind};

/// Which side of a clause span a delimiter marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseEdge {
    Open(ClauseColor),
    Close(ClauseColor),
}

impl ClauseEdge {
    /// Glyph rendered for the delimiter, whatever literal was consumed.
    pub fn glyph(self) -> &'static str {
        match self {
            ClauseEdge::Open(_) => "[",
            ClauseEdge::Close(_) => "]",
        }
    }

    pub fn kind(self) -> TokenKind {
        match self {
            ClauseEdge::Open(color) => TokenKind::ClauseOpen(color),
            ClauseEdge::Close(color) => TokenKind::ClauseClose(color),
        }
    }
}

pub struct Clause;

impl Clause {
    /// Clause delimiters, longest first: `((({` must be tried before `(({`,
    /// and `})))` before `}))`.
    pub const DELIMITERS: [(&'static str, ClauseEdge); 10] = [
        ("((({", ClauseEdge::Open(ClauseColor::Pink)),
        ("})))", ClauseEdge::Close(ClauseColor::Pink)),
        ("(({", ClauseEdge::Open(ClauseColor::Blue)),
        ("}))", ClauseEdge::Close(ClauseColor::Blue)),
        ("<<{", ClauseEdge::Open(ClauseColor::Green)),
        ("}>>", ClauseEdge::Close(ClauseColor::Green)),
        ("[[{", ClauseEdge::Open(ClauseColor::Purple)),
        ("}]]", ClauseEdge::Close(ClauseColor::Purple)),
        ("{{", ClauseEdge::Open(ClauseColor::Orange)),
        ("}}", ClauseEdge::Close(ClauseColor::Orange)),
    ];
}
