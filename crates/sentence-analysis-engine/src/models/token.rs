use crate::parsing::span::Span;

/// Ink colour carried by marker tokens (brackets, highlights, boxes, ox marks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ink {
    Blue,
    Green,
    Red,
}

/// Colour of a clause span. Each colour owns one open/close delimiter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClauseColor {
    Blue,
    Green,
    Orange,
    Purple,
    Pink,
}

impl ClauseColor {
    pub const ALL: [ClauseColor; 5] = [
        ClauseColor::Blue,
        ClauseColor::Green,
        ClauseColor::Orange,
        ClauseColor::Purple,
        ClauseColor::Pink,
    ];

    /// The soft background pushed onto the scope stack when a clause of this
    /// colour opens.
    pub fn background(self) -> Background {
        match self {
            ClauseColor::Blue => Background::ClauseBlue,
            ClauseColor::Green => Background::ClauseGreen,
            ClauseColor::Orange => Background::ClauseOrange,
            ClauseColor::Purple => Background::ClausePurple,
            ClauseColor::Pink => Background::ClausePink,
        }
    }
}

/// Background style class applied behind a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Background {
    ClauseBlue,
    ClauseGreen,
    ClauseOrange,
    ClausePurple,
    ClausePink,
    /// Token-local background of `[text/bg]` markers.
    SoftGray,
}

impl Background {
    pub fn class_name(self) -> &'static str {
        match self {
            Background::ClauseBlue => "bg-clause-blue",
            Background::ClauseGreen => "bg-clause-green",
            Background::ClauseOrange => "bg-clause-orange",
            Background::ClausePurple => "bg-clause-purple",
            Background::ClausePink => "bg-clause-pink",
            Background::SoftGray => "bg-soft-gray",
        }
    }
}

/// Semantic colour of a note rendered beneath a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteColor {
    Green,
    Blue,
    Red,
}

impl NoteColor {
    pub fn name(self) -> &'static str {
        match self {
            NoteColor::Green => "green",
            NoteColor::Blue => "blue",
            NoteColor::Red => "red",
        }
    }
}

/// The closed set of token types produced by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Plain text run (word, whitespace, or unannotated content).
    Text,
    /// Legacy bracket marker, written `(content)` or `[[/green]`.
    Bracket(Ink),
    /// Strong highlight.
    Highlight(Ink),
    /// Weak ("line") highlight, drawn as an underline.
    Underline(Ink),
    Bold,
    Strike,
    Box(Ink),
    /// Orange oval around the content.
    Oval,
    Ox(Ink),
    Arrow,
    SoftBackground,
    ClauseOpen(ClauseColor),
    ClauseClose(ClauseColor),
}

impl TokenKind {
    /// Stable kebab-case tag, used by snapshots and display collaborators.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Text => "text",
            TokenKind::Bracket(Ink::Green) => "bracket-green",
            TokenKind::Bracket(_) => "bracket-blue",
            TokenKind::Highlight(Ink::Red) => "highlight-red",
            TokenKind::Highlight(_) => "highlight-blue",
            TokenKind::Underline(Ink::Red) => "underline-red",
            TokenKind::Underline(_) => "underline-blue",
            TokenKind::Bold => "bold",
            TokenKind::Strike => "strike",
            TokenKind::Box(Ink::Green) => "box-green",
            TokenKind::Box(_) => "box-red",
            TokenKind::Oval => "oval-orange",
            TokenKind::Ox(Ink::Blue) => "ox-blue",
            TokenKind::Ox(_) => "ox-red",
            TokenKind::Arrow => "arrow",
            TokenKind::SoftBackground => "bg-soft",
            TokenKind::ClauseOpen(ClauseColor::Blue) => "clause-open-blue",
            TokenKind::ClauseOpen(ClauseColor::Green) => "clause-open-green",
            TokenKind::ClauseOpen(ClauseColor::Orange) => "clause-open-orange",
            TokenKind::ClauseOpen(ClauseColor::Purple) => "clause-open-purple",
            TokenKind::ClauseOpen(ClauseColor::Pink) => "clause-open-pink",
            TokenKind::ClauseClose(ClauseColor::Blue) => "clause-close-blue",
            TokenKind::ClauseClose(ClauseColor::Green) => "clause-close-green",
            TokenKind::ClauseClose(ClauseColor::Orange) => "clause-close-orange",
            TokenKind::ClauseClose(ClauseColor::Purple) => "clause-close-purple",
            TokenKind::ClauseClose(ClauseColor::Pink) => "clause-close-pink",
        }
    }

    pub fn is_clause(self) -> bool {
        matches!(self, TokenKind::ClauseOpen(_) | TokenKind::ClauseClose(_))
    }
}

/// The atomic unit of the annotation stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Unique within the sentence: `s{sentence}-t{position}`.
    pub id: String,
    /// Literal run to render. Clause tokens carry `[` or `]`.
    pub text: String,
    pub kind: TokenKind,
    /// Active clause background, assigned by the scope resolver only.
    pub bg: Option<Background>,
    pub note: Option<String>,
    pub note_color: Option<NoteColor>,
    /// Byte range of the source lexeme this token was produced from.
    pub span: Span,
}

impl Token {
    pub fn new(id: String, text: impl Into<String>, kind: TokenKind, span: Span) -> Self {
        Self {
            id,
            text: text.into(),
            kind,
            bg: None,
            note: None,
            note_color: None,
            span,
        }
    }
}
