use crate::models::token::{Background, ClauseColor, Ink, TokenKind};

/// Palette entry used by the presentation contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swatch {
    Blue,
    Green,
    Red,
    Orange,
    Purple,
    Pink,
    Gray,
}

impl From<Ink> for Swatch {
    fn from(ink: Ink) -> Self {
        match ink {
            Ink::Blue => Swatch::Blue,
            Ink::Green => Swatch::Green,
            Ink::Red => Swatch::Red,
        }
    }
}

impl From<ClauseColor> for Swatch {
    fn from(color: ClauseColor) -> Self {
        match color {
            ClauseColor::Blue => Swatch::Blue,
            ClauseColor::Green => Swatch::Green,
            ClauseColor::Orange => Swatch::Orange,
            ClauseColor::Purple => Swatch::Purple,
            ClauseColor::Pink => Swatch::Pink,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Weight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Decoration {
    #[default]
    None,
    Underline(Swatch),
    /// Marker-pen stroke in the ink colour behind the text.
    Marker(Swatch),
    Strike,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Border {
    #[default]
    None,
    Box(Swatch),
    Oval(Swatch),
    /// O/X grading mark drawn beside the text.
    Ox(Swatch),
}

/// Presentation attributes for one token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenStyle {
    pub color: Option<Swatch>,
    pub weight: Weight,
    pub decoration: Decoration,
    pub border: Border,
    pub background: Option<Background>,
}

/// Looks up the style for a token kind under an optional clause background.
///
/// A clause background wins over the token-local soft background.
pub fn style_for(kind: TokenKind, bg: Option<Background>) -> TokenStyle {
    let base = base_style(kind);
    TokenStyle {
        background: bg.or(base.background),
        ..base
    }
}

fn base_style(kind: TokenKind) -> TokenStyle {
    let plain = TokenStyle::default();
    match kind {
        TokenKind::Text => plain,
        TokenKind::Bracket(ink) => TokenStyle {
            color: Some(ink.into()),
            weight: Weight::Bold,
            ..plain
        },
        TokenKind::Highlight(ink) => TokenStyle {
            color: Some(ink.into()),
            weight: Weight::Bold,
            decoration: Decoration::Marker(ink.into()),
            ..plain
        },
        TokenKind::Ox(ink) => TokenStyle {
            color: Some(ink.into()),
            border: Border::Ox(ink.into()),
            ..plain
        },
        TokenKind::Underline(ink) => TokenStyle {
            color: Some(ink.into()),
            decoration: Decoration::Underline(ink.into()),
            ..plain
        },
        TokenKind::Bold => TokenStyle {
            weight: Weight::Bold,
            ..plain
        },
        TokenKind::Strike => TokenStyle {
            color: Some(Swatch::Gray),
            decoration: Decoration::Strike,
            ..plain
        },
        TokenKind::Box(ink) => TokenStyle {
            border: Border::Box(ink.into()),
            ..plain
        },
        TokenKind::Oval => TokenStyle {
            border: Border::Oval(Swatch::Orange),
            ..plain
        },
        TokenKind::Arrow => TokenStyle {
            color: Some(Swatch::Gray),
            weight: Weight::Bold,
            ..plain
        },
        TokenKind::SoftBackground => TokenStyle {
            background: Some(Background::SoftGray),
            ..plain
        },
        TokenKind::ClauseOpen(color) | TokenKind::ClauseClose(color) => TokenStyle {
            color: Some(color.into()),
            weight: Weight::Bold,
            ..plain
        },
    }
}
