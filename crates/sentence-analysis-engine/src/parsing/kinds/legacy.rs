/// Legacy parenthetical `(content)`, rendered as a blue bracket marker
/// between literal parentheses.
pub struct LegacyParen;

impl LegacyParen {
    pub const OPEN: char = '(';
    pub const CLOSE: char = ')';
}

/// Sequences that are consumed without producing tokens.
pub struct Divider;

impl Divider {
    /// Raw background escape left behind by older editors.
    pub const BG_ESCAPE: &'static str = "/ / bg";
    /// Legacy divider.
    pub const SLASH: &'static str = "/";
}

/// Chars that end a plain word run.
pub fn is_word_break(c: char) -> bool {
    c.is_whitespace() || matches!(c, '[' | ']' | '(' | ')' | '{' | '}' | '<' | '>' | '/')
}
