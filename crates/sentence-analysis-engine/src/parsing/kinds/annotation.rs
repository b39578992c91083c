/// Bracketed annotation `[content/field/field/...]`.
pub struct Annotation;

impl Annotation {
    pub const OPEN: char = '[';
    pub const CLOSE: char = ']';
    pub const FIELD_SEP: char = '/';
    /// At most this many modifier fields may follow the content.
    pub const MAX_FIELDS: usize = 5;

    /// Chars that may not appear inside content or fields.
    pub fn is_reserved(c: char) -> bool {
        matches!(c, '[' | ']' | '/')
    }

    /// A lone bracket glyph used as content, e.g. `[[/green]`.
    pub fn is_bracket_glyph(c: char) -> bool {
        c == Self::OPEN || c == Self::CLOSE
    }
}
