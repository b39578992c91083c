/// A byte range `[start, end)` into the raw sentence.
///
/// Lexemes store spans rather than copied text; slicing the raw input with a
/// span reproduces the exact source of the lexeme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `s` with this span. Returns `None` when out of bounds or not on
    /// a char boundary.
    pub fn slice(self, s: &str) -> Option<&str> {
        s.get(self.start..self.end)
    }
}
