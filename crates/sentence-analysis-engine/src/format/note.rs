//! Segmentation of token notes into plain runs and coloured markers.

use std::sync::OnceLock;

use regex::Regex;

use super::style::{Swatch, Weight};

/// A recognised marker inside a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteMark {
    /// `(X)`
    Wrong,
    /// `(O)`
    Right,
    /// `≠`
    NotEqual,
    /// `=`
    Equal,
    /// `->`
    Forward,
    /// `<-`
    Backward,
    /// `병렬` followed by optional digits.
    Parallel,
}

impl NoteMark {
    pub fn swatch(self) -> Swatch {
        match self {
            NoteMark::Wrong | NoteMark::NotEqual => Swatch::Red,
            NoteMark::Right | NoteMark::Equal => Swatch::Blue,
            NoteMark::Forward | NoteMark::Backward => Swatch::Green,
            NoteMark::Parallel => Swatch::Purple,
        }
    }

    pub fn weight(self) -> Weight {
        match self {
            NoteMark::Wrong | NoteMark::Right | NoteMark::Parallel => Weight::Bold,
            _ => Weight::Normal,
        }
    }
}

/// Literal note markers. `병렬N` is matched by [`PARALLEL_PREFIX`] instead.
pub const NOTE_MARKS: &[(&str, NoteMark)] = &[
    ("(X)", NoteMark::Wrong),
    ("(O)", NoteMark::Right),
    ("≠", NoteMark::NotEqual),
    ("=", NoteMark::Equal),
    ("->", NoteMark::Forward),
    ("<-", NoteMark::Backward),
];

pub const PARALLEL_PREFIX: &str = "병렬";

/// One run of a segmented note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSegment {
    pub text: String,
    /// `None` for plain note text.
    pub mark: Option<NoteMark>,
}

impl NoteSegment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            mark: None,
        }
    }
}

fn marker_regex() -> &'static Regex {
    static NOTE_MARK_REGEX: OnceLock<Regex> = OnceLock::new();
    NOTE_MARK_REGEX.get_or_init(|| {
        let mut alternatives: Vec<String> = NOTE_MARKS
            .iter()
            .map(|(literal, _)| regex::escape(literal))
            .collect();
        alternatives.push(format!(r"{}\d*", regex::escape(PARALLEL_PREFIX)));
        Regex::new(&alternatives.join("|")).expect("Invalid note marker regex")
    })
}

fn mark_for(literal: &str) -> NoteMark {
    NOTE_MARKS
        .iter()
        .find(|(l, _)| *l == literal)
        .map(|(_, mark)| *mark)
        .unwrap_or(NoteMark::Parallel)
}

/// Splits a note into plain runs and marker segments, in order.
///
/// Concatenating the segment texts reproduces `note`.
pub fn split_note(note: &str) -> Vec<NoteSegment> {
    let mut out = vec![];
    let mut last = 0;

    for m in marker_regex().find_iter(note) {
        if m.start() > last {
            out.push(NoteSegment::plain(&note[last..m.start()]));
        }
        out.push(NoteSegment {
            text: m.as_str().to_string(),
            mark: Some(mark_for(m.as_str())),
        });
        last = m.end();
    }

    if last < note.len() {
        out.push(NoteSegment::plain(&note[last..]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn marks(note: &str) -> Vec<(String, Option<NoteMark>)> {
        split_note(note)
            .into_iter()
            .map(|s| (s.text, s.mark))
            .collect()
    }

    #[rstest]
    #[case("(X)", NoteMark::Wrong)]
    #[case("(O)", NoteMark::Right)]
    #[case("≠", NoteMark::NotEqual)]
    #[case("=", NoteMark::Equal)]
    #[case("->", NoteMark::Forward)]
    #[case("<-", NoteMark::Backward)]
    #[case("병렬", NoteMark::Parallel)]
    #[case("병렬12", NoteMark::Parallel)]
    fn single_marker(#[case] note: &str, #[case] mark: NoteMark) {
        assert_eq!(marks(note), vec![(note.to_string(), Some(mark))]);
    }

    #[test]
    fn plain_note_is_one_segment() {
        assert_eq!(marks("주어"), vec![("주어".to_string(), None)]);
    }

    #[test]
    fn empty_note_has_no_segments() {
        assert!(split_note("").is_empty());
    }

    #[test]
    fn mixed_note_keeps_order() {
        assert_eq!(
            marks("to부정사(X) -> 동명사(O)"),
            vec![
                ("to부정사".to_string(), None),
                ("(X)".to_string(), Some(NoteMark::Wrong)),
                (" ".to_string(), None),
                ("->".to_string(), Some(NoteMark::Forward)),
                (" 동명사".to_string(), None),
                ("(O)".to_string(), Some(NoteMark::Right)),
            ]
        );
    }

    #[test]
    fn parallel_digits_stay_with_the_marker() {
        assert_eq!(
            marks("병렬2 구조"),
            vec![
                ("병렬2".to_string(), Some(NoteMark::Parallel)),
                (" 구조".to_string(), None),
            ]
        );
    }

    #[test]
    fn segments_reconstruct_the_note() {
        let note = "S≠V, O=C <-병렬3(X)";
        let rebuilt: String = split_note(note).into_iter().map(|s| s.text).collect();
        assert_eq!(rebuilt, note);
    }

    #[test]
    fn mark_treatments() {
        assert_eq!(NoteMark::Wrong.swatch(), Swatch::Red);
        assert_eq!(NoteMark::Parallel.weight(), Weight::Bold);
        assert_eq!(NoteMark::Equal.weight(), Weight::Normal);
    }
}
