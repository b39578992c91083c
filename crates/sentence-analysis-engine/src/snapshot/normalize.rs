use crate::models::token::Token;

/// Stable view of a token for snapshots. Ids and spans are left out; they
/// are covered by the invariant checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSnap {
    pub text: String,
    pub kind: &'static str,
    pub bg: Option<&'static str>,
    pub note: Option<String>,
    pub note_color: Option<&'static str>,
}

pub fn normalize(tokens: &[Token]) -> Vec<TokenSnap> {
    tokens
        .iter()
        .map(|t| TokenSnap {
            text: t.text.clone(),
            kind: t.kind.name(),
            bg: t.bg.map(|bg| bg.class_name()),
            note: t.note.clone(),
            note_color: t.note_color.map(|c| c.name()),
        })
        .collect()
}

/// One line per token: `"text" kind [bg=..] [note=".."] [note-color=..]`.
pub fn render(snaps: &[TokenSnap]) -> String {
    snaps
        .iter()
        .map(|s| {
            let mut line = format!("{:?} {}", s.text, s.kind);
            if let Some(bg) = s.bg {
                line.push_str(&format!(" bg={bg}"));
            }
            if let Some(note) = &s.note {
                line.push_str(&format!(" note={note:?}"));
            }
            if let Some(color) = s.note_color {
                line.push_str(&format!(" note-color={color}"));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
