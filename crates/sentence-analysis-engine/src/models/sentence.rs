use crate::{
    format::{RenderToken, format_tokens, select_display_tag},
    models::token::Token,
    parsing::parse_indexed,
    scope::{ScopeReport, resolve_scopes_with_report},
};

/// One analysed unit of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub id: String,
    /// 1-based display ordinal.
    pub number: usize,
    pub tags: Vec<String>,
    /// Scoped tokens in reading order.
    pub content_tokens: Vec<Token>,
    pub translation: String,
    /// Clause nesting diagnostics for `content_tokens`.
    pub scope: ScopeReport,
}

impl Sentence {
    /// Parses and scopes `raw` as the sentence at `index` (0-based).
    pub fn analyze(
        index: usize,
        raw: &str,
        translation: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        let (content_tokens, scope) = resolve_scopes_with_report(parse_indexed(index, raw));
        Self {
            id: format!("s{index}"),
            number: index + 1,
            tags,
            content_tokens,
            translation: translation.into(),
            scope,
        }
    }

    pub fn display_tag(&self) -> Option<&str> {
        select_display_tag(&self.tags)
    }

    pub fn render_tokens(&self) -> Vec<RenderToken<'_>> {
        format_tokens(&self.content_tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::token::{Background, TokenKind};

    #[test]
    fn analyze_numbers_and_scopes() {
        let sentence = Sentence::analyze(
            2,
            "<<{It rains}>>",
            "비가 온다",
            vec!["어휘".into(), "주제문".into()],
        );
        assert_eq!(sentence.id, "s2");
        assert_eq!(sentence.number, 3);
        assert_eq!(sentence.translation, "비가 온다");
        assert_eq!(sentence.display_tag(), Some("주제문"));
        assert!(sentence.scope.is_balanced());
        assert!(
            sentence
                .content_tokens
                .iter()
                .all(|t| t.bg == Some(Background::ClauseGreen))
        );
        assert!(sentence.content_tokens.iter().all(|t| t.id.starts_with("s2-")));
    }

    #[test]
    fn empty_sentence() {
        let sentence = Sentence::analyze(0, "", "", vec![]);
        assert!(sentence.content_tokens.is_empty());
        assert_eq!(sentence.display_tag(), None);
        assert!(sentence.render_tokens().is_empty());
    }

    #[test]
    fn render_tokens_follow_content_order() {
        let sentence = Sentence::analyze(0, "(a) b", "", vec![]);
        let glyphs: Vec<_> = sentence.render_tokens().iter().map(|r| r.glyph).collect();
        assert_eq!(glyphs, vec!["(", "a", ")", " ", "b"]);
        assert_eq!(sentence.content_tokens[1].kind, TokenKind::Bracket(crate::Ink::Blue));
    }
}
