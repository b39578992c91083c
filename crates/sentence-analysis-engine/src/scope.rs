//! # Background Scope Resolution
//!
//! Assigns each token the background of the innermost open clause.
//!
//! Clauses nest as a single stack across all colours. The order in which a
//! delimiter is assigned and the stack mutated depends on its side:
//!
//! - **open**: push first, then assign, so the `[` sits inside its own span
//! - **close**: assign first, then pop, so the `]` is the last token inside
//!
//! Unbalanced input is tolerated. A close on an empty stack pops nothing, and
//! opens left at the end of the sentence are reported but not auto-closed.

use crate::models::token::{Background, Token, TokenKind};

/// Nesting diagnostics for one token sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopeReport {
    /// Close delimiters met with an empty stack.
    pub unmatched_closes: usize,
    /// Opens still on the stack after the last token.
    pub unclosed_opens: usize,
}

impl ScopeReport {
    pub fn is_balanced(&self) -> bool {
        self.unmatched_closes == 0 && self.unclosed_opens == 0
    }
}

/// Annotates every token with the active clause background.
///
/// Preserves the count and order of tokens.
pub fn resolve_scopes(tokens: Vec<Token>) -> Vec<Token> {
    resolve_scopes_with_report(tokens).0
}

/// Like [`resolve_scopes`], also returning nesting diagnostics.
pub fn resolve_scopes_with_report(mut tokens: Vec<Token>) -> (Vec<Token>, ScopeReport) {
    let mut stack: Vec<Background> = Vec::new();
    let mut report = ScopeReport::default();

    for token in &mut tokens {
        match token.kind {
            TokenKind::ClauseOpen(color) => {
                stack.push(color.background());
                token.bg = stack.last().copied();
            }
            TokenKind::ClauseClose(_) => {
                token.bg = stack.last().copied();
                if stack.pop().is_none() {
                    report.unmatched_closes += 1;
                }
            }
            _ => token.bg = stack.last().copied(),
        }
    }
    report.unclosed_opens = stack.len();

    if !report.is_balanced() {
        log::warn!(
            "Unbalanced clause nesting near {}: {} unmatched close(s), {} unclosed open(s)",
            tokens.first().map(|t| t.id.as_str()).unwrap_or("<empty>"),
            report.unmatched_closes,
            report.unclosed_opens
        );
    }

    (tokens, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse;
    use pretty_assertions::assert_eq;

    fn backgrounds(raw: &str) -> Vec<(String, Option<Background>)> {
        resolve_scopes(parse(raw))
            .into_iter()
            .map(|t| (t.text, t.bg))
            .collect()
    }

    #[test]
    fn single_clause_includes_both_brackets() {
        let blue = Some(Background::ClauseBlue);
        assert_eq!(
            backgrounds("The (({cat})) sat."),
            vec![
                ("The".into(), None),
                (" ".into(), None),
                ("[".into(), blue),
                ("cat".into(), blue),
                ("]".into(), blue),
                (" ".into(), None),
                ("sat.".into(), None),
            ]
        );
    }

    #[test]
    fn nested_clauses_use_innermost_background() {
        let green = Some(Background::ClauseGreen);
        let pink = Some(Background::ClausePink);
        assert_eq!(
            backgrounds("<<{a ((({b})))c}>>"),
            vec![
                ("[".into(), green),
                ("a".into(), green),
                (" ".into(), green),
                ("[".into(), pink),
                ("b".into(), pink),
                ("]".into(), pink),
                ("c".into(), green),
                ("]".into(), green),
            ]
        );
    }

    #[test]
    fn three_levels_restore_outer_background_after_each_close() {
        let tokens = resolve_scopes(parse("{{x [[{y (({z})) y2}]] x2}}"));
        let bg_of = |text: &str| tokens.iter().find(|t| t.text == text).and_then(|t| t.bg);
        assert_eq!(bg_of("x"), Some(Background::ClauseOrange));
        assert_eq!(bg_of("y"), Some(Background::ClausePurple));
        assert_eq!(bg_of("z"), Some(Background::ClauseBlue));
        assert_eq!(bg_of("y2"), Some(Background::ClausePurple));
        assert_eq!(bg_of("x2"), Some(Background::ClauseOrange));
    }

    #[test]
    fn overlapping_colours_nest_as_one_stack() {
        // Closes pop the innermost span, whatever colour the close names.
        let (tokens, report) = resolve_scopes_with_report(parse("(({a <<{b}))c}>>"));
        let bgs: Vec<_> = tokens.iter().map(|t| t.bg).collect();
        assert_eq!(
            bgs,
            vec![
                Some(Background::ClauseBlue),
                Some(Background::ClauseBlue),
                Some(Background::ClauseBlue),
                Some(Background::ClauseGreen),
                Some(Background::ClauseGreen),
                Some(Background::ClauseGreen),
                Some(Background::ClauseBlue),
                Some(Background::ClauseBlue),
            ]
        );
        assert!(report.is_balanced());
    }

    #[test]
    fn unmatched_close_is_a_noop() {
        let (tokens, report) = resolve_scopes_with_report(parse("}}"));
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].bg, None);
        assert_eq!(report.unmatched_closes, 1);
        assert_eq!(report.unclosed_opens, 0);
    }

    #[test]
    fn unclosed_open_leaves_residual_scope() {
        let (tokens, report) = resolve_scopes_with_report(parse("{{open end"));
        assert!(tokens.iter().all(|t| t.bg == Some(Background::ClauseOrange)));
        assert_eq!(report.unclosed_opens, 1);
        assert!(!report.is_balanced());
    }

    #[test]
    fn preserves_count_order_and_ids() {
        let parsed = parse("[[{a}]] b }}}");
        let resolved = resolve_scopes(parsed.clone());
        assert_eq!(parsed.len(), resolved.len());
        for (before, after) in parsed.iter().zip(&resolved) {
            assert_eq!(before.id, after.id);
            assert_eq!(before.text, after.text);
            assert_eq!(before.kind, after.kind);
        }
    }

    #[test]
    fn resolving_twice_is_stable() {
        let once = resolve_scopes(parse("(({a {{b}} c}))"));
        let twice = resolve_scopes(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_sequence() {
        let (tokens, report) = resolve_scopes_with_report(vec![]);
        assert!(tokens.is_empty());
        assert!(report.is_balanced());
    }
}
