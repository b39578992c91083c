use crate::models::token::{Background, Token, TokenKind};

/// Panics if `tokens` is not a well-formed scoped parse of `raw`.
pub fn check(raw: &str, tokens: &[Token]) {
    let n = raw.len();
    let mut prev_end = 0;
    let mut stack: Vec<Background> = Vec::new();

    for (position, t) in tokens.iter().enumerate() {
        assert!(
            t.span.start <= t.span.end && t.span.end <= n,
            "token span out of bounds: {:?} (raw len: {})",
            t.span,
            n
        );
        assert!(
            t.span.start >= prev_end,
            "token spans out of order at {}: {:?}",
            t.id,
            t.span
        );
        prev_end = t.span.end;

        assert!(
            t.id.ends_with(&format!("-t{position}")),
            "token id {} does not match position {}",
            t.id,
            position
        );

        let source = t.span.slice(raw).unwrap_or_else(|| {
            panic!("token span {:?} not on char boundaries", t.span);
        });
        match t.kind {
            TokenKind::ClauseOpen(color) => {
                assert_eq!(t.text, "[", "clause open {} must render as [", t.id);
                stack.push(color.background());
            }
            TokenKind::ClauseClose(_) => {
                assert_eq!(t.text, "]", "clause close {} must render as ]", t.id);
            }
            _ => {}
        }
        if !t.kind.is_clause() {
            assert!(
                source.contains(t.text.as_str()),
                "token text {:?} not found in its source {:?}",
                t.text,
                source
            );
        }

        assert_eq!(
            t.bg,
            stack.last().copied(),
            "token {} background does not match the open clause stack",
            t.id
        );
        if matches!(t.kind, TokenKind::ClauseClose(_)) {
            stack.pop();
        }
    }
}
