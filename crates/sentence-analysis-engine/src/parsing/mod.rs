//! # Annotation Parsing
//!
//! Turns a raw annotated sentence into a flat, ordered list of [`Token`]s.
//!
//! ## Architecture
//!
//! Parsing has two stages:
//!
//! ```text
//! raw &str → lexer::lex → Vec<Lexeme> → parse → Vec<Token>
//!            (cursor, precedence)      (decision table, legacy rewrites)
//! ```
//!
//! The lexer only finds boundaries. Every byte lands in exactly one lexeme.
//! The token stage resolves annotations through the decision table in
//! [`annotation`], expands `(content)` into three tokens, and drops `/` and
//! `/ / bg`.
//!
//! ## Modules
//!
//! - **`span`**: byte ranges into the raw sentence
//! - **`cursor`**: char-aware scanning cursor
//! - **`kinds`**: delimiter constants (clauses, annotations, legacy forms)
//! - **`lexer`**: `lex()` with `try_lex_*` helpers in precedence order
//! - **`annotation`**: the ordered modifier decision table
//!
//! ## Error Policy
//!
//! Parsing is total. Malformed markup degrades to plain text tokens and
//! never fails the sentence.

pub mod annotation;
pub mod cursor;
pub mod kinds;
pub mod lexer;
pub mod span;

use crate::models::token::{Ink, Token, TokenKind};

use kinds::LegacyParen;
use lexer::{Lexeme, lex};
use span::Span;

/// Parses a raw sentence as sentence index 0.
pub fn parse(raw: &str) -> Vec<Token> {
    parse_indexed(0, raw)
}

/// Parses a raw sentence. Token ids are scoped to `sentence`.
///
/// Tokens come back without backgrounds; see [`crate::scope::resolve_scopes`].
pub fn parse_indexed(sentence: usize, raw: &str) -> Vec<Token> {
    let mut out = TokenSink::new(sentence);

    for lexeme in lex(raw) {
        match lexeme {
            Lexeme::Clause { edge, span } => {
                out.push(edge.glyph(), edge.kind(), span);
            }
            Lexeme::Annotation {
                full,
                content,
                fields,
            } => {
                let content = slice(raw, content);
                let fields: Vec<&str> = fields.iter().map(|f| slice(raw, *f)).collect();
                let resolved = annotation::resolve(content, &fields);
                let text = match resolved.kind {
                    TokenKind::Bracket(_) => content.trim(),
                    _ => content,
                };
                let token = out.push(text, resolved.kind, full);
                token.note = resolved.note;
                token.note_color = resolved.note_color;
            }
            Lexeme::Paren { full, inner } => {
                let open_len = LegacyParen::OPEN.len_utf8();
                let close_len = LegacyParen::CLOSE.len_utf8();
                out.push(
                    LegacyParen::OPEN.to_string(),
                    TokenKind::Text,
                    Span::new(full.start, full.start + open_len),
                );
                out.push(slice(raw, inner), TokenKind::Bracket(Ink::Blue), inner);
                out.push(
                    LegacyParen::CLOSE.to_string(),
                    TokenKind::Text,
                    Span::new(full.end - close_len, full.end),
                );
            }
            Lexeme::Dropped(_) => {}
            Lexeme::Whitespace(span) | Lexeme::Word(span) | Lexeme::Stray(span) => {
                out.push(slice(raw, span), TokenKind::Text, span);
            }
        }
    }

    out.finish()
}

/// Spans produced by the lexer always lie on char boundaries of `raw`.
fn slice(raw: &str, span: Span) -> &str {
    span.slice(raw).unwrap_or_default()
}

/// Accumulates tokens and assigns positional ids.
struct TokenSink {
    sentence: usize,
    tokens: Vec<Token>,
}

impl TokenSink {
    fn new(sentence: usize) -> Self {
        Self {
            sentence,
            tokens: vec![],
        }
    }

    fn push(&mut self, text: impl Into<String>, kind: TokenKind, span: Span) -> &mut Token {
        let id = format!("s{}-t{}", self.sentence, self.tokens.len());
        self.tokens.push(Token::new(id, text, kind, span));
        let last = self.tokens.len() - 1;
        &mut self.tokens[last]
    }

    fn finish(self) -> Vec<Token> {
        self.tokens
    }
}
