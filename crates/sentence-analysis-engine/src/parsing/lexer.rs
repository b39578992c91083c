use super::{
    cursor::Cursor,
    kinds::{Annotation, Clause, ClauseEdge, Divider, LegacyParen, legacy::is_word_break},
    span::Span,
};

/// A raw lexeme with byte spans into the sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexeme {
    /// One of the ten clause delimiters.
    Clause { edge: ClauseEdge, span: Span },
    /// `[content/f1/.../fN]`.
    Annotation {
        /// Full span including brackets.
        full: Span,
        content: Span,
        /// Spans of the modifier fields, without separators.
        fields: Vec<Span>,
    },
    /// Legacy `(content)`.
    Paren { full: Span, inner: Span },
    /// `/ / bg` or a bare `/`; produces no token.
    Dropped(Span),
    Whitespace(Span),
    Word(Span),
    /// A single char no other rule accepts, such as an unmatched bracket.
    Stray(Span),
}

/// Splits a raw annotated sentence into lexemes.
///
/// Every byte of the input belongs to exactly one lexeme, dropped ones
/// included. Rules are tried in precedence order at each position:
/// clause delimiters (longest first), the `/ / bg` escape, annotations,
/// legacy parentheses, the bare divider, whitespace, words, and finally a
/// single stray char. The last rule always matches, so lexing never fails.
pub fn lex(s: &str) -> Vec<Lexeme> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];

    while !cur.eof() {
        let lexeme = try_lex_clause(&mut cur)
            .or_else(|| try_lex_bg_escape(&mut cur))
            .or_else(|| try_lex_annotation(&mut cur))
            .or_else(|| try_lex_paren(&mut cur))
            .or_else(|| try_lex_divider(&mut cur))
            .or_else(|| try_lex_run(&mut cur))
            .or_else(|| lex_stray(&mut cur));
        match lexeme {
            Some(lexeme) => out.push(lexeme),
            None => break,
        }
    }

    out
}

fn try_lex_clause(cur: &mut Cursor<'_>) -> Option<Lexeme> {
    let start = cur.pos();
    Clause::DELIMITERS
        .iter()
        .find(|(lit, _)| cur.eat(lit))
        .map(|(_, edge)| Lexeme::Clause {
            edge: *edge,
            span: cur.span_from(start),
        })
}

fn try_lex_bg_escape(cur: &mut Cursor<'_>) -> Option<Lexeme> {
    let start = cur.pos();
    cur.eat(Divider::BG_ESCAPE)
        .then(|| Lexeme::Dropped(cur.span_from(start)))
}

/// Attempts `[content(/field){0,5}]` at the current position.
///
/// On failure the cursor is restored.
fn try_lex_annotation(cur: &mut Cursor<'_>) -> Option<Lexeme> {
    if cur.peek() != Some(Annotation::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // [
    let content_start = cur.pos();

    if !eat_bracket_glyph(cur) && cur.eat_while(|c| !Annotation::is_reserved(c)) == 0 {
        *cur = saved;
        return None;
    }
    let content = cur.span_from(content_start);

    let mut fields = vec![];
    while cur.peek() == Some(Annotation::FIELD_SEP) {
        if fields.len() == Annotation::MAX_FIELDS {
            *cur = saved;
            return None;
        }
        cur.bump(); // /
        let field_start = cur.pos();
        cur.eat_while(|c| !Annotation::is_reserved(c));
        fields.push(cur.span_from(field_start));
    }

    if cur.peek() != Some(Annotation::CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // ]

    Some(Lexeme::Annotation {
        full: cur.span_from(start),
        content,
        fields,
    })
}

/// Consumes a space-padded lone `[` or `]` used as annotation content, but
/// only when a field separator or the closing bracket follows it.
fn eat_bracket_glyph(cur: &mut Cursor<'_>) -> bool {
    let mut probe = cur.clone();
    probe.eat_while(|c| c == ' ');
    if !probe.peek().is_some_and(Annotation::is_bracket_glyph) {
        return false;
    }
    probe.bump();
    probe.eat_while(|c| c == ' ');
    if matches!(probe.peek(), Some(Annotation::FIELD_SEP | Annotation::CLOSE)) {
        *cur = probe;
        true
    } else {
        false
    }
}

fn try_lex_paren(cur: &mut Cursor<'_>) -> Option<Lexeme> {
    if cur.peek() != Some(LegacyParen::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // (
    let inner_start = cur.pos();
    let inner_len = cur.eat_while(|c| c != LegacyParen::OPEN && c != LegacyParen::CLOSE);
    let inner = cur.span_from(inner_start);

    if inner_len == 0 || cur.peek() != Some(LegacyParen::CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // )

    Some(Lexeme::Paren {
        full: cur.span_from(start),
        inner,
    })
}

fn try_lex_divider(cur: &mut Cursor<'_>) -> Option<Lexeme> {
    let start = cur.pos();
    cur.eat(Divider::SLASH)
        .then(|| Lexeme::Dropped(cur.span_from(start)))
}

fn try_lex_run(cur: &mut Cursor<'_>) -> Option<Lexeme> {
    let start = cur.pos();
    if cur.eat_while(char::is_whitespace) > 0 {
        return Some(Lexeme::Whitespace(cur.span_from(start)));
    }
    if cur.eat_while(|c| !is_word_break(c)) > 0 {
        return Some(Lexeme::Word(cur.span_from(start)));
    }
    None
}

fn lex_stray(cur: &mut Cursor<'_>) -> Option<Lexeme> {
    let start = cur.pos();
    cur.bump()?;
    Some(Lexeme::Stray(cur.span_from(start)))
}
