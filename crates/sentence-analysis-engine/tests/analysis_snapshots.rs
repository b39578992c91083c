use pretty_assertions::assert_eq;
use rstest::rstest;
use sentence_analysis_engine::{
    Background, Sentence, TokenKind, analyze, parse,
    snapshot::{self, normalize, render},
};

fn assert_pipeline(raw: &str) -> String {
    let tokens = analyze(raw);
    snapshot::invariants(raw, &tokens);
    render(&normalize(&tokens))
}

#[test]
fn snapshot_single_clause() {
    insta::assert_snapshot!(assert_pipeline("The (({cat})) sat."), @r#"
    "The" text
    " " text
    "[" clause-open-blue bg=bg-clause-blue
    "cat" text bg=bg-clause-blue
    "]" clause-close-blue bg=bg-clause-blue
    " " text
    "sat." text
    "#);
}

#[test]
fn snapshot_mixed_sentence() {
    let raw = "[[{The [dog/주어/red]}]] <<{barked [loudly/M/blue/line]}>> (at night)/ / bg [ran/V/verb].";
    insta::assert_snapshot!(assert_pipeline(raw), @r#"
    "[" clause-open-purple bg=bg-clause-purple
    "The" text bg=bg-clause-purple
    " " text bg=bg-clause-purple
    "dog" highlight-red bg=bg-clause-purple note="주어" note-color=red
    "]" clause-close-purple bg=bg-clause-purple
    " " text
    "[" clause-open-green bg=bg-clause-green
    "barked" text bg=bg-clause-green
    " " text bg=bg-clause-green
    "loudly" underline-blue bg=bg-clause-green note="M" note-color=blue
    "]" clause-close-green bg=bg-clause-green
    " " text
    "(" text
    "at night" bracket-blue
    ")" text
    " " text
    "ran" text note="V" note-color=green
    "." text
    "#);
}

#[test]
fn snapshot_nested_and_unbalanced() {
    insta::assert_snapshot!(assert_pipeline("((({a (({b}))}))) }}"), @r#"
    "[" clause-open-pink bg=bg-clause-pink
    "a" text bg=bg-clause-pink
    " " text bg=bg-clause-pink
    "[" clause-open-blue bg=bg-clause-blue
    "b" text bg=bg-clause-blue
    "]" clause-close-blue bg=bg-clause-blue
    "]" clause-close-pink bg=bg-clause-pink
    " " text
    "]" clause-close-orange
    "#);
}

#[test]
fn snapshot_shapes() {
    let raw = "[A/box] [B/green/box] [C/oval] [D/ox/blue] [E/arrow] [F/bg] [G/bold] [H/strike]";
    insta::assert_snapshot!(assert_pipeline(raw), @r#"
    "A" box-red
    " " text
    "B" box-green
    " " text
    "C" oval-orange
    " " text
    "D" ox-blue
    " " text
    "E" arrow
    " " text
    "F" bg-soft
    " " text
    "G" bold
    " " text
    "H" strike
    "#);
}

/// Inputs without annotations or dividers reconstruct exactly.
#[rstest]
#[case("plain words only")]
#[case("(old style) and (another)")]
#[case("stray ] and [ and < and >")]
#[case("  leading and trailing  ")]
#[case("한국어 문장 (괄호)")]
fn text_reconstructs_input(#[case] raw: &str) {
    let rebuilt: String = parse(raw).into_iter().map(|t| t.text).collect();
    assert_eq!(rebuilt, raw);
}

#[test]
fn text_reconstructs_with_dividers_dropped_and_clauses_as_brackets() {
    let rebuilt: String = parse("x (({y})) / z / / bg!")
        .into_iter()
        .map(|t| t.text)
        .collect();
    assert_eq!(rebuilt, "x [y]  z !");
}

/// Noisy, hand-authored markup never panics and always satisfies the invariants.
#[rstest]
#[case("")]
#[case("[[[")]
#[case("]]]")]
#[case("{{{{")]
#[case("}}}}")]
#[case("((((")]
#[case("(((x)))")]
#[case("<<<{a}>>>")]
#[case("/ / bg/ / bg")]
#[case("[a/b/c/d/e/f/g]")]
#[case("[x/(X) -> 병렬2/red]")]
#[case("[ /blue]")]
#[case("[]")]
#[case("[[/green] 주어 []]")]
#[case("}))(({")]
fn noisy_input_is_total(#[case] raw: &str) {
    let tokens = analyze(raw);
    snapshot::invariants(raw, &tokens);
}

#[test]
fn legacy_paren_produces_exactly_three_tokens() {
    let tokens = analyze("(old style)");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].text, "(");
    assert_eq!(tokens[1].text, "old style");
    assert_eq!(tokens[1].kind.name(), "bracket-blue");
    assert_eq!(tokens[2].text, ")");
}

#[test]
fn depth_n_uses_innermost_and_restores_outer() {
    let raw = "{{ a <<{ b [[{ c }]] d }>> e }}";
    let tokens = analyze(raw);
    snapshot::invariants(raw, &tokens);

    let bg_of = |text: &str| tokens.iter().find(|t| t.text == text).and_then(|t| t.bg);
    assert_eq!(bg_of("a"), Some(Background::ClauseOrange));
    assert_eq!(bg_of("b"), Some(Background::ClauseGreen));
    assert_eq!(bg_of("c"), Some(Background::ClausePurple));
    assert_eq!(bg_of("d"), Some(Background::ClauseGreen));
    assert_eq!(bg_of("e"), Some(Background::ClauseOrange));
}

#[test]
fn tokens_between_balanced_clauses_all_have_a_background() {
    let tokens = analyze("out (({in <<{deeper}>> in})) out");
    let mut depth = 0usize;
    for t in &tokens {
        if matches!(t.kind, TokenKind::ClauseOpen(_)) {
            depth += 1;
        }
        assert_eq!(t.bg.is_some(), depth > 0, "token {:?}", t.text);
        if matches!(t.kind, TokenKind::ClauseClose(_)) {
            depth -= 1;
        }
    }
}

#[test]
fn sentences_are_independent() {
    let a = Sentence::analyze(0, "{{open", "", vec![]);
    let b = Sentence::analyze(1, "closed", "", vec![]);
    assert!(!a.scope.is_balanced());
    assert!(b.content_tokens.iter().all(|t| t.bg.is_none()));
}
