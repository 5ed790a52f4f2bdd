//! Tokenizer phase tests.

use eris::{tokenize, Error, Session, TokenKind, Tokenizer};
use pretty_assertions::assert_eq;

fn kinds_and_lexemes(source: &str) -> Vec<(TokenKind, &str)> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| (t.kind, t.lexeme))
        .collect()
}

#[test]
fn mixed_program_fragment() {
    let source = "// header\n12 /* inline\n comment */ \"a b\"\n  345";
    assert_eq!(
        kinds_and_lexemes(source),
        vec![
            (TokenKind::Number, "12"),
            (TokenKind::String, "\"a b\""),
            (TokenKind::Number, "345"),
            (TokenKind::Eof, "<EOF>"),
        ]
    );
}

#[test]
fn lines_follow_newlines_in_skipped_text() {
    let tokens = tokenize("1\n/* a\nb */ 2\n\"x\ny\" 3").unwrap();
    let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
    // The EOF token sits on the last line.
    assert_eq!(lines, vec![1, 3, 4, 5, 5]);
}

#[test]
fn pull_api_matches_collected_stream() {
    let source = " 1 \"two\" 3 ";
    let mut tokenizer = Tokenizer::new(source);
    let mut pulled = Vec::new();
    while tokenizer.has_more_tokens() {
        let token = tokenizer.next_token().unwrap();
        if token.is_eof() {
            break;
        }
        pulled.push(token);
    }
    assert!(tokenizer.is_at_end());
    assert!(tokenizer.next_token().unwrap().is_eof());

    let collected: Vec<_> = tokenize(source)
        .unwrap()
        .into_iter()
        .filter(|t| !t.is_eof())
        .collect();
    assert_eq!(pulled, collected);
}

#[test]
fn unterminated_comment_is_an_error() {
    let err = tokenize("1 /* never closed").unwrap_err();
    assert_eq!(err.line, 1);
    assert_eq!(err.ch, '/');
}

#[test]
fn session_literals_from_source() {
    let mut session = Session::new();
    let tokens = tokenize("10 \"ten\" 2147483648").unwrap();
    let values: Vec<_> = tokens.iter().filter_map(|t| session.literal(t)).collect();
    let texts: Vec<_> = values.iter().map(eris::Value::str).collect();
    assert_eq!(texts, vec!["10", "ten", "2147483648.0"]);
    assert_eq!(values[1].type_name(), "string");
    assert_eq!(values[2].type_name(), "double");
}

#[test]
fn bad_rule_pattern_converts_to_error() {
    fn build() -> Result<eris::RuleTable, Error> {
        Ok(eris::RuleTable::builder().token("(", TokenKind::Custom("PAREN")).build()?)
    }
    let err = build().unwrap_err();
    assert!(matches!(err, Error::Rule(ref rule) if rule.pattern == "("));
}
