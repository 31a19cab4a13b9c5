use mypl::parser::token::RESERVED_WORDS;
use mypl::parser::{ErrorKind, Lexer, SourceLocation, Token, TokenKind};

fn tokens(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize().expect("lexing failed")
}

fn kinds(source: &str) -> Vec<TokenKind> {
    tokens(source).into_iter().map(|t| t.kind).collect()
}

fn lex_error(source: &str) -> (String, usize, usize) {
    let err = Lexer::new(source)
        .tokenize()
        .expect_err("expected a lexical error");
    assert_eq!(err.kind, ErrorKind::Lexer);
    (err.message.clone(), err.line(), err.column())
}

#[test]
fn test_every_reserved_word_has_its_kind() {
    for (word, kind) in RESERVED_WORDS {
        let lexed = tokens(word);
        assert_eq!(lexed.len(), 2, "{word}");
        assert_eq!(lexed[0].kind, *kind, "{word}");
        assert_eq!(lexed[0].lexeme, *word);
    }
}

#[test]
fn test_near_reserved_words_are_identifiers() {
    for word in ["types", "Fun", "end_", "iff", "x1", "neg2", "TRUE", "nil_node"] {
        let lexed = tokens(word);
        assert_eq!(lexed[0].kind, TokenKind::Id, "{word}");
        assert_eq!(lexed[0].lexeme, word);
    }
}

#[test]
fn test_comparison_disambiguation() {
    use TokenKind::*;
    assert_eq!(kinds("<"), vec![Less, Eos]);
    assert_eq!(kinds("<="), vec![LessEqual, Eos]);
    assert_eq!(kinds("<=="), vec![LessEqual, Assign, Eos]);
    assert_eq!(kinds(">= > =="), vec![GreaterEqual, Greater, Equal, Eos]);
    assert_eq!(kinds("a!=b"), vec![Id, NotEqual, Id, Eos]);
    assert_eq!(kinds("==="), vec![Equal, Assign, Eos]);
}

#[test]
fn test_positions_are_one_based() {
    let lexed = tokens("  x\ny  = 1\n\n   z");
    let locs: Vec<(usize, usize)> = lexed.iter().map(|t| (t.line(), t.column())).collect();
    assert_eq!(locs, vec![(1, 3), (2, 1), (2, 4), (2, 6), (4, 4), (4, 5)]);
}

#[test]
fn test_comment_at_end_of_input() {
    let lexed = tokens("x # trailing");
    assert_eq!(lexed.len(), 2);
    assert_eq!(lexed[1].kind, TokenKind::Eos);
    assert_eq!(lexed[1].location, SourceLocation::new(1, 13));
}

#[test]
fn test_comment_only_lines_are_skipped() {
    let lexed = tokens("# one\n# two\n\nend # three\n");
    assert_eq!(lexed[0].kind, TokenKind::End);
    assert_eq!(lexed[0].location, SourceLocation::new(4, 1));
    assert_eq!(lexed[1].location, SourceLocation::new(5, 1));
}

#[test]
fn test_literal_lexemes() {
    let lexed = tokens(r#"'a' "hello world" "" 42 3.14 true false"#);
    let pairs: Vec<(TokenKind, &str)> = lexed.iter().map(|t| (t.kind, t.lexeme.as_str())).collect();
    assert_eq!(
        pairs,
        vec![
            (TokenKind::CharVal, "a"),
            (TokenKind::StringVal, "hello world"),
            (TokenKind::StringVal, ""),
            (TokenKind::IntVal, "42"),
            (TokenKind::DoubleVal, "3.14"),
            (TokenKind::BoolVal, "true"),
            (TokenKind::BoolVal, "false"),
            (TokenKind::Eos, ""),
        ]
    );
}

#[test]
fn test_string_literal_positions_after_delimiters() {
    let lexed = tokens("\"ab\" c");
    assert_eq!(lexed[0].column(), 1);
    assert_eq!(lexed[1].column(), 6);
}

#[test]
fn test_empty_char_literal() {
    let (message, line, column) = lex_error("x = ''");
    assert!(message.contains("empty char literal"), "{message}");
    assert_eq!((line, column), (1, 5));
}

#[test]
fn test_unterminated_literals_point_at_opening_delimiter() {
    let (message, line, column) = lex_error("var s = \"unterminated");
    assert!(message.contains("unterminated string"), "{message}");
    assert_eq!((line, column), (1, 9));

    let (message, line, column) = lex_error("var s = \"broken\nline\"");
    assert!(message.contains("unterminated string"), "{message}");
    assert_eq!((line, column), (1, 9));

    let (_, line, column) = lex_error("\n  'ab'");
    assert_eq!((line, column), (2, 3));
}

#[test]
fn test_malformed_numbers() {
    let (message, line, column) = lex_error("x = 123abc");
    assert!(message.contains("malformed number literal '123a'"), "{message}");
    assert_eq!((line, column), (1, 5));

    assert!(lex_error("1_000").0.contains("malformed number"));
    assert!(lex_error("1.2.3").0.contains("malformed number"));
    assert!(lex_error("7.").0.contains("expected a digit after '.'"));
}

#[test]
fn test_double_without_leading_digit() {
    let (message, line, column) = lex_error(".5");
    assert!(message.contains("'.'"), "{message}");
    assert_eq!((line, column), (1, 1));

    let (message, line, column) = lex_error("x = a.5");
    assert_eq!(message, "invalid double literal: a '.' must be preceded by a digit");
    assert_eq!((line, column), (1, 6));
}

#[test]
fn test_unexpected_characters() {
    let (message, line, column) = lex_error("x = 1\ny = 2 ^ 3");
    assert_eq!(message, "unexpected character '^'");
    assert_eq!((line, column), (2, 7));

    let (message, _, column) = lex_error("x ! y");
    assert!(message.contains("'!'"), "{message}");
    assert_eq!(column, 3);
}

#[test]
fn test_dotted_path_tokens() {
    use TokenKind::*;
    assert_eq!(kinds("a.b.c = n.next"), vec![Id, Dot, Id, Dot, Id, Assign, Id, Dot, Id, Eos]);
}

#[test]
fn test_lexer_error_display() {
    let err = Lexer::new("\n\n   @").tokenize().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Lexer error at line 3, column 4: unexpected character '@'"
    );
}
