//! Lexer (tokenizer) for MyPL source code
//!
//! Pull-based: [`Lexer::next_token`] scans exactly one [`Token`] per call and
//! never looks more than one character past the current read position.
//! Whitespace and `#` line comments are skipped between tokens.

use super::error::ParseError;
use super::token::{SourceLocation, Token, TokenKind};
use std::iter::Peekable;
use std::str::Chars;

/// Lexer over a borrowed source string
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
    /// Set once `EOS` or an error has been yielded through [`Iterator`]
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source string.
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.chars().peekable(),
            line: 1,
            column: 1,
            exhausted: false,
        }
    }

    /// Scan every token up to and including `EOS`.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, ParseError> {
        self.collect()
    }

    /// Return the next token. Once the input is exhausted every call
    /// returns `EOS` at the same position.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace_and_comments();

        let loc = self.current_location();
        let Some(ch) = self.advance() else {
            return Ok(Token::new(TokenKind::Eos, "", loc));
        };

        match ch {
            ',' => Ok(Token::new(TokenKind::Comma, ",", loc)),
            '(' => Ok(Token::new(TokenKind::LParen, "(", loc)),
            ')' => Ok(Token::new(TokenKind::RParen, ")", loc)),
            ':' => Ok(Token::new(TokenKind::Colon, ":", loc)),
            '+' => Ok(Token::new(TokenKind::Plus, "+", loc)),
            '-' => Ok(Token::new(TokenKind::Minus, "-", loc)),
            '*' => Ok(Token::new(TokenKind::Multiply, "*", loc)),
            '/' => Ok(Token::new(TokenKind::Divide, "/", loc)),
            '%' => Ok(Token::new(TokenKind::Modulo, "%", loc)),
            '.' => {
                if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    Err(ParseError::lexer(
                        "invalid double literal: a '.' must be preceded by a digit",
                        loc,
                    ))
                } else {
                    Ok(Token::new(TokenKind::Dot, ".", loc))
                }
            }
            '=' => Ok(self.with_optional_eq(loc, TokenKind::Assign, "=", TokenKind::Equal, "==")),
            '<' => Ok(self.with_optional_eq(loc, TokenKind::Less, "<", TokenKind::LessEqual, "<=")),
            '>' => Ok(self.with_optional_eq(
                loc,
                TokenKind::Greater,
                ">",
                TokenKind::GreaterEqual,
                ">=",
            )),
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::new(TokenKind::NotEqual, "!=", loc))
                } else {
                    Err(ParseError::lexer("'!' must be followed by '='", loc))
                }
            }
            '\'' => self.char_literal(loc),
            '"' => self.string_literal(loc),
            '0'..='9' => self.number_literal(ch, loc),
            'a'..='z' | 'A'..='Z' => Ok(self.word(ch, loc)),
            _ => Err(ParseError::lexer(
                format!("unexpected character '{}'", ch.escape_default()),
                loc,
            )),
        }
    }

    /// `=`, `<` and `>` each pair with a following `=`
    fn with_optional_eq(
        &mut self,
        loc: SourceLocation,
        single: TokenKind,
        single_text: &str,
        double: TokenKind,
        double_text: &str,
    ) -> Token {
        if self.peek() == Some('=') {
            self.advance();
            Token::new(double, double_text, loc)
        } else {
            Token::new(single, single_text, loc)
        }
    }

    /// Character literal: exactly one character between single quotes.
    fn char_literal(&mut self, loc: SourceLocation) -> Result<Token, ParseError> {
        let value = match self.peek() {
            None | Some('\n') => {
                return Err(ParseError::lexer("unterminated char literal", loc));
            }
            Some('\'') => {
                return Err(ParseError::lexer("empty char literal ''", loc));
            }
            Some(c) => {
                self.advance();
                c
            }
        };

        if self.peek() != Some('\'') {
            return Err(ParseError::lexer(
                "expected closing ' after a single character",
                loc,
            ));
        }
        self.advance();

        Ok(Token::new(TokenKind::CharVal, value.to_string(), loc))
    }

    /// String literal: runs to an unescaped `"` on the same line.
    fn string_literal(&mut self, loc: SourceLocation) -> Result<Token, ParseError> {
        let mut text = String::new();

        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(ParseError::lexer("unterminated string literal", loc));
                }
                Some('"') => {
                    self.advance();
                    return Ok(Token::new(TokenKind::StringVal, text, loc));
                }
                Some('\\') => {
                    self.advance();
                    text.push('\\');
                    // the escaped character never closes the string
                    if let Some(c) = self.peek().filter(|&c| c != '\n') {
                        self.advance();
                        text.push(c);
                    }
                }
                Some(c) => {
                    self.advance();
                    text.push(c);
                }
            }
        }
    }

    /// Integer (`digits`) or double (`digits.digits`) literal
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Result<Token, ParseError> {
        let mut text = String::new();
        text.push(first_digit);
        self.take_digits(&mut text);

        let mut kind = TokenKind::IntVal;
        if self.peek() == Some('.') {
            self.advance();
            text.push('.');
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Err(ParseError::lexer(
                    format!("malformed double literal '{}': expected a digit after '.'", text),
                    loc,
                ));
            }
            self.take_digits(&mut text);
            kind = TokenKind::DoubleVal;
        }

        // 123abc, 1_000 and 1.2.3 are rejected as a whole rather than split
        if let Some(c) = self
            .peek()
            .filter(|&c| c.is_ascii_alphabetic() || c == '_' || c == '.')
        {
            return Err(ParseError::lexer(
                format!("malformed number literal '{}{}'", text, c),
                loc,
            ));
        }

        Ok(Token::new(kind, text, loc))
    }

    fn take_digits(&mut self, text: &mut String) {
        while let Some(c) = self.peek().filter(|c| c.is_ascii_digit()) {
            self.advance();
            text.push(c);
        }
    }

    /// Identifier or reserved word
    fn word(&mut self, first_char: char, loc: SourceLocation) -> Token {
        let mut text = String::new();
        text.push(first_char);

        while let Some(c) = self
            .peek()
            .filter(|&c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
            text.push(c);
        }

        let kind = TokenKind::reserved(&text).unwrap_or(TokenKind::Id);
        Token::new(kind, text, loc)
    }

    /// Skip whitespace and comments. Consecutive comment lines form one skip region.
    fn skip_whitespace_and_comments(&mut self) {
        while let Some(c) = self.peek() {
            if c == '#' {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
            } else if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.input.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.input.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Yields tokens through `EOS` or the first error, then stops.
impl Iterator for Lexer<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.next_token();
        self.exhausted = !matches!(&item, Ok(token) if !token.is(TokenKind::Eos));
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::error::ErrorKind;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_simple_tokens() {
        let tokens = Lexer::new("fun int main() return 0 end").tokenize().unwrap();

        assert_eq!(tokens[0].kind, TokenKind::Fun);
        assert_eq!(tokens[1].kind, TokenKind::IntType);
        assert_eq!(tokens[2].kind, TokenKind::Id);
        assert_eq!(tokens[2].lexeme, "main");
        assert_eq!(tokens[3].kind, TokenKind::LParen);
        assert_eq!(tokens[4].kind, TokenKind::RParen);
        assert_eq!(tokens[5].kind, TokenKind::Return);
        assert_eq!(tokens[6].kind, TokenKind::IntVal);
        assert_eq!(tokens[7].kind, TokenKind::End);
        assert_eq!(tokens[8].kind, TokenKind::Eos);
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("= == < <= > >= != + - * / % , ( ) : ."),
            vec![
                TokenKind::Assign,
                TokenKind::Equal,
                TokenKind::Less,
                TokenKind::LessEqual,
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::NotEqual,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Multiply,
                TokenKind::Divide,
                TokenKind::Modulo,
                TokenKind::Comma,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Colon,
                TokenKind::Dot,
                TokenKind::Eos,
            ]
        );
    }

    #[test]
    fn test_comments() {
        let tokens = Lexer::new("# one\n# two\nvar x = 1 # trailing\n# last")
            .tokenize()
            .unwrap();

        assert_eq!(tokens[0].kind, TokenKind::Var);
        assert_eq!(tokens[0].location, SourceLocation::new(3, 1));
        assert_eq!(tokens[1].lexeme, "x");
        assert_eq!(tokens[3].kind, TokenKind::IntVal);
        assert_eq!(tokens[4].kind, TokenKind::Eos);
    }

    #[test]
    fn test_string_literal_keeps_escapes() {
        let tokens = Lexer::new(r#""say \"hi\"" x"#).tokenize().unwrap();

        assert_eq!(tokens[0].kind, TokenKind::StringVal);
        assert_eq!(tokens[0].lexeme, r#"say \"hi\""#);
        assert_eq!(tokens[1].lexeme, "x");
        assert_eq!(tokens[1].column(), 14);
    }

    #[test]
    fn test_numbers() {
        let tokens = Lexer::new("42 3.14 0").tokenize().unwrap();

        assert_eq!(tokens[0].kind, TokenKind::IntVal);
        assert_eq!(tokens[1].kind, TokenKind::DoubleVal);
        assert_eq!(tokens[1].lexeme, "3.14");
        assert_eq!(tokens[2].column(), 9);
    }

    #[test]
    fn test_dot_after_path_is_not_a_number() {
        assert_eq!(
            kinds("a.b"),
            vec![TokenKind::Id, TokenKind::Dot, TokenKind::Id, TokenKind::Eos]
        );
    }

    #[test]
    fn test_bang_alone_is_an_error() {
        let err = Lexer::new("x ! y").tokenize().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexer);
        assert_eq!(err.location, SourceLocation::new(1, 3));
    }

    #[test]
    fn test_eos_is_repeated() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Id);
        let first = lexer.next_token().unwrap();
        let second = lexer.next_token().unwrap();
        assert_eq!(first.kind, TokenKind::Eos);
        assert_eq!(first, second);
        assert_eq!(first.location, SourceLocation::new(1, 2));
    }

    #[test]
    fn test_iterator_stops_after_eos_or_error() {
        let items: Vec<_> = Lexer::new("a b").collect();
        assert_eq!(items.len(), 3);
        assert!(matches!(&items[2], Ok(token) if token.is(TokenKind::Eos)));

        let items: Vec<_> = Lexer::new("a ' b c").collect();
        assert_eq!(items.len(), 2);
        assert!(items[1].is_err());
    }
}
