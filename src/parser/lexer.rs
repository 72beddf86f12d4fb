//! Lexer (tokenizer) for Ember source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. The lexer is a byte-cursor scanner with a one-byte lookahead:
//! it recognizes the two-character operators `==` and `!=`, single-character
//! operators and punctuation, keyword/identifier letter runs, and decimal
//! integer literals. Anything else is collapsed into a [`TokenKind::Illegal`]
//! token carrying the offending byte; the parser turns that into a diagnostic
//! when it lands where an expression or statement must start.
//!
//! There is no support for floating point, string literals, comments, or
//! Unicode identifiers.

use super::ast::SourceLocation;
use super::token::{lookup_identifier, Token, TokenKind};

/// Pull-based scanner over an immutable source buffer.
///
/// `next_token` may be called repeatedly; once the input is exhausted it
/// yields [`Token::end_of_input`] on every further call. The cursor is
/// forward-only and non-restartable: one lexer serves exactly one parse.
pub struct Lexer {
    input: Vec<u8>,
    position: usize,
    line: usize,
    column: usize,
    token_start: SourceLocation,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.as_bytes().to_vec(),
            position: 0,
            line: 1,
            column: 1,
            token_start: SourceLocation::new(1, 1),
        }
    }

    /// Scan and return the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.token_start = SourceLocation::new(self.line, self.column);

        let ch = match self.advance() {
            Some(ch) => ch,
            None => return Token::end_of_input(),
        };

        match ch {
            b'=' => {
                if self.peek() == Some(b'=') {
                    self.advance();
                    Token::new(TokenKind::Equal, "==")
                } else {
                    Token::new(TokenKind::Assign, "=")
                }
            }
            b'!' => {
                if self.peek() == Some(b'=') {
                    self.advance();
                    Token::new(TokenKind::NotEqual, "!=")
                } else {
                    Token::new(TokenKind::Bang, "!")
                }
            }
            b'+' => Token::new(TokenKind::Plus, "+"),
            b'-' => Token::new(TokenKind::Minus, "-"),
            b'*' => Token::new(TokenKind::Asterisk, "*"),
            b'/' => Token::new(TokenKind::Slash, "/"),
            b'<' => Token::new(TokenKind::LessThan, "<"),
            b'>' => Token::new(TokenKind::GreaterThan, ">"),
            b',' => Token::new(TokenKind::Comma, ","),
            b';' => Token::new(TokenKind::Semicolon, ";"),
            b'(' => Token::new(TokenKind::LeftParen, "("),
            b')' => Token::new(TokenKind::RightParen, ")"),
            b'{' => Token::new(TokenKind::LeftBrace, "{"),
            b'}' => Token::new(TokenKind::RightBrace, "}"),
            b'a'..=b'z' | b'A'..=b'Z' => self.identifier_or_keyword(ch),
            b'0'..=b'9' => self.integer_literal(ch),
            other => Token::new(TokenKind::Illegal, (other as char).to_string()),
        }
    }

    /// Source location of the most recently produced token.
    ///
    /// Tokens themselves carry only kind and literal; the parser snapshots
    /// this alongside its lookahead window for diagnostics.
    pub fn location(&self) -> SourceLocation {
        self.token_start
    }

    /// Scan a maximal letter run and classify it through the keyword table.
    fn identifier_or_keyword(&mut self, first: u8) -> Token {
        let mut literal = String::new();
        literal.push(first as char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphabetic() {
                literal.push(ch as char);
                self.advance();
            } else {
                break;
            }
        }

        let kind = lookup_identifier(&literal);
        Token::new(kind, literal)
    }

    /// Scan a maximal digit run; the literal keeps the raw digit text so the
    /// parser can report overflow with the original spelling.
    fn integer_literal(&mut self, first: u8) -> Token {
        let mut literal = String::new();
        literal.push(first as char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                literal.push(ch as char);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(TokenKind::IntegerLiteral, literal)
    }

    /// Skip spaces, tabs, carriage returns, and newlines.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                b' ' | b'\t' | b'\r' | b'\n' => {
                    self.advance();
                }
                _ => break,
            }
        }
    }

    /// Peek at the current byte without consuming.
    fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    /// Consume and return the current byte, updating line/column.
    fn advance(&mut self) -> Option<u8> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = token.kind == TokenKind::EndOfInput;
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    #[test]
    fn test_single_char_tokens() {
        let tokens = lex_all("=+(){},;");
        let expected = [
            (TokenKind::Assign, "="),
            (TokenKind::Plus, "+"),
            (TokenKind::LeftParen, "("),
            (TokenKind::RightParen, ")"),
            (TokenKind::LeftBrace, "{"),
            (TokenKind::RightBrace, "}"),
            (TokenKind::Comma, ","),
            (TokenKind::Semicolon, ";"),
            (TokenKind::EndOfInput, ""),
        ];

        assert_eq!(tokens.len(), expected.len());
        for (token, (kind, literal)) in tokens.iter().zip(expected) {
            assert_eq!(token.kind, kind);
            assert_eq!(token.literal, literal);
        }
    }

    #[test]
    fn test_full_source() {
        let source = "let five = 5;\n\
                      let add = fn(x, y) { x + y; };\n\
                      let result = add(five, ten);\n\
                      !-/*5;\n\
                      5 < 10 > 5;\n\
                      if (5 < 10) { return true; } else { return false; }\n\
                      10 == 10;\n\
                      10 != 9;";
        let tokens = lex_all(source);
        let expected = [
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "five"),
            (TokenKind::Assign, "="),
            (TokenKind::IntegerLiteral, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "add"),
            (TokenKind::Assign, "="),
            (TokenKind::Function, "fn"),
            (TokenKind::LeftParen, "("),
            (TokenKind::Identifier, "x"),
            (TokenKind::Comma, ","),
            (TokenKind::Identifier, "y"),
            (TokenKind::RightParen, ")"),
            (TokenKind::LeftBrace, "{"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Plus, "+"),
            (TokenKind::Identifier, "y"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RightBrace, "}"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "result"),
            (TokenKind::Assign, "="),
            (TokenKind::Identifier, "add"),
            (TokenKind::LeftParen, "("),
            (TokenKind::Identifier, "five"),
            (TokenKind::Comma, ","),
            (TokenKind::Identifier, "ten"),
            (TokenKind::RightParen, ")"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Bang, "!"),
            (TokenKind::Minus, "-"),
            (TokenKind::Slash, "/"),
            (TokenKind::Asterisk, "*"),
            (TokenKind::IntegerLiteral, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::IntegerLiteral, "5"),
            (TokenKind::LessThan, "<"),
            (TokenKind::IntegerLiteral, "10"),
            (TokenKind::GreaterThan, ">"),
            (TokenKind::IntegerLiteral, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::If, "if"),
            (TokenKind::LeftParen, "("),
            (TokenKind::IntegerLiteral, "5"),
            (TokenKind::LessThan, "<"),
            (TokenKind::IntegerLiteral, "10"),
            (TokenKind::RightParen, ")"),
            (TokenKind::LeftBrace, "{"),
            (TokenKind::Return, "return"),
            (TokenKind::True, "true"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RightBrace, "}"),
            (TokenKind::Else, "else"),
            (TokenKind::LeftBrace, "{"),
            (TokenKind::Return, "return"),
            (TokenKind::False, "false"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RightBrace, "}"),
            (TokenKind::IntegerLiteral, "10"),
            (TokenKind::Equal, "=="),
            (TokenKind::IntegerLiteral, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::IntegerLiteral, "10"),
            (TokenKind::NotEqual, "!="),
            (TokenKind::IntegerLiteral, "9"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::EndOfInput, ""),
        ];

        assert_eq!(tokens.len(), expected.len());
        for (i, (token, (kind, literal))) in tokens.iter().zip(expected).enumerate() {
            assert_eq!(token.kind, kind, "token {} kind mismatch", i);
            assert_eq!(token.literal, literal, "token {} literal mismatch", i);
        }
    }

    #[test]
    fn test_illegal_character() {
        let tokens = lex_all("let a = @;");
        assert_eq!(tokens[3].kind, TokenKind::Illegal);
        assert_eq!(tokens[3].literal, "@");
        assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_end_of_input_is_idempotent() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
        for _ in 0..3 {
            assert_eq!(lexer.next_token(), Token::end_of_input());
        }
    }

    #[test]
    fn test_token_locations() {
        let mut lexer = Lexer::new("let x\n  = 5");

        lexer.next_token();
        assert_eq!(lexer.location(), SourceLocation::new(1, 1));
        lexer.next_token();
        assert_eq!(lexer.location(), SourceLocation::new(1, 5));
        lexer.next_token();
        assert_eq!(lexer.location(), SourceLocation::new(2, 3));
        lexer.next_token();
        assert_eq!(lexer.location(), SourceLocation::new(2, 5));
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let tokens = lex_all("Let LET let");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].kind, TokenKind::Let);
    }
}
