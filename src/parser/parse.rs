//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure, including the diagnostic types, helper methods, and the
//! `parse_program` entry point.
//!
//! # Parser architecture
//!
//! The Parser is a recursive descent engine over a two-token lookahead
//! window (`current`, `peek`), advanced in lock-step by a single `advance`
//! that shifts `peek` into `current` and pulls a fresh token from the lexer.
//! There is no backtracking. Functionality is split across `impl Parser`
//! blocks:
//!
//! - This module: Parser struct, lookahead helpers, statement loop
//! - `statements`: let / return / expression statements and blocks
//! - `expressions`: the Pratt (precedence climbing) expression core
//!
//! # Failure semantics
//!
//! Malformed input never panics or aborts the parse. Internal sub-parsers
//! return `Result<_, ParseError>`; only the statement loops convert an `Err`
//! into a recorded diagnostic, drop the statement, and advance past the
//! current token so the parse always makes forward progress. The caller gets
//! a [`Program`] (possibly with fewer statements than the source had) plus
//! the ordered diagnostics.

use crate::parser::ast::{Program, SourceLocation};
use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenKind};
use std::fmt;

/// The structured cause of a parse diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A required token checkpoint did not match.
    UnexpectedToken { expected: TokenKind, found: Token },
    /// No expression can start at this token.
    MissingPrefixHandler { found: Token },
    /// A digit run that does not fit a 64-bit signed integer.
    InvalidIntegerLiteral { text: String },
    /// A block reached end of input before its closing brace.
    UnterminatedBlock { found: Token },
    /// A call argument list reached something other than `,` or `)`.
    UnterminatedCall { found: Token },
}

/// Parser error type: a structured kind plus the approximate source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: ",
            self.location.line, self.location.column
        )?;
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
            ParseErrorKind::MissingPrefixHandler { found } => {
                write!(f, "no parse function for {}", found)
            }
            ParseErrorKind::InvalidIntegerLiteral { text } => {
                write!(f, "invalid integer literal '{}'", text)
            }
            ParseErrorKind::UnterminatedBlock { found } => {
                write!(f, "unterminated block, found {}", found)
            }
            ParseErrorKind::UnterminatedCall { found } => {
                write!(f, "unterminated call arguments, found {}", found)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Pratt parser over a two-token lookahead window.
pub struct Parser {
    lexer: Lexer,
    pub(crate) current: Token,
    pub(crate) peek: Token,
    pub(crate) current_location: SourceLocation,
    pub(crate) peek_location: SourceLocation,
    errors: Vec<ParseError>,
}

impl Parser {
    /// Create a parser over the given lexer, priming the lookahead window.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let current_location = lexer.location();
        let peek = lexer.next_token();
        let peek_location = lexer.location();
        Self {
            lexer,
            current,
            peek,
            current_location,
            peek_location,
            errors: Vec::new(),
        }
    }

    /// Parse the entire program.
    ///
    /// Always returns a [`Program`]; statements that failed to parse are
    /// dropped and their diagnostics recorded (see [`Parser::errors`]).
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while self.current.kind != TokenKind::EndOfInput {
            match self.parse_statement() {
                Ok(statement) => program.statements.push(statement),
                Err(error) => {
                    self.record_error(error);
                    self.skip_to_statement_boundary();
                }
            }
            // Unconditional: guarantees forward progress on malformed input.
            self.advance();
        }

        program
    }

    /// Diagnostics collected so far, in source order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consume the parser, yielding its diagnostics.
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Record a diagnostic in source order.
    pub(crate) fn record_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    // ===== Lookahead helpers =====

    /// Shift `peek` into `current` and pull the next token from the lexer.
    pub(crate) fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
        self.current_location = self.peek_location;
        self.peek_location = self.lexer.location();
    }

    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advance past `peek` if it has the expected kind, else a diagnostic.
    pub(crate) fn expect_peek(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        if self.peek.kind == expected {
            self.advance();
            Ok(())
        } else {
            Err(ParseError {
                kind: ParseErrorKind::UnexpectedToken {
                    expected,
                    found: self.peek.clone(),
                },
                location: self.peek_location,
            })
        }
    }

    /// Consume an optional trailing semicolon; semicolons are statement
    /// terminators, not separators, so omitting the final one is legal.
    pub(crate) fn consume_optional_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }
    }

    /// After a failed statement, skip to the next statement boundary so one
    /// malformed construct produces one diagnostic instead of a cascade.
    pub(crate) fn skip_to_statement_boundary(&mut self) {
        while !matches!(
            self.current.kind,
            TokenKind::Semicolon | TokenKind::RightBrace | TokenKind::EndOfInput
        ) {
            self.advance();
        }
    }

    /// Build a diagnostic positioned at the current token.
    pub(crate) fn error_at_current(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            location: self.current_location,
        }
    }

    /// Build a diagnostic positioned at the peek token.
    pub(crate) fn error_at_peek(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            location: self.peek_location,
        }
    }
}
