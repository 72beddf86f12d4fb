//! Statement parsing implementation
//!
//! Dispatch on the current token decides the statement form:
//!
//! ```text
//! statement ::= let_stmt | return_stmt | expr_stmt
//! let_stmt    ::= 'let' IDENT '=' expression ';'?
//! return_stmt ::= 'return' expression ';'?
//! expr_stmt   ::= expression ';'?
//! block       ::= '{' statement* '}'
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::{BlockStatement, Identifier, Statement};
use crate::parser::parse::{ParseError, ParseErrorKind, Parser};
use crate::parser::token::TokenKind;

use super::expressions::Precedence;

impl Parser {
    /// Parse a statement; on success the current token is the last token of
    /// the statement (the outer loop advances past it).
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parse `let name = value;`
    fn parse_let_statement(&mut self) -> Result<Statement, ParseError> {
        self.expect_peek(TokenKind::Identifier)?;
        let name = Identifier::new(self.current.literal.clone());

        self.expect_peek(TokenKind::Assign)?;
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.consume_optional_semicolon();

        Ok(Statement::Let { name, value })
    }

    /// Parse `return value;` — the value expression is mandatory; a token
    /// that cannot start an expression becomes a diagnostic, not a panic.
    fn parse_return_statement(&mut self) -> Result<Statement, ParseError> {
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.consume_optional_semicolon();

        Ok(Statement::Return { value })
    }

    /// Parse a bare expression in statement position.
    fn parse_expression_statement(&mut self) -> Result<Statement, ParseError> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.consume_optional_semicolon();

        Ok(Statement::Expression { expr })
    }

    /// Parse a block; called with the current token on `{`, returns with the
    /// current token on the matching `}`.
    ///
    /// Failed statements inside the block are recorded and skipped the same
    /// way the top-level loop does, so one bad statement does not take the
    /// rest of the block with it. Reaching end of input instead of `}` is an
    /// [`ParseErrorKind::UnterminatedBlock`] diagnostic.
    pub(crate) fn parse_block_statement(&mut self) -> Result<BlockStatement, ParseError> {
        let mut statements = Vec::new();
        self.advance();

        while !self.current_is(TokenKind::RightBrace) {
            if self.current_is(TokenKind::EndOfInput) {
                return Err(self.error_at_current(ParseErrorKind::UnterminatedBlock {
                    found: self.current.clone(),
                }));
            }
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    self.record_error(error);
                    self.skip_to_statement_boundary();
                    if self.current_is(TokenKind::RightBrace) {
                        break;
                    }
                }
            }
            self.advance();
        }

        Ok(BlockStatement { statements })
    }
}
