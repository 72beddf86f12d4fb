//! Expression parsing implementation
//!
//! The precedence climbing (Pratt) core. Every expression parse starts at
//! [`Parser::parse_expression`], which consumes one prefix construct and then
//! folds infix operators onto it for as long as the upcoming operator binds
//! tighter than the caller's context.
//!
//! Both dispatch points are exhaustive matches over [`TokenKind`], so the
//! grammar visible here is the whole grammar: a token kind either has a rule
//! in these matches or it cannot start/extend an expression.

use crate::parser::ast::{Expression, Identifier, InfixOperator, PrefixOperator};
use crate::parser::parse::{ParseError, ParseErrorKind, Parser};
use crate::parser::token::TokenKind;

/// Binding strength of infix operators, weakest first.
///
/// The derived ordering is what the climbing loop compares against; the
/// variant order in the source is the precedence ladder itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,        // f(x)
}

/// Binding strength a token has in infix position.
///
/// Tokens that can never appear as infix operators get `Lowest`, which makes
/// the climbing loop stop in front of them.
fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Equal | TokenKind::NotEqual => Precedence::Equals,
        TokenKind::LessThan | TokenKind::GreaterThan => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
        TokenKind::LeftParen => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

impl Parser {
    /// Parse an expression whose operators must bind tighter than
    /// `precedence`; on success the current token is the expression's last
    /// token.
    pub(crate) fn parse_expression(
        &mut self,
        precedence: Precedence,
    ) -> Result<Expression, ParseError> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < precedence_of(self.peek.kind) {
            left = match self.peek.kind {
                TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::LessThan
                | TokenKind::GreaterThan
                | TokenKind::Equal
                | TokenKind::NotEqual => {
                    self.advance();
                    self.parse_infix_expression(left)?
                }
                TokenKind::LeftParen => {
                    self.advance();
                    self.parse_call_expression(left)?
                }
                _ => return Ok(left),
            };
        }

        Ok(left)
    }

    /// Parse the prefix construct the current token starts.
    fn parse_prefix(&mut self) -> Result<Expression, ParseError> {
        match self.current.kind {
            TokenKind::Identifier => Ok(Expression::Identifier(Identifier::new(
                self.current.literal.clone(),
            ))),
            TokenKind::IntegerLiteral => self.parse_integer_literal(),
            TokenKind::True => Ok(Expression::BooleanLiteral(true)),
            TokenKind::False => Ok(Expression::BooleanLiteral(false)),
            TokenKind::Bang => self.parse_prefix_expression(PrefixOperator::Not),
            TokenKind::Minus => self.parse_prefix_expression(PrefixOperator::Negate),
            TokenKind::LeftParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::EndOfInput
            | TokenKind::Illegal
            | TokenKind::Assign
            | TokenKind::Plus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::LessThan
            | TokenKind::GreaterThan
            | TokenKind::Equal
            | TokenKind::NotEqual
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::RightParen
            | TokenKind::LeftBrace
            | TokenKind::RightBrace
            | TokenKind::Let
            | TokenKind::Else
            | TokenKind::Return => {
                Err(self.error_at_current(ParseErrorKind::MissingPrefixHandler {
                    found: self.current.clone(),
                }))
            }
        }
    }

    /// Parse a decimal integer literal into an `i64`; a digit run that
    /// overflows keeps its raw spelling in the diagnostic.
    fn parse_integer_literal(&mut self) -> Result<Expression, ParseError> {
        match self.current.literal.parse::<i64>() {
            Ok(value) => Ok(Expression::IntegerLiteral(value)),
            Err(_) => Err(self.error_at_current(ParseErrorKind::InvalidIntegerLiteral {
                text: self.current.literal.clone(),
            })),
        }
    }

    /// Parse `!operand` or `-operand`; the operand binds at `Prefix` level so
    /// `-a + b` parses as `((-a) + b)`.
    fn parse_prefix_expression(
        &mut self,
        operator: PrefixOperator,
    ) -> Result<Expression, ParseError> {
        self.advance();
        let operand = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix {
            operator,
            operand: Box::new(operand),
        })
    }

    /// Parse `(expression)`; the parentheses reset the precedence context and
    /// leave no node of their own.
    fn parse_grouped_expression(&mut self) -> Result<Expression, ParseError> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RightParen)?;

        Ok(expr)
    }

    /// Parse `if (condition) { ... }` with an optional `else { ... }`.
    ///
    /// The alternative field stays `None` unless an `else` keyword was
    /// consumed; `else` is only legal directly after the consequence block.
    fn parse_if_expression(&mut self) -> Result<Expression, ParseError> {
        self.expect_peek(TokenKind::LeftParen)?;
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RightParen)?;
        self.expect_peek(TokenKind::LeftBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            self.expect_peek(TokenKind::LeftBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Expression::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /// Parse `fn(params) { body }`.
    fn parse_function_literal(&mut self) -> Result<Expression, ParseError> {
        self.expect_peek(TokenKind::LeftParen)?;
        let parameters = self.parse_function_parameters()?;
        self.expect_peek(TokenKind::LeftBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expression::FunctionLiteral { parameters, body })
    }

    /// Parse a comma-separated parameter list; called with the current token
    /// on `(`, returns with the current token on `)`.
    fn parse_function_parameters(&mut self) -> Result<Vec<Identifier>, ParseError> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RightParen) {
            self.advance();
            return Ok(parameters);
        }

        self.expect_peek(TokenKind::Identifier)?;
        parameters.push(Identifier::new(self.current.literal.clone()));

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.expect_peek(TokenKind::Identifier)?;
            parameters.push(Identifier::new(self.current.literal.clone()));
        }

        self.expect_peek(TokenKind::RightParen)?;

        Ok(parameters)
    }

    /// Parse the `left op right` the current (operator) token heads. The
    /// right operand binds at the operator's own precedence, which makes all
    /// binary operators left-associative.
    fn parse_infix_expression(&mut self, left: Expression) -> Result<Expression, ParseError> {
        let operator = match self.current.kind {
            TokenKind::Plus => InfixOperator::Add,
            TokenKind::Minus => InfixOperator::Subtract,
            TokenKind::Asterisk => InfixOperator::Multiply,
            TokenKind::Slash => InfixOperator::Divide,
            TokenKind::LessThan => InfixOperator::LessThan,
            TokenKind::GreaterThan => InfixOperator::GreaterThan,
            TokenKind::Equal => InfixOperator::Equal,
            TokenKind::NotEqual => InfixOperator::NotEqual,
            // The climbing loop only dispatches here for the kinds above.
            _ => {
                return Err(self.error_at_current(ParseErrorKind::MissingPrefixHandler {
                    found: self.current.clone(),
                }))
            }
        };
        let precedence = precedence_of(self.current.kind);
        self.advance();
        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Parse `callee(args)`; the current token is the `(` that follows any
    /// callable expression, so `add(1)(2)` chains naturally.
    fn parse_call_expression(&mut self, callee: Expression) -> Result<Expression, ParseError> {
        let arguments = self.parse_call_arguments()?;

        Ok(Expression::Call {
            callee: Box::new(callee),
            arguments,
        })
    }

    /// Parse a comma-separated argument list; called with the current token
    /// on `(`, returns with the current token on `)`.
    fn parse_call_arguments(&mut self) -> Result<Vec<Expression>, ParseError> {
        let mut arguments = Vec::new();

        if self.peek_is(TokenKind::RightParen) {
            self.advance();
            return Ok(arguments);
        }

        self.advance();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.peek_is(TokenKind::RightParen) {
            return Err(self.error_at_peek(ParseErrorKind::UnterminatedCall {
                found: self.peek.clone(),
            }));
        }
        self.advance();

        Ok(arguments)
    }
}
