//! Ember source code parser
//!
//! This module transforms Ember source text into an Abstract Syntax Tree
//! (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST)
//! - [`token`]: Token kinds and the keyword table
//! - [`ast`]: AST node definitions
//!
//! # Supported language
//!
//! A small expression-oriented language:
//! - Statements: `let`, `return`, bare expressions
//! - Expressions: integers, booleans, identifiers, prefix `!`/`-`, the
//!   binary operators `+ - * / < > == !=`, grouping parentheses,
//!   `if`/`else` blocks, `fn` literals, and calls
//! - No floats, strings, comments, or Unicode identifiers
//!
//! # Parser implementation
//!
//! Hand-written recursive descent parser with precedence climbing for binary
//! operators. No external parser generator dependencies. Malformed input is
//! collected as ordered diagnostics, never a panic: parsing always yields a
//! [`Program`] plus whatever [`ParseError`]s were encountered.

pub mod ast;
pub mod lexer;
pub mod parse;
pub mod token;

mod expressions;
mod statements;

pub use ast::Program;
pub use parse::{ParseError, Parser};

use lexer::Lexer;

/// Parse a complete source string.
///
/// Convenience wrapper around [`Lexer`] + [`Parser`] for callers that do not
/// need to drive the pipeline themselves.
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.into_errors())
}
