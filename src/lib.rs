//! # Introduction
//!
//! Ember is a small expression-oriented scripting language. This crate is its
//! front end: it turns source text into an abstract syntax tree plus a list
//! of diagnostics, and renders trees back to canonical text.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST (+ diagnostics)
//! ```
//!
//! 1. [`parser::lexer`] — scans bytes into a flat token stream.
//! 2. [`parser::parse`] — precedence climbing parser over a two-token
//!    lookahead window; collects [`parser::ParseError`]s instead of aborting.
//! 3. [`parser::ast`] — the tree itself, with a deterministic parenthesized
//!    `Display` rendering that re-parses to a structurally equal tree.
//!
//! ## Example
//!
//! ```
//! let (program, errors) = ember::parser::parse("let x = 1 + 2 * 3;");
//! assert!(errors.is_empty());
//! assert_eq!(program.to_string(), "let x = (1 + (2 * 3));\n");
//! ```

pub mod parser;
