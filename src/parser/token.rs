//! Token model for Ember source code
//!
//! Defines the closed set of lexical categories ([`TokenKind`]), the
//! [`Token`] value produced by the lexer, and the keyword table consulted
//! after scanning a letter run.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::fmt;

/// All lexical categories the lexer can produce.
///
/// The set is closed: every consumer matches exhaustively over it, so adding
/// a variant forces every dispatch site to be revisited at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Synthetic terminator; the lexer yields it forever once input is spent.
    EndOfInput,
    /// A byte with no lexical meaning; the literal carries the offending byte.
    Illegal,

    Identifier,
    IntegerLiteral,

    // Operators
    Assign,      // =
    Plus,        // +
    Minus,       // -
    Bang,        // !
    Asterisk,    // *
    Slash,       // /
    LessThan,    // <
    GreaterThan, // >
    Equal,       // ==
    NotEqual,    // !=

    // Punctuation
    Comma,      // ,
    Semicolon,  // ;
    LeftParen,  // (
    RightParen, // )
    LeftBrace,  // {
    RightBrace, // }

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::EndOfInput => write!(f, "end of input"),
            TokenKind::Illegal => write!(f, "illegal character"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::IntegerLiteral => write!(f, "integer literal"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Bang => write!(f, "'!'"),
            TokenKind::Asterisk => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::LessThan => write!(f, "'<'"),
            TokenKind::GreaterThan => write!(f, "'>'"),
            TokenKind::Equal => write!(f, "'=='"),
            TokenKind::NotEqual => write!(f, "'!='"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::LeftParen => write!(f, "'('"),
            TokenKind::RightParen => write!(f, "')'"),
            TokenKind::LeftBrace => write!(f, "'{{'"),
            TokenKind::RightBrace => write!(f, "'}}'"),
            TokenKind::Function => write!(f, "'fn'"),
            TokenKind::Let => write!(f, "'let'"),
            TokenKind::True => write!(f, "'true'"),
            TokenKind::False => write!(f, "'false'"),
            TokenKind::If => write!(f, "'if'"),
            TokenKind::Else => write!(f, "'else'"),
            TokenKind::Return => write!(f, "'return'"),
        }
    }
}

/// Smallest lexical unit: a kind plus the literal text it was scanned from.
///
/// Tokens are immutable values with no identity beyond kind+literal equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// The terminator token; its literal is empty.
    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "end of input"),
            TokenKind::Illegal => write!(f, "illegal character '{}'", self.literal),
            TokenKind::Identifier => write!(f, "identifier '{}'", self.literal),
            TokenKind::IntegerLiteral => write!(f, "integer literal {}", self.literal),
            _ => write!(f, "'{}'", self.literal),
        }
    }
}

/// Keyword table, read-only after initialization.
///
/// This is the only process-wide shared structure in the crate; independent
/// parses may therefore run concurrently.
static KEYWORDS: Lazy<FxHashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut keywords = FxHashMap::default();
    keywords.insert("fn", TokenKind::Function);
    keywords.insert("let", TokenKind::Let);
    keywords.insert("true", TokenKind::True);
    keywords.insert("false", TokenKind::False);
    keywords.insert("if", TokenKind::If);
    keywords.insert("else", TokenKind::Else);
    keywords.insert("return", TokenKind::Return);
    keywords
});

/// Classify a scanned letter run: keyword kind if the table matches,
/// [`TokenKind::Identifier`] otherwise.
pub fn lookup_identifier(literal: &str) -> TokenKind {
    KEYWORDS
        .get(literal)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}
