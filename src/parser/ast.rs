//! AST (Abstract Syntax Tree) definitions for the Ember front end
//!
//! The parser is the sole producer of these nodes; once built they are
//! immutable. Ownership is strictly hierarchical (`Box`/`Vec`, no sharing,
//! no cycles), so a tree is freed by plain recursive destruction.
//!
//! Every node implements [`std::fmt::Display`] with a deterministic,
//! parenthesized rendering — infix expressions as `(left op right)`, prefix
//! expressions as `(opoperand)` — used for diagnostics and golden tests.
//! Rendering a parsed tree and re-parsing the text reproduces a structurally
//! equal tree.

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// An identifier as it appears in source: a bare name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Prefix (unary) operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    Not,    // !x
    Negate, // -x
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixOperator::Not => f.write_str("!"),
            PrefixOperator::Negate => f.write_str("-"),
        }
    }
}

/// Infix (binary) operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    LessThan,
    GreaterThan,
    Equal,
    NotEqual,
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lexeme = match self {
            InfixOperator::Add => "+",
            InfixOperator::Subtract => "-",
            InfixOperator::Multiply => "*",
            InfixOperator::Divide => "/",
            InfixOperator::LessThan => "<",
            InfixOperator::GreaterThan => ">",
            InfixOperator::Equal => "==",
            InfixOperator::NotEqual => "!=",
        };
        f.write_str(lexeme)
    }
}

/// Statements of the language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `let name = value;`
    Let { name: Identifier, value: Expression },
    /// `return value;` — the value expression is mandatory
    Return { value: Expression },
    /// A bare expression used in statement position
    Expression { expr: Expression },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {} = {};", name, value),
            Statement::Return { value } => write!(f, "return {};", value),
            Statement::Expression { expr } => write!(f, "{}", expr),
        }
    }
}

/// A brace-delimited sequence of statements; may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for statement in &self.statements {
            write!(f, " {}", statement)?;
        }
        f.write_str(" }")
    }
}

/// Expressions of the language.
///
/// Every expression-holding field of a successfully parsed node is populated;
/// nodes are constructed bottom-up only after all sub-parses succeed, so the
/// tree never contains a "half" node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(i64),
    BooleanLiteral(bool),
    Prefix {
        operator: PrefixOperator,
        operand: Box<Expression>,
    },
    Infix {
        operator: InfixOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    If {
        condition: Box<Expression>,
        consequence: BlockStatement,
        /// Present only when an `else` keyword was consumed.
        alternative: Option<BlockStatement>,
    },
    FunctionLiteral {
        parameters: Vec<Identifier>,
        body: BlockStatement,
    },
    Call {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(identifier) => write!(f, "{}", identifier),
            Expression::IntegerLiteral(value) => write!(f, "{}", value),
            Expression::BooleanLiteral(value) => write!(f, "{}", value),
            Expression::Prefix { operator, operand } => write!(f, "({}{})", operator, operand),
            Expression::Infix {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if ({}) {}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, " else {}", alternative)?;
                }
                Ok(())
            }
            Expression::FunctionLiteral { parameters, body } => {
                let params: Vec<String> = parameters.iter().map(|p| p.to_string()).collect();
                write!(f, "fn({}) {}", params.join(","), body)
            }
            Expression::Call { callee, arguments } => {
                let args: Vec<String> = arguments.iter().map(|a| a.to_string()).collect();
                write!(f, "{}({})", callee, args.join(","))
            }
        }
    }
}

/// Top-level program structure: an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{}", statement)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_let_statement_rendering() {
        let program = Program {
            statements: vec![Statement::Let {
                name: Identifier::new("myVar"),
                value: Expression::Identifier(Identifier::new("anotherVar")),
            }],
        };

        assert_eq!(program.to_string(), "let myVar = anotherVar;\n");
    }

    #[test]
    fn test_expression_rendering() {
        let expr = Expression::Infix {
            operator: InfixOperator::Multiply,
            left: Box::new(Expression::Prefix {
                operator: PrefixOperator::Negate,
                operand: Box::new(Expression::IntegerLiteral(1)),
            }),
            right: Box::new(Expression::IntegerLiteral(2)),
        };

        assert_eq!(expr.to_string(), "((-1) * 2)");
    }

    #[test]
    fn test_if_rendering() {
        let expr = Expression::If {
            condition: Box::new(Expression::Identifier(Identifier::new("x"))),
            consequence: BlockStatement {
                statements: vec![Statement::Expression {
                    expr: Expression::Identifier(Identifier::new("y")),
                }],
            },
            alternative: None,
        };

        assert_eq!(expr.to_string(), "if (x) { y }");
    }

    #[test]
    fn test_function_and_call_rendering() {
        let function = Expression::FunctionLiteral {
            parameters: vec![Identifier::new("x"), Identifier::new("y")],
            body: BlockStatement {
                statements: vec![Statement::Expression {
                    expr: Expression::Infix {
                        operator: InfixOperator::Add,
                        left: Box::new(Expression::Identifier(Identifier::new("x"))),
                        right: Box::new(Expression::Identifier(Identifier::new("y"))),
                    },
                }],
            },
        };
        let call = Expression::Call {
            callee: Box::new(function),
            arguments: vec![Expression::IntegerLiteral(1), Expression::IntegerLiteral(2)],
        };

        assert_eq!(call.to_string(), "fn(x,y) { (x + y) }(1,2)");
    }
}
