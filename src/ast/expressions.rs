use std::fmt;

use crate::lexer::quote_word;
use crate::number::NumberArg;

/// A typed predicate argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    String(String),
    Number(NumberArg),
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::String(s) => f.write_str(&quote_word(s)),
            Argument::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Expression tree built from a parsed query.
///
/// Rendering an expression with `Display` yields find syntax that parses
/// back to an equal tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// `-true`
    True,

    /// `-false`
    False,

    /// Negation
    ///
    /// # Examples
    /// ```text
    /// ! -path '*/.git/*'
    /// ```
    Not(Box<Expression>),

    /// Explicit conjunction
    ///
    /// # Examples
    /// ```text
    /// -type f -and -name '*.rs'
    /// ```
    And(Box<Expression>, Box<Expression>),

    /// Disjunction
    ///
    /// # Examples
    /// ```text
    /// -name build -o -name node_modules
    /// ```
    Or(Box<Expression>, Box<Expression>),

    /// Implicit conjunction of two or more juxtaposed expressions
    ///
    /// # Examples
    /// ```text
    /// -type f -name '*.rs' -print
    /// ```
    List(Vec<Expression>),

    /// A named test or action with its arguments, e.g. `name` with `["build"]`
    Predicate {
        name: String,
        arguments: Vec<Argument>,
    },

    /// An exec-style action and its raw argument words
    ///
    /// # Examples
    /// ```text
    /// -exec ls -l {} ;
    /// ```
    Exec {
        action: String,
        arguments: Vec<String>,
    },
}

impl Expression {
    pub fn not(inner: Expression) -> Self {
        Expression::Not(Box::new(inner))
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or(Box::new(left), Box::new(right))
    }

    pub fn predicate(name: &str, arguments: Vec<Argument>) -> Self {
        Expression::Predicate {
            name: name.to_string(),
            arguments,
        }
    }

    fn is_conjunction(&self) -> bool {
        matches!(self, Expression::And(..) | Expression::List(_))
    }
}

/// Writes `expr`, parenthesized when `wrap` says it would otherwise
/// regroup on re-parse.
fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expression, wrap: bool) -> fmt::Result {
    if wrap {
        write!(f, "( {expr} )")
    } else {
        write!(f, "{expr}")
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::True => f.write_str("-true"),
            Expression::False => f.write_str("-false"),
            Expression::Not(inner) => {
                f.write_str("! ")?;
                let wrap = !matches!(
                    **inner,
                    Expression::Not(_)
                        | Expression::True
                        | Expression::False
                        | Expression::Predicate { .. }
                        | Expression::Exec { .. }
                );
                write_operand(f, inner, wrap)
            }
            Expression::Or(left, right) => {
                write_operand(f, left, false)?;
                f.write_str(" -o ")?;
                write_operand(f, right, matches!(**right, Expression::Or(..)))
            }
            Expression::And(left, right) => {
                write_operand(f, left, matches!(**left, Expression::Or(..)))?;
                f.write_str(" -and ")?;
                let wrap = right.is_conjunction() || matches!(**right, Expression::Or(..));
                write_operand(f, right, wrap)
            }
            Expression::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    let wrap = match item {
                        Expression::Or(..) | Expression::List(_) => true,
                        Expression::And(..) => i > 0,
                        _ => false,
                    };
                    write_operand(f, item, wrap)?;
                }
                Ok(())
            }
            Expression::Predicate { name, arguments } => {
                write!(f, "-{name}")?;
                for arg in arguments {
                    write!(f, " {arg}")?;
                }
                Ok(())
            }
            Expression::Exec { action, arguments } => {
                write!(f, "-{action}")?;
                for arg in arguments {
                    write!(f, " {}", quote_word(arg))?;
                }
                f.write_str(" ;")
            }
        }
    }
}
