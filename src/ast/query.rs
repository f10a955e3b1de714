use std::fmt;

use crate::ast::Expression;
use crate::lexer::quote_word;

/// Complete parsed query.
///
/// Starting points are kept apart from the expression: they name where
/// evaluation begins rather than what it tests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    /// Paths given before the expression, in order
    pub starting_points: Vec<String>,

    /// The expression, or `None` to match everything
    pub expression: Option<Expression>,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the command word keeps a starting point named `find` from being
        // read back as the command itself
        f.write_str("find")?;
        for path in &self.starting_points {
            write!(f, " {}", quote_word(path))?;
        }
        if let Some(expression) = &self.expression {
            write!(f, " {expression}")?;
        }
        Ok(())
    }
}
