//! Builds an [`Expression`] tree from parser reductions.

use thiserror::Error;
use tracing::trace;

use crate::ast::{Argument, Expression, Query, TokenKind};
use crate::hooks::ParseHooks;
use crate::number::NumberArg;

/// The reductions received did not describe a single well-formed tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("`{reduction}` reduction needs {needed} operand(s), found {found}")]
    MissingOperands {
        reduction: &'static str,
        needed: usize,
        found: usize,
    },
    #[error("{0} expressions left over after the last reduction")]
    Unreduced(usize),
}

/// Stack-based tree builder.
///
/// Leaves are pushed as their reductions arrive and connectives replace the
/// operands on top of the stack. A well-formed parse leaves at most one
/// expression behind.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    starting_points: Vec<String>,
    arguments: Vec<Argument>,
    exec_arguments: Vec<String>,
    stack: Vec<Expression>,
    error: Option<BuildError>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the top `count` expressions in source order.
    fn pop_operands(&mut self, reduction: &'static str, count: usize) -> Option<Vec<Expression>> {
        if self.stack.len() < count {
            self.error.get_or_insert(BuildError::MissingOperands {
                reduction,
                needed: count,
                found: self.stack.len(),
            });
            return None;
        }
        Some(self.stack.split_off(self.stack.len() - count))
    }

    fn reduce_binary(
        &mut self,
        reduction: &'static str,
        combine: fn(Expression, Expression) -> Expression,
    ) {
        if let Some(operands) = self.pop_operands(reduction, 2) {
            let mut operands = operands.into_iter();
            if let (Some(left), Some(right)) = (operands.next(), operands.next()) {
                self.stack.push(combine(left, right));
            }
        }
    }

    fn take_arguments<T>(
        pending: &mut Vec<T>,
        count: usize,
        reduction: &'static str,
    ) -> Result<Vec<T>, BuildError> {
        if pending.len() < count {
            return Err(BuildError::MissingOperands {
                reduction,
                needed: count,
                found: pending.len(),
            });
        }
        Ok(pending.split_off(pending.len() - count))
    }

    /// Consume the builder, yielding the finished query.
    pub fn finish(mut self) -> Result<Query, BuildError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if self.stack.len() > 1 {
            return Err(BuildError::Unreduced(self.stack.len()));
        }
        Ok(Query {
            starting_points: self.starting_points,
            expression: self.stack.pop(),
        })
    }
}

fn predicate_name(kind: TokenKind) -> &'static str {
    let spelling = kind.spelling();
    spelling.strip_prefix('-').unwrap_or(spelling)
}

impl ParseHooks for TreeBuilder {
    fn on_starting_point(&mut self, path: &str) {
        self.starting_points.push(path.to_string());
    }

    fn on_string_arg(&mut self, value: &str) {
        self.arguments.push(Argument::String(value.to_string()));
    }

    fn on_number_arg(&mut self, value: NumberArg) {
        self.arguments.push(Argument::Number(value));
    }

    fn on_exec_arg(&mut self, value: &str) {
        self.exec_arguments.push(value.to_string());
    }

    fn on_true(&mut self) {
        self.stack.push(Expression::True);
    }

    fn on_false(&mut self) {
        self.stack.push(Expression::False);
    }

    fn on_predicate(&mut self, kind: TokenKind, arg_count: usize) {
        let name = predicate_name(kind);
        match Self::take_arguments(&mut self.arguments, arg_count, name) {
            Ok(arguments) => {
                trace!(predicate = name, "built predicate");
                self.stack.push(Expression::predicate(name, arguments));
            }
            Err(e) => {
                self.error.get_or_insert(e);
            }
        }
    }

    fn on_exec(&mut self, kind: TokenKind, arg_count: usize) {
        let action = predicate_name(kind);
        match Self::take_arguments(&mut self.exec_arguments, arg_count, action) {
            Ok(arguments) => self.stack.push(Expression::Exec {
                action: action.to_string(),
                arguments,
            }),
            Err(e) => {
                self.error.get_or_insert(e);
            }
        }
    }

    fn on_unary_not_expression(&mut self) {
        if let Some(inner) = self.pop_operands("not", 1).and_then(|v| v.into_iter().next()) {
            self.stack.push(Expression::not(inner));
        }
    }

    fn on_binary_and_expression(&mut self) {
        self.reduce_binary("and", Expression::and);
    }

    fn on_and_from_implicit_list(&mut self, count: usize) {
        if let Some(items) = self.pop_operands("list", count) {
            self.stack.push(Expression::List(items));
        }
    }

    fn on_binary_or_expression(&mut self) {
        self.reduce_binary("or", Expression::or);
    }
}
