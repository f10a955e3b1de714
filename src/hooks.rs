//! Reduction callbacks invoked by the parser.
//!
//! The grammar never builds a tree itself. Each time a rule completes it
//! calls the matching [`ParseHooks`] method, in post-order, so an
//! implementation can keep a value stack: leaves push, connectives pop their
//! operands and push the combined node. Every method defaults to a no-op,
//! which lets a consumer listen to only the reductions it cares about.

use std::fmt;

use crate::ast::TokenKind;
use crate::number::NumberArg;

pub trait ParseHooks {
    /// A path operand before the expression.
    fn on_starting_point(&mut self, _path: &str) {}

    /// A string argument of the predicate about to be reduced.
    fn on_string_arg(&mut self, _value: &str) {}

    /// A numeric argument of the predicate about to be reduced.
    fn on_number_arg(&mut self, _value: NumberArg) {}

    /// One raw word of an exec-style argument list.
    fn on_exec_arg(&mut self, _value: &str) {}

    fn on_true(&mut self) {}

    fn on_false(&mut self) {}

    /// A predicate or zero-argument action, with the `arg_count` arguments
    /// reported just before it.
    fn on_predicate(&mut self, _kind: TokenKind, _arg_count: usize) {}

    /// An exec-style action, with the `arg_count` words reported just
    /// before it.
    fn on_exec(&mut self, _kind: TokenKind, _arg_count: usize) {}

    /// `!` or `-not` applied to the last expression.
    fn on_unary_not_expression(&mut self) {}

    /// `-and` applied to the last two expressions.
    fn on_binary_and_expression(&mut self) {}

    /// The last `count` expressions were juxtaposed without a connective.
    /// `count` is always at least two.
    fn on_and_from_implicit_list(&mut self, _count: usize) {}

    /// `-o` applied to the last two expressions.
    fn on_binary_or_expression(&mut self) {}
}

/// Hooks that ignore everything; useful when only validity matters.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl ParseHooks for NoHooks {}

/// One recorded hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookCall {
    StartingPoint(String),
    StringArg(String),
    NumberArg(NumberArg),
    ExecArg(String),
    True,
    False,
    Predicate(TokenKind, usize),
    Exec(TokenKind, usize),
    Not,
    And,
    ImplicitList(usize),
    Or,
}

impl fmt::Display for HookCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookCall::StartingPoint(path) => write!(f, "starting_point {path:?}"),
            HookCall::StringArg(value) => write!(f, "string_arg {value:?}"),
            HookCall::NumberArg(value) => write!(f, "number_arg {value}"),
            HookCall::ExecArg(value) => write!(f, "exec_arg {value:?}"),
            HookCall::True => f.write_str("true"),
            HookCall::False => f.write_str("false"),
            HookCall::Predicate(kind, n) => write!(f, "predicate {}/{n}", kind.spelling()),
            HookCall::Exec(kind, n) => write!(f, "exec {}/{n}", kind.spelling()),
            HookCall::Not => f.write_str("unary_not"),
            HookCall::And => f.write_str("binary_and"),
            HookCall::ImplicitList(n) => write!(f, "and_from_implicit_list {n}"),
            HookCall::Or => f.write_str("binary_or"),
        }
    }
}

/// Records every hook call in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingHooks {
    pub calls: Vec<HookCall>,
}

impl RecordingHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, predicate: impl Fn(&HookCall) -> bool) -> usize {
        self.calls.iter().filter(|c| predicate(c)).count()
    }

    pub fn string_args(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HookCall::StringArg(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl ParseHooks for RecordingHooks {
    fn on_starting_point(&mut self, path: &str) {
        self.calls.push(HookCall::StartingPoint(path.to_string()));
    }

    fn on_string_arg(&mut self, value: &str) {
        self.calls.push(HookCall::StringArg(value.to_string()));
    }

    fn on_number_arg(&mut self, value: NumberArg) {
        self.calls.push(HookCall::NumberArg(value));
    }

    fn on_exec_arg(&mut self, value: &str) {
        self.calls.push(HookCall::ExecArg(value.to_string()));
    }

    fn on_true(&mut self) {
        self.calls.push(HookCall::True);
    }

    fn on_false(&mut self) {
        self.calls.push(HookCall::False);
    }

    fn on_predicate(&mut self, kind: TokenKind, arg_count: usize) {
        self.calls.push(HookCall::Predicate(kind, arg_count));
    }

    fn on_exec(&mut self, kind: TokenKind, arg_count: usize) {
        self.calls.push(HookCall::Exec(kind, arg_count));
    }

    fn on_unary_not_expression(&mut self) {
        self.calls.push(HookCall::Not);
    }

    fn on_binary_and_expression(&mut self) {
        self.calls.push(HookCall::And);
    }

    fn on_and_from_implicit_list(&mut self, count: usize) {
        self.calls.push(HookCall::ImplicitList(count));
    }

    fn on_binary_or_expression(&mut self) {
        self.calls.push(HookCall::Or);
    }
}
