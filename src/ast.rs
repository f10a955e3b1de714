//! # Find Query Language - Syntax Types
//!
//! This module defines the tokens produced by the [lexer](crate::lexer) and the
//! expression tree assembled by [`TreeBuilder`] from parser reductions.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens, their kinds and payloads
//! - **[expressions]** - Expression nodes (constants, predicates, connectives)
//! - **[query]** - Starting points plus the optional expression
//! - **[builder]** - [`ParseHooks`](crate::hooks::ParseHooks) implementation
//!   that turns reductions into an [`Expression`]
//!
//! ## Quick Start
//!
//! ```text
//! find . -type f ! -path '*/node_modules/*'
//! ```
//!
//! This query starts at `.` and keeps regular files outside any
//! `node_modules` directory.
//!
//! ## Core Concepts
//!
//! ### Starting Points First
//!
//! Path operands come before the first predicate and are kept in
//! [`Query::starting_points`], outside the expression tree.
//!
//! ### Precedence
//!
//! From loosest to tightest: `-o`, conjunction (`-and` or plain
//! juxtaposition), `!`/`-not`, then primaries and parenthesized groups.
//!
//! ```text
//! -name a -o -name b -type f     // Or(a, List[b, type f])
//! ( -name a -o -name b ) -type f // List[Or(a, b), type f]
//! ```
//!
//! ### Implicit Lists
//!
//! Juxtaposed expressions form an [`Expression::List`]; a single expression is
//! never wrapped.
pub mod builder;
pub mod expressions;
pub mod query;
pub mod tokens;

pub use builder::{BuildError, TreeBuilder};
pub use expressions::{Argument, Expression};
pub use query::Query;
pub use tokens::{Token, TokenKind, TokenValue};
