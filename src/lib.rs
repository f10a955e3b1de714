pub mod ast;
pub mod cli;
pub mod config;
pub mod error;
pub mod hooks;
pub mod lexer;
pub mod location;
pub mod number;
pub mod parser;
pub mod source;
pub mod vocabulary;

pub use ast::{Argument, BuildError, Expression, Query, Token, TokenKind, TreeBuilder};
pub use config::{ConfigError, LogLevel, ParserConfig};
pub use error::{LexError, LexErrorKind, ParseError, SyntaxError, SyntaxErrorKind};
pub use hooks::{HookCall, NoHooks, ParseHooks, RecordingHooks};
pub use lexer::{Lexer, Mode, quote_word};
pub use location::{Location, Position};
pub use number::{Comparison, NumberArg};
pub use parser::{Parser, parse};
pub use source::{Observed, Replay, TokenSource};

use thiserror::Error;

/// Failure of [`parse_str`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("tree construction failed: {0}")]
    Build(#[from] BuildError),
}

/// Parse a query string into a [`Query`] with default limits.
pub fn parse_str(input: &str) -> Result<Query, Error> {
    parse_str_with_config(input, ParserConfig::default())
}

pub fn parse_str_with_config(input: &str, config: ParserConfig) -> Result<Query, Error> {
    let mut builder = TreeBuilder::new();
    Parser::new(Lexer::new(input), &mut builder)
        .with_config(config)
        .parse()?;
    Ok(builder.finish()?)
}
