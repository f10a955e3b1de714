//! CLI support for fqparser
//!
//! Provides programmatic access to the `fq` commands so other tools can embed
//! them without spawning the binary.

mod check;
mod convert;
mod inspect;
#[cfg(feature = "cli")]
mod logging;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use convert::{expression_to_json, query_to_json, token_to_json};
pub use inspect::{TokenTrace, collect_reductions, collect_tokens};
#[cfg(feature = "cli")]
pub use logging::init_logging;

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),
    #[error("Internal error: {0}")]
    Build(#[from] crate::BuildError),
    #[error("Configuration error: {0}")]
    Config(#[from] crate::ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("No query provided. Pass it as an argument or pipe it to stdin.")]
    NoInput,
}

impl From<crate::Error> for CliError {
    fn from(e: crate::Error) -> Self {
        match e {
            crate::Error::Parse(e) => CliError::Parse(e),
            crate::Error::Build(e) => CliError::Build(e),
        }
    }
}
