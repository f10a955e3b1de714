//! Token stream and reduction traces for a query

use super::CliError;
use crate::ast::Token;
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::hooks::{HookCall, NoHooks, RecordingHooks};
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::source::Observed;

/// Tokens pulled by one parse session and how the session ended.
#[derive(Debug)]
pub struct TokenTrace {
    /// Every token the parser pulled, in order, with modes applied
    pub tokens: Vec<Token>,
    /// Why the parse stopped early; the tokens above lead up to it
    pub error: Option<ParseError>,
}

/// Tokens in the order the parser pulled them, kept even when the parse fails.
pub fn collect_tokens(query: &str, config: ParserConfig) -> TokenTrace {
    let mut tokens = Vec::new();
    let source = Observed::new(Lexer::new(query), |token: &Token| tokens.push(token.clone()));
    let error = Parser::new(source, &mut NoHooks)
        .with_config(config)
        .parse()
        .err();
    TokenTrace { tokens, error }
}

/// Hook calls in the order the parser made them.
pub fn collect_reductions(query: &str, config: ParserConfig) -> Result<Vec<HookCall>, CliError> {
    let mut hooks = RecordingHooks::new();
    Parser::new(Lexer::new(query), &mut hooks)
        .with_config(config)
        .parse()?;
    Ok(hooks.calls)
}
