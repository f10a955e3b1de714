//! Grammar for find-style queries.
//!
//! ```text
//! query   := FIND? STARTING_POINT* expr? EOF
//! expr    := and ( OR and )*
//! and     := unary ( AND? unary )*
//! unary   := NOT* primary
//! primary := TRUE | FALSE
//!          | KEYWORD                      -- zero-argument predicate or action
//!          | KEYWORD STRING_ARG           -- lexer armed with StringArgument
//!          | KEYWORD NUMBER_ARG           -- lexer armed with NumberArgument
//!          | EXEC STRING_ARG+ SEMICOLON   -- lexer armed with ExecArguments
//!          | LEFT_PAREN expr RIGHT_PAREN
//! ```
//!
//! Lookahead is fetched lazily, one token at a time, so the parser can set the
//! lexer's mode after consuming a predicate keyword and before the argument
//! behind it is scanned.
//!
//! [`ParserConfig::max_nesting_depth`] bounds both parenthesis nesting and the
//! height of the expression the reductions describe. Every `!`, `-o`, `-and`
//! and implicit list adds a level, so a flat chain of ten thousand `-o` is as
//! deep as ten thousand nested groups.

use tracing::{debug, trace};

use crate::ast::{Token, TokenKind};
use crate::config::ParserConfig;
use crate::error::{ParseError, SyntaxError, SyntaxErrorKind};
use crate::hooks::ParseHooks;
use crate::lexer::Mode;
use crate::location::Location;
use crate::source::TokenSource;
use crate::vocabulary::{self, ArgumentKind};

pub struct Parser<'h, S, H: ?Sized> {
    source: S,
    hooks: &'h mut H,
    lookahead: Option<Token>,
    location: Location,
    depth: usize,
    config: ParserConfig,
}

fn error(kind: SyntaxErrorKind, token: &Token) -> ParseError {
    SyntaxError::new(kind, token.kind, token.location).into()
}

/// Height of the tree a reduction produces from operands of the given heights.
fn parent_height(left: usize, right: usize) -> usize {
    left.max(right) + 1
}

impl<'h, S, H> Parser<'h, S, H>
where
    S: TokenSource,
    H: ParseHooks + ?Sized,
{
    pub fn new(source: S, hooks: &'h mut H) -> Self {
        Parser {
            source,
            hooks,
            lookahead: None,
            location: Location::default(),
            depth: 0,
            config: ParserConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    fn peek(&mut self) -> Result<&Token, ParseError> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.source.next_token(&mut self.location)?,
        };
        Ok(self.lookahead.insert(token))
    }

    fn peek_kind(&mut self) -> Result<TokenKind, ParseError> {
        Ok(self.peek()?.kind)
    }

    fn advance(&mut self) -> Result<Token, ParseError> {
        match self.lookahead.take() {
            Some(token) => Ok(token),
            None => Ok(self.source.next_token(&mut self.location)?),
        }
    }

    /// Fail with `NestingTooDeep` at `token` once `height` exceeds the limit.
    fn check_height(&self, height: usize, token: &Token) -> Result<usize, ParseError> {
        if height > self.config.max_nesting_depth {
            return Err(error(SyntaxErrorKind::NestingTooDeep, token));
        }
        Ok(height)
    }

    /// Arm `mode` and pull the token scanned under it.
    fn advance_in(&mut self, mode: Mode) -> Result<Token, ParseError> {
        debug_assert!(self.lookahead.is_none(), "mode armed after lookahead");
        self.source.set_mode(mode);
        self.advance()
    }

    /// Parse a complete query, reporting each reduction to the hooks.
    pub fn parse(mut self) -> Result<(), ParseError> {
        debug!("parse session started");

        if self.peek_kind()? == TokenKind::Find {
            self.advance()?;
        }

        while self.peek_kind()? == TokenKind::StartingPoint {
            let token = self.advance()?;
            self.hooks.on_starting_point(token.as_str().unwrap_or_default());
        }

        if self.peek_kind()? == TokenKind::Eof {
            debug!("empty expression");
            return Ok(());
        }

        self.parse_or()?;

        let token = self.advance()?;
        match token.kind {
            TokenKind::Eof => {
                debug!(location = %token.location, "parse session finished");
                Ok(())
            }
            TokenKind::RightParen => Err(error(SyntaxErrorKind::UnmatchedParenthesis, &token)),
            _ => Err(error(SyntaxErrorKind::UnexpectedToken, &token)),
        }
    }

    /// Each `parse_*` method returns the height of the expression it reduced.
    fn parse_or(&mut self) -> Result<usize, ParseError> {
        let mut height = self.parse_and()?;

        while self.peek_kind()? == TokenKind::Or {
            let or = self.advance()?;
            let right = self.parse_and()?;
            height = self.check_height(parent_height(height, right), &or)?;
            trace!("reduce or");
            self.hooks.on_binary_or_expression();
        }
        Ok(height)
    }

    /// Implicit and explicit conjunction share one precedence tier. A run of
    /// juxtaposed operands is reduced as one list right before an explicit
    /// `-and` and at the end of the tier.
    fn parse_and(&mut self) -> Result<usize, ParseError> {
        let first = self.peek()?.clone();
        let mut run = Run::start(first, self.parse_unary()?);

        loop {
            let kind = self.peek_kind()?;
            if kind == TokenKind::And {
                let left = self.reduce_list(&run)?;
                let and = self.advance()?;
                let right = self.parse_unary()?;
                let height = self.check_height(parent_height(left, right), &and)?;
                trace!("reduce and");
                self.hooks.on_binary_and_expression();
                run = Run::start(and, height);
            } else if vocabulary::starts_primary(kind) {
                let height = self.parse_unary()?;
                run.push(height);
            } else {
                break;
            }
        }

        self.reduce_list(&run)
    }

    fn reduce_list(&mut self, run: &Run) -> Result<usize, ParseError> {
        // a single operand stands for itself
        if run.count == 1 {
            return Ok(run.height);
        }
        let height = self.check_height(run.height + 1, &run.first)?;
        trace!(count = run.count, "reduce implicit list");
        self.hooks.on_and_from_implicit_list(run.count);
        Ok(height)
    }

    fn parse_unary(&mut self) -> Result<usize, ParseError> {
        let mut negations = None;
        while self.peek_kind()? == TokenKind::Not {
            let not = self.advance()?;
            let (first, count) = negations.unwrap_or((not, 0));
            // the operand adds at least one more level
            self.check_height(count + 2, &first)?;
            negations = Some((first, count + 1));
        }

        let height = self.parse_primary()?;

        let Some((first, count)) = negations else {
            return Ok(height);
        };
        let height = self.check_height(height + count, &first)?;
        for _ in 0..count {
            trace!("reduce not");
            self.hooks.on_unary_not_expression();
        }
        Ok(height)
    }

    fn parse_primary(&mut self) -> Result<usize, ParseError> {
        let token = self.advance()?;

        match token.kind {
            TokenKind::True => self.hooks.on_true(),
            TokenKind::False => self.hooks.on_false(),
            TokenKind::LeftParen => return self.parse_group(&token),
            TokenKind::RightParen if self.depth == 0 => {
                return Err(error(SyntaxErrorKind::UnmatchedParenthesis, &token));
            }
            kind if vocabulary::starts_primary(kind) => {
                self.parse_predicate(&token)?;
            }
            _ => return Err(error(SyntaxErrorKind::UnexpectedToken, &token)),
        }
        Ok(1)
    }

    /// A group adds no node of its own; its height is its contents'.
    fn parse_group(&mut self, open: &Token) -> Result<usize, ParseError> {
        if self.depth >= self.config.max_nesting_depth {
            return Err(error(SyntaxErrorKind::NestingTooDeep, open));
        }
        if self.peek_kind()? == TokenKind::RightParen {
            let close = self.advance()?;
            return Err(error(SyntaxErrorKind::EmptyParentheses, &close));
        }

        self.depth += 1;
        let height = self.parse_or();
        self.depth -= 1;
        let height = height?;

        let close = self.advance()?;
        match close.kind {
            TokenKind::RightParen => Ok(height),
            TokenKind::Eof => Err(error(SyntaxErrorKind::UnmatchedParenthesis, &close)),
            _ => Err(error(SyntaxErrorKind::UnexpectedToken, &close)),
        }
    }

    fn parse_predicate(&mut self, keyword: &Token) -> Result<(), ParseError> {
        let arg_count = match vocabulary::arguments(keyword.kind) {
            ArgumentKind::None => 0,
            ArgumentKind::String => {
                let arg = self.argument(Mode::StringArgument, TokenKind::StringArg)?;
                self.hooks.on_string_arg(arg.as_str().unwrap_or_default());
                1
            }
            ArgumentKind::Number => {
                let arg = self.argument(Mode::NumberArgument, TokenKind::NumberArg)?;
                self.hooks.on_number_arg(arg.as_number().unwrap_or_default());
                1
            }
            ArgumentKind::Exec => return self.parse_exec(keyword.kind),
        };

        trace!(predicate = keyword.kind.spelling(), "reduce predicate");
        self.hooks.on_predicate(keyword.kind, arg_count);
        Ok(())
    }

    fn argument(&mut self, mode: Mode, expected: TokenKind) -> Result<Token, ParseError> {
        let token = self.advance_in(mode)?;
        if token.kind == expected {
            Ok(token)
        } else if token.is_eof() {
            Err(error(SyntaxErrorKind::MissingArgument, &token))
        } else {
            Err(error(SyntaxErrorKind::UnexpectedToken, &token))
        }
    }

    fn parse_exec(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        let mut arg_count = 0;
        let mut token = self.advance_in(Mode::ExecArguments)?;

        loop {
            match token.kind {
                TokenKind::StringArg => {
                    self.hooks.on_exec_arg(token.as_str().unwrap_or_default());
                    arg_count += 1;
                }
                TokenKind::Semicolon if arg_count > 0 => break,
                TokenKind::Semicolon => {
                    return Err(error(SyntaxErrorKind::MissingArgument, &token));
                }
                TokenKind::Eof => {
                    return Err(error(SyntaxErrorKind::MissingExecTerminator, &token));
                }
                _ => return Err(error(SyntaxErrorKind::UnexpectedToken, &token)),
            }
            token = self.advance()?;
        }

        trace!(action = kind.spelling(), arg_count, "reduce exec");
        self.hooks.on_exec(kind, arg_count);
        Ok(())
    }
}

/// Juxtaposed operands awaiting reduction as one implicit list.
struct Run {
    /// Token that opened the run, where a too-deep list is reported
    first: Token,
    count: usize,
    /// Height of the tallest operand so far
    height: usize,
}

impl Run {
    fn start(first: Token, height: usize) -> Self {
        Run {
            first,
            count: 1,
            height,
        }
    }

    fn push(&mut self, height: usize) {
        self.count += 1;
        self.height = self.height.max(height);
    }
}

/// Parse everything `source` yields, reporting reductions to `hooks`.
pub fn parse<S, H>(source: S, hooks: &mut H) -> Result<(), ParseError>
where
    S: TokenSource,
    H: ParseHooks + ?Sized,
{
    Parser::new(source, hooks).parse()
}
