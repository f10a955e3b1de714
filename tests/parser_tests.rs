// tests/parser_tests.rs

use fqparser::ast::{Token, TokenKind};
use fqparser::hooks::{HookCall, NoHooks, ParseHooks, RecordingHooks};
use fqparser::lexer::Lexer;
use fqparser::location::Location;
use fqparser::number::{Comparison, NumberArg};
use fqparser::source::{Observed, Replay};
use fqparser::{LexErrorKind, ParseError, Parser, ParserConfig, SyntaxErrorKind, parse};
use rstest::rstest;

fn reductions(input: &str) -> Vec<HookCall> {
    let mut hooks = RecordingHooks::new();
    parse(Lexer::new(input), &mut hooks).unwrap();
    hooks.calls
}

fn parse_error(input: &str) -> ParseError {
    parse(Lexer::new(input), &mut NoHooks).unwrap_err()
}

fn string_arg(value: &str) -> HookCall {
    HookCall::StringArg(value.to_string())
}

// ============================================================================
// Leaves
// ============================================================================

#[test]
fn test_true_alone() {
    assert_eq!(reductions("-true"), vec![HookCall::True]);
}

#[test]
fn test_false_alone() {
    assert_eq!(reductions("find -false"), vec![HookCall::False]);
}

#[rstest]
#[case("")]
#[case("find")]
#[case("   ")]
fn test_empty_query(#[case] input: &str) {
    assert!(reductions(input).is_empty());
}

#[test]
fn test_starting_points_only() {
    assert_eq!(
        reductions("find src tools"),
        vec![
            HookCall::StartingPoint("src".into()),
            HookCall::StartingPoint("tools".into()),
        ]
    );
}

#[test]
fn test_zero_argument_actions() {
    assert_eq!(
        reductions("-print -prune"),
        vec![
            HookCall::Predicate(TokenKind::Print, 0),
            HookCall::Predicate(TokenKind::Prune, 0),
            HookCall::ImplicitList(2),
        ]
    );
}

#[test]
fn test_string_argument_may_look_like_keyword() {
    assert_eq!(
        reductions("-name -o -name ( -name ;"),
        vec![
            string_arg("-o"),
            HookCall::Predicate(TokenKind::Name, 1),
            string_arg("("),
            HookCall::Predicate(TokenKind::Name, 1),
            string_arg(";"),
            HookCall::Predicate(TokenKind::Name, 1),
            HookCall::ImplicitList(3),
        ]
    );
}

#[test]
fn test_number_arguments() {
    assert_eq!(
        reductions("-mindepth 2 -maxdepth 4"),
        vec![
            HookCall::NumberArg(NumberArg::exact(2)),
            HookCall::Predicate(TokenKind::Mindepth, 1),
            HookCall::NumberArg(NumberArg::exact(4)),
            HookCall::Predicate(TokenKind::Maxdepth, 1),
            HookCall::ImplicitList(2),
        ]
    );
}

#[test]
fn test_signed_number_arguments() {
    assert_eq!(
        reductions("-mtime -7 -links +1"),
        vec![
            HookCall::NumberArg(NumberArg::new(7, Comparison::LessThan)),
            HookCall::Predicate(TokenKind::Mtime, 1),
            HookCall::NumberArg(NumberArg::new(1, Comparison::GreaterThan)),
            HookCall::Predicate(TokenKind::Links, 1),
            HookCall::ImplicitList(2),
        ]
    );
}

#[test]
fn test_exec_action() {
    assert_eq!(
        reductions("src tools -type f -exec ls -l {} ;"),
        vec![
            HookCall::StartingPoint("src".into()),
            HookCall::StartingPoint("tools".into()),
            string_arg("f"),
            HookCall::Predicate(TokenKind::Type, 1),
            HookCall::ExecArg("ls".into()),
            HookCall::ExecArg("-l".into()),
            HookCall::ExecArg("{}".into()),
            HookCall::Exec(TokenKind::Exec, 3),
            HookCall::ImplicitList(2),
        ]
    );
}

#[rstest]
#[case("-exec", TokenKind::Exec)]
#[case("-execdir", TokenKind::Execdir)]
#[case("-ok", TokenKind::Ok)]
#[case("-okdir", TokenKind::Okdir)]
fn test_every_exec_action(#[case] keyword: &str, #[case] kind: TokenKind) {
    let input = format!("{keyword} rm {{}} \\; -print");
    assert_eq!(
        reductions(&input),
        vec![
            HookCall::ExecArg("rm".into()),
            HookCall::ExecArg("{}".into()),
            HookCall::Exec(kind, 2),
            HookCall::Predicate(TokenKind::Print, 0),
            HookCall::ImplicitList(2),
        ]
    );
}

// ============================================================================
// Connectives and precedence
// ============================================================================

#[test]
fn test_grouped_disjunction_before_action() {
    let mut tokens = vec![];
    let mut hooks = RecordingHooks::new();
    let source = Observed::new(
        Lexer::new("find ( -name build -o -name node_modules ) -prune"),
        |token: &Token| tokens.push(token.kind),
    );
    parse(source, &mut hooks).unwrap();

    assert_eq!(
        tokens,
        vec![
            TokenKind::Find,
            TokenKind::LeftParen,
            TokenKind::Name,
            TokenKind::StringArg,
            TokenKind::Or,
            TokenKind::Name,
            TokenKind::StringArg,
            TokenKind::RightParen,
            TokenKind::Prune,
            TokenKind::Eof,
        ]
    );
    assert_eq!(hooks.string_args(), vec!["build", "node_modules"]);
    assert_eq!(
        hooks.calls,
        vec![
            string_arg("build"),
            HookCall::Predicate(TokenKind::Name, 1),
            string_arg("node_modules"),
            HookCall::Predicate(TokenKind::Name, 1),
            HookCall::Or,
            HookCall::Predicate(TokenKind::Prune, 0),
            HookCall::ImplicitList(2),
        ]
    );
}

#[test]
fn test_negated_path_in_implicit_list() {
    let mut hooks = RecordingHooks::new();
    parse(Lexer::new(". -type f ! -path '*/node_modules/*'"), &mut hooks).unwrap();

    assert_eq!(hooks.count(|c| *c == HookCall::Not), 1);
    assert_eq!(hooks.count(|c| matches!(c, HookCall::ImplicitList(2))), 1);
    assert_eq!(hooks.string_args(), vec!["f", "*/node_modules/*"]);
    assert_eq!(
        hooks.calls,
        vec![
            HookCall::StartingPoint(".".into()),
            string_arg("f"),
            HookCall::Predicate(TokenKind::Type, 1),
            string_arg("*/node_modules/*"),
            HookCall::Predicate(TokenKind::Path, 1),
            HookCall::Not,
            HookCall::ImplicitList(2),
        ]
    );
}

#[rstest]
#[case("-true -false -o -true", vec![
    HookCall::True, HookCall::False, HookCall::ImplicitList(2), HookCall::True, HookCall::Or,
])]
#[case("-true -o -false -a -true", vec![
    HookCall::True, HookCall::False, HookCall::True, HookCall::And, HookCall::Or,
])]
#[case("-true -o -false -o -true", vec![
    HookCall::True, HookCall::False, HookCall::Or, HookCall::True, HookCall::Or,
])]
#[case("-true -false -and -true", vec![
    HookCall::True, HookCall::False, HookCall::ImplicitList(2), HookCall::True, HookCall::And,
])]
#[case("-true -and -false -true", vec![
    HookCall::True, HookCall::False, HookCall::And, HookCall::True, HookCall::ImplicitList(2),
])]
#[case("-true -false -true", vec![
    HookCall::True, HookCall::False, HookCall::True, HookCall::ImplicitList(3),
])]
#[case("! ! -true", vec![HookCall::True, HookCall::Not, HookCall::Not])]
#[case("-not -true -or -false", vec![
    HookCall::True, HookCall::Not, HookCall::False, HookCall::Or,
])]
#[case("! ( -true -o -false )", vec![
    HookCall::True, HookCall::False, HookCall::Or, HookCall::Not,
])]
#[case("( ( -true ) )", vec![HookCall::True])]
fn test_precedence(#[case] input: &str, #[case] expected: Vec<HookCall>) {
    assert_eq!(reductions(input), expected, "Failed for input: {}", input);
}

#[test]
fn test_connective_spellings_are_interchangeable() {
    assert_eq!(reductions("-true -a -false"), reductions("-true -and -false"));
    assert_eq!(reductions("-true -o -false"), reductions("-true -or -false"));
    assert_eq!(reductions("! -true"), reductions("-not -true"));
}

#[test]
fn test_single_operand_is_not_a_list() {
    let calls = reductions("( -true ) -o -false");
    assert!(!calls.iter().any(|c| matches!(c, HookCall::ImplicitList(_))));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unclosed_group_reports_end_of_input() {
    let err = parse_error("( -name build");
    assert_eq!(err.syntax_kind(), Some(SyntaxErrorKind::UnmatchedParenthesis));
    assert_eq!(err.location().begin.column, 14);
    assert!(err.location().is_empty());
    assert_eq!(
        err.to_string(),
        "syntax error: unmatched parenthesis at end of input at 1:14"
    );
}

#[test]
fn test_missing_exec_terminator() {
    let err = parse_error("-exec ls -l {}");
    assert_eq!(err.syntax_kind(), Some(SyntaxErrorKind::MissingExecTerminator));
    assert_eq!(err.location().begin.offset, 14);
}

#[rstest]
#[case("-true )", SyntaxErrorKind::UnmatchedParenthesis, 7)]
#[case(")", SyntaxErrorKind::UnmatchedParenthesis, 1)]
#[case("( )", SyntaxErrorKind::EmptyParentheses, 3)]
#[case("-name", SyntaxErrorKind::MissingArgument, 6)]
#[case("-mindepth", SyntaxErrorKind::MissingArgument, 10)]
#[case("-exec ;", SyntaxErrorKind::MissingArgument, 7)]
#[case("-true -o", SyntaxErrorKind::UnexpectedToken, 9)]
#[case("-true -and -o -false", SyntaxErrorKind::UnexpectedToken, 12)]
#[case("-true src", SyntaxErrorKind::UnexpectedToken, 7)]
#[case("!", SyntaxErrorKind::UnexpectedToken, 2)]
#[case("( -true -false", SyntaxErrorKind::UnmatchedParenthesis, 15)]
fn test_syntax_errors(
    #[case] input: &str,
    #[case] kind: SyntaxErrorKind,
    #[case] column: u32,
) {
    let err = parse_error(input);
    assert_eq!(err.syntax_kind(), Some(kind), "Failed for input: {}", input);
    assert_eq!(err.location().begin.column, column, "Failed for input: {}", input);
}

#[rstest]
#[case("-kind f", LexErrorKind::UnknownPredicate("-kind".into()))]
#[case("-mindepth two", LexErrorKind::MalformedNumber("two".into()))]
#[case("-name 'build", LexErrorKind::UnterminatedQuote('\''))]
fn test_lexical_errors(#[case] input: &str, #[case] kind: LexErrorKind) {
    let err = parse_error(input);
    assert_eq!(err.lexical_kind(), Some(&kind));
    assert_eq!(err.syntax_kind(), None);
}

#[test]
fn test_hooks_see_prefix_before_error() {
    let mut hooks = RecordingHooks::new();
    let result = parse(Lexer::new("-true -o ( -false"), &mut hooks);
    assert!(result.is_err());
    assert_eq!(hooks.calls, vec![HookCall::True, HookCall::False]);
}

// ============================================================================
// Nesting limit
// ============================================================================

#[test]
fn test_nesting_limit() {
    let config = ParserConfig::default().with_max_nesting_depth(2);

    Parser::new(Lexer::new("( ( -true ) )"), &mut NoHooks)
        .with_config(config)
        .parse()
        .unwrap();

    let err = Parser::new(Lexer::new("( ( ( -true ) ) )"), &mut NoHooks)
        .with_config(config)
        .parse()
        .unwrap_err();
    assert_eq!(err.syntax_kind(), Some(SyntaxErrorKind::NestingTooDeep));
    assert_eq!(err.location().begin.column, 5);
}

#[test]
fn test_default_nesting_limit_rejects_runaway_input() {
    let input = "( ".repeat(10_000);
    let err = parse_error(&input);
    assert_eq!(err.syntax_kind(), Some(SyntaxErrorKind::NestingTooDeep));
}

fn parse_with_limit(input: &str, limit: usize) -> Result<(), ParseError> {
    Parser::new(Lexer::new(input), &mut NoHooks)
        .with_config(ParserConfig::default().with_max_nesting_depth(limit))
        .parse()
}

#[rstest]
#[case("! ! -true")]
#[case("-true -o -false -o -true")]
#[case("-true -and -false -and -true")]
#[case("! -true -false")]
#[case("( ( -true -o -false ) )")]
fn test_expression_height_within_limit(#[case] input: &str) {
    assert!(parse_with_limit(input, 3).is_ok(), "Failed for input: {}", input);
}

#[rstest]
#[case("! ! ! -true", 1)]
#[case("-true -o -false -o -true -o -false", 26)]
#[case("-true -and -false -and -true -and -false", 30)]
#[case("! ! -true -false", 1)]
#[case("! ( -true -o ( -false -o -true ) )", 1)]
fn test_expression_height_over_limit(#[case] input: &str, #[case] column: u32) {
    let err = parse_with_limit(input, 3).unwrap_err();
    assert_eq!(
        err.syntax_kind(),
        Some(SyntaxErrorKind::NestingTooDeep),
        "Failed for input: {}",
        input
    );
    assert_eq!(err.location().begin.column, column, "Failed for input: {}", input);
}

#[test]
fn test_default_limit_counts_negations() {
    assert!(parse(Lexer::new(&("! ".repeat(255) + "-true")), &mut NoHooks).is_ok());

    let err = parse_error(&("! ".repeat(256) + "-true"));
    assert_eq!(err.syntax_kind(), Some(SyntaxErrorKind::NestingTooDeep));

    let err = parse_error(&("! ".repeat(1_000_000) + "-true"));
    assert_eq!(err.syntax_kind(), Some(SyntaxErrorKind::NestingTooDeep));
    assert_eq!(err.location().begin.column, 1);
}

#[test]
fn test_default_limit_counts_connective_chains() {
    let or_chain = |terms: usize| vec!["-true"; terms].join(" -o ");
    assert!(parse(Lexer::new(&or_chain(256)), &mut NoHooks).is_ok());
    assert_eq!(
        parse_error(&or_chain(257)).syntax_kind(),
        Some(SyntaxErrorKind::NestingTooDeep)
    );

    let and_chain = vec!["-false"; 200_000].join(" -a ");
    assert_eq!(
        parse_error(&and_chain).syntax_kind(),
        Some(SyntaxErrorKind::NestingTooDeep)
    );
}

#[test]
fn test_height_error_stops_reductions() {
    let mut hooks = RecordingHooks::new();
    let result = Parser::new(Lexer::new("-true -o -false -o -print"), &mut hooks)
        .with_config(ParserConfig::default().with_max_nesting_depth(2))
        .parse();
    assert!(result.is_err());
    assert_eq!(
        hooks.calls,
        vec![
            HookCall::True,
            HookCall::False,
            HookCall::Or,
            HookCall::Predicate(TokenKind::Print, 0),
        ]
    );
}

// ============================================================================
// Token sources and hooks
// ============================================================================

#[test]
fn test_replayed_tokens() {
    let loc = Location::default();
    let source = Replay::new([
        Token::new(TokenKind::Name, loc),
        Token::string_arg("*.rs", loc),
        Token::new(TokenKind::Or, loc),
        Token::new(TokenKind::Not, loc),
        Token::new(TokenKind::Empty, loc),
    ]);
    let mut hooks = RecordingHooks::new();
    parse(source, &mut hooks).unwrap();

    assert_eq!(
        hooks.calls,
        vec![
            string_arg("*.rs"),
            HookCall::Predicate(TokenKind::Name, 1),
            HookCall::Predicate(TokenKind::Empty, 0),
            HookCall::Not,
            HookCall::Or,
        ]
    );
}

#[test]
fn test_replayed_wrong_argument_kind() {
    let loc = Location::default();
    let source: Replay = [
        Token::new(TokenKind::Mindepth, loc),
        Token::string_arg("2", loc),
    ]
    .into_iter()
    .collect();
    let err = parse(source, &mut NoHooks).unwrap_err();
    assert_eq!(err.syntax_kind(), Some(SyntaxErrorKind::UnexpectedToken));
}

#[derive(Default)]
struct ArgumentCounter {
    strings: usize,
    numbers: usize,
}

impl ParseHooks for ArgumentCounter {
    fn on_string_arg(&mut self, _value: &str) {
        self.strings += 1;
    }

    fn on_number_arg(&mut self, _value: NumberArg) {
        self.numbers += 1;
    }
}

#[test]
fn test_partial_hooks() {
    let mut counter = ArgumentCounter::default();
    parse(
        Lexer::new("-name a -iname b -mmin -5 -print -exec echo ;"),
        &mut counter,
    )
    .unwrap();
    assert_eq!((counter.strings, counter.numbers), (2, 1));
}

#[test]
fn test_dyn_hooks() {
    let mut recording = RecordingHooks::new();
    {
        let hooks: &mut dyn ParseHooks = &mut recording;
        parse(Lexer::new("-true"), hooks).unwrap();
    }
    assert_eq!(recording.calls, vec![HookCall::True]);
}
