//! Validate find queries and render their expression trees

use super::{CliError, query_to_json};
use crate::{ParserConfig, parse_str_with_config};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The query to parse
    pub query: String,
    /// Only validate syntax, don't render the tree
    pub syntax_only: bool,
    /// Render the query back as canonical find syntax instead of JSON
    pub canonical: bool,
    /// Parser limits
    pub config: ParserConfig,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Parsed tree as JSON
    Parsed { tree: serde_json::Value },
    /// The query re-rendered in canonical form
    Canonical(String),
}

/// Execute a check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let query = parse_str_with_config(&options.query, options.config)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    if options.canonical {
        return Ok(CheckResult::Canonical(query.to_string()));
    }

    Ok(CheckResult::Parsed {
        tree: query_to_json(&query),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(query: &str) -> CheckOptions {
        CheckOptions {
            query: query.to_string(),
            ..CheckOptions::default()
        }
    }

    #[test]
    fn syntax_only_reports_validity() {
        let mut opts = options("find . -name '*.rs'");
        opts.syntax_only = true;
        assert!(matches!(
            execute_check(&opts),
            Ok(CheckResult::SyntaxValid)
        ));
    }

    #[test]
    fn renders_tree() {
        let Ok(CheckResult::Parsed { tree }) = execute_check(&options("src -true")) else {
            panic!("expected parsed result");
        };
        assert_eq!(tree["starting_points"][0], "src");
        assert_eq!(tree["expression"]["type"], "true");
    }

    #[test]
    fn renders_canonical_form_on_request() {
        let mut opts = options("src  -not -true -a -name '*.rs'");
        opts.canonical = true;
        let Ok(CheckResult::Canonical(text)) = execute_check(&opts) else {
            panic!("expected canonical result");
        };
        assert_eq!(text, "find src ! -true -and -name *.rs");
    }

    #[test]
    fn syntax_only_wins_over_canonical() {
        let mut opts = options("-true");
        opts.syntax_only = true;
        opts.canonical = true;
        assert!(matches!(
            execute_check(&opts),
            Ok(CheckResult::SyntaxValid)
        ));
    }

    #[test]
    fn surfaces_parse_errors() {
        let err = execute_check(&options("( -name build")).unwrap_err();
        assert!(matches!(err, CliError::Parse(_)));
        assert!(err.to_string().contains("unmatched parenthesis"));
    }
}
