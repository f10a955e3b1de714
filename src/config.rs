//! Parser limits and logging level, loaded from environment variables.
//!
//! Settings can be overridden with variables prefixed `FQ_`:
//!
//! - `FQ_MAX_NESTING_DEPTH`: deepest nesting accepted, counting parentheses
//!   and operator levels
//! - `FQ_LOG_LEVEL`: trace, debug, info, warn or error

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Default limit on nesting, in parentheses and in expression levels.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

const MAX_NESTING_DEPTH_VAR: &str = "FQ_MAX_NESTING_DEPTH";
const LOG_LEVEL_VAR: &str = "FQ_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {variable}: expected {expected}")]
    InvalidValue {
        variable: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("unknown log level '{0}', expected one of: trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Log level matching the `tracing` levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ConfigError::UnknownLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Read `FQ_LOG_LEVEL`, defaulting to `warn`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        lookup(LOG_LEVEL_VAR).map_or(Ok(Self::default()), |v| v.parse())
    }
}

/// Limits applied to one parse session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Parentheses nested deeper than this, or an expression tree taller
    /// than this, is a syntax error.
    pub max_nesting_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl ParserConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `FQ_MAX_NESTING_DEPTH` is
    /// set but is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let max_nesting_depth = match lookup(MAX_NESTING_DEPTH_VAR) {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(depth) if depth > 0 => depth,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        variable: MAX_NESTING_DEPTH_VAR,
                        value,
                        expected: "a positive integer",
                    });
                }
            },
            None => DEFAULT_MAX_NESTING_DEPTH,
        };

        Ok(Self { max_nesting_depth })
    }

    #[must_use]
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let pairs = pairs.to_vec();
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_without_variables() {
        let config = ParserConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, ParserConfig::default());
        assert_eq!(config.max_nesting_depth, 256);
        assert_eq!(LogLevel::from_vars(vars(&[])).unwrap(), LogLevel::Warn);
    }

    #[test]
    fn reads_nesting_depth() {
        let config = ParserConfig::from_vars(vars(&[("FQ_MAX_NESTING_DEPTH", "8")])).unwrap();
        assert_eq!(config.max_nesting_depth, 8);
    }

    #[test]
    fn rejects_bad_nesting_depth() {
        for bad in ["0", "-1", "deep"] {
            let err = ParserConfig::from_vars(vars(&[("FQ_MAX_NESTING_DEPTH", bad)])).unwrap_err();
            assert!(err.to_string().contains("FQ_MAX_NESTING_DEPTH"), "{err}");
        }
    }

    #[test]
    fn log_level_parsing() {
        assert_eq!("DEBUG".parse::<LogLevel>().ok(), Some(LogLevel::Debug));
        assert_eq!("warning".parse::<LogLevel>().ok(), Some(LogLevel::Warn));
        assert!("loud".parse::<LogLevel>().is_err());
        let level = LogLevel::from_vars(vars(&[("FQ_LOG_LEVEL", "trace")])).unwrap();
        assert_eq!(level.as_filter_str(), "trace");
    }
}
