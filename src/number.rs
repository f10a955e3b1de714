//! Signed numeric arguments such as `-mindepth 2` or `-mtime +7`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static NUMBER_ARG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-]?)([0-9]+)$").expect("number pattern is valid"));

/// How a magnitude is compared against the measured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Comparison {
    /// No sign prefix: exactly `n`
    #[default]
    Exact,
    /// `+n`: more than `n`
    GreaterThan,
    /// `-n`: less than `n`
    LessThan,
}

impl Comparison {
    pub fn prefix(self) -> &'static str {
        match self {
            Comparison::Exact => "",
            Comparison::GreaterThan => "+",
            Comparison::LessThan => "-",
        }
    }
}

/// A magnitude together with its comparison sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NumberArg {
    pub magnitude: u64,
    pub comparison: Comparison,
}

impl NumberArg {
    pub fn new(magnitude: u64, comparison: Comparison) -> Self {
        NumberArg {
            magnitude,
            comparison,
        }
    }

    pub fn exact(magnitude: u64) -> Self {
        NumberArg::new(magnitude, Comparison::Exact)
    }
}

/// The text is not an optional sign followed by decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed numeric argument `{text}`")]
pub struct MalformedNumber {
    pub text: String,
}

impl FromStr for NumberArg {
    type Err = MalformedNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MalformedNumber {
            text: s.to_string(),
        };
        let caps = NUMBER_ARG.captures(s).ok_or_else(malformed)?;

        let comparison = match &caps[1] {
            "+" => Comparison::GreaterThan,
            "-" => Comparison::LessThan,
            _ => Comparison::Exact,
        };
        // digits only, so the sole failure mode is overflow
        let magnitude = caps[2].parse::<u64>().map_err(|_| malformed())?;

        Ok(NumberArg {
            magnitude,
            comparison,
        })
    }
}

impl fmt::Display for NumberArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.comparison.prefix(), self.magnitude)
    }
}
