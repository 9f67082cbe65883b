//! `Pattern[...]` and `Regexp` data types.

use crate::error::Result;

use regex::Regex;
use serde_yaml::Value;
use std::fmt;

/// A string matching at least one of a set of regular expressions.
#[derive(Debug, Clone)]
pub struct PatternType {
    regexes: Vec<Regex>,
}

impl PatternType {
    /// Compile the given patterns.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let regexes = patterns
            .into_iter()
            .map(|pattern| Regex::new(pattern.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { regexes })
    }

    /// The compiled regexes.
    pub fn regexes(&self) -> &[Regex] {
        &self.regexes
    }

    /// Return `true` if `value` is a string matched by any of the regexes.
    pub fn valid(&self, value: &Value) -> bool {
        value
            .as_str()
            .is_some_and(|value| self.regexes.iter().any(|regex| regex.is_match(value)))
    }
}

impl PartialEq for PatternType {
    fn eq(&self, other: &Self) -> bool {
        self.regexes.len() == other.regexes.len()
            && self
                .regexes
                .iter()
                .zip(&other.regexes)
                .all(|(a, b)| a.as_str() == b.as_str())
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let regexes: Vec<String> = self
            .regexes
            .iter()
            .map(|regex| format!("/{}/", regex.as_str()))
            .collect();
        write!(f, "regexes matching {}", regexes.join(" or "))
    }
}

/// A string holding a valid regular expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegexpType;

impl RegexpType {
    /// Create the type.
    pub fn new() -> Self {
        Self
    }

    /// Return `true` if `value` is a string that compiles as a regex.
    pub fn valid(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|value| Regex::new(value).is_ok())
    }
}

impl fmt::Display for RegexpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "regular expression")
    }
}
