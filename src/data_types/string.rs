//! `String[min, max]` data type.

use serde_yaml::Value;
use std::fmt;

/// A string whose length in characters lies within bounds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringType {
    min: usize,
    max: Option<usize>,
}

impl StringType {
    /// Create a string type; `max` of `None` means unbounded.
    pub fn new(min: usize, max: Option<usize>) -> Self {
        Self { min, max }
    }

    /// Minimum length.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Maximum length, if any.
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// Return `true` if `value` is a string of acceptable length.
    pub fn valid(&self, value: &Value) -> bool {
        let Some(value) = value.as_str() else {
            return false;
        };
        let length = value.chars().count();
        length >= self.min && self.max.map_or(true, |max| length <= max)
    }
}

impl fmt::Display for StringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (0, None) => write!(f, "string"),
            (min, None) => write!(f, "string (at least {min} characters)"),
            (0, Some(max)) => write!(f, "string (up to {max} characters)"),
            (min, Some(max)) => write!(f, "string (between {min} and {max} characters)"),
        }
    }
}
