//! Scalar data types used to validate user supplied parameter values.
//!
//! Types are named the way Puppet writes them, e.g. `String[1, 64]` or
//! `Pattern['^\d+$', '^auto$']`, and validate YAML values.
//!
//! # Examples
//!
//! ```rust
//! use kafo::data_types::DataType;
//! use serde_yaml::Value;
//!
//! # fn example() -> kafo::Result<()> {
//! let data_type = DataType::new_from_string("String[1, 2]")?;
//! assert_eq!(data_type.to_string(), "string (between 1 and 2 characters)");
//! assert!(data_type.valid(&Value::from("fo")));
//! assert!(!data_type.valid(&Value::from("foo")));
//! # Ok(())
//! # }
//! ```

mod pattern;
mod string;

pub use pattern::{PatternType, RegexpType};
pub use string::StringType;

use crate::error::{Error, Result};

use serde_yaml::Value;
use std::fmt;

/// A registered data type.
#[derive(Debug, Clone, PartialEq)]
pub enum DataType {
    String(StringType),
    Pattern(PatternType),
    Regexp(RegexpType),
}

impl DataType {
    /// Build a data type from its Puppet notation.
    pub fn new_from_string(definition: &str) -> Result<Self> {
        let (name, args) = split_definition(definition)?;
        match name {
            "String" => {
                if args.len() > 2 {
                    return Err(Error::InvalidDataTypeArguments(definition.to_string()));
                }
                let min = match args.first() {
                    Some(arg) => parse_bound(arg, definition)?.unwrap_or(0),
                    None => 0,
                };
                let max = match args.get(1) {
                    Some(arg) => parse_bound(arg, definition)?,
                    None => None,
                };
                Ok(DataType::String(StringType::new(min, max)))
            }
            "Pattern" => Ok(DataType::Pattern(PatternType::new(&args)?)),
            "Regexp" if args.is_empty() => Ok(DataType::Regexp(RegexpType::new())),
            "Regexp" => Err(Error::InvalidDataTypeArguments(definition.to_string())),
            _ => Err(Error::UnknownDataType(name.to_string())),
        }
    }

    /// Name of the type.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::String(_) => "String",
            DataType::Pattern(_) => "Pattern",
            DataType::Regexp(_) => "Regexp",
        }
    }

    /// Return `true` if `value` is acceptable for this type.
    pub fn valid(&self, value: &Value) -> bool {
        match self {
            DataType::String(data_type) => data_type.valid(value),
            DataType::Pattern(data_type) => data_type.valid(value),
            DataType::Regexp(data_type) => data_type.valid(value),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::String(data_type) => fmt::Display::fmt(data_type, f),
            DataType::Pattern(data_type) => fmt::Display::fmt(data_type, f),
            DataType::Regexp(data_type) => fmt::Display::fmt(data_type, f),
        }
    }
}

/// Split `Name[arg, 'arg', /arg/]` into its name and unquoted arguments.
fn split_definition(definition: &str) -> Result<(&str, Vec<String>)> {
    let definition = definition.trim();
    let Some(open) = definition.find('[') else {
        return Ok((definition, Vec::new()));
    };
    let inner = definition[open + 1..]
        .strip_suffix(']')
        .ok_or_else(|| Error::InvalidDataTypeArguments(definition.to_string()))?;
    let args = split_arguments(inner)
        .ok_or_else(|| Error::InvalidDataTypeArguments(definition.to_string()))?;
    Ok((definition[..open].trim(), args))
}

/// Split on top-level commas, honouring `'...'`, `"..."` and `/.../` quoting.
fn split_arguments(inner: &str) -> Option<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quote = None;
    let mut escaped = false;

    for c in inner.chars() {
        match quote {
            Some(_) if escaped => {
                escaped = false;
                current.push(c);
            }
            Some(_) if c == '\\' => {
                escaped = true;
                current.push(c);
            }
            Some(q) if c == q => {
                quote = None;
                current.push(c);
            }
            Some(_) => current.push(c),
            None => match c {
                '\'' | '"' | '/' if current.trim().is_empty() => {
                    quote = Some(c);
                    current.push(c);
                }
                ',' => {
                    args.push(unquote(&current));
                    current.clear();
                }
                _ => current.push(c),
            },
        }
    }

    if quote.is_some() {
        return None;
    }
    if !current.trim().is_empty() || !args.is_empty() {
        args.push(unquote(&current));
    }
    Some(args)
}

fn unquote(arg: &str) -> String {
    let arg = arg.trim();
    for quote in ['\'', '"', '/'] {
        if arg.len() >= 2 && arg.starts_with(quote) && arg.ends_with(quote) {
            let inner = &arg[1..arg.len() - 1];
            return match quote {
                '/' => inner.replace("\\/", "/"),
                _ => inner.replace(&format!("\\{quote}"), &quote.to_string()),
            };
        }
    }
    arg.to_string()
}

/// Parse a length bound; `default` leaves it unset.
fn parse_bound(arg: &str, definition: &str) -> Result<Option<usize>> {
    if arg == "default" {
        return Ok(None);
    }
    arg.parse()
        .map(Some)
        .map_err(|_| Error::InvalidDataTypeArguments(definition.to_string()))
}
