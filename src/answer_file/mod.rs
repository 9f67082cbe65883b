//! Answer files: which Puppet classes to apply and with which parameters.
//!
//! An answer file is a YAML mapping from class names to either a boolean
//! (enable or disable the class with its defaults) or a mapping of
//! parameters (the class is enabled with those values).
//!
//! ```yaml
//! foreman: true
//! foreman::plugin::ansible: false
//! puppet:
//!   server: true
//!   server_foreman_url: https://foreman.example.com
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kafo::answer_file::{AnswerFile, TracingReporter};
//!
//! # fn example() -> kafo::Result<()> {
//! let yaml = "foreman: true\npuppet:\n  server: true\n";
//! let answers = AnswerFile::from_yaml("answers.yaml", yaml, None, &TracingReporter)?;
//!
//! assert_eq!(answers.puppet_classes(), vec!["foreman", "puppet"]);
//! assert!(answers.class_enabled("puppet"));
//! assert_eq!(answers.parameters_for_class("foreman").len(), 0);
//! # Ok(())
//! # }
//! ```

mod reporter;
mod version;

pub use reporter::{Reporter, TracingReporter};
pub use version::AnswerFileVersion;

use crate::error::{Error, Result};

use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Anything that names a Puppet class.
pub trait PuppetClass {
    /// The class name as written in the answer file.
    fn identifier(&self) -> &str;
}

impl PuppetClass for str {
    fn identifier(&self) -> &str {
        self
    }
}

impl PuppetClass for String {
    fn identifier(&self) -> &str {
        self
    }
}

/// A validated answer file.
#[derive(Debug, Clone)]
pub struct AnswerFile {
    filename: PathBuf,
    version: AnswerFileVersion,
    answers: BTreeMap<String, Value>,
}

impl AnswerFile {
    /// Read and validate the answer file at `path`.
    ///
    /// `version` defaults to 1. Problems are sent to `reporter` before the
    /// matching error is returned.
    pub fn load<P: AsRef<Path>>(
        path: P,
        version: Option<u64>,
        reporter: &dyn Reporter,
    ) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading answer file {:?}", path);
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                reporter.error(&format!("No answer file found at {}", path.display()));
                return Err(Error::NoAnswerFile {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        Self::from_yaml(path, &text, version, reporter)
    }

    /// Parse and validate answers from YAML text.
    ///
    /// `filename` is only used for reporting.
    pub fn from_yaml<P: Into<PathBuf>>(
        filename: P,
        yaml: &str,
        version: Option<u64>,
        reporter: &dyn Reporter,
    ) -> Result<Self> {
        let filename = filename.into();
        let version = AnswerFileVersion::try_from(version.unwrap_or(1))?;

        let document: Value = match yaml.trim().is_empty() {
            true => Value::Null,
            false => serde_yaml::from_str(yaml)?,
        };
        let mapping = match document {
            Value::Null => Mapping::new(),
            Value::Mapping(mapping) => mapping,
            _ => {
                reporter.error(&format!(
                    "Answer file at {} must contain a hash of classes.",
                    filename.display()
                ));
                return Err(Error::InvalidValues {
                    path: filename,
                    classes: Vec::new(),
                });
            }
        };

        let mut answers = BTreeMap::new();
        let mut invalid = Vec::new();
        for (class, value) in mapping {
            let class = match class {
                Value::String(class) => class,
                other => {
                    invalid.push(describe_key(&other));
                    continue;
                }
            };
            match value {
                Value::Mapping(_) | Value::Bool(_) => {
                    answers.insert(class, value);
                }
                _ => invalid.push(class),
            }
        }

        if !invalid.is_empty() {
            reporter.error(&format!(
                "Answer file at {} has invalid values for {}. Please ensure they are either a hash or true/false.",
                filename.display(),
                invalid.join(", ")
            ));
            return Err(Error::InvalidValues {
                path: filename,
                classes: invalid,
            });
        }

        debug!("Answer file {:?} (version {}) has {} classes", filename, version, answers.len());
        Ok(Self {
            filename,
            version,
            answers,
        })
    }

    /// Path the answers were read from.
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// Format version of the file.
    pub fn version(&self) -> AnswerFileVersion {
        self.version
    }

    /// Raw answers, keyed by class name.
    pub fn answers(&self) -> &BTreeMap<String, Value> {
        &self.answers
    }

    /// Class names, sorted.
    pub fn puppet_classes(&self) -> Vec<&str> {
        self.answers.keys().map(String::as_str).collect()
    }

    /// Parameters given for a class; empty unless the answer is a mapping.
    pub fn parameters_for_class<C: PuppetClass + ?Sized>(&self, puppet_class: &C) -> Mapping {
        match self.answers.get(puppet_class.identifier()) {
            Some(Value::Mapping(params)) => params.clone(),
            _ => Mapping::new(),
        }
    }

    /// Whether a class is enabled: `true`, or given as a mapping of parameters.
    pub fn class_enabled<C: PuppetClass + ?Sized>(&self, puppet_class: &C) -> bool {
        match self.answers.get(puppet_class.identifier()) {
            Some(Value::Bool(enabled)) => *enabled,
            Some(Value::Mapping(_)) => true,
            _ => false,
        }
    }
}

fn describe_key(key: &Value) -> String {
    serde_yaml::to_string(key)
        .map(|s| s.trim_end().to_string())
        .unwrap_or_else(|_| format!("{key:?}"))
}
