//! Error handling for the kafo library.
//!
//! The progress tracker never fails on its input; the errors below come from
//! the surrounding pieces: reading answer files, building data types and
//! feeding the tracker from an I/O source.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can happen when using kafo.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O Error.
    ///
    /// Raised while reading the output of a monitored process or an answer file.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// The answer file does not exist.
    #[error("No answer file found at {}", path.display())]
    NoAnswerFile { path: PathBuf },

    /// Some top-level answers are neither a hash of parameters nor a boolean.
    #[error("Answer file at {} has invalid values for {}", path.display(), classes.join(", "))]
    InvalidValues { path: PathBuf, classes: Vec<String> },

    /// The requested answer file format version is not supported.
    #[error("Unsupported answer file version: {0}")]
    UnsupportedVersion(u64),

    /// The answer file is not valid YAML.
    #[error("YAML error")]
    Yaml {
        #[from]
        source: serde_yaml::Error,
    },

    /// A pattern could not be compiled.
    #[error("Invalid regular expression")]
    InvalidRegex {
        #[from]
        source: regex::Error,
    },

    /// No data type is registered under this name.
    #[error("Unknown data type: {0}")]
    UnknownDataType(String),

    /// The data type exists but its arguments could not be understood.
    #[error("Invalid data type arguments: {0}")]
    InvalidDataTypeArguments(String),

    /// A progress bar template was rejected by indicatif.
    #[error("Invalid progress bar template: {0}")]
    InvalidTemplate(String),

    /// Progress characters indicatif cannot draw a bar with.
    #[error("Invalid progress characters: {0}")]
    InvalidProgressChars(String),
}

/// Result type alias for operations that can fail with a kafo error.
pub type Result<T> = std::result::Result<T, Error>;
