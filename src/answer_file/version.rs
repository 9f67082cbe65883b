//! Answer file format versions.

use crate::error::Error;
use std::fmt;

/// Format version of an answer file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerFileVersion {
    /// The first answer file format.
    #[default]
    V1,
    /// The current format.
    V2,
}

impl AnswerFileVersion {
    /// Return the numeric version.
    pub fn number(&self) -> u64 {
        match self {
            AnswerFileVersion::V1 => 1,
            AnswerFileVersion::V2 => 2,
        }
    }
}

impl TryFrom<u64> for AnswerFileVersion {
    type Error = Error;

    fn try_from(version: u64) -> Result<Self, Self::Error> {
        match version {
            1 => Ok(AnswerFileVersion::V1),
            2 => Ok(AnswerFileVersion::V2),
            other => Err(Error::UnsupportedVersion(other)),
        }
    }
}

impl fmt::Display for AnswerFileVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
