//! Owned error handles for codec error conditions.
//!
//! A [`CodecError`] pairs a raw numeric code with its [`ErrorKind`]
//! classification and a human-readable description. Handles are plain
//! owned values: every constructor returns a fresh handle, nothing is
//! cached or shared between calls.

use crate::kind::ErrorKind;
use serde::Serialize;
use thiserror::Error;

/// A described codec error condition.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{description} (code {code})")]
pub struct CodecError {
    code: i32,
    kind: ErrorKind,
    description: String,
}

impl CodecError {
    /// Build a handle from a raw numeric code.
    ///
    /// The code is taken as-is; codes that map to no known category are
    /// kept verbatim and classified as [`ErrorKind::Unknown`].
    pub fn from_code(code: i32) -> Self {
        let kind = ErrorKind::from_code(code);
        let description = if kind == ErrorKind::Unknown {
            format!("Error number {} occurred", code)
        } else {
            kind.description().to_string()
        };
        Self {
            code,
            kind,
            description,
        }
    }

    /// Build a handle from an error category, using its canonical code.
    pub fn from_kind(kind: ErrorKind) -> Self {
        Self {
            code: kind.code(),
            kind,
            description: kind.description().to_string(),
        }
    }

    /// The raw numeric code of this condition.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// The category this condition classifies as.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable description of this condition.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether this condition belongs to the given category.
    pub fn is_kind(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl From<ErrorKind> for CodecError {
    fn from(kind: ErrorKind) -> Self {
        CodecError::from_kind(kind)
    }
}
