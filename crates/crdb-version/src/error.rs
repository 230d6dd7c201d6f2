//! Error types for version parsing, derivation, and storage adapters
//!
//! Every recoverable failure in this crate is a [`VersionError`]. Programmer
//! errors (an unknown `format` placeholder, `must_parse` on bad input) panic
//! instead and never show up here.
//!
//! Copyright (c) 2025 The Cockroach Authors
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Result type alias for version operations
pub type Result<T> = std::result::Result<T, VersionError>;

/// Errors returned by parsing, derivation, and adapter operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The input does not match any accepted grammar pattern
    #[error("invalid {kind} string '{input}'")]
    MalformedInput {
        kind: &'static str,
        input: String,
    },

    /// A storage adapter received a value of the wrong underlying type
    #[error("cannot convert {found} to {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// A non-nullable adapter received NULL
    #[error("non-null {expected} string required")]
    RequiredValueMissing { expected: &'static str },

    /// A derivation was invoked on a version that does not satisfy its precondition
    #[error("version '{version}' {reason}")]
    InvalidState { version: String, reason: String },

    /// Unreachable grammar states
    #[error("internal error: {message}")]
    Internal { message: String },
}

/// Fieldless discriminant of [`VersionError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedInput,
    TypeMismatch,
    RequiredValueMissing,
    InvalidState,
    Internal,
}

impl VersionError {
    pub(crate) fn malformed(kind: &'static str, input: &str) -> Self {
        VersionError::MalformedInput {
            kind,
            input: input.to_string(),
        }
    }

    pub(crate) fn invalid_state(version: &str, reason: impl Into<String>) -> Self {
        VersionError::InvalidState {
            version: version.to_string(),
            reason: reason.into(),
        }
    }

    /// The kind of this error, for matching without destructuring
    pub fn kind(&self) -> ErrorKind {
        match self {
            VersionError::MalformedInput { .. } => ErrorKind::MalformedInput,
            VersionError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            VersionError::RequiredValueMissing { .. } => ErrorKind::RequiredValueMissing,
            VersionError::InvalidState { .. } => ErrorKind::InvalidState,
            VersionError::Internal { .. } => ErrorKind::Internal,
        }
    }
}
