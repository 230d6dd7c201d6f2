//! Nullable versions for storage contexts
//!
//! Copyright (c) 2025 The Cockroach Authors
//! Licensed under the Apache-2.0 license

use crate::version::Version;
use std::fmt;

/// A version that may be absent, eg a NULL database column.
///
/// The default value is absent and is stored as NULL. `valid` is the
/// discriminant: an absent value and a valid-but-empty value (read from an
/// empty string column) wrap the same empty [`Version`] but are not equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NullVersion {
    pub valid: bool,
    pub version: Version,
}

impl NullVersion {
    /// Wrap a version; the empty version becomes the absent value.
    pub fn new(version: Version) -> Self {
        Self {
            valid: !version.is_empty(),
            version,
        }
    }

    /// The absent value
    pub fn null() -> Self {
        Self::default()
    }

    pub fn as_option(&self) -> Option<&Version> {
        self.valid.then_some(&self.version)
    }
}

impl From<Version> for NullVersion {
    fn from(version: Version) -> Self {
        Self::new(version)
    }
}

impl From<Option<Version>> for NullVersion {
    fn from(version: Option<Version>) -> Self {
        match version {
            Some(version) => Self {
                valid: true,
                version,
            },
            None => Self::null(),
        }
    }
}

impl From<NullVersion> for Option<Version> {
    fn from(nv: NullVersion) -> Self {
        nv.valid.then_some(nv.version)
    }
}

impl fmt::Display for NullVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "{}", self.version)
        } else {
            write!(f, "NULL")
        }
    }
}
