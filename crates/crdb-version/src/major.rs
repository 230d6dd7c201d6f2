//! Major versions (release series) such as `v25.1`
//!
//! Copyright (c) 2025 The Cockroach Authors
//! Licensed under the Apache-2.0 license

use crate::error::{Result, VersionError};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

static MAJOR_VERSION_REGEX: OnceLock<Regex> = OnceLock::new();

fn major_version_regex() -> &'static Regex {
    MAJOR_VERSION_REGEX.get_or_init(|| {
        Regex::new(r"^v(0|[1-9][0-9]*)\.([1-9][0-9]*)$").expect("major version pattern compiles")
    })
}

/// A CockroachDB major version or release series, ie "v25.1"
///
/// The zero value is the empty sentinel. `Display` always renders the
/// canonical `v<year>.<ordinal>` form; the input text is not retained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MajorVersion {
    pub year: u64,
    pub ordinal: u64,
}

impl MajorVersion {
    pub const fn new(year: u64, ordinal: u64) -> Self {
        Self { year, ordinal }
    }

    /// Parse a major version string such as "v24.2"
    pub fn parse(version_str: &str) -> Result<Self> {
        let malformed = || VersionError::malformed("major version", version_str);

        let caps = major_version_regex()
            .captures(version_str)
            .ok_or_else(malformed)?;
        let year: u64 = caps[1].parse().map_err(|_| malformed())?;
        let ordinal: u64 = caps[2].parse().map_err(|_| malformed())?;

        Ok(Self { year, ordinal })
    }

    /// Like [`MajorVersion::parse`] but panics on any error. Intended for
    /// literals known at build time.
    pub fn must_parse(version_str: &str) -> Self {
        match Self::parse(version_str) {
            Ok(major) => major,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn less_than(&self, other: &MajorVersion) -> bool {
        self < other
    }

    pub fn at_least(&self, other: &MajorVersion) -> bool {
        self >= other
    }

    /// True for the zero value
    pub fn is_empty(&self) -> bool {
        *self == MajorVersion::default()
    }
}

impl fmt::Display for MajorVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}", self.year, self.ordinal)
    }
}

impl FromStr for MajorVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
