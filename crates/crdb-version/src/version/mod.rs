//! CockroachDB binary versions
//!
//! A version is written `vX.Y.Z` with an optional suffix: a release phase
//! (`-alpha.1`, `-rc.3`, `-cloudonly.2`), a cloud-only sub-release nested under
//! a phase (`-beta.1-cloudonly-rc2`), an adhoc build counter (`-12-gabcdef`),
//! or one of several legacy labels. These are not semantic versions; only the
//! fixed set of suffix shapes listed on [`Version::parse`] is understood, and
//! ordering is defined by [`Version::cmp`].
//!
//! Copyright (c) 2025 The Cockroach Authors
//! Licensed under the Apache-2.0 license

mod format;
mod parser;
mod phase;

pub use phase::ReleasePhase;

use crate::error::{Result, VersionError};
use crate::major::MajorVersion;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::debug;

/// A CockroachDB (binary) version
///
/// Versions compare, hash, and test equal on their parsed fields only. The
/// original text is kept for display, so two versions that parse to the same
/// fields are equal even when their strings differ (eg "v24.1.0" and
/// "v24.1.0-fips").
///
/// The default value is the empty sentinel; it is never produced by a
/// successful [`Version::parse`].
#[derive(Debug, Clone, Default)]
pub struct Version {
    pub(crate) year: u64,
    pub(crate) ordinal: u64,
    pub(crate) patch: u64,
    /// `None` only for the empty sentinel
    pub(crate) phase: Option<ReleasePhase>,
    pub(crate) phase_ordinal: u64,
    pub(crate) phase_sub_ordinal: u64,
    pub(crate) custom_ordinal: u64,
    pub(crate) adhoc_label: String,
    pub(crate) raw: String,
}

type SortKey<'a> = (u64, u64, u64, Option<ReleasePhase>, u64, u64, u64, &'a str);

impl Version {
    /// Parse a version string.
    ///
    /// The accepted shapes, tried in this order (first match wins):
    ///
    /// 1. `vX.Y.Z`, optionally with `-fips`
    /// 2. `vX.Y.Z-<phase>.<n>` for phase alpha, beta, rc, or cloudonly
    /// 3. `vX.Y.Z-<n>-g<sha>`, an adhoc build
    /// 4. `vX.Y.Z-<phase>.<n>-<m>-g<sha>`, an adhoc build on a pre-release
    /// 5. `vX.Y.Z-<phase>.<n>-cloudonly-rc<m>` or `...-cloudonly.<m>`
    /// 6. `vX.Y.Z-cloudonly-rc<n>` (legacy)
    /// 7. `vX.Y.Z-cloudonly` or `vX.Y.Z-cloudonly<n>` (legacy)
    /// 8. `vX.Y.Z-<label>` for any other label
    /// 9. `sha256:<label>:latest-vX.Y-build`
    ///
    /// Anything else is [`VersionError::MalformedInput`].
    pub fn parse(version_str: &str) -> Result<Self> {
        parser::parse(version_str)
    }

    /// Like [`Version::parse`] but panics on any error. Intended for literals
    /// known at build time, never for untrusted input.
    pub fn must_parse(version_str: &str) -> Self {
        match Self::parse(version_str) {
            Ok(version) => version,
            Err(e) => panic!("{}", e),
        }
    }

    /// The "vX.Y" part
    pub fn major(&self) -> MajorVersion {
        MajorVersion::new(self.year, self.ordinal)
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The release phase, `None` for the empty version
    pub fn phase(&self) -> Option<ReleasePhase> {
        self.phase
    }

    /// The original text this version was parsed from
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Comparison fields, most significant first
    fn sort_key(&self) -> SortKey<'_> {
        (
            self.year,
            self.ordinal,
            self.patch,
            self.phase,
            self.phase_ordinal,
            self.phase_sub_ordinal,
            self.custom_ordinal,
            &self.adhoc_label,
        )
    }

    pub fn less_than(&self, other: &Version) -> bool {
        self < other
    }

    /// True if `self >= other`
    pub fn at_least(&self, other: &Version) -> bool {
        self >= other
    }

    /// True for the zero value
    pub fn is_empty(&self) -> bool {
        *self == Version::default()
    }

    /// Compare only the release series ("vX.Y") of two versions
    pub fn compare_series(&self, other: &Version) -> Ordering {
        self.major().cmp(&other.major())
    }

    /// True for alpha, beta, and rc versions.
    ///
    /// Cloud-only versions are stable releases with restricted availability,
    /// so they are not pre-releases.
    pub fn is_prerelease(&self) -> bool {
        self.phase < Some(ReleasePhase::CloudOnly) && !self.is_empty()
    }

    /// True for builds with a `-<n>-g<sha>` suffix
    pub fn is_custom_build(&self) -> bool {
        self.custom_ordinal > 0
    }

    /// True for builds carrying an arbitrary legacy label
    pub fn is_adhoc_build(&self) -> bool {
        !self.adhoc_label.is_empty()
    }

    pub fn is_custom_or_adhoc_build(&self) -> bool {
        self.is_custom_build() || self.is_adhoc_build()
    }

    /// True for CockroachDB Cloud specific builds
    pub fn is_cloud_only_build(&self) -> bool {
        self.phase == Some(ReleasePhase::CloudOnly)
    }

    /// Returns the next patch release, eg v24.1.3 -> v24.1.4.
    ///
    /// Only stable versions can be incremented. Any adhoc build counter is
    /// dropped from the result.
    pub fn inc_patch(&self) -> Result<Version> {
        if self.phase != Some(ReleasePhase::Stable) {
            debug!(version = %self, "refusing to increment patch of non-stable version");
            return Err(VersionError::invalid_state(&self.raw, "is not a stable version"));
        }
        let patch = self
            .patch
            .checked_add(1)
            .ok_or_else(|| VersionError::invalid_state(&self.raw, "has no next patch number"))?;

        let mut next = Version {
            year: self.year,
            ordinal: self.ordinal,
            patch,
            phase: self.phase,
            ..Version::default()
        };
        next.raw = next.format("v%X.%Y.%Z");
        Ok(next)
    }

    /// Returns the next pre-release in the same phase, eg v24.1.0-rc.1 -> v24.1.0-rc.2.
    ///
    /// Versions with a cloud-only sub-release or an adhoc build counter are
    /// rejected.
    pub fn inc_pre_release(&self) -> Result<Version> {
        if !self.is_prerelease() {
            debug!(version = %self, "refusing to increment pre-release of non-prerelease version");
            return Err(VersionError::invalid_state(&self.raw, "is not a prerelease"));
        }
        if self.phase_sub_ordinal > 0 || self.custom_ordinal > 0 {
            debug!(version = %self, "refusing to increment pre-release of modified version");
            return Err(VersionError::invalid_state(
                &self.raw,
                "is not an unmodified pre-release",
            ));
        }
        let phase_ordinal = self
            .phase_ordinal
            .checked_add(1)
            .ok_or_else(|| VersionError::invalid_state(&self.raw, "has no next pre-release"))?;

        let mut next = Version {
            year: self.year,
            ordinal: self.ordinal,
            patch: self.patch,
            phase: self.phase,
            phase_ordinal,
            ..Version::default()
        };
        next.raw = next.format("v%X.%Y.%Z-%P.%o");
        Ok(next)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sort_key().hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// CockroachDB versions are not semantic versions. Fields are compared in
    /// the order year, ordinal, patch, phase, phase ordinal, phase sub-ordinal,
    /// adhoc build counter, adhoc label; the first difference decides.
    ///
    /// Consequences of that order:
    /// - "v24.1.0-rc.1" < "v24.1.0" < "v24.1.0-1-g9cbe7c5281"
    /// - "v24.1.0-rc.2" < "v24.1.0-rc.2-14-gabcdef" < "v24.1.0-rc.3"
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

/// Writes the original version string
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
