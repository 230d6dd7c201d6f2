//! Release phases and their sort order

use std::cmp::Ordering;
use std::fmt;

/// The release phase of a [`Version`](super::Version)
///
/// Ordering follows [`ReleasePhase::rank`]: the named pre-release phases sort
/// before `Stable`, and `Adhoc` (arbitrary build labels) sorts after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleasePhase {
    Alpha,
    Beta,
    Rc,
    /// Restricted-availability stable release, not a pre-release
    CloudOnly,
    Stable,
    Adhoc,
}

impl ReleasePhase {
    /// Numeric sort rank, also rendered by the `%p` format placeholder
    pub const fn rank(self) -> u8 {
        match self {
            ReleasePhase::Alpha => 1,
            ReleasePhase::Beta => 2,
            ReleasePhase::Rc => 3,
            ReleasePhase::CloudOnly => 4,
            ReleasePhase::Stable => 5,
            ReleasePhase::Adhoc => 6,
        }
    }

    /// Suffix spelling, rendered by `%P`. Empty for `Stable` and `Adhoc`.
    pub const fn name(self) -> &'static str {
        match self {
            ReleasePhase::Alpha => "alpha",
            ReleasePhase::Beta => "beta",
            ReleasePhase::Rc => "rc",
            ReleasePhase::CloudOnly => "cloudonly",
            ReleasePhase::Stable | ReleasePhase::Adhoc => "",
        }
    }

    /// Look up a named phase suffix as it appears in a version string
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "alpha" => Some(ReleasePhase::Alpha),
            "beta" => Some(ReleasePhase::Beta),
            "rc" => Some(ReleasePhase::Rc),
            "cloudonly" => Some(ReleasePhase::CloudOnly),
            _ => None,
        }
    }
}

impl PartialOrd for ReleasePhase {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ReleasePhase {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for ReleasePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleasePhase::Stable => write!(f, "stable"),
            ReleasePhase::Adhoc => write!(f, "adhoc"),
            named => write!(f, "{}", named.name()),
        }
    }
}
