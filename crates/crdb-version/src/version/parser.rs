//! Version string grammar
//!
//! Parsing tries a fixed list of anchored patterns in order and the first
//! match wins. The list is roughly ordered by how often each shape is seen:
//!
//! 1. `vX.Y.Z`, optionally with `-fips`
//! 2. `vX.Y.Z-<phase>.<n>` for phase alpha, beta, rc, or cloudonly
//! 3. `vX.Y.Z-<n>-g<sha>` (adhoc build: commit count past the tag and git SHA)
//! 4. `vX.Y.Z-<phase>.<n>-<m>-g<sha>` (adhoc build on top of a pre-release)
//! 5. `vX.Y.Z-<phase>.<n>-cloudonly-rc<m>` or `...-cloudonly.<m>`
//! 6. `vX.Y.Z-cloudonly-rc<n>` (legacy)
//! 7. `vX.Y.Z-cloudonly` or `vX.Y.Z-cloudonly<n>` (legacy)
//! 8. `vX.Y.Z-<label>` for any other label, sorting after `vX.Y.Z`
//! 9. `sha256:<label>:latest-vX.Y-build`, sorting after `vX.Y.0` and before `vX.Y.1`
//!
//! Some inputs satisfy more than one pattern (eg "v24.1.0-cloudonly.3"
//! matches both 2 and 8), so the order is significant.

use super::{ReleasePhase, Version};
use crate::error::{Result, VersionError};
use regex::{Captures, Regex};
use std::sync::OnceLock;
use tracing::{debug, trace};

const VERSION_PATTERNS: [&str; 9] = [
    r"^v(?P<year>[1-9][0-9]*)\.(?P<ordinal>[1-9][0-9]*)\.(?P<patch>(?:[1-9][0-9]*|0))(?:-fips)?$",
    r"^v(?P<year>[1-9][0-9]*)\.(?P<ordinal>[1-9][0-9]*)\.(?P<patch>(?:[1-9][0-9]*|0))-(?P<phase>alpha|beta|rc|cloudonly)\.(?P<phase_ordinal>[0-9]+)(?:-fips)?$",
    r"^v(?P<year>[1-9][0-9]*)\.(?P<ordinal>[1-9][0-9]*)\.(?P<patch>(?:[1-9][0-9]*|0))-(?P<custom_ordinal>(?:[1-9][0-9]*|0))-g[a-f0-9]+(?:-fips)?$",
    r"^v(?P<year>[1-9][0-9]*)\.(?P<ordinal>[1-9][0-9]*)\.(?P<patch>(?:[1-9][0-9]*|0))-(?P<phase>alpha|beta|rc|cloudonly).(?P<phase_ordinal>[0-9]+)-(?P<custom_ordinal>(?:[1-9][0-9]*|0))-g[a-f0-9]+(?:-fips)?$",
    r"^v(?P<year>[1-9][0-9]*)\.(?P<ordinal>[1-9][0-9]*)\.(?P<patch>(?:[1-9][0-9]*|0))-(?P<phase>alpha|beta|rc|cloudonly).(?P<phase_ordinal>[0-9]+)-cloudonly(-rc|\.)(?P<phase_sub_ordinal>(?:[1-9][0-9]*|0))$",
    r"^v(?P<year>[1-9][0-9]*)\.(?P<ordinal>[1-9][0-9]*)\.(?P<patch>(?:[1-9][0-9]*|0))-(?P<phase>cloudonly)-rc(?P<phase_ordinal>[0-9]+)$",
    r"^v(?P<year>[1-9][0-9]*)\.(?P<ordinal>[1-9][0-9]*)\.(?P<patch>(?:[1-9][0-9]*|0))-(?P<phase>cloudonly)(?P<phase_ordinal>[0-9]+)?$",
    r"^v(?P<year>[1-9][0-9]*)\.(?P<ordinal>[1-9][0-9]*)\.(?P<patch>(?:[1-9][0-9]*|0))-(?P<adhoc_label>[-a-zA-Z0-9\.\+]+)$",
    r"^sha256:(?P<adhoc_label>[^:]+):latest-v(?P<year>[1-9][0-9]*)\.(?P<ordinal>[1-9][0-9]*)-build$",
];

static VERSION_REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();

fn version_regexes() -> &'static [Regex] {
    VERSION_REGEXES.get_or_init(|| {
        VERSION_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern).expect("version pattern compiles"))
            .collect()
    })
}

pub(super) fn parse(version_str: &str) -> Result<Version> {
    for (index, regex) in version_regexes().iter().enumerate() {
        if let Some(caps) = regex.captures(version_str) {
            trace!(version = version_str, pattern = index + 1, "matched version pattern");
            return from_captures(version_str, &caps);
        }
    }

    debug!(version = version_str, "no version pattern matched");
    Err(VersionError::malformed("version", version_str))
}

fn from_captures(version_str: &str, caps: &Captures<'_>) -> Result<Version> {
    // groups are digit runs, so the only possible failure is overflow
    let number = |group: &str| -> Result<u64> {
        match caps.name(group) {
            Some(m) => m
                .as_str()
                .parse()
                .map_err(|_| VersionError::malformed("version", version_str)),
            None => Ok(0),
        }
    };

    let mut version = Version {
        year: number("year")?,
        ordinal: number("ordinal")?,
        patch: number("patch")?,
        phase: Some(ReleasePhase::Stable),
        raw: version_str.to_string(),
        ..Version::default()
    };

    // -alpha.1, -rc.3, -beta.1-cloudonly-rc1, ...
    if let Some(phase) = caps.name("phase") {
        let phase = phase.as_str();
        let named = ReleasePhase::from_name(phase).ok_or_else(|| VersionError::Internal {
            message: format!("unknown phase '{}' in '{}'", phase, version_str),
        })?;
        version.phase = Some(named);
        version.phase_ordinal = number("phase_ordinal")?;
        version.phase_sub_ordinal = number("phase_sub_ordinal")?;
    }

    // -10-g7890abcd
    version.custom_ordinal = number("custom_ordinal")?;

    if let Some(label) = caps.name("adhoc_label") {
        version.phase = Some(ReleasePhase::Adhoc);
        version.adhoc_label = label.as_str().to_string();
    }

    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    /// (year, ordinal, patch, phase, phase ordinal, phase sub-ordinal, custom ordinal, label)
    type Fields = (u64, u64, u64, ReleasePhase, u64, u64, u64, &'static str);

    fn fields(v: &Version) -> (u64, u64, u64, ReleasePhase, u64, u64, u64, String) {
        (
            v.year,
            v.ordinal,
            v.patch,
            v.phase.expect("parsed versions have a phase"),
            v.phase_ordinal,
            v.phase_sub_ordinal,
            v.custom_ordinal,
            v.adhoc_label.clone(),
        )
    }

    fn assert_parses(input: &str, expected: Fields) {
        let parsed = parse(input).unwrap_or_else(|e| panic!("{} should parse: {}", input, e));
        let (y, o, p, ph, po, ps, co, label) = expected;
        assert_eq!(
            fields(&parsed),
            (y, o, p, ph, po, ps, co, label.to_string()),
            "fields of {}",
            input
        );
        assert_eq!(parsed.raw, input);
    }

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(version_regexes().len(), VERSION_PATTERNS.len());
    }

    #[test]
    fn test_plain_versions() {
        use ReleasePhase::*;
        assert_parses("v24.1.0", (24, 1, 0, Stable, 0, 0, 0, ""));
        assert_parses("v23.2.12", (23, 2, 12, Stable, 0, 0, 0, ""));
        assert_parses("v24.1.3-fips", (24, 1, 3, Stable, 0, 0, 0, ""));
    }

    #[test]
    fn test_phase_versions() {
        use ReleasePhase::*;
        assert_parses("v24.1.0-alpha.1", (24, 1, 0, Alpha, 1, 0, 0, ""));
        assert_parses("v24.1.0-beta.3", (24, 1, 0, Beta, 3, 0, 0, ""));
        assert_parses("v24.1.0-rc.2-fips", (24, 1, 0, Rc, 2, 0, 0, ""));
        assert_parses("v24.1.0-cloudonly.3", (24, 1, 0, CloudOnly, 3, 0, 0, ""));
    }

    #[test]
    fn test_adhoc_builds() {
        use ReleasePhase::*;
        assert_parses("v24.1.0-1-g9cbe7c5281", (24, 1, 0, Stable, 0, 0, 1, ""));
        assert_parses("v24.1.0-0-gabc-fips", (24, 1, 0, Stable, 0, 0, 0, ""));
        assert_parses("v24.1.0-rc.2-14-gabcdef", (24, 1, 0, Rc, 2, 0, 14, ""));
    }

    #[test]
    fn test_cloud_only_versions() {
        use ReleasePhase::*;
        assert_parses("v20.1.2-alpha.3-cloudonly.4", (20, 1, 2, Alpha, 3, 4, 0, ""));
        assert_parses("v24.1.0-beta.1-cloudonly-rc2", (24, 1, 0, Beta, 1, 2, 0, ""));
        assert_parses("v24.1.0-cloudonly-rc2", (24, 1, 0, CloudOnly, 2, 0, 0, ""));
        assert_parses("v24.1.0-cloudonly", (24, 1, 0, CloudOnly, 0, 0, 0, ""));
        assert_parses("v24.1.0-cloudonly5", (24, 1, 0, CloudOnly, 5, 0, 0, ""));
    }

    #[test]
    fn test_legacy_labels() {
        use ReleasePhase::*;
        assert_parses("v22.2.0-custom.build+7", (22, 2, 0, Adhoc, 0, 0, 0, "custom.build+7"));
        assert_parses("v24.1.0-rc.1-ghijk", (24, 1, 0, Adhoc, 0, 0, 0, "rc.1-ghijk"));
        assert_parses(
            "sha256:3f5a9c:latest-v23.2-build",
            (23, 2, 0, Adhoc, 0, 0, 0, "3f5a9c"),
        );
    }

    #[test]
    fn test_legacy_build_sorts_between_patches() {
        let build = parse("sha256:3f5a9c:latest-v23.2-build").unwrap();
        assert!(build > parse("v23.2.0").unwrap());
        assert!(build < parse("v23.2.1").unwrap());
    }

    #[test]
    fn test_rejects_malformed() {
        for input in [
            "",
            "not-a-version",
            "v1.0",
            "24.1.0",
            "v24.1",
            "v24.1.0-",
            "v0.1.0",
            "v24.0.0",
            "v24.1.01",
            "V24.1.0",
            "v24.1.0 ",
            "v24.1.0-rc.1 extra",
            "v24.1.0-label/with/slash",
            "sha256::latest-v23.2-build",
            "sha256:abc:latest-v23.2.1-build",
        ] {
            let err = parse(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedInput, "input {:?}", input);
            assert!(err.to_string().contains(input), "error for {:?} names the input", input);
        }
    }

    #[test]
    fn test_wide_numbers() {
        use ReleasePhase::*;
        assert_parses(
            "v24.1.0-4294967296-gabcdef",
            (24, 1, 0, Stable, 0, 0, 4_294_967_296, ""),
        );
        assert_parses(
            "v24.1.0-rc.9999999999",
            (24, 1, 0, Rc, 9_999_999_999, 0, 0, ""),
        );
        assert_parses("v24.1.99999999999", (24, 1, 99_999_999_999, Stable, 0, 0, 0, ""));
    }

    #[test]
    fn test_overflow_is_malformed() {
        let err = parse("v24.1.18446744073709551616").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }
}
