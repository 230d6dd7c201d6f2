//! Placeholder templates over version fields

use super::Version;

impl Version {
    /// Render a template populated with parts of the version, using
    /// placeholders similar to `printf`:
    ///
    /// - `%X`: year
    /// - `%Y`: ordinal
    /// - `%Z`: patch
    /// - `%P`: phase name (one of "alpha", "beta", "rc", "cloudonly", or "" for
    ///   stable and adhoc versions)
    /// - `%p`: phase sort rank (see [`ReleasePhase::rank`](super::ReleasePhase::rank))
    /// - `%o`: phase ordinal (eg the 1 in "v24.1.0-rc.1")
    /// - `%s`: phase sub-ordinal (eg the 2 in "v24.1.0-rc.1-cloudonly.2")
    /// - `%n`: adhoc build ordinal (eg the 12 in "v24.1.0-12-gabcdef")
    /// - `%%`: literal "%"
    ///
    /// Templates are meant to be literals in the calling code.
    ///
    /// # Panics
    ///
    /// Panics if the template contains any other placeholder.
    ///
    /// ```
    /// use crdb_version::Version;
    ///
    /// let v = Version::must_parse("v24.1.3-rc.2");
    /// assert_eq!(v.format("release-%X.%Y (%P %o)"), "release-24.1 (rc 2)");
    /// ```
    pub fn format(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 16);
        let mut unknown = Vec::new();
        let mut chars = template.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('X') => out.push_str(&self.year.to_string()),
                Some('Y') => out.push_str(&self.ordinal.to_string()),
                Some('Z') => out.push_str(&self.patch.to_string()),
                Some('P') => out.push_str(self.phase.map_or("", |p| p.name())),
                Some('p') => out.push_str(&self.phase.map_or(0, |p| p.rank()).to_string()),
                Some('o') => out.push_str(&self.phase_ordinal.to_string()),
                Some('s') => out.push_str(&self.phase_sub_ordinal.to_string()),
                Some('n') => out.push_str(&self.custom_ordinal.to_string()),
                Some('%') => out.push('%'),
                Some(other) => unknown.push(format!("%{}", other)),
                // a trailing '%' has nothing to substitute
                None => out.push('%'),
            }
        }

        if !unknown.is_empty() {
            panic!("unknown placeholders in format string: {}", unknown.join(", "));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_all_placeholders() {
        let v = Version::must_parse("v24.1.2-beta.3-cloudonly.4");
        assert_eq!(v.format("%X|%Y|%Z|%P|%p|%o|%s|%n"), "24|1|2|beta|2|3|4|0");

        let v = Version::must_parse("v23.2.0-rc.1-12-gabcdef");
        assert_eq!(v.format("v%X.%Y.%Z-%P.%o+%n"), "v23.2.0-rc.1+12");
    }

    #[test]
    fn test_format_stable_and_adhoc_phase_names_are_empty() {
        let v = Version::must_parse("v24.1.0");
        assert_eq!(v.format("[%P] %p"), "[] 5");

        let v = Version::must_parse("v24.1.0-hotfix");
        assert_eq!(v.format("[%P] %p"), "[] 6");
    }

    #[test]
    fn test_format_empty_version() {
        assert_eq!(Version::default().format("v%X.%Y.%Z %P%p"), "v0.0.0 0");
    }

    #[test]
    fn test_format_escapes() {
        let v = Version::must_parse("v24.1.0");
        assert_eq!(v.format("100%% %X"), "100% 24");
        assert_eq!(v.format("%%X"), "%X");
        // the escape consumes the '%' so no placeholder follows it
        assert_eq!(v.format("%%Q"), "%Q");
        assert_eq!(v.format("%%%X"), "%24");
        assert_eq!(v.format("%X%"), "24%");
        assert_eq!(v.format("no placeholders"), "no placeholders");
    }

    #[test]
    #[should_panic(expected = "unknown placeholders in format string: %Q, %d")]
    fn test_format_unknown_placeholder_panics() {
        Version::must_parse("v24.1.0").format("%X %Q %d");
    }
}
