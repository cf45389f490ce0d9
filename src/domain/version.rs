use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Strict tag shape: optional lowercase `v`, then three ASCII digit runs.
fn tag_regex() -> &'static Regex {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    TAG_RE.get_or_init(|| {
        Regex::new(r"^v?([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("tag regex is valid")
    })
}

/// A version parsed from an existing tag name (e.g., "v1.2.3")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTag {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl VersionTag {
    /// Create a new version tag
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        VersionTag {
            major,
            minor,
            patch,
        }
    }

    /// Parse a tag name of the form `vMAJOR.MINOR.PATCH` or `MAJOR.MINOR.PATCH`.
    ///
    /// Returns `None` for anything else: missing components, extra components,
    /// pre-release or build suffixes, surrounding whitespace, an uppercase `V`,
    /// or a component too large for `u64`. Leading zeros are accepted and
    /// parsed numerically, so `v1.02.3` has minor `2`.
    ///
    /// # Example
    /// ```
    /// # use patch_release::domain::VersionTag;
    /// assert_eq!(VersionTag::parse("v1.2.3"), Some(VersionTag::new(1, 2, 3)));
    /// assert_eq!(VersionTag::parse("1.02.3"), Some(VersionTag::new(1, 2, 3)));
    /// assert_eq!(VersionTag::parse("v1.2"), None);
    /// ```
    pub fn parse(tag: &str) -> Option<Self> {
        let caps = tag_regex().captures(tag)?;

        let major = caps[1].parse::<u64>().ok()?;
        let minor = caps[2].parse::<u64>().ok()?;
        let patch = caps[3].parse::<u64>().ok()?;

        Some(VersionTag::new(major, minor, patch))
    }

    /// Whether this tag belongs to the requested version line
    pub fn is_on_line(&self, request: &VersionRequest) -> bool {
        self.major == request.major && self.minor == request.minor
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// The caller-declared target version line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRequest {
    pub major: u64,
    pub minor: u64,
}

impl VersionRequest {
    /// Create a request from already validated components
    pub fn new(major: u64, minor: u64) -> Self {
        VersionRequest { major, minor }
    }

    /// Create a request from signed integers, rejecting negatives
    pub fn from_signed(major: i64, minor: i64) -> Result<Self> {
        let major = u64::try_from(major).map_err(|_| {
            ReleaseError::invalid_request(format!("major must not be negative (got {})", major))
        })?;
        let minor = u64::try_from(minor).map_err(|_| {
            ReleaseError::invalid_request(format!("minor must not be negative (got {})", minor))
        })?;

        Ok(VersionRequest { major, minor })
    }

    /// Parse a request from raw text, as received from a pipeline parameter.
    ///
    /// Each component must be present and consist of decimal digits only
    /// (surrounding whitespace is ignored). Missing, empty, negative,
    /// fractional and non-numeric values are rejected with `InvalidRequest`.
    pub fn parse(major: Option<&str>, minor: Option<&str>) -> Result<Self> {
        let major = parse_component("major", major)?;
        let minor = parse_component("minor", minor)?;

        Ok(VersionRequest { major, minor })
    }
}

impl fmt::Display for VersionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

fn parse_component(field: &str, raw: Option<&str>) -> Result<u64> {
    let value = raw.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(ReleaseError::invalid_request(format!("{} is missing", field)));
    }

    if value.bytes().all(|b| b.is_ascii_digit()) {
        return value.parse::<u64>().map_err(|_| {
            ReleaseError::invalid_request(format!("{} is out of range (got '{}')", field, value))
        });
    }

    let reason = match value.parse::<f64>() {
        Ok(n) if !n.is_finite() => "must be numeric",
        Ok(n) if n < 0.0 => "must not be negative",
        Ok(n) if n.fract() != 0.0 => "must be a whole number",
        Ok(_) => "must contain only digits",
        Err(_) => "must be numeric",
    };

    Err(ReleaseError::invalid_request(format!(
        "{} {} (got '{}')",
        field, reason, value
    )))
}

/// The computed next version for a version line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResolvedVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl ResolvedVersion {
    /// Create a resolved version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        ResolvedVersion {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl From<ResolvedVersion> for semver::Version {
    fn from(v: ResolvedVersion) -> Self {
        semver::Version::new(v.major, v.minor, v.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_parse() {
        let v = VersionTag::parse("v1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_tag_parse_without_v() {
        assert_eq!(VersionTag::parse("1.2.3"), Some(VersionTag::new(1, 2, 3)));
    }

    #[test]
    fn test_tag_parse_leading_zeros() {
        assert_eq!(VersionTag::parse("v1.02.3"), Some(VersionTag::new(1, 2, 3)));
        assert_eq!(VersionTag::parse("v001.000.010"), Some(VersionTag::new(1, 0, 10)));
    }

    #[test]
    fn test_tag_parse_rejects_malformed() {
        for tag in [
            "release-candidate",
            "v1.2",
            "1.2.3.4",
            "V1.2.3",
            "vv1.2.3",
            "v1.2.3-rc.1",
            "v1.2.3+build",
            " v1.2.3",
            "v1.2.3\n",
            "v1..3",
            "v-1.2.3",
            "release-1.2.3",
            "",
        ] {
            assert_eq!(VersionTag::parse(tag), None, "'{}' should not parse", tag);
        }
    }

    #[test]
    fn test_tag_parse_rejects_non_ascii_digits() {
        // Arabic-Indic digits are Unicode digits but not version components
        assert_eq!(VersionTag::parse("v\u{0661}.2.3"), None);
    }

    #[test]
    fn test_tag_parse_overflow_is_malformed() {
        assert_eq!(VersionTag::parse("v1.2.99999999999999999999999"), None);
    }

    #[test]
    fn test_tag_is_on_line() {
        let request = VersionRequest::new(1, 2);
        assert!(VersionTag::new(1, 2, 7).is_on_line(&request));
        assert!(!VersionTag::new(1, 3, 0).is_on_line(&request));
        assert!(!VersionTag::new(2, 2, 0).is_on_line(&request));
    }

    #[test]
    fn test_request_from_signed() {
        assert_eq!(
            VersionRequest::from_signed(1, 2).unwrap(),
            VersionRequest::new(1, 2)
        );
        assert!(matches!(
            VersionRequest::from_signed(-1, 2),
            Err(ReleaseError::InvalidRequest(_))
        ));
        assert!(matches!(
            VersionRequest::from_signed(1, -2),
            Err(ReleaseError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_request_parse() {
        assert_eq!(
            VersionRequest::parse(Some("1"), Some(" 02 ")).unwrap(),
            VersionRequest::new(1, 2)
        );
    }

    #[test]
    fn test_request_parse_rejections() {
        let cases = [
            (None, Some("2"), "major is missing"),
            (Some("1"), None, "minor is missing"),
            (Some(""), Some("2"), "major is missing"),
            (Some("-1"), Some("2"), "must not be negative"),
            (Some("1.5"), Some("2"), "must be a whole number"),
            (Some("one"), Some("2"), "must be numeric"),
            (Some("1"), Some("+2"), "must contain only digits"),
            (Some("NaN"), Some("2"), "major must be numeric"),
            (Some("1"), Some("inf"), "minor must be numeric"),
            (Some("-inf"), Some("2"), "major must be numeric"),
            (Some("99999999999999999999999"), Some("2"), "out of range"),
        ];

        for (major, minor, expected) in cases {
            let err = VersionRequest::parse(major, minor).unwrap_err();
            assert!(matches!(err, ReleaseError::InvalidRequest(_)));
            assert!(
                err.to_string().contains(expected),
                "expected '{}' in '{}'",
                expected,
                err
            );
        }
    }

    #[test]
    fn test_resolved_display_has_no_prefix() {
        assert_eq!(ResolvedVersion::new(1, 2, 10).to_string(), "1.2.10");
    }

    #[test]
    fn test_resolved_ordering_is_numeric() {
        assert!(ResolvedVersion::new(1, 2, 10) > ResolvedVersion::new(1, 2, 9));
    }

    #[test]
    fn test_resolved_into_semver() {
        let v: semver::Version = ResolvedVersion::new(3, 4, 5).into();
        assert_eq!(v, semver::Version::new(3, 4, 5));
    }
}
