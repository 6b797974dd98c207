//! Version parsing and ordering under PEP 440 precedence
//!
//! PEP 440 is the scheme the Python Package Index orders releases by. For
//! plain `X.Y.Z` strings it agrees with semver, and it also accepts the
//! index's native pre-release spellings (`5.0a1`, `5.0rc1`) as well as
//! semver-style ones (`2.0.0-alpha` normalises to `2.0.0a0`).

use std::cmp::Ordering;
use std::str::FromStr;

use pep508_rs::pep440_rs::Version;

use crate::version::error::VersionParseError;

/// The baseline used when a package has never been published
pub const ZERO_VERSION: &str = "0.0.0";

/// Parse a version string into a totally ordered [`Version`].
pub fn parse_version(version: &str) -> Result<Version, VersionParseError> {
    Version::from_str(version.trim()).map_err(|e| VersionParseError {
        version: version.to_string(),
        reason: e.to_string(),
    })
}

/// Sort version strings ascending by PEP 440 precedence.
///
/// Nothing is discarded. Strings that fail to parse sort before every valid
/// version and keep their relative order, so the last element is always the
/// greatest parseable version when one exists.
pub fn sort_versions(versions: Vec<String>) -> Vec<String> {
    let mut keyed: Vec<(Option<Version>, String)> = versions
        .into_iter()
        .map(|v| (parse_version(&v).ok(), v))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, v)| v).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn strings(versions: &[&str]) -> Vec<String> {
        versions.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case(&["1.0.0", "0.9.0", "2.0.0-alpha", "2.0.0"], &["0.9.0", "1.0.0", "2.0.0-alpha", "2.0.0"])]
    #[case(&["5.0rc1", "4.2.0", "5.0a1", "5.0", "5.0b1"], &["4.2.0", "5.0a1", "5.0b1", "5.0rc1", "5.0"])]
    #[case(&["1.10.0", "1.9.0", "1.2.0"], &["1.2.0", "1.9.0", "1.10.0"])]
    #[case(&["1.0.0.post1", "1.0.0", "1.0.0.dev1"], &["1.0.0.dev1", "1.0.0", "1.0.0.post1"])]
    #[case(&[], &[])]
    fn sort_versions_orders_by_precedence(#[case] input: &[&str], #[case] expected: &[&str]) {
        assert_eq!(sort_versions(strings(input)), strings(expected));
    }

    #[test]
    fn sort_versions_keeps_unparseable_entries_first() {
        let sorted = sort_versions(strings(&["2.0.0", "not a version", "1.0.0", "junk!"]));
        assert_eq!(sorted, strings(&["not a version", "junk!", "1.0.0", "2.0.0"]));
    }

    #[rstest]
    #[case("1.2.3")]
    #[case("2.0.0-alpha")]
    #[case("5.0rc1")]
    #[case("1!2.0")]
    #[case(" 1.0 ")]
    fn parse_version_accepts_valid_versions(#[case] input: &str) {
        assert!(parse_version(input).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("invalid")]
    #[case("1..0")]
    #[case("1.0.0-alpha.beta")]
    fn parse_version_rejects_invalid_versions(#[case] input: &str) {
        let err = parse_version(input).unwrap_err();
        assert_eq!(err.version, input);
    }

    #[test]
    fn parse_version_treats_missing_segments_as_zero() {
        assert_eq!(
            parse_version("1.0").unwrap(),
            parse_version("1.0.0").unwrap()
        );
    }

    #[test]
    fn prerelease_sorts_before_final_release() {
        assert!(parse_version("2.0.0-alpha").unwrap() < parse_version("2.0.0").unwrap());
    }
}
