//! Common types for the version layer

use crate::version::pep440::sort_versions;

/// All versions published for a package on the index, sorted ascending by
/// PEP 440 precedence. Empty when the package has never been published.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionSet {
    versions: Vec<String>,
}

impl VersionSet {
    /// Build a set from versions in any order
    pub fn new(versions: Vec<String>) -> Self {
        Self {
            versions: sort_versions(versions),
        }
    }

    /// A set for a package that has never been published
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// The latest published version, if any
    pub fn latest(&self) -> Option<&str> {
        self.versions.last().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.versions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_versions_and_exposes_latest() {
        let set = VersionSet::new(vec![
            "1.1.0".to_string(),
            "1.0.0".to_string(),
            "1.2.0rc1".to_string(),
        ]);

        assert_eq!(set.as_slice(), &["1.0.0", "1.1.0", "1.2.0rc1"]);
        assert_eq!(set.latest(), Some("1.2.0rc1"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn empty_set_has_no_latest() {
        let set = VersionSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.latest(), None);
    }
}
