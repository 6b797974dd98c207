//! Abstraction over the set of locally installed Python distributions

use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;

use crate::local::error::LocalError;

/// An installed distribution as described by its metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    pub name: String,
    pub version: String,
}

/// A file recorded as belonging to a distribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionFile {
    /// Path relative to the installation root, as recorded
    pub path: PathBuf,
    /// File contents, loaded for path-configuration (`.pth`) files only
    pub contents: Option<String>,
}

impl DistributionFile {
    pub fn is_path_configuration(&self) -> bool {
        self.path.extension().is_some_and(|ext| ext == "pth")
    }
}

/// Source of installed distribution data
#[cfg_attr(test, automock)]
pub trait DistributionSource {
    /// List every installed distribution
    fn list_installed_distributions(&self) -> Result<Vec<Distribution>, LocalError>;

    /// Read the files recorded for the named distribution
    fn read_distribution_files(&self, name: &str) -> Result<Vec<DistributionFile>, LocalError>;
}
