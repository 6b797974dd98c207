//! Registry trait for fetching published versions from a package index

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::VersionSet;

/// Trait for fetching package versions from a remote index
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches all versions published for a package
    ///
    /// # Arguments
    /// * `package_name` - The name of the package as known to the index
    ///
    /// # Returns
    /// * `Ok(VersionSet)` - Every published version, oldest first. Empty when
    ///   the index does not know the package.
    /// * `Err(RegistryError)` - Any other transport or protocol failure
    async fn fetch_versions(&self, package_name: &str) -> Result<VersionSet, RegistryError>;
}
