//! Shared test utilities
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::TempDir;

use pypi_release_check::local::{Distribution, DistributionFile, DistributionSource, LocalError};
use pypi_release_check::version::error::RegistryError;
use pypi_release_check::version::registry::Registry;
use pypi_release_check::version::types::VersionSet;

/// In-memory set of installed distributions
#[derive(Default)]
pub struct FakeDistributions {
    installed: Vec<(Distribution, Vec<DistributionFile>)>,
}

impl FakeDistributions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, name: &str, version: &str) -> Self {
        self.installed.push((distribution(name, version), Vec::new()));
        self
    }

    pub fn with_editable(mut self, name: &str, version: &str, source_dir: &str) -> Self {
        let files = vec![
            DistributionFile {
                path: PathBuf::from(format!("__editable__.{name}-{version}.pth")),
                contents: Some(format!("{source_dir}\n")),
            },
            DistributionFile {
                path: PathBuf::from(format!("{name}-{version}.dist-info/METADATA")),
                contents: None,
            },
        ];
        self.installed.push((distribution(name, version), files));
        self
    }
}

fn distribution(name: &str, version: &str) -> Distribution {
    Distribution {
        name: name.to_string(),
        version: version.to_string(),
    }
}

impl DistributionSource for FakeDistributions {
    fn list_installed_distributions(&self) -> Result<Vec<Distribution>, LocalError> {
        Ok(self.installed.iter().map(|(d, _)| d.clone()).collect())
    }

    fn read_distribution_files(&self, name: &str) -> Result<Vec<DistributionFile>, LocalError> {
        self.installed
            .iter()
            .find(|(d, _)| d.name == name)
            .map(|(_, files)| files.clone())
            .ok_or_else(|| LocalError::PackageNotFound(name.to_string()))
    }
}

/// Mock registry for testing
#[derive(Default)]
pub struct MockRegistry {
    versions: HashMap<String, Vec<String>>,
    failing: bool,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_versions(mut self, package: &str, versions: Vec<&str>) -> Self {
        self.versions.insert(
            package.to_string(),
            versions.into_iter().map(|v| v.to_string()).collect(),
        );
        self
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_versions(&self, package_name: &str) -> Result<VersionSet, RegistryError> {
        if self.failing {
            return Err(RegistryError::InvalidResponse(
                "PyPI API returned status 500 Internal Server Error".to_string(),
            ));
        }
        Ok(self
            .versions
            .get(package_name)
            .map(|versions| VersionSet::new(versions.clone()))
            .unwrap_or_default())
    }
}

/// A throwaway site-packages directory
pub struct SiteFixture {
    dir: TempDir,
}

impl SiteFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Install a regular (non-editable) distribution
    pub fn install(&self, name: &str, version: &str) -> &Self {
        self.write_dist_info(name, version, &[format!("{name}/__init__.py")]);
        self
    }

    /// Install a distribution whose `.pth` file points at `source_dir`
    pub fn install_editable(&self, name: &str, version: &str, source_dir: &str) -> &Self {
        let pth = format!("__editable__.{name}-{version}.pth");
        fs::write(self.path().join(&pth), format!("{source_dir}\n")).unwrap();
        self.write_dist_info(name, version, &[pth]);
        self
    }

    fn write_dist_info(&self, name: &str, version: &str, record: &[String]) {
        let dir = self.path().join(format!("{name}-{version}.dist-info"));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("METADATA"),
            format!("Metadata-Version: 2.1\nName: {name}\nVersion: {version}\n"),
        )
        .unwrap();
        let rows: Vec<String> = record.iter().map(|path| format!("{path},,")).collect();
        fs::write(dir.join("RECORD"), rows.join("\n")).unwrap();
    }
}

/// Parse `key=value` lines written to an output file
pub fn read_outputs(path: &Path) -> HashMap<String, String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
