//! Filesystem [`DistributionSource`] over `site-packages` directories
//!
//! Each `<name>-<version>.dist-info` directory is one installed distribution.
//! Its `METADATA` file carries the `Name:` and `Version:` headers, and its
//! `RECORD` file lists the installed files, one CSV row each, with paths
//! relative to the `site-packages` directory.

use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::local::distribution::{Distribution, DistributionFile, DistributionSource};
use crate::local::error::LocalError;
use crate::local::resolver::normalize_name;

const DIST_INFO_SUFFIX: &str = ".dist-info";
const SYS_PATH_SCRIPT: &str = "import sys; print('\\n'.join(sys.path))";

/// Installed distributions found in one or more `site-packages` directories.
///
/// Directories are searched in order; the first distribution found for a
/// name shadows later ones, as on a Python import path. The directories are
/// scanned once, on first use.
#[derive(Debug, Clone)]
pub struct SitePackages {
    roots: Vec<PathBuf>,
    index: OnceLock<Vec<DistInfo>>,
}

/// A `.dist-info` directory together with the root it was found in
#[derive(Debug, Clone)]
struct DistInfo {
    root: PathBuf,
    dir: PathBuf,
    distribution: Distribution,
}

impl SitePackages {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            index: OnceLock::new(),
        }
    }

    /// Ask a Python interpreter for its import path and keep the directories
    pub fn discover(python: &str) -> Result<Self, LocalError> {
        let output = Command::new(python)
            .args(["-c", SYS_PATH_SCRIPT])
            .output()
            .map_err(|e| LocalError::Interpreter {
                python: python.to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(LocalError::Interpreter {
                python: python.to_string(),
                reason: format!(
                    "exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        let roots: Vec<PathBuf> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .filter(|path| path.is_dir())
            .collect();

        debug!(
            "Discovered {} import path directories via {}",
            roots.len(),
            python
        );
        Ok(Self::new(roots))
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn index(&self) -> Result<&[DistInfo], LocalError> {
        if let Some(index) = self.index.get() {
            return Ok(index);
        }
        let scanned = self.scan()?;
        Ok(self.index.get_or_init(|| scanned))
    }

    fn find(&self, name: &str) -> Result<Option<&DistInfo>, LocalError> {
        let wanted = normalize_name(name);
        Ok(self
            .index()?
            .iter()
            .find(|info| normalize_name(&info.distribution.name) == wanted))
    }

    fn scan(&self) -> Result<Vec<DistInfo>, LocalError> {
        let mut seen = HashSet::new();
        let mut found = Vec::new();

        for root in &self.roots {
            let entries = fs::read_dir(root).map_err(|source| LocalError::Io {
                path: root.clone(),
                source,
            })?;

            let mut dirs: Vec<PathBuf> = entries
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|path| path.is_dir() && has_dist_info_suffix(path))
                .collect();
            dirs.sort();

            for dir in dirs {
                let Some(distribution) = read_metadata(&dir) else {
                    continue;
                };
                if seen.insert(normalize_name(&distribution.name)) {
                    found.push(DistInfo {
                        root: root.clone(),
                        dir,
                        distribution,
                    });
                }
            }
        }

        Ok(found)
    }
}

impl DistributionSource for SitePackages {
    fn list_installed_distributions(&self) -> Result<Vec<Distribution>, LocalError> {
        Ok(self
            .index()?
            .iter()
            .map(|info| info.distribution.clone())
            .collect())
    }

    fn read_distribution_files(&self, name: &str) -> Result<Vec<DistributionFile>, LocalError> {
        let Some(info) = self.find(name)? else {
            return Err(LocalError::PackageNotFound(name.to_string()));
        };

        let record_path = info.dir.join("RECORD");
        if !record_path.is_file() {
            debug!("{} has no RECORD file", info.dir.display());
            return Ok(Vec::new());
        }

        let record = fs::File::open(&record_path).map_err(|source| LocalError::Io {
            path: record_path.clone(),
            source,
        })?;
        let paths = record_paths(record).map_err(|source| LocalError::Record {
            path: record_path.clone(),
            source,
        })?;

        paths
            .into_iter()
            .map(|path| -> Result<DistributionFile, LocalError> {
                let mut file = DistributionFile {
                    path,
                    contents: None,
                };
                if file.is_path_configuration() {
                    let full = info.root.join(&file.path);
                    file.contents =
                        Some(fs::read_to_string(&full).map_err(|source| LocalError::Io {
                            path: full.clone(),
                            source,
                        })?);
                }
                Ok(file)
            })
            .collect()
    }
}

fn has_dist_info_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(DIST_INFO_SUFFIX))
}

/// Read `Name` and `Version` from a `.dist-info/METADATA` header block
fn read_metadata(dir: &Path) -> Option<Distribution> {
    let metadata_path = dir.join("METADATA");
    let content = fs::read_to_string(&metadata_path)
        .inspect_err(|e| warn!("Skipping {}: {}", dir.display(), e))
        .ok()?;

    let mut name = None;
    let mut version = None;

    for line in content.lines().take_while(|line| !line.is_empty()) {
        if let Some((key, value)) = line.split_once(':') {
            match key.trim().to_ascii_lowercase().as_str() {
                "name" if name.is_none() => name = Some(value.trim().to_string()),
                "version" if version.is_none() => version = Some(value.trim().to_string()),
                _ => {}
            }
        }
    }

    match (name, version) {
        (Some(name), Some(version)) if !name.is_empty() => Some(Distribution { name, version }),
        _ => {
            warn!(
                "Skipping {}: METADATA lacks Name or Version",
                dir.display()
            );
            None
        }
    }
}

/// Paths listed in a RECORD file: the first column of each CSV row
fn record_paths<R: Read>(reader: R) -> Result<Vec<PathBuf>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut paths = Vec::new();
    for row in reader.records() {
        let row = row?;
        if let Some(path) = row.get(0).filter(|path| !path.is_empty()) {
            paths.push(PathBuf::from(path));
        }
    }
    Ok(paths)
}
