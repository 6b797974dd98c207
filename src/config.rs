use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// Default package index
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org";

/// Timeout for fetch operations in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Interpreter asked for its import path when no site-packages directory is given
pub const DEFAULT_PYTHON: &str = "python3";

/// Release check configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckConfig {
    /// Base URL of the package index
    pub index_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Verify the index's TLS certificate and host name
    pub verify_tls: bool,
    /// Python interpreter used to discover site-packages directories
    pub python: String,
    /// Explicit site-packages directories, searched in order
    pub site_packages: Vec<PathBuf>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            timeout_ms: FETCH_TIMEOUT_MS,
            verify_tls: true,
            python: DEFAULT_PYTHON.to_string(),
            site_packages: Vec::new(),
        }
    }
}

/// Values given on the command line, applied over a loaded [`CheckConfig`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub index_url: Option<String>,
    pub timeout_ms: Option<u64>,
    /// Forces `verify_tls` off; never turns it back on
    pub insecure_skip_tls_verify: bool,
    pub python: Option<String>,
    /// Replaces the configured list when non-empty
    pub site_packages: Vec<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CheckConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply command-line values, which take precedence over the file
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(index_url) = overrides.index_url {
            self.index_url = index_url;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.timeout_ms = timeout_ms;
        }
        if overrides.insecure_skip_tls_verify {
            self.verify_tls = false;
        }
        if let Some(python) = overrides.python {
            self.python = python;
        }
        if !overrides.site_packages.is_empty() {
            self.site_packages = overrides.site_packages;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
