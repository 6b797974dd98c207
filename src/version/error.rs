use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to create HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A version string that does not follow the PEP 440 grammar
#[derive(Debug, Error)]
#[error("Invalid version '{version}': {reason}")]
pub struct VersionParseError {
    pub version: String,
    pub reason: String,
}
