//! Fatal errors of a release check

use thiserror::Error;

use crate::config::ConfigError;
use crate::local::LocalError;
use crate::output::OutputError;
use crate::version::error::{RegistryError, VersionParseError};

#[derive(Debug, Error)]
pub enum ReleaseCheckError {
    #[error(transparent)]
    Local(#[from] LocalError),

    #[error("Failed to query the package index: {0}")]
    RemoteQuery(#[from] RegistryError),

    #[error(transparent)]
    VersionParse(#[from] VersionParseError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
