use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocalError {
    #[error(
        "Could not infer the package name: expected exactly one editable install, found {}",
        format_candidates(.candidates)
    )]
    AmbiguousPackage { candidates: Vec<String> },

    #[error("Package not installed locally: {0}")]
    PackageNotFound(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed RECORD file {path}: {source}")]
    Record {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to query Python interpreter '{python}': {reason}")]
    Interpreter { python: String, reason: String },
}

fn format_candidates(candidates: &[String]) -> String {
    if candidates.is_empty() {
        "none".to_string()
    } else {
        format!("{} ({})", candidates.len(), candidates.join(", "))
    }
}
