//! Key/value outputs for CI pipelines
//!
//! Outputs are appended to the file named by `GITHUB_OUTPUT` (or an explicit
//! path) as `key=value` lines, or printed to stdout when no file is given.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::version::checker::ReleaseDecision;

pub const VERSION_KEY: &str = "version";
pub const SHOULD_RELEASE_KEY: &str = "should-release";

/// A value written to the output channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputValue {
    Text(String),
    Flag(bool),
}

impl OutputValue {
    /// Render the value as it appears after `key=`
    pub fn serialize(&self) -> String {
        match self {
            OutputValue::Text(text) => text.clone(),
            OutputValue::Flag(true) => "true".to_string(),
            OutputValue::Flag(false) => "false".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output to {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Output '{key}' spans several lines and cannot be written as key=value")]
    Multiline { key: String },
}

/// Where outputs are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    File(PathBuf),
    Stdout,
}

impl OutputSink {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(OutputSink::Stdout, OutputSink::File)
    }

    fn target(&self) -> String {
        match self {
            OutputSink::File(path) => path.display().to_string(),
            OutputSink::Stdout => "stdout".to_string(),
        }
    }

    /// Write every output, one `key=value` line each
    pub fn emit(&self, outputs: &[(&str, OutputValue)]) -> Result<(), OutputError> {
        let io_error = |source| OutputError::Io {
            target: self.target(),
            source,
        };

        match self {
            OutputSink::File(path) => {
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(io_error)?;
                write_outputs(&mut file, outputs, self)
            }
            OutputSink::Stdout => write_outputs(&mut std::io::stdout().lock(), outputs, self),
        }
    }
}

fn write_outputs<W: Write>(
    writer: &mut W,
    outputs: &[(&str, OutputValue)],
    sink: &OutputSink,
) -> Result<(), OutputError> {
    let mut lines = String::new();
    for (key, value) in outputs {
        let rendered = value.serialize();
        if rendered.contains(['\n', '\r']) {
            return Err(OutputError::Multiline {
                key: key.to_string(),
            });
        }
        lines.push_str(&format!("{key}={rendered}\n"));
    }

    debug!("Writing {} outputs to {}", outputs.len(), sink.target());
    writer
        .write_all(lines.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|source| OutputError::Io {
            target: sink.target(),
            source,
        })
}

/// Outputs describing a release decision
pub fn release_outputs(decision: &ReleaseDecision) -> Vec<(&'static str, OutputValue)> {
    vec![
        (
            VERSION_KEY,
            OutputValue::Text(decision.resolved_version.clone()),
        ),
        (
            SHOULD_RELEASE_KEY,
            OutputValue::Flag(decision.should_release),
        ),
    ]
}
