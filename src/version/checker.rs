//! Release decision: is the local version newer than the published one?

use tracing::debug;

use crate::version::error::VersionParseError;
use crate::version::pep440::{ZERO_VERSION, parse_version};

/// Outcome of comparing the local version against the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDecision {
    /// Local version, reported for tagging
    pub resolved_version: String,
    /// Version the local one was compared against
    pub baseline: String,
    /// Whether the local version is strictly newer than the baseline
    pub should_release: bool,
}

/// Compare a local version against the latest published version.
///
/// `remote` is `None` when the package has never been published, in which
/// case the baseline is `0.0.0`. Local version labels (`+build.1`) do not
/// take part in the ordering, so `1.0.0+build.1` is not newer than `1.0.0`.
pub fn compare(local: &str, remote: Option<&str>) -> Result<ReleaseDecision, VersionParseError> {
    let baseline = remote.unwrap_or(ZERO_VERSION);

    let local_parsed = parse_version(local)?.without_local();
    let baseline_parsed = parse_version(baseline)?.without_local();

    let should_release = local_parsed > baseline_parsed;
    debug!(
        "Compared local {} against baseline {}: should_release={}",
        local, baseline, should_release
    );

    Ok(ReleaseDecision {
        resolved_version: local.to_string(),
        baseline: baseline.to_string(),
        should_release,
    })
}
