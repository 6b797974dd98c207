//! Release check pipeline
//!
//! Local identity → published versions → comparison. Each run performs at most
//! one local metadata read and one index request, in that order.

use tracing::info;

use crate::error::ReleaseCheckError;
use crate::local::{DistributionSource, get_local_version, resolve_package_name};
use crate::version::checker::{ReleaseDecision, compare};
use crate::version::registry::Registry;

/// Decide whether the local build of a package should be released.
///
/// When `package_name` is `None` the name is inferred from the single
/// editable install found in `source`.
pub async fn check_release<S, R>(
    source: &S,
    registry: &R,
    package_name: Option<&str>,
) -> Result<ReleaseDecision, ReleaseCheckError>
where
    S: DistributionSource + ?Sized,
    R: Registry + ?Sized,
{
    let name = match package_name {
        Some(name) => name.to_string(),
        None => resolve_package_name(source)?,
    };

    let local_version = get_local_version(source, &name)?;
    let published = registry.fetch_versions(&name).await?;
    let decision = compare(&local_version, published.latest())?;

    info!(
        "{} {} vs published {}: should_release={}",
        name, decision.resolved_version, decision.baseline, decision.should_release
    );

    Ok(decision)
}
