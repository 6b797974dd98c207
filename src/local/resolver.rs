//! Resolve the local package's name and installed version

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::local::distribution::{Distribution, DistributionFile, DistributionSource};
use crate::local::error::LocalError;

static NAME_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_.]+").expect("valid separator pattern"));

/// Normalize a distribution name so that `Foo_Bar`, `foo.bar` and `foo-bar` compare equal
pub fn normalize_name(name: &str) -> String {
    NAME_SEPARATORS.replace_all(name, "-").to_lowercase()
}

/// Find the single distribution installed in editable mode and return its name.
///
/// Fails with [`LocalError::AmbiguousPackage`] when no distribution or more
/// than one distribution is editable.
pub fn resolve_package_name<S: DistributionSource + ?Sized>(
    source: &S,
) -> Result<String, LocalError> {
    let mut candidates = Vec::new();

    for distribution in source.list_installed_distributions()? {
        let files = source.read_distribution_files(&distribution.name)?;
        if is_editable(&files) {
            debug!("Found editable install: {}", distribution.name);
            candidates.push(distribution.name);
        }
    }

    candidates.sort();
    candidates.dedup();

    match <[String; 1]>::try_from(candidates) {
        Ok([name]) => {
            info!("Inferred package name: {}", name);
            Ok(name)
        }
        Err(candidates) => Err(LocalError::AmbiguousPackage { candidates }),
    }
}

/// Read the installed version of the named distribution
pub fn get_local_version<S: DistributionSource + ?Sized>(
    source: &S,
    name: &str,
) -> Result<String, LocalError> {
    let wanted = normalize_name(name);

    let Distribution { version, .. } = source
        .list_installed_distributions()?
        .into_iter()
        .find(|d| normalize_name(&d.name) == wanted)
        .ok_or_else(|| LocalError::PackageNotFound(name.to_string()))?;

    debug!("Local version of {}: {}", name, version);
    Ok(version)
}

/// A distribution is editable when it records exactly one path-configuration
/// file and that file holds a single absolute path.
fn is_editable(files: &[DistributionFile]) -> bool {
    let mut path_files = files.iter().filter(|f| f.is_path_configuration());

    let (Some(file), None) = (path_files.next(), path_files.next()) else {
        return false;
    };

    file.contents
        .as_deref()
        .map(str::trim)
        .is_some_and(|target| !target.contains('\n') && Path::new(target).is_absolute())
}
