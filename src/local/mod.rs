//! Local identity resolution
//!
//! Determines which Python distribution is being released and which version
//! of it is installed locally.
//!
//! # Modules
//!
//! - [`distribution`]: `DistributionSource` trait over installed distributions
//! - [`site_packages`]: Filesystem implementation reading `.dist-info` directories
//! - [`resolver`]: Editable-install detection and local version lookup
//! - [`error`]: Error types for local resolution

pub mod distribution;
pub mod error;
pub mod resolver;
pub mod site_packages;

pub use distribution::{Distribution, DistributionFile, DistributionSource};
pub use error::LocalError;
pub use resolver::{get_local_version, resolve_package_name};
pub use site_packages::SitePackages;
