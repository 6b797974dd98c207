//! Decide whether a locally installed Python package should be released
//!
//! # Modules
//!
//! - [`local`]: Resolves the package name and its locally installed version
//! - [`version`]: Fetches published versions and compares them
//! - [`release`]: Runs the whole check for one package
//! - [`output`]: Writes `key=value` outputs for CI pipelines
//! - [`config`]: Configuration and defaults
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Fatal error taxonomy

pub mod config;
pub mod error;
pub mod local;
pub mod logging;
pub mod output;
pub mod release;
pub mod version;
