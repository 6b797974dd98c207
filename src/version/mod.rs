//! Version management layer for release checks
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│ VersionSet  │────▶│   Checker   │
//! │  (fetch)    │     │  (sorted)   │     │  (compare)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │ Registries  │     │   PEP 440   │
//! │   (PyPI)    │     │  (ordering) │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Release decision from a local and a published version
//! - [`registry`]: Registry trait for fetching versions from remote sources
//! - [`registries`]: Concrete registry implementations (PyPI)
//! - [`pep440`]: Version parsing and precedence
//! - [`types`]: `VersionSet`
//! - [`error`]: Error types for registry and parsing operations

pub mod checker;
pub mod error;
pub mod pep440;
pub mod registries;
pub mod registry;
pub mod types;
