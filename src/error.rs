//! Error taxonomy for the scaffolding pipeline.
//!
//! Name-validation failures are intentionally not represented here: they are
//! reported through [`crate::package_name::ValidationResult`] and the caller
//! decides how to react. `ScaffoldError` covers the fallible filesystem, git
//! and template steps of the generator.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the scaffolding code.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Failures that can occur while scaffolding a package.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The target directory already exists.
    #[error("destination already exists: {0}")]
    DestinationExists(PathBuf),

    /// An underlying filesystem operation failed.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// A template failed to render.
    #[error("failed to render template \"{path}\"")]
    Template {
        /// Path of the template that failed.
        path: String,
        /// The underlying rendering error.
        source: handlebars::RenderError,
    },

    /// A git operation failed.
    #[error("git error")]
    Git(#[from] git2::Error),
}
