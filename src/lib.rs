#![forbid(unsafe_code)]

//! # Create CKEditor 5 Plugin
//!
//! Generates a CKEditor 5 plugin package skeleton: validates the proposed
//! package name, derives the identifiers used by the DLL build, renders the
//! template files, installs dependencies and initializes a git repository.
//!
//! ## Example
//!
//! ```rust
//! use create_ckeditor5_plugin::package_name;
//!
//! let result = package_name::validate("@scope/ckeditor5-rich-text");
//! assert!(result.is_valid());
//!
//! let ids = package_name::derive("@scope/ckeditor5-rich-text");
//! assert_eq!(ids.global_key, "richText");
//! ```

pub mod commands;
pub mod error;
pub mod language;
pub mod logger;
pub mod package_name;
pub mod scaffold;
pub mod versions;

// Re-exports
pub use error::{Result, ScaffoldError};
pub use language::{choose_language, ChoicePrompt, Language, TerminalPrompt};
pub use logger::Logger;
pub use package_name::{derive, validate, DerivedIdentifiers, ValidationResult};
pub use scaffold::{scaffold, ScaffoldOptions};
pub use versions::DependencyVersions;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
