//! Scaffolding pipeline: directory creation, template rendering,
//! dependency installation and git initialization.

mod git;
mod install;
mod templates;

pub use templates::{render_into, TemplateData};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};
use crate::language::Language;
use crate::logger::Logger;
use crate::package_name;
use crate::versions::DependencyVersions;

/// Options for generating one package skeleton.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// The validated package name (`@scope/ckeditor5-*`).
    pub package_name: String,
    pub language: Language,
    /// Use local checkouts of the tooling instead of registry releases.
    pub dev: bool,
    /// Install with npm instead of yarn.
    pub use_npm: bool,
}

/// Creates the package directory under `parent` and fills it.
///
/// `options.package_name` must already have passed
/// [`package_name::validate`]; identifiers are derived from it without
/// re-checking. Returns the created directory.
pub fn scaffold(parent: &Path, options: &ScaffoldOptions, logger: &Logger) -> Result<PathBuf> {
    let identifiers = package_name::derive(&options.package_name);
    let destination = parent.join(&identifiers.directory_name);

    logger.step(format!(
        "Checking whether the \"{}\" directory can be created.",
        identifiers.directory_name
    ));
    if destination.exists() {
        return Err(ScaffoldError::DestinationExists(destination));
    }

    logger.step(format!(
        "Creating the directory \"{}\".",
        destination.display()
    ));
    fs::create_dir_all(&destination)?;

    let versions = DependencyVersions::resolve(options.dev);
    let data = TemplateData::new(&options.package_name, options.language, &versions, &identifiers);

    logger.step("Copying files...");
    render_into(&destination, options.language, &data, logger)?;

    logger.step("Installing dependencies...");
    install::install_dependencies(&destination, options.use_npm, logger);

    logger.step("Initializing Git repository...");
    git::initialize_repository(&destination)?;

    logger.success("Done!");
    print_next_steps(&identifiers.directory_name, options.use_npm, logger);

    Ok(destination)
}

fn print_next_steps(directory_name: &str, use_npm: bool, logger: &Logger) {
    let runner = if use_npm { "npm run" } else { "yarn" };

    logger.step("Next steps:");
    println!("  cd {directory_name}");
    println!("  {runner} start");
}
