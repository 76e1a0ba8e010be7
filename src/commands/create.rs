//! The create command - validates the name, resolves the language variant
//! and runs the scaffolding pipeline.

use std::env;
use std::process;

use anyhow::Result;

use crate::error::ScaffoldError;
use crate::language::{choose_language, TerminalPrompt};
use crate::logger::Logger;
use crate::package_name;
use crate::scaffold::{scaffold, ScaffoldOptions};

/// Options for the create command.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Name of the package (`@scope/ckeditor5-*`).
    pub package_name: String,
    /// Programming language short code from `--lang`, if given.
    pub lang: Option<String>,
    /// Output additional logs.
    pub verbose: bool,
    /// Use local checkouts of the tooling instead of registry releases.
    pub dev: bool,
    /// Install with npm instead of yarn.
    pub use_npm: bool,
}

/// Execute the create command.
///
/// Exits with code 1 when the package name is invalid or the destination
/// directory already exists.
pub fn execute_create(options: CreateOptions) -> Result<()> {
    let logger = Logger::new(options.verbose);

    logger.step("Verifying the specified package name.");
    let validation = package_name::validate(&options.package_name);
    if !validation.is_valid() {
        logger.error(format!(
            "Package name \"{}\" is invalid.",
            options.package_name
        ));
        for reason in validation.reasons() {
            eprintln!("{reason}");
        }
        process::exit(1);
    }

    let language = choose_language(options.lang.as_deref(), &TerminalPrompt)?;
    tracing::debug!("selected language: {}", language.code());

    let scaffold_options = ScaffoldOptions {
        package_name: options.package_name,
        language,
        dev: options.dev,
        use_npm: options.use_npm,
    };

    match scaffold(&env::current_dir()?, &scaffold_options, &logger) {
        Ok(_) => Ok(()),
        Err(ScaffoldError::DestinationExists(_)) => {
            logger.error("Cannot create a directory as the location is already taken.");
            eprintln!("Aborting.");
            process::exit(1);
        }
        Err(error) => Err(error.into()),
    }
}
