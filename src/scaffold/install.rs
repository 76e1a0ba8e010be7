//! Dependency installation for the generated package.

use std::path::Path;
use std::process::Command;
use std::time::Duration;

use indicatif::ProgressBar;

use crate::logger::Logger;

/// Runs the package manager in `directory`; yarn by default, npm with
/// `use_npm`.
///
/// A failed or missing package manager is reported as a warning rather
/// than aborting the run. The skeleton is complete at this point and the
/// user can install by hand.
pub fn install_dependencies(directory: &Path, use_npm: bool, logger: &Logger) {
    let mut command = if use_npm {
        let mut npm = Command::new("npm");
        npm.arg("install").arg("--prefix").arg(directory);
        npm
    } else {
        let mut yarn = Command::new("yarnpkg");
        yarn.arg("--cwd").arg(directory);
        yarn
    };
    command.current_dir(directory);

    tracing::debug!("running {:?}", command);

    let status = if logger.is_verbose() {
        command.status()
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Installing dependencies...");
        spinner.enable_steady_tick(Duration::from_millis(120));

        command.stdout(std::process::Stdio::null());
        let status = command.status();

        spinner.finish_and_clear();
        status
    };

    match status {
        Ok(status) if status.success() => {}
        Ok(status) => {
            logger.warning(format!(
                "Dependency installation exited with {status}. Run it again inside the package directory."
            ));
        }
        Err(error) => {
            logger.warning(format!(
                "Could not run the package manager: {error}. Install dependencies manually."
            ));
        }
    }
}
