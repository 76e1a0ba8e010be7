//! Git repository initialization for the generated package.

use std::fs;
use std::path::Path;

use git2::{IndexAddOption, Repository};

use crate::error::Result;

const INITIAL_COMMIT_MESSAGE: &str = "Initialize the package using Create CKEditor 5 Plugin.";

/// Initializes a repository in `directory` and commits the skeleton.
///
/// The commit fails when no committer identity is configured. The package
/// works without history, so in that case the half-made `.git` directory
/// is removed and the run continues.
pub fn initialize_repository(directory: &Path) -> Result<()> {
    let repository = Repository::init(directory)?;

    if let Err(error) = create_initial_commit(&repository) {
        tracing::warn!("initial commit failed: {error}");
        let _ = fs::remove_dir_all(directory.join(".git"));
    }

    Ok(())
}

fn create_initial_commit(repository: &Repository) -> std::result::Result<(), git2::Error> {
    let mut index = repository.index()?;
    index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
    index.write()?;

    let tree_id = index.write_tree()?;
    let tree = repository.find_tree(tree_id)?;
    let signature = repository.signature()?;

    repository.commit(
        Some("HEAD"),
        &signature,
        &signature,
        INITIAL_COMMIT_MESSAGE,
        &tree,
        &[],
    )?;

    Ok(())
}
