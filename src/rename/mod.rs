mod name_builder;

pub use name_builder::{build_candidate_name, sanitize_name};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum RenameError {
    #[error("'{destination}' already exists")]
    Conflict { destination: String },

    #[error("Failed to rename '{from}' to '{to}': {source}")]
    Io {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },
}

/// Rename a folder in place within `base_dir`.
///
/// The destination is `base_dir/new_name`. An existing destination fails with
/// `Conflict` before anything is touched; an OS failure fails with `Io`.
/// Either way the source is left unchanged.
pub fn rename_folder(
    base_dir: &Path,
    source_path: &Path,
    new_name: &str,
) -> Result<PathBuf, RenameError> {
    let destination = base_dir.join(new_name);

    if destination.exists() {
        return Err(RenameError::Conflict {
            destination: new_name.to_string(),
        });
    }

    fs::rename(source_path, &destination).map_err(|e| RenameError::Io {
        from: source_path.display().to_string(),
        to: new_name.to_string(),
        source: e,
    })?;

    info!(from = ?source_path, to = %new_name, "Renamed folder");

    Ok(destination)
}
