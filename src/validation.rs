use crate::error::{AgentError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Trims `raw` and checks it only contains `a-z`, `0-9` and `-`.
pub fn validate_slug(raw: &str) -> Result<String> {
    let slug = raw.trim();
    let valid = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if !valid {
        return Err(AgentError::InvalidSlug(slug.to_string()));
    }
    Ok(slug.to_string())
}

/// The input must exist and be a directory.
pub fn validate_input_dir(path: &Path) -> Result<()> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AgentError::InputDirNotFound(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };

    if !metadata.is_dir() {
        return Err(AgentError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Refuses to reuse an existing `<output_root>/<slug>` directory.
pub fn ensure_output_dir_absent(output_root: &Path, slug: &str) -> Result<PathBuf> {
    let output_dir = output_root.join(slug);
    if output_dir.exists() {
        return Err(AgentError::OutputDirExists(output_dir));
    }
    Ok(output_dir)
}

/// Creates the batch output directory. The last component must not exist yet.
pub fn create_output_dir(output_dir: &Path) -> Result<()> {
    if let Some(parent) = output_dir.parent() {
        fs::create_dir_all(parent)
            .map_err(|_| AgentError::DirectoryCreationFailed(parent.to_path_buf()))?;
    }

    match fs::create_dir(output_dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            Err(AgentError::OutputDirExists(output_dir.to_path_buf()))
        }
        Err(_) => Err(AgentError::DirectoryCreationFailed(output_dir.to_path_buf())),
    }
}
