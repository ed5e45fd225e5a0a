// rfr-aio/src/fs.rs
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use rfr_common::error::{Result, RfrError};
use tempfile::NamedTempFile;
use tracing::{debug, error};

/// Checks if a path points to a directory (resolving symlinks).
pub fn is_directory(path: &Path) -> bool {
    path.is_dir()
}

/// Creates a directory and all its parent components if they are missing.
pub fn create_dir_all(path: &Path) -> Result<()> {
    debug!("Creating directory recursively: {}", path.display());
    fs::create_dir_all(path).map_err(|e| {
        error!("Failed create dir {}: {}", path.display(), e);
        RfrError::from(e)
    })
}

/// Reads a UTF-8 text file into a string.
pub fn read_text_file(path: &Path) -> Result<String> {
    debug!("Reading text file: {}", path.display());
    fs::read_to_string(path).map_err(RfrError::from)
}

/// Reads a UTF-8 text file, keeping each line's terminator.
pub fn read_text_lines(path: &Path) -> Result<Vec<String>> {
    let contents = read_text_file(path)?;
    Ok(contents.split_inclusive('\n').map(str::to_string).collect())
}

/// Writes `contents` through a temp file in the same directory, then renames
/// it over `path`.
pub fn write_text_file(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(dir)?;
    debug!(
        "Writing {} bytes to {} via temp file {}",
        contents.len(),
        path.display(),
        temp_file.path().display()
    );
    temp_file.write_all(contents.as_bytes())?;
    temp_file.flush()?;

    temp_file.persist(path).map_err(|e| {
        error!(
            "Failed to persist temporary text file over {}: {}",
            path.display(),
            e.error
        );
        RfrError::Io(Arc::new(e.error))
    })?;
    Ok(())
}

/// Where an output artifact ends up: absolute names are kept, relative ones
/// land in `output_dir`. The result is absolute and lexically normalised.
pub fn resolve_output_path(filename: &Path, output_dir: &Path) -> Result<PathBuf> {
    let joined = if filename.is_absolute() {
        filename.to_path_buf()
    } else {
        std::path::absolute(output_dir.join(filename))?
    };
    Ok(normalize_lexically(&joined))
}

/// Drops `.` components and folds `..` into the preceding component without
/// touching the filesystem.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}
