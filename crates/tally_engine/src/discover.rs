use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::CountError;

/// Collect the full path of every regular file below `input_dir`.
///
/// Symlinks to files are followed when read; symlinked directories are not
/// descended. A symlink whose target cannot be resolved fails the walk. The
/// returned order is whatever the filesystem yields.
pub fn discover_files(input_dir: &Path) -> Result<Vec<PathBuf>, CountError> {
    if !input_dir.is_dir() {
        return Err(CountError::InputDir {
            path: input_dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input_dir).min_depth(1) {
        let entry = entry.map_err(|source| CountError::Walk {
            path: input_dir.to_path_buf(),
            source,
        })?;
        let file_type = entry.file_type();
        if file_type.is_file() {
            files.push(entry.into_path());
        } else if file_type.is_symlink() {
            let target = fs::metadata(entry.path()).map_err(|source| CountError::Read {
                path: entry.path().to_path_buf(),
                source,
            })?;
            if target.is_file() {
                files.push(entry.into_path());
            }
        }
    }
    Ok(files)
}
