use crate::core::{CliError, PoDirectoryNotFoundError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension of the translation files.
pub const PO_EXTENSION: &str = "po";

/// Lists the `.po` files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not searched.
pub fn discover_translation_files(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    if !dir.is_dir() {
        return Err(PoDirectoryNotFoundError {
            path: dir.to_path_buf(),
        }
        .into());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path.extension().is_some_and(|ext| ext == PO_EXTENSION)
        {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}
