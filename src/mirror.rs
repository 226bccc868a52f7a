// src/mirror.rs
// =============================================================================
// Writes downloaded files into the output folder.
//
// The folder is flat: only the last component of the repository path is
// kept, so "src/a.obo" lands at "<folder>/a.obo". Two paths with the same
// file name overwrite each other and the later one wins.
//
// The output folder must already exist; we never create it.
// =============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};

/// A file downloaded from GitHub, waiting to be written
#[derive(Debug)]
pub struct FetchedFile {
    pub path: String,
    pub content: Vec<u8>,
}

/// Where a repository path ends up inside the output folder
pub fn destination(output_folder: &Path, path: &str) -> Option<PathBuf> {
    Path::new(path)
        .file_name()
        .map(|name| output_folder.join(name))
}

// Writes the file, creating or truncating the destination
//
// Returns the destination path so the caller can report it.
pub fn write_file(output_folder: &Path, file: &FetchedFile) -> Result<PathBuf> {
    let target = destination(output_folder, &file.path).ok_or_else(|| Error::Write {
        path: output_folder.join(&file.path),
        source: std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "path has no file name",
        ),
    })?;

    fs::write(&target, &file.content).map_err(|source| Error::Write {
        path: target.clone(),
        source,
    })?;

    info!(destination = %target.display(), "written file {}", target.display());
    Ok(target)
}
