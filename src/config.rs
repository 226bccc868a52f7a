// src/config.rs
// =============================================================================
// Run configuration, built once from the command line and never changed.
// =============================================================================

use std::path::PathBuf;

use crate::filter::SuffixFilter;

/// What to download and where to put it
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repository: String,
    /// Folder the files are written into
    pub output_folder: PathBuf,
    /// Which modified paths to download
    pub filter: SuffixFilter,
    /// Also download paths listed under `added`
    pub include_added: bool,
}
