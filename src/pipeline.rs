// src/pipeline.rs
// =============================================================================
// Drives the download: for every commit, for every modified path,
// filter -> fetch -> write.
//
// Everything runs one step at a time. The first error ends the run; files
// written before it stay on disk.
// =============================================================================

use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::github::ContentFetcher;
use crate::mirror::{self, FetchedFile};
use crate::payload::CommitDescriptor;

/// Counts reported at the end of a successful run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub written: usize,
    pub skipped: usize,
}

pub struct Pipeline<'a> {
    config: &'a PipelineConfig,
    fetcher: &'a dyn ContentFetcher,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a PipelineConfig, fetcher: &'a dyn ContentFetcher) -> Self {
        Self { config, fetcher }
    }

    pub async fn run(&self, commits: &[CommitDescriptor]) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for commit in commits {
            for path in commit.candidate_paths(self.config.include_added) {
                if !self.config.filter.matches(path) {
                    debug!(path, "skipped file {} from downloading", path);
                    summary.skipped += 1;
                    continue;
                }

                let content = self.fetcher.fetch(path, &commit.revision).await?;
                let file = FetchedFile {
                    path: path.to_string(),
                    content,
                };
                mirror::write_file(&self.config.output_folder, &file)?;
                summary.written += 1;
            }
        }

        info!(
            written = summary.written,
            skipped = summary.skipped,
            "finished downloading modified files"
        );
        Ok(summary)
    }
}
