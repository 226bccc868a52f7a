// src/github/mod.rs
// =============================================================================
// This module handles fetching files from GitHub repositories.
//
// Currently implements:
// - The ContentFetcher trait the pipeline downloads through
// - GithubClient, which reads a file at a revision via the REST contents API
// - Optional token authentication and a configurable API base URL for
//   GitHub Enterprise
// =============================================================================

mod fetch;

pub use fetch::{ContentFetcher, GithubClient, GithubSettings, DEFAULT_API_URL};
