// src/github/fetch.rs
// =============================================================================
// This module downloads single files from a GitHub repository at a given
// revision.
//
// Strategy:
// - Call the REST "get repository content" endpoint:
//     GET /repos/{owner}/{repo}/contents/{path}?ref={revision}
// - The response is a JSON object whose `content` field holds the file,
//   base64-encoded and wrapped at 60 columns
// - Decode it into raw bytes for the writer
//
// Why the API and not raw.githubusercontent.com?
// - Private repositories work with a token
// - GitHub Enterprise exposes the same API under a different base URL
// - The response tells us when a path is a directory or too large
//
// Exactly one request is made per file. There is no retry and no timeout;
// a failing request stops the whole run.
// =============================================================================

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// Public GitHub API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Source of file contents at a revision
///
/// The pipeline only depends on this trait, so tests can count and fake
/// fetches without a network.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, path: &str, revision: &str) -> Result<Vec<u8>>;
}

/// Connection settings for the GitHub API
#[derive(Debug, Clone)]
pub struct GithubSettings {
    pub api_url: Url,
    pub token: Option<String>,
}

/// Fetches file contents for one repository
pub struct GithubClient {
    http: Client,
    settings: GithubSettings,
    owner: String,
    repository: String,
}

impl GithubClient {
    pub fn new(settings: GithubSettings, owner: &str, repository: &str) -> Result<Self> {
        // No .timeout(): a hung request blocks the run rather than failing it
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Config(format!("could not build HTTP client: {e}")))?;

        Ok(Self {
            http,
            settings,
            owner: owner.to_string(),
            repository: repository.to_string(),
        })
    }

    // Builds the contents URL for a path
    //
    // Each path component becomes its own URL segment, so spaces, '#' and
    // '?' in file names are percent-encoded while the '/' separators stay.
    fn contents_url(&self, path: &str, revision: &str) -> Result<Url> {
        let mut url = self.settings.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::Config(format!(
                    "API URL cannot be a base: {}",
                    self.settings.api_url
                ))
            })?
            .pop_if_empty()
            .extend(["repos", self.owner.as_str(), self.repository.as_str(), "contents"])
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        url.query_pairs_mut().append_pair("ref", revision);
        Ok(url)
    }
}

#[async_trait]
impl ContentFetcher for GithubClient {
    async fn fetch(&self, path: &str, revision: &str) -> Result<Vec<u8>> {
        let url = self.contents_url(path, revision)?;
        debug!(%url, path, revision, "requesting file contents");

        let mut request = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION);
        if let Some(token) = &self.settings.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::fetch(path, revision, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::fetch(path, revision, describe_failure(status, &body)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::fetch(path, revision, e.to_string()))?;

        decode_contents(&body).map_err(|reason| Error::fetch(path, revision, reason))
    }
}

// The subset of the contents response we care about
#[derive(Debug, Deserialize)]
struct FileContent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    encoding: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

// Turns a contents API response body into the file's bytes
//
// Returns a human-readable reason on failure; the caller attaches the path
// and revision.
fn decode_contents(body: &[u8]) -> std::result::Result<Vec<u8>, String> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| format!("invalid response body: {e}"))?;

    // Directories come back as an array of entries
    if value.is_array() {
        return Err("path is a directory, not a file".to_string());
    }

    let file: FileContent =
        serde_json::from_value(value).map_err(|e| format!("unexpected response shape: {e}"))?;

    if file.kind != "file" {
        return Err(format!("path is a {}, not a file", file.kind));
    }

    let content = file.content.unwrap_or_default();
    match file.encoding.as_deref() {
        Some("base64") => {
            let compact: Vec<u8> = content
                .bytes()
                .filter(|b| !b.is_ascii_whitespace())
                .collect();
            general_purpose::STANDARD
                .decode(compact)
                .map_err(|e| format!("invalid base64 content: {e}"))
        }
        None | Some("") => Ok(content.into_bytes()),
        Some(other) => Err(format!(
            "unsupported content encoding: {other}, this may occur when file size > 1 MB"
        )),
    }
}

// Builds an error message for a non-2xx response
//
// GitHub error bodies look like {"message": "Not Found", ...}; we surface
// the message when there is one.
fn describe_failure(status: StatusCode, body: &str) -> String {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string));

    match message {
        Some(message) => format!("HTTP {}: {}", status.as_u16(), message),
        None => format!("HTTP {}", status),
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why #[async_trait] on ContentFetcher?
//    - The pipeline takes the fetcher as `&dyn ContentFetcher`
//    - Plain async fns in traits are not object safe, async_trait boxes the
//      returned future so dynamic dispatch works
//
// 2. Why strip whitespace before decoding?
//    - GitHub inserts a newline every 60 characters of base64
//    - The base64 crate's STANDARD engine is strict and rejects them
//
// 3. Why look at `type`?
//    - The same endpoint serves files, symlinks and submodules
//    - Only files carry content we can write out
// -----------------------------------------------------------------------------
