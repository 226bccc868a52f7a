// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The command has no subcommands: every option is a flag on the root
// command, matching how CI jobs call it from a push webhook:
//
//   github-content -c "$COMMITS" -o org -r repo -f ./ontologies
//
// The four "required" options are Option<String> here rather than clap
// required args, because `--doc` must work without them. They are checked
// in `pipeline_config()` instead.
// =============================================================================

use std::path::PathBuf;

use clap::Parser;
use url::Url;

use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::filter::{SuffixFilter, DEFAULT_SUFFIX};
use crate::github::{GithubSettings, DEFAULT_API_URL};
use crate::logging::{LogFormat, LogLevel, LoggingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "github-content",
    version,
    about = "cli to download modified files from github commit",
    long_about = "A command line application that extracts the list of modified files \
                  from the commits of a push event and then downloads them using the github api."
)]
pub struct Cli {
    /// Generate markdown documentation in ./docs and exit
    #[arg(long)]
    pub doc: bool,

    /// Commit data received from GitHub after a push event [required]
    #[arg(short = 'c', long)]
    pub commit_payload: Option<String>,

    /// GitHub repository owner [required]
    #[arg(short = 'o', long)]
    pub owner: Option<String>,

    /// GitHub repository name [required]
    #[arg(short = 'r', long)]
    pub repository: Option<String>,

    /// Output folder [required]
    #[arg(short = 'f', long)]
    pub folder: Option<PathBuf>,

    /// File extension that will be screened in the commit payload (repeatable)
    #[arg(short = 'p', long = "file-extension", default_value = DEFAULT_SUFFIX)]
    pub file_extensions: Vec<String>,

    /// Also download files added (not only modified) by the commits
    #[arg(long)]
    pub include_added: bool,

    /// Log level for the application
    #[arg(long, value_enum, default_value_t = LogLevel::Error)]
    pub log_level: LogLevel,

    /// Format of the log output
    #[arg(long, value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,

    /// File for log output instead of standard output
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// GitHub API token, needed for private repositories
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub API base URL, e.g. https://ghe.example.com/api/v3
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: Url,
}

impl Cli {
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level,
            format: self.log_format,
            file: self.log_file.clone(),
        }
    }

    pub fn github_settings(&self) -> GithubSettings {
        GithubSettings {
            api_url: self.api_url.clone(),
            token: self.token.clone().filter(|token| !token.is_empty()),
        }
    }

    /// The raw commit payload, or a config error when it was not given
    pub fn payload(&self) -> Result<&str> {
        required(self.commit_payload.as_deref(), "commit-payload")
    }

    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let owner = required(self.owner.as_deref(), "owner")?;
        let repository = required(self.repository.as_deref(), "repository")?;
        let output_folder = self
            .folder
            .clone()
            .filter(|folder| !folder.as_os_str().is_empty())
            .ok_or_else(|| missing("folder"))?;
        let filter = SuffixFilter::new(self.file_extensions.iter().cloned())
            .ok_or_else(|| Error::Config("at least one --file-extension is needed".to_string()))?;

        Ok(PipelineConfig {
            owner: owner.to_string(),
            repository: repository.to_string(),
            output_folder,
            filter,
            include_added: self.include_added,
        })
    }
}

fn required<'a>(value: Option<&'a str>, flag: &str) -> Result<&'a str> {
    value.filter(|v| !v.is_empty()).ok_or_else(|| missing(flag))
}

fn missing(flag: &str) -> Error {
    Error::Config(format!("missing required option --{flag}"))
}
