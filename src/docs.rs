// src/docs.rs
// =============================================================================
// Generates markdown usage documentation for the command (--doc).
//
// The page is rendered straight from the clap definition, so it never drifts
// from the real flags. It is written to ./docs/<command>.md.
// =============================================================================

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Command;

use crate::error::{Error, Result};

// Writes the markdown page into `docs_dir`, creating the folder if needed
//
// Returns the path of the written page.
pub fn generate_markdown(command: &Command, docs_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(docs_dir).map_err(|source| Error::Docs {
        path: docs_dir.to_path_buf(),
        source,
    })?;

    let page = docs_dir.join(format!("{}.md", command.get_name()));
    fs::write(&page, render_markdown(command)).map_err(|source| Error::Docs {
        path: page.clone(),
        source,
    })?;

    Ok(page)
}

pub fn render_markdown(command: &Command) -> String {
    let mut command = command.clone();
    let name = command.get_name().to_string();
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "## {name}\n");
    if let Some(about) = command.get_about() {
        let _ = writeln!(out, "{about}\n");
    }

    out.push_str("### Synopsis\n\n");
    if let Some(long_about) = command.get_long_about() {
        let _ = writeln!(out, "{long_about}\n");
    }
    let _ = writeln!(out, "```\n{}\n```\n", command.render_usage());

    out.push_str("### Options\n\n");
    out.push_str("| Flag | Default | Description |\n");
    out.push_str("|------|---------|-------------|\n");
    for arg in command.get_arguments() {
        let mut flag = String::new();
        if let Some(short) = arg.get_short() {
            let _ = write!(flag, "`-{short}`, ");
        }
        match arg.get_long() {
            Some(long) => {
                let _ = write!(flag, "`--{long}`");
            }
            None => {
                let _ = write!(flag, "`{}`", arg.get_id());
            }
        }

        let defaults: Vec<String> = arg
            .get_default_values()
            .iter()
            .map(|value| value.to_string_lossy().into_owned())
            .collect();
        let default = if defaults.is_empty() {
            String::new()
        } else {
            format!("`{}`", defaults.join(", "))
        };

        let mut help = arg
            .get_help()
            .map(|help| help.to_string())
            .unwrap_or_default();
        if let Some(env) = arg.get_env() {
            let _ = write!(help, " (env: `{}`)", env.to_string_lossy());
        }
        let _ = writeln!(out, "| {flag} | {default} | {} |", help.trim());
    }

    out
}
