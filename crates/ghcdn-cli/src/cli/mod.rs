//! CLI for ghcdn.

mod clipboard;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use ghcdn_core::app::AppState;
use ghcdn_core::config::{self, GhcdnConfig};
use ghcdn_core::storage::FileStorage;
use std::path::PathBuf;

use commands::{run_add, run_completions, run_copy, run_links, run_list, run_remove};

/// Top-level CLI for ghcdn.
#[derive(Debug, Parser)]
#[command(name = "ghcdn", version)]
#[command(about = "ghcdn: turn GitHub file links into CDN mirror links", long_about = None)]
pub struct Cli {
    /// Directory holding custom templates (overrides `state_dir` in config.toml).
    #[arg(long, global = true, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print CDN mirror links for a GitHub file link.
    Links {
        /// raw.githubusercontent.com or github.com link: https://<host>/<owner>/<repo>/<ref>/<path>
        url: String,
    },

    /// Copy one generated mirror link to the clipboard.
    Copy {
        /// GitHub file link.
        url: String,
        /// Which generated link to copy (1-based, as printed by `links`).
        #[arg(long, short, default_value = "1", value_name = "N")]
        index: usize,
    },

    /// Add a custom CDN template, e.g. https://mirror.example/{user}/{repo}/{branch}/{path}
    Add {
        /// Template text; placeholders: {user} {repo} {branch} {commit} {path}.
        template: String,
    },

    /// Remove a custom template by its index (1-based, as printed by `list`).
    Remove {
        /// Template index.
        index: usize,
    },

    /// List custom templates.
    List {
        /// Also show the built-in templates.
        #[arg(long)]
        all: bool,
        /// Do not truncate long templates.
        #[arg(long)]
        wide: bool,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Open the app state, restoring custom templates from the state dir.
fn open_state(cfg: &GhcdnConfig, state_dir: Option<PathBuf>) -> Result<AppState<FileStorage>> {
    let storage = match state_dir.or_else(|| cfg.state_dir.clone()) {
        Some(dir) => FileStorage::new(dir),
        None => FileStorage::open_default()?,
    };
    tracing::debug!(dir = %storage.dir().display(), "opening template store");
    let mut app = AppState::load(storage);
    app.set_include_builtin(cfg.include_builtin);
    Ok(app)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        if let CliCommand::Completions { shell } = cli.command {
            return run_completions(shell);
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let mut app = open_state(&cfg, cli.state_dir)?;

        match cli.command {
            CliCommand::Links { url } => run_links(&mut app, &url)?,
            CliCommand::Copy { url, index } => run_copy(&mut app, &cfg, &url, index)?,
            CliCommand::Add { template } => run_add(&mut app, &template)?,
            CliCommand::Remove { index } => run_remove(&mut app, index)?,
            CliCommand::List { all, wide } => run_list(&app, &cfg, all, wide)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
