//! CLI entry point for the abstracts tool.

use abstracts_core::{LabelKind, ensure_ready};
use anyhow::Result;
use clap::Parser;
use tracing::debug;

mod app_config;
mod cli;
mod commands;
mod progress;

use app_config::{Settings, load_default_file_config};
use cli::{Cli, Command};

fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let cli = Cli::parse();

    let loaded_config = load_default_file_config()?;
    let settings = Settings::resolve(&cli.global, loaded_config.config.as_ref());

    // Priority: RUST_LOG env var > quiet flag > verbose flag > config verbosity > default (info)
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(settings.verbosity.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?cli, "CLI arguments parsed");
    debug!(
        config_path = ?loaded_config.path,
        loaded = loaded_config.loaded_from_file,
        "Configuration resolved"
    );

    if settings.clean.enabled {
        ensure_ready();
    }

    match &cli.command {
        Command::Summary { bins } => commands::run_summary_command(&settings, *bins),
        Command::Show {
            index,
            json,
            metadata,
        } => commands::run_show_command(&settings, *index, *json, *metadata),
        Command::Sample { count, seed } => commands::run_sample_command(&settings, *count, *seed),
        Command::Words { top } => commands::run_words_command(&settings, *top),
        Command::Programs => commands::run_labels_command(&settings, LabelKind::Program),
        Command::Directorates => commands::run_labels_command(&settings, LabelKind::Directorate),
        Command::Config => commands::run_config_show_command(&settings, &loaded_config),
    }
}
