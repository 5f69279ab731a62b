//! Config command handler: show effective configuration.

use anyhow::Result;

use crate::app_config::{LoadedConfig, Settings};

pub fn run_config_show_command(settings: &Settings, loaded_config: &LoadedConfig) -> Result<()> {
    let resolved_path = loaded_config.path.as_ref().map_or_else(
        || "<unresolved>".to_string(),
        |path| path.display().to_string(),
    );
    println!("config_path = {resolved_path}");
    println!(
        "config_file = {}",
        if loaded_config.loaded_from_file {
            "loaded"
        } else {
            "not found (using defaults)"
        }
    );
    println!("dataset_dir = {}", settings.dataset_dir.display());
    println!("extension = {}", settings.extension);
    println!("clean = {}", settings.clean.enabled);
    println!("lemmatize = {}", settings.clean.lemmatize);
    println!("collapse_hyphen_runs = {}", settings.clean.collapse_hyphen_runs);
    println!("strip_websites = {}", settings.clean.strip_websites);
    println!("verbosity = {}", settings.verbosity.as_str());

    Ok(())
}
