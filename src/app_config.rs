//! Application configuration loading for CLI defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use abstracts_core::CleanOptions;
use abstracts_core::corpus::{CorpusOptions, DEFAULT_EXTENSION};
use anyhow::{Context, Result, bail};

use crate::cli::GlobalArgs;

/// File configuration for CLI defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    /// Directory holding the award XML records.
    pub dataset_dir: Option<PathBuf>,
    /// Record file suffix (default `.xml`).
    pub extension: Option<String>,
    /// Clean abstracts before returning them.
    pub clean: Option<bool>,
    /// Lemmatize cleaned tokens.
    pub lemmatize: Option<bool>,
    /// Collapse runs of hyphens before tokenizing.
    pub collapse_hyphen_runs: Option<bool>,
    /// Strip `www...` runs along with `http...` runs.
    pub strip_websites: Option<bool>,
    /// Default verbosity mode.
    pub verbosity: Option<VerbositySetting>,
}

impl FileConfig {
    /// Validates config values against CLI constraints.
    pub fn validate(&self) -> Result<()> {
        if let Some(extension) = &self.extension
            && extension.is_empty()
        {
            bail!("Invalid config value for `extension`: must not be empty");
        }
        if let Some(dir) = &self.dataset_dir
            && dir.as_os_str().is_empty()
        {
            bail!("Invalid config value for `dataset_dir`: must not be empty");
        }
        Ok(())
    }
}

/// Supported config verbosity labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbositySetting {
    Default,
    Verbose,
    Quiet,
    Debug,
}

impl VerbositySetting {
    /// Returns the stable string label for display output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Verbose => "verbose",
            Self::Quiet => "quiet",
            Self::Debug => "debug",
        }
    }

    /// Log level used when neither `RUST_LOG` nor a CLI flag decides.
    #[must_use]
    pub fn log_level(self) -> &'static str {
        match self {
            Self::Default => "info",
            Self::Verbose => "debug",
            Self::Quiet => "error",
            Self::Debug => "trace",
        }
    }
}

/// Loaded config metadata.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    /// Resolved config path if a base directory is known.
    pub path: Option<PathBuf>,
    /// Parsed file config when a config file exists and was valid.
    pub config: Option<FileConfig>,
    /// Indicates whether configuration was loaded from disk.
    pub loaded_from_file: bool,
}

/// Resolves default config path.
///
/// Priority:
/// 1. `$XDG_CONFIG_HOME/abstracts/config.toml`
/// 2. `$HOME/.config/abstracts/config.toml`
#[must_use]
pub fn resolve_default_config_path() -> Option<PathBuf> {
    if let Some(xdg_config_home) = env_var_non_empty_os("XDG_CONFIG_HOME") {
        return Some(
            PathBuf::from(xdg_config_home)
                .join("abstracts")
                .join("config.toml"),
        );
    }

    let home = env_var_non_empty_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("abstracts")
            .join("config.toml"),
    )
}

fn env_var_non_empty_os(name: &str) -> Option<std::ffi::OsString> {
    let value = env::var_os(name)?;
    if value.is_empty() { None } else { Some(value) }
}

/// Loads config from default path if present.
pub fn load_default_file_config() -> Result<LoadedConfig> {
    let path = resolve_default_config_path();
    let Some(path_ref) = path.as_deref() else {
        return Ok(LoadedConfig {
            path,
            config: None,
            loaded_from_file: false,
        });
    };

    if !path_ref.exists() {
        return Ok(LoadedConfig {
            path,
            config: None,
            loaded_from_file: false,
        });
    }

    let config = load_file_config(path_ref)?;
    Ok(LoadedConfig {
        path,
        config: Some(config),
        loaded_from_file: true,
    })
}

fn load_file_config(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    parse_config_str(&raw)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))
}

fn parse_config_str(raw: &str) -> Result<FileConfig> {
    let mut cfg = FileConfig::default();
    for (line_index, raw_line) in raw.lines().enumerate() {
        let line = strip_inline_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        let Some((raw_key, raw_value)) = line.split_once('=') else {
            bail!(
                "Invalid config syntax on line {}: expected key = value",
                line_index + 1
            );
        };

        let key = raw_key.trim();
        let value = raw_value.trim();
        let line_number = line_index + 1;

        match key {
            "dataset_dir" => {
                let parsed = parse_string_literal(value).with_context(|| {
                    format!("Invalid `dataset_dir` value on line {line_number}")
                })?;
                cfg.dataset_dir = Some(PathBuf::from(parsed));
            }
            "extension" => {
                let parsed = parse_string_literal(value).with_context(|| {
                    format!("Invalid `extension` value on line {line_number}")
                })?;
                cfg.extension = Some(parsed);
            }
            "clean" => cfg.clean = Some(parse_flag(key, value, line_number)?),
            "lemmatize" => cfg.lemmatize = Some(parse_flag(key, value, line_number)?),
            "collapse_hyphen_runs" => {
                cfg.collapse_hyphen_runs = Some(parse_flag(key, value, line_number)?);
            }
            "strip_websites" => cfg.strip_websites = Some(parse_flag(key, value, line_number)?),
            "verbosity" => {
                let parsed = parse_string_literal(value).with_context(|| {
                    format!("Invalid `verbosity` value on line {line_number}")
                })?;
                cfg.verbosity = Some(parse_verbosity(&parsed).with_context(|| {
                    format!("Invalid `verbosity` value '{parsed}' on line {line_number}")
                })?);
            }
            unknown => {
                bail!("Unknown configuration key: '{unknown}' on line {line_number}");
            }
        }
    }
    cfg.validate()?;
    Ok(cfg)
}

fn parse_flag(key: &str, value: &str, line_number: usize) -> Result<bool> {
    parse_boolean(value).with_context(|| format!("Invalid `{key}` value on line {line_number}"))
}

fn strip_inline_comment(line: &str) -> &str {
    let mut in_string = false;
    for (index, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..index],
            _ => {}
        }
    }
    line
}

fn parse_string_literal(raw_value: &str) -> Result<String> {
    if raw_value.len() < 2 || !raw_value.starts_with('"') || !raw_value.ends_with('"') {
        bail!("Expected double-quoted string");
    }
    Ok(raw_value[1..raw_value.len() - 1].to_string())
}

fn parse_verbosity(value: &str) -> Result<VerbositySetting> {
    match value {
        "default" => Ok(VerbositySetting::Default),
        "verbose" => Ok(VerbositySetting::Verbose),
        "quiet" => Ok(VerbositySetting::Quiet),
        "debug" => Ok(VerbositySetting::Debug),
        _ => bail!("Expected one of: default, verbose, quiet, debug"),
    }
}

fn parse_boolean(raw_value: &str) -> Result<bool> {
    match raw_value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => bail!("Expected 'true' or 'false'"),
    }
}

/// Effective settings after layering CLI flags over the config file over
/// built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub dataset_dir: PathBuf,
    pub extension: String,
    pub clean: CleanOptions,
    pub verbosity: VerbositySetting,
}

impl Settings {
    /// Applies CLI overrides on top of `file` (if any).
    #[must_use]
    pub fn resolve(args: &GlobalArgs, file: Option<&FileConfig>) -> Self {
        let file = file.cloned().unwrap_or_default();
        let defaults = CleanOptions::default();

        let clean = CleanOptions {
            enabled: !args.raw && file.clean.unwrap_or(defaults.enabled),
            lemmatize: args.lemmatize || file.lemmatize.unwrap_or(defaults.lemmatize),
            collapse_hyphen_runs: file
                .collapse_hyphen_runs
                .unwrap_or(defaults.collapse_hyphen_runs),
            strip_websites: file.strip_websites.unwrap_or(defaults.strip_websites),
        };

        Self {
            dataset_dir: args
                .dir
                .clone()
                .or(file.dataset_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            extension: args
                .extension
                .clone()
                .or(file.extension)
                .unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
            clean,
            verbosity: if args.quiet {
                VerbositySetting::Quiet
            } else {
                match args.verbose {
                    0 => file.verbosity.unwrap_or(VerbositySetting::Default),
                    1 => VerbositySetting::Verbose,
                    _ => VerbositySetting::Debug,
                }
            },
        }
    }

    #[must_use]
    pub fn corpus_options(&self) -> CorpusOptions {
        CorpusOptions::default()
            .with_extension(self.extension.clone())
            .with_clean(self.clean)
    }
}
