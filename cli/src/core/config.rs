//! # ArcRS Configuration System
//!
//! File: cli/src/core/config.rs
//! Repository: https://github.com/arcrs/arcrs
//!
//! ## Overview
//!
//! This module implements the configuration system for ArcRS, handling
//! loading, merging, validation, and access to configuration data. It lets
//! users pin the formats and exclude patterns they use every day instead of
//! repeating them as flags.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.arcrs.toml` in the current directory or ancestors
//!    (the search stops at a `.git` repository root)
//! 2. User-specific `config.toml` under the platform config directory
//! 3. Default values defined in the code
//!
//! Validation happens after merging and before any operation runs: the
//! configured format keys must resolve against the format registry and the
//! configured exclude patterns must compile; a broken configuration fails
//! fast rather than mid-archive.
//!
//! ## Examples
//!
//! A `.arcrs.toml`:
//!
//! ```toml
//! [defaults]
//! compression = "zst"
//! archival = "tar"
//! exclude = ["\\.git", "\\.DS_Store$"]
//! ```
//!
//! The configuration is loaded once per command execution and passed to the
//! handler that needs it.
//!
use crate::common::archive::format::{Archival, Compression};
use crate::common::filter::NameFilter;
use crate::core::error::{ArcrsError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Default formats and filters applied when the matching flags are omitted.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Compression format key used when `-c` is not given.
    #[serde(default = "default_compression")]
    pub compression: String,
    /// Archival format key used when `-t` is not given.
    #[serde(default = "default_archival")]
    pub archival: String,
    /// Exclude patterns applied when no `-x`/`-i` flags are given.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            compression: default_compression(),
            archival: default_archival(),
            exclude: Vec::new(),
        }
    }
}

fn default_compression() -> String {
    "zst".to_string()
}
fn default_archival() -> String {
    "tar".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".arcrs.toml";

/// # Load Configuration (`load_config`)
///
/// Loads, merges, and validates the effective configuration for this
/// invocation. Missing files are fine (defaults apply); present-but-broken
/// files are an error.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "ArcRS", "arcrs") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        debug!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file ({}) found in current directory or ancestors.",
            PROJECT_CONFIG_FILENAME
        );
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        let git_dir = path.join(".git");
        if project_config.exists() && project_config.is_file() {
            return Ok(Some(project_config));
        }
        if git_dir.exists() && git_dir.is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Merges project configuration over user configuration. A project value
/// wins when it differs from the built-in default.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.defaults.compression = if project_cfg.defaults.compression != default_compression() {
        project_cfg.defaults.compression
    } else {
        user.defaults.compression
    };
    merged.defaults.archival = if project_cfg.defaults.archival != default_archival() {
        project_cfg.defaults.archival
    } else {
        user.defaults.archival
    };
    merged.defaults.exclude = if !project_cfg.defaults.exclude.is_empty() {
        project_cfg.defaults.exclude
    } else {
        user.defaults.exclude
    };
    merged
}

/// Validates the merged configuration: format keys must resolve against the
/// registry and exclude patterns must compile.
fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if Compression::from_key(&config.defaults.compression).is_none() {
        return Err(anyhow!(ArcrsError::Config(format!(
            "Unknown default compression format '{}'.",
            config.defaults.compression
        ))));
    }
    if Archival::from_key(&config.defaults.archival).is_none() {
        return Err(anyhow!(ArcrsError::Config(format!(
            "Unknown default archival format '{}'.",
            config.defaults.archival
        ))));
    }
    // Compiling the patterns up front surfaces a bad regex before any
    // archive operation starts.
    NameFilter::exclude(&config.defaults.exclude)
        .context("Invalid exclude pattern in configuration")?;
    debug!("Configuration validation successful.");
    Ok(())
}
