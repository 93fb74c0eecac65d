//! Configuration for docnav
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Config file (`--config`, or `docnav.toml` in the document root)
//! 3. Built-in defaults

use crate::error::{DocError, DocResult};
use crate::model::DEFAULT_PREFIX;
use crate::state::default_state_path;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "docnav.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FileConfig {
    /// Root prefix every document id starts with
    #[serde(default)]
    pub prefix: Option<String>,

    /// UI state file; relative paths resolve against the config file's directory
    #[serde(default)]
    pub state: Option<PathBuf>,

    #[serde(default)]
    pub preview_lines: Option<usize>,

    /// Extra file or directory names skipped by the loader
    #[serde(default)]
    pub ignore: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub prefix: Option<String>,
    pub state: Option<PathBuf>,
    pub preview_lines: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub prefix: String,
    pub state: PathBuf,
    pub preview_lines: Option<usize>,
    pub ignore: Vec<String>,
}

/// Reads `explicit` if given (it must exist), else `docnav.toml` under `root` when present.
pub fn load_config(explicit: Option<&Path>, root: Option<&Path>) -> DocResult<FileConfig> {
    let path = match (explicit, root) {
        (Some(p), _) => p.to_path_buf(),
        (None, Some(r)) if r.join(CONFIG_FILE_NAME).is_file() => r.join(CONFIG_FILE_NAME),
        _ => return Ok(FileConfig::default()),
    };
    let text = fs::read_to_string(&path).map_err(|source| DocError::ConfigRead { path: path.clone(), source })?;
    let mut cfg: FileConfig = toml::from_str(&text).map_err(|source| DocError::ConfigParse { path: path.clone(), source })?;
    if let (Some(state), Some(dir)) = (cfg.state.as_ref(), path.parent()) {
        if state.is_relative() { cfg.state = Some(dir.join(state)); }
    }
    debug!("loaded config {}", path.display());
    Ok(cfg)
}

pub fn resolve(file: FileConfig, cli: Overrides) -> Settings {
    let prefix = cli.prefix.or(file.prefix).unwrap_or_else(|| DEFAULT_PREFIX.to_string());
    Settings {
        prefix: normalize_prefix(&prefix),
        state: cli.state.or(file.state).unwrap_or_else(default_state_path),
        preview_lines: cli.preview_lines.or(file.preview_lines),
        ignore: file.ignore,
    }
}

/// Prefixes always end with `/` so stripping leaves a bare relative path.
pub fn normalize_prefix(prefix: &str) -> String {
    if prefix.is_empty() || prefix.ends_with('/') { prefix.to_string() } else { format!("{}/", prefix) }
}
