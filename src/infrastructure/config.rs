//! Configuration management

use crate::domain::{AssignmentDraft, ClassDraft, Priority, DEFAULT_CLASS_COLOR};
use crate::error::{ClassboardError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "CLASSBOARD_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Color given to classes saved without one
    pub default_color: String,
    /// Priority given to assignments saved without one
    pub default_priority: Priority,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_color: DEFAULT_CLASS_COLOR.to_string(),
            default_priority: Priority::default(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ClassboardError::Config(format!("Config file not found: {}", path.display()))
            } else {
                ClassboardError::Io(e)
            }
        })?;

        Self::from_toml(&contents).map_err(|e| match e {
            ClassboardError::TomlDeserialize(inner) => ClassboardError::Config(format!(
                "Failed to parse {}: {}",
                path.display(),
                inner
            )),
            other => other,
        })
    }

    /// Parse config from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;

        if config.default_color.trim().is_empty() {
            return Err(ClassboardError::Config(
                "default_color must not be empty".to_string(),
            ));
        }

        Ok(config)
    }

    /// Find the config to use.
    /// An explicit path wins, then CLASSBOARD_CONFIG, then built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        Self::discover_with(explicit, std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
    }

    fn discover_with(explicit: Option<&Path>, from_env: Option<PathBuf>) -> Result<Self> {
        match (explicit, from_env) {
            (Some(path), _) => Self::load_from_file(path),
            (None, Some(path)) => Self::load_from_file(&path),
            (None, None) => Ok(Config::default()),
        }
    }

    /// Fill the color of a class draft left empty by the form
    pub fn fill_class_defaults(&self, draft: &mut ClassDraft) {
        if draft.color.trim().is_empty() {
            draft.color = self.default_color.clone();
        }
    }

    /// Fill the priority of an assignment draft left empty by the form
    pub fn fill_assignment_defaults(&self, draft: &mut AssignmentDraft) {
        if draft.priority.trim().is_empty() {
            draft.priority = self.default_priority.to_string();
        }
    }
}
