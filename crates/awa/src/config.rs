//! Run configuration (awa.toml) parsing.
//!
//! ```toml
//! [run]
//! max_steps = 100000
//! max_depth = 4096
//! trace = false
//! ```

use std::path::{Path, PathBuf};

use awa_vm::Limits;
use serde::Deserialize;

use crate::error::ConfigError;

/// File name looked up next to a program when no config is given.
pub const CONFIG_FILE_NAME: &str = "awa.toml";

/// A parsed run configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Execution settings.
    #[serde(default)]
    pub run: RunSection,
}

/// The `[run]` section of the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RunSection {
    /// Abort after this many executed instructions.
    #[serde(default)]
    pub max_steps: Option<u64>,

    /// Maximum number of bubbles in the abyss.
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Log every executed instruction.
    #[serde(default)]
    pub trace: bool,
}

impl RunConfig {
    /// Load a configuration from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_owned(),
            source: e,
        })?;

        Self::from_str(&content, path)
    }

    /// Parse a configuration from a string. `path` is only used in errors.
    pub fn from_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_owned(),
            source: e,
        })
    }

    /// Path of the `awa.toml` in the directory holding `program`, if there
    /// is one.
    pub fn locate(program: &Path) -> Option<PathBuf> {
        let dir = match program.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let candidate = dir.join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }

    /// Resource limits for the machine.
    pub fn limits(&self) -> Limits {
        Limits {
            max_steps: self.run.max_steps,
            max_depth: self.run.max_depth,
        }
    }
}
