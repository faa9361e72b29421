//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/mktree/mktree.toml`
//! 3. Local config: `<dir>/.mktree.toml` (usually the working directory)
//! 4. Environment variables: `MKTREE_*` prefix
//!
//! Command-line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Unified configuration for mktree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Disambiguate repeated labels with numeric suffixes
    pub dedupe: bool,
    /// Render `// annotation` after labels that carry one
    pub annotations: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dedupe: true,
            annotations: true,
        }
    }
}

/// Get the XDG config directory for mktree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "mktree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("mktree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".mktree.toml")
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.mktree.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("dedupe", defaults.dedupe)
            .map_err(config_err)?
            .set_default("annotations", defaults.annotations)
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("config: global {}", global_path.display());
                builder = builder.add_source(File::from(global_path).format(FileFormat::Toml));
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("config: local {}", local_path.display());
                builder = builder.add_source(File::from(local_path).format(FileFormat::Toml));
            }
        }

        builder = builder.add_source(Environment::with_prefix("MKTREE").try_parsing(true));

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Apply command-line switches; they can only turn features off.
    pub fn with_overrides(mut self, no_dedupe: bool, no_annotations: bool) -> Self {
        if no_dedupe {
            self.dedupe = false;
        }
        if no_annotations {
            self.annotations = false;
        }
        self
    }

    /// Serialize the merged settings for display.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
