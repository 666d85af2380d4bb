//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `DOCKGEN__*` environment variables, `__` between levels
//!    (e.g. `DOCKGEN__GENERATION__COMPOSE=true`)
//! 3. Config file: `--config FILE`, else [`AppConfig::config_path`]
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "DOCKGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for `dockgen init`.
    pub generation: GenerationConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub multi_stage: bool,
    pub compose: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            multi_stage: true,
            compose: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        Self::load_with_env(config_file, Environment::with_prefix(ENV_PREFIX).separator("__"))
    }

    fn load_with_env(config_file: Option<&Path>, env: Environment) -> CliResult<Self> {
        let defaults = toml::to_string(&Self::default()).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise default config: {e}"),
            source: Some(Box::new(e)),
        })?;

        let file = match config_file {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::from(Self::config_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        Config::builder()
            .add_source(File::from_str(&defaults, FileFormat::Toml))
            .add_source(file)
            .add_source(env.try_parsing(true))
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| CliError::ConfigError {
                message: e.to_string(),
                source: Some(Box::new(e)),
            })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.dockgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "dockgen", "dockgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".dockgen.toml"))
    }

    /// Active config file: the explicit one, else the default location.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }

    /// Value at a dotted key such as `generation.compose`.
    pub fn get(&self, key: &str) -> CliResult<String> {
        match key {
            "generation.multi_stage" => Ok(self.generation.multi_stage.to_string()),
            "generation.compose" => Ok(self.generation.compose.to_string()),
            "output.no_color" => Ok(self.output.no_color.to_string()),
            "output.format" => Ok(self.output.format.clone()),
            _ => Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            }),
        }
    }
}
