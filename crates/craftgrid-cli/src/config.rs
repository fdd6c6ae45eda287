//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `CRAFTGRID__TABLE__SIZE=2`
//! 3. Config file: `--config FILE`, or the platform config file followed by
//!    `.craftgrid.toml` in the current directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::{Context as _, bail};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-project config file name.
pub const LOCAL_CONFIG_FILE: &str = ".craftgrid.toml";

/// Environment variable prefix; nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "CRAFTGRID";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Recipe catalog settings.
    pub catalog: CatalogConfig,
    /// Crafting table settings.
    pub table: TableConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog file or directory; the built-in recipes when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { size: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; when given
    /// it must exist and no other file is read.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let toml_file = |path: &Path, required: bool| {
            File::from(path).format(FileFormat::Toml).required(required)
        };
        let mut builder = Config::builder();

        match config_file {
            Some(path) => {
                if !path.is_file() {
                    bail!("config file not found: {}", path.display());
                }
                builder = builder.add_source(toml_file(path.as_path(), true));
            }
            None => {
                builder = builder
                    .add_source(toml_file(Self::config_path().as_path(), false))
                    .add_source(toml_file(Path::new(LOCAL_CONFIG_FILE), false));
            }
        }

        let config: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")?;

        config.validate()?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Reject values no command can work with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.table.size == 0 || self.table.size > 9 {
            bail!(
                "table.size must be between 1 and 9, got {}",
                self.table.size
            );
        }
        Ok(())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.craftgrid.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "craftgrid", "craftgrid")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}
