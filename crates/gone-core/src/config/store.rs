//! Config store for loading the configuration file.

use std::path::{Path, PathBuf};

use super::{GoneConfig, parser, paths::default_config_path};

#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_path: Option<PathBuf>,
    required: bool,
}

impl ConfigStore {
    /// Store at the platform default location, which may be absent.
    pub fn from_default_location() -> Self {
        Self::at(default_config_path(), false)
    }

    /// Store at an explicitly chosen file, which must exist.
    pub fn from_path(config_path: PathBuf) -> Self {
        Self::at(Some(config_path), true)
    }

    fn at(config_path: Option<PathBuf>, required: bool) -> Self {
        Self {
            config_path,
            required,
        }
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load the configuration.
    ///
    /// A missing default file yields defaults; a missing explicit file is an
    /// error.
    pub fn load(&self) -> anyhow::Result<GoneConfig> {
        match &self.config_path {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading config");
                parser::parse_config(path)
            }
            Some(path) if self.required => {
                anyhow::bail!("Config file not found: {}", path.display())
            }
            _ => Ok(GoneConfig::default()),
        }
    }
}
