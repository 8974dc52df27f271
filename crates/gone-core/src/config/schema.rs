//! Configuration file schema.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_git() -> PathBuf {
    PathBuf::from("git")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoneConfig {
    /// Delete the checked-out gone branch without prompting.
    #[serde(default)]
    pub respond_yes: bool,

    /// git executable to invoke.
    #[serde(default = "default_git")]
    pub git: PathBuf,
}

impl Default for GoneConfig {
    fn default() -> Self {
        Self {
            respond_yes: false,
            git: default_git(),
        }
    }
}

impl GoneConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.git.as_os_str().is_empty() {
            anyhow::bail!("`git` must not be empty");
        }
        Ok(())
    }
}
