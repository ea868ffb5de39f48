//! Deployment settings for the exhibit-allocation crates, merged from a
//! TOML file and environment variables. Loading settings is the binary's
//! concern; the library crates never read the environment themselves.

use core::fmt::{Debug, Display};
use std::path::PathBuf;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;

/// Collaborator-roster limits enforced by the exhibit builder.
#[derive(Deserialize, Clone, Debug)]
pub struct Limits {
    #[serde(default = "default_max_collaborators")]
    pub max_collaborators: u32,
}

const fn default_max_collaborators() -> u32 {
    5
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_collaborators: default_max_collaborators(),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    /// Path to a catalog JSON file. Absent means the built-in catalog.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    #[serde(default)]
    pub limits: Limits,
}

#[derive(thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Figment(#[from] figment::Error),
}

impl Debug for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Settings {
    /// Merge `virtual-exhibit-allocation.toml` from the working directory
    /// with `VXA_`-prefixed environment variables. Nested keys split on
    /// `__`, so `VXA_LIMITS__MAX_COLLABORATORS=3` overrides
    /// `limits.max_collaborators`.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Figment::new()
            .merge(Toml::file("virtual-exhibit-allocation.toml"))
            .merge(Env::prefixed("VXA_").split("__"))
            .extract()?)
    }
}
