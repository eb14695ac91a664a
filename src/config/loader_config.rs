//! Which files make up a landofile
//!
//! Precedence, lowest first: built-in defaults, the user's
//! `~/.lando/config.yml`, `LANDO_*` environment variables. CLI flags are
//! applied on top by the caller.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LandoError, Result};

pub const ENV_LANDOFILE: &str = "LANDO_LANDOFILE";
pub const ENV_PRE_LANDOFILES: &str = "LANDO_PRE_LANDOFILES";
pub const ENV_POST_LANDOFILES: &str = "LANDO_POST_LANDOFILES";

const LANDOFILE_EXTENSION: &str = "yml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderConfig {
    /// Base name of the main landofile, without extension.
    #[serde(default = "default_landofile")]
    pub landofile: String,
    /// Layers merged underneath the main file, in order.
    #[serde(default = "default_pre_landofiles")]
    pub pre_landofiles: Vec<String>,
    /// Layers merged over the main file, in order.
    #[serde(default = "default_post_landofiles")]
    pub post_landofiles: Vec<String>,
}

fn default_landofile() -> String {
    ".lando".to_string()
}

fn default_pre_landofiles() -> Vec<String> {
    [".base", ".dist", ".recipe", ".upstream"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_post_landofiles() -> Vec<String> {
    [".local", ".user"].iter().map(|s| s.to_string()).collect()
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            landofile: default_landofile(),
            pre_landofiles: default_pre_landofiles(),
            post_landofiles: default_post_landofiles(),
        }
    }
}

impl LoaderConfig {
    /// Defaults, then the user config file if present, then the environment.
    pub fn load() -> Result<Self> {
        let config = match Self::user_config_path() {
            Some(path) if path.is_file() => {
                crate::logging::log_config_source(&path.display().to_string());
                Self::from_file(&path)?
            }
            _ => Self::default(),
        };
        Ok(config.with_env_overrides())
    }

    /// `~/.lando/config.yml`
    pub fn user_config_path() -> Option<PathBuf> {
        directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".lando").join("config.yml"))
    }

    /// Read loader settings from a Lando config file. Unrelated keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LandoError::io_error("read lando config", Some(path.to_path_buf()), e)
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml_ng::from_str(&content).map_err(|e| {
            LandoError::parse(
                Some(path.to_path_buf()),
                e.location().map(|loc| loc.line()),
                e.to_string(),
            )
        })
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable source.
    ///
    /// List variables are comma separated; an empty value clears the list.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(landofile) = lookup(ENV_LANDOFILE) {
            let landofile = landofile.trim();
            if !landofile.is_empty() {
                self.landofile = landofile.to_string();
            }
        }

        if let Some(pre) = lookup(ENV_PRE_LANDOFILES) {
            self.pre_landofiles = split_list(&pre);
        }

        if let Some(post) = lookup(ENV_POST_LANDOFILES) {
            self.post_landofiles = split_list(&post);
        }

        self
    }

    /// File name of the main landofile, e.g. `.lando.yml`.
    pub fn main_file_name(&self) -> String {
        format!("{}.{}", self.landofile, LANDOFILE_EXTENSION)
    }

    /// File name of a layer, e.g. `.lando.local.yml` for `.local`.
    pub fn layer_file_name(&self, layer: &str) -> String {
        format!("{}{}.{}", self.landofile, layer, LANDOFILE_EXTENSION)
    }

    /// All candidate file names in merge order.
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .pre_landofiles
            .iter()
            .map(|layer| self.layer_file_name(layer))
            .collect();
        names.push(self.main_file_name());
        names.extend(
            self.post_landofiles
                .iter()
                .map(|layer| self.layer_file_name(layer)),
        );
        names
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
