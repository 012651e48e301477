use crate::plural::DEFAULT_ADAPTER;
use crate::text::SplitMode;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".inflect.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub intelligent_splitting: bool,

    #[serde(default = "default_adapter")]
    pub adapter: String,

    #[serde(default)]
    pub expect_path: bool,

    #[serde(default = "default_count_occurrences")]
    pub count_occurrences: bool,

    #[serde(default = "default_getter_prefix")]
    pub getter_prefix: String,
}

fn default_adapter() -> String {
    DEFAULT_ADAPTER.to_string()
}

fn default_count_occurrences() -> bool {
    true
}

fn default_getter_prefix() -> String {
    "get".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            intelligent_splitting: false,
            adapter: default_adapter(),
            expect_path: false,
            count_occurrences: default_count_occurrences(),
            getter_prefix: default_getter_prefix(),
        }
    }
}

/// One config file as written: keys it leaves out keep the lower layer's value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct Layer {
    intelligent_splitting: Option<bool>,
    adapter: Option<String>,
    expect_path: Option<bool>,
    count_occurrences: Option<bool>,
    getter_prefix: Option<String>,
}

impl Layer {
    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Values given on the command line; `None` leaves the file value alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub intelligent_splitting: Option<bool>,
    pub adapter: Option<String>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "loading global config");
                config = config.merge(Layer::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "loading local config");
            config = config.merge(Layer::from_file(&local_path)?);
        }

        Ok(config.apply(overrides))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(Layer::from_file(path)?))
    }

    fn merge(mut self, layer: Layer) -> Self {
        if let Some(intelligent) = layer.intelligent_splitting {
            self.intelligent_splitting = intelligent;
        }
        if let Some(adapter) = layer.adapter {
            self.adapter = adapter;
        }
        if let Some(expect_path) = layer.expect_path {
            self.expect_path = expect_path;
        }
        if let Some(count) = layer.count_occurrences {
            self.count_occurrences = count;
        }
        if let Some(prefix) = layer.getter_prefix {
            self.getter_prefix = prefix;
        }
        self
    }

    fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(intelligent) = overrides.intelligent_splitting {
            self.intelligent_splitting = intelligent;
        }
        if let Some(adapter) = overrides.adapter {
            self.adapter = adapter;
        }
        self
    }

    pub fn split_mode(&self) -> SplitMode {
        SplitMode::from(self.intelligent_splitting)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "inflect").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
