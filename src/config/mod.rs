// SPDX-License-Identifier: MPL-2.0
//! This module handles the shell's configuration, read from `settings.toml`
//! in the config directory. The shell never writes the file.
//!
//! User choices made inside the shell (language, theme) are not stored here:
//! they live in the preference store (see [`crate::platform::storage`]) so the
//! shell keeps the same plain key/value semantics as browser local storage.
//!
//! # Configuration Sections
//!
//! - `[window]` - Initial window size
//! - `[shell]` - Start route
//!
//! # Examples
//!
//! ```no_run
//! use summon_docs::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! println!("starting on {}", config.start_route());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Window geometry settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: Option<u32>,

    #[serde(default = "default_height")]
    pub height: Option<u32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Shell behaviour settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ShellConfig {
    /// Page opened at startup when `--route` is not given (e.g. `/usage`).
    #[serde(default)]
    pub start_route: Option<String>,
}

/// Shell configuration with logical sections.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub shell: ShellConfig,
}

impl Config {
    /// Window size clamped to the supported minimum.
    #[must_use]
    pub fn window_size(&self) -> (u32, u32) {
        let width = self
            .window
            .width
            .unwrap_or(DEFAULT_WINDOW_WIDTH)
            .max(MIN_WINDOW_WIDTH);
        let height = self
            .window
            .height
            .unwrap_or(DEFAULT_WINDOW_HEIGHT)
            .max(MIN_WINDOW_HEIGHT);
        (width, height)
    }

    /// Configured start route, or `/`.
    #[must_use]
    pub fn start_route(&self) -> &str {
        self.shell
            .start_route
            .as_deref()
            .unwrap_or(DEFAULT_START_ROUTE)
    }
}

fn default_width() -> Option<u32> {
    Some(DEFAULT_WINDOW_WIDTH)
}

fn default_height() -> Option<u32> {
    Some(DEFAULT_WINDOW_HEIGHT)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with the i18n key of a warning to show the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(Error::Config(reason)) => {
            tracing::warn!(path = %path.display(), %reason, "invalid settings file, using defaults");
            (
                Config::default(),
                Some("notification.configParseError".to_string()),
            )
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "unreadable settings file, using defaults");
            (
                Config::default(),
                Some("notification.configReadError".to_string()),
            )
        }
    }
}

/// Reads and parses a settings file.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and [`Error::Config`]
/// when it is not valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}
