// SPDX-License-Identifier: MPL-2.0
//! Where the shell keeps its files.
//!
//! Two directories are used: the data directory holds the preference store,
//! the config directory holds `settings.toml`. Each is resolved in this order:
//!
//! 1. an explicit path passed by the caller (tests)
//! 2. `--data-dir` / `--config-dir`, recorded by [`init_cli_overrides`]
//! 3. `SUMMON_DOCS_DATA_DIR` / `SUMMON_DOCS_CONFIG_DIR`
//! 4. the platform directory from `dirs`, plus `SummonDocs`

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "SummonDocs";

pub const ENV_DATA_DIR: &str = "SUMMON_DOCS_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "SUMMON_DOCS_CONFIG_DIR";

#[derive(Debug, Default)]
struct CliOverrides {
    data: Option<PathBuf>,
    config: Option<PathBuf>,
}

static CLI_OVERRIDES: OnceLock<CliOverrides> = OnceLock::new();

/// Directory kinds the shell writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppDir {
    Data,
    Config,
}

impl AppDir {
    fn env_var(self) -> &'static str {
        match self {
            AppDir::Data => ENV_DATA_DIR,
            AppDir::Config => ENV_CONFIG_DIR,
        }
    }

    fn cli_override(self) -> Option<PathBuf> {
        let overrides = CLI_OVERRIDES.get()?;
        match self {
            AppDir::Data => overrides.data.clone(),
            AppDir::Config => overrides.config.clone(),
        }
    }

    fn platform_base(self) -> Option<PathBuf> {
        match self {
            AppDir::Data => dirs::data_dir(),
            AppDir::Config => dirs::config_dir(),
        }
    }

    /// Resolves the directory, preferring `explicit` when given.
    ///
    /// `None` only when the platform reports no base directory.
    #[must_use]
    pub fn resolve(self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        if let Some(path) = explicit.or_else(|| self.cli_override()) {
            return Some(path);
        }

        match std::env::var(self.env_var()) {
            Ok(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => self.platform_base().map(|base| base.join(APP_NAME)),
        }
    }
}

/// Records the `--data-dir` / `--config-dir` arguments.
///
/// Only the first call counts.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let overrides = CliOverrides {
        data: data_dir.map(PathBuf::from),
        config: config_dir.map(PathBuf::from),
    };
    if CLI_OVERRIDES.set(overrides).is_err() {
        tracing::warn!("directory overrides already recorded; ignoring");
    }
}

/// Directory of the preference store.
pub fn get_app_data_dir_with_override(explicit: Option<PathBuf>) -> Option<PathBuf> {
    AppDir::Data.resolve(explicit)
}

/// Directory of `settings.toml`.
pub fn get_app_config_dir_with_override(explicit: Option<PathBuf>) -> Option<PathBuf> {
    AppDir::Config.resolve(explicit)
}
