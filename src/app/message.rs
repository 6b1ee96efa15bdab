// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use crate::ui::shell;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Shell(shell::Message),
    Notification(notifications::NotificationMessage),
    WindowResized(Size),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Language to select after startup resolution (e.g. `ko`).
    pub lang: Option<String>,
    /// Page to open instead of the configured start route (`/usage`, `#/usage`).
    pub route: Option<String>,
    /// Optional data directory override (for the preference store).
    /// Takes precedence over `SUMMON_DOCS_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SUMMON_DOCS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
