// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the documentation shell.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window size, drawer breakpoint
//! - **Shell**: Start route, fallback language, repository link
//! - **Clipboard**: Copy acknowledgment window

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1100;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 760;

/// Minimum window width (narrow enough to exercise the mobile drawer).
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Width at or above which the permanent sidebar replaces the drawer.
pub const DESKTOP_BREAKPOINT: f32 = 1024.0;

// ==========================================================================
// Shell Defaults
// ==========================================================================

/// Route shown when neither CLI nor config names one.
pub const DEFAULT_START_ROUTE: &str = "/";

/// Language used when nothing else resolves, and for missing keys.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Source repository of the documented proxy.
pub const REPOSITORY_URL: &str = "https://github.com/TheMagicTower/summon";

/// Version of the documented proxy shown in the sidebar badge.
pub const DOCUMENTED_VERSION: &str = "v0.3.0";

// ==========================================================================
// Clipboard Defaults
// ==========================================================================

/// How long a code block shows its "copied" state, in milliseconds.
pub const COPY_ACK_WINDOW_MS: u64 = 2000;

const _: () = {
    assert!(MIN_WINDOW_WIDTH <= DEFAULT_WINDOW_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= DEFAULT_WINDOW_HEIGHT);
    assert!(DEFAULT_WINDOW_WIDTH as f32 >= DESKTOP_BREAKPOINT);
};
