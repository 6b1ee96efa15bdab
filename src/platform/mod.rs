// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for the platform seams of the shell, plus their
//! system adapters.
//!
//! The shell never talks to the operating system directly. Each seam is a
//! small trait so tests can substitute an in-memory fake:
//!
//! - [`storage`]: key/value preference store (the shell's "local storage")
//! - [`locale`]: languages reported by the system
//! - [`color_scheme`]: OS-level light/dark preference
//! - [`clipboard`]: text clipboard
//! - [`browser`]: external links
//!
//! # Design Notes
//!
//! - Traits use plain strings and booleans only (no Iced types)
//! - Fallible methods return [`crate::error::Result`]
//! - No `async fn`; callers wrap work in Iced `Task`s when needed

pub mod browser;
pub mod clipboard;
pub mod color_scheme;
pub mod locale;
pub mod storage;

pub use browser::{LinkOpener, RecordingOpener, SystemBrowser};
pub use clipboard::{ClipboardWriter, SystemClipboard};
pub use color_scheme::{ColorSchemeSource, FixedColorScheme, SystemColorScheme};
pub use locale::{FixedLocales, LocaleSource, SystemLocale};
pub use storage::{FileStore, MemoryStore, PreferenceStore, LANGUAGE_KEY, THEME_KEY};
