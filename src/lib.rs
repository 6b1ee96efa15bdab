// SPDX-License-Identifier: MPL-2.0
//! `summon_docs` is the desktop documentation shell for the Summon LLM proxy,
//! built with the Iced GUI framework.
//!
//! It renders the installation, configuration and usage guides in seven
//! languages, with a persisted light/dark theme, a sidebar (or drawer on
//! narrow windows) and copyable code samples.
//!
//! # Modules
//!
//! - [`app`] - Application root, update loop and CLI flags
//! - [`i18n`] - Language registry, resolution and Fluent lookup
//! - [`navigation`] - Routes, current location and active-route matching
//! - [`content`] - Documentation pages as static data
//! - [`ui`] - Shell, page renderer, code blocks and styling
//! - [`platform`] - Traits for storage, locale, color scheme, clipboard and browser
//! - [`config`] - `settings.toml` and defaults
//! - [`error`] - Crate-wide error type

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod navigation;
pub mod platform;
pub mod ui;
