// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the documentation shell.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Startup resolution from the preference store, then system locales, then English
//! - Eager loading of the embedded `.ftl` translation files
//! - Runtime language switching, persisted immediately
//! - Fallback to English, then to the raw key, for missing translations
//!
//! Keys are written with dots (`configuration.fields.routes`) and map onto
//! Fluent identifiers with dashes (`configuration-fields-routes`).

pub mod fluent;
pub mod languages;

pub use fluent::I18n;
pub use languages::{LanguageEntry, LANGUAGES};
