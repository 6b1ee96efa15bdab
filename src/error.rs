// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Nothing in the documentation shell is fatal: callers either propagate these
//! errors to a loader that degrades to defaults, or turn them into a warning
//! notification through [`Error::i18n_key`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("State Error: {0}")]
    State(String),

    #[error("Clipboard Error: {0}")]
    Clipboard(String),

    #[error("Browser Error: {0}")]
    Browser(String),

    #[error("Unsupported language code: {0}")]
    UnsupportedLocale(String),
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) | Error::State(_) => "notification.stateWriteError",
            Error::Config(_) => "notification.configParseError",
            Error::Clipboard(_) => "notification.copyFailed",
            Error::Browser(_) => "notification.openLinkFailed",
            Error::UnsupportedLocale(_) => "notification.unsupportedLanguage",
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl<E: std::fmt::Debug> From<ciborium::de::Error<E>> for Error {
    fn from(err: ciborium::de::Error<E>) -> Self {
        Error::State(format!("{err:?}"))
    }
}

impl<E: std::fmt::Debug> From<ciborium::ser::Error<E>> for Error {
    fn from(err: ciborium::ser::Error<E>) -> Self {
        Error::State(format!("{err:?}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
