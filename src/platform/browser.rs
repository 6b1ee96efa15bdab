// SPDX-License-Identifier: MPL-2.0
//! Opening external links.
//!
//! Links open in the user's default browser as a separate process. The shell
//! keeps no handle to it and passes nothing but the URL.

use crate::error::{Error, Result};

/// Opens a URL outside the shell.
pub trait LinkOpener {
    /// # Errors
    ///
    /// Returns [`Error::Browser`] when no browser could be launched.
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Default browser, launched through `webbrowser`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&mut self, url: &str) -> Result<()> {
        webbrowser::open(url).map_err(|e| Error::Browser(e.to_string()))
    }
}

/// Records opened links instead of launching anything.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingOpener {
    pub opened: Vec<String>,
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        self.opened.push(url.to_string());
        Ok(())
    }
}
