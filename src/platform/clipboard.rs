// SPDX-License-Identifier: MPL-2.0
//! Text clipboard access.

use crate::error::{Error, Result};

/// Writes plain text to a clipboard.
pub trait ClipboardWriter {
    /// # Errors
    ///
    /// Returns [`Error::Clipboard`] when the platform refuses the write.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard backed by `arboard`.
///
/// The handle is created on first use and kept for the lifetime of the
/// writer: on X11 the copied text is only served while the owning handle
/// is alive.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("connected", &self.handle.is_some())
            .finish()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?,
        };
        let handle = self.handle.insert(handle);

        handle
            .set_text(text)
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}
