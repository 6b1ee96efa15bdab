// SPDX-License-Identifier: MPL-2.0
//! OS color scheme detection.

/// Reports whether the operating system prefers a dark color scheme.
///
/// `None` means the platform expressed no preference (or detection failed);
/// callers treat that the same as "light".
pub trait ColorSchemeSource {
    fn prefers_dark(&self) -> Option<bool>;
}

/// Queries the platform through `dark-light`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemColorScheme;

impl ColorSchemeSource for SystemColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => Some(true),
            Ok(dark_light::Mode::Light) => Some(false),
            Ok(_) => None,
            Err(err) => {
                tracing::debug!(error = %err, "color scheme detection failed");
                None
            }
        }
    }
}

/// Constant answer, for tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedColorScheme(pub Option<bool>);

impl ColorSchemeSource for FixedColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}
