// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme state and the color schemes behind it.
//!
//! The decision is made once at startup (stored preference, then the OS
//! preference, then light) and changes only through [`ThemeManager::toggle`].
//! Every decision is written to the preference store under `theme`.

use crate::error::Result;
use crate::platform::{ColorSchemeSource, PreferenceStore, THEME_KEY};
use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};

const DARK: &str = "dark";
const LIGHT: &str = "light";

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub code_background: Color,
    pub border: Color,

    // Text colors
    pub text_primary: Color,
    pub text_muted: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_text: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    pub scrim: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            code_background: palette::GRAY_100,
            border: palette::GRAY_200,

            text_primary: palette::GRAY_950,
            text_muted: palette::GRAY_500,

            brand_primary: palette::PRIMARY_600,
            brand_text: palette::WHITE,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            scrim: Color {
                a: opacity::SCRIM,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_950,
            surface_secondary: palette::GRAY_900,
            code_background: palette::GRAY_800,
            border: palette::GRAY_700,

            text_primary: palette::GRAY_100,
            text_muted: palette::GRAY_300,

            brand_primary: palette::PRIMARY_500,
            brand_text: palette::WHITE,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            scrim: Color {
                a: opacity::SCRIM,
                ..palette::BLACK
            },
        }
    }

    /// Scheme matching an Iced theme (dark palettes get the dark scheme).
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Owner of the light/dark decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeManager {
    dark: bool,
}

impl ThemeManager {
    /// Decides the startup theme and records it in `store`.
    ///
    /// Returns the manager and an optional warning key if the write failed.
    pub fn init(
        store: &mut dyn PreferenceStore,
        os: &dyn ColorSchemeSource,
    ) -> (Self, Option<String>) {
        let stored = match store.get(THEME_KEY).as_deref() {
            Some(DARK) => Some(true),
            Some(LIGHT) => Some(false),
            _ => None,
        };
        let dark = stored.or_else(|| os.prefers_dark()).unwrap_or(false);
        tracing::info!(dark, from_store = stored.is_some(), "resolved theme");

        let manager = Self { dark };
        let warning = manager.persist(store).err().map(|err| {
            tracing::warn!(error = %err, "failed to persist theme");
            err.i18n_key().to_string()
        });
        (manager, warning)
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Flips the theme and persists it.
    ///
    /// # Errors
    ///
    /// Returns the store error; the flip has already taken effect.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore) -> Result<()> {
        self.dark = !self.dark;
        tracing::debug!(dark = self.dark, "theme toggled");
        self.persist(store)
    }

    /// Iced theme for the whole window.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    #[must_use]
    pub fn colors(&self) -> ColorScheme {
        if self.dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }

    fn persist(&self, store: &mut dyn PreferenceStore) -> Result<()> {
        store.set(THEME_KEY, if self.dark { DARK } else { LIGHT })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::platform::{FixedColorScheme, MemoryStore};

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::State("read-only".into()))
        }
    }

    #[test]
    fn os_dark_preference_is_used_and_persisted() {
        let mut store = MemoryStore::new();
        let (manager, warning) = ThemeManager::init(&mut store, &FixedColorScheme(Some(true)));

        assert!(warning.is_none());
        assert!(manager.is_dark());
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn stored_value_wins_over_os() {
        let mut store = MemoryStore::with_entries([(THEME_KEY, "light")]);
        let (manager, _) = ThemeManager::init(&mut store, &FixedColorScheme(Some(true)));
        assert!(!manager.is_dark());
    }

    #[test]
    fn no_preference_anywhere_means_light() {
        let mut store = MemoryStore::new();
        let (manager, _) = ThemeManager::init(&mut store, &FixedColorScheme(None));
        assert!(!manager.is_dark());
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn unrecognized_stored_value_is_absent() {
        let mut store = MemoryStore::with_entries([(THEME_KEY, "sepia")]);
        let (manager, _) = ThemeManager::init(&mut store, &FixedColorScheme(Some(true)));
        assert!(manager.is_dark());
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn double_toggle_restores_state_and_store() {
        let mut store = MemoryStore::new();
        let (mut manager, _) = ThemeManager::init(&mut store, &FixedColorScheme(Some(false)));

        manager.toggle(&mut store).expect("toggle");
        assert!(manager.is_dark());
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

        manager.toggle(&mut store).expect("toggle");
        assert!(!manager.is_dark());
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn failed_persist_keeps_toggled_state() {
        let (mut manager, warning) = ThemeManager::init(&mut FailingStore, &FixedColorScheme(None));
        assert_eq!(warning.as_deref(), Some("notification.stateWriteError"));

        assert!(manager.toggle(&mut FailingStore).is_err());
        assert!(manager.is_dark());
    }

    #[test]
    fn iced_theme_follows_state() {
        let mut store = MemoryStore::new();
        let (mut manager, _) = ThemeManager::init(&mut store, &FixedColorScheme(None));
        assert_eq!(manager.theme(), Theme::Light);

        manager.toggle(&mut store).expect("toggle");
        assert_eq!(manager.theme(), Theme::Dark);
    }

    #[test]
    fn light_scheme_has_light_surface() {
        assert!(ColorScheme::light().surface_primary.r > 0.9);
        assert!(ColorScheme::dark().surface_primary.r < 0.2);
    }
}
