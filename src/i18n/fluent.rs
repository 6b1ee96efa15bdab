// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed locale resolver and translation lookup.

use super::languages::{self, LanguageEntry, LANGUAGES};
use crate::error::{Error, Result};
use crate::platform::{LocaleSource, PreferenceStore, LANGUAGE_KEY};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

type Bundle = FluentBundle<FluentResource>;

/// Active language plus every translation resource, loaded eagerly.
pub struct I18n {
    bundles: HashMap<&'static str, Bundle>,
    active: &'static str,
}

impl Default for I18n {
    /// All resources with the fallback language active. Touches no store.
    fn default() -> Self {
        Self {
            bundles: load_bundles(),
            active: languages::fallback().code,
        }
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("active", &self.active)
            .field("bundles", &self.bundles.len())
            .finish()
    }
}

impl I18n {
    /// Loads all resources and resolves the startup language.
    ///
    /// The resolved code is written back to `store`. Returns the resolver and
    /// an optional warning key if that write failed.
    pub fn new(
        store: &mut dyn PreferenceStore,
        locales: &dyn LocaleSource,
    ) -> (Self, Option<String>) {
        let active = resolve(&*store, locales);
        tracing::info!(language = active, "resolved language");

        let warning = store.set(LANGUAGE_KEY, active).err().map(|err| {
            tracing::warn!(error = %err, "failed to persist resolved language");
            err.i18n_key().to_string()
        });

        let i18n = Self {
            bundles: load_bundles(),
            active,
        };
        (i18n, warning)
    }

    /// Code of the active language.
    #[must_use]
    pub fn active(&self) -> &'static str {
        self.active
    }

    #[must_use]
    pub fn active_language(&self) -> &'static LanguageEntry {
        languages::find(self.active).unwrap_or_else(languages::fallback)
    }

    /// Registry shown in the language switcher.
    #[must_use]
    pub fn available_languages(&self) -> &'static [LanguageEntry] {
        &LANGUAGES
    }

    /// Switches the active language and persists the choice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedLocale`] for an unregistered code, leaving
    /// the state untouched. A persistence error is returned after the switch
    /// has taken effect in memory.
    pub fn set_active(&mut self, code: &str, store: &mut dyn PreferenceStore) -> Result<()> {
        let Some(entry) = languages::find(code) else {
            tracing::warn!(code, "ignoring unsupported language");
            return Err(Error::UnsupportedLocale(code.to_string()));
        };

        if entry.code != self.active {
            tracing::info!(from = self.active, to = entry.code, "language changed");
        }
        self.active = entry.code;
        store.set(LANGUAGE_KEY, entry.code)
    }

    /// Translates a dotted key in the active language.
    ///
    /// Falls back to the default language, then to the key itself.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.lookup(key, None)
    }

    /// Translates a key with named placeables (`{ $name }`).
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.to_string());
        }
        self.lookup(key, Some(&fluent_args))
    }

    /// True if `code`'s own resource defines `key` (no fallback).
    #[must_use]
    pub fn has_key(&self, code: &str, key: &str) -> bool {
        self.bundles
            .get(code)
            .is_some_and(|bundle| bundle.has_message(&message_id(key)))
    }

    fn lookup(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        let id = message_id(key);
        let fallback = languages::fallback().code;

        [self.active, fallback]
            .into_iter()
            .filter_map(|code| self.bundles.get(code))
            .find_map(|bundle| format(bundle, &id, args))
            .unwrap_or_else(|| {
                tracing::debug!(key, language = self.active, "missing translation");
                key.to_string()
            })
    }
}

/// Startup resolution: stored code, then system locales, then fallback.
#[must_use]
pub fn resolve(store: &dyn PreferenceStore, locales: &dyn LocaleSource) -> &'static str {
    if let Some(entry) = store
        .get(LANGUAGE_KEY)
        .and_then(|stored| languages::find(&stored))
    {
        return entry.code;
    }

    locales
        .preferred_locales()
        .iter()
        .find_map(|tag| languages::match_locale(tag))
        .unwrap_or(languages::fallback().code)
}

/// Fluent identifiers cannot contain dots.
fn message_id(key: &str) -> String {
    key.replace('.', "-")
}

fn format(bundle: &Bundle, id: &str, args: Option<&FluentArgs<'_>>) -> Option<String> {
    let pattern = bundle.get_message(id)?.value()?;
    let mut errors = vec![];
    let value = bundle.format_pattern(pattern, args, &mut errors);
    if !errors.is_empty() {
        tracing::debug!(id, ?errors, "translation formatted with errors");
    }
    (!value.is_empty()).then(|| value.into_owned())
}

fn load_bundles() -> HashMap<&'static str, Bundle> {
    let mut bundles = HashMap::new();

    for entry in &LANGUAGES {
        let file = format!("{}.ftl", entry.code);
        let Some(content) = Asset::get(&file) else {
            tracing::warn!(file, "translation resource missing");
            continue;
        };
        let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();

        let resource = FluentResource::try_new(source).unwrap_or_else(|(partial, errors)| {
            tracing::warn!(file, ?errors, "translation resource has syntax errors");
            partial
        });

        let langid: LanguageIdentifier = match entry.code.parse() {
            Ok(langid) => langid,
            Err(err) => {
                tracing::warn!(code = entry.code, error = %err, "invalid language identifier");
                continue;
            }
        };

        let mut bundle = FluentBundle::new(vec![langid]);
        bundle.set_use_isolating(false);
        if let Err(errors) = bundle.add_resource(resource) {
            tracing::warn!(file, ?errors, "duplicate messages in translation resource");
        }
        bundles.insert(entry.code, bundle);
    }

    bundles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FixedLocales, MemoryStore};

    fn resolver(store: &mut MemoryStore, locales: &[&str]) -> I18n {
        let (i18n, warning) = I18n::new(store, &FixedLocales::new(locales.iter().copied()));
        assert!(warning.is_none());
        i18n
    }

    #[test]
    fn every_language_has_a_bundle() {
        let i18n = I18n::default();
        for entry in &LANGUAGES {
            assert!(
                i18n.bundles.contains_key(entry.code),
                "no bundle for {}",
                entry.code
            );
        }
    }

    #[test]
    fn system_locale_with_region_resolves_to_language() {
        let mut store = MemoryStore::new();
        let i18n = resolver(&mut store, &["ko-KR"]);
        assert_eq!(i18n.active(), "ko");
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("ko"));
    }

    #[test]
    fn unregistered_system_locale_falls_back_to_english() {
        let mut store = MemoryStore::new();
        let i18n = resolver(&mut store, &["fr-FR"]);
        assert_eq!(i18n.active(), "en");
    }

    #[test]
    fn later_system_locales_are_consulted_in_order() {
        let mut store = MemoryStore::new();
        let i18n = resolver(&mut store, &["fr-FR", "de-AT", "ja"]);
        assert_eq!(i18n.active(), "de");
    }

    #[test]
    fn stored_language_wins_over_system() {
        let mut store = MemoryStore::with_entries([(LANGUAGE_KEY, "zh")]);
        let i18n = resolver(&mut store, &["ko-KR"]);
        assert_eq!(i18n.active(), "zh");
    }

    #[test]
    fn unrecognized_stored_value_is_ignored() {
        let mut store = MemoryStore::with_entries([(LANGUAGE_KEY, "klingon")]);
        let i18n = resolver(&mut store, &["ja-JP"]);
        assert_eq!(i18n.active(), "ja");
    }

    #[test]
    fn chosen_language_survives_restart() {
        for entry in &LANGUAGES {
            let mut store = MemoryStore::new();
            let mut i18n = resolver(&mut store, &["en-US"]);
            i18n.set_active(entry.code, &mut store).expect("switch language");

            let restarted = resolver(&mut store, &["fr-FR"]);
            assert_eq!(restarted.active(), entry.code);
        }
    }

    #[test]
    fn set_active_rejects_unknown_code() {
        let mut store = MemoryStore::new();
        let mut i18n = resolver(&mut store, &["en"]);

        let result = i18n.set_active("fr", &mut store);
        assert!(matches!(result, Err(Error::UnsupportedLocale(code)) if code == "fr"));
        assert_eq!(i18n.active(), "en");
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn set_active_persists_and_changes_translations() {
        let mut store = MemoryStore::new();
        let mut i18n = resolver(&mut store, &["en"]);
        let english = i18n.tr("nav.home");

        i18n.set_active("de", &mut store).expect("switch language");
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("de"));
        assert_ne!(i18n.tr("nav.home"), english);
    }

    #[test]
    fn missing_key_returns_raw_key() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no.such.key"), "no.such.key");
    }

    fn bundle(code: &str, source: &str) -> Bundle {
        let Ok(resource) = FluentResource::try_new(source.to_string()) else {
            panic!("invalid ftl for {code}");
        };
        let mut bundle = FluentBundle::new(vec![code.parse().expect("valid langid")]);
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).expect("add resource");
        bundle
    }

    #[test]
    fn key_missing_in_active_language_uses_english() {
        let i18n = I18n {
            bundles: HashMap::from([
                ("en", bundle("en", "greeting = Hello\nfarewell = Bye\n")),
                ("ko", bundle("ko", "greeting = 안녕하세요\n")),
            ]),
            active: "ko",
        };

        assert_eq!(i18n.tr("greeting"), "안녕하세요");
        assert_eq!(i18n.tr("farewell"), "Bye");
        assert_eq!(i18n.tr("unknown"), "unknown");
    }

    #[test]
    fn empty_message_falls_through_to_english() {
        let i18n = I18n {
            bundles: HashMap::from([
                ("en", bundle("en", "shell-menu = Menu\n")),
                ("ja", bundle("ja", "shell-menu = { \"\" }\n")),
            ]),
            active: "ja",
        };

        assert_eq!(i18n.tr("shell.menu"), "Menu");
    }

    #[test]
    fn args_are_interpolated_without_isolation_marks() {
        let i18n = I18n::default();
        let title = i18n.tr_with_args("app.windowTitle", &[("page", "Usage")]);
        assert_eq!(title, "Usage - Summon");
    }
}
