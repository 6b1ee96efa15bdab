// SPDX-License-Identifier: MPL-2.0
//! System language detection.

/// Source of the languages the user prefers, most preferred first.
///
/// Entries are BCP 47-ish tags as reported by the platform (`ko-KR`, `en`,
/// `zh-Hans-CN`). Matching against registered languages happens in
/// [`crate::i18n::languages::match_locale`].
pub trait LocaleSource {
    fn preferred_locales(&self) -> Vec<String>;
}

/// Reads the operating system's preferred languages.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleSource for SystemLocale {
    fn preferred_locales(&self) -> Vec<String> {
        let locales: Vec<String> = sys_locale::get_locales().collect();
        tracing::debug!(?locales, "system locales");
        locales
    }
}

/// Fixed list of locales, for tests and `--lang`-like overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLocales(pub Vec<String>);

impl FixedLocales {
    pub fn new<'a>(locales: impl IntoIterator<Item = &'a str>) -> Self {
        Self(locales.into_iter().map(str::to_string).collect())
    }
}

impl LocaleSource for FixedLocales {
    fn preferred_locales(&self) -> Vec<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_locales_preserve_order() {
        let source = FixedLocales::new(["ko-KR", "en-US"]);
        assert_eq!(source.preferred_locales(), vec!["ko-KR", "en-US"]);
    }
}
