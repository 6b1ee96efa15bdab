// SPDX-License-Identifier: MPL-2.0
//! Registry of the languages the documentation is translated into.

use crate::config::FALLBACK_LANGUAGE;
use std::fmt;
use unic_langid::LanguageIdentifier;

/// A selectable language, labelled in its own script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageEntry {
    pub code: &'static str,
    pub label: &'static str,
}

impl fmt::Display for LanguageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Registered languages, in switcher order.
pub const LANGUAGES: [LanguageEntry; 7] = [
    LanguageEntry {
        code: "en",
        label: "English",
    },
    LanguageEntry {
        code: "ko",
        label: "한국어",
    },
    LanguageEntry {
        code: "ja",
        label: "日本語",
    },
    LanguageEntry {
        code: "zh",
        label: "中文",
    },
    LanguageEntry {
        code: "vi",
        label: "Tiếng Việt",
    },
    LanguageEntry {
        code: "de",
        label: "Deutsch",
    },
    LanguageEntry {
        code: "es",
        label: "Español",
    },
];

/// Looks up a registered language by exact code.
#[must_use]
pub fn find(code: &str) -> Option<&'static LanguageEntry> {
    LANGUAGES.iter().find(|entry| entry.code == code)
}

/// Entry of the fallback language.
#[must_use]
pub fn fallback() -> &'static LanguageEntry {
    find(FALLBACK_LANGUAGE).unwrap_or(&LANGUAGES[0])
}

/// Matches a system locale tag against the registry.
///
/// An exact code match wins; otherwise the primary language subtag is used,
/// so `ko-KR` and `zh-Hans-CN` resolve to `ko` and `zh`. POSIX-style tags
/// (`de_DE.UTF-8`) are accepted too.
#[must_use]
pub fn match_locale(tag: &str) -> Option<&'static str> {
    let tag = tag.split(['.', '@']).next().unwrap_or(tag).replace('_', "-");

    if let Some(entry) = LANGUAGES
        .iter()
        .find(|entry| entry.code.eq_ignore_ascii_case(&tag))
    {
        return Some(entry.code);
    }

    let primary = match tag.parse::<LanguageIdentifier>() {
        Ok(langid) => langid.language.as_str().to_string(),
        Err(_) => tag.split('-').next().unwrap_or_default().to_ascii_lowercase(),
    };

    find(&primary).map(|entry| entry.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_seven_languages_with_english_first() {
        assert_eq!(LANGUAGES.len(), 7);
        assert_eq!(LANGUAGES[0].code, "en");
        assert_eq!(fallback().code, "en");
    }

    #[test]
    fn labels_are_native_names() {
        assert_eq!(find("ko").map(|e| e.label), Some("한국어"));
        assert_eq!(find("vi").map(|e| e.label), Some("Tiếng Việt"));
        assert_eq!(find("es").map(|e| e.label), Some("Español"));
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(LANGUAGES[2].to_string(), "日本語");
    }

    #[test]
    fn exact_code_matches() {
        assert_eq!(match_locale("de"), Some("de"));
        assert_eq!(match_locale("JA"), Some("ja"));
    }

    #[test]
    fn region_and_script_fall_back_to_primary_subtag() {
        assert_eq!(match_locale("ko-KR"), Some("ko"));
        assert_eq!(match_locale("zh-Hans-CN"), Some("zh"));
        assert_eq!(match_locale("es-419"), Some("es"));
    }

    #[test]
    fn posix_tags_are_normalized() {
        assert_eq!(match_locale("vi_VN.UTF-8"), Some("vi"));
        assert_eq!(match_locale("de_DE@euro"), Some("de"));
    }

    #[test]
    fn unregistered_languages_do_not_match() {
        assert_eq!(match_locale("fr-FR"), None);
        assert_eq!(match_locale("C"), None);
        assert_eq!(match_locale(""), None);
        assert!(find("fr").is_none());
    }
}
