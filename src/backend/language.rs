//! Outbound language code normalization.
//!
//! Providers disagree on how they want language codes spelled. Each backend
//! owns a [`LanguageRules`] value describing its fixups, so the regional
//! English collapse lives in one place instead of once per provider.

use std::borrow::Cow;

/// Regional English variants accepted as targets but rejected as sources.
const REGIONAL_ENGLISH: &[&str] = &["EN-GB", "EN-US"];

/// Per-provider normalization strategy for language codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageRules {
    /// Collapse regional English in the target position as well.
    pub collapse_target: bool,
    /// Send every code in lowercase.
    pub lowercase: bool,
}

impl LanguageRules {
    /// DeepL: only the source position is collapsed, case is kept.
    pub const DEEPL: Self = Self {
        collapse_target: false,
        lowercase: false,
    };

    /// Google: both positions are collapsed and lowercased.
    pub const GOOGLE: Self = Self {
        collapse_target: true,
        lowercase: true,
    };

    /// Normalizes a code sent as the source language.
    pub fn source<'a>(&self, code: &'a str) -> Cow<'a, str> {
        self.apply(collapse_regional_english(code))
    }

    /// Normalizes a code sent as the target language.
    pub fn target<'a>(&self, code: &'a str) -> Cow<'a, str> {
        let code = if self.collapse_target {
            collapse_regional_english(code)
        } else {
            Cow::Borrowed(code)
        };
        self.apply(code)
    }

    fn apply<'a>(&self, code: Cow<'a, str>) -> Cow<'a, str> {
        if self.lowercase && code.chars().any(|c| c.is_ascii_uppercase()) {
            Cow::Owned(code.to_ascii_lowercase())
        } else {
            code
        }
    }
}

/// Maps "EN-GB" and "EN-US" (any case) to plain "EN".
pub fn collapse_regional_english(code: &str) -> Cow<'_, str> {
    if REGIONAL_ENGLISH
        .iter()
        .any(|regional| regional.eq_ignore_ascii_case(code))
    {
        Cow::Borrowed("EN")
    } else {
        Cow::Borrowed(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_regional_english() {
        assert_eq!(collapse_regional_english("EN-GB"), "EN");
        assert_eq!(collapse_regional_english("EN-US"), "EN");
        assert_eq!(collapse_regional_english("en-us"), "EN");
        assert_eq!(collapse_regional_english("EN"), "EN");
        assert_eq!(collapse_regional_english("PT-BR"), "PT-BR");
        assert_eq!(collapse_regional_english("FR"), "FR");
    }

    #[test]
    fn test_deepl_collapses_source_only() {
        let rules = LanguageRules::DEEPL;
        assert_eq!(rules.source("EN-GB"), "EN");
        assert_eq!(rules.source("EN-US"), "EN");
        assert_eq!(rules.target("EN-US"), "EN-US");
        assert_eq!(rules.target("EN-GB"), "EN-GB");
        assert_eq!(rules.target("FR"), "FR");
    }

    #[test]
    fn test_google_collapses_and_lowercases_both() {
        let rules = LanguageRules::GOOGLE;
        assert_eq!(rules.source("EN-GB"), "en");
        assert_eq!(rules.source("EN-US"), "en");
        assert_eq!(rules.target("EN-US"), "en");
        assert_eq!(rules.target("FR"), "fr");
        assert_eq!(rules.source("zh-TW"), "zh-tw");
    }

    #[test]
    fn test_lowercase_borrows_when_unchanged() {
        let rules = LanguageRules::GOOGLE;
        assert!(matches!(rules.target("fr"), Cow::Borrowed("fr")));
    }
}
