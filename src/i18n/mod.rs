//! i18n - Internationalization Module
//!
//! Translation lookups backed by the `locales/` resources.

use rust_i18n::t;
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    #[serde(rename = "en")]
    EnUS,
    /// Chinese (Simplified)
    #[serde(rename = "zh-CN")]
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Locale code used by the translation resources
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::ZhCN => "zh-CN",
        }
    }

    /// Map a language tag such as `zh-CN` or `en_US.UTF-8` to a supported locale
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag
            .split(|c| c == '-' || c == '_' || c == '.')
            .next()
            .unwrap_or_default();
        if lang.eq_ignore_ascii_case("zh") {
            Locale::ZhCN
        } else {
            Locale::EnUS
        }
    }

    /// Detect the locale of the current user
    pub fn detect() -> Self {
        let current = locale_config::Locale::current().to_string();
        // Categories come as "en-US,LC_TIME=de-DE"; the first tag is the language.
        let tag = current.split(',').next().unwrap_or_default();
        Self::from_tag(tag)
    }
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> String {
    t!(key, locale = locale.code()).to_string()
}

/// Translate a key from the "table" namespace
pub fn t_table(locale: Locale, key: &str) -> String {
    t(locale, &format!("table.{key}"))
}

/// Translate a key from the "demo" namespace
pub fn t_demo(locale: Locale, key: &str) -> String {
    t(locale, &format!("demo.{key}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_table_keys() {
        assert_eq!(t_table(Locale::EnUS, "total_rows"), "Total Rows:");
        assert_eq!(t_table(Locale::ZhCN, "selected"), "已选择");
    }

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("zh-CN"), Locale::ZhCN);
        assert_eq!(Locale::from_tag("zh_TW.UTF-8"), Locale::ZhCN);
        assert_eq!(Locale::from_tag("de-DE"), Locale::EnUS);
        assert_eq!(Locale::from_tag(""), Locale::EnUS);
    }
}
