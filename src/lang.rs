//! Supported languages.
//!
//! The catalog is fixed, ordered, process-wide static data. `"auto"` is a
//! sentinel that means "detect the source language"; it is only ever valid as
//! a source selection, never as a target.

/// Code of the auto-detect sentinel.
pub const AUTO_CODE: &str = "auto";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    /// Display name shown in language pickers.
    pub name: &'static str,
}

/// The fixed catalog, in picker order.
pub const LANGUAGES: &[Language] = &[
    Language { code: "auto", name: "自动检测" },
    Language { code: "en", name: "英语" },
    Language { code: "zh", name: "中文" },
    Language { code: "ja", name: "日语" },
    Language { code: "ko", name: "韩语" },
    Language { code: "es", name: "西班牙语" },
    Language { code: "fr", name: "法语" },
];

impl Language {
    pub fn is_auto(&self) -> bool {
        self.code == AUTO_CODE
    }

    /// Canonical name used when embedding the language in a prompt. Codes
    /// outside the table fall back to the language's own display name.
    pub fn prompt_name(&self) -> &'static str {
        match self.code {
            "auto" => "任意语言",
            "en" => "英语",
            "zh" => "中文",
            "ja" => "日语",
            "ko" => "韩语",
            "es" => "西班牙语",
            "fr" => "法语",
            _ => self.name,
        }
    }
}

/// Default source selection: auto-detect.
pub fn default_source() -> Language {
    LANGUAGES[0].clone()
}

/// Default target selection: the first non-auto catalog entry.
pub fn default_target() -> Language {
    LANGUAGES[1].clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_starts_with_auto_sentinel() {
        assert!(LANGUAGES[0].is_auto());
        assert_eq!(LANGUAGES.iter().filter(|l| l.is_auto()).count(), 1);
    }

    #[test]
    fn defaults_are_auto_and_first_non_auto() {
        assert!(default_source().is_auto());
        assert_eq!(default_target().code, "en");
        assert!(!default_target().is_auto());
    }

    #[test]
    fn prompt_name_maps_auto_to_any_language() {
        assert_eq!(default_source().prompt_name(), "任意语言");
        assert_eq!(default_target().prompt_name(), "英语");
    }

    #[test]
    fn prompt_name_falls_back_to_display_name() {
        let lang = Language { code: "de", name: "德语" };
        assert_eq!(lang.prompt_name(), "德语");
    }
}
