// SPDX-License-Identifier: PMPL-1.0-or-later

//! Languages and the embedded translation catalog.
//!
//! All user-facing section labels are compiled in as static per-language
//! tables. Lookup is O(n) on the key list, which is fine for the handful of
//! keys we have. A key missing from a language's table is echoed back
//! unchanged (fail-open, never panics). There is no cross-language fallback;
//! each locale's catalog is authored in full.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add arms to `code()`, `from_code()`, `locale_label()` and `all()`
//! 3. Create a `const XX: &[(&str, &str)]` table below
//! 4. Add `Lang::Xx => XX` to the match in `catalog_for()`

use serde::{Deserialize, Serialize};

/// Supported interface languages, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Cz,
    Ua,
}

impl Lang {
    /// Two-letter code shown on the language pills.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Cz => "cz",
            Lang::Ua => "ua",
        }
    }

    /// Parse a language code. Returns `None` for unsupported codes.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "cz" => Some(Lang::Cz),
            "ua" => Some(Lang::Ua),
            _ => None,
        }
    }

    /// All supported languages, in the order the switcher displays them.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Cz, Lang::Ua]
    }

    /// Human-readable name of the language, in that language.
    pub fn locale_label(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Cz => "Čeština",
            Lang::Ua => "Українська",
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a label in the given language, echoing the key itself when the
/// catalog has no entry for it.
///
/// # Examples
///
/// ```
/// use folio::i18n::{translation, Lang};
/// assert_eq!(translation(Lang::Cz, "contact"), "Kontakt");
/// assert_eq!(translation(Lang::En, "doesNotExist"), "doesNotExist");
/// ```
pub fn translation<'a>(lang: Lang, key: &'a str) -> &'a str {
    lookup(catalog_for(lang), key).unwrap_or(key)
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    for &(k, v) in catalog {
        if k == key {
            return Some(v);
        }
    }
    None
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Cz => CZ,
        Lang::Ua => UA,
    }
}

// ─── English ────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    ("title", "Robotics & Computer Vision Engineer"),
    (
        "headline",
        "C++ / Python engineer delivering robotics, CV, and ML systems to production.",
    ),
    ("contact", "Contact"),
    ("skills", "Core Skills"),
    ("website", "LinkedIn"),
    ("experience", "Experience"),
    ("education", "Education"),
    ("courses", "Courses & Certifications"),
    ("summaryLabel", "Summary"),
];

// ─── Czech ──────────────────────────────────────────────────────────

const CZ: &[(&str, &str)] = &[
    ("title", "Inženýr robotiky a počítačového vidění"),
    (
        "headline",
        "Inženýr C++ / Python dodávající systémy robotiky, CV a ML do produkce.",
    ),
    ("contact", "Kontakt"),
    ("skills", "Klíčové dovednosti"),
    ("website", "LinkedIn"),
    ("experience", "Zkušenosti"),
    ("education", "Vzdělání"),
    ("courses", "Kurzy a certifikace"),
    ("summaryLabel", "Souhrn"),
];

// ─── Ukrainian ──────────────────────────────────────────────────────

const UA: &[(&str, &str)] = &[
    ("title", "Інженер робототехніки та комп'ютерного зору"),
    (
        "headline",
        "Інженер C++ / Python, впроваджую рішення з робототехніки, CV та ML у продакшн системи.",
    ),
    ("contact", "Контакти"),
    ("skills", "Ключові навички"),
    ("website", "LinkedIn"),
    ("experience", "Досвід"),
    ("education", "Освіта"),
    ("courses", "Курси та сертифікації"),
    ("summaryLabel", "Підсумок"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_keys_all_resolve() {
        for &(key, value) in EN {
            assert_eq!(translation(Lang::En, key), value);
        }
    }

    #[test]
    fn czech_contact_label() {
        assert_eq!(translation(Lang::Cz, "contact"), "Kontakt");
    }

    #[test]
    fn missing_key_echoes_key() {
        assert_eq!(translation(Lang::En, "doesNotExist"), "doesNotExist");
        assert_eq!(translation(Lang::Ua, "doesNotExist"), "doesNotExist");
    }

    #[test]
    fn languages_in_display_order() {
        let codes: Vec<&str> = Lang::all().iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["en", "cz", "ua"]);
    }

    #[test]
    fn lang_roundtrip() {
        for lang in Lang::all() {
            let parsed = Lang::from_code(lang.code()).expect("should parse");
            assert_eq!(*lang, parsed);
        }
        assert_eq!(Lang::from_code("de"), None);
    }

    #[test]
    fn all_catalogs_same_key_count_as_english() {
        assert_eq!(CZ.len(), EN.len(), "CZ catalog key count mismatch");
        assert_eq!(UA.len(), EN.len(), "UA catalog key count mismatch");
    }

    #[test]
    fn locale_labels() {
        assert_eq!(Lang::En.locale_label(), "English");
        assert_eq!(Lang::Cz.locale_label(), "Čeština");
        assert_eq!(Lang::Ua.locale_label(), "Українська");
    }
}
