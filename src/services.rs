// SPDX-License-Identifier: PMPL-1.0-or-later

//! Startup composition: service tokens and registration.

use crate::i18n::{self, Lang};
use crate::profile::ProfileService;
use crate::registry::Registry;

pub const TRANSLATOR: &str = "translator";
pub const PROFILE: &str = "profile";

/// Label lookups over the embedded translation catalog.
#[derive(Debug)]
pub struct Translator;

impl Translator {
    pub fn new() -> Self {
        Self
    }

    /// Supported languages, in the order the switcher displays them.
    pub fn languages(&self) -> &'static [Lang] {
        Lang::all()
    }

    /// Localized string for `key`, or the key itself when missing.
    pub fn translation<'a>(&self, lang: Lang, key: &'a str) -> &'a str {
        i18n::translation(lang, key)
    }

    /// Human-readable name of the language, shown in the language switch.
    pub fn locale_label(&self, lang: Lang) -> &'static str {
        lang.locale_label()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

/// Register both services on a fresh registry. Both tokens are always
/// registered here, so resolving them later cannot hit the
/// "not registered" path.
pub fn register_services(mut registry: Registry) -> Registry {
    registry.register(TRANSLATOR, |_| Translator::new());
    registry.register(PROFILE, |_| ProfileService::new());
    registry
}
