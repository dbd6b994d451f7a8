// SPDX-License-Identifier: PMPL-1.0-or-later

//! Integration tests over the composed registry.

use folio::i18n::Lang;
use folio::profile::ProfileService;
use folio::registry::Registry;
use folio::services::{self, Translator};
use std::rc::Rc;

fn composed() -> Registry {
    services::register_services(Registry::new())
}

#[test]
fn translator_resolves_with_languages_in_order() {
    let registry = composed();
    let translator: Rc<Translator> = registry
        .resolve(services::TRANSLATOR)
        .expect("translator is registered at startup");

    let codes: Vec<&str> = translator.languages().iter().map(|l| l.code()).collect();
    assert_eq!(codes, vec!["en", "cz", "ua"]);
}

#[test]
fn translations_match_authored_strings() {
    let registry = composed();
    let translator: Rc<Translator> = registry.resolve(services::TRANSLATOR).unwrap();

    assert_eq!(translator.translation(Lang::Cz, "contact"), "Kontakt");
    assert_eq!(translator.translation(Lang::En, "contact"), "Contact");
    assert_eq!(translator.translation(Lang::Ua, "experience"), "Досвід");
    assert_eq!(
        translator.translation(Lang::En, "doesNotExist"),
        "doesNotExist"
    );
}

#[test]
fn locale_labels_are_native_names() {
    let registry = composed();
    let translator: Rc<Translator> = registry.resolve(services::TRANSLATOR).unwrap();

    assert_eq!(translator.locale_label(Lang::En), "English");
    assert_eq!(translator.locale_label(Lang::Cz), "Čeština");
    assert_eq!(translator.locale_label(Lang::Ua), "Українська");
}

#[test]
fn profile_service_returns_complete_records() {
    let registry = composed();
    let profiles: Rc<ProfileService> = registry
        .resolve(services::PROFILE)
        .expect("profile service is registered at startup");

    for lang in Lang::all() {
        let profile = profiles.profile(*lang);
        assert!(!profile.name.is_empty());
        assert!(!profile.contacts.is_empty());
        assert!(!profile.skills.is_empty());
        assert!(!profile.experience.is_empty());
        assert!(!profile.education.is_empty());
        assert!(!profile.courses.is_empty());
    }
}

#[test]
fn services_are_memoized_across_resolves() {
    let registry = composed();
    let first: Rc<Translator> = registry.resolve(services::TRANSLATOR).unwrap();
    let second: Rc<Translator> = registry.resolve(services::TRANSLATOR).unwrap();
    assert!(Rc::ptr_eq(&first, &second));

    let first: Rc<ProfileService> = registry.resolve(services::PROFILE).unwrap();
    let second: Rc<ProfileService> = registry.resolve(services::PROFILE).unwrap();
    assert!(Rc::ptr_eq(&first, &second));
}

#[test]
fn unknown_token_fails_on_composed_registry() {
    let registry = composed();
    let err = registry.resolve::<Translator>("storage").unwrap_err();
    assert!(err.to_string().contains("not registered"));
}

#[test]
fn profile_fields_switch_with_language() {
    let registry = composed();
    let profiles: Rc<ProfileService> = registry.resolve(services::PROFILE).unwrap();

    let en = profiles.profile(Lang::En);
    let cz = profiles.profile(Lang::Cz);
    assert_eq!(en.name, cz.name);
    assert_ne!(en.role, cz.role);
    assert_ne!(en.summary, cz.summary);
}
