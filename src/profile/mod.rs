// SPDX-License-Identifier: PMPL-1.0-or-later

//! Profile records and the service that hands them out per language.
//!
//! All content is hand-authored, immutable literal data (see `data`). One
//! complete profile exists per supported language; there is no merging or
//! fallback between locales. Contacts, skill groups, and courses are shared
//! across the three profiles; identity and narrative text is per-language.

mod data;

use crate::i18n::Lang;
use serde::Serialize;

/// One entry in the contact list. Without an `href` the value renders as
/// plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactItem {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

/// A named cluster of skill labels shown together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Course {
    pub title: &'static str,
    pub provider: &'static str,
    pub issued: &'static str,
    pub credential_id: Option<&'static str>,
    pub skills: &'static [&'static str],
}

/// The full set of resume content for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub contacts: &'static [ContactItem],
    pub skills: &'static [SkillGroup],
    pub experience: &'static [Experience],
    pub education: &'static [Education],
    pub courses: &'static [Course],
    pub image: &'static str,
}

/// Maps a language to its fully-populated profile record.
pub struct ProfileService;

impl ProfileService {
    pub fn new() -> Self {
        Self
    }

    pub fn profile(&self, lang: Lang) -> &'static Profile {
        match lang {
            Lang::En => &data::EN,
            Lang::Cz => &data::CZ,
            Lang::Ua => &data::UA,
        }
    }
}

impl Default for ProfileService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_non_empty(field: &str, value: &str) {
        assert!(!value.trim().is_empty(), "{field} should not be empty");
    }

    #[test]
    fn every_language_has_a_complete_profile() {
        let service = ProfileService::new();
        for lang in Lang::all() {
            let profile = service.profile(*lang);
            assert_non_empty("name", profile.name);
            assert_non_empty("role", profile.role);
            assert_non_empty("location", profile.location);
            assert_non_empty("headline", profile.headline);
            assert_non_empty("summary", profile.summary);
            assert_non_empty("image", profile.image);

            for item in profile.contacts {
                assert_non_empty("contact label", item.label);
                assert_non_empty("contact value", item.value);
                if let Some(href) = item.href {
                    assert_non_empty("contact href", href);
                }
            }
            for group in profile.skills {
                assert_non_empty("skill group title", group.title);
                assert!(!group.items.is_empty(), "skill group should have items");
                for skill in group.items {
                    assert_non_empty("skill label", skill);
                }
            }
            for entry in profile.experience {
                assert_non_empty("company", entry.company);
                assert_non_empty("role", entry.role);
                assert_non_empty("period", entry.period);
                assert_non_empty("location", entry.location);
                assert_non_empty("summary", entry.summary);
            }
            for entry in profile.education {
                assert_non_empty("school", entry.school);
                assert_non_empty("degree", entry.degree);
                assert_non_empty("period", entry.period);
                assert_non_empty("location", entry.location);
            }
            for course in profile.courses {
                assert_non_empty("course title", course.title);
                assert_non_empty("course provider", course.provider);
                assert_non_empty("course issued", course.issued);
                if let Some(id) = course.credential_id {
                    assert_non_empty("credential id", id);
                }
            }
        }
    }

    #[test]
    fn shared_sequences_are_identical_across_locales() {
        let service = ProfileService::new();
        let en = service.profile(Lang::En);
        for lang in [Lang::Cz, Lang::Ua] {
            let other = service.profile(lang);
            assert_eq!(en.contacts, other.contacts);
            assert_eq!(en.skills, other.skills);
            assert_eq!(en.courses, other.courses);
        }
    }

    #[test]
    fn email_contact_has_mailto_href() {
        let profile = ProfileService::new().profile(Lang::En);
        let email = profile
            .contacts
            .iter()
            .find(|c| c.label == "Email")
            .expect("email contact present");
        let href = email.href.expect("email contact should link");
        assert!(href.starts_with("mailto:"));
    }

    #[test]
    fn plain_text_contact_has_no_href() {
        let profile = ProfileService::new().profile(Lang::En);
        assert!(
            profile.contacts.iter().any(|c| c.href.is_none()),
            "spoken-languages entry renders as plain text"
        );
    }
}
