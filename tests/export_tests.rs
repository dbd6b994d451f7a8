// SPDX-License-Identifier: PMPL-1.0-or-later

//! Integration tests for file exports.

use folio::export::{self, ExportFormat};
use folio::i18n::Lang;
use folio::profile::ProfileService;
use folio::services::Translator;

#[test]
fn save_writes_markdown_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("resume.md");

    let translator = Translator::new();
    let profile = ProfileService::new().profile(Lang::En);
    export::save(ExportFormat::Markdown, &translator, Lang::En, profile, &path)
        .expect("save should succeed");

    let content = std::fs::read_to_string(&path).expect("file exists");
    assert!(content.starts_with("# Vladyslav Spivakov"));
    assert!(content.contains("## Experience"));
    assert!(content.contains("## Courses & Certifications"));
}

#[test]
fn save_writes_parseable_json() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("resume.json");

    let translator = Translator::new();
    let profile = ProfileService::new().profile(Lang::Cz);
    export::save(ExportFormat::Json, &translator, Lang::Cz, profile, &path)
        .expect("save should succeed");

    let content = std::fs::read_to_string(&path).expect("file exists");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(value["language"], "cz");
    assert_eq!(value["profile"]["image"], "/profile.jpg");
    assert_eq!(
        value["profile"]["contacts"][0]["href"],
        "mailto:vladyslav.spivakov@gmail.com"
    );
}

#[test]
fn every_language_exports_in_every_format() {
    let translator = Translator::new();
    let service = ProfileService::new();

    for lang in Lang::all() {
        let profile = service.profile(*lang);
        for format in [ExportFormat::Json, ExportFormat::Markdown, ExportFormat::Text] {
            let content = format
                .serialize(&translator, *lang, profile)
                .expect("serialize should succeed");
            assert!(
                content.contains("Vladyslav Spivakov"),
                "{lang} {format:?} export missing name"
            );
        }
    }
}
