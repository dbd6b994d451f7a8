// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal, markdown, and JSON renditions of a profile.
//!
//! Section headers come from the translation catalog, so an export carries the
//! same localized labels as the GUI for the chosen language.

use crate::i18n::Lang;
use crate::profile::Profile;
use crate::services::Translator;
use anyhow::Result;
use clap::ValueEnum;
use colored::*;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Markdown,
    Text,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
            ExportFormat::Text => "txt",
        }
    }

    pub fn serialize(
        &self,
        translator: &Translator,
        lang: Lang,
        profile: &Profile,
    ) -> Result<String> {
        match self {
            ExportFormat::Json => serialize_json(lang, profile),
            ExportFormat::Markdown => Ok(format_markdown(translator, lang, profile)),
            ExportFormat::Text => Ok(format_text(translator, lang, profile)),
        }
    }
}

/// Write an export to `path`.
pub fn save(
    format: ExportFormat,
    translator: &Translator,
    lang: Lang,
    profile: &Profile,
    path: &Path,
) -> Result<()> {
    let content = format.serialize(translator, lang, profile)?;
    fs::write(path, content)?;
    Ok(())
}

fn serialize_json(lang: Lang, profile: &Profile) -> Result<String> {
    #[derive(serde::Serialize)]
    struct Document<'a> {
        language: Lang,
        profile: &'a Profile,
    }
    Ok(serde_json::to_string_pretty(&Document {
        language: lang,
        profile,
    })?)
}

// ─── Terminal ───────────────────────────────────────────────────────

/// Print the colored terminal rendition of a profile.
pub fn print_resume(translator: &Translator, lang: Lang, profile: &Profile) {
    let t = |key| translator.translation(lang, key);

    println!("\n{}", profile.name.bold().cyan());
    println!("{}", t("title").bold());
    println!("{}", profile.headline);
    println!("{}\n", profile.location.dimmed());

    println!("{}", t("summaryLabel").to_uppercase().bold().yellow());
    println!("  {}\n", profile.summary);

    println!("{}", t("experience").to_uppercase().bold().yellow());
    for entry in profile.experience {
        println!("  {} - {}", entry.role.bold(), entry.company);
        println!(
            "  {}",
            format!("{} | {}", entry.period, entry.location).dimmed()
        );
        println!("  {}", entry.summary);
        println!("  {}\n", entry.skills.join(", ").dimmed());
    }

    println!("{}", t("education").to_uppercase().bold().yellow());
    for entry in profile.education {
        println!("  {} - {}", entry.degree.bold(), entry.school);
        println!(
            "  {}\n",
            format!("{} | {}", entry.period, entry.location).dimmed()
        );
    }

    println!("{}", t("contact").to_uppercase().bold().yellow());
    for item in profile.contacts {
        match item.href {
            Some(href) => println!("  {}: {} ({})", item.label, item.value, href.dimmed()),
            None => println!("  {}: {}", item.label, item.value),
        }
    }
    println!();

    println!("{}", t("skills").to_uppercase().bold().yellow());
    for group in profile.skills {
        println!("  {}: {}", group.title.bold(), group.items.join(", "));
    }
    println!();

    println!("{}", t("courses").to_uppercase().bold().yellow());
    for course in profile.courses {
        println!(
            "  {} - {} ({})",
            course.title.bold(),
            course.provider,
            course.issued
        );
        if let Some(id) = course.credential_id {
            println!("  {}", format!("Credential: {id}").dimmed());
        }
    }
    println!();
}

// ─── Markdown ───────────────────────────────────────────────────────

fn format_markdown(translator: &Translator, lang: Lang, profile: &Profile) -> String {
    let t = |key| translator.translation(lang, key);
    let mut lines = Vec::new();

    lines.push(format!("# {}", profile.name));
    lines.push(String::new());
    lines.push(format!("**{}**", t("title")));
    lines.push(String::new());
    lines.push(profile.headline.to_string());
    lines.push(String::new());
    lines.push(format!("*{}*", profile.location));
    lines.push(String::new());
    lines.push(format!("![portrait]({})", profile.image));
    lines.push(String::new());

    lines.push(format!("## {}", t("summaryLabel")));
    lines.push(String::new());
    lines.push(profile.summary.to_string());
    lines.push(String::new());

    lines.push(format!("## {}", t("experience")));
    lines.push(String::new());
    for entry in profile.experience {
        lines.push(format!("### {} - {}", entry.role, entry.company));
        lines.push(String::new());
        lines.push(format!("{} | {}", entry.period, entry.location));
        lines.push(String::new());
        lines.push(entry.summary.to_string());
        lines.push(String::new());
        lines.push(format!("`{}`", entry.skills.join("` `")));
        lines.push(String::new());
    }

    lines.push(format!("## {}", t("education")));
    lines.push(String::new());
    for entry in profile.education {
        lines.push(format!("### {} - {}", entry.degree, entry.school));
        lines.push(String::new());
        lines.push(format!("{} | {}", entry.period, entry.location));
        lines.push(String::new());
    }

    lines.push(format!("## {}", t("contact")));
    lines.push(String::new());
    for item in profile.contacts {
        match item.href {
            Some(href) => lines.push(format!("- {}: [{}]({})", item.label, item.value, href)),
            None => lines.push(format!("- {}: {}", item.label, item.value)),
        }
    }
    lines.push(String::new());

    lines.push(format!("## {}", t("skills")));
    lines.push(String::new());
    for group in profile.skills {
        lines.push(format!("- **{}**: {}", group.title, group.items.join(", ")));
    }
    lines.push(String::new());

    lines.push(format!("## {}", t("courses")));
    lines.push(String::new());
    for course in profile.courses {
        lines.push(format!(
            "- **{}** - {} ({})",
            course.title, course.provider, course.issued
        ));
        if let Some(id) = course.credential_id {
            lines.push(format!("  - Credential: {id}"));
        }
    }
    lines.push(String::new());

    lines.join("\n")
}

// ─── Plain text ─────────────────────────────────────────────────────

fn format_text(translator: &Translator, lang: Lang, profile: &Profile) -> String {
    let t = |key| translator.translation(lang, key);
    let mut lines = Vec::new();

    lines.push(profile.name.to_string());
    lines.push(t("title").to_string());
    lines.push(profile.headline.to_string());
    lines.push(profile.location.to_string());
    lines.push(String::new());

    lines.push(t("summaryLabel").to_uppercase());
    lines.push(profile.summary.to_string());
    lines.push(String::new());

    lines.push(t("experience").to_uppercase());
    for entry in profile.experience {
        lines.push(format!("{} - {}", entry.role, entry.company));
        lines.push(format!("{} | {}", entry.period, entry.location));
        lines.push(entry.summary.to_string());
        lines.push(String::new());
    }

    lines.push(t("education").to_uppercase());
    for entry in profile.education {
        lines.push(format!("{} - {}", entry.degree, entry.school));
        lines.push(format!("{} | {}", entry.period, entry.location));
        lines.push(String::new());
    }

    lines.push(t("contact").to_uppercase());
    for item in profile.contacts {
        lines.push(format!("{}: {}", item.label, item.value));
    }
    lines.push(String::new());

    lines.push(t("skills").to_uppercase());
    for group in profile.skills {
        lines.push(format!("{}: {}", group.title, group.items.join(", ")));
    }
    lines.push(String::new());

    lines.push(t("courses").to_uppercase());
    for course in profile.courses {
        lines.push(format!(
            "{} - {} ({})",
            course.title, course.provider, course.issued
        ));
    }
    lines.push(String::new());

    lines.join("\n")
}
