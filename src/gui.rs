// SPDX-License-Identifier: PMPL-1.0-or-later

//! Desktop presentation layer.
//!
//! Lays the profile and translations out as a resume page: a header with the
//! identity block and the language/theme controls, a main column (summary,
//! experience, education) next to a side column (contact, skills), and a
//! full-width courses grid. Display order equals data order throughout.
//!
//! The only mutable state is the selected language and theme, owned by
//! [`PortfolioApp`] and changed through its setters; each change is observed
//! on the next frame. The theme is synced onto the egui visuals whenever the
//! value differs from the one last applied.

use crate::i18n::Lang;
use crate::profile::{Course, Education, Experience, ProfileService};
use crate::registry::Registry;
use crate::services::{self, Translator};
use anyhow::{anyhow, Result};
use eframe::{egui, App, Frame, NativeOptions};
use std::rc::Rc;

/// Display theme. The attribute values are exactly "dark" and "light".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn attr(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        }
    }
}

pub struct PortfolioApp {
    translator: Rc<Translator>,
    profiles: Rc<ProfileService>,
    language: Lang,
    theme: Theme,
    applied_theme: Option<Theme>,
}

impl PortfolioApp {
    pub fn new(
        translator: Rc<Translator>,
        profiles: Rc<ProfileService>,
        language: Lang,
        theme: Theme,
    ) -> Self {
        Self {
            translator,
            profiles,
            language,
            theme,
            applied_theme: None,
        }
    }

    /// Resolve both services from the registry and run the window loop.
    pub fn run(registry: &Registry, language: Lang, theme: Theme) -> Result<()> {
        let translator: Rc<Translator> = registry.resolve(services::TRANSLATOR)?;
        let profiles: Rc<ProfileService> = registry.resolve(services::PROFILE)?;
        let app = Self::new(translator, profiles, language, theme);
        eframe::run_native(
            "folio",
            NativeOptions::default(),
            Box::new(|_cc| Box::new(app)),
        )
        .map_err(|err| anyhow!("failed to launch portfolio window: {err}"))?;
        Ok(())
    }

    pub fn language(&self) -> Lang {
        self.language
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Select a language. Leaves the theme untouched.
    pub fn set_language(&mut self, language: Lang) {
        self.language = language;
    }

    /// Flip between the two themes. Leaves the language untouched.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    fn label(&self, key: &'static str) -> &'static str {
        self.translator.translation(self.language, key)
    }
}

impl App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if self.applied_theme != Some(self.theme) {
            ctx.set_visuals(self.theme.visuals());
            self.applied_theme = Some(self.theme);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                self.render_identity(ui);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    self.render_controls(ui);
                });
            });
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.columns(2, |columns| {
                    self.render_main_column(&mut columns[0]);
                    self.render_side_column(&mut columns[1]);
                });
                ui.separator();
                self.render_courses(ui);
            });
        });
    }
}

impl PortfolioApp {
    fn render_identity(&self, ui: &mut egui::Ui) {
        let profile = self.profiles.profile(self.language);
        render_avatar(ui, profile.name);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(self.label("title")).small().weak());
            ui.heading(profile.name);
            ui.label(profile.headline);
            ui.label(egui::RichText::new(profile.location).weak());
        });
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;
        let toggle = ui.button(format!("{} {}", theme.icon(), theme.label()));
        if toggle.clicked() {
            self.toggle_theme();
        }

        // Pills are laid out right-to-left here, so iterate in reverse to
        // keep the on-screen order equal to the supported-language order.
        for lang in self.translator.languages().iter().rev() {
            let pill = ui
                .selectable_label(*lang == self.language, lang.code().to_uppercase())
                .on_hover_text(self.translator.locale_label(*lang));
            if pill.clicked() {
                self.set_language(*lang);
            }
        }
    }

    fn render_main_column(&self, ui: &mut egui::Ui) {
        let profile = self.profiles.profile(self.language);

        section_header(ui, self.label("summaryLabel"));
        ui.label(profile.summary);

        section_header(ui, self.label("experience"));
        for entry in profile.experience {
            render_experience_card(ui, entry);
        }

        section_header(ui, self.label("education"));
        for entry in profile.education {
            render_education_card(ui, entry);
        }
    }

    fn render_side_column(&self, ui: &mut egui::Ui) {
        let profile = self.profiles.profile(self.language);

        section_header(ui, self.label("contact"));
        for item in profile.contacts {
            ui.label(egui::RichText::new(item.label).small().weak());
            match item.href {
                // Email targets open via an explicit new-window action
                // rather than default hyperlink navigation.
                Some(href) if href.starts_with("mailto:") => {
                    if ui.link(item.value).clicked() {
                        open_external(href);
                    }
                }
                Some(href) => {
                    ui.hyperlink_to(item.value, href);
                }
                None => {
                    ui.label(item.value);
                }
            }
            ui.add_space(4.0);
        }

        section_header(ui, self.label("skills"));
        for group in profile.skills {
            ui.label(egui::RichText::new(group.title).small().weak());
            ui.horizontal_wrapped(|ui| {
                for skill in group.items {
                    render_badge(ui, skill);
                }
            });
            ui.add_space(4.0);
        }
    }

    fn render_courses(&self, ui: &mut egui::Ui) {
        let profile = self.profiles.profile(self.language);

        section_header(ui, self.label("courses"));
        egui::Grid::new("courses")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                for row in profile.courses.chunks(2) {
                    for course in row {
                        render_course_card(ui, course);
                    }
                    ui.end_row();
                }
            });
    }
}

fn section_header(ui: &mut egui::Ui, title: &str) {
    ui.add_space(10.0);
    ui.heading(title);
    ui.separator();
}

fn render_experience_card(ui: &mut egui::Ui, item: &Experience) {
    ui.group(|ui| {
        ui.label(egui::RichText::new(item.company).weak());
        ui.label(egui::RichText::new(item.role).strong());
        ui.label(egui::RichText::new(format!("{} | {}", item.period, item.location)).weak());
        ui.label(item.summary);
        ui.horizontal_wrapped(|ui| {
            for skill in item.skills {
                render_badge(ui, skill);
            }
        });
    });
    ui.add_space(6.0);
}

fn render_education_card(ui: &mut egui::Ui, item: &Education) {
    ui.group(|ui| {
        ui.label(egui::RichText::new(item.school).weak());
        ui.label(egui::RichText::new(item.degree).strong());
        ui.label(egui::RichText::new(format!("{} | {}", item.period, item.location)).weak());
    });
    ui.add_space(6.0);
}

fn render_course_card(ui: &mut egui::Ui, item: &Course) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(item.title).strong());
            ui.label(egui::RichText::new(format!("{} | {}", item.provider, item.issued)).weak());
            if let Some(id) = item.credential_id {
                ui.label(
                    egui::RichText::new(format!("Credential: {id}"))
                        .small()
                        .weak(),
                );
            }
            ui.horizontal_wrapped(|ui| {
                for skill in item.skills.iter().take(4) {
                    render_badge(ui, skill);
                }
            });
        });
    });
}

fn render_badge(ui: &mut egui::Ui, label: &str) {
    ui.label(
        egui::RichText::new(label)
            .small()
            .background_color(ui.visuals().faint_bg_color),
    );
}

fn render_avatar(ui: &mut egui::Ui, name: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(56.0, 56.0), egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), 28.0, egui::Color32::from_rgb(63, 81, 181));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials(name),
        egui::FontId::proportional(20.0),
        egui::Color32::WHITE,
    );
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

fn open_external(href: &str) {
    if let Err(err) = webbrowser::open(href) {
        eprintln!("failed to open {href}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileService;

    fn app() -> PortfolioApp {
        PortfolioApp::new(
            Rc::new(Translator::new()),
            Rc::new(ProfileService::new()),
            Lang::En,
            Theme::Dark,
        )
    }

    #[test]
    fn theme_toggle_flips_between_exactly_two_values() {
        let mut app = app();
        assert_eq!(app.theme().attr(), "dark");
        app.toggle_theme();
        assert_eq!(app.theme().attr(), "light");
        app.toggle_theme();
        assert_eq!(app.theme().attr(), "dark");
    }

    #[test]
    fn theme_toggle_leaves_language_unchanged() {
        let mut app = app();
        app.set_language(Lang::Ua);
        app.toggle_theme();
        assert_eq!(app.language(), Lang::Ua);
    }

    #[test]
    fn language_switch_leaves_theme_unchanged() {
        let mut app = app();
        app.toggle_theme();
        let theme = app.theme();
        app.set_language(Lang::Cz);
        assert_eq!(app.theme(), theme);
        assert_eq!(app.language(), Lang::Cz);
    }

    #[test]
    fn language_switch_changes_visible_labels() {
        let mut app = app();
        assert_eq!(app.label("contact"), "Contact");
        app.set_language(Lang::Cz);
        assert_eq!(app.label("contact"), "Kontakt");
    }

    #[test]
    fn theme_surface_strings() {
        assert_eq!(Theme::Dark.label(), "Dark");
        assert_eq!(Theme::Light.label(), "Light");
        assert_ne!(Theme::Dark.icon(), Theme::Light.icon());
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Vladyslav Spivakov"), "VS");
        assert_eq!(initials("Plato"), "P");
    }
}
