// SPDX-License-Identifier: PMPL-1.0-or-later

//! folio: multilingual portfolio/resume viewer.
//!
//! With no subcommand the desktop window opens. `render` prints the resume to
//! the terminal and `export` writes it to a file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio::export::{self, ExportFormat};
use folio::gui::{PortfolioApp, Theme};
use folio::i18n::Lang;
use folio::profile::ProfileService;
use folio::registry::Registry;
use folio::services::{self, Translator};
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Multilingual portfolio/resume viewer")]
#[command(long_about = None)]
struct Cli {
    /// Language to start in
    #[arg(short, long, value_enum, default_value = "en")]
    lang: LangArg,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the desktop window (the default)
    Gui {
        /// Theme to start in
        #[arg(short, long, value_enum, default_value = "dark")]
        theme: ThemeArg,
    },

    /// Print the resume to the terminal
    Render,

    /// Write the resume to a file
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: ExportFormat,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    En,
    Cz,
    Ua,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::En => Lang::En,
            LangArg::Cz => Lang::Cz,
            LangArg::Ua => Lang::Ua,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let registry = services::register_services(Registry::new());
    let lang: Lang = cli.lang.into();

    match cli.command.unwrap_or(Commands::Gui {
        theme: ThemeArg::Dark,
    }) {
        Commands::Gui { theme } => {
            PortfolioApp::run(&registry, lang, theme.into())?;
        }

        Commands::Render => {
            let translator: Rc<Translator> = registry.resolve(services::TRANSLATOR)?;
            let profiles: Rc<ProfileService> = registry.resolve(services::PROFILE)?;
            export::print_resume(&translator, lang, profiles.profile(lang));
        }

        Commands::Export { format, output } => {
            let translator: Rc<Translator> = registry.resolve(services::TRANSLATOR)?;
            let profiles: Rc<ProfileService> = registry.resolve(services::PROFILE)?;
            export::save(format, &translator, lang, profiles.profile(lang), &output)?;
            println!("Resume saved to: {}", output.display());
        }
    }

    Ok(())
}
