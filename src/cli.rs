//! Command-line surface
//!
//! Each subcommand maps to one engine operation. After the operation the
//! localized view is printed, the way a UI would repaint.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::Theme;
use crate::engine::{PreferenceEngine, PreferenceView, ProfileOutcome};
use crate::i18n::{Language, Translations};
use crate::persistence::PreferenceStore;

#[derive(Parser, Debug)]
#[command(name = "user-preferences")]
#[command(author, version, long_about = None)]
#[command(about = "Manage theme, font and language preferences")]
pub struct Cli {
    /// Preference store file (default: <config dir>/user-preferences/preferences.json)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the current preferences
    Show,
    /// Set or toggle the theme
    Theme { value: ThemeArg },
    /// Set the font size
    FontSize {
        #[arg(allow_negative_numbers = true)]
        size: i32,
    },
    /// Set the font unit (px, em, rem, ...)
    FontUnit { unit: String },
    /// Set or toggle the UI language
    Language { value: LanguageArg },
    /// Save the current settings as a named profile
    SaveProfile { name: String },
    /// Restore a saved profile
    LoadProfile { name: String },
    /// List saved profile names
    Profiles,
    /// Export the current settings to user_preferences.json
    Export {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
        /// Directory to write the export into
        #[arg(long, short = 'o', default_value = ".")]
        output: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageArg {
    En,
    Es,
    Toggle,
}

/// Run one command against `engine`, reading confirmations from `input`
pub fn run<S, R, W>(
    engine: &mut PreferenceEngine<S>,
    command: Command,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    S: PreferenceStore,
    R: BufRead,
    W: Write,
{
    match command {
        Command::Show => {}
        Command::Theme { value } => {
            match value {
                ThemeArg::Light => engine.set_theme(Theme::Light)?,
                ThemeArg::Dark => engine.set_theme(Theme::Dark)?,
                ThemeArg::Toggle => engine.toggle_theme()?,
            };
        }
        Command::FontSize { size } => {
            engine.set_font_size(size)?;
        }
        Command::FontUnit { unit } => {
            engine.set_font_unit(&unit)?;
        }
        Command::Language { value } => {
            match value {
                LanguageArg::En => engine.set_language(Language::En)?,
                LanguageArg::Es => engine.set_language(Language::Es)?,
                LanguageArg::Toggle => engine.toggle_language()?,
            };
        }
        Command::SaveProfile { name } => {
            report(engine.save_profile(&name)?, out)?;
        }
        Command::LoadProfile { name } => {
            report(engine.load_profile(&name)?, out)?;
        }
        Command::Profiles => {
            for name in engine.profile_names() {
                writeln!(out, "{name}")?;
            }
            return Ok(());
        }
        Command::Export { yes, output } => {
            let strings = engine.view().strings;
            let confirmed = yes || confirm(engine.prepare_export(), strings, input, out)?;
            if let Some(artifact) = engine.complete_export(confirmed)? {
                let path = artifact.deliver(&output)?;
                writeln!(out, "{}", path.display())?;
            }
            return Ok(());
        }
    }

    render(engine.view(), out)
}

fn report<W: Write>(outcome: ProfileOutcome, out: &mut W) -> Result<()> {
    if let Some(message) = outcome.message() {
        writeln!(out, "{message}")?;
    }
    Ok(())
}

/// Ask a yes/no question in the active language; anything that is not
/// one of its yes answers, including EOF, is a no
pub fn confirm<R: BufRead, W: Write>(
    prompt: &str,
    strings: &Translations,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    write!(out, "{prompt} {} ", strings.confirm_hint)?;
    out.flush().context("Failed to flush prompt")?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    Ok(strings.is_affirmative(&answer))
}

/// Plain-text rendering of the view
pub fn render<W: Write>(view: PreferenceView<'_>, out: &mut W) -> Result<()> {
    let t = view.strings;
    let state = view.state;

    writeln!(out, "{}", t.title)?;
    writeln!(out, "  {}: {}", t.theme_title, t.current_theme_label(state.theme))?;
    writeln!(out, "  {}: {}", t.font_title, state.font_display())?;
    writeln!(out, "  {}: {}", t.language_title, state.language)?;

    let names: Vec<&str> = state.profiles.keys().map(String::as_str).collect();
    if names.is_empty() {
        writeln!(out, "  {}: -", t.profile_title)?;
    } else {
        writeln!(out, "  {}: {}", t.profile_title, names.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    fn engine() -> PreferenceEngine<MemoryStore> {
        PreferenceEngine::initialize(MemoryStore::new()).unwrap()
    }

    fn run_with_input(
        engine: &mut PreferenceEngine<MemoryStore>,
        command: Command,
        input: &str,
    ) -> String {
        let mut out = Vec::new();
        run(engine, command, &mut input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["user-preferences", "theme", "toggle"]).unwrap();
        assert_eq!(cli.command, Command::Theme { value: ThemeArg::Toggle });
        assert_eq!(cli.store, None);

        let cli = Cli::try_parse_from([
            "user-preferences",
            "font-size",
            "-4",
            "--store",
            "/tmp/p.json",
        ])
        .unwrap();
        assert_eq!(cli.command, Command::FontSize { size: -4 });
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/p.json")));

        assert!(Cli::try_parse_from(["user-preferences", "language", "fr"]).is_err());
    }

    #[test]
    fn test_render_english_defaults() {
        let engine = engine();
        let mut out = Vec::new();
        render(engine.view(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            concat!(
                "User Preferences\n",
                "  Theme: Current theme: Light\n",
                "  Font Size: 16px\n",
                "  Language: en\n",
                "  Profile Management: -\n",
            )
        );
    }

    #[test]
    fn test_save_profile_prints_message() {
        let mut engine = engine();
        let command = Command::SaveProfile { name: "work".into() };
        let out = run_with_input(&mut engine, command, "");
        assert!(out.starts_with("Profile saved successfully!\n"));
        assert!(out.contains("Profile Management: work"));
    }

    #[test]
    fn test_blank_profile_prints_no_message() {
        let mut engine = engine();
        let out = run_with_input(&mut engine, Command::SaveProfile { name: "  ".into() }, "");
        assert!(out.starts_with("User Preferences\n"));
    }

    #[test]
    fn test_export_declined_at_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = engine();
        let out = run_with_input(
            &mut engine,
            Command::Export { yes: false, output: dir.path().to_path_buf() },
            "n\n",
        );
        assert_eq!(out, "Do you want to export the current profile? [y/N] ");
        assert!(!dir.path().join("user_preferences.json").exists());
    }

    #[test]
    fn test_export_confirmed_at_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = engine();
        let out = run_with_input(
            &mut engine,
            Command::Export { yes: false, output: dir.path().to_path_buf() },
            "y\n",
        );
        assert!(out.ends_with("user_preferences.json\n"));
        assert!(dir.path().join("user_preferences.json").exists());
    }

    #[test]
    fn test_confirm_answers() {
        let en = Language::En.strings();
        let es = Language::Es.strings();
        let mut sink = Vec::new();

        assert!(confirm("?", en, &mut "YES\n".as_bytes(), &mut sink).unwrap());
        assert!(confirm("?", es, &mut "sí\n".as_bytes(), &mut sink).unwrap());
        // Answers only count in the prompt's language
        assert!(!confirm("?", en, &mut "si\n".as_bytes(), &mut sink).unwrap());
        assert!(!confirm("?", es, &mut "y\n".as_bytes(), &mut sink).unwrap());
        assert!(!confirm("?", en, &mut "\n".as_bytes(), &mut sink).unwrap());
        // EOF counts as no
        assert!(!confirm("?", en, &mut "".as_bytes(), &mut sink).unwrap());
    }

    #[test]
    fn test_export_prompt_hint_is_localized() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = engine();
        engine.set_language(Language::Es).unwrap();
        let out = run_with_input(
            &mut engine,
            Command::Export { yes: false, output: dir.path().to_path_buf() },
            "s\n",
        );
        assert!(out.starts_with("¿Desea exportar el perfil actual? [s/N] "));
        assert!(dir.path().join("user_preferences.json").exists());
    }

    #[test]
    fn test_profiles_lists_names_only() {
        let mut engine = engine();
        engine.save_profile("b").unwrap();
        engine.save_profile("a").unwrap();
        let out = run_with_input(&mut engine, Command::Profiles, "");
        assert_eq!(out, "a\nb\n");
    }
}
