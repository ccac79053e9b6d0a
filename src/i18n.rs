//! Translation table for the preference UI
//!
//! Static display strings keyed by [`Language`]. Every variant has a bundle,
//! so lookups through a `Language` value cannot fail; unknown codes are
//! rejected when they are parsed.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

use crate::config::Theme;

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    /// Code used in storage and on the command line
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// English <-> Spanish
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }

    /// Display strings for this language
    pub fn strings(self) -> &'static Translations {
        match self {
            Language::En => &EN,
            Language::Es => &ES,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| anyhow!("Unknown language code '{}'", s))
    }
}

/// Named-string bundle for one language
#[derive(Debug)]
pub struct Translations {
    pub title: &'static str,
    pub theme_title: &'static str,
    pub theme_button: &'static str,
    /// Prefix for the "current theme" label, theme name follows
    pub current_theme: &'static str,
    pub font_title: &'static str,
    pub language_title: &'static str,
    pub language_button: &'static str,
    pub profile_title: &'static str,
    pub profile_placeholder: &'static str,
    pub save_profile: &'static str,
    pub load_profile: &'static str,
    pub export_profile: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
    pub export_confirmation: &'static str,
    /// Answer hint shown after a yes/no prompt
    pub confirm_hint: &'static str,
    /// Lowercase answers that count as yes
    pub affirmative: &'static [&'static str],
    pub profile_saved: &'static str,
    pub profile_loaded: &'static str,
}

impl Translations {
    pub fn theme_name(&self, theme: Theme) -> &'static str {
        match theme {
            Theme::Light => self.light,
            Theme::Dark => self.dark,
        }
    }

    /// e.g. "Current theme: Dark"
    pub fn current_theme_label(&self, theme: Theme) -> String {
        format!("{}{}", self.current_theme, self.theme_name(theme))
    }

    /// Case-insensitive match against this language's yes answers
    pub fn is_affirmative(&self, answer: &str) -> bool {
        let answer = answer.trim().to_lowercase();
        self.affirmative.contains(&answer.as_str())
    }
}

static EN: Translations = Translations {
    title: "User Preferences",
    theme_title: "Theme",
    theme_button: "Toggle Theme",
    current_theme: "Current theme: ",
    font_title: "Font Size",
    language_title: "Language",
    language_button: "Toggle Language (English/Spanish)",
    profile_title: "Profile Management",
    profile_placeholder: "Profile name",
    save_profile: "Save Profile",
    load_profile: "Load Profile",
    export_profile: "Export Profile",
    light: "Light",
    dark: "Dark",
    export_confirmation: "Do you want to export the current profile?",
    confirm_hint: "[y/N]",
    affirmative: &["y", "yes"],
    profile_saved: "Profile saved successfully!",
    profile_loaded: "Profile loaded successfully!",
};

static ES: Translations = Translations {
    title: "Preferencias de Usuario",
    theme_title: "Tema",
    theme_button: "Cambiar Tema",
    current_theme: "Tema actual: ",
    font_title: "Tamaño de Fuente",
    language_title: "Idioma",
    language_button: "Cambiar Idioma (Inglés/Español)",
    profile_title: "Gestión de Perfiles",
    profile_placeholder: "Nombre del perfil",
    save_profile: "Guardar Perfil",
    load_profile: "Cargar Perfil",
    export_profile: "Exportar Perfil",
    light: "Claro",
    dark: "Oscuro",
    export_confirmation: "¿Desea exportar el perfil actual?",
    confirm_hint: "[s/N]",
    affirmative: &["s", "si", "sí"],
    profile_saved: "¡Perfil guardado correctamente!",
    profile_loaded: "¡Perfil cargado correctamente!",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("es".parse::<Language>().unwrap(), Language::Es);
    }

    #[test]
    fn test_parse_unknown_code_rejected() {
        assert!("fr".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
        // Codes are exact, no case folding
        assert!("EN".parse::<Language>().is_err());
    }

    #[test]
    fn test_toggle_twice_returns_original() {
        for lang in Language::ALL {
            assert_eq!(lang.toggled().toggled(), lang);
            assert_ne!(lang.toggled(), lang);
        }
    }

    #[test]
    fn test_every_language_has_complete_bundle() {
        for lang in Language::ALL {
            let t = lang.strings();
            for s in [
                t.title,
                t.theme_title,
                t.theme_button,
                t.current_theme,
                t.font_title,
                t.language_title,
                t.language_button,
                t.profile_title,
                t.profile_placeholder,
                t.save_profile,
                t.load_profile,
                t.export_profile,
                t.light,
                t.dark,
                t.export_confirmation,
                t.confirm_hint,
                t.profile_saved,
                t.profile_loaded,
            ] {
                assert!(!s.is_empty(), "empty string in {} bundle", lang);
            }
            assert!(!t.affirmative.is_empty());
        }
    }

    #[test]
    fn test_current_theme_label() {
        let en = Language::En.strings();
        let es = Language::Es.strings();
        assert_eq!(en.current_theme_label(Theme::Dark), "Current theme: Dark");
        assert_eq!(es.current_theme_label(Theme::Light), "Tema actual: Claro");
    }

    #[test]
    fn test_affirmative_answers_follow_language() {
        let en = Language::En.strings();
        let es = Language::Es.strings();

        assert!(en.is_affirmative(" YES\n"));
        assert!(!en.is_affirmative("si"));
        assert!(es.is_affirmative("Sí"));
        assert!(!es.is_affirmative("y"));
        assert!(!en.is_affirmative(""));
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Language::Es).unwrap(), "\"es\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }
}
