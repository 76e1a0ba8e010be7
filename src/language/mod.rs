//! Programming language variant selection.
//!
//! Generated packages come in two flavors. The variant is taken from the
//! `--lang` flag when it carries a recognized short code; otherwise the
//! user picks one interactively. Prompting sits behind the [`ChoicePrompt`]
//! trait so the selection logic is testable without a terminal.

use anyhow::{bail, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Select};

/// Implementation language of the generated package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    JavaScript,
    TypeScript,
}

impl Language {
    /// All recognized variants, in prompt order.
    pub const ALL: [Language; 2] = [Language::JavaScript, Language::TypeScript];

    /// Short code used by the `--lang` flag and in output configuration.
    pub fn code(&self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
        }
    }

    /// Full name shown in the interactive prompt.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }

    pub fn from_display_name(name: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.display_name() == name)
    }
}

/// Capability for asking the user to pick one of several options.
pub trait ChoicePrompt {
    /// Presents `options` and returns the chosen one.
    fn prompt_for_choice(&self, message: &str, options: &[&str]) -> Result<String>;
}

/// [`ChoicePrompt`] backed by an interactive terminal list.
pub struct TerminalPrompt;

impl ChoicePrompt for TerminalPrompt {
    fn prompt_for_choice(&self, message: &str, options: &[&str]) -> Result<String> {
        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .items(options)
            .default(0)
            .interact()?;

        Ok(options[index].to_string())
    }
}

/// Resolves the language variant from the `--lang` flag or interactively.
///
/// A recognized short code is returned immediately without prompting. An
/// unrecognized one produces a warning and falls through to the prompt, the
/// same as not passing the flag at all.
pub fn choose_language(flag: Option<&str>, prompt: &dyn ChoicePrompt) -> Result<Language> {
    if let Some(code) = flag {
        if let Some(language) = Language::from_code(code) {
            return Ok(language);
        }

        let codes: Vec<&str> = Language::ALL.iter().map(|lang| lang.code()).collect();
        eprintln!(
            "{} --lang option has to be one of: {}. Falling back to manual choice.",
            style("⚠").yellow(),
            codes.join(", ")
        );
    }

    let names: Vec<&str> = Language::ALL.iter().map(|lang| lang.display_name()).collect();
    let chosen = prompt.prompt_for_choice("Choose your programming language:", &names)?;

    match Language::from_display_name(&chosen) {
        Some(language) => Ok(language),
        None => bail!("unknown programming language: {chosen}"),
    }
}
