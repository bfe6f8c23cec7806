//! # Prompts Module
//!
//! Interactive input for values the user did not pass on the command line.

use anyhow::{Context, Result};
use console::Style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};

/// Returns the dialoguer theme used by every tforge prompt.
pub fn tforge_theme() -> ColorfulTheme {
  ColorfulTheme {
    prompt_style: Style::new().cyan().bold(),
    ..ColorfulTheme::default()
  }
}

/// Use `value` if given, otherwise ask for a line of text.
///
/// The answer is trimmed. Empty answers are allowed; validation belongs to
/// the caller.
pub fn text_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
  if let Some(value) = value {
    return Ok(value);
  }

  let input: String = Input::with_theme(&tforge_theme())
    .with_prompt(prompt)
    .allow_empty(true)
    .interact_text()
    .with_context(|| format!("Failed to read {}", prompt.to_lowercase()))?;

  Ok(input.trim().to_string())
}

/// Use `value` if given, otherwise ask for a password without echoing it.
pub fn password_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
  if let Some(value) = value {
    return Ok(value);
  }

  Password::with_theme(&tforge_theme())
    .with_prompt(prompt)
    .allow_empty_password(true)
    .interact()
    .context("Failed to read password")
}
