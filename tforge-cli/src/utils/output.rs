//! # Output Formatting
//!
//! Colored, emoji-prefixed status messages and small formatting helpers for
//! terminal output.

use owo_colors::{OwoColorize, Stream};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply this mode as the global color override
  ///
  /// Every helper in this module checks the override through
  /// `if_supports_color`, so piped output stays plain under `Auto`.
  pub fn apply(self) {
    match self {
      ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
      ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
      // Leave terminal detection to owo_colors
      ColorMode::Auto => {}
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!("{} {}", check.if_supports_color(Stream::Stdout, |t| t.green().bold().to_string()), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", cross.if_supports_color(Stream::Stderr, |t| t.red().bold().to_string()), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!("{} {}", warning.if_supports_color(Stream::Stdout, |t| t.yellow().bold().to_string()), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!("{} {}", info.if_supports_color(Stream::Stdout, |t| t.blue().bold().to_string()), message);
}

/// Format a ticket ref
pub fn format_ref(reference: &str) -> String {
  reference
    .if_supports_color(Stream::Stdout, |t| t.bright_cyan().bold().to_string())
    .to_string()
}

/// Format a command or command example
pub fn format_command(cmd: &str) -> String {
  cmd.if_supports_color(Stream::Stdout, |t| t.purple()).to_string()
}

/// Format a file path
pub fn format_path(path: &str) -> String {
  path.if_supports_color(Stream::Stdout, |t| t.bright_green()).to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_get_emoji_or_default() {
    let result = get_emoji_or_default("check_mark", "✓");
    assert!(!result.is_empty());

    let result = get_emoji_or_default("nonexistent_emoji", "fallback");
    assert_eq!(result, "fallback");
  }

  #[test]
  fn test_format_functions_keep_text() {
    assert!(format_ref("TF-160").contains("TF-160"));
    assert!(format_command("tforge setup").contains("tforge setup"));
    assert!(format_path("/tmp/config.json").contains("/tmp/config.json"));
  }
}
