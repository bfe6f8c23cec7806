//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the tforge tool.

mod create;
mod list;
mod setup;
mod show;
mod update;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};

use crate::utils::output::ColorMode;

/// Top-level CLI command for the tforge tool
#[derive(Parser)]
#[command(name = "tforge")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Command-line client for the TicketForge issue tracker")]
#[command(
  long_about = "tforge lists, shows, creates, and updates your TicketForge tickets.\n\n\
        Run 'tforge setup' once to store your connection settings. The\n\
        TFORGE_BASE_URL, TFORGE_USERNAME, and TFORGE_PASSWORD environment\n\
        variables override the stored values."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the tforge tool
#[derive(Subcommand)]
pub enum Commands {
  /// Configure the connection to TicketForge
  #[command(long_about = "Configure the connection to TicketForge.\n\n\
            Prompts for any value not given as a flag, verifies the credentials\n\
            against the server, and only then saves them to the config file.")]
  Setup(setup::SetupArgs),

  /// List your tickets
  #[command(long_about = "List the tickets you own.\n\n\
            By default a single page is shown. Use --all to walk every page, with\n\
            --limit as the page size.")]
  #[command(alias = "ls")]
  List(list::ListArgs),

  /// Show a ticket in detail
  #[command(long_about = "Show a ticket in detail, including its dependencies,\n\
            owner, and description.")]
  Show(show::ShowArgs),

  /// Create a new ticket
  #[command(long_about = "Create a new ticket.\n\n\
            Prompts for the title and description when they are not given as flags.")]
  Create(create::CreateArgs),

  /// Update an existing ticket
  #[command(long_about = "Update an existing ticket.\n\n\
            Only the fields you pass are changed; everything else keeps its current\n\
            value. Custom fields and dependencies replace the existing ones.")]
  Update(update::UpdateArgs),
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  match cli.command {
    Commands::Setup(setup) => setup::handle_setup_command(setup),
    Commands::List(list) => list::handle_list_command(list),
    Commands::Show(show) => show::handle_show_command(show),
    Commands::Create(create) => create::handle_create_command(create),
    Commands::Update(update) => update::handle_update_command(update),
  }
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_list_defaults() {
    let cli = Cli::try_parse_from(["tforge", "list"]).unwrap();
    match cli.command {
      Commands::List(args) => {
        assert_eq!(args.limit, 5);
        assert!(!args.all);
      }
      _ => panic!("expected list command"),
    }
  }

  #[test]
  fn test_list_rejects_zero_limit() {
    assert!(Cli::try_parse_from(["tforge", "list", "--limit", "0"]).is_err());
  }

  #[test]
  fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["tforge", "show", "TF-160", "-vv", "--colors", "never"]).unwrap();
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.colors, ColorMode::Never);
  }

  #[test]
  fn test_update_requires_ref() {
    assert!(Cli::try_parse_from(["tforge", "update", "--title", "x"]).is_err());
  }
}
