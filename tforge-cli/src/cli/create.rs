//! # Create Command

use anyhow::Result;
use clap::Args;

use crate::clients::create_client;
use crate::prompts::text_or_prompt;
use crate::utils::output::{format_ref, print_success};
use crate::utils::parse::parse_csv_refs;

/// Arguments for the create command
#[derive(Args)]
pub struct CreateArgs {
  /// Ticket title (prompted for when omitted)
  #[arg(long)]
  pub title: Option<String>,

  /// Ticket description (prompted for when omitted)
  #[arg(long)]
  pub description: Option<String>,

  /// Comma-separated ticket refs, e.g. TF-157,TF-158
  #[arg(long)]
  pub depends_on: Option<String>,
}

pub(crate) fn handle_create_command(args: CreateArgs) -> Result<()> {
  let client = create_client()?;

  let title = text_or_prompt(args.title, "Title")?;
  let description = text_or_prompt(args.description, "Description")?;
  let depends_on = parse_csv_refs(args.depends_on.as_deref()).unwrap_or_default();

  let item = client.create_work_item(&title, &description, &depends_on)?;
  print_success(&format!(
    "Created {}: {}",
    format_ref(&item.reference),
    item.title.as_deref().unwrap_or_default()
  ));
  Ok(())
}
