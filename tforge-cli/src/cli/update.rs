//! # Update Command

use anyhow::Result;
use clap::Args;
use tforge_client::{Stage, WorkItemUpdate};

use crate::clients::create_client;
use crate::utils::output::{format_ref, print_success};
use crate::utils::parse::{parse_csv_refs, parse_custom_fields};

/// Arguments for the update command
#[derive(Args)]
pub struct UpdateArgs {
  /// Ticket ref, e.g. TF-160
  #[arg(index = 1)]
  pub reference: String,

  /// New title
  #[arg(long)]
  pub title: Option<String>,

  /// New description
  #[arg(long)]
  pub description: Option<String>,

  /// New stage: open | in_progress | review | closed
  #[arg(long)]
  pub stage: Option<String>,

  /// Comma-separated ticket refs, replacing the current dependencies
  #[arg(long)]
  pub depends_on: Option<String>,

  /// Comma-separated key=value pairs, e.g. j9=eee,k2=val
  #[arg(long)]
  pub custom_fields: Option<String>,
}

impl UpdateArgs {
  /// Validate the flags and turn them into a client update
  fn to_update(&self) -> Result<WorkItemUpdate> {
    if let Some(stage) = &self.stage {
      stage.parse::<Stage>()?;
    }

    Ok(WorkItemUpdate {
      title: self.title.clone(),
      description: self.description.clone(),
      stage: self.stage.clone(),
      depends_on: parse_csv_refs(self.depends_on.as_deref()),
      custom_fields: parse_custom_fields(self.custom_fields.as_deref())?,
    })
  }
}

pub(crate) fn handle_update_command(args: UpdateArgs) -> Result<()> {
  // Bad flags fail before config is loaded or the network is touched
  let update = args.to_update()?;

  let client = create_client()?;
  client.update_work_item(&args.reference, &update)?;
  print_success(&format!("Updated {}", format_ref(&args.reference)));
  Ok(())
}
