//! # Show Command

use anyhow::Result;
use clap::Args;

use crate::clients::create_client;
use crate::render::render_work_item_detail;

/// Arguments for the show command
#[derive(Args)]
pub struct ShowArgs {
  /// Ticket ref, e.g. TF-160
  #[arg(index = 1)]
  pub reference: String,
}

pub(crate) fn handle_show_command(args: ShowArgs) -> Result<()> {
  let client = create_client()?;
  let item = client.get_work_item_deep(&args.reference)?;
  println!("{}", render_work_item_detail(&item));
  Ok(())
}
