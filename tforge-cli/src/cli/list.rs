//! # List Command

use anyhow::Result;
use clap::Args;
use tforge_client::consts::DEFAULT_MAX_BATCHES;

use crate::clients::create_client;
use crate::consts::DEFAULT_LIST_LIMIT;
use crate::render::render_work_item_table;
use crate::utils::output::{format_command, print_warning};

/// Arguments for the list command
#[derive(Args)]
pub struct ListArgs {
  /// Page size; with --all, the batch size
  #[arg(long, default_value_t = DEFAULT_LIST_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
  pub limit: u32,

  /// Fetch every page instead of just the first
  #[arg(long)]
  pub all: bool,
}

pub(crate) fn handle_list_command(args: ListArgs) -> Result<()> {
  let client = create_client()?;

  if args.all {
    let collection = client.list_all_work_items(args.limit, DEFAULT_MAX_BATCHES)?;
    println!("{}", render_work_item_table(&collection.items));
    println!("\nTotal: {} tickets", collection.items.len());
    if collection.truncated {
      print_warning(&format!(
        "Stopped after {DEFAULT_MAX_BATCHES} pages; more tickets are available. Try a larger {}.",
        format_command("--limit")
      ));
    }
    return Ok(());
  }

  let page = client.list_work_items(args.limit, None)?;
  println!("{}", render_work_item_table(&page.items));
  if page.pagination.has_more {
    println!("\nMore results available. Try: {}", format_command("tforge list --all"));
  }
  Ok(())
}
