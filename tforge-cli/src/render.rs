//! # Rendering
//!
//! Plain-text views of work items: the list table and the detail view.

use tabled::settings::Style;
use tabled::{Table, Tabled};
use tforge_client::WorkItem;

/// Row of the work item list table
#[derive(Tabled)]
struct WorkItemRow {
  #[tabled(rename = "REF")]
  reference: String,
  #[tabled(rename = "TITLE")]
  title: String,
  #[tabled(rename = "STAGE")]
  stage: String,
  #[tabled(rename = "UPDATED")]
  updated: String,
}

impl From<&WorkItem> for WorkItemRow {
  fn from(item: &WorkItem) -> Self {
    Self {
      reference: item.reference.clone(),
      title: item.title.clone().unwrap_or_default(),
      stage: item.stage.clone().unwrap_or_default(),
      updated: item.updated.clone().unwrap_or_default(),
    }
  }
}

/// Render work items as a table, or a notice when there are none
pub fn render_work_item_table(items: &[WorkItem]) -> String {
  if items.is_empty() {
    return "No tickets found.".to_string();
  }

  let rows: Vec<WorkItemRow> = items.iter().map(WorkItemRow::from).collect();
  Table::new(rows).with(Style::blank()).to_string()
}

/// Render the detail view of a single work item
pub fn render_work_item_detail(item: &WorkItem) -> String {
  let field = |value: &Option<String>| value.clone().unwrap_or_default();

  let mut lines = vec![
    format!("REF: {}", item.reference),
    format!("TITLE: {}", field(&item.title)),
    format!("STAGE: {}", field(&item.stage)),
    format!("UPDATED: {}", field(&item.updated)),
    format!("CREATED: {}", field(&item.created)),
  ];

  let depends_on = item.depends_on();
  if !depends_on.is_empty() {
    lines.push(format!("DEPENDS_ON: {}", depends_on.join(", ")));
  }

  if let Some(owner) = item.owner_username().filter(|name| !name.is_empty()) {
    lines.push(format!("OWNER: {owner}"));
  }

  if let Some(description) = &item.description {
    lines.push(String::new());
    lines.push("DESCRIPTION:".to_string());
    lines.push(description.clone());
  }

  lines.join("\n")
}
