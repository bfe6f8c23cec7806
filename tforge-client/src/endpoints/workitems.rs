//! # Work Item Endpoints
//!
//! Listing (single page and exhaustive), creation, and deep reads of
//! TicketForge work items.

use reqwest::Method;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::client::TicketForgeClient;
use crate::consts::{DEFAULT_BATCH_SIZE, DEFAULT_MAX_BATCHES, WORKITEM_PUBLISH_PATH, WORKITEMS_MINE_PATH};
use crate::error::Result;
use crate::models::{CreateWorkItemRequest, WorkItem, WorkItemCollection, WorkItemPage};

/// Take the `workitem` object out of a response envelope, or keep the body as is
pub(crate) fn unwrap_workitem(body: Option<Value>) -> Value {
  match body {
    Some(Value::Object(mut map)) if map.get("workitem").is_some_and(Value::is_object) => {
      map.remove("workitem").unwrap_or_default()
    }
    Some(value) => value,
    None => Value::Null,
  }
}

impl TicketForgeClient {
  /// Verify the configuration by fetching a single work item
  pub fn health_check(&self) -> Result<()> {
    self.list_work_items(1, None)?;
    Ok(())
  }

  /// Fetch one page of the authenticated user's work items
  pub fn list_work_items(&self, limit: u32, cursor: Option<&str>) -> Result<WorkItemPage> {
    let mut query = vec![("limit", limit.to_string())];
    if let Some(cursor) = cursor.filter(|c| !c.is_empty()) {
      query.push(("cursor", cursor.to_string()));
    }

    let body = self.execute(Method::GET, WORKITEMS_MINE_PATH, &query, None)?;
    let page: WorkItemPage = serde_json::from_value(body.unwrap_or(Value::Null))?;
    debug!(
      "Fetched {} work items (has_more: {})",
      page.items.len(),
      page.pagination.has_more
    );
    Ok(page)
  }

  /// Walk every page with [`DEFAULT_BATCH_SIZE`] items per page, for at most
  /// [`DEFAULT_MAX_BATCHES`] pages
  pub fn list_all_work_items_default(&self) -> Result<WorkItemCollection> {
    self.list_all_work_items(DEFAULT_BATCH_SIZE, DEFAULT_MAX_BATCHES)
  }

  /// Walk every page of the authenticated user's work items.
  ///
  /// Stops when the server reports no more pages, when it claims more pages
  /// but sends no cursor, or after `max_batches` pages. Hitting the cap is not
  /// an error; the collection is returned with `truncated` set. A cap of zero
  /// fetches nothing and is not a truncation.
  pub fn list_all_work_items(&self, batch_size: u32, max_batches: u32) -> Result<WorkItemCollection> {
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;
    // Set once a fetched page has handed out a cursor we have not followed yet
    let mut more_remaining = false;

    for batch in 1..=max_batches {
      let page = self.list_work_items(batch_size, cursor.as_deref())?;
      items.extend(page.items);
      info!("Fetched batch {} ({} work items so far)", batch, items.len());

      if !page.pagination.has_more {
        return Ok(WorkItemCollection { items, truncated: false });
      }

      match page.pagination.next_cursor.filter(|c| !c.is_empty()) {
        Some(next) => {
          cursor = Some(next);
          more_remaining = true;
        }
        None => {
          warn!("Server reported more work items but sent no cursor; stopping");
          return Ok(WorkItemCollection { items, truncated: false });
        }
      }
    }

    if more_remaining {
      warn!(
        "Stopped after {} batches with more work items remaining; results are truncated",
        max_batches
      );
    }
    Ok(WorkItemCollection {
      items,
      truncated: more_remaining,
    })
  }

  /// Publish a new work item and return it as created by the server
  pub fn create_work_item(&self, title: &str, description: &str, depends_on: &[String]) -> Result<WorkItem> {
    let request = CreateWorkItemRequest {
      title: title.to_string(),
      description: description.to_string(),
      depends_on: depends_on.to_vec(),
    };

    let body = self.execute(
      Method::POST,
      WORKITEM_PUBLISH_PATH,
      &[],
      Some(&serde_json::to_value(&request)?),
    )?;
    let created: WorkItem = serde_json::from_value(unwrap_workitem(body))?;
    info!("Created work item {}", created.reference);
    Ok(created)
  }

  /// Fetch a work item with nested fields (owner, dependencies)
  pub fn get_work_item_deep(&self, reference: &str) -> Result<WorkItem> {
    let url = self.workitem_url(reference)?;
    let body = self.execute_url(Method::GET, url.as_str(), &[("view", "deep".to_string())], None)?;
    Ok(serde_json::from_value(unwrap_workitem(body))?)
  }
}
