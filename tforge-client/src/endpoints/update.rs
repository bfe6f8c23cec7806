//! # Work Item Update
//!
//! The update route replaces the whole work item, so an update is a
//! read-modify-write: fetch the current state, overlay the caller's changes,
//! validate, then send the complete representation.
//!
//! A concurrent change made between the fetch and the write is overwritten.

use reqwest::Method;
use serde_json::Value;
use tracing::{debug, info};

use crate::client::TicketForgeClient;
use crate::error::{Result, TicketForgeError};
use crate::models::{Stage, UpdatePayload, WorkItem, WorkItemUpdate};

/// Build the full update payload from the current work item and the caller's
/// changes.
///
/// Fields the caller left as `None` keep their current value. Fails with
/// [`TicketForgeError::Validation`] if the requested stage is unknown, if the
/// resulting title is blank, or if no valid stage can be resolved.
pub fn merge_update(current: &WorkItem, update: &WorkItemUpdate) -> Result<UpdatePayload> {
  let requested_stage = update.stage.as_deref().map(str::parse::<Stage>).transpose()?;

  let title = update
    .title
    .clone()
    .or_else(|| current.title.clone())
    .unwrap_or_default();
  if title.trim().is_empty() {
    return Err(TicketForgeError::validation("Title is required and must be non-empty"));
  }

  let stage = match requested_stage {
    Some(stage) => stage,
    None => current
      .stage
      .as_deref()
      .and_then(|stage| stage.parse::<Stage>().ok())
      .ok_or_else(|| {
        TicketForgeError::validation("Stage is required and must be one of: open, in_progress, review, closed")
      })?,
  };

  Ok(UpdatePayload {
    title,
    description: update.description.clone().or_else(|| current.description.clone()),
    stage,
    depends_on: update
      .depends_on
      .clone()
      .or_else(|| current.depends_on.clone())
      .unwrap_or_default(),
    custom_fields: update
      .custom_fields
      .as_ref()
      .map(|fields| {
        fields
          .iter()
          .map(|(key, value)| (key.clone(), Value::String(value.clone())))
          .collect()
      })
      .or_else(|| current.custom_fields.clone())
      .unwrap_or_default(),
  })
}

impl TicketForgeClient {
  /// Update a work item, keeping every field the caller did not supply.
  ///
  /// An invalid stage is rejected before any request is made. Returns the
  /// server's response body as is.
  pub fn update_work_item(&self, reference: &str, update: &WorkItemUpdate) -> Result<Option<Value>> {
    if let Some(stage) = &update.stage {
      stage.parse::<Stage>()?;
    }

    let current = self.get_work_item_deep(reference)?;
    let payload = merge_update(&current, update)?;
    debug!("Sending full update for {}: {:?}", reference, payload);

    let url = self.workitem_url(reference)?;
    let response = self.execute_url(Method::PUT, url.as_str(), &[], Some(&serde_json::to_value(&payload)?))?;
    info!("Updated work item {}", reference);
    Ok(response)
  }
}
