use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TicketForgeError;

/// Workflow stage of a work item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
  Open,
  InProgress,
  Review,
  Closed,
}

impl Stage {
  /// Every stage the server accepts, in workflow order
  pub const ALL: [Stage; 4] = [Stage::Open, Stage::InProgress, Stage::Review, Stage::Closed];

  /// Wire representation of the stage
  pub fn as_str(&self) -> &'static str {
    match self {
      Stage::Open => "open",
      Stage::InProgress => "in_progress",
      Stage::Review => "review",
      Stage::Closed => "closed",
    }
  }
}

impl fmt::Display for Stage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Stage {
  type Err = TicketForgeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Stage::ALL
      .into_iter()
      .find(|stage| stage.as_str() == s)
      .ok_or_else(|| TicketForgeError::validation(format!("Invalid stage '{s}'. Use: open | in_progress | review | closed")))
  }
}

/// Owner of a work item, only present in the deep view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Owner {
  #[serde(default)]
  pub username: Option<String>,
}

/// Represents a TicketForge work item
///
/// Stage is kept as the raw server string so that listing never fails on a
/// stage this client does not know about. Fields the client does not model
/// are preserved in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
  #[serde(rename = "ref", default)]
  pub reference: String,
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub stage: Option<String>,
  #[serde(default)]
  pub depends_on: Option<Vec<String>>,
  #[serde(default)]
  pub owner: Option<Owner>,
  /// Values are kept as the server sent them, strings or not
  #[serde(default)]
  pub custom_fields: Option<Map<String, Value>>,
  #[serde(default)]
  pub created: Option<String>,
  #[serde(default)]
  pub updated: Option<String>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl WorkItem {
  /// Refs this item depends on, empty when the server sent none
  pub fn depends_on(&self) -> &[String] {
    self.depends_on.as_deref().unwrap_or_default()
  }

  /// Username of the owner, if the deep view included one
  pub fn owner_username(&self) -> Option<&str> {
    self.owner.as_ref().and_then(|owner| owner.username.as_deref())
  }
}

/// Pagination metadata returned with every page of work items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
  #[serde(default)]
  pub has_more: bool,
  #[serde(default)]
  pub next_cursor: Option<String>,
}

/// One page of the "mine" collection
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WorkItemPage {
  #[serde(rename = "workitems", default)]
  pub items: Vec<WorkItem>,
  #[serde(default)]
  pub pagination: Pagination,
}

/// Result of walking every page of the "mine" collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkItemCollection {
  /// Items in the order the server returned them
  pub items: Vec<WorkItem>,
  /// Set when the batch cap stopped the walk while the server still had more
  pub truncated: bool,
}

/// Body of a publish request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkItemRequest {
  pub title: String,
  pub description: String,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub depends_on: Vec<String>,
}

/// Caller-supplied changes for an update.
///
/// `None` keeps the current value. There is no way to clear a field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkItemUpdate {
  pub title: Option<String>,
  pub description: Option<String>,
  pub stage: Option<String>,
  pub depends_on: Option<Vec<String>>,
  pub custom_fields: Option<BTreeMap<String, String>>,
}

impl WorkItemUpdate {
  pub fn title(mut self, title: impl Into<String>) -> Self {
    self.title = Some(title.into());
    self
  }

  pub fn description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }

  pub fn stage(mut self, stage: impl Into<String>) -> Self {
    self.stage = Some(stage.into());
    self
  }

  pub fn depends_on(mut self, refs: Vec<String>) -> Self {
    self.depends_on = Some(refs);
    self
  }

  pub fn custom_fields(mut self, fields: BTreeMap<String, String>) -> Self {
    self.custom_fields = Some(fields);
    self
  }
}

/// Complete representation sent with an update
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePayload {
  pub title: String,
  pub description: Option<String>,
  pub stage: Stage,
  pub depends_on: Vec<String>,
  pub custom_fields: Map<String, Value>,
}
