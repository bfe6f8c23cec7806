//! # TicketForge API Client
//!
//! Blocking client for the TicketForge issue tracker: authenticated request
//! transport with rate-limit retry, paged and exhaustive listing, ticket
//! creation, deep reads, and a read-modify-write update.

pub mod backoff;
mod client;
pub mod consts;
mod endpoints;
pub mod error;
pub mod models;
mod transport;

#[cfg(test)]
mod test_support;

// Re-export the client
pub use backoff::{Sleeper, ThreadSleeper};
pub use client::{Config, TicketForgeClient, create_ticketforge_client};
pub use endpoints::update::merge_update;
pub use error::{Result, TicketForgeError};
// Re-export models
pub use models::{
  CreateWorkItemRequest, Owner, Pagination, Stage, UpdatePayload, WorkItem, WorkItemCollection, WorkItemPage,
  WorkItemUpdate,
};
// Re-export the HTTP method type used by `TicketForgeClient::execute`
pub use reqwest::Method;
