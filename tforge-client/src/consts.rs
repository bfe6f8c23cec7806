//! Constants for the tforge-client crate.

use std::time::Duration;

/// Base URL of the hosted TicketForge service
pub const DEFAULT_BASE_URL: &str = "https://integrations-assignment-ticketforge.vercel.app";

/// User-Agent header value for the TicketForge API client
pub const USER_AGENT: &str = concat!("tforge/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Per-request timeout applied by the session
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Response header carrying the ISO-8601 instant at which the rate limit resets
pub const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";

/// Collection route for work items owned by the authenticated user
pub const WORKITEMS_MINE_PATH: &str = "/api/tforge/workitems/mine";

/// Route for publishing a new work item
pub const WORKITEM_PUBLISH_PATH: &str = "/api/tforge/workitem/publish";

/// Page size used by `list_all_work_items` when the caller has no preference
pub const DEFAULT_BATCH_SIZE: u32 = 50;

/// Upper bound on pages fetched by `list_all_work_items`
pub const DEFAULT_MAX_BATCHES: u32 = 50;

/// Path segments of the single work item route; the ref is pushed after them
pub const WORKITEM_ROUTE: [&str; 3] = ["api", "tforge", "workitem"];
