//! # TicketForge API Endpoints
//!
//! Domain operations built on the transport: listing, pagination,
//! creation, deep reads, and the read-modify-write update.

pub mod update;
pub mod workitems;
