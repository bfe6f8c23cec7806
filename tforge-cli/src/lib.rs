//! # TicketForge CLI Library
//!
//! Command handlers, configuration storage, and text rendering for the
//! `tforge` command-line client.

pub mod cli;
pub mod clients;
pub mod config;
pub mod consts;
pub mod prompts;
pub mod render;
pub mod utils;
