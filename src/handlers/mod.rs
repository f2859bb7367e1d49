//! MCP tool handlers for the birthday server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod add;
pub mod delete;
pub mod list;
pub mod reminders;
pub mod settings;
pub mod transfer;
pub mod update;
