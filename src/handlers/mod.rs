//! MCP tool handlers for Memopad
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod capture;
pub mod inbox;
pub mod preview;
pub mod settings;
