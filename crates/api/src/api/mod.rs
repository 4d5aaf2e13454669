// HTTP API routes
//
// This module contains the HTTP route handlers for the public API.
// Each resource submodule has its own AppState.

pub mod activities;
pub mod common;
pub mod validation;

// Re-export common types
pub use common::{ApiError, ErrorResponse, MessageResponse};
