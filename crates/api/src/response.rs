//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Generic `{ "success": true, "message": ... }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: &'static str,
}

impl SuccessResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}
