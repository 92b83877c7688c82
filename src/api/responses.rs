//! API response structures

use serde::{Deserialize, Serialize};

/// Body of the terminal handlers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Body for requests no route matched
    pub fn route_not_found() -> Self {
        Self::new("Route not found")
    }

    /// Body for any unhandled failure
    pub fn internal_error() -> Self {
        Self::new("Internal Server Error")
    }
}
