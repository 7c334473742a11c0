use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message-only response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable result message
    #[schema(example = "the sum is 42")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
