use serde::{Deserialize, Serialize};

/// Greeting returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Welcome {
    pub message: String,
    /// Path of the API description.
    pub docs: String,
}

impl Default for Welcome {
    fn default() -> Self {
        Self {
            message: "Welcome to the Items API".to_string(),
            docs: "/docs".to_string(),
        }
    }
}

/// `{"detail": ...}` body used for confirmations and errors alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    pub detail: String,
}

impl Detail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
