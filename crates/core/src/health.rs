//! API health status.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of the API heartbeat endpoint.
///
/// Only `status` is guaranteed; anything else the API reports is kept in
/// `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Health {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
