//! SObject Collections payload and results.

use crate::sobject::SalesforceError;
use serde::{Deserialize, Serialize};

/// Body of a composite sObject collections insert or update.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionRequest {
    #[serde(rename = "allOrNone")]
    pub all_or_none: bool,
    pub records: Vec<serde_json::Value>,
}

impl CollectionRequest {
    /// As the JSON object sent on the wire.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "allOrNone": self.all_or_none,
            "records": self.records,
        })
    }
}

/// Per-record result of a collection operation.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionResult {
    pub id: Option<String>,
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<SalesforceError>,
    pub created: Option<bool>,
}
