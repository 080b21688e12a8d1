use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level shape of one scraper export file: `{"items": [...]}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListingFile {
    pub items: Vec<Value>,
}

/// One typed attribute of a listing, e.g. `{"id": "rooms", "value": "3.5"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterEntry {
    pub id: String,
    pub value: String,
}
