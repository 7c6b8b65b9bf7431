use near_sdk::serde_json::{Map, Value};
use serde::Serialize;

#[derive(Serialize)]
pub(crate) struct Event {
    pub standard: String,
    pub version: String,
    pub event: String,
    pub data: Vec<EventData>,
}

#[derive(Serialize)]
pub(crate) struct EventData {
    pub operation: String,
    pub author: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Envelope for interop standards (NEP-245); data entries carry flat fields
/// with no operation/author wrapper.
#[derive(Serialize)]
pub(crate) struct StandardEvent {
    pub standard: String,
    pub version: String,
    pub event: String,
    pub data: Vec<Value>,
}
