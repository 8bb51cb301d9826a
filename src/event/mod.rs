//! Event schema of the host dispatch framework.
//!
//! The dispatcher delivers events as JSON-ish mappings with camelCase keys;
//! these structs are the typed rendition of that schema. All of them are
//! transient, constructed per call and never retained by the plugin.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Named custom event routed to the `track` capability.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackEvent {
    pub event_name: String,
    #[serde(default)]
    pub payload: Map<String, Value>,
}

/// Page/view event routed to the `page` capability.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PageViewEvent {
    #[serde(default)]
    pub payload: PagePayload,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PagePayload {
    #[serde(default)]
    pub properties: PageProperties,
}

/// Page properties. Only `path` is read by the plugin; everything else the
/// dispatcher attaches is kept but not forwarded.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PageProperties {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// User-identification event routed to the `identify` capability.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct IdentifyEvent {
    #[serde(default)]
    pub payload: IdentifyPayload,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyPayload {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub traits: Option<Map<String, Value>>,
}

/// Application performance trace handed to the `report_trace` capability.
///
/// `stz`/`etz` are start/end timestamps in milliseconds since the Unix
/// epoch. Their ordering is not checked here; the client's interpretation
/// governs.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TracePayload {
    #[serde(rename = "type")]
    pub trace_type: String,
    pub name: String,
    pub stz: i64,
    pub etz: i64,
    #[serde(default)]
    pub app_metrics: Map<String, Value>,
}
