use serde::Serialize;
use serde_json::{Map, Value};

/// Initialization options handed to the client. Mirrors the record the
/// Countly SDK expects from its `init` call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClientConfig {
    pub app_key: String,
    pub server_url: String,
    pub debug: bool,
}

/// A single custom event in the shape the client's `add_event` expects.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CustomEvent {
    pub key: String,
    pub count: u32,
    pub segmentation: Map<String, Value>,
}

/// Performance trace record forwarded through `report_trace`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: String,
    pub name: String,
    /// Start timestamp, milliseconds since the Unix epoch.
    pub stz: i64,
    /// End timestamp, milliseconds since the Unix epoch.
    pub etz: i64,
    pub app_metrics: Map<String, Value>,
}

/// User profile update submitted through `user_details`.
///
/// Countly recognizes a fixed set of predefined profile fields; traits under
/// any other name travel in `custom`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byear: Option<Value>,
    pub custom: Map<String, Value>,
}

impl UserDetails {
    /// Assigns `value` to the predefined profile field named `field`.
    /// Returns `false` when the name is not one of the recognized fields,
    /// leaving the details untouched.
    pub(crate) fn set_predefined(&mut self, field: &str, value: Value) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "username" => &mut self.username,
            "email" => &mut self.email,
            "organization" => &mut self.organization,
            "phone" => &mut self.phone,
            "picture" => &mut self.picture,
            "gender" => &mut self.gender,
            "byear" => &mut self.byear,
            _ => return false,
        };
        *slot = Some(value);
        true
    }
}
