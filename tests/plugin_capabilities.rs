#![cfg(not(target_arch = "wasm32"))]

use std::sync::Arc;

use countly_plugin::client::{ClientCall, ClientConfig, CustomEvent, RecordingClient, Trace, UserDetails};
use countly_plugin::event::{IdentifyEvent, PageViewEvent, TracePayload, TrackEvent};
use countly_plugin::plugin::{CountlyPlugin, PluginConfig, PluginErrorCode};
use serde_json::json;

fn dispatcher_plugin() -> (CountlyPlugin, RecordingClient) {
    let config: PluginConfig = serde_json::from_value(json!({
        "app_key": "app-key-1",
        "server_url": "https://countly.example.com",
        "debug": true
    }))
    .unwrap();
    let client = RecordingClient::new();
    let plugin = CountlyPlugin::new(config, Arc::new(client.clone()));
    (plugin, client)
}

#[test]
fn full_capability_set_forwards_dispatcher_events() {
    let (plugin, client) = dispatcher_plugin();
    assert_eq!(plugin.name(), "countly");

    plugin.initialize().unwrap();

    let page: PageViewEvent = serde_json::from_value(json!({
        "payload": {"properties": {"path": "/pricing", "referrer": "/"}}
    }))
    .unwrap();
    plugin.page(&page).unwrap();

    let track: TrackEvent = serde_json::from_value(json!({
        "eventName": "signup",
        "payload": {"plan": "pro"}
    }))
    .unwrap();
    plugin.track(&track).unwrap();

    let identify: IdentifyEvent = serde_json::from_value(json!({
        "payload": {"userId": "u1", "traits": {"email": "a@b.com", "plan": "pro"}}
    }))
    .unwrap();
    plugin.identify(&identify).unwrap();

    plugin.enable_error_tracking().unwrap();
    plugin.enable_session_tracking().unwrap();

    let trace: TracePayload = serde_json::from_value(json!({
        "type": "network",
        "name": "api",
        "stz": 100,
        "etz": 150,
        "app_metrics": {"bytes": 10}
    }))
    .unwrap();
    plugin.report_trace(&trace).unwrap();

    let details = UserDetails {
        email: Some(json!("a@b.com")),
        custom: json!({"plan": "pro"}).as_object().cloned().unwrap(),
        ..Default::default()
    };

    assert_eq!(
        client.calls(),
        vec![
            ClientCall::Init(ClientConfig {
                app_key: "app-key-1".into(),
                server_url: "https://countly.example.com".into(),
                debug: true,
            }),
            ClientCall::TrackView(Some("/pricing".into())),
            ClientCall::AddEvent(CustomEvent {
                key: "signup".into(),
                count: 1,
                segmentation: json!({"plan": "pro"}).as_object().cloned().unwrap(),
            }),
            ClientCall::ChangeId("u1".into()),
            ClientCall::UserDetails(details),
            ClientCall::TrackErrors,
            ClientCall::TrackSessions,
            ClientCall::ReportTrace(Trace {
                trace_type: "network".into(),
                name: "api".into(),
                stz: 100,
                etz: 150,
                app_metrics: json!({"bytes": 10}).as_object().cloned().unwrap(),
            }),
        ]
    );
}

#[test]
fn misconfigured_plugin_never_reaches_the_client() {
    let config: PluginConfig = serde_json::from_value(json!({
        "server_url": "https://countly.example.com"
    }))
    .unwrap();
    let client = RecordingClient::new();
    let plugin = CountlyPlugin::new(config, Arc::new(client.clone()));

    let err = plugin.initialize().unwrap_err();
    assert_eq!(err.code, PluginErrorCode::NoAppKey);
    assert_eq!(err.to_string(), "No app_key provided (countly/no-app-key)");
    assert!(client.calls().is_empty());
}
