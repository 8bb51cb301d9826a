use std::fmt;
use std::sync::Arc;

use crate::client::{ClientConfig, CountlyClient, CustomEvent, DisabledClient, Trace, UserDetails};
use crate::event::{IdentifyEvent, PageViewEvent, TracePayload, TrackEvent};
use crate::plugin::config::PluginConfig;
use crate::plugin::constants::PLUGIN_NAME;
use crate::plugin::error::{no_app_key, no_server_url, PluginResult};

/// Adapter between the host dispatcher's event schema and the Countly
/// client.
///
/// The plugin owns its immutable [`PluginConfig`] and an injected
/// [`CountlyClient`]; every capability is a stateless forwarding call, with
/// the one-time initialization side effect living in the client. The host
/// must call [`initialize`](CountlyPlugin::initialize) once before any other
/// capability; behavior of earlier calls is whatever the client does with
/// them.
#[derive(Clone)]
pub struct CountlyPlugin {
    config: PluginConfig,
    client: Arc<dyn CountlyClient>,
}

impl fmt::Debug for CountlyPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountlyPlugin")
            .field("name", &PLUGIN_NAME)
            .field("server_url", &self.config.server_url)
            .finish()
    }
}

impl CountlyPlugin {
    pub fn new(config: PluginConfig, client: Arc<dyn CountlyClient>) -> Self {
        Self { config, client }
    }

    /// Plugin wired to the no-op client. The construction path for
    /// browser-style builds, where no network-capable client exists.
    pub fn disabled(config: PluginConfig) -> Self {
        Self::new(config, Arc::new(DisabledClient))
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Validates the required settings and initializes the client.
    ///
    /// Fails before the client is touched when `app_key` or `server_url` is
    /// empty; the host must treat that as fatal for plugin setup. Repeated
    /// calls are delegated to the client.
    pub fn initialize(&self) -> PluginResult<()> {
        if self.config.app_key.is_empty() {
            return Err(no_app_key());
        }
        if self.config.server_url.is_empty() {
            return Err(no_server_url());
        }
        self.client.init(&ClientConfig {
            app_key: self.config.app_key.clone(),
            server_url: self.config.server_url.clone(),
            debug: self.config.debug,
        })?;
        log::debug!("countly plugin initialized against {}", self.config.server_url);
        Ok(())
    }

    /// Records a page view from the event's `properties.path`. The path is
    /// forwarded as-is, absent or empty included.
    pub fn page(&self, event: &PageViewEvent) -> PluginResult<()> {
        let path = event.payload.properties.path.as_deref();
        self.client.track_view(path)?;
        Ok(())
    }

    /// Forwards a named event with a fixed count of 1 and the payload as
    /// segmentation, verbatim.
    pub fn track(&self, event: &TrackEvent) -> PluginResult<()> {
        self.client.add_event(CustomEvent {
            key: event.event_name.clone(),
            count: 1,
            segmentation: event.payload.clone(),
        })?;
        Ok(())
    }

    /// Applies a user-identification event.
    ///
    /// When a user id is present the identity change goes out first, so the
    /// client attributes the subsequent detail update to the new identity.
    /// Traits named like one of Countly's predefined profile fields map
    /// directly onto [`UserDetails`]; all others accumulate under `custom`.
    /// The detail update is submitted even when no traits were supplied.
    pub fn identify(&self, event: &IdentifyEvent) -> PluginResult<()> {
        let payload = &event.payload;
        if let Some(user_id) = payload.user_id.as_deref() {
            log::debug!("switching countly identity to {user_id}");
            self.client.change_id(user_id)?;
        }

        let mut details = UserDetails::default();
        if let Some(traits) = payload.traits.as_ref() {
            for (name, value) in traits {
                if !details.set_predefined(name, value.clone()) {
                    details.custom.insert(name.clone(), value.clone());
                }
            }
        }
        self.client.user_details(details)?;
        Ok(())
    }

    /// Opts in to the client's uncaught-error reporting.
    pub fn enable_error_tracking(&self) -> PluginResult<()> {
        self.client.track_errors()?;
        Ok(())
    }

    /// Opts in to the client's session begin/end tracking.
    pub fn enable_session_tracking(&self) -> PluginResult<()> {
        self.client.track_sessions()?;
        Ok(())
    }

    /// Forwards a performance trace verbatim. Timestamp ordering is the
    /// caller's responsibility.
    pub fn report_trace(&self, payload: &TracePayload) -> PluginResult<()> {
        self.client.report_trace(Trace {
            trace_type: payload.trace_type.clone(),
            name: payload.name.clone(),
            stz: payload.stz,
            etz: payload.etz,
            app_metrics: payload.app_metrics.clone(),
        })?;
        Ok(())
    }
}
