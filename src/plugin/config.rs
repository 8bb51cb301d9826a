use serde::Deserialize;

/// Plugin settings supplied by the host at registration time.
///
/// `app_key` and `server_url` are required;
/// [`CountlyPlugin::initialize`](crate::plugin::CountlyPlugin::initialize)
/// rejects empty values. Keys absent from a deserialized mapping collapse to
/// empty strings, so missing and empty are treated alike. The settings are
/// created once at startup and immutable thereafter.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct PluginConfig {
    #[serde(default)]
    pub app_key: String,
    #[serde(default)]
    pub server_url: String,
    #[serde(default)]
    pub debug: bool,
}

impl PluginConfig {
    pub fn new(app_key: impl Into<String>, server_url: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            server_url: server_url.into(),
            debug: false,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
