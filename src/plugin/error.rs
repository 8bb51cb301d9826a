use std::fmt::{Display, Formatter};

use crate::client::ClientError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PluginErrorCode {
    NoAppKey,
    NoServerUrl,
    Upstream,
}

impl PluginErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PluginErrorCode::NoAppKey => "countly/no-app-key",
            PluginErrorCode::NoServerUrl => "countly/no-server-url",
            PluginErrorCode::Upstream => "countly/upstream",
        }
    }
}

/// Error surfaced by the plugin's capability methods.
///
/// Configuration errors are the only failures the plugin produces itself;
/// everything else is an upstream client failure passed through unchanged.
#[derive(Clone, Debug)]
pub struct PluginError {
    pub code: PluginErrorCode,
    message: String,
}

impl PluginError {
    pub fn new(code: PluginErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for PluginError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for PluginError {}

pub type PluginResult<T> = Result<T, PluginError>;

pub fn no_app_key() -> PluginError {
    PluginError::new(PluginErrorCode::NoAppKey, "No app_key provided")
}

pub fn no_server_url() -> PluginError {
    PluginError::new(PluginErrorCode::NoServerUrl, "No server_url provided")
}

impl From<ClientError> for PluginError {
    fn from(err: ClientError) -> Self {
        PluginError::new(PluginErrorCode::Upstream, err.to_string())
    }
}
