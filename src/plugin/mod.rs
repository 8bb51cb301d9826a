mod api;
mod config;
mod constants;
pub mod error;

pub use api::CountlyPlugin;
pub use config::PluginConfig;
pub use constants::PLUGIN_NAME;
pub use error::{PluginError, PluginErrorCode, PluginResult};
