/// Name under which the plugin registers with the host dispatcher.
pub const PLUGIN_NAME: &str = "countly";
