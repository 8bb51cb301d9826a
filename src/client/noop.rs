use crate::client::error::ClientResult;
use crate::client::types::{ClientConfig, CustomEvent, Trace, UserDetails};
use crate::client::CountlyClient;

/// Client for execution environments where the real Countly client must not
/// be loaded (browser-style builds). Every operation succeeds and does
/// nothing, so the plugin stays callable without touching any backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledClient;

impl CountlyClient for DisabledClient {
    fn init(&self, _config: &ClientConfig) -> ClientResult<()> {
        Ok(())
    }

    fn track_view(&self, _path: Option<&str>) -> ClientResult<()> {
        Ok(())
    }

    fn add_event(&self, _event: CustomEvent) -> ClientResult<()> {
        Ok(())
    }

    fn change_id(&self, _device_id: &str) -> ClientResult<()> {
        Ok(())
    }

    fn user_details(&self, _details: UserDetails) -> ClientResult<()> {
        Ok(())
    }

    fn track_errors(&self) -> ClientResult<()> {
        Ok(())
    }

    fn track_sessions(&self) -> ClientResult<()> {
        Ok(())
    }

    fn report_trace(&self, _trace: Trace) -> ClientResult<()> {
        Ok(())
    }
}
