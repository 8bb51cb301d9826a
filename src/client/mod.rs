pub mod error;
mod noop;
mod recording;
mod types;

pub use error::{ClientError, ClientErrorCode, ClientResult};
pub use noop::DisabledClient;
pub use recording::{ClientCall, RecordingClient};
pub use types::{ClientConfig, CustomEvent, Trace, UserDetails};

/// Boundary to the Countly client.
///
/// The client owns connection handling, batching, transport, retry and local
/// buffering; implementations of this trait only need to accept the already
/// translated call shapes. The plugin treats the implementation as a
/// process-wide singleton configured exactly once through [`init`], with
/// every other operation assumed to follow that call; ordering across call
/// sites is the host dispatcher's responsibility.
///
/// [`init`]: CountlyClient::init
pub trait CountlyClient: Send + Sync {
    fn init(&self, config: &ClientConfig) -> ClientResult<()>;
    fn track_view(&self, path: Option<&str>) -> ClientResult<()>;
    fn add_event(&self, event: CustomEvent) -> ClientResult<()>;
    fn change_id(&self, device_id: &str) -> ClientResult<()>;
    fn user_details(&self, details: UserDetails) -> ClientResult<()>;
    fn track_errors(&self) -> ClientResult<()>;
    fn track_sessions(&self) -> ClientResult<()>;
    fn report_trace(&self, trace: Trace) -> ClientResult<()>;
}
