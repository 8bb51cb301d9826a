use std::sync::{Arc, Mutex};

use crate::client::error::ClientResult;
use crate::client::types::{ClientConfig, CustomEvent, Trace, UserDetails};
use crate::client::CountlyClient;

/// One client invocation as observed by [`RecordingClient`].
#[derive(Clone, Debug, PartialEq)]
pub enum ClientCall {
    Init(ClientConfig),
    TrackView(Option<String>),
    AddEvent(CustomEvent),
    ChangeId(String),
    UserDetails(UserDetails),
    TrackErrors,
    TrackSessions,
    ReportTrace(Trace),
}

/// In-memory client that records every call in order.
///
/// This is the substitutable stub for tests and for embedders that want to
/// observe plugin traffic without a network-capable client. Clones share the
/// same call log.
#[derive(Clone, Debug, Default)]
pub struct RecordingClient {
    calls: Arc<Mutex<Vec<ClientCall>>>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the calls recorded so far, in invocation order.
    pub fn calls(&self) -> Vec<ClientCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: ClientCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl CountlyClient for RecordingClient {
    fn init(&self, config: &ClientConfig) -> ClientResult<()> {
        self.record(ClientCall::Init(config.clone()));
        Ok(())
    }

    fn track_view(&self, path: Option<&str>) -> ClientResult<()> {
        self.record(ClientCall::TrackView(path.map(str::to_owned)));
        Ok(())
    }

    fn add_event(&self, event: CustomEvent) -> ClientResult<()> {
        self.record(ClientCall::AddEvent(event));
        Ok(())
    }

    fn change_id(&self, device_id: &str) -> ClientResult<()> {
        self.record(ClientCall::ChangeId(device_id.to_owned()));
        Ok(())
    }

    fn user_details(&self, details: UserDetails) -> ClientResult<()> {
        self.record(ClientCall::UserDetails(details));
        Ok(())
    }

    fn track_errors(&self) -> ClientResult<()> {
        self.record(ClientCall::TrackErrors);
        Ok(())
    }

    fn track_sessions(&self) -> ClientResult<()> {
        self.record(ClientCall::TrackSessions);
        Ok(())
    }

    fn report_trace(&self, trace: Trace) -> ClientResult<()> {
        self.record(ClientCall::ReportTrace(trace));
        Ok(())
    }
}
