//! Countly adapter plugin for plugin-based analytics event dispatchers.
//!
//! The crate translates a dispatcher's generic page, track, identify and
//! performance-trace events into the call shapes the Countly client expects,
//! and forwards them. The client itself is an injected
//! [`client::CountlyClient`] implementation: hosts running server-side wire
//! in the real network-capable client, browser-style builds use the shipped
//! [`client::DisabledClient`], and tests observe traffic through
//! [`client::RecordingClient`]. The adapter holds no state beyond its
//! immutable settings and the client handle; batching, transport, retry and
//! identity lifecycle all stay on the client's side of the seam.

pub mod client;
pub mod event;
pub mod plugin;
