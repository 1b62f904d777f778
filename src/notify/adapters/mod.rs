//! Adapter implementations for the notification gateway port.

pub mod http;
pub mod memory;

pub use http::HttpMailGateway;
pub use memory::RecordingGateway;
