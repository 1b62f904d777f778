//! Domain model for outbound notifications.

mod message;

pub use message::EmailMessage;
