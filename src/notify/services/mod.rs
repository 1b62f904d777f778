//! Mail rendering services for notification content.

mod renderer;

pub use renderer::MailRenderer;
