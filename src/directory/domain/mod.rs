//! Domain model for the user directory.
//!
//! Users are identified by email address and created lazily on first
//! reference. All infrastructure concerns are kept outside the domain
//! boundary.

mod email;
mod ids;
mod user;

pub use email::EmailAddress;
pub use ids::UserId;
pub use user::{PersistedUserData, User};
