//! `PostgreSQL` adapters for group and invitation persistence.

mod group;
mod invitation;
mod models;
mod schema;

pub use group::{GroupPgPool, PostgresGroupRepository};
pub use invitation::PostgresInvitationRepository;
