//! Port contracts for group and invitation persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by membership and
//! invitation services.

pub mod group_repository;
pub mod invitation_repository;

pub use group_repository::{GroupRepository, GroupRepositoryError, GroupRepositoryResult};
pub use invitation_repository::{
    InvitationRepository, InvitationRepositoryError, InvitationRepositoryResult,
};
