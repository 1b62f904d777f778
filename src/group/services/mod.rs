//! Application services for group membership and invitations.

mod invitation;
mod membership;

pub use invitation::{
    AcceptedInvitation, InvitationService, InvitationServiceConfig, InvitationServiceError,
    InvitationServiceResult, RepeatAcceptance,
};
pub use membership::{GroupService, GroupServiceError, GroupServiceResult};
