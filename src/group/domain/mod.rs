//! Domain model for groups, membership, and invitations.
//!
//! A group owns its membership entries and invitations. The creator is
//! recorded as an explicit [`MemberRole::Owner`] entry rather than being
//! inferred from insertion order, and invitation status only ever moves
//! from pending to accepted.

mod error;
mod group;
mod ids;
mod invitation;
mod member;
mod token;

pub use error::{ParseInvitationStatusError, ParseMemberRoleError};
pub use group::{Group, PersistedGroupData};
pub use ids::{GroupId, InvitationId};
pub use invitation::{Invitation, InvitationStatus, PersistedInvitationData};
pub use member::{GroupMember, MemberRole};
pub use token::InviteToken;
