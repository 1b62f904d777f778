//! Membership entries linking users to groups.

use super::ParseMemberRoleError;
use crate::directory::domain::{EmailAddress, User, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Role a member holds within a group.
///
/// The creator is recorded as [`MemberRole::Owner`] so owner identity never
/// depends on the order membership rows happen to be read back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    /// The member who created the group.
    Owner,
    /// A member admitted through an accepted invitation.
    Member,
}

impl MemberRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Member => "member",
        }
    }
}

impl TryFrom<&str> for MemberRole {
    type Error = ParseMemberRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "owner" => Ok(Self::Owner),
            "member" => Ok(Self::Member),
            _ => Err(ParseMemberRoleError(value.to_owned())),
        }
    }
}

/// A single membership entry within a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    user_id: UserId,
    email: EmailAddress,
    role: MemberRole,
    added_at: DateTime<Utc>,
}

impl GroupMember {
    /// Creates a membership entry for the given user.
    #[must_use]
    pub fn new(user: &User, role: MemberRole, clock: &impl Clock) -> Self {
        Self {
            user_id: user.id(),
            email: user.email().clone(),
            role,
            added_at: clock.utc(),
        }
    }

    /// Reconstructs a membership entry from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        user_id: UserId,
        email: EmailAddress,
        role: MemberRole,
        added_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            email,
            role,
            added_at,
        }
    }

    /// Returns the member's user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the member's email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the member's role.
    #[must_use]
    pub const fn role(&self) -> MemberRole {
        self.role
    }

    /// Returns whether this entry is the group owner.
    #[must_use]
    pub fn is_owner(&self) -> bool {
        self.role == MemberRole::Owner
    }

    /// Returns when the member was added.
    #[must_use]
    pub const fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }
}
