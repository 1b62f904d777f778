//! Invitation aggregate and its status state machine.

use super::{GroupId, InvitationId, InviteToken, ParseInvitationStatusError};
use crate::directory::domain::EmailAddress;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Invitation lifecycle status.
///
/// The transition is monotonic: once accepted, an invitation never returns
/// to pending. No expired or rejected state exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    /// Issued and awaiting acceptance.
    Pending,
    /// Redeemed; the invitee joined the group.
    Accepted,
}

impl InvitationStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
        }
    }
}

impl TryFrom<&str> for InvitationStatus {
    type Error = ParseInvitationStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            _ => Err(ParseInvitationStatusError(value.to_owned())),
        }
    }
}

/// A single-use group-join invitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    id: InvitationId,
    group_id: GroupId,
    email: EmailAddress,
    status: InvitationStatus,
    token: InviteToken,
    invited_at: DateTime<Utc>,
    accepted_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted invitation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedInvitationData {
    /// Persisted invitation identifier.
    pub id: InvitationId,
    /// Persisted owning group identifier.
    pub group_id: GroupId,
    /// Persisted invitee address.
    pub email: EmailAddress,
    /// Persisted lifecycle status.
    pub status: InvitationStatus,
    /// Persisted token.
    pub token: InviteToken,
    /// Persisted issue timestamp.
    pub invited_at: DateTime<Utc>,
    /// Persisted acceptance timestamp, if accepted.
    pub accepted_at: Option<DateTime<Utc>>,
}

impl Invitation {
    /// Creates a pending invitation with a freshly generated token.
    #[must_use]
    pub fn new(group_id: GroupId, email: EmailAddress, clock: &impl Clock) -> Self {
        Self {
            id: InvitationId::new(),
            group_id,
            email,
            status: InvitationStatus::Pending,
            token: InviteToken::generate(),
            invited_at: clock.utc(),
            accepted_at: None,
        }
    }

    /// Reconstructs an invitation from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedInvitationData) -> Self {
        Self {
            id: data.id,
            group_id: data.group_id,
            email: data.email,
            status: data.status,
            token: data.token,
            invited_at: data.invited_at,
            accepted_at: data.accepted_at,
        }
    }

    /// Returns the invitation identifier.
    #[must_use]
    pub const fn id(&self) -> InvitationId {
        self.id
    }

    /// Returns the owning group identifier.
    #[must_use]
    pub const fn group_id(&self) -> GroupId {
        self.group_id
    }

    /// Returns the invitee address recorded when the invitation was issued.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> InvitationStatus {
        self.status
    }

    /// Returns whether the invitation has been accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.status == InvitationStatus::Accepted
    }

    /// Returns the token.
    #[must_use]
    pub const fn token(&self) -> &InviteToken {
        &self.token
    }

    /// Returns the issue timestamp.
    #[must_use]
    pub const fn invited_at(&self) -> DateTime<Utc> {
        self.invited_at
    }

    /// Returns the acceptance timestamp, if the invitation was accepted.
    #[must_use]
    pub const fn accepted_at(&self) -> Option<DateTime<Utc>> {
        self.accepted_at
    }

    /// Marks the invitation accepted.
    ///
    /// The transition is idempotent: a repeat call keeps the original
    /// acceptance timestamp.
    pub fn mark_accepted(&mut self, clock: &impl Clock) {
        if self.is_accepted() {
            return;
        }
        self.status = InvitationStatus::Accepted;
        self.accepted_at = Some(clock.utc());
    }
}
