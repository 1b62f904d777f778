//! Group aggregate root.

use super::{GroupId, GroupMember, MemberRole};
use crate::directory::domain::{EmailAddress, User};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Group aggregate root owning its membership entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    id: GroupId,
    name: String,
    description: Option<String>,
    members: Vec<GroupMember>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted group aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedGroupData {
    /// Persisted group identifier.
    pub id: GroupId,
    /// Persisted group name.
    pub name: String,
    /// Persisted group description, if any.
    pub description: Option<String>,
    /// Persisted membership entries in insertion order.
    pub members: Vec<GroupMember>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Creates a group with the creator installed as its owner member.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        creator: &User,
        clock: &impl Clock,
    ) -> Self {
        let owner = GroupMember::new(creator, MemberRole::Owner, clock);
        Self {
            id: GroupId::new(),
            name: name.into(),
            description,
            members: vec![owner],
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a group from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedGroupData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            members: data.members,
            created_at: data.created_at,
        }
    }

    /// Returns the group identifier.
    #[must_use]
    pub const fn id(&self) -> GroupId {
        self.id
    }

    /// Returns the group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the group description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the membership entries in insertion order.
    #[must_use]
    pub fn members(&self) -> &[GroupMember] {
        &self.members
    }

    /// Returns the owner membership entry.
    ///
    /// Every group created through [`Group::new`] has one; a missing owner
    /// can only come from inconsistent persisted data.
    #[must_use]
    pub fn owner(&self) -> Option<&GroupMember> {
        self.members.iter().find(|member| member.is_owner())
    }

    /// Returns whether the given address already belongs to the membership.
    #[must_use]
    pub fn is_member(&self, email: &EmailAddress) -> bool {
        self.members.iter().any(|member| member.email() == email)
    }

    /// Appends a membership entry unless one exists for the same address.
    ///
    /// Returns whether the membership grew; a duplicate entry is dropped.
    pub fn add_member(&mut self, member: GroupMember) -> bool {
        if self.is_member(member.email()) {
            return false;
        }
        self.members.push(member);
        true
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
