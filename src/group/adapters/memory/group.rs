//! In-memory repository for group persistence tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::group::{
    domain::{Group, GroupId, GroupMember},
    ports::{GroupRepository, GroupRepositoryError, GroupRepositoryResult},
};

/// Thread-safe in-memory group repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGroupRepository {
    state: Arc<RwLock<HashMap<GroupId, Group>>>,
}

impl InMemoryGroupRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    async fn store(&self, group: &Group) -> GroupRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            GroupRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state.contains_key(&group.id()) {
            return Err(GroupRepositoryError::DuplicateGroup(group.id()));
        }

        state.insert(group.id(), group.clone());
        Ok(())
    }

    async fn add_member(
        &self,
        group_id: GroupId,
        member: &GroupMember,
    ) -> GroupRepositoryResult<bool> {
        let mut state = self.state.write().map_err(|err| {
            GroupRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let group = state
            .get_mut(&group_id)
            .ok_or(GroupRepositoryError::NotFound(group_id))?;
        Ok(group.add_member(member.clone()))
    }

    async fn find_by_id(&self, id: GroupId) -> GroupRepositoryResult<Option<Group>> {
        let state = self.state.read().map_err(|err| {
            GroupRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn list_all(&self) -> GroupRepositoryResult<Vec<Group>> {
        let state = self.state.read().map_err(|err| {
            GroupRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut groups: Vec<Group> = state.values().cloned().collect();
        groups.sort_by_key(Group::created_at);
        Ok(groups)
    }
}
