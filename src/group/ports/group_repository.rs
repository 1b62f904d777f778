//! Repository port for group persistence and membership management.

use crate::group::domain::{Group, GroupId, GroupMember};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for group repository operations.
pub type GroupRepositoryResult<T> = Result<T, GroupRepositoryError>;

/// Group persistence contract.
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Stores a new group together with every membership entry it carries.
    ///
    /// The write is atomic: either the group and its owner membership both
    /// persist, or neither does.
    ///
    /// # Errors
    ///
    /// Returns [`GroupRepositoryError::DuplicateGroup`] when the group ID
    /// already exists.
    async fn store(&self, group: &Group) -> GroupRepositoryResult<()>;

    /// Appends a membership entry unless one exists for the same address.
    ///
    /// Returns whether the membership grew.
    ///
    /// # Errors
    ///
    /// Returns [`GroupRepositoryError::NotFound`] when the group does not
    /// exist.
    async fn add_member(
        &self,
        group_id: GroupId,
        member: &GroupMember,
    ) -> GroupRepositoryResult<bool>;

    /// Finds a group, with its membership, by identifier.
    ///
    /// Returns `None` when the group does not exist.
    async fn find_by_id(&self, id: GroupId) -> GroupRepositoryResult<Option<Group>>;

    /// Returns all groups with their memberships.
    async fn list_all(&self) -> GroupRepositoryResult<Vec<Group>>;
}

/// Errors returned by group repository implementations.
#[derive(Debug, Clone, Error)]
pub enum GroupRepositoryError {
    /// A group with the same identifier already exists.
    #[error("duplicate group identifier: {0}")]
    DuplicateGroup(GroupId),

    /// The group was not found.
    #[error("group not found: {0}")]
    NotFound(GroupId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl GroupRepositoryError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
