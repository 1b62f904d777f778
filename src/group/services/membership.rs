//! Service layer for group creation and listing.

use crate::directory::{
    domain::EmailAddress,
    ports::{UserRepository, UserRepositoryError},
    services::UserDirectoryService,
};
use crate::group::{
    domain::{Group, GroupId},
    ports::{GroupRepository, GroupRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for group registry operations.
#[derive(Debug, Error)]
pub enum GroupServiceError {
    /// Group repository operation failed.
    #[error(transparent)]
    Repository(#[from] GroupRepositoryError),
    /// Creator resolution failed.
    #[error(transparent)]
    User(#[from] UserRepositoryError),
}

/// Result type for group registry service operations.
pub type GroupServiceResult<T> = Result<T, GroupServiceError>;

/// Group registry orchestration service.
#[derive(Clone)]
pub struct GroupService<G, U, C>
where
    G: GroupRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    groups: Arc<G>,
    directory: UserDirectoryService<U, C>,
    clock: Arc<C>,
}

impl<G, U, C> GroupService<G, U, C>
where
    G: GroupRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new group registry service.
    #[must_use]
    pub const fn new(
        groups: Arc<G>,
        directory: UserDirectoryService<U, C>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            groups,
            directory,
            clock,
        }
    }

    /// Creates a group with the creator resolved and installed as owner.
    ///
    /// The creator is resolved through the user directory (created on first
    /// reference), and the group persists together with its owner
    /// membership in one atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`GroupServiceError`] when creator resolution or persistence
    /// fails.
    pub async fn create_group(
        &self,
        name: impl Into<String> + Send,
        description: Option<String>,
        creator_email: &EmailAddress,
    ) -> GroupServiceResult<Group> {
        let creator = self.directory.get_or_create(creator_email, None).await?;
        let group = Group::new(name, description, &creator, &*self.clock);
        self.groups.store(&group).await?;
        Ok(group)
    }

    /// Returns all groups with their memberships.
    ///
    /// # Errors
    ///
    /// Returns [`GroupServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_groups(&self) -> GroupServiceResult<Vec<Group>> {
        Ok(self.groups.list_all().await?)
    }

    /// Finds a group by identifier.
    ///
    /// Returns `Ok(None)` when the group does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`GroupServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: GroupId) -> GroupServiceResult<Option<Group>> {
        Ok(self.groups.find_by_id(id).await?)
    }
}
