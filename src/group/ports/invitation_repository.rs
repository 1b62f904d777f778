//! Repository port for invitation persistence and token lookup.

use crate::group::domain::{GroupId, Invitation, InvitationId, InviteToken};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for invitation repository operations.
pub type InvitationRepositoryResult<T> = Result<T, InvitationRepositoryError>;

/// Invitation persistence contract.
///
/// Token uniqueness is enforced by the storage layer; generated tokens are
/// never collision-checked up front, so a clash surfaces as
/// [`InvitationRepositoryError::DuplicateToken`].
#[async_trait]
pub trait InvitationRepository: Send + Sync {
    /// Stores a new invitation.
    ///
    /// # Errors
    ///
    /// Returns [`InvitationRepositoryError::DuplicateInvitation`] when the
    /// invitation ID already exists or
    /// [`InvitationRepositoryError::DuplicateToken`] when the token is
    /// already in use.
    async fn store(&self, invitation: &Invitation) -> InvitationRepositoryResult<()>;

    /// Persists changes to an existing invitation (status, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`InvitationRepositoryError::NotFound`] when the invitation
    /// does not exist.
    async fn update(&self, invitation: &Invitation) -> InvitationRepositoryResult<()>;

    /// Finds an invitation by token.
    ///
    /// Returns `None` when no invitation carries the token.
    async fn find_by_token(
        &self,
        token: &InviteToken,
    ) -> InvitationRepositoryResult<Option<Invitation>>;

    /// Returns all invitations issued for the given group, oldest first.
    async fn list_for_group(
        &self,
        group_id: GroupId,
    ) -> InvitationRepositoryResult<Vec<Invitation>>;
}

/// Errors returned by invitation repository implementations.
#[derive(Debug, Clone, Error)]
pub enum InvitationRepositoryError {
    /// An invitation with the same identifier already exists.
    #[error("duplicate invitation identifier: {0}")]
    DuplicateInvitation(InvitationId),

    /// An invitation with the same token already exists.
    #[error("duplicate invitation token")]
    DuplicateToken,

    /// The invitation was not found.
    #[error("invitation not found: {0}")]
    NotFound(InvitationId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl InvitationRepositoryError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
