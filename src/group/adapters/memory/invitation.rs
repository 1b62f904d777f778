//! In-memory repository for invitation persistence tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::group::{
    domain::{GroupId, Invitation, InvitationId, InviteToken},
    ports::{InvitationRepository, InvitationRepositoryError, InvitationRepositoryResult},
};

/// Thread-safe in-memory invitation repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInvitationRepository {
    state: Arc<RwLock<InMemoryInvitationState>>,
}

#[derive(Debug, Default)]
struct InMemoryInvitationState {
    invitations: HashMap<InvitationId, Invitation>,
    token_index: HashMap<InviteToken, InvitationId>,
}

impl InMemoryInvitationRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InvitationRepository for InMemoryInvitationRepository {
    async fn store(&self, invitation: &Invitation) -> InvitationRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            InvitationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state.invitations.contains_key(&invitation.id()) {
            return Err(InvitationRepositoryError::DuplicateInvitation(
                invitation.id(),
            ));
        }

        if state.token_index.contains_key(invitation.token()) {
            return Err(InvitationRepositoryError::DuplicateToken);
        }

        state
            .token_index
            .insert(invitation.token().clone(), invitation.id());
        state
            .invitations
            .insert(invitation.id(), invitation.clone());
        Ok(())
    }

    async fn update(&self, invitation: &Invitation) -> InvitationRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            InvitationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if !state.invitations.contains_key(&invitation.id()) {
            return Err(InvitationRepositoryError::NotFound(invitation.id()));
        }

        state
            .invitations
            .insert(invitation.id(), invitation.clone());
        Ok(())
    }

    async fn find_by_token(
        &self,
        token: &InviteToken,
    ) -> InvitationRepositoryResult<Option<Invitation>> {
        let state = self.state.read().map_err(|err| {
            InvitationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let invitation = state
            .token_index
            .get(token)
            .and_then(|id| state.invitations.get(id))
            .cloned();
        Ok(invitation)
    }

    async fn list_for_group(
        &self,
        group_id: GroupId,
    ) -> InvitationRepositoryResult<Vec<Invitation>> {
        let state = self.state.read().map_err(|err| {
            InvitationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut invitations: Vec<Invitation> = state
            .invitations
            .values()
            .filter(|invitation| invitation.group_id() == group_id)
            .cloned()
            .collect();
        invitations.sort_by_key(Invitation::invited_at);
        Ok(invitations)
    }
}
