//! Service layer for the invitation workflow.
//!
//! Invitations move through a two-state machine: issued as pending, then
//! accepted exactly once into group membership. Both transitions announce
//! themselves by best-effort email; a failed or unrenderable notice is
//! logged and dropped without affecting the workflow.

use crate::directory::{
    domain::EmailAddress,
    ports::{UserRepository, UserRepositoryError},
    services::UserDirectoryService,
};
use crate::group::{
    domain::{Group, GroupId, GroupMember, Invitation, InviteToken, MemberRole},
    ports::{
        GroupRepository, GroupRepositoryError, InvitationRepository, InvitationRepositoryError,
    },
};
use crate::notify::{ports::NotificationGateway, services::MailRenderer};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Behaviour when an already-accepted token is presented again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatAcceptance {
    /// Short-circuit: membership stays intact, nothing is re-persisted,
    /// and no acceptance notice is re-sent.
    #[default]
    Ignore,
    /// Re-persist the invitation and re-send the owner notice, matching
    /// callers that use re-acceptance as a resend mechanism.
    Renotify,
}

/// Configuration for the invitation workflow.
#[derive(Debug, Clone)]
pub struct InvitationServiceConfig {
    accept_link_base: String,
    repeat_acceptance: RepeatAcceptance,
}

impl InvitationServiceConfig {
    /// Creates a configuration with the given accept-link base URL.
    #[must_use]
    pub fn new(accept_link_base: impl Into<String>) -> Self {
        Self {
            accept_link_base: accept_link_base.into(),
            repeat_acceptance: RepeatAcceptance::default(),
        }
    }

    /// Sets the repeat-acceptance behaviour.
    #[must_use]
    pub const fn with_repeat_acceptance(mut self, repeat_acceptance: RepeatAcceptance) -> Self {
        self.repeat_acceptance = repeat_acceptance;
        self
    }
}

/// Outcome of a successful acceptance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedInvitation {
    /// The group the member joined, including the updated membership.
    pub group: Group,
    /// The address the membership was resolved for.
    pub member_email: EmailAddress,
}

/// Service-level errors for invitation workflow operations.
#[derive(Debug, Error)]
pub enum InvitationServiceError {
    /// No invitation matches the presented token.
    #[error("unknown invitation token")]
    UnknownToken,
    /// Group repository operation failed.
    #[error(transparent)]
    Group(#[from] GroupRepositoryError),
    /// Invitation repository operation failed.
    #[error(transparent)]
    Invitation(#[from] InvitationRepositoryError),
    /// Invitee resolution failed.
    #[error(transparent)]
    User(#[from] UserRepositoryError),
}

/// Result type for invitation workflow service operations.
pub type InvitationServiceResult<T> = Result<T, InvitationServiceError>;

/// Invitation workflow orchestration service.
#[derive(Clone)]
pub struct InvitationService<G, I, U, C>
where
    G: GroupRepository,
    I: InvitationRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    groups: Arc<G>,
    invitations: Arc<I>,
    directory: UserDirectoryService<U, C>,
    gateway: Arc<dyn NotificationGateway>,
    renderer: MailRenderer,
    config: InvitationServiceConfig,
    clock: Arc<C>,
}

impl<G, I, U, C> InvitationService<G, I, U, C>
where
    G: GroupRepository,
    I: InvitationRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new invitation workflow service.
    #[must_use]
    pub const fn new(
        groups: Arc<G>,
        invitations: Arc<I>,
        directory: UserDirectoryService<U, C>,
        gateway: Arc<dyn NotificationGateway>,
        renderer: MailRenderer,
        config: InvitationServiceConfig,
        clock: Arc<C>,
    ) -> Self {
        Self {
            groups,
            invitations,
            directory,
            gateway,
            renderer,
            config,
            clock,
        }
    }

    /// Issues an invitation for the given group and emails the invitee an
    /// accept link.
    ///
    /// Tokens are not collision-checked; a clash surfaces as the storage
    /// layer's unique-constraint error. Repeated invites for the same
    /// (group, email) pair each get their own independently redeemable
    /// token.
    ///
    /// # Errors
    ///
    /// Returns [`InvitationServiceError::Group`] wrapping
    /// [`GroupRepositoryError::NotFound`] when the group does not exist, or
    /// other variants when persistence fails.
    pub async fn invite(
        &self,
        group_id: GroupId,
        email: &EmailAddress,
    ) -> InvitationServiceResult<Invitation> {
        let group = self.find_group(group_id).await?;

        let invitation = Invitation::new(group_id, email.clone(), &*self.clock);
        self.invitations.store(&invitation).await?;

        let accept_link = self.accept_link(invitation.token());
        match self.renderer.invitation_email(
            email,
            group.name(),
            group.description(),
            &accept_link,
        ) {
            Ok(message) => {
                if !self.gateway.send(&message).await {
                    tracing::warn!(
                        group_id = %group_id,
                        invitee = %email,
                        "invitation email was not delivered"
                    );
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "invitation email could not be rendered");
            }
        }

        Ok(invitation)
    }

    /// Accepts an invitation by token and admits the member to the group.
    ///
    /// When `user_email` is absent the invitation's own stored address is
    /// used (self-accept). Membership is append-if-absent, so accepting a
    /// second token for an existing member never duplicates the entry. On a
    /// fresh acceptance the group owner receives a best-effort notice; what
    /// a repeated acceptance of the same token does is governed by
    /// [`RepeatAcceptance`].
    ///
    /// # Errors
    ///
    /// Returns [`InvitationServiceError::UnknownToken`] when the token does
    /// not resolve (nothing is mutated in that case), or other variants
    /// when persistence fails.
    pub async fn accept(
        &self,
        token: &InviteToken,
        user_email: Option<&EmailAddress>,
    ) -> InvitationServiceResult<AcceptedInvitation> {
        let Some(mut invitation) = self.invitations.find_by_token(token).await? else {
            return Err(InvitationServiceError::UnknownToken);
        };

        let member_email = user_email
            .cloned()
            .unwrap_or_else(|| invitation.email().clone());
        let mut group = self.find_group(invitation.group_id()).await?;

        if invitation.is_accepted() && self.config.repeat_acceptance == RepeatAcceptance::Ignore {
            return Ok(AcceptedInvitation {
                group,
                member_email,
            });
        }

        invitation.mark_accepted(&*self.clock);
        self.invitations.update(&invitation).await?;

        let member = self.directory.get_or_create(&member_email, None).await?;
        let entry = GroupMember::new(&member, MemberRole::Member, &*self.clock);
        if group.add_member(entry.clone()) {
            self.groups.add_member(group.id(), &entry).await?;
        }

        self.notify_owner(&group, &member_email).await;

        Ok(AcceptedInvitation {
            group,
            member_email,
        })
    }

    /// Returns all invitations issued for the given group, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`InvitationServiceError::Invitation`] when persistence
    /// lookup fails.
    pub async fn list_for_group(
        &self,
        group_id: GroupId,
    ) -> InvitationServiceResult<Vec<Invitation>> {
        Ok(self.invitations.list_for_group(group_id).await?)
    }

    async fn find_group(&self, id: GroupId) -> InvitationServiceResult<Group> {
        self.groups
            .find_by_id(id)
            .await?
            .ok_or_else(|| GroupRepositoryError::NotFound(id).into())
    }

    fn accept_link(&self, token: &InviteToken) -> String {
        format!(
            "{}/invites/accept/{}",
            self.config.accept_link_base.trim_end_matches('/'),
            token
        )
    }

    async fn notify_owner(&self, group: &Group, invitee: &EmailAddress) {
        let Some(owner) = group.owner() else {
            tracing::warn!(group_id = %group.id(), "group has no owner to notify");
            return;
        };

        let owner_name = match self.directory.find_by_email(owner.email()).await {
            Ok(Some(user)) => user.display_name().to_owned(),
            _ => owner.email().as_str().to_owned(),
        };

        match self
            .renderer
            .acceptance_email(owner.email(), &owner_name, invitee, group.name())
        {
            Ok(message) => {
                if !self.gateway.send(&message).await {
                    tracing::warn!(
                        group_id = %group.id(),
                        owner = %owner.email(),
                        "acceptance notice was not delivered"
                    );
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "acceptance notice could not be rendered");
            }
        }
    }
}
