//! `PostgreSQL` repository implementation for invitation storage.

use super::{
    models::{InvitationRow, NewInvitationRow},
    schema::invitations,
};
use crate::directory::domain::EmailAddress;
use crate::group::{
    domain::{
        GroupId, Invitation, InvitationId, InvitationStatus, InviteToken, PersistedInvitationData,
    },
    ports::{InvitationRepository, InvitationRepositoryError, InvitationRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

use super::group::GroupPgPool;

/// `PostgreSQL`-backed invitation repository.
#[derive(Debug, Clone)]
pub struct PostgresInvitationRepository {
    pool: GroupPgPool,
}

impl PostgresInvitationRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: GroupPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> InvitationRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> InvitationRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(InvitationRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(InvitationRepositoryError::persistence)?
    }
}

#[async_trait]
impl InvitationRepository for PostgresInvitationRepository {
    async fn store(&self, invitation: &Invitation) -> InvitationRepositoryResult<()> {
        let invitation_id = invitation.id();
        let new_row = to_new_row(invitation);

        self.run_blocking(move |connection| {
            diesel::insert_into(invitations::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_token_unique_violation(info.as_ref()) =>
                    {
                        InvitationRepositoryError::DuplicateToken
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        InvitationRepositoryError::DuplicateInvitation(invitation_id)
                    }
                    _ => InvitationRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, invitation: &Invitation) -> InvitationRepositoryResult<()> {
        let invitation_id = invitation.id();
        let status = invitation.status().as_str().to_owned();
        let accepted_at = invitation.accepted_at();

        self.run_blocking(move |connection| {
            let updated = diesel::update(
                invitations::table.filter(invitations::id.eq(invitation_id.into_inner())),
            )
            .set((
                invitations::status.eq(&status),
                invitations::accepted_at.eq(accepted_at),
            ))
            .execute(connection)
            .map_err(InvitationRepositoryError::persistence)?;

            if updated == 0 {
                return Err(InvitationRepositoryError::NotFound(invitation_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_token(
        &self,
        token: &InviteToken,
    ) -> InvitationRepositoryResult<Option<Invitation>> {
        let lookup = token.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = invitations::table
                .filter(invitations::token.eq(&lookup))
                .select(InvitationRow::as_select())
                .first::<InvitationRow>(connection)
                .optional()
                .map_err(InvitationRepositoryError::persistence)?;
            row.map(row_to_invitation).transpose()
        })
        .await
    }

    async fn list_for_group(
        &self,
        group_id: GroupId,
    ) -> InvitationRepositoryResult<Vec<Invitation>> {
        self.run_blocking(move |connection| {
            let rows = invitations::table
                .filter(invitations::group_id.eq(group_id.into_inner()))
                .order(invitations::invited_at.asc())
                .select(InvitationRow::as_select())
                .load::<InvitationRow>(connection)
                .map_err(InvitationRepositoryError::persistence)?;
            rows.into_iter().map(row_to_invitation).collect()
        })
        .await
    }
}

fn to_new_row(invitation: &Invitation) -> NewInvitationRow {
    NewInvitationRow {
        id: invitation.id().into_inner(),
        group_id: invitation.group_id().into_inner(),
        email: invitation.email().as_str().to_owned(),
        status: invitation.status().as_str().to_owned(),
        token: invitation.token().as_str().to_owned(),
        invited_at: invitation.invited_at(),
        accepted_at: invitation.accepted_at(),
    }
}

fn row_to_invitation(row: InvitationRow) -> InvitationRepositoryResult<Invitation> {
    let status = InvitationStatus::try_from(row.status.as_str())
        .map_err(InvitationRepositoryError::invalid_persisted_data)?;

    Ok(Invitation::from_persisted(PersistedInvitationData {
        id: InvitationId::from_uuid(row.id),
        group_id: GroupId::from_uuid(row.group_id),
        email: EmailAddress::new(row.email),
        status,
        token: InviteToken::from_string(row.token),
        invited_at: row.invited_at,
        accepted_at: row.accepted_at,
    }))
}

fn is_token_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "invitations_token_key")
}
