//! `PostgreSQL` repository implementation for group storage.

use std::collections::HashMap;

use super::{
    models::{GroupRow, MemberRow, NewGroupRow, NewMemberRow},
    schema::{group_members, groups},
};
use crate::directory::domain::{EmailAddress, UserId};
use crate::group::{
    domain::{Group, GroupId, GroupMember, MemberRole, PersistedGroupData},
    ports::{GroupRepository, GroupRepositoryError, GroupRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by group adapters.
pub type GroupPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed group repository.
#[derive(Debug, Clone)]
pub struct PostgresGroupRepository {
    pool: GroupPgPool,
}

impl PostgresGroupRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: GroupPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> GroupRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> GroupRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(GroupRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(GroupRepositoryError::persistence)?
    }
}

#[async_trait]
impl GroupRepository for PostgresGroupRepository {
    async fn store(&self, group: &Group) -> GroupRepositoryResult<()> {
        let group_id = group.id();
        let new_group = NewGroupRow {
            id: group.id().into_inner(),
            name: group.name().to_owned(),
            description: group.description().map(str::to_owned),
            created_at: group.created_at(),
        };
        let member_rows: Vec<NewMemberRow> = group
            .members()
            .iter()
            .map(|member| to_member_row(group_id, member))
            .collect();

        self.run_blocking(move |connection| {
            // Group and owner membership persist in one transaction so a
            // crash cannot leave a memberless group behind.
            connection
                .transaction::<_, DieselError, _>(|conn| {
                    diesel::insert_into(groups::table)
                        .values(&new_group)
                        .execute(conn)?;
                    diesel::insert_into(group_members::table)
                        .values(&member_rows)
                        .execute(conn)?;
                    Ok(())
                })
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        GroupRepositoryError::DuplicateGroup(group_id)
                    }
                    _ => GroupRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn add_member(
        &self,
        group_id: GroupId,
        member: &GroupMember,
    ) -> GroupRepositoryResult<bool> {
        let new_row = to_member_row(group_id, member);

        self.run_blocking(move |connection| {
            let group_exists = groups::table
                .filter(groups::id.eq(group_id.into_inner()))
                .count()
                .get_result::<i64>(connection)
                .map_err(GroupRepositoryError::persistence)?
                > 0;
            if !group_exists {
                return Err(GroupRepositoryError::NotFound(group_id));
            }

            let inserted = diesel::insert_into(group_members::table)
                .values(&new_row)
                .on_conflict_do_nothing()
                .execute(connection)
                .map_err(GroupRepositoryError::persistence)?;
            Ok(inserted > 0)
        })
        .await
    }

    async fn find_by_id(&self, id: GroupId) -> GroupRepositoryResult<Option<Group>> {
        self.run_blocking(move |connection| {
            let row = groups::table
                .filter(groups::id.eq(id.into_inner()))
                .select(GroupRow::as_select())
                .first::<GroupRow>(connection)
                .optional()
                .map_err(GroupRepositoryError::persistence)?;

            let Some(group_row) = row else {
                return Ok(None);
            };

            let member_rows = group_members::table
                .filter(group_members::group_id.eq(id.into_inner()))
                .order(group_members::added_at.asc())
                .select(MemberRow::as_select())
                .load::<MemberRow>(connection)
                .map_err(GroupRepositoryError::persistence)?;

            rows_to_group(group_row, member_rows).map(Some)
        })
        .await
    }

    async fn list_all(&self) -> GroupRepositoryResult<Vec<Group>> {
        self.run_blocking(|connection| {
            let group_rows = groups::table
                .order(groups::created_at.asc())
                .select(GroupRow::as_select())
                .load::<GroupRow>(connection)
                .map_err(GroupRepositoryError::persistence)?;

            let member_rows = group_members::table
                .order((group_members::group_id.asc(), group_members::added_at.asc()))
                .select(MemberRow::as_select())
                .load::<MemberRow>(connection)
                .map_err(GroupRepositoryError::persistence)?;

            let mut members_by_group: HashMap<uuid::Uuid, Vec<MemberRow>> = HashMap::new();
            for member_row in member_rows {
                members_by_group
                    .entry(member_row.group_id)
                    .or_default()
                    .push(member_row);
            }

            group_rows
                .into_iter()
                .map(|group_row| {
                    let members = members_by_group.remove(&group_row.id).unwrap_or_default();
                    rows_to_group(group_row, members)
                })
                .collect()
        })
        .await
    }
}

fn to_member_row(group_id: GroupId, member: &GroupMember) -> NewMemberRow {
    NewMemberRow {
        group_id: group_id.into_inner(),
        user_id: member.user_id().into_inner(),
        email: member.email().as_str().to_owned(),
        role: member.role().as_str().to_owned(),
        added_at: member.added_at(),
    }
}

fn rows_to_group(group_row: GroupRow, member_rows: Vec<MemberRow>) -> GroupRepositoryResult<Group> {
    let members = member_rows
        .into_iter()
        .map(row_to_member)
        .collect::<GroupRepositoryResult<Vec<GroupMember>>>()?;

    Ok(Group::from_persisted(PersistedGroupData {
        id: GroupId::from_uuid(group_row.id),
        name: group_row.name,
        description: group_row.description,
        members,
        created_at: group_row.created_at,
    }))
}

fn row_to_member(row: MemberRow) -> GroupRepositoryResult<GroupMember> {
    let role = MemberRole::try_from(row.role.as_str())
        .map_err(GroupRepositoryError::invalid_persisted_data)?;
    Ok(GroupMember::from_persisted(
        UserId::from_uuid(row.user_id),
        EmailAddress::new(row.email),
        role,
        row.added_at,
    ))
}
