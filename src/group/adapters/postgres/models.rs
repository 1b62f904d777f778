//! Diesel row models for group and invitation persistence.

use super::schema::{group_members, groups, invitations};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for group records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = groups)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GroupRow {
    /// Internal group identifier.
    pub id: uuid::Uuid,
    /// Group name.
    pub name: String,
    /// Optional group description.
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for group records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = groups)]
pub struct NewGroupRow {
    /// Internal group identifier.
    pub id: uuid::Uuid,
    /// Group name.
    pub name: String,
    /// Optional group description.
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Query result row for membership records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = group_members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MemberRow {
    /// Owning group identifier.
    pub group_id: uuid::Uuid,
    /// Member's user identifier.
    pub user_id: uuid::Uuid,
    /// Member's email address.
    pub email: String,
    /// Membership role.
    pub role: String,
    /// When the member was added.
    pub added_at: DateTime<Utc>,
}

/// Insert model for membership records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = group_members)]
pub struct NewMemberRow {
    /// Owning group identifier.
    pub group_id: uuid::Uuid,
    /// Member's user identifier.
    pub user_id: uuid::Uuid,
    /// Member's email address.
    pub email: String,
    /// Membership role.
    pub role: String,
    /// When the member was added.
    pub added_at: DateTime<Utc>,
}

/// Query result row for invitation records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = invitations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InvitationRow {
    /// Internal invitation identifier.
    pub id: uuid::Uuid,
    /// Owning group identifier.
    pub group_id: uuid::Uuid,
    /// Invitee email address.
    pub email: String,
    /// Lifecycle status.
    pub status: String,
    /// Unique accept token.
    pub token: String,
    /// Issue timestamp.
    pub invited_at: DateTime<Utc>,
    /// Acceptance timestamp, when accepted.
    pub accepted_at: Option<DateTime<Utc>>,
}

/// Insert model for invitation records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = invitations)]
pub struct NewInvitationRow {
    /// Internal invitation identifier.
    pub id: uuid::Uuid,
    /// Owning group identifier.
    pub group_id: uuid::Uuid,
    /// Invitee email address.
    pub email: String,
    /// Lifecycle status.
    pub status: String,
    /// Unique accept token.
    pub token: String,
    /// Issue timestamp.
    pub invited_at: DateTime<Utc>,
    /// Acceptance timestamp, when accepted.
    pub accepted_at: Option<DateTime<Utc>>,
}
