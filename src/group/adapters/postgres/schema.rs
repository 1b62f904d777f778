//! Diesel schema for group and invitation persistence.

diesel::table! {
    /// Group records.
    groups (id) {
        /// Internal group identifier.
        id -> Uuid,
        /// Group name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional group description.
        description -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Membership rows linking users to groups with an explicit role.
    group_members (group_id, user_id) {
        /// Owning group identifier.
        group_id -> Uuid,
        /// Member's user identifier.
        user_id -> Uuid,
        /// Member's email address, denormalized for aggregate loads.
        #[max_length = 255]
        email -> Varchar,
        /// Membership role.
        #[max_length = 50]
        role -> Varchar,
        /// When the member was added.
        added_at -> Timestamptz,
    }
}

diesel::table! {
    /// Invitation records with unique single-use tokens.
    invitations (id) {
        /// Internal invitation identifier.
        id -> Uuid,
        /// Owning group identifier.
        group_id -> Uuid,
        /// Invitee email address.
        #[max_length = 255]
        email -> Varchar,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Unique accept token.
        #[max_length = 64]
        token -> Varchar,
        /// Issue timestamp.
        invited_at -> Timestamptz,
        /// Acceptance timestamp, when accepted.
        accepted_at -> Nullable<Timestamptz>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(groups, group_members, invitations);
