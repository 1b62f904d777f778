//! Diesel schema for task persistence.

diesel::table! {
    /// Task records scoped to a group.
    tasks (id) {
        /// Internal task identifier.
        id -> Uuid,
        /// Owning group identifier.
        group_id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional task description.
        description -> Nullable<Text>,
        /// Optional assignee email address.
        #[max_length = 255]
        assignee_email -> Nullable<Varchar>,
        /// Progression status.
        #[max_length = 50]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
    }
}
