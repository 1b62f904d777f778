//! Diesel schema for user directory persistence.

diesel::table! {
    /// User records keyed by unique email address.
    users (id) {
        /// Internal user identifier.
        id -> Uuid,
        /// Unique email address.
        #[max_length = 255]
        email -> Varchar,
        /// Optional display name captured at creation.
        #[max_length = 255]
        full_name -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
