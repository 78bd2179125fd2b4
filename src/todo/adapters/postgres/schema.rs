//! Diesel schema for todo persistence.

diesel::table! {
    /// Todo records.
    todos (id) {
        /// Storage-assigned identifier.
        id -> Int8,
        /// Trimmed, non-empty title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional description.
        description -> Nullable<Text>,
        /// Completion flag.
        completed -> Bool,
        /// Priority literal.
        #[max_length = 20]
        priority -> Varchar,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}
