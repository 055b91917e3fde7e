//! Diesel schema for board persistence.

diesel::table! {
    /// Project records linked to external repositories.
    projects (id) {
        /// Internal project identifier.
        id -> Uuid,
        /// Optional short alphanumeric project key.
        #[max_length = 50]
        key -> Nullable<Varchar>,
        /// External repository identity, unique across projects.
        #[max_length = 255]
        repo_full_name -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Task records owned by a project.
    tasks (id) {
        /// Internal task identifier.
        id -> Uuid,
        /// Owning project identifier.
        project_id -> Uuid,
        /// Human-facing task key, unique within the project.
        #[max_length = 100]
        key -> Varchar,
        /// Workflow status.
        #[max_length = 50]
        status -> Varchar,
        /// Message of the last commit that touched this task.
        last_commit_message -> Nullable<Text>,
        /// URL of the last commit that touched this task.
        #[max_length = 1024]
        last_commit_url -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(tasks -> projects (project_id));
diesel::allow_tables_to_appear_in_same_query!(projects, tasks);
