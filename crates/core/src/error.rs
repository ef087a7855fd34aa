#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("All fields are required.")]
    MissingFields,

    #[error("Event not found: {slug}")]
    EventNotFound { slug: String },

    #[error("Submissions are closed for event {slug}")]
    SubmissionsClosed { slug: String },

    #[error("Minimum {required} words required. You have {count} words.")]
    InsufficientWords { count: usize, required: usize },

    #[error("An event with slug '{slug}' already exists")]
    DuplicateSlug { slug: String },

    #[error("Invalid admin credentials")]
    Unauthorized,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}
