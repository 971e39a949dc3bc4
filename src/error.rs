use thiserror::Error;

/// Errors that can occur while setting up or running an extraction.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// The options cannot be used together.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// The document exceeds the configured element limit.
    #[error("document has {count} elements, limit is {limit}")]
    TooManyElements { count: usize, limit: usize },

    /// An over-nested document could not be re-serialized after truncation.
    #[error("failed to rewrite over-nested document: {0}")]
    Rewrite(#[source] std::io::Error),

    /// The extraction backend gave up on the document.
    #[error(transparent)]
    Backend(#[from] rs_trafilatura::Error),
}
