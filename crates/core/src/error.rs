/// Domain-level error type shared across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required input was missing or invalid.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Required external configuration (e.g. the dispatch credential)
    /// is absent. Not fatal for the process; fatal for the request.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The external job runner rejected the request or was unreachable.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Anything else that should surface as a 500.
    #[error("Internal error: {0}")]
    Internal(String),
}
