use thiserror::Error;

/// Core error types for the workspace
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Table construction error (shape, index or naming violation)
    #[error("Table error: {0}")]
    Table(String),
}
