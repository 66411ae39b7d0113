//! Pipeline error types.

use fracdiff_data::DataError;
use fracdiff_search::SearchError;
use serde_json::json;
use thiserror::Error;

/// Error payload returned to callers of the JSON entry point.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ErrorResult {
    /// Error category (`config`, `market_data`, `runtime`)
    pub category: String,
    /// Human-readable message
    pub message: String,
    /// Additional structured details
    pub details: serde_json::Value,
}

/// Errors that can occur during a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// JSON config parse error
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// Config validation error
    #[error("config validation error: {0}")]
    ConfigValidation(String),

    /// Result serialization error
    #[error("result serialization error: {0}")]
    ResultSerialize(String),

    /// Data loading, validation or writing error
    #[error("data error: {0}")]
    Data(#[from] DataError),

    /// Order search error
    #[error("search error: {0}")]
    Search(#[from] SearchError),
}

impl PipelineError {
    /// Returns true if this is a config parse/validation error.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            PipelineError::ConfigParse(_)
                | PipelineError::ConfigValidation(_)
                | PipelineError::Search(SearchError::Config(_))
        )
    }

    /// Returns the error category for the output contract.
    /// Categories: `config`, `market_data`, `runtime`
    #[must_use]
    pub fn error_category(&self) -> &'static str {
        match self {
            PipelineError::ConfigParse(_)
            | PipelineError::ConfigValidation(_)
            | PipelineError::Search(SearchError::Config(_)) => "config",

            PipelineError::Data(_)
            | PipelineError::Search(
                SearchError::EmptyTable
                | SearchError::NoColumns
                | SearchError::UnknownColumn(_)
                | SearchError::Table(_),
            ) => "market_data",

            PipelineError::ResultSerialize(_) | PipelineError::Search(SearchError::Transform(_)) => {
                "runtime"
            }
        }
    }
}

impl From<PipelineError> for ErrorResult {
    fn from(err: PipelineError) -> Self {
        Self {
            category: err.error_category().to_string(),
            message: err.to_string(),
            details: json!({}),
        }
    }
}
