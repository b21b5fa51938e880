use costar_core::GraphError;
use thiserror::Error;

/// Errors raised by the front end before or while running a query.
#[derive(Debug, Error)]
pub enum CliError {
    /// A setting or argument is outside its accepted range.
    #[error("invalid {name} '{value}': {reason}")]
    InvalidSetting {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// The dataset could not be turned into a graph.
    #[error("graph build failed: {0}")]
    Graph(#[from] GraphError),

    /// Result serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
