use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by a weather provider call.
///
/// Transport-class errors (the request never completed, or the server
/// answered with a non-success status) are recoverable: the pipeline logs
/// them and carries on without data. Shape-class errors (the server answered
/// 200 with a body we cannot decode) are not handled per stage and bubble up
/// to the top-level handler.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to the {endpoint} endpoint failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{endpoint} response is missing {field}")]
    MissingField {
        endpoint: &'static str,
        field: &'static str,
    },
}

impl ProviderError {
    /// True for network-level failures and HTTP error statuses; false for
    /// unexpected response shapes.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ProviderError::Transport { .. } | ProviderError::Status { .. }
        )
    }
}
