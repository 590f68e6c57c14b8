/// Classified failure of a gateway operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The backend has no record for the requested key.
    #[error("Not found")]
    NotFound,

    /// The payload was rejected, either locally (missing selections) or by
    /// the backend. Carries the server-supplied detail when one was sent.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Network failure, timeout, undecodable body or a server-side error.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transport(err.to_string())
    }
}
