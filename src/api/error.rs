use thiserror::Error;

/// Error from the e-invoicing backend client.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Connection failure or timeout.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    /// `message` is ready to be shown to the user.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Parse(String),

    /// Missing or invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure means the session must be renewed.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
