use thiserror::Error;

/// The error type for everything that talks to the print service.
///
/// The variants follow the three ways a call can go wrong (transport, the
/// service saying no, the service answering in an unexpected shape) plus the
/// local failures of the upload pipeline.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, aborted fetch).
    #[error("Network error: {0}")]
    Network(String),
    /// The service answered with `success: false`.
    #[error("{}", .message.as_deref().unwrap_or("unknown error"))]
    Rejected {
        /// The `error` field of the response, if the service sent one.
        message: Option<String>,
    },
    /// The response body was not the JSON we expected.
    #[error("Unexpected response: {0}")]
    Decode(String),
    /// The user supplied something we refuse to send.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Reading local files failed.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Coarse classification used for logging and for choosing what to tell the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Application,
    DataFormat,
    Input,
}

impl ClientError {
    pub fn rejected(message: Option<String>) -> Self {
        ClientError::Rejected { message }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Network(_) => ErrorKind::Transport,
            ClientError::Rejected { .. } => ErrorKind::Application,
            ClientError::Decode(_) => ErrorKind::DataFormat,
            ClientError::InvalidInput(_) | ClientError::Io(_) => ErrorKind::Input,
        }
    }

    /// Text for a dialog: the bare message for rejections and invalid input,
    /// the full display text otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Rejected { message } => {
                message.clone().unwrap_or_else(|| "unknown error".to_string())
            }
            ClientError::InvalidInput(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Io(format!("{}: {}", err.kind(), err))
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

/// A type alias for `Result<T, ClientError>`.
pub type ClientResult<T> = Result<T, ClientError>;
