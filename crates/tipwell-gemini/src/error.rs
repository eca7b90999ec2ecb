use thiserror::Error;

/// Every failure the tip client can surface, already classified for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TipError {
    /// No credential configured. Retrying will not help.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The endpoint could not be reached at all.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a failure status or an `error` body.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// The model's text could not be read as the expected JSON shape.
    #[error("format error: {0}")]
    Format(String),

    #[error("unexpected error: {0}")]
    Unknown(String),
}

const NETWORK_MESSAGE: &str =
    "Unable to reach the tip service. Check your internet connection and try again.";

impl TipError {
    /// The sentence shown to the user, without the category prefix.
    pub fn user_message(&self) -> &str {
        match self {
            TipError::Configuration(msg)
            | TipError::Network(msg)
            | TipError::Upstream(msg)
            | TipError::Format(msg)
            | TipError::Unknown(msg) => msg,
        }
    }

    /// Whether the user can reasonably try the same action again.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, TipError::Configuration(_))
    }
}

/// Classify a transport-level failure from the HTTP client.
///
/// Connection, timeout and request-construction failures become
/// [`TipError::Network`] with a user-facing message; anything else
/// (e.g. a body that stopped mid-stream) is [`TipError::Unknown`].
pub fn classify_transport(err: reqwest::Error) -> TipError {
    if err.is_connect() || err.is_timeout() || err.is_request() {
        tracing::debug!(error = %err, "transport failure");
        TipError::Network(NETWORK_MESSAGE.to_string())
    } else {
        TipError::Unknown(err.to_string())
    }
}
