//! Error types for sf-requester-auth.
//!
//! Error messages are designed to avoid exposing sensitive credential data.

/// Result type alias for sf-requester-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sf-requester-auth operations.
///
/// A token endpoint answering with an error status is not an `Error`; the
/// error body is returned to the caller as the connection.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if credentials were missing or invalid.
    pub fn is_config(&self) -> bool {
        matches!(self.kind, ErrorKind::Config(_) | ErrorKind::EnvVar(_))
    }

    /// Returns true if the token exchange could not be completed.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }
}

/// The kind of error that occurred.
///
/// Error messages avoid including credential values.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Credentials missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// Grant type not recognised (strict mode only).
    #[error("Unsupported grant type: {0}")]
    UnsupportedGrantType(String),

    /// Network, timeout or response-parse failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Form encoding failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Error::with_source(ErrorKind::Serialization(err.to_string()), err)
    }
}

impl From<sf_requester_client::Error> for Error {
    fn from(err: sf_requester_client::Error) -> Self {
        // Token endpoint URLs contain "token"; only credential-shaped text is redacted.
        let message = err.to_string();
        let sanitized = if message.contains("Bearer")
            || message.contains("access_token")
            || message.contains("token=")
            || message.contains("secret=")
        {
            "Client error (details redacted for security)".to_string()
        } else {
            message
        };
        let kind = if err.is_config() {
            ErrorKind::Config(sanitized)
        } else {
            ErrorKind::Transport(sanitized)
        };
        Error::with_source(kind, err)
    }
}
