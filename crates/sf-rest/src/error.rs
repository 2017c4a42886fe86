//! Error types for sf-requester-rest.

/// Result type alias for sf-requester-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sf-requester-rest operations.
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
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The call could not be completed or its body could not be read.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response did not match the requested type.
    #[error("JSON error: {0}")]
    Json(String),

    /// `execute()` with nothing to dispatch (strict mode only).
    #[error("Unsupported request: {0}")]
    Unsupported(String),
}

impl From<sf_requester_client::Error> for Error {
    fn from(err: sf_requester_client::Error) -> Self {
        Error::with_source(ErrorKind::Transport(err.to_string()), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_client_error() {
        let err: Error =
            sf_requester_client::Error::new(sf_requester_client::ErrorKind::Timeout).into();
        assert!(matches!(err.kind, ErrorKind::Transport(ref m) if m == "Request timeout"));
        assert!(err.source.is_some());
    }

    #[test]
    fn test_display() {
        let err = Error::new(ErrorKind::Unsupported("no pending request".into()));
        assert_eq!(err.to_string(), "Unsupported request: no pending request");
    }
}
