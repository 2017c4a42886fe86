//! HTTP settings shared by the token exchange and the REST transport.

use std::time::Duration;

/// How the underlying `reqwest` client is built.
///
/// One value is handed to every component a session creates, so the token
/// exchange and the data calls time out the same way.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Whole-call deadline, token exchange included.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
    /// Advertise and transparently decode gzip/deflate bodies.
    pub accept_compressed: bool,
    /// Debug events for each request sent and response status received.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: crate::USER_AGENT.to_string(),
            accept_compressed: true,
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`], starting from the defaults.
///
/// ```rust
/// use std::time::Duration;
/// use sf_requester_client::ClientConfig;
///
/// let config = ClientConfig::builder()
///     .with_timeout(Duration::from_secs(5))
///     .with_user_agent("nightly-sync/2.1")
///     .build();
/// assert_eq!(config.timeout, Duration::from_secs(5));
/// ```
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Turn off to receive bodies exactly as the server encodes them.
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.config.accept_compressed = enabled;
        self
    }

    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
