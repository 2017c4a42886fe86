//! Session facade tying authentication to the data builder.

use serde_json::Value;
use tracing::{debug, info, instrument};

use sf_requester_auth::{AuthConfig, Authenticator};
use sf_requester_client::{ClientConfig, Connection, RestTransport};
use sf_requester_rest::DataService;

use crate::Result;

/// Authenticates and hands out builders bound to the resulting connection.
///
/// Nothing is cached. Every [`data_service`](Self::data_service) and
/// [`rest_service`](Self::rest_service) call performs a fresh token exchange.
#[derive(Debug, Clone)]
pub struct SalesforceRequester {
    authenticator: Authenticator,
    client_config: ClientConfig,
    strict: bool,
}

impl SalesforceRequester {
    pub fn new(config: impl Into<Option<AuthConfig>>) -> Self {
        Self {
            authenticator: Authenticator::new(config),
            client_config: ClientConfig::default(),
            strict: false,
        }
    }

    /// Strict mode for both the token exchange and the data builder.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.authenticator = self.authenticator.with_strict(strict);
        self.strict = strict;
        self
    }

    /// HTTP configuration for the token exchange and every builder.
    pub fn with_client_config(mut self, config: ClientConfig) -> Self {
        self.authenticator = self.authenticator.with_client_config(config.clone());
        self.client_config = config;
        self
    }

    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    /// Exchange the credentials for a connection.
    ///
    /// Returns `None` when the token endpoint answered with a falsy JSON
    /// value (`null`, `false`, `0`, `""`). A rejected login is still `Some`,
    /// holding the provider's error body.
    #[instrument(skip(self))]
    pub async fn connect(&self) -> Result<Option<Connection>> {
        let connection = self.authenticator.get_access_token().await?;
        if is_falsy(connection.as_value()) {
            debug!("Token response carried no connection");
            return Ok(None);
        }
        info!("Connected to Salesforce");
        Ok(Some(connection))
    }

    /// Connect, then build a data builder bound to the connection.
    pub async fn data_service(&self) -> Result<DataService> {
        let connection = self.connect().await?.unwrap_or_default();
        let service = DataService::with_config(connection, self.client_config.clone())?
            .with_strict(self.strict);
        Ok(service)
    }

    /// Connect, then build a bearer transport for arbitrary REST paths.
    pub async fn rest_service(&self) -> Result<RestTransport> {
        let connection = self.connect().await?.unwrap_or_default();
        Ok(RestTransport::with_config(
            connection,
            self.client_config.clone(),
        )?)
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
