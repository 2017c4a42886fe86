//! OAuth 2.0 token exchange.

use serde_json::Value;
use tracing::{debug, error, instrument};

use sf_requester_client::{ClientConfig, Connection, SfHttpClient};

use crate::config::{AuthConfig, GrantType};
use crate::error::{Error, ErrorKind, Result};
use crate::TOKEN_PATH;

/// Performs the token exchange for one set of credentials.
///
/// The response body is parsed and returned as a [`Connection`] whatever the
/// HTTP status, so a rejected login yields the provider's error JSON rather
/// than an `Err`. Errors are reserved for missing credentials and for
/// exchanges that could not complete.
///
/// By default an unrecognised grant type is sent with an empty body. Strict
/// mode rejects it, and incomplete credentials, before any request is made.
#[derive(Debug, Clone)]
pub struct Authenticator {
    config: Option<AuthConfig>,
    client_config: ClientConfig,
    strict: bool,
}

impl Authenticator {
    /// Create an authenticator. `None` is accepted here and reported by
    /// [`get_access_token`](Self::get_access_token).
    pub fn new(config: impl Into<Option<AuthConfig>>) -> Self {
        Self {
            config: config.into(),
            client_config: ClientConfig::default(),
            strict: false,
        }
    }

    /// Use custom HTTP configuration for the exchange.
    pub fn with_client_config(mut self, client_config: ClientConfig) -> Self {
        self.client_config = client_config;
        self
    }

    /// Reject unknown grant types and incomplete credentials up front.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The credentials this authenticator holds, if any.
    pub fn config(&self) -> Option<&AuthConfig> {
        self.config.as_ref()
    }

    /// Exchange the stored credentials for a token.
    pub async fn get_access_token(&self) -> Result<Connection> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| Error::new(ErrorKind::Config("credentials missing".to_string())))?;

        self.authenticate(config).await
    }

    /// Exchange the given credentials for a token.
    #[instrument(
        skip(self, config),
        fields(base_url = %config.base_url(), grant_type = %config.grant_type())
    )]
    pub async fn authenticate(&self, config: &AuthConfig) -> Result<Connection> {
        let body = self.token_request_body(config)?;

        let http = SfHttpClient::new(self.client_config.clone())?;
        let url = format!("{}{}", config.base_url().trim_end_matches('/'), TOKEN_PATH);

        let request = match body {
            Some(body) => http.post(url).form_encoded(body),
            None => http
                .post(url)
                .header("Content-Type", "application/x-www-form-urlencoded"),
        };

        let response = http.execute(request).await?;
        let status = response.status();

        let raw: Value = response.json().await.map_err(|e| {
            error!(status, error = %e, "Failed to parse token response");
            Error::from(e)
        })?;

        debug!(status, "Token response received");
        Ok(Connection::from_value(raw))
    }

    /// Form-encoded token request body for `config`.
    ///
    /// Returns `None` for a grant type with no known payload. Optional fields
    /// that are unset are left out; for the password grant the security token
    /// is appended directly to the password.
    pub fn token_request_body(&self, config: &AuthConfig) -> Result<Option<String>> {
        if self.strict {
            config.validate()?;
        }

        let Some(fields) = token_request_fields(config) else {
            return Ok(None);
        };

        Ok(Some(serde_urlencoded::to_string(fields)?))
    }
}

fn token_request_fields(config: &AuthConfig) -> Option<Vec<(&'static str, String)>> {
    let grant = config.grant_type();
    if !grant.is_supported() {
        return None;
    }

    let mut fields = vec![
        ("grant_type", grant.as_str().to_string()),
        ("client_id", config.client_id().to_string()),
        ("client_secret", config.client_secret().to_string()),
    ];

    match grant {
        GrantType::Password => {
            if let Some(username) = config.username() {
                fields.push(("username", username.to_string()));
            }
            if config.password().is_some() || config.secret_token().is_some() {
                let password = format!(
                    "{}{}",
                    config.password().unwrap_or_default(),
                    config.secret_token().unwrap_or_default()
                );
                fields.push(("password", password));
            }
        }
        GrantType::RefreshToken => {
            if let Some(refresh_token) = config.refresh_token() {
                fields.push(("refresh_token", refresh_token.to_string()));
            }
        }
        GrantType::ClientCredentials | GrantType::Other(_) => {}
    }

    Some(fields)
}
