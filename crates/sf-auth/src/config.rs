//! Connected-app credentials and grant type selection.
//!
//! Sensitive fields are redacted in Debug output.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};

/// OAuth 2.0 grant type.
///
/// Unknown wire values are kept as [`GrantType::Other`] rather than rejected,
/// so a misconfigured value still reaches the token endpoint (which answers
/// with its own error) unless strict mode is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GrantType {
    Password,
    RefreshToken,
    ClientCredentials,
    Other(String),
}

impl GrantType {
    /// Wire value of the `grant_type` form field.
    pub fn as_str(&self) -> &str {
        match self {
            GrantType::Password => "password",
            GrantType::RefreshToken => "refresh_token",
            GrantType::ClientCredentials => "client_credentials",
            GrantType::Other(s) => s.as_str(),
        }
    }

    /// False for [`GrantType::Other`].
    pub fn is_supported(&self) -> bool {
        !matches!(self, GrantType::Other(_))
    }
}

impl From<&str> for GrantType {
    fn from(s: &str) -> Self {
        match s {
            "password" => GrantType::Password,
            "refresh_token" => GrantType::RefreshToken,
            "client_credentials" => GrantType::ClientCredentials,
            other => GrantType::Other(other.to_string()),
        }
    }
}

impl From<String> for GrantType {
    fn from(s: String) -> Self {
        GrantType::from(s.as_str())
    }
}

impl From<GrantType> for String {
    fn from(g: GrantType) -> Self {
        g.as_str().to_string()
    }
}

impl fmt::Display for GrantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credentials for the token exchange.
///
/// Built once and then read-only. Deserializes from the camelCase shape used
/// by JavaScript Salesforce tooling; the login URL is accepted as `baseURL`,
/// `baseUrl`, `base_url`, `instanceUrl` or `instance_url` (the latter two name
/// the login host, not the org instance returned by the exchange).
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    #[serde(
        rename = "baseURL",
        alias = "baseUrl",
        alias = "base_url",
        alias = "instanceUrl",
        alias = "instance_url"
    )]
    base_url: String,
    client_id: String,
    client_secret: String,
    grant_type: GrantType,
    #[serde(default)]
    secret_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("grant_type", &self.grant_type)
            .field("secret_token", &self.secret_token.as_ref().map(|_| "[REDACTED]"))
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "[REDACTED]"))
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl AuthConfig {
    /// Create a config with the fields every grant type needs.
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        grant_type: impl Into<GrantType>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            grant_type: grant_type.into(),
            secret_token: None,
            refresh_token: None,
            username: None,
            password: None,
        }
    }

    /// Set the username (password grant).
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the password (password grant).
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the security token appended to the password (password grant).
    pub fn with_secret_token(mut self, secret_token: impl Into<String>) -> Self {
        self.secret_token = Some(secret_token.into());
        self
    }

    /// Set the refresh token (refresh_token grant).
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Load credentials from environment variables.
    ///
    /// Required environment variables:
    /// - `SF_BASE_URL` or `SALESFORCE_BASE_URL`
    /// - `SF_CLIENT_ID` or `SALESFORCE_CLIENT_ID`
    /// - `SF_CLIENT_SECRET` or `SALESFORCE_CLIENT_SECRET`
    ///
    /// Optional:
    /// - `SF_GRANT_TYPE` (default: `client_credentials`)
    /// - `SF_USERNAME`, `SF_PASSWORD`, `SF_SECRET_TOKEN`, `SF_REFRESH_TOKEN`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| {
            lookup(&format!("SF_{name}")).or_else(|| lookup(&format!("SALESFORCE_{name}")))
        };
        let required = |name: &str| {
            var(name).ok_or_else(|| Error::new(ErrorKind::EnvVar(format!("SF_{name}"))))
        };

        let grant_type = var("GRANT_TYPE")
            .map(GrantType::from)
            .unwrap_or(GrantType::ClientCredentials);

        Ok(Self {
            base_url: required("BASE_URL")?,
            client_id: required("CLIENT_ID")?,
            client_secret: required("CLIENT_SECRET")?,
            grant_type,
            secret_token: var("SECRET_TOKEN"),
            refresh_token: var("REFRESH_TOKEN"),
            username: var("USERNAME"),
            password: var("PASSWORD"),
        })
    }

    /// Login URL the token endpoint hangs off.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Connected-app consumer key.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Selected grant type.
    pub fn grant_type(&self) -> &GrantType {
        &self.grant_type
    }

    /// Username, if set.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub(crate) fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub(crate) fn secret_token(&self) -> Option<&str> {
        self.secret_token.as_deref()
    }

    pub(crate) fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Check that the fields the grant type needs are present and that the
    /// login URL parses.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url).map_err(|e| {
            Error::with_source(ErrorKind::Config(format!("invalid base URL: {e}")), e)
        })?;

        let missing = |field: &str| {
            Err(Error::new(ErrorKind::Config(format!(
                "{field} is required for the {} grant",
                self.grant_type
            ))))
        };

        match self.grant_type {
            GrantType::Password => {
                if self.username.is_none() {
                    return missing("username");
                }
                if self.password.is_none() {
                    return missing("password");
                }
            }
            GrantType::RefreshToken => {
                if self.refresh_token.is_none() {
                    return missing("refresh_token");
                }
            }
            GrantType::ClientCredentials => {}
            GrantType::Other(ref other) => {
                return Err(Error::new(ErrorKind::UnsupportedGrantType(other.clone())));
            }
        }

        Ok(())
    }
}
