//! # sf-requester-auth
//!
//! OAuth 2.0 token exchange against `{base_url}/services/oauth2/token`.
//!
//! ## Security
//!
//! - Secrets (client secret, password, security token, refresh token) are
//!   redacted in Debug output
//! - Tracing spans skip credential parameters
//! - Error messages are sanitized of token material
//!
//! ## Supported Grant Types
//!
//! - **password** - username + password with the security token appended
//! - **refresh_token** - exchange a refresh token for a new access token
//! - **client_credentials** - connected-app credentials only
//!
//! The token response is returned as received. A rejected exchange comes back
//! as the provider's error JSON, not as an `Err`; inspect the returned
//! [`Connection`](sf_requester_client::Connection).
//!
//! ## Example
//!
//! ```rust,ignore
//! use sf_requester_auth::{AuthConfig, Authenticator, GrantType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sf_requester_auth::Error> {
//!     let config = AuthConfig::new(
//!         "https://login.salesforce.com",
//!         "3MVG9...",
//!         "client_secret",
//!         GrantType::ClientCredentials,
//!     );
//!
//!     let connection = Authenticator::new(config).get_access_token().await?;
//!     println!("{:?}", connection.instance_url());
//!
//!     Ok(())
//! }
//! ```

mod authenticator;
mod config;
mod error;

pub use authenticator::Authenticator;
pub use config::{AuthConfig, GrantType};
pub use error::{Error, ErrorKind, Result};

/// Path of the OAuth 2.0 token endpoint relative to the login URL.
pub const TOKEN_PATH: &str = "/services/oauth2/token";

/// Default Salesforce login URL for production.
pub const PRODUCTION_LOGIN_URL: &str = "https://login.salesforce.com";

/// Default Salesforce login URL for sandbox.
pub const SANDBOX_LOGIN_URL: &str = "https://test.salesforce.com";
