//! # sf-requester
//!
//! A thin Salesforce client: OAuth 2.0 token exchange plus a small builder
//! for REST data calls.
//!
//! Responses come back as the JSON Salesforce sent, whatever the HTTP
//! status. Errors are reserved for missing credentials and calls that could
//! not complete.
//!
//! ## Security
//!
//! - Access tokens, refresh tokens and client secrets are redacted in Debug output
//! - Tracing spans skip credential parameters
//! - Error messages carrying credential text are replaced with a generic message
//!
//! ## Crates
//!
//! - **sf-requester-client** - HTTP client, bearer transport, standalone helpers
//! - **sf-requester-auth** - Token exchange: password, refresh token, client credentials
//! - **sf-requester-rest** - Data builder: SOQL query, record CRUD, composite collections
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sf_requester::{AuthConfig, SalesforceRequester};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sf_requester::Error> {
//!     let config = AuthConfig::new(
//!         "https://login.salesforce.com",
//!         "client_id",
//!         "client_secret",
//!         "password",
//!     )
//!     .with_username("user@example.com")
//!     .with_password("hunter2")
//!     .with_secret_token("SECURITYTOKEN");
//!
//!     let requester = SalesforceRequester::new(config);
//!
//!     let mut data = requester.data_service().await?;
//!     let accounts = data
//!         .query("SELECT Id, Name FROM Account LIMIT 10")
//!         .execute()
//!         .await?;
//!
//!     println!("{}", serde_json::to_string_pretty(&accounts).unwrap_or_default());
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use sf_requester_auth as auth;
#[cfg(feature = "client")]
pub use sf_requester_client as client;
#[cfg(feature = "rest")]
pub use sf_requester_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use sf_requester_auth::{AuthConfig, Authenticator, GrantType};
#[cfg(feature = "client")]
pub use sf_requester_client::{
    format_request, send_request, ClientConfig, Connection, RequestMethod, RestTransport,
};
#[cfg(feature = "rest")]
pub use sf_requester_rest::{DataService, QueryResult};

#[cfg(feature = "rest")]
mod requester;
#[cfg(feature = "rest")]
pub use requester::SalesforceRequester;

/// Error from any of the component crates.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[cfg(feature = "auth")]
    #[error(transparent)]
    Auth(#[from] sf_requester_auth::Error),

    #[cfg(feature = "rest")]
    #[error(transparent)]
    Rest(#[from] sf_requester_rest::Error),

    #[cfg(feature = "client")]
    #[error(transparent)]
    Client(#[from] sf_requester_client::Error),
}

/// Result type alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
