//! # sf-requester-client
//!
//! HTTP transport for the Salesforce REST API.
//!
//! This crate provides:
//! - [`SfHttpClient`]: a single-shot HTTP executor over `reqwest`
//! - [`RestTransport`]: bearer-authenticated JSON calls against an org's instance URL
//! - [`Connection`]: the token response an authenticator hands to the transport
//!
//! There is no retry, rate limiting or status-code translation here. A 4xx or
//! 5xx response is parsed and handed back to the caller as ordinary data.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (sf-requester-rest DataService, sf-requester facade)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    RestTransport                            │
//! │  - Holds a Connection (instance URL + access token)         │
//! │  - get / post / patch / delete / get_binary                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SfHttpClient                             │
//! │  - One request, one response                                │
//! │  - Timeouts, compression, request tracing                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use sf_requester_client::{Connection, RestTransport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sf_requester_client::Error> {
//!     let connection = Connection::new("https://na1.salesforce.com", "00D...");
//!     let transport = RestTransport::new(connection)?;
//!
//!     let limits = transport.get("/services/data/v62.0/limits").await?;
//!     println!("{limits}");
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod connection;
mod error;
mod request;
mod response;
pub mod security;
mod standalone;
mod transport;

pub use client::SfHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use connection::Connection;
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBody, RequestBuilder, RequestMethod};
pub use response::{ApiUsage, Response};
pub use standalone::{format_request, send_request};
pub use transport::RestTransport;

/// Default Salesforce API version
pub const DEFAULT_API_VERSION: &str = "62.0";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("sf-requester/", env!("CARGO_PKG_VERSION"));
