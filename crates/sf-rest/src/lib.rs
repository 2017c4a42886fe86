//! # sf-requester-rest
//!
//! Fluent builder for Salesforce REST data calls.
//!
//! ## Features
//!
//! - **SOQL Query** - first page, and a follow-up page by `nextRecordsUrl`
//! - **SObject CRUD** - insert, get and update single records
//! - **SObject Collections** - composite insert and update with `allOrNone`
//!
//! Pagination is not followed automatically and nothing is retried.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sf_requester_client::Connection;
//! use sf_requester_rest::DataService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sf_requester_rest::Error> {
//!     let mut data = DataService::new(Connection::new(
//!         "https://myorg.my.salesforce.com",
//!         "access_token_here",
//!     ))?;
//!
//!     // Query
//!     let accounts = data.query("SELECT Id, Name FROM Account").execute().await?;
//!
//!     // Create
//!     let created = data
//!         .insert_record("Account", serde_json::json!({"Name": "New Account"}))
//!         .execute()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod collections;
mod data_service;
mod error;
mod query;
mod sobject;

pub use collections::{CollectionRequest, CollectionResult};
pub use data_service::{DataService, PendingRequest};
pub use error::{Error, ErrorKind, Result};
pub use query::QueryResult;
pub use sobject::{CreateResult, SalesforceError};

// Re-export sf-requester-client types that users might need
pub use sf_requester_client::{ClientConfig, ClientConfigBuilder, Connection, RequestMethod};
