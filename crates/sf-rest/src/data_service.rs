//! Fluent builder for REST data calls.
//!
//! Each setup call records one pending request; `execute()` dispatches it.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use sf_requester_client::{ClientConfig, Connection, RequestMethod, RestTransport};

use crate::collections::CollectionRequest;
use crate::error::{Error, ErrorKind, Result};

/// A request recorded by a setup call and not yet dispatched.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    method: RequestMethod,
    path: String,
    body: Option<Value>,
}

impl PendingRequest {
    fn new(method: RequestMethod, path: String, body: Option<Value>) -> Self {
        Self { method, path, body }
    }

    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// Path relative to the instance URL, or an absolute URL for `next_page`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// Builder for query, record and collection calls against one connection.
///
/// Only one request is pending at a time. A second setup call before
/// [`execute`](Self::execute) replaces the first.
///
/// SOQL text and path segments are inserted verbatim. Use
/// [`sf_requester_client::security`] to escape user input.
///
/// # Example
///
/// ```rust,ignore
/// let mut data = DataService::new(connection)?;
///
/// let page = data
///     .query("SELECT Id, Name FROM Account")
///     .execute_as::<QueryResult<Account>>()
///     .await?;
///
/// data.update_record("Account", "001xx000003DgAAAS", json!({"Name": "Renamed"}))
///     .execute()
///     .await?;
/// ```
#[derive(Debug)]
pub struct DataService {
    transport: RestTransport,
    pending: Option<PendingRequest>,
    strict: bool,
    api_version: String,
}

impl DataService {
    /// Bind a builder to a connection with default HTTP configuration.
    pub fn new(connection: Connection) -> Result<Self> {
        Ok(Self::from_transport(RestTransport::new(connection)?))
    }

    /// Bind a builder to a connection with custom HTTP configuration.
    pub fn with_config(connection: Connection, config: ClientConfig) -> Result<Self> {
        Ok(Self::from_transport(RestTransport::with_config(
            connection, config,
        )?))
    }

    /// Wrap an existing transport.
    pub fn from_transport(transport: RestTransport) -> Self {
        Self {
            transport,
            pending: None,
            strict: false,
            api_version: sf_requester_client::DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Fail `execute()` with [`ErrorKind::Unsupported`] instead of returning
    /// `None` when nothing is pending.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Override the API version used in data paths (default `62.0`).
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// The request the next `execute()` will dispatch.
    pub fn pending(&self) -> Option<&PendingRequest> {
        self.pending.as_ref()
    }

    pub fn transport(&self) -> &RestTransport {
        &self.transport
    }

    fn data_path(&self, rest: &str) -> String {
        format!("/services/data/v{}/{}", self.api_version, rest)
    }

    fn set(&mut self, method: RequestMethod, path: String, body: Option<Value>) -> &mut Self {
        if let Some(previous) = &self.pending {
            debug!(
                method = %previous.method,
                path = %previous.path,
                "Replacing pending request"
            );
        }
        self.pending = Some(PendingRequest::new(method, path, body));
        self
    }

    // =========================================================================
    // Query
    // =========================================================================

    /// GET `/query/?q={soql}`. The SOQL is not encoded here.
    pub fn query(&mut self, soql: &str) -> &mut Self {
        let path = self.data_path(&format!("query/?q={}", soql));
        self.set(RequestMethod::Get, path, None)
    }

    /// GET a `nextRecordsUrl` from a previous page, verbatim.
    pub fn next_page(&mut self, next_records_url: &str) -> &mut Self {
        self.set(RequestMethod::Get, next_records_url.to_string(), None)
    }

    // =========================================================================
    // SObject CRUD
    // =========================================================================

    /// POST `/sobjects/{sobject}` with `data` as the body.
    pub fn insert_record(&mut self, sobject: &str, data: Value) -> &mut Self {
        let path = self.data_path(&format!("sobjects/{}", sobject));
        self.set(RequestMethod::Post, path, Some(data))
    }

    /// GET `/sobjects/{sobject}/{id}`.
    pub fn get_record(&mut self, sobject: &str, id: &str) -> &mut Self {
        let path = self.data_path(&format!("sobjects/{}/{}", sobject, id));
        self.set(RequestMethod::Get, path, None)
    }

    /// PATCH `/sobjects/{sobject}/{id}` with `data` as the body.
    pub fn update_record(&mut self, sobject: &str, id: &str, data: Value) -> &mut Self {
        let path = self.data_path(&format!("sobjects/{}/{}", sobject, id));
        self.set(RequestMethod::Patch, path, Some(data))
    }

    // =========================================================================
    // SObject Collections
    // =========================================================================

    /// POST `/composite/sobjects/` with `{allOrNone, records}`.
    ///
    /// Each record must carry its own `attributes.type`.
    pub fn composite_insert(&mut self, records: Vec<Value>, all_or_none: bool) -> &mut Self {
        let body = CollectionRequest {
            all_or_none,
            records,
        }
        .to_value();
        let path = self.data_path("composite/sobjects/");
        self.set(RequestMethod::Post, path, Some(body))
    }

    /// PATCH `/composite/sobjects/` with `{allOrNone, records}`.
    ///
    /// Each record must carry `attributes.type` and `id`.
    pub fn composite_update(&mut self, records: Vec<Value>, all_or_none: bool) -> &mut Self {
        let body = CollectionRequest {
            all_or_none,
            records,
        }
        .to_value();
        let path = self.data_path("composite/sobjects/");
        self.set(RequestMethod::Patch, path, Some(body))
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Dispatch the pending request and return the JSON body as received.
    ///
    /// The pending request is consumed. Error statuses come back as data.
    /// Returns `Ok(None)` when nothing is pending, unless strict.
    #[instrument(skip(self))]
    pub async fn execute(&mut self) -> Result<Option<Value>> {
        let Some(request) = self.pending.take() else {
            return self.unsupported("no pending request");
        };

        let empty = Value::Object(Default::default());
        let body = request.body.as_ref().unwrap_or(&empty);

        let value = match request.method {
            RequestMethod::Get => self.transport.get(&request.path).await?,
            RequestMethod::Post => self.transport.post(&request.path, body).await?,
            RequestMethod::Patch => self.transport.patch(&request.path, body).await?,
            other => {
                return self.unsupported(&format!("method {} is not dispatched", other));
            }
        };

        debug!(method = %request.method, path = %request.path, "Request executed");
        Ok(Some(value))
    }

    /// Like [`execute`](Self::execute), deserializing the body into `T`.
    pub async fn execute_as<T: DeserializeOwned>(&mut self) -> Result<Option<T>> {
        match self.execute().await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    fn unsupported<T>(&self, reason: &str) -> Result<Option<T>> {
        if self.strict {
            return Err(Error::new(ErrorKind::Unsupported(reason.to_string())));
        }
        warn!(reason, "Nothing dispatched");
        Ok(None)
    }
}
