//! Bearer-authenticated JSON transport bound to one connection.
//!
//! ## Security
//!
//! - The access token is redacted in Debug output
//! - Request bodies are skipped in tracing spans

use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::SfHttpClient;
use crate::config::ClientConfig;
use crate::connection::Connection;
use crate::error::Result;
use crate::request::RequestBuilder;
use crate::response::Response;

/// Issues REST calls against `{instance_url}{path}`.
///
/// Every call sends `Authorization: Bearer {access_token}` and
/// `Content-Type: application/json`. Whatever JSON comes back is returned,
/// whatever the status code.
///
/// # Example
///
/// ```rust,ignore
/// use sf_requester_client::{Connection, RestTransport};
///
/// let transport = RestTransport::new(Connection::new(instance_url, token))?;
///
/// let account = transport
///     .get("/services/data/v62.0/sobjects/Account/001xx000003DgAAAS")
///     .await?;
///
/// let created = transport
///     .post("/services/data/v62.0/sobjects/Account", &json!({"Name": "Acme"}))
///     .await?;
/// ```
#[derive(Clone)]
pub struct RestTransport {
    http: SfHttpClient,
    connection: Connection,
    instance_url: String,
    access_token: String,
}

impl std::fmt::Debug for RestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestTransport")
            .field("instance_url", &self.instance_url)
            .field("access_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl RestTransport {
    /// Create a transport with default HTTP configuration.
    pub fn new(connection: Connection) -> Result<Self> {
        Self::with_config(connection, ClientConfig::default())
    }

    /// Create a transport with custom HTTP configuration.
    ///
    /// A connection without `instance_url` or `access_token` is accepted; the
    /// missing values are treated as empty strings.
    pub fn with_config(connection: Connection, config: ClientConfig) -> Result<Self> {
        let http = SfHttpClient::new(config)?;
        Ok(Self::with_http_client(connection, http))
    }

    /// Create a transport sharing an existing HTTP client.
    pub fn with_http_client(connection: Connection, http: SfHttpClient) -> Self {
        let instance_url = connection.instance_url().unwrap_or_default().to_string();
        let access_token = connection.access_token().unwrap_or_default().to_string();
        Self {
            http,
            connection,
            instance_url,
            access_token,
        }
    }

    /// The connection this transport was built from.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Build the full URL for a path.
    ///
    /// Paths are appended to the instance URL as given. Absolute
    /// `http(s)://` URLs are used unchanged.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.instance_url, path)
        }
    }

    fn request(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.access_token)
            .header("Content-Type", "application/json")
    }

    async fn dispatch(&self, request: RequestBuilder) -> Result<Response> {
        let response = self.http.execute(request).await?;
        if let Some(usage) = response.api_usage() {
            debug!(used = usage.used, limit = usage.limit, "API usage");
        }
        Ok(response)
    }

    /// GET a path and parse the JSON body.
    #[instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Value> {
        let request = self.request(self.http.get(self.url(path)));
        self.dispatch(request).await?.json().await
    }

    /// GET a path and return the raw body bytes (attachments, documents).
    #[instrument(skip(self))]
    pub async fn get_binary(&self, path: &str) -> Result<Bytes> {
        let request = self.request(self.http.get(self.url(path)));
        self.dispatch(request).await?.bytes().await
    }

    /// POST a JSON body and parse the JSON response.
    #[instrument(skip(self, body))]
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let request = self.request(self.http.post(self.url(path))).json(body)?;
        self.dispatch(request).await?.json().await
    }

    /// PATCH a JSON body and parse the JSON response.
    ///
    /// Salesforce answers a successful record update with `204 No Content`,
    /// which comes back as `Value::Null`.
    #[instrument(skip(self, body))]
    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let request = self.request(self.http.patch(self.url(path))).json(body)?;
        self.dispatch(request).await?.json().await
    }

    /// DELETE with a JSON body and parse the JSON response.
    #[instrument(skip(self, body))]
    pub async fn delete<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let request = self.request(self.http.delete(self.url(path))).json(body)?;
        self.dispatch(request).await?.json().await
    }
}
