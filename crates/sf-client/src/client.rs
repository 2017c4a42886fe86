//! Core HTTP client: one request in, one response out.

use tracing::{debug, error, info, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBody, RequestBuilder, RequestMethod};
use crate::response::Response;

/// HTTP client for Salesforce endpoints.
///
/// Executes each request exactly once. Non-2xx responses are returned like
/// any other response; only failures to complete the exchange are errors.
#[derive(Debug, Clone)]
pub struct SfHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl SfHttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(config.accept_compressed)
            .deflate(config.accept_compressed);

        let inner = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a GET request builder.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Get, url)
    }

    /// Create a POST request builder.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Post, url)
    }

    /// Create a PATCH request builder.
    pub fn patch(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Patch, url)
    }

    /// Create a DELETE request builder.
    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Delete, url)
    }

    /// Execute a request.
    ///
    /// Failures are logged here and handed back unchanged.
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        match self.execute_once(request).await {
            Ok(response) => Ok(response),
            Err(err) => {
                error!(error = %err, "Request failed");
                Err(err)
            }
        }
    }

    async fn execute_once(&self, request: RequestBuilder) -> Result<Response> {
        let RequestBuilder {
            method,
            url,
            headers,
            body,
            bearer_token,
        } = request;

        let mut req = self.inner.request(method.to_reqwest(), &url);

        if let Some(ref token) = bearer_token {
            req = req.bearer_auth(token);
        }

        for (name, value) in &headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if self.config.accept_compressed {
            req = req.header("Accept-Encoding", "gzip, deflate");
        }

        if let Some(body) = body {
            req = match body {
                RequestBody::Json(value) => req.body(serde_json::to_vec(&value)?),
                RequestBody::Form(text) => req.body(text),
            };
        }

        if self.config.enable_tracing {
            debug!(%method, %url, "Sending request");
        }

        let response = req.send().await?;

        if self.config.enable_tracing {
            let status = response.status().as_u16();
            let content_length = response.content_length();

            if response.status().is_success() {
                debug!(status, content_length, "Response received");
            } else {
                info!(status, content_length, "Non-success response");
            }
        }

        Ok(Response::new(response))
    }

    /// Execute a request and deserialize the JSON response.
    pub async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = self.execute(request).await?;
        response.json().await
    }
}
