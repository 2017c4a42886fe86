//! HTTP response handling with Salesforce-specific extensions.

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Wrapper around an HTTP response.
///
/// The status code is informational only; nothing in this crate turns a
/// non-2xx status into an error.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Get the response body as bytes.
    pub async fn bytes(self) -> Result<bytes::Bytes> {
        self.inner.bytes().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    ///
    /// An empty body (e.g. `204 No Content`) deserializes from JSON `null`.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.inner.bytes().await?;
        parse_json_body(&body)
    }

    /// Get API usage from the `Sforce-Limit-Info` header.
    pub fn api_usage(&self) -> Option<ApiUsage> {
        ApiUsage::parse(self.header("sforce-limit-info")?)
    }
}

pub(crate) fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_value(serde_json::Value::Null)?);
    }
    Ok(serde_json::from_slice(body)?)
}

/// API usage information from response headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiUsage {
    /// Number of API calls used.
    pub used: u64,
    /// Total API call limit.
    pub limit: u64,
}

impl ApiUsage {
    /// Parse a `Sforce-Limit-Info` value such as `api-usage=25/15000`.
    pub fn parse(info: &str) -> Option<Self> {
        let usage = info
            .split(',')
            .map(str::trim)
            .find_map(|part| part.strip_prefix("api-usage="))?;
        let (used, limit) = usage.split_once('/')?;
        Some(Self {
            used: used.trim().parse().ok()?,
            limit: limit.trim().parse().ok()?,
        })
    }

    /// Get the remaining API calls.
    pub fn remaining(&self) -> u64 {
        self.limit.saturating_sub(self.used)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_usage_parse() {
        let usage = ApiUsage::parse("api-usage=25/15000").unwrap();
        assert_eq!(usage.used, 25);
        assert_eq!(usage.limit, 15000);
        assert_eq!(usage.remaining(), 14975);

        let usage = ApiUsage::parse("per-app-api-usage=1/100, api-usage=7/50").unwrap();
        assert_eq!(usage, ApiUsage { used: 7, limit: 50 });

        assert!(ApiUsage::parse("api-usage=abc").is_none());
        assert!(ApiUsage::parse("something-else=1/2").is_none());
    }

    #[test]
    fn test_empty_body_is_null() {
        let value: serde_json::Value = parse_json_body(b"").unwrap();
        assert!(value.is_null());

        let value: serde_json::Value = parse_json_body(b"  \n").unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn test_malformed_body_is_json_error() {
        let err = parse_json_body::<serde_json::Value>(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err.kind, crate::ErrorKind::Json(_)));
        assert!(err.is_transport());
    }
}
