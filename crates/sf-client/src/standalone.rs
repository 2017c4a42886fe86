//! Free-standing request helpers that need no connection.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::instrument;

use crate::client::SfHttpClient;
use crate::error::Result;
use crate::request::{RequestBuilder, RequestMethod};
use crate::response::Response;

/// Send an unauthenticated JSON request to an absolute URL.
///
/// The body is serialized as JSON and `Content-Type: application/json` is
/// set. The raw [`Response`] is returned so the caller decides how to read it.
#[instrument(skip(body))]
pub async fn send_request<B: Serialize + ?Sized>(
    url: &str,
    method: RequestMethod,
    body: &B,
) -> Result<Response> {
    let http = SfHttpClient::default_client()?;
    let request = RequestBuilder::new(method, url).json(body)?;
    http.execute(request).await
}

/// Copy a JSON object and stamp it with the current UTC time.
///
/// The result carries every field of `data` plus `timestamp` in ISO-8601
/// with millisecond precision (`2024-05-01T12:00:00.000Z`). A `timestamp`
/// already present is overwritten. Input that is not an object contributes
/// no fields.
pub fn format_request(data: &Value) -> Value {
    let mut map = match data {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    map.insert(
        "timestamp".to_string(),
        Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    Value::Object(map)
}
