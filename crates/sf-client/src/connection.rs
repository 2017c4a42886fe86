//! The connection handed from authentication to the data layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Token-exchange response, kept verbatim.
///
/// Salesforce answers a successful exchange with `access_token`,
/// `instance_url`, `id`, `token_type`, `issued_at` and `signature`, and a
/// failed one with a provider-defined error object. Both are stored as
/// received; nothing here checks which one it is or when the token expires.
///
/// The access token and refresh token are redacted in Debug output.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Connection {
    raw: Value,
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut redacted = self.raw.clone();
        if let Value::Object(ref mut map) = redacted {
            for key in ["access_token", "refresh_token", "signature"] {
                if let Some(v) = map.get_mut(key) {
                    *v = Value::String("[REDACTED]".to_string());
                }
            }
        }
        f.debug_tuple("Connection").field(&redacted).finish()
    }
}

impl Connection {
    /// Build a connection from an instance URL and access token.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            raw: serde_json::json!({
                "instance_url": instance_url.into(),
                "access_token": access_token.into(),
            }),
        }
    }

    /// Wrap a raw token response.
    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    /// The `instance_url` field, if present.
    pub fn instance_url(&self) -> Option<&str> {
        self.get_str("instance_url")
    }

    /// The `access_token` field, if present.
    pub fn access_token(&self) -> Option<&str> {
        self.get_str("access_token")
    }

    /// Any top-level field of the token response.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.raw.get(key).and_then(Value::as_str)
    }

    /// True when the provider answered with JSON `null`.
    pub fn is_null(&self) -> bool {
        self.raw.is_null()
    }

    /// Borrow the raw response.
    pub fn as_value(&self) -> &Value {
        &self.raw
    }

    /// Take the raw response.
    pub fn into_value(self) -> Value {
        self.raw
    }
}

impl From<Value> for Connection {
    fn from(raw: Value) -> Self {
        Self::from_value(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        let conn = Connection::from_value(json!({
            "access_token": "00Dxx!AQ",
            "instance_url": "https://na1.salesforce.com",
            "token_type": "Bearer",
            "issued_at": "1700000000000"
        }));

        assert_eq!(conn.instance_url(), Some("https://na1.salesforce.com"));
        assert_eq!(conn.access_token(), Some("00Dxx!AQ"));
        assert_eq!(conn.get("token_type"), Some(&json!("Bearer")));
        assert!(!conn.is_null());
    }

    #[test]
    fn test_error_body_kept_verbatim() {
        let body = json!({"error": "invalid_grant", "error_description": "authentication failure"});
        let conn = Connection::from(body.clone());

        assert_eq!(conn.access_token(), None);
        assert_eq!(conn.instance_url(), None);
        assert_eq!(conn.into_value(), body);
    }

    #[test]
    fn test_default_is_empty() {
        let conn = Connection::default();
        assert!(conn.is_null());
        assert_eq!(conn.instance_url(), None);
    }

    #[test]
    fn test_serde_transparent() {
        let conn = Connection::new("https://na1.salesforce.com", "tok");
        let value = serde_json::to_value(&conn).unwrap();
        assert_eq!(value["instance_url"], "https://na1.salesforce.com");

        let back: Connection = serde_json::from_value(value).unwrap();
        assert_eq!(back, conn);
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let conn = Connection::from_value(json!({
            "access_token": "super_secret_access_token",
            "refresh_token": "super_secret_refresh_token",
            "instance_url": "https://na1.salesforce.com"
        }));

        let debug_output = format!("{:?}", conn);
        assert!(debug_output.contains("[REDACTED]"));
        assert!(debug_output.contains("na1.salesforce.com"));
        assert!(!debug_output.contains("super_secret_access_token"));
        assert!(!debug_output.contains("super_secret_refresh_token"));
    }
}
