//! Escaping helpers for callers that build SOQL and REST paths.
//!
//! The data layer inserts query text, object names and record ids into paths
//! as given. Values that come from users should go through these first.
//!
//! ```rust
//! use sf_requester_client::security::soql;
//!
//! let name = soql::escape_string("O'Brien");
//! let query = format!("SELECT Id FROM Account WHERE Name = '{}'", name);
//! let q = soql::encode_query(&query);
//! assert!(q.starts_with("SELECT%20Id"));
//! ```

/// SOQL escaping utilities.
pub mod soql {
    /// Escape a string value for use inside a SOQL string literal.
    ///
    /// ```rust
    /// use sf_requester_client::security::soql;
    ///
    /// assert_eq!(soql::escape_string("O'Brien & Co."), "O\\'Brien & Co.");
    /// ```
    #[must_use]
    pub fn escape_string(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len() + 16);
        for ch in value.chars() {
            match ch {
                '\'' => escaped.push_str("\\'"),
                '\\' => escaped.push_str("\\\\"),
                '\n' => escaped.push_str("\\n"),
                '\r' => escaped.push_str("\\r"),
                '\t' => escaped.push_str("\\t"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }

    /// Escape a value for a SOQL LIKE clause, including `%` and `_`.
    #[must_use]
    pub fn escape_like(value: &str) -> String {
        let base_escaped = escape_string(value);
        let mut escaped = String::with_capacity(base_escaped.len() + 8);
        for ch in base_escaped.chars() {
            match ch {
                '%' => escaped.push_str("\\%"),
                '_' => escaped.push_str("\\_"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }

    /// Percent-encode a whole SOQL statement for the `q=` query parameter.
    #[must_use]
    pub fn encode_query(soql: &str) -> String {
        urlencoding::encode(soql).into_owned()
    }
}

/// URL path helpers.
pub mod url {
    /// Percent-encode a single path segment.
    #[must_use]
    pub fn encode_param(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }

    /// True for a 15 or 18 character alphanumeric Salesforce id.
    #[must_use]
    pub fn is_valid_salesforce_id(id: &str) -> bool {
        matches!(id.len(), 15 | 18) && id.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

#[cfg(test)]
mod tests {
    use super::{soql, url};

    #[test]
    fn test_escape_string() {
        assert_eq!(soql::escape_string("simple"), "simple");
        assert_eq!(soql::escape_string("O'Brien"), "O\\'Brien");
        assert_eq!(soql::escape_string("back\\slash"), "back\\\\slash");
        assert_eq!(soql::escape_string("line\nbreak"), "line\\nbreak");
        assert_eq!(
            soql::escape_string("' OR Name LIKE '%"),
            "\\' OR Name LIKE \\'%"
        );
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(soql::escape_like("100%_done"), "100\\%\\_done");
        assert_eq!(soql::escape_like("it's"), "it\\'s");
    }

    #[test]
    fn test_encode_query() {
        assert_eq!(
            soql::encode_query("SELECT Id, Name FROM Account"),
            "SELECT%20Id%2C%20Name%20FROM%20Account"
        );
    }

    #[test]
    fn test_url_helpers() {
        assert_eq!(url::encode_param("001/test"), "001%2Ftest");
        assert!(url::is_valid_salesforce_id("001xx000003DgAA"));
        assert!(url::is_valid_salesforce_id("001xx000003DgAAAS3"));
        assert!(!url::is_valid_salesforce_id("001xx"));
        assert!(!url::is_valid_salesforce_id("001xx000003Dg'--"));
    }
}
