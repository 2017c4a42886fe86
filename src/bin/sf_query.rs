//! Run one SOQL query and print the JSON response.
//!
//! Credentials come from the environment:
//!
//! ```sh
//! export SF_BASE_URL=https://login.salesforce.com
//! export SF_CLIENT_ID=...
//! export SF_CLIENT_SECRET=...
//! export SF_GRANT_TYPE=password     # default: client_credentials
//! export SF_USERNAME=user@example.com
//! export SF_PASSWORD=...
//! export SF_SECRET_TOKEN=...
//! cargo run --bin sf-query -- "SELECT Id, Name FROM Account LIMIT 5"
//! ```
//!
//! `RUST_LOG=sf_requester=debug` shows the request trace.

use sf_requester::client::security::soql;
use sf_requester::{AuthConfig, SalesforceRequester};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let soql_text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if soql_text.trim().is_empty() {
        eprintln!("Usage: sf-query <SOQL>");
        eprintln!();
        eprintln!("  Example: sf-query \"SELECT Id, Name FROM Account LIMIT 5\"");
        std::process::exit(2);
    }

    let config = AuthConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!();
        eprintln!("  Set SF_BASE_URL, SF_CLIENT_ID and SF_CLIENT_SECRET,");
        eprintln!("  plus SF_USERNAME/SF_PASSWORD or SF_REFRESH_TOKEN for those grants.");
        std::process::exit(1);
    });

    let requester = SalesforceRequester::new(config).with_strict(true);

    let mut data = requester.data_service().await.unwrap_or_else(|e| {
        eprintln!("Error: Failed to authenticate: {e}");
        std::process::exit(1);
    });

    let result = data
        .query(&soql::encode_query(&soql_text))
        .execute()
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: Query failed: {e}");
            std::process::exit(1);
        });

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: Failed to render response: {e}");
            std::process::exit(1);
        }
    }
}
