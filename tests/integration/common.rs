use serde_json::{json, Value};
use sf_requester::{AuthConfig, SalesforceRequester};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCESS_TOKEN: &str = "00Dxx0000000001!AQ4AQIntegrationToken";

/// Token response pointing the instance URL back at the mock server.
pub fn token_response(server: &MockServer) -> Value {
    json!({
        "access_token": ACCESS_TOKEN,
        "instance_url": server.uri(),
        "id": "https://login.salesforce.com/id/00Dxx0000000001/005xx000001Sv6m",
        "token_type": "Bearer",
        "issued_at": "1700000000000",
        "signature": "c2lnbmF0dXJl"
    })
}

/// Mount a successful token endpoint expecting `times` exchanges.
pub async fn mount_token_endpoint(server: &MockServer, times: u64) {
    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_response(server)))
        .expect(times)
        .mount(server)
        .await;
}

pub fn password_config(server: &MockServer) -> AuthConfig {
    AuthConfig::new(server.uri(), "test-client-id", "test-client-secret", "password")
        .with_username("integration@example.com")
        .with_password("p@ss word")
        .with_secret_token("TOKEN123")
}

pub fn requester(server: &MockServer) -> SalesforceRequester {
    SalesforceRequester::new(password_config(server))
}
