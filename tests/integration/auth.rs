//! Token exchange through the facade.

use super::common::{mount_token_endpoint, password_config, requester, ACCESS_TOKEN};
use serde_json::json;
use sf_requester::{AuthConfig, Authenticator, SalesforceRequester};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_password_grant_payload_on_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "grant_type=password&client_id=test-client-id&client_secret=test-client-secret\
             &username=integration%40example.com&password=p%40ss+wordTOKEN123",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "X"})))
        .expect(1)
        .mount(&server)
        .await;

    let connection = requester(&server).connect().await.unwrap().unwrap();
    assert_eq!(connection.access_token(), Some("X"));
}

#[tokio::test]
async fn test_refresh_token_grant_payload_on_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .and(body_string(
            "grant_type=refresh_token&client_id=cid&client_secret=csecret&refresh_token=5Aep861",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "R"})))
        .expect(1)
        .mount(&server)
        .await;

    let config = AuthConfig::new(server.uri(), "cid", "csecret", "refresh_token")
        .with_refresh_token("5Aep861");
    let connection = Authenticator::new(config).get_access_token().await.unwrap();
    assert_eq!(connection.access_token(), Some("R"));
}

#[tokio::test]
async fn test_rejected_login_is_data() {
    let server = MockServer::start().await;

    let body = json!({
        "error": "invalid_grant",
        "error_description": "authentication failure"
    });
    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let connection = requester(&server).connect().await.unwrap().unwrap();
    assert_eq!(connection.as_value(), &body);
    assert!(connection.access_token().is_none());
}

#[tokio::test]
async fn test_every_builder_reauthenticates() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 2).await;

    let requester = requester(&server);
    let data = requester.data_service().await.unwrap();
    let rest = requester.rest_service().await.unwrap();

    assert_eq!(data.transport().instance_url(), server.uri());
    assert_eq!(rest.connection().access_token(), Some(ACCESS_TOKEN));
}

#[tokio::test]
async fn test_missing_credentials_make_no_request() {
    let server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = SalesforceRequester::new(None).data_service().await.unwrap_err();
    assert!(matches!(err, sf_requester::Error::Auth(ref e) if e.is_config()));
}

#[tokio::test]
async fn test_strict_facade_rejects_unknown_grant_before_request() {
    let server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = AuthConfig::new(server.uri(), "cid", "csecret", "urn:ietf:params:oauth:grant-type:jwt-bearer");
    let err = SalesforceRequester::new(config)
        .with_strict(true)
        .connect()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        sf_requester::Error::Auth(ref e)
            if matches!(e.kind, sf_requester::auth::ErrorKind::UnsupportedGrantType(_))
    ));

    // Debug output of the credentials never shows the secret.
    assert!(!format!("{:?}", password_config(&server)).contains("test-client-secret"));
}
