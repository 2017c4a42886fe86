//! Data calls through the facade: authenticate, then query and write.

use super::common::{mount_token_endpoint, requester, ACCESS_TOKEN};
use serde::Deserialize;
use serde_json::json;
use sf_requester::client::security::soql;
use sf_requester::rest::{CollectionResult, CreateResult};
use sf_requester::QueryResult;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize)]
struct Account {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
}

#[tokio::test]
async fn test_query_after_login() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/query/"))
        .and(query_param("q", "SELECT Id, Name FROM Account"))
        .and(header("Authorization", format!("Bearer {ACCESS_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalSize": 2,
            "done": true,
            "records": [
                {"attributes": {"type": "Account"}, "Id": "001a", "Name": "Acme"},
                {"attributes": {"type": "Account"}, "Id": "001b", "Name": "Widget Co"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut data = requester(&server).data_service().await.unwrap();
    let page: QueryResult<Account> = data
        .query("SELECT Id, Name FROM Account")
        .execute_as()
        .await
        .unwrap()
        .unwrap();

    assert_eq!(page.total_size, 2);
    assert_eq!(page.records[0].id, "001a");
    assert_eq!(page.records[1].name, "Widget Co");
}

#[tokio::test]
async fn test_query_with_escaped_and_encoded_input() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;

    let expected = "SELECT Id FROM Account WHERE Name = 'O\\'Brien & Sons'";
    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/query/"))
        .and(query_param("q", expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalSize": 0, "done": true, "records": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let name = soql::escape_string("O'Brien & Sons");
    let statement = format!("SELECT Id FROM Account WHERE Name = '{name}'");
    assert_eq!(statement, expected);

    let mut data = requester(&server).data_service().await.unwrap();
    let result = data
        .query(&soql::encode_query(&statement))
        .execute()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(result["done"], true);
}

#[tokio::test]
async fn test_insert_then_update() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;

    Mock::given(method("POST"))
        .and(path("/services/data/v62.0/sobjects/Account"))
        .and(body_json(json!({"Name": "Acme"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "001xx000003DgAAAS", "success": true, "errors": []
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/services/data/v62.0/sobjects/Account/001xx000003DgAAAS"))
        .and(body_json(json!({"Industry": "Technology"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut data = requester(&server).data_service().await.unwrap();

    let created: CreateResult = data
        .insert_record("Account", json!({"Name": "Acme"}))
        .execute_as()
        .await
        .unwrap()
        .unwrap();
    assert!(created.success);

    let updated = data
        .update_record("Account", &created.id, json!({"Industry": "Technology"}))
        .execute()
        .await
        .unwrap();
    assert_eq!(updated, Some(serde_json::Value::Null));
}

#[tokio::test]
async fn test_composite_insert_partial_failure_is_data() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;

    let r1 = json!({"attributes": {"type": "Contact"}, "LastName": "Smith"});
    let r2 = json!({"attributes": {"type": "Contact"}});
    Mock::given(method("POST"))
        .and(path("/services/data/v62.0/composite/sobjects/"))
        .and(body_json(json!({"allOrNone": false, "records": [r1.clone(), r2.clone()]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "003a", "success": true, "errors": []},
            {"success": false, "errors": [{
                "statusCode": "REQUIRED_FIELD_MISSING",
                "message": "Required fields are missing: [LastName]",
                "fields": ["LastName"]
            }]}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let mut data = requester(&server).data_service().await.unwrap();
    let results: Vec<CollectionResult> = data
        .composite_insert(vec![r1, r2], false)
        .execute_as()
        .await
        .unwrap()
        .unwrap();

    assert!(results[0].success);
    assert!(!results[1].success);
    assert_eq!(results[1].errors[0].fields, vec!["LastName"]);
}

#[tokio::test]
async fn test_rest_service_limits() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/limits"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Sforce-Limit-Info", "api-usage=25/15000")
                .set_body_json(json!({"DailyApiRequests": {"Max": 15000, "Remaining": 14975}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let rest = requester(&server).rest_service().await.unwrap();
    let limits = rest.get("/services/data/v62.0/limits").await.unwrap();
    assert_eq!(limits["DailyApiRequests"]["Remaining"], 14975);
}

#[tokio::test]
async fn test_strict_data_service_without_pending_request() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;

    let mut data = requester(&server)
        .with_strict(true)
        .data_service()
        .await
        .unwrap();
    let err = data.execute().await.unwrap_err();
    assert!(matches!(err.kind, sf_requester::rest::ErrorKind::Unsupported(_)));
}
