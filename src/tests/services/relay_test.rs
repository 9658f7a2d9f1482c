use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::client::AirtableClient;
use crate::error::RelayError;
use crate::models::form::FormPayload;
use crate::tests::common::fake_airtable::FakeAirtable;
use crate::tests::common::fixtures::{airtable_config, booking_form, relay, TEST_BASE_ID, TEST_TOKEN};

#[test]
fn test_table_url_escapes_table_name() {
    let client = AirtableClient::new(airtable_config("https://api.airtable.com/v0"));
    assert_eq!(
        client.table_url().unwrap().as_str(),
        "https://api.airtable.com/v0/appTestBase/Form%20Submissions"
    );

    let client = AirtableClient::new(airtable_config("https://api.airtable.com/v0/"));
    assert_eq!(
        client.table_url().unwrap().as_str(),
        "https://api.airtable.com/v0/appTestBase/Form%20Submissions"
    );
}

#[test]
fn test_invalid_endpoint_is_reported() {
    let client = AirtableClient::new(airtable_config("not a url"));
    assert!(matches!(client.table_url(), Err(RelayError::Endpoint(_))));
}

#[tokio::test]
async fn test_submit_posts_fields_with_bearer_token() {
    let fake = FakeAirtable::start(
        StatusCode::OK,
        json!({ "id": "rec123", "createdTime": "2025-06-14T18:30:05.000Z", "fields": {} }),
    )
    .await;

    let payload = FormPayload::from_pairs(booking_form());
    let created = relay(&fake.endpoint()).submit(&payload).await.unwrap();
    assert_eq!(created.id, "rec123");

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.base_id, TEST_BASE_ID);
    assert_eq!(request.table, "Form Submissions");
    assert_eq!(
        request.authorization.as_deref(),
        Some(format!("Bearer {}", TEST_TOKEN).as_str())
    );
    assert_eq!(request.content_type.as_deref(), Some("application/json"));

    let fields = &request.body.as_ref().unwrap()["fields"];
    assert_eq!(fields["Name"], json!("Ann Example"));
    assert_eq!(fields["Event Type"], json!("Birthday Party"));
    assert_eq!(fields["Email Address"], json!("ann@example.com"));
    assert_eq!(fields["Number of Seats"], json!(12));
    assert!(fields["Submission Date"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_upstream_rejection_carries_status() {
    let fake = FakeAirtable::start(
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({ "error": { "type": "INVALID_VALUE_FOR_COLUMN" } }),
    )
    .await;

    let err = relay(&fake.endpoint())
        .submit(&FormPayload::default())
        .await
        .unwrap_err();

    assert_eq!(err.upstream_status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
    match err {
        RelayError::ExternalApi { body, .. } => assert!(body.contains("INVALID_VALUE_FOR_COLUMN")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_api_is_transport_error() {
    // Bind and drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = relay(&format!("http://{}/v0", addr))
        .submit(&FormPayload::default())
        .await
        .unwrap_err();

    assert!(matches!(err, RelayError::Transport(_)));
}

#[tokio::test]
async fn test_list_records_uses_get_without_body() {
    let fake = FakeAirtable::start(
        StatusCode::OK,
        json!({
            "records": [
                { "id": "rec1", "fields": { "Name": "Ann" } },
                { "id": "rec2", "createdTime": "2025-06-14T18:30:05.000Z", "fields": {} }
            ]
        }),
    )
    .await;

    let client = AirtableClient::new(airtable_config(&fake.endpoint()));
    let records = client.list_records().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "rec1");
    assert_eq!(records[0].fields["Name"], json!("Ann"));
    assert!(records[0].created_time.is_none());

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::GET);
    assert!(requests[0].body.is_none());
    assert!(requests[0].content_type.is_none());
}

#[tokio::test]
async fn test_list_records_failure() {
    let fake = FakeAirtable::start(StatusCode::UNAUTHORIZED, json!({ "error": "AUTHENTICATION_REQUIRED" })).await;

    let client = AirtableClient::new(airtable_config(&fake.endpoint()));
    let err = client.list_records().await.unwrap_err();

    assert_eq!(err.upstream_status(), Some(StatusCode::UNAUTHORIZED));
}
