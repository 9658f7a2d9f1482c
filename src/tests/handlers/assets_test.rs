use axum::http::{header, StatusCode};
use serde_json::json;
use std::sync::Arc;

use crate::error::AssetError;
use crate::services::store::MockAssetStore;
use crate::tests::common::fake_airtable::FakeAirtable;
use crate::tests::common::fixtures::{app_state, directory_state, site_dir, test_server};

const SUBMIT_PATH: &str = "/api/submit-form";

#[tokio::test]
async fn test_root_serves_index_page() {
    let fake = FakeAirtable::start(StatusCode::OK, json!({})).await;
    let site = site_dir();
    let server = test_server(directory_state(&fake.endpoint(), &site), SUBMIT_PATH, true);

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "<h1>The Pizza Box</h1>");
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/html; charset=utf-8"
    );
}

#[tokio::test]
async fn test_extensionless_path_serves_html_page() {
    let fake = FakeAirtable::start(StatusCode::OK, json!({})).await;
    let site = site_dir();
    let server = test_server(directory_state(&fake.endpoint(), &site), SUBMIT_PATH, true);

    let response = server.get("/menu").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "<h1>Menu</h1>");
}

#[tokio::test]
async fn test_directory_url_falls_back_to_index() {
    let fake = FakeAirtable::start(StatusCode::OK, json!({})).await;
    let site = site_dir();
    let server = test_server(directory_state(&fake.endpoint(), &site), SUBMIT_PATH, true);

    let response = server.get("/about").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "<h1>About us</h1>");
}

#[tokio::test]
async fn test_encoded_file_name_is_served() {
    let fake = FakeAirtable::start(StatusCode::OK, json!({})).await;
    let site = site_dir();
    std::fs::write(site.path().join("pizza menu.html"), "<h1>Pizza menu</h1>").unwrap();
    let server = test_server(directory_state(&fake.endpoint(), &site), SUBMIT_PATH, true);

    let response = server.get("/pizza%20menu").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "<h1>Pizza menu</h1>");
}

#[tokio::test]
async fn test_unknown_path_gets_custom_404_page() {
    let fake = FakeAirtable::start(StatusCode::OK, json!({})).await;
    let site = site_dir();
    let server = test_server(directory_state(&fake.endpoint(), &site), SUBMIT_PATH, true);

    let response = server.get("/specials").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "<h1>Page not found</h1>");
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/html; charset=utf-8"
    );
}

#[tokio::test]
async fn test_unknown_path_without_custom_page_is_plain_404() {
    let fake = FakeAirtable::start(StatusCode::OK, json!({})).await;
    let site = site_dir();
    std::fs::remove_file(site.path().join("404.html")).unwrap();
    let server = test_server(directory_state(&fake.endpoint(), &site), SUBMIT_PATH, true);

    let response = server.get("/specials").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Not Found");
}

#[tokio::test]
async fn test_store_failure_returns_generic_500() {
    let fake = FakeAirtable::start(StatusCode::OK, json!({})).await;
    let mut store = MockAssetStore::new();
    store.expect_fetch().times(1).returning(|path| {
        Err(AssetError::Io {
            path: format!("/srv/site{}", path),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"),
        })
    });
    let server = test_server(app_state(&fake.endpoint(), Arc::new(store)), SUBMIT_PATH, true);

    let response = server.get("/menu").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let text = response.text();
    assert_eq!(text, "Internal Server Error");
    assert!(!text.contains("disk on fire"));
}
