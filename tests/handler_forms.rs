mod common;

use axum_test::TestServer;
use serde_json::{Value, json};

fn server() -> TestServer {
    let state = common::test_state(common::test_config(&["--limiter-enabled", "false"]));
    TestServer::new(common::app(state)).unwrap()
}

fn submission() -> Value {
    json!({
        "user_id": 1,
        "status": "submitted",
        "full_name": "Alice Rivera",
        "has_changed_name": false,
        "social_security_number": "000-12-3456",
        "social_security_date": "2008-06-01",
        "social_security_country": "Belize",
        "passport_number": "P1234567",
        "passport_date": "2019-03-11",
        "passport_country": "Belize",
        "date_of_birth": "1990-01-15",
        "place_of_birth": "Belmopan",
        "nationality": "Belizean",
        "address": "12 Hummingbird Hwy, Belmopan",
        "phone_number": "+501-222-0000",
        "residential_email": "alice@example.com"
    })
}

#[tokio::test]
async fn submitting_a_form_creates_the_resource() {
    let server = server();

    let response = server
        .post("/v1/forms")
        .add_header("authorization", common::bearer(common::ACTIVATED_TOKEN))
        .json(&submission())
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    assert_eq!(response.header("location"), "/v1/forms/1");

    let body = response.json::<Value>();
    assert_eq!(body["form"]["id"], 1);
    assert_eq!(body["form"]["full_name"], "Alice Rivera");
    assert_eq!(body["form"]["version"], 1);
}

#[tokio::test]
async fn submitted_forms_can_be_read_back() {
    let server = server();

    server
        .post("/v1/forms")
        .add_header("authorization", common::bearer(common::ACTIVATED_TOKEN))
        .json(&submission())
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .get("/v1/forms/1")
        .add_header("authorization", common::bearer(common::READ_ONLY_TOKEN))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["form"]["nationality"], "Belizean");
}

#[tokio::test]
async fn unknown_form_id_is_not_found() {
    let server = server();

    let response = server
        .get("/v1/forms/424242")
        .add_header("authorization", common::bearer(common::ACTIVATED_TOKEN))
        .await;

    response.assert_status_not_found();
    let body = response.json::<Value>();
    assert_eq!(body["error"], "the requested resource could not be found");
}

#[tokio::test]
async fn optional_fields_default_to_empty() {
    let server = server();

    let response = server
        .post("/v1/forms")
        .add_header("authorization", common::bearer(common::ACTIVATED_TOKEN))
        .json(&json!({
            "user_id": 1,
            "status": "draft",
            "full_name": "Alice Rivera",
            "date_of_birth": "1990-01-15",
            "place_of_birth": "Belmopan",
            "nationality": "Belizean"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["form"]["spouse_name"], "");
    assert_eq!(body["form"]["archived"], false);
}
