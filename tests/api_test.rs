mod helpers;

use axum::http::StatusCode;
use helpers::{body_json, register_user, send, test_state};
use serde_json::json;

#[tokio::test]
async fn health_reports_ok() {
    let state = test_state();
    let response = send(&state, "GET", "/api/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn register_returns_user_without_password() {
    let state = test_state();
    let response = send(
        &state,
        "POST",
        "/api/register",
        Some(json!({ "name": "Ada", "email": "Ada@Example.com", "password": "abc123!@" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["user"]["name"], "Ada");
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert!(body["user"]["password"].is_null());
}

#[tokio::test]
async fn register_rejects_missing_fields_and_weak_password() {
    let state = test_state();

    let response = send(
        &state,
        "POST",
        "/api/register",
        Some(json!({ "name": "", "email": "a@b.com", "password": "abc123!@" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "All fields are required.");

    // 8 chars but no special character
    let response = send(
        &state,
        "POST",
        "/api/register",
        Some(json!({ "name": "Ada", "email": "a@b.com", "password": "abc12345" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_email_fails_second_registration() {
    let state = test_state();
    register_user(&state, "Ada", "ada@example.com", "abc123!@").await;

    let response = send(
        &state,
        "POST",
        "/api/register",
        Some(json!({ "name": "Other", "email": "ADA@EXAMPLE.COM", "password": "xyz789!@" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Email already registered."
    );
}

#[tokio::test]
async fn login_succeeds_and_rejects_bad_credentials() {
    let state = test_state();
    let user_id = register_user(&state, "Ada", "ada@example.com", "abc123!@").await;

    let response = send(
        &state,
        "POST",
        "/api/login",
        Some(json!({ "email": "ADA@example.com", "password": "abc123!@" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["user"]["id"], user_id.as_str());

    let response = send(
        &state,
        "POST",
        "/api/login",
        Some(json!({ "email": "ada@example.com", "password": "wrong!pw1" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["message"], "Invalid credentials.");

    let response = send(
        &state,
        "POST",
        "/api/login",
        Some(json!({ "email": "", "password": "" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Email and password are required."
    );
}

#[tokio::test]
async fn notes_crud_over_http() {
    let state = test_state();
    let user_id = register_user(&state, "Ada", "ada@example.com", "abc123!@").await;

    // create
    let response = send(
        &state,
        "POST",
        "/api/notes",
        Some(json!({ "userId": user_id, "content": "todo: buy milk" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let note_id = body_json(response).await["note"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    // list
    let response = send(&state, "GET", &format!("/api/notes?userId={user_id}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["notes"].as_array().unwrap().len(), 1);
    assert_eq!(body["notes"][0]["content"], "todo: buy milk");

    // list without userId
    let response = send(&state, "GET", "/api/notes", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Missing userId.");

    // delete
    let response = send(&state, "DELETE", &format!("/api/notes/{note_id}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "deleted");

    // delete again → 404
    let response = send(&state, "DELETE", &format!("/api/notes/{note_id}"), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Note not found.");
}

#[tokio::test]
async fn create_note_requires_user_and_content() {
    let state = test_state();
    let response = send(
        &state,
        "POST",
        "/api/notes",
        Some(json!({ "userId": "", "content": "  " })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "userId and content are required."
    );
}

#[tokio::test]
async fn deactivation_wipes_the_account() {
    let state = test_state();
    let user_id = register_user(&state, "Ada", "ada@example.com", "abc123!@").await;

    send(
        &state,
        "POST",
        "/api/notes",
        Some(json!({ "userId": user_id, "content": "todo: buy milk" })),
    )
    .await;

    // wrong password is rejected
    let response = send(
        &state,
        "POST",
        "/api/account/deactivate",
        Some(json!({ "userId": user_id, "password": "nope!pass" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // correct password deactivates
    let response = send(
        &state,
        "POST",
        "/api/account/deactivate",
        Some(json!({ "userId": user_id, "password": "abc123!@" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Account deactivated.");

    // the user can no longer log in
    let response = send(
        &state,
        "POST",
        "/api/login",
        Some(json!({ "email": "ada@example.com", "password": "abc123!@" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // their notes are gone
    let response = send(&state, "GET", &format!("/api/notes?userId={user_id}"), None).await;
    let body = body_json(response).await;
    assert!(body["notes"].as_array().unwrap().is_empty());

    // unknown user → 404
    let response = send(
        &state,
        "POST",
        "/api/account/deactivate",
        Some(json!({ "userId": "ghost", "password": "abc123!@" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn assistant_endpoint_applies_checklist_action() {
    let state = test_state();
    let user_id = register_user(&state, "Ada", "ada@example.com", "abc123!@").await;

    for content in ["idea: build app", "todo: buy milk"] {
        send(
            &state,
            "POST",
            "/api/notes",
            Some(json!({ "userId": user_id, "content": content })),
        )
        .await;
    }

    let response = send(
        &state,
        "POST",
        "/api/assistant",
        Some(json!({ "userId": user_id, "prompt": "checklist" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["actions"].as_array().unwrap().len(), 1);
    assert!(!body["reply"].as_str().unwrap().is_empty());

    // the checklist note was persisted through the store
    let response = send(&state, "GET", &format!("/api/notes?userId={user_id}"), None).await;
    let notes = body_json(response).await;
    let notes = notes["notes"].as_array().unwrap();
    assert_eq!(notes.len(), 3);
    assert!(notes
        .iter()
        .any(|n| n["content"].as_str().unwrap().contains("☐ todo: buy milk")));
}

#[tokio::test]
async fn assistant_with_no_notes_replies_and_mutates_nothing() {
    let state = test_state();
    let user_id = register_user(&state, "Ada", "ada@example.com", "abc123!@").await;

    let response = send(
        &state,
        "POST",
        "/api/assistant",
        Some(json!({ "userId": user_id, "prompt": "sort and checklist please" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["actions"].as_array().unwrap().is_empty());

    let response = send(&state, "GET", &format!("/api/notes?userId={user_id}"), None).await;
    assert!(body_json(response).await["notes"]
        .as_array()
        .unwrap()
        .is_empty());
}
