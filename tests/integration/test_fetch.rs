//! Integration tests for the typed request wrapper against a local server.
//!
//! A small axum app stands in for the posts API so every status path can be
//! driven without network access.

use std::time::Duration;

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tsex_core::{Lesson, ScriptedSession};
use tsex_fetch::{
    describe_posts, FetchClient, FetchOutcome, HttpMethod, NewPost, Post, PostsClient,
    RequestSpec, JSON_CONTENT_TYPE,
};
use tsex_lessons::{ApiClientLesson, FormModelLesson};

// ============================================================================
// Mock server
// ============================================================================

fn sample_posts() -> Vec<Value> {
    (1..=5)
        .map(|id| {
            json!({
                "userId": 1,
                "id": id,
                "title": format!("post {id}"),
                "body": "lorem ipsum",
            })
        })
        .collect()
}

async fn list_posts() -> Json<Vec<Value>> {
    Json(sample_posts())
}

async fn get_post(Path(id): Path<u32>) -> impl IntoResponse {
    match sample_posts().into_iter().find(|post| post["id"] == id) {
        Some(post) => (StatusCode::OK, Json(post)),
        None => (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))),
    }
}

async fn create_post(Json(mut body): Json<Value>) -> impl IntoResponse {
    body["id"] = json!(101);
    (StatusCode::CREATED, Json(body))
}

async fn echo_headers(headers: HeaderMap) -> Json<Value> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    Json(json!({
        "contentType": header("content-type"),
        "custom": header("x-custom"),
    }))
}

fn router() -> Router {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/:id", get(get_post))
        .route("/ok", get(|| async { Json(json!({ "id": 1 })) }))
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))) }),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>") }),
        )
        .route(
            "/numeric-error",
            get(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "error": 42 }))) }),
        )
        .route("/text", get(|| async { "plain text" }))
        .route("/empty", get(|| async { StatusCode::NO_CONTENT }))
        .route("/headers", get(echo_headers).post(echo_headers))
}

/// Spawns the mock API and returns its base URL.
async fn spawn_test_server() -> (String, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get local addr");

    let handle = tokio::spawn(async move {
        axum::serve(listener, router()).await.expect("Server failed");
    });

    // Give the server a moment to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    (format!("http://{addr}"), handle)
}

/// A base URL on a port nothing listens on.
async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get local addr");
    drop(listener);
    format!("http://{addr}")
}

// ============================================================================
// Status handling
// ============================================================================

#[tokio::test]
async fn test_success_decodes_payload() {
    let (base, _server) = spawn_test_server().await;

    let outcome = FetchClient::new()
        .request::<Value>(&RequestSpec::get(format!("{base}/ok")))
        .await;

    assert_eq!(
        outcome,
        FetchOutcome::Success {
            status: 200,
            payload: json!({ "id": 1 }),
        }
    );
}

#[tokio::test]
async fn test_error_body_message_is_used() {
    let (base, _server) = spawn_test_server().await;

    let outcome = FetchClient::new()
        .request::<Value>(&RequestSpec::get(format!("{base}/missing")))
        .await;

    assert_eq!(outcome, FetchOutcome::failure(404, "not found"));
}

#[tokio::test]
async fn test_unparseable_error_body_falls_back_to_status() {
    let (base, _server) = spawn_test_server().await;
    let client = FetchClient::new();

    let outcome = client
        .request::<Value>(&RequestSpec::get(format!("{base}/broken")))
        .await;
    assert_eq!(outcome, FetchOutcome::failure(500, "HTTP Error: 500"));

    let outcome = client
        .request::<Value>(&RequestSpec::get(format!("{base}/numeric-error")))
        .await;
    assert_eq!(outcome, FetchOutcome::failure(400, "HTTP Error: 400"));
}

#[tokio::test]
async fn test_unreachable_host_is_status_zero() {
    let base = closed_port_url().await;

    let outcome = FetchClient::new()
        .request::<Value>(&RequestSpec::get(format!("{base}/ok")))
        .await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.status(), 0);
    assert!(outcome.message().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn test_undecodable_success_body_keeps_status() {
    let (base, _server) = spawn_test_server().await;

    let outcome = FetchClient::new()
        .request::<Value>(&RequestSpec::get(format!("{base}/text")))
        .await;

    assert_eq!(outcome.status(), 200);
    assert!(outcome
        .message()
        .is_some_and(|m| m.starts_with("Invalid response body:")));
}

#[tokio::test]
async fn test_empty_success_body_is_null() {
    let (base, _server) = spawn_test_server().await;

    let outcome = FetchClient::new()
        .request::<Option<Post>>(&RequestSpec::get(format!("{base}/empty")))
        .await;

    assert_eq!(
        outcome,
        FetchOutcome::Success {
            status: 204,
            payload: None,
        }
    );
}

#[tokio::test]
async fn test_empty_body_for_required_payload_names_the_cause() {
    let (base, _server) = spawn_test_server().await;

    let outcome = FetchClient::new()
        .request::<Post>(&RequestSpec::get(format!("{base}/empty")))
        .await;

    assert_eq!(outcome.status(), 204);
    assert!(
        outcome
            .message()
            .is_some_and(|m| m.starts_with("Invalid response body: empty body")),
        "unexpected outcome: {outcome:?}"
    );
}

// ============================================================================
// Headers and bodies
// ============================================================================

#[tokio::test]
async fn test_default_content_type_is_sent() {
    let (base, _server) = spawn_test_server().await;

    let outcome = FetchClient::new()
        .request::<Value>(&RequestSpec::get(format!("{base}/headers")).with_header("X-Custom", "1"))
        .await;

    let payload = outcome.payload().expect("expected success");
    assert_eq!(payload["contentType"], JSON_CONTENT_TYPE);
    assert_eq!(payload["custom"], "1");
}

#[tokio::test]
async fn test_caller_content_type_wins() {
    let (base, _server) = spawn_test_server().await;

    let spec = RequestSpec::get(format!("{base}/headers")).with_header("content-type", "text/plain");
    let outcome = FetchClient::new().request::<Value>(&spec).await;

    let payload = outcome.payload().expect("expected success");
    assert_eq!(payload["contentType"], "text/plain");
}

#[tokio::test]
async fn test_json_body_is_posted() {
    let (base, _server) = spawn_test_server().await;

    let spec = RequestSpec::new(format!("{base}/posts"))
        .with_method(HttpMethod::Post)
        .with_json(&json!({ "title": "Hello", "body": "World", "userId": 999 }));
    let outcome = FetchClient::new().request::<Value>(&spec).await;

    assert_eq!(outcome.status(), 201);
    let payload = outcome.payload().expect("expected success");
    assert_eq!(payload["id"], 101);
    assert_eq!(payload["userId"], 999);
}

#[tokio::test]
async fn test_free_request_function() {
    let (base, _server) = spawn_test_server().await;

    let outcome = tsex_fetch::request::<Value>(&RequestSpec::get(format!("{base}/ok"))).await;

    assert!(outcome.is_success());
}

// ============================================================================
// Posts client
// ============================================================================

#[tokio::test]
async fn test_posts_client_round_trip() {
    let (base, _server) = spawn_test_server().await;
    let posts = PostsClient::new(format!("{base}/"));

    let listing = posts.get_posts().await;
    assert_eq!(listing.payload().map(Vec::len), Some(5));
    let lines = describe_posts(&listing);
    assert!(lines.contains(&"   total : 5".to_string()));

    let single = posts.get_post_by_id(2).await;
    assert_eq!(single.payload().map(|p| p.title.as_str()), Some("post 2"));

    let missing = posts.get_post_by_id(99).await;
    assert_eq!(missing, FetchOutcome::failure(404, "not found"));

    let created = posts
        .create_post(&NewPost {
            user_id: 7,
            title: "t".to_string(),
            body: "b".to_string(),
        })
        .await;
    assert_eq!(
        created,
        FetchOutcome::Success {
            status: 201,
            payload: Post {
                user_id: 7,
                id: 101,
                title: "t".to_string(),
                body: "b".to_string(),
            },
        }
    );
}

// ============================================================================
// Live lessons
// ============================================================================

#[tokio::test]
async fn test_api_client_lesson_against_mock() {
    let (base, _server) = spawn_test_server().await;
    let lesson = ApiClientLesson::new(PostsClient::new(base));
    let mut session = ScriptedSession::new(vec![""; 4]);
    let transcript = session.transcript();

    lesson
        .run(&mut session, "A type-safe API client")
        .await
        .expect("lesson failed");

    assert_eq!(session.remaining_inputs(), 0);
    assert!(transcript.contains("✅ Fetched posts!"));
    assert!(transcript.contains("   total : 5"));
    assert!(transcript.contains("✅ Fetched post (status 200):"));
    assert!(transcript.contains("✅ Created post (status 201):"));
    assert!(transcript.contains("Lesson complete!"));
}

#[tokio::test]
async fn test_api_client_lesson_survives_unreachable_api() {
    let lesson = ApiClientLesson::new(PostsClient::new(closed_port_url().await));
    let mut session = ScriptedSession::new(vec![""; 4]);
    let transcript = session.transcript();

    lesson
        .run(&mut session, "A type-safe API client")
        .await
        .expect("request failures are part of the lesson");

    assert!(transcript.contains("❌ Failed to fetch posts:"));
    assert_eq!(transcript.count("   status : 0"), 3);
    assert!(transcript.contains("Lesson complete!"));
}

#[tokio::test]
async fn test_form_model_lesson_submits_only_valid_form() {
    let (base, _server) = spawn_test_server().await;
    let lesson = FormModelLesson::new(PostsClient::new(base));
    let mut session = ScriptedSession::new(vec![""; 3]);
    let transcript = session.transcript();

    lesson
        .run(&mut session, "Designing a type-safe form model")
        .await
        .expect("lesson failed");

    assert!(transcript.contains("❌ Validation failed:"));
    assert!(transcript.contains("   body   : body must be at least 10 characters"));
    assert_eq!(transcript.count("✅ Submitted post (status 201):"), 1);
    assert!(transcript.contains(r#"     "title": "Type-safe forms","#));
}
