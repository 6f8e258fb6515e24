//! HTTP transport and remote dictionary tests.
//!
//! Starts axum servers on ephemeral ports and exercises them with reqwest.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use wordclimb::dictionary::{HttpWordLookup, LookupOutcome, WordLookup};
use wordclimb::microsvc;

use crate::support::{self, GameService};

async fn start(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn start_game(service: GameService) -> String {
    start(microsvc::router(Arc::new(service))).await
}

#[tokio::test]
async fn health_lists_commands() {
    let base = start_game(support::service()).await;
    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "ok": true,
            "commands": ["clear-progress", "init", "leaderboard", "reset", "submit-word"],
        })
    );
}

#[tokio::test]
async fn init_over_get_with_headers() {
    let base = start_game(support::service()).await;
    let resp = reqwest::Client::new()
        .get(format!("{base}/api/init"))
        .header("x-player-name", "ana")
        .header("x-post-id", "post-9")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["type"], "init");
    assert_eq!(body["postId"], "post-9");
    assert_eq!(body["username"], "ana");
    assert_eq!(body["playerState"]["path"], json!(["cold"]));
}

#[tokio::test]
async fn submit_over_post() {
    let base = start_game(support::service()).await;
    let client = reqwest::Client::new();
    let submit = |word: &'static str| {
        client
            .post(format!("{base}/api/submit-word"))
            .header("x-player-name", "ana")
            .header("x-post-id", "post-9")
            .json(&json!({ "word": word }))
            .send()
    };

    let resp = submit("cord").await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["path"], json!(["cold", "cord"]));

    for word in ["word", "ward", "warm"] {
        assert_eq!(submit(word).await.unwrap().status(), 200);
    }

    let resp = submit("worm").await.unwrap();
    assert_eq!(resp.status(), 422);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "rejected: puzzle already completed" }));
}

#[tokio::test]
async fn missing_post_id_returns_400() {
    let base = start_game(support::service()).await;
    let resp = reqwest::get(format!("{base}/api/init")).await.unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "guard rejected command: init" }));
}

#[tokio::test]
async fn unknown_command_returns_404() {
    let base = start_game(support::service()).await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/nonexistent"))
        .header("x-post-id", "post-9")
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

async fn fake_dictionary(Path(word): Path<String>) -> StatusCode {
    match word.as_str() {
        "wold" => StatusCode::OK,
        "boom" => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::NOT_FOUND,
    }
}

#[tokio::test]
async fn http_lookup_maps_statuses() {
    let base = start(Router::new().route("/entries/en/:word", get(fake_dictionary))).await;
    let lookup = HttpWordLookup::new(format!("{base}/entries/en/"));

    assert_eq!(lookup.lookup("wold").await, LookupOutcome::Found);
    assert_eq!(lookup.lookup("xold").await, LookupOutcome::NotFound);
    assert!(matches!(lookup.lookup("boom").await, LookupOutcome::Unavailable(_)));
}

#[tokio::test]
async fn http_lookup_unreachable_is_unavailable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let lookup =
        HttpWordLookup::with_timeout(format!("http://{addr}/entries/en"), Duration::from_secs(2))
            .unwrap();
    assert!(matches!(lookup.lookup("wold").await, LookupOutcome::Unavailable(_)));
}
