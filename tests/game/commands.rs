//! Command flow: init, submitting words, completion, reset and clearing.

use serde_json::json;
use wordclimb::microsvc::{HandlerError, Session};
use wordclimb::KeyValueStore;

use crate::support::{self, climb, command, submit, POST};

#[tokio::test]
async fn init_returns_fresh_state() {
    let service = support::service();
    let body = command(&service, "init", "ana").await;

    assert_eq!(
        body,
        json!({
            "type": "init",
            "postId": POST,
            "username": "ana",
            "puzzle": { "start": "cold", "end": "warm", "optimal": 4, "number": 0 },
            "playerState": { "path": ["cold"], "completed": false },
        })
    );
}

#[tokio::test]
async fn init_defaults_to_anonymous() {
    let service = support::service();
    let mut session = Session::new();
    session.set("x-post-id", POST);

    let body = service.dispatch("init", json!({}), session).await.unwrap();
    assert_eq!(body["username"], "anonymous");
}

#[tokio::test]
async fn valid_word_extends_path() {
    let service = support::service();
    let body = submit(&service, "ana", "cord").await.unwrap();

    assert_eq!(
        body,
        json!({
            "type": "submitWord",
            "postId": POST,
            "valid": true,
            "path": ["cold", "cord"],
            "completed": false,
        })
    );

    let init = command(&service, "init", "ana").await;
    assert_eq!(init["playerState"]["path"], json!(["cold", "cord"]));
}

#[tokio::test]
async fn submitted_word_is_trimmed_and_lowercased() {
    let service = support::service();
    let body = submit(&service, "ana", "  CORD ").await.unwrap();
    assert_eq!(body["valid"], true);
    assert_eq!(body["path"], json!(["cold", "cord"]));
}

#[tokio::test]
async fn rejected_words_leave_path_alone() {
    let service = support::service();

    let cases = [
        ("xyzz", "Not a valid English word!"),
        ("cold", "You already used this word!"),
        ("warm", "Must change exactly ONE letter!"),
    ];
    for (word, message) in cases {
        let body = submit(&service, "ana", word).await.unwrap();
        assert_eq!(
            body,
            json!({
                "type": "submitWord",
                "postId": POST,
                "valid": false,
                "message": message,
                "path": ["cold"],
            }),
            "{word}"
        );
    }
}

#[tokio::test]
async fn optimal_first_solve_scores_1300() {
    let service = support::service();
    let body = climb(&service, "ana", &["cord", "word", "ward", "warm"]).await;

    assert_eq!(
        body,
        json!({
            "type": "submitWord",
            "postId": POST,
            "valid": true,
            "path": ["cold", "cord", "word", "ward", "warm"],
            "completed": true,
            "score": 1300,
            "scoreDetails": {
                "score": 1300,
                "steps": 4,
                "optimal": 4,
                "isOptimal": true,
                "bonuses": { "optimal": 500, "firstSolve": 200 },
            },
        })
    );

    let init = command(&service, "init", "ana").await;
    assert_eq!(init["playerState"]["completed"], true);
    assert_eq!(init["playerState"]["score"], 1300);
}

#[tokio::test]
async fn second_solver_gets_no_first_solve_bonus() {
    let service = support::service();
    climb(&service, "ana", &["cord", "word", "ward", "warm"]).await;

    let body = climb(&service, "bo", &["cord", "card", "ward", "warm"]).await;
    assert_eq!(body["score"], 1100);
    assert_eq!(body["scoreDetails"]["bonuses"], json!({ "optimal": 500 }));
}

#[tokio::test]
async fn longer_ladder_loses_optimal_bonus() {
    let service = support::service();
    let body = climb(&service, "ana", &["bold", "fold", "ford", "word", "ward", "warm"]).await;
    assert_eq!(body["scoreDetails"]["steps"], 6);
    assert_eq!(body["scoreDetails"]["isOptimal"], false);
    assert_eq!(body["score"], 400 + 200);
}

#[tokio::test]
async fn completed_puzzle_rejects_more_words() {
    let service = support::service();
    climb(&service, "ana", &["cord", "word", "ward", "warm"]).await;

    let result = submit(&service, "ana", "worm").await;
    assert!(matches!(result, Err(HandlerError::Rejected(_))));
}

#[tokio::test]
async fn progress_is_per_post() {
    let service = support::service();
    submit(&service, "ana", "cord").await.unwrap();

    let other = service
        .dispatch("init", json!({}), Session::for_player("ana", "post-2"))
        .await
        .unwrap();
    assert_eq!(other["playerState"]["path"], json!(["cold"]));
}

#[tokio::test]
async fn reset_restarts_the_ladder() {
    let service = support::service();
    climb(&service, "ana", &["cord", "word", "ward", "warm"]).await;

    let body = command(&service, "reset", "ana").await;
    assert_eq!(
        body,
        json!({
            "type": "reset",
            "postId": POST,
            "puzzle": { "start": "cold", "end": "warm", "optimal": 4, "number": 0 },
        })
    );

    let init = command(&service, "init", "ana").await;
    assert_eq!(
        init["playerState"],
        json!({ "path": ["cold"], "completed": false })
    );

    // Replaying is allowed after a reset; the first-solve bonus is spent.
    let body = climb(&service, "ana", &["cord", "word", "ward", "warm"]).await;
    assert_eq!(body["score"], 1100);
}

#[tokio::test]
async fn clear_progress_deletes_player_keys() {
    let service = support::service();
    climb(&service, "ana", &["cord", "word", "ward", "warm"]).await;

    let body = command(&service, "clear-progress", "ana").await;
    assert_eq!(body, json!({ "type": "cleared", "message": "Progress cleared" }));

    let prefix = format!("player:ana:post:{POST}:day:1970-01-01");
    let store = service.repo().store();
    for suffix in ["path", "completed", "score"] {
        let key = format!("{prefix}:{suffix}");
        assert_eq!(store.get(&key).await.unwrap(), None, "{key}");
    }
    assert_eq!(
        store.get("puzzle:1970-01-01:firstSolve").await.unwrap().as_deref(),
        Some("ana")
    );
}

#[tokio::test]
async fn every_command_requires_a_post_id() {
    let service = support::service();
    for name in ["init", "submit-word", "reset", "leaderboard", "clear-progress"] {
        let mut session = Session::new();
        session.set("x-player-name", "ana");
        let err = service
            .dispatch(name, json!({ "word": "cord" }), session)
            .await
            .unwrap_err();
        assert!(matches!(err, HandlerError::GuardRejected(ref c) if c == name), "{name}");
        assert_eq!(err.status_code(), 400, "{name}");
    }
}

#[tokio::test]
async fn submit_requires_a_word() {
    let service = support::service();
    let result = service
        .dispatch("submit-word", json!({}), Session::for_player("ana", POST))
        .await;
    assert!(matches!(result, Err(HandlerError::GuardRejected(ref c)) if c == "submit-word"));

    let result = service
        .dispatch("submit-word", json!({ "word": 7 }), Session::for_player("ana", POST))
        .await;
    assert!(matches!(result, Err(HandlerError::DecodeFailed(_))));
}

#[test]
fn registers_every_command() {
    let service = support::service();
    let mut commands = service.commands();
    commands.sort_unstable();
    assert_eq!(
        commands,
        vec!["clear-progress", "init", "leaderboard", "reset", "submit-word"]
    );
}
