//! Daily leaderboard ranking.

use serde_json::json;
use wordclimb::{InMemoryStore, RankedSet};

use crate::support::{self, climb, command, day_zero, RemoteWords};

#[tokio::test]
async fn empty_board() {
    let service = support::service();
    let body = command(&service, "leaderboard", "ana").await;
    assert_eq!(
        body,
        json!({ "type": "leaderboard", "entries": [], "totalPlayers": 0 })
    );
}

#[tokio::test]
async fn ranks_by_score_then_submission() {
    let service = support::service();
    climb(&service, "ana", &["bold", "fold", "ford", "word", "ward", "warm"]).await;
    climb(&service, "bo", &["cord", "word", "ward", "warm"]).await;
    climb(&service, "cy", &["cord", "card", "ward", "warm"]).await;

    // ana: first solve, 6 steps = 600; bo and cy: optimal = 1100, bo first.
    let body = command(&service, "leaderboard", "ana").await;
    assert_eq!(
        body,
        json!({
            "type": "leaderboard",
            "entries": [
                { "username": "bo", "score": 1100, "rank": 1 },
                { "username": "cy", "score": 1100, "rank": 2 },
                { "username": "ana", "score": 600, "rank": 3 },
            ],
            "totalPlayers": 3,
        })
    );
}

#[tokio::test]
async fn board_is_capped_but_counts_everyone() {
    let store = InMemoryStore::new();
    for i in 0..12 {
        store
            .add("leaderboard:1970-01-01", &format!("p{i:02}"), 100 * i)
            .await
            .unwrap();
    }
    let service = support::service_on(store, RemoteWords::default(), day_zero());

    let body = command(&service, "leaderboard", "ana").await;
    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0], json!({ "username": "p11", "score": 1100, "rank": 1 }));
    assert_eq!(entries[9]["username"], "p02");
    assert_eq!(body["totalPlayers"], 12);
}

#[tokio::test]
async fn boards_are_per_day() {
    let store = InMemoryStore::new();
    let today = support::service_on(store.clone(), RemoteWords::default(), day_zero());
    climb(&today, "ana", &["cord", "word", "ward", "warm"]).await;

    let tomorrow = support::service_on(
        store,
        RemoteWords::default(),
        day_zero().succ_opt().unwrap(),
    );
    let body = command(&tomorrow, "leaderboard", "ana").await;
    assert_eq!(body["totalPlayers"], 0);

    // Day 1 is lead → gold, optimal 3, and its first solve is still open.
    let body = climb(&tomorrow, "ana", &["load", "goad", "gold"]).await;
    assert_eq!(body["score"], 700 + 500 + 200);
}
