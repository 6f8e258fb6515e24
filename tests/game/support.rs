//! Shared fixtures: a game pinned to a known day, backed by an in-memory
//! store and a scripted remote dictionary.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{json, Value};
use wordclimb::dictionary::{Dictionary, LookupOutcome, WordLookup};
use wordclimb::game::Game;
use wordclimb::handlers;
use wordclimb::microsvc::{HandlerError, Service, Session};
use wordclimb::{FixedClock, InMemoryStore};

pub const POST: &str = "post-1";

/// Remote dictionary that knows a fixed set of extra words and counts calls.
#[derive(Clone, Default)]
pub struct RemoteWords {
    known: Vec<&'static str>,
    calls: Arc<AtomicUsize>,
}

impl RemoteWords {
    pub fn knowing(known: &[&'static str]) -> Self {
        Self {
            known: known.to_vec(),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WordLookup for RemoteWords {
    async fn lookup(&self, word: &str) -> LookupOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.known.iter().any(|k| k.eq_ignore_ascii_case(word)) {
            LookupOutcome::Found
        } else {
            LookupOutcome::NotFound
        }
    }
}

pub type GameService = Service<Game<InMemoryStore, RemoteWords>>;

/// 1970-01-01 is day 0: cold → warm, optimal 4.
pub fn day_zero() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
}

pub fn service_on(store: InMemoryStore, remote: RemoteWords, day: NaiveDate) -> GameService {
    handlers::service(
        Game::new(store, Dictionary::builtin(), remote).with_clock(FixedClock(day)),
    )
}

pub fn service() -> GameService {
    service_on(InMemoryStore::new(), RemoteWords::default(), day_zero())
}

pub async fn submit(
    service: &GameService,
    player: &str,
    word: &str,
) -> Result<Value, HandlerError> {
    service
        .dispatch(
            "submit-word",
            json!({ "word": word }),
            Session::for_player(player, POST),
        )
        .await
}

/// Submit every word in order, returning the last response.
pub async fn climb(service: &GameService, player: &str, words: &[&str]) -> Value {
    let mut last = Value::Null;
    for word in words {
        last = submit(service, player, word).await.unwrap();
        assert_eq!(last["valid"], true, "{word} rejected: {last}");
    }
    last
}

pub async fn command(service: &GameService, command: &str, player: &str) -> Value {
    service
        .dispatch(command, json!({}), Session::for_player(player, POST))
        .await
        .unwrap()
}
