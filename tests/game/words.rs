//! Words missing from the local list go to the remote dictionary once and
//! are cached afterwards.

use wordclimb::dictionary::cache_key;
use wordclimb::{InMemoryStore, KeyValueStore};

use crate::support::{day_zero, service_on, submit, RemoteWords};

#[tokio::test]
async fn remote_word_is_accepted_and_cached() {
    let store = InMemoryStore::new();
    let remote = RemoteWords::knowing(&["wold"]);
    let service = service_on(store.clone(), remote.clone(), day_zero());

    let body = submit(&service, "ana", "wold").await.unwrap();
    assert_eq!(body["valid"], true);
    assert_eq!(remote.calls(), 1);
    assert_eq!(store.get(&cache_key("wold")).await.unwrap().as_deref(), Some("true"));

    let body = submit(&service, "bo", "WOLD").await.unwrap();
    assert_eq!(body["valid"], true);
    assert_eq!(remote.calls(), 1);
}

#[tokio::test]
async fn remote_rejection_is_cached_too() {
    let store = InMemoryStore::new();
    let remote = RemoteWords::knowing(&[]);
    let service = service_on(store.clone(), remote.clone(), day_zero());

    for player in ["ana", "bo"] {
        let body = submit(&service, player, "xold").await.unwrap();
        assert_eq!(body["message"], "Not a valid English word!");
    }
    assert_eq!(remote.calls(), 1);
    assert_eq!(store.get(&cache_key("xold")).await.unwrap().as_deref(), Some("false"));
}

#[tokio::test]
async fn local_words_never_go_remote() {
    let remote = RemoteWords::default();
    let service = service_on(InMemoryStore::new(), remote.clone(), day_zero());

    submit(&service, "ana", "cord").await.unwrap();
    submit(&service, "ana", "xyzq").await.unwrap();
    assert_eq!(remote.calls(), 1);
}
