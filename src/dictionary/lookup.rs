//! Remote word lookup used as a dictionary fallback.

use async_trait::async_trait;

/// Outcome of asking an external service whether a word exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The service knows the word.
    Found,
    /// The service definitively does not know the word.
    NotFound,
    /// Rate limited, server error, network failure, or lookup disabled.
    Unavailable(String),
}

/// An external word-lookup service.
#[async_trait]
pub trait WordLookup: Send + Sync {
    async fn lookup(&self, word: &str) -> LookupOutcome;
}

/// `None` disables remote lookups.
#[async_trait]
impl<L: WordLookup> WordLookup for Option<L> {
    async fn lookup(&self, word: &str) -> LookupOutcome {
        match self {
            Some(inner) => inner.lookup(word).await,
            None => LookupOutcome::Unavailable("remote lookup disabled".into()),
        }
    }
}

#[cfg(feature = "http")]
pub use http::HttpWordLookup;

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use async_trait::async_trait;
    use reqwest::StatusCode;

    use super::{LookupOutcome, WordLookup};

    /// Looks words up with `GET <base_url>/<word>`.
    ///
    /// Any 2xx means found, 404 means not found, everything else is unavailable.
    #[derive(Debug, Clone)]
    pub struct HttpWordLookup {
        client: reqwest::Client,
        base_url: String,
    }

    impl HttpWordLookup {
        pub fn new(base_url: impl Into<String>) -> Self {
            Self::with_client(reqwest::Client::new(), base_url)
        }

        /// Build a lookup whose requests give up after `timeout`.
        pub fn with_timeout(
            base_url: impl Into<String>,
            timeout: Duration,
        ) -> Result<Self, reqwest::Error> {
            let client = reqwest::Client::builder().timeout(timeout).build()?;
            Ok(Self::with_client(client, base_url))
        }

        pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
            let base_url = base_url.into().trim_end_matches('/').to_string();
            Self { client, base_url }
        }

        pub fn base_url(&self) -> &str {
            &self.base_url
        }
    }

    #[async_trait]
    impl WordLookup for HttpWordLookup {
        async fn lookup(&self, word: &str) -> LookupOutcome {
            let mut url = match reqwest::Url::parse(&self.base_url) {
                Ok(url) => url,
                Err(e) => return LookupOutcome::Unavailable(format!("bad base url: {}", e)),
            };
            match url.path_segments_mut() {
                Ok(mut segments) => {
                    segments.pop_if_empty().push(word);
                }
                Err(()) => {
                    return LookupOutcome::Unavailable("base url cannot take a path".into())
                }
            }

            match self.client.get(url).send().await {
                Ok(resp) if resp.status().is_success() => LookupOutcome::Found,
                Ok(resp) if resp.status() == StatusCode::NOT_FOUND => LookupOutcome::NotFound,
                Ok(resp) => LookupOutcome::Unavailable(format!("status {}", resp.status())),
                Err(e) => LookupOutcome::Unavailable(e.to_string()),
            }
        }
    }
}
