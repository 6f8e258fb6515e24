//! Game service integration tests.

mod commands;
mod leaderboard;
mod support;
mod words;

#[cfg(feature = "http")]
mod http;
