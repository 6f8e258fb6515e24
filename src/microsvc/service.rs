//! Service - command handler registry and dispatch for microsvc.
//!
//! `Service<R>` holds shared state and a set of named async command handlers.
//! Each handler receives a `Context<R>` and resolves to `Result<Value, HandlerError>`.
//!
//! ## Example
//!
//! ```ignore
//! use wordclimb::microsvc::{Service, Session};
//! use serde_json::json;
//!
//! let service = Service::new(state)
//!     .command("ping", |_ctx| async { Ok(json!({ "pong": true })) });
//!
//! let result = service.dispatch("ping", json!({}), Session::new()).await;
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::context::Context;
use super::error::HandlerError;
use super::session::Session;

/// Boxed future returned by a registered handler.
type HandlerFuture = Pin<Box<dyn Future<Output = Result<Value, HandlerError>> + Send>>;

type Guard<R> = Box<dyn Fn(&Context<R>) -> bool + Send + Sync>;
type Handle<R> = Box<dyn Fn(Context<R>) -> HandlerFuture + Send + Sync>;

/// A registered command handler with optional guard.
struct CommandHandler<R> {
    guard: Option<Guard<R>>,
    handle: Handle<R>,
}

/// A service that routes commands to handler functions.
///
/// Generic over `R`, the shared state. Handlers receive a `Context<R>`
/// and can access the state via `ctx.repo()`.
pub struct Service<R> {
    repo: Arc<R>,
    handlers: HashMap<String, CommandHandler<R>>,
}

fn boxed<R, F, Fut>(handler: F) -> Handle<R>
where
    F: Fn(Context<R>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value, HandlerError>> + Send + 'static,
{
    Box::new(move |ctx| -> HandlerFuture { Box::pin(handler(ctx)) })
}

impl<R: Send + Sync + 'static> Service<R> {
    /// Create a new service with the given state.
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
            handlers: HashMap::new(),
        }
    }

    /// Register a command handler.
    ///
    /// Uses builder pattern, returns `self` for chaining.
    pub fn command<F, Fut>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(Context<R>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, HandlerError>> + Send + 'static,
    {
        self.handlers.insert(
            name.to_string(),
            CommandHandler {
                guard: None,
                handle: boxed(handler),
            },
        );
        self
    }

    /// Register a command handler with a guard function.
    ///
    /// The guard is called before the handler. If it returns `false`,
    /// the command is rejected with `HandlerError::GuardRejected`.
    pub fn command_guarded<G, F, Fut>(mut self, name: &str, guard: G, handler: F) -> Self
    where
        G: Fn(&Context<R>) -> bool + Send + Sync + 'static,
        F: Fn(Context<R>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, HandlerError>> + Send + 'static,
    {
        self.handlers.insert(
            name.to_string(),
            CommandHandler {
                guard: Some(Box::new(guard)),
                handle: boxed(handler),
            },
        );
        self
    }

    /// Dispatch a command by name.
    ///
    /// Builds a `Context` from the input and session, looks up the handler,
    /// runs the guard (if any), then awaits the handler.
    pub async fn dispatch(
        &self,
        command: &str,
        input: Value,
        session: Session,
    ) -> Result<Value, HandlerError> {
        let handler = self
            .handlers
            .get(command)
            .ok_or_else(|| HandlerError::UnknownCommand(command.to_string()))?;

        let ctx = Context::new(input, session, self.repo.clone());

        if let Some(guard) = &handler.guard {
            if !guard(&ctx) {
                debug!(command, "guard rejected command");
                return Err(HandlerError::GuardRejected(command.to_string()));
            }
        }

        (handler.handle)(ctx).await
    }

    /// List registered command names.
    pub fn commands(&self) -> Vec<&str> {
        self.handlers.keys().map(|s| s.as_str()).collect()
    }

    /// Get a reference to the shared state.
    pub fn repo(&self) -> &R {
        &self.repo
    }
}
