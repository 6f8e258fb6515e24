//! microsvc - Convention-based command handler framework.
//!
//! Build services by registering async command handlers on a `Service`.
//! Each handler receives a `Context<R>` with access to the input payload,
//! session variables, and the shared state.
//!
//! ## Handler Convention
//!
//! Each handler file follows this convention:
//!
//! ```ignore
//! // src/handlers/reset.rs
//!
//! pub const COMMAND: &str = "reset";
//!
//! pub fn guard<R>(ctx: &Context<R>) -> bool {
//!     ctx.session().post_id().is_some()
//! }
//!
//! pub async fn handle<S: GameStore, L: WordLookup + 'static>(
//!     ctx: Context<Game<S, L>>,
//! ) -> Result<Value, HandlerError> {
//!     // ...
//! }
//! ```

mod context;
mod error;
mod service;
mod session;

pub use context::{Context, ANONYMOUS};
pub use error::HandlerError;
pub use service::Service;
pub use session::{Session, PLAYER_NAME, POST_ID};

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{router, serve};

/// Register handler modules with a service using the convention pattern.
///
/// Each handler module must export:
/// - `COMMAND: &str`: the command name
/// - `guard(ctx) -> bool`: input validation
/// - `async handle(ctx) -> Result<Value, HandlerError>`: the handler
///
/// # Example
/// ```ignore
/// let service = wordclimb::register_handlers!(
///     microsvc::Service::new(game),
///     handlers::init,
///     handlers::submit_word,
/// );
/// ```
#[macro_export]
macro_rules! register_handlers {
    ($service:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        $service
        $(
            .command_guarded(
                $($seg)::+::COMMAND,
                $($seg)::+::guard,
                $($seg)::+::handle,
            )
        )+
    };
}
