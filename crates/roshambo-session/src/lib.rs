//! Match session state for Roshambo.
//!
//! A [`Session`] is the single object shared by every participant task in
//! one match:
//!
//! 1. **Timeout configuration** ([`SessionConfig`]) — the readiness and
//!    pick deadlines, immutable for the session's lifetime.
//! 2. **Participant registry** — who is currently in the match, with an
//!    idempotent, concurrency-safe [`disconnect`](Session::disconnect).
//!
//! Everything else about a participant (their connection, their protocol
//! state) lives in the engine layer above; the session deliberately knows
//! only who is present and how long exchanges may take.

mod error;
mod session;

pub use error::SessionError;
pub use session::{Session, SessionConfig};
