//! # Roshambo
//!
//! A server-side backend for simultaneous-pick turn games — the family
//! where every participant secretly commits a move each round and the
//! moves are revealed together, rock-paper-scissors being the canonical
//! member.
//!
//! The heart of the crate is the per-participant protocol engine
//! ([`Player`]): a timeout-bounded request/response cycle over one owned
//! connection, with a readiness handshake before play, a validated
//! choice-collection handshake per round, and deterministic cleanup when
//! the remote end misbehaves or disconnects. Around it sit the session
//! (shared timeouts + participant registry), the match loop, and a
//! WebSocket server.
//!
//! What the framework does *not* do is decide winners: collected picks are
//! handed to your [`RoundHandler`] and their meaning is your business.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use roshambo::prelude::*;
//!
//! struct LogRounds;
//!
//! impl RoundHandler for LogRounds {
//!     fn on_round(&self, round: u32, picks: &[Pick]) -> bool {
//!         for pick in picks {
//!             tracing::info!(player = %pick.player(), pick = ?pick.value(), round);
//!         }
//!         round < 3
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), roshambo::Error> {
//!     let server = ServerBuilder::new()
//!         .bind("0.0.0.0:8080")
//!         .build(LogRounds)
//!         .await?;
//!     server.run().await
//! }
//! ```

mod error;
mod pick;
mod player;
mod round;
mod server;

pub use error::Error;
pub use pick::Pick;
pub use player::{Player, Received};
pub use round::{RoundHandler, run_match};
pub use server::{Server, ServerBuilder};

/// The common imports for building on Roshambo.
pub mod prelude {
    pub use crate::{
        Error, Pick, Player, Received, RoundHandler, Server, ServerBuilder,
        run_match,
    };
    pub use roshambo_protocol::{Action, Message, Payload, PlayerId};
    pub use roshambo_rules::MoveTable;
    pub use roshambo_session::{Session, SessionConfig};
    pub use roshambo_transport::{Connection, ConnectionId, Transport};
}
