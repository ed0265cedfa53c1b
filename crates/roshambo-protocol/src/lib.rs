//! Wire protocol for Roshambo.
//!
//! This crate defines what travels between the server and a participant:
//!
//! - **Types** ([`Message`], [`Action`], [`Payload`], [`PlayerId`]) — the
//!   structures that go on the wire.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how they are converted
//!   to and from bytes.
//! - **Errors** ([`ProtocolError`]) — what can go wrong doing so.
//!
//! The protocol layer sits between transport (raw bytes) and the
//! per-participant engine. It knows nothing about connections, sessions,
//! or game rules.

mod codec;
mod error;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use types::{Action, Message, Payload, PlayerId};
