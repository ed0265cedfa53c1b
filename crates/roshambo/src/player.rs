//! The per-participant protocol engine.
//!
//! One [`Player`] owns one connection for its whole lifetime and drives
//! every exchange with that participant: the readiness handshake before
//! play, one choice-collection handshake per round, and the cleanup that
//! runs when the remote end misbehaves or goes away.
//!
//! The engine never propagates transport faults to its callers. Every
//! failure is converted at the primitive layer — a timeout or read error
//! becomes [`Received::Silence`], a dead transport becomes
//! [`Received::Closed`] (with cleanup already done) — so the handshakes
//! only ever branch over the three enumerated outcomes.
//!
//! Cleanup fires from four places: a failed send, a receive that observes
//! closure, a failed readiness handshake, and the supervisory keep task
//! ([`Player::keep`]) when the transport ends on its own. The `closed`
//! flag makes those paths converge: whichever gets there first notifies
//! the session and releases the connection, the rest are no-ops.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use roshambo_protocol::{Action, Codec, JsonCodec, Message, Payload, PlayerId};
use roshambo_rules::MoveTable;
use roshambo_session::Session;
use roshambo_transport::Connection;

use crate::Pick;

/// Outcome of one bounded receive.
#[derive(Debug)]
pub enum Received {
    /// A decodable message arrived in time.
    Message(Message),

    /// Nothing usable arrived: the deadline passed, the read failed below
    /// the protocol layer, or the bytes didn't decode. Non-fatal — the
    /// participant may simply be slow.
    Silence,

    /// The transport has ended. Cleanup has already run by the time the
    /// caller sees this; no future receive can succeed.
    Closed,
}

/// The protocol engine for one connected participant.
///
/// All methods take `&self`: the engine is shared between the match loop
/// (which drives handshakes strictly sequentially) and the supervisory
/// keep task. After [`close`](Self::close) the engine is terminally
/// closed — sends become no-ops and receives report closure without
/// touching the connection.
pub struct Player<C: Connection> {
    id: PlayerId,
    conn: Arc<C>,
    session: Arc<Session>,
    moves: Arc<MoveTable>,
    codec: JsonCodec,
    closed: AtomicBool,
}

impl<C: Connection> Player<C> {
    /// Creates an engine for a connection that has already joined the
    /// session.
    pub fn new(
        id: PlayerId,
        conn: Arc<C>,
        session: Arc<Session>,
        moves: Arc<MoveTable>,
    ) -> Self {
        Self {
            id,
            conn,
            session,
            moves,
            codec: JsonCodec,
            closed: AtomicBool::new(false),
        }
    }

    /// This participant's identifier.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns `true` once the engine has reached its terminal closed
    /// state.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    // -----------------------------------------------------------------
    // Exchange primitives
    // -----------------------------------------------------------------

    /// Sends one message to the participant.
    ///
    /// A transport failure is terminal for this participant: it is logged,
    /// cleanup runs, and nothing propagates. No retries.
    pub async fn send(&self, action: Action, payload: Payload) {
        if self.is_closed() {
            return;
        }
        let message = Message::new(action, payload);
        let bytes = match self.codec.encode(&message) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(player = %self.id, error = %e, "failed to encode message");
                return;
            }
        };
        if let Err(e) = self.conn.send(&bytes).await {
            tracing::warn!(player = %self.id, error = %e, "send failed, connection is gone");
            self.close().await;
        }
    }

    /// Waits for the participant's next message, up to `limit`.
    ///
    /// Timeouts, read errors, and undecodable frames all come back as
    /// [`Received::Silence`]; a transport that has ended comes back as
    /// [`Received::Closed`] after cleanup has run.
    pub async fn recv(&self, limit: Option<Duration>) -> Received {
        if self.is_closed() {
            return Received::Closed;
        }

        let outcome = match limit {
            Some(limit) => {
                match tokio::time::timeout(limit, self.conn.recv()).await {
                    Ok(outcome) => outcome,
                    Err(_) => {
                        tracing::debug!(player = %self.id, ?limit, "receive timed out");
                        return Received::Silence;
                    }
                }
            }
            None => self.conn.recv().await,
        };

        match outcome {
            Ok(Some(bytes)) => match self.codec.decode::<Message>(&bytes) {
                Ok(message) => Received::Message(message),
                Err(e) => {
                    tracing::debug!(player = %self.id, error = %e, "undecodable message");
                    Received::Silence
                }
            },
            Ok(None) => {
                tracing::warn!(player = %self.id, "transport closed while receiving");
                self.close().await;
                Received::Closed
            }
            Err(e) => {
                tracing::debug!(player = %self.id, error = %e, "receive failed");
                Received::Silence
            }
        }
    }

    /// Sends a request and waits for the answer: [`send`](Self::send)
    /// then [`recv`](Self::recv), nothing more.
    pub async fn request(
        &self,
        action: Action,
        payload: Payload,
        limit: Option<Duration>,
    ) -> Received {
        self.send(action, payload).await;
        self.recv(limit).await
    }

    // -----------------------------------------------------------------
    // Handshakes
    // -----------------------------------------------------------------

    /// Runs the readiness handshake: confirms the participant is present
    /// and able to answer before play begins.
    ///
    /// Returns `true` only if a `ready_check`-tagged response arrives
    /// within the session's ready timeout. Every other outcome — silence,
    /// a wrong tag, a dead transport — is treated as a disconnect: the
    /// engine closes and `false` comes back. A participant that can't
    /// complete this minimal exchange isn't given the heavier per-round
    /// exchange.
    pub async fn confirm_ready(&self) -> bool {
        let limit = self.session.ready_timeout();
        let response = self
            .request(Action::ReadyCheck, Payload::timeout(limit), Some(limit))
            .await;

        match response {
            Received::Message(msg) if msg.action == Action::ReadyCheck => {
                self.send(Action::ReadyCheck, Payload::status(true)).await;
                tracing::info!(player = %self.id, "player is ready");
                true
            }
            _ => {
                tracing::info!(player = %self.id, "player is not ready, disconnecting");
                self.close().await;
                false
            }
        }
    }

    /// Runs one choice-collection handshake and returns the participant's
    /// [`Pick`] for `round`.
    ///
    /// A submission tagged `pick` whose value is in the move table is
    /// acknowledged with `status: true` and recorded. Everything else —
    /// silence, a wrong tag, a missing or unrecognized move — is
    /// acknowledged with `status: false` and defaults the round. The
    /// connection stays open in every non-closure case: a forfeited round
    /// is a forfeit, not a protocol violation.
    pub async fn collect_pick(&self, round: u32) -> Pick {
        let limit = self.session.pick_timeout();
        let response = self
            .request(
                Action::Pick,
                Payload::pick_request(limit, round),
                Some(limit),
            )
            .await;

        match response {
            Received::Message(msg) if msg.action == Action::Pick => {
                match msg.payload.pick {
                    Some(value) if self.moves.contains(&value) => {
                        self.send(Action::Pick, Payload::status(true)).await;
                        tracing::debug!(player = %self.id, round, pick = %value, "pick recorded");
                        return Pick::recorded(self.id, value);
                    }
                    Some(value) => {
                        tracing::info!(player = %self.id, round, pick = %value, "unrecognized pick");
                    }
                    None => {
                        tracing::info!(player = %self.id, round, "submission carried no pick");
                    }
                }
            }
            Received::Message(msg) => {
                tracing::info!(
                    player = %self.id,
                    round,
                    action = %msg.action,
                    "unexpected action during pick collection"
                );
            }
            Received::Silence => {
                tracing::info!(player = %self.id, round, "no pick before the deadline");
            }
            Received::Closed => {}
        }

        // The rejection ack is a silent no-op if the engine closed above.
        self.send(Action::Pick, Payload::status(false)).await;
        Pick::defaulted(self.id)
    }

    // -----------------------------------------------------------------
    // Cleanup
    // -----------------------------------------------------------------

    /// Notifies the session that this participant is leaving, then
    /// releases the connection.
    ///
    /// Only the first call does any work; the engine is terminally closed
    /// afterwards, so racing call sites (failed handshake vs. the keep
    /// task) produce at most one `disconnect` and one connection close.
    pub async fn close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        self.session.disconnect(self.id);
        if let Err(e) = self.conn.close().await {
            tracing::debug!(player = %self.id, error = %e, "connection close failed");
        }
    }

    /// Supervises the transport for its whole lifetime.
    ///
    /// Blocks until the underlying connection ends — however that happens
    /// — then runs cleanup. This is the path that observes ordinary
    /// connection termination, as opposed to termination discovered
    /// mid-handshake.
    pub async fn keep(&self) {
        self.conn.closed().await;
        tracing::info!(player = %self.id, "transport ended");
        self.close().await;
    }
}
