//! The session: the one object every participant task shares.
//!
//! A session holds the timeout configuration for a match and the registry
//! of participants currently in it. The timeouts are fixed for the
//! session's lifetime, so participant engines read them without any
//! synchronization; the registry is the only mutable state and is guarded
//! internally, because `disconnect` is called concurrently from every
//! participant's cleanup path.

use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

use roshambo_protocol::PlayerId;

use crate::SessionError;

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Timeout and capacity configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How long a participant has to answer the readiness check.
    pub ready_timeout: Duration,

    /// How long a participant has to submit a pick each round.
    pub pick_timeout: Duration,

    /// How many participants a session holds. A match starts when the
    /// session is full.
    pub max_participants: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ready_timeout: Duration::from_secs(10),
            pick_timeout: Duration::from_secs(30),
            max_participants: 2,
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Shared per-match state: timeout configuration plus the participant
/// registry.
///
/// `disconnect` is idempotent — the first call for a player removes them
/// and returns `true`, every later call returns `false` and does nothing.
/// Callers that might race (a failed handshake and the supervisory keep
/// task, for instance) can both call it safely.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    participants: Mutex<HashSet<PlayerId>>,
}

impl Session {
    /// Creates an empty session with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            participants: Mutex::new(HashSet::new()),
        }
    }

    /// The readiness-check answer deadline.
    pub fn ready_timeout(&self) -> Duration {
        self.config.ready_timeout
    }

    /// The per-round pick answer deadline.
    pub fn pick_timeout(&self) -> Duration {
        self.config.pick_timeout
    }

    /// Session capacity.
    pub fn max_participants(&self) -> usize {
        self.config.max_participants
    }

    /// Registers a participant.
    ///
    /// # Errors
    /// - [`SessionError::Full`] — the session is at capacity.
    /// - [`SessionError::AlreadyJoined`] — the player is already in it.
    pub fn join(&self, player: PlayerId) -> Result<(), SessionError> {
        let mut participants = self.participants.lock().expect("registry lock");
        if participants.len() >= self.config.max_participants {
            return Err(SessionError::Full(self.config.max_participants));
        }
        if !participants.insert(player) {
            return Err(SessionError::AlreadyJoined(player));
        }
        tracing::info!(%player, count = participants.len(), "player joined session");
        Ok(())
    }

    /// Removes a participant. Returns `true` only for the call that
    /// actually removed them.
    pub fn disconnect(&self, player: PlayerId) -> bool {
        let removed = self
            .participants
            .lock()
            .expect("registry lock")
            .remove(&player);
        if removed {
            tracing::info!(%player, "player left session");
        }
        removed
    }

    /// Returns `true` if the player is currently registered.
    pub fn contains(&self, player: PlayerId) -> bool {
        self.participants
            .lock()
            .expect("registry lock")
            .contains(&player)
    }

    /// Number of registered participants.
    pub fn participant_count(&self) -> usize {
        self.participants.lock().expect("registry lock").len()
    }

    /// Returns `true` once the session has reached capacity.
    pub fn is_full(&self) -> bool {
        self.participant_count() >= self.config.max_participants
    }
}
