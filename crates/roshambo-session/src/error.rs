//! Error types for the session layer.

use roshambo_protocol::PlayerId;

/// Errors that can occur when joining a session.
///
/// Leaving never fails: `disconnect` is idempotent and simply reports
/// whether it removed anything.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The session already holds its maximum number of participants.
    #[error("session is full ({0} participants)")]
    Full(usize),

    /// The player is already registered in this session.
    #[error("player {0} already joined this session")]
    AlreadyJoined(PlayerId),
}
