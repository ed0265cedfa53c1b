//! The result of one choice-collection handshake.

use roshambo_protocol::PlayerId;

/// What one participant played in one round: a validated move, or nothing.
///
/// A `None` value covers every way a round can fail to produce a move —
/// timeout, disconnect, wrong message, unrecognized identifier. Callers
/// never see which; a forfeited round is a forfeited round. A `Some` value
/// is always an identifier the engine validated against its move table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    player: PlayerId,
    value: Option<String>,
}

impl Pick {
    /// A recorded pick: the participant answered with a recognized move.
    pub fn recorded(player: PlayerId, value: impl Into<String>) -> Self {
        Self {
            player,
            value: Some(value.into()),
        }
    }

    /// A defaulted pick: the participant gave no usable answer.
    pub fn defaulted(player: PlayerId) -> Self {
        Self {
            player,
            value: None,
        }
    }

    /// Whose pick this is.
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// The validated move, if one was recorded.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns `true` if the round was forfeited.
    pub fn is_defaulted(&self) -> bool {
        self.value.is_none()
    }
}
