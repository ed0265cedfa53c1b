//! Core protocol types for Roshambo's wire format.
//!
//! Every exchange between the server and a participant is one [`Message`]:
//! an `action` tag naming the exchange family, and a [`Payload`] of named
//! fields. The server only ever emits two request shapes (a readiness check
//! and a pick request) plus their acknowledgments; everything a participant
//! sends back is parsed into the same structure and matched against the tag
//! the server is waiting on.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// A unique identifier for a connected player.
///
/// Newtype over `u64` so a player id can't be confused with any other
/// counter in the system. `#[serde(transparent)]` keeps the wire form a
/// plain number: `PlayerId(42)` serializes as `42`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Action — the exchange tag
// ---------------------------------------------------------------------------

/// The tag naming which exchange a message belongs to.
///
/// There are exactly two exchange families. Requests, participant
/// responses, and acknowledgments within a family all carry the same tag;
/// this enum is the single source of tag values, so a response is matched
/// against the same constant the request was sent with.
///
/// `#[serde(rename_all = "snake_case")]` fixes the wire strings:
/// `"ready_check"` and `"pick"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// The pre-game presence check: "are you there and able to answer?"
    ReadyCheck,

    /// The per-round choice collection: "what do you play this round?"
    Pick,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadyCheck => write!(f, "ready_check"),
            Self::Pick => write!(f, "pick"),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// The named fields of a message.
///
/// Every field is optional: each exchange uses the subset it needs, absent
/// fields are omitted from the JSON entirely, and an inbound message that
/// lacks a field surfaces it as `None`. Readers must handle absence
/// explicitly; there is no permissive fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// How many seconds the recipient has to answer. Sent with requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Which round a pick request is for. Sent with pick requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,

    /// The move a participant chose. Sent in pick submissions; only values
    /// present in the recognized-moves table are accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pick: Option<String>,

    /// Whether the exchange succeeded. Sent in acknowledgments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

impl Payload {
    /// Payload for a readiness-check request.
    pub fn timeout(limit: Duration) -> Self {
        Self {
            timeout: Some(limit.as_secs()),
            ..Self::default()
        }
    }

    /// Payload for a pick request: the answer deadline plus the round it
    /// applies to.
    pub fn pick_request(limit: Duration, round: u32) -> Self {
        Self {
            timeout: Some(limit.as_secs()),
            round: Some(round),
            ..Self::default()
        }
    }

    /// Payload for a participant's pick submission.
    pub fn submission(pick: impl Into<String>) -> Self {
        Self {
            pick: Some(pick.into()),
            ..Self::default()
        }
    }

    /// Payload for an acknowledgment.
    pub fn status(accepted: bool) -> Self {
        Self {
            status: Some(accepted),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// One unit on the wire: an action tag plus its payload.
///
/// JSON form: `{"action": "pick", "payload": {"pick": "rock"}}`. The
/// payload defaults to empty when missing, so a bare
/// `{"action": "ready_check"}` from a participant still parses — the
/// readiness handshake only cares about the tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Which exchange this message belongs to.
    pub action: Action,

    /// The named fields of the message.
    #[serde(default)]
    pub payload: Payload,
}

impl Message {
    /// Creates a message from its parts.
    pub fn new(action: Action, payload: Payload) -> Self {
        Self { action, payload }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! The wire format is consumed by non-Rust clients, so these tests pin
    //! the exact JSON shapes: tag strings, field names, and which fields
    //! are omitted when absent.

    use super::*;

    // =====================================================================
    // PlayerId
    // =====================================================================

    #[test]
    fn test_player_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&PlayerId(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn test_player_id_deserializes_from_plain_number() {
        let pid: PlayerId = serde_json::from_str("42").unwrap();
        assert_eq!(pid, PlayerId(42));
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId(7).to_string(), "P-7");
    }

    // =====================================================================
    // Action
    // =====================================================================

    #[test]
    fn test_action_tags_are_snake_case() {
        assert_eq!(
            serde_json::to_string(&Action::ReadyCheck).unwrap(),
            "\"ready_check\""
        );
        assert_eq!(serde_json::to_string(&Action::Pick).unwrap(), "\"pick\"");
    }

    #[test]
    fn test_action_display_matches_wire_tag() {
        assert_eq!(Action::ReadyCheck.to_string(), "ready_check");
        assert_eq!(Action::Pick.to_string(), "pick");
    }

    #[test]
    fn test_unknown_action_tag_fails_to_parse() {
        let result: Result<Action, _> = serde_json::from_str("\"resign\"");
        assert!(result.is_err());
    }

    // =====================================================================
    // Payload — field presence and omission
    // =====================================================================

    #[test]
    fn test_empty_payload_serializes_as_empty_object() {
        let json = serde_json::to_string(&Payload::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_status_payload_carries_only_status() {
        let json: serde_json::Value =
            serde_json::to_value(Payload::status(true)).unwrap();
        assert_eq!(json, serde_json::json!({ "status": true }));
    }

    #[test]
    fn test_timeout_payload_is_whole_seconds() {
        let json: serde_json::Value =
            serde_json::to_value(Payload::timeout(Duration::from_secs(10)))
                .unwrap();
        assert_eq!(json, serde_json::json!({ "timeout": 10 }));
    }

    #[test]
    fn test_pick_request_payload_fields() {
        let payload = Payload::pick_request(Duration::from_secs(30), 3);
        let json: serde_json::Value = serde_json::to_value(payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "timeout": 30, "round": 3 })
        );
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let payload: Payload =
            serde_json::from_str(r#"{"pick": "rock"}"#).unwrap();
        assert_eq!(payload.pick.as_deref(), Some("rock"));
        assert_eq!(payload.timeout, None);
        assert_eq!(payload.round, None);
        assert_eq!(payload.status, None);
    }

    #[test]
    fn test_unknown_payload_fields_are_ignored() {
        // Clients may send extra fields; the server reads only what it
        // knows about.
        let payload: Payload =
            serde_json::from_str(r#"{"pick": "rock", "mood": "confident"}"#)
                .unwrap();
        assert_eq!(payload.pick.as_deref(), Some("rock"));
    }

    // =====================================================================
    // Message
    // =====================================================================

    #[test]
    fn test_message_json_shape() {
        let msg = Message::new(Action::Pick, Payload::submission("rock"));
        let json: serde_json::Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "action": "pick",
                "payload": { "pick": "rock" }
            })
        );
    }

    #[test]
    fn test_message_round_trip() {
        let msg = Message::new(
            Action::Pick,
            Payload::pick_request(Duration::from_secs(30), 1),
        );
        let bytes = serde_json::to_vec(&msg).unwrap();
        let decoded: Message = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(msg, decoded);
    }

    #[test]
    fn test_message_without_payload_parses_as_empty() {
        // A bare tag is a valid readiness answer.
        let msg: Message =
            serde_json::from_str(r#"{"action": "ready_check"}"#).unwrap();
        assert_eq!(msg.action, Action::ReadyCheck);
        assert_eq!(msg.payload, Payload::default());
    }

    #[test]
    fn test_message_without_action_fails_to_parse() {
        let result: Result<Message, _> =
            serde_json::from_str(r#"{"payload": {"pick": "rock"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_garbage_returns_error() {
        let garbage = b"not json at all";
        let result: Result<Message, _> = serde_json::from_slice(garbage);
        assert!(result.is_err());
    }
}
