//! Codec trait and implementations for serializing messages.
//!
//! The protocol layer doesn't fix a byte format — anything implementing
//! [`Codec`] can put a [`Message`](crate::Message) on the wire. The default
//! is [`JsonCodec`], which keeps traffic inspectable in browser DevTools
//! and server logs; a binary codec can be slotted in later without touching
//! any caller.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// Converts between Rust values and wire bytes.
///
/// `Send + Sync + 'static` because the codec is held by long-lived
/// per-connection tasks that may run on any runtime thread.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Encode`] if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Decode`] if the bytes are malformed or
    /// don't match the expected shape.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] backed by `serde_json`.
///
/// Behind the `json` feature flag (enabled by default).
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use crate::{Action, Message, Payload};

    #[test]
    fn test_json_codec_round_trip() {
        let codec = JsonCodec;
        let msg = Message::new(Action::Pick, Payload::submission("paper"));

        let bytes = codec.encode(&msg).unwrap();
        let decoded: Message = codec.decode(&bytes).unwrap();
        assert_eq!(msg, decoded);
    }

    #[test]
    fn test_json_codec_decode_rejects_garbage() {
        let codec = JsonCodec;
        let result: Result<Message, _> = codec.decode(b"\x00\x01\x02");
        assert!(matches!(result, Err(ProtocolError::Decode(_))));
    }
}
