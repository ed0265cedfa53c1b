//! Unified error type for the Roshambo backend.

use roshambo_protocol::ProtocolError;
use roshambo_rules::RulesError;
use roshambo_session::SessionError;
use roshambo_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// The per-participant engine never surfaces these — its failure handling
/// is internal by design. `Error` covers the fallible outer paths: binding
/// the transport, accepting connections, building rule tables, joining
/// sessions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A transport-level error (bind, accept, send, recv).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (encode, decode, invalid message).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A session-level error (full, duplicate join).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A rules-level error (inconsistent move table).
    #[error(transparent)]
    Rules(#[from] RulesError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_transport_error() {
        let err = TransportError::ConnectionClosed("gone".into());
        let top: Error = err.into();
        assert!(matches!(top, Error::Transport(_)));
        assert!(top.to_string().contains("gone"));
    }

    #[test]
    fn test_from_protocol_error() {
        let err = ProtocolError::InvalidMessage("bad".into());
        let top: Error = err.into();
        assert!(matches!(top, Error::Protocol(_)));
    }

    #[test]
    fn test_from_session_error() {
        let err = SessionError::Full(2);
        let top: Error = err.into();
        assert!(matches!(top, Error::Session(_)));
        assert!(top.to_string().contains("full"));
    }

    #[test]
    fn test_from_rules_error() {
        let err = RulesError::Empty;
        let top: Error = err.into();
        assert!(matches!(top, Error::Rules(_)));
    }
}
