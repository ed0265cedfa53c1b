//! `Server` builder and accept loop.
//!
//! Ties the layers together: transport → protocol → session → match loop.
//! Each accepted connection is assigned a `PlayerId`, joined to the
//! session, and wrapped in a [`Player`] engine with its own supervisory
//! keep task. When the session reaches capacity, the match loop takes the
//! waiting players.

use std::sync::Arc;

use roshambo_protocol::PlayerId;
use roshambo_rules::MoveTable;
use roshambo_session::{Session, SessionConfig};
use roshambo_transport::{Connection, Transport, WebSocketConnection, WebSocketTransport};

use crate::round::{RoundHandler, run_match};
use crate::{Error, Player};

/// Builder for configuring and starting a Roshambo server.
///
/// # Example
///
/// ```rust,ignore
/// use roshambo::prelude::*;
///
/// let server = ServerBuilder::new()
///     .bind("0.0.0.0:8080")
///     .build(MyRounds)
///     .await?;
/// server.run().await
/// ```
pub struct ServerBuilder {
    bind_addr: String,
    session_config: SessionConfig,
    moves: MoveTable,
}

impl ServerBuilder {
    /// Creates a new builder with default settings: localhost bind, the
    /// default timeouts, and the classic three-move table.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            session_config: SessionConfig::default(),
            moves: MoveTable::classic(),
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets the session configuration (timeouts, capacity).
    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    /// Sets the recognized-moves table.
    pub fn moves(mut self, moves: MoveTable) -> Self {
        self.moves = moves;
        self
    }

    /// Binds the transport and builds the server with the given round
    /// handler.
    pub async fn build<H: RoundHandler>(
        self,
        handler: H,
    ) -> Result<Server<H>, Error> {
        let transport = WebSocketTransport::bind(&self.bind_addr).await?;
        Ok(Server {
            transport,
            session_config: self.session_config,
            moves: Arc::new(self.moves),
            handler: Arc::new(handler),
        })
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A running Roshambo server.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct Server<H: RoundHandler> {
    transport: WebSocketTransport,
    session_config: SessionConfig,
    moves: Arc<MoveTable>,
    handler: Arc<H>,
}

impl<H: RoundHandler> Server<H> {
    /// Creates a new builder.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.transport.local_addr()
    }

    /// Runs the accept loop.
    ///
    /// Accepts connections into the session until it is full, then spawns
    /// the match loop for the waiting players. Connections arriving while
    /// a match is running are turned away until the session drains. Runs
    /// until the process is terminated.
    pub async fn run(mut self) -> Result<(), Error> {
        tracing::info!("roshambo server running");

        let session = Arc::new(Session::new(self.session_config.clone()));
        let mut lobby: Vec<Arc<Player<WebSocketConnection>>> = Vec::new();
        let mut next_player_id: u64 = 1;

        loop {
            match self.transport.accept().await {
                Ok(conn) => {
                    let id = PlayerId(next_player_id);
                    next_player_id += 1;

                    // Players who vanished while waiting have already left
                    // the session; drop them from the lobby too.
                    lobby.retain(|player| !player.is_closed());

                    if let Err(e) = session.join(id) {
                        tracing::warn!(player = %id, error = %e, "rejecting connection");
                        if let Err(e) = conn.close().await {
                            tracing::debug!(error = %e, "close failed for rejected connection");
                        }
                        continue;
                    }

                    let player = Arc::new(Player::new(
                        id,
                        Arc::new(conn),
                        Arc::clone(&session),
                        Arc::clone(&self.moves),
                    ));
                    let keeper = Arc::clone(&player);
                    tokio::spawn(async move { keeper.keep().await });
                    tracing::info!(player = %id, "player connected");
                    lobby.push(player);

                    if session.is_full() {
                        let players = std::mem::take(&mut lobby);
                        let handler = Arc::clone(&self.handler);
                        tokio::spawn(run_match(players, handler));
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }
}
