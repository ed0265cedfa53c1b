//! A runnable rock-paper-scissors backend.
//!
//! Collects validated picks over WebSocket and logs what each player
//! threw, round by round. Deciding who *won* is left to whatever reads
//! the logs — this demo only exercises the exchange protocol.
//!
//! ```text
//! cargo run -p rock-paper-scissors [bind-addr]
//! ```

use roshambo::prelude::*;

/// Logs every pick and stops after a fixed number of rounds.
struct LoggedRounds {
    best_of: u32,
}

impl RoundHandler for LoggedRounds {
    fn on_round(&self, round: u32, picks: &[Pick]) -> bool {
        for pick in picks {
            match pick.value() {
                Some(value) => {
                    tracing::info!(player = %pick.player(), %value, round, "pick");
                }
                None => {
                    tracing::info!(player = %pick.player(), round, "forfeit");
                }
            }
        }
        round < self.best_of
    }
}

#[tokio::main]
async fn main() -> Result<(), roshambo::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1:8080".to_string());

    let server = ServerBuilder::new()
        .bind(&addr)
        .build(LoggedRounds { best_of: 3 })
        .await?;

    tracing::info!(%addr, "rock-paper-scissors backend listening");
    server.run().await
}
