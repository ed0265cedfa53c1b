//! The match loop: readiness gate, then one pick collection per round.
//!
//! The loop fans each exchange out across all participants concurrently —
//! every engine stays strictly sequential on its own connection, but no
//! participant waits for another's timeout to elapse before being asked.
//! What the collected picks *mean* is not decided here: they go to the
//! [`RoundHandler`], the seam where an embedding application plugs in its
//! outcome resolution.

use std::sync::Arc;

use futures_util::future;
use roshambo_transport::Connection;

use crate::{Pick, Player};

/// Receives each round's collected picks and decides whether another
/// round is played.
///
/// Implementations judge, score, persist — whatever the game needs. The
/// framework itself never compares two picks.
pub trait RoundHandler: Send + Sync + 'static {
    /// Called once per round with every participant's pick (recorded or
    /// defaulted). Return `false` to end the match.
    fn on_round(&self, round: u32, picks: &[Pick]) -> bool;
}

/// Plays one match to completion.
///
/// Confirms readiness of every player concurrently, drops those that
/// fail, then collects picks round by round until the handler says stop
/// or fewer than two players remain. Every surviving engine is closed
/// when the match ends.
pub async fn run_match<C, H>(players: Vec<Arc<Player<C>>>, handler: Arc<H>)
where
    C: Connection,
    H: RoundHandler,
{
    let checks = players.iter().map(|player| {
        let player = Arc::clone(player);
        async move { player.confirm_ready().await }
    });
    let outcomes = future::join_all(checks).await;

    let mut active: Vec<Arc<Player<C>>> = players
        .into_iter()
        .zip(outcomes)
        .filter_map(|(player, ready)| ready.then_some(player))
        .collect();
    // A ready ack can still fail to send; those engines are closed already.
    active.retain(|player| !player.is_closed());

    if active.len() < 2 {
        tracing::info!(ready = active.len(), "not enough ready players, match abandoned");
        close_all(&active).await;
        return;
    }
    tracing::info!(players = active.len(), "match starting");

    let mut round: u32 = 1;
    loop {
        let collectors = active.iter().map(|player| {
            let player = Arc::clone(player);
            async move { player.collect_pick(round).await }
        });
        let picks = future::join_all(collectors).await;

        let another = handler.on_round(round, &picks);

        // A player that disconnected mid-round still produced a defaulted
        // pick above; from here on they are out of the match.
        active.retain(|player| !player.is_closed());

        if !another {
            tracing::info!(round, "match complete");
            break;
        }
        if active.len() < 2 {
            tracing::info!(round, remaining = active.len(), "not enough players to continue");
            break;
        }
        round += 1;
    }

    close_all(&active).await;
}

async fn close_all<C: Connection>(players: &[Arc<Player<C>>]) {
    for player in players {
        player.close().await;
    }
}
