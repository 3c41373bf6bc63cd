//! External state snapshots.
//!
//! Internal state is indexed by [`PlayerId`]; snapshots are keyed by player
//! name, the way clients see a match:
//!
//! ```json
//! {
//!   "game_type": {"id": "rps", "description": "Rock, Paper, Scissors"},
//!   "current_round": {"moves": {"P0": "rock", "P1": null}, "winner": null},
//!   "points": {"P0": 1, "P1": 0},
//!   "history": [{"moves": {"P0": "rock", "P1": "scissors"}, "winner": "P0"}]
//! }
//! ```
//!
//! Snapshots are rebuilt on every request and never cached.

mod keyed;

pub use keyed::PlayerKeyed;

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap, PlayerRegistry};
use crate::relation::{MoveId, Variant};

/// Identifier and description of the variant being played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTypeView {
    pub id: String,
    pub description: String,
}

impl From<Variant> for GameTypeView {
    fn from(variant: Variant) -> Self {
        Self {
            id: variant.id().to_string(),
            description: variant.description().to_string(),
        }
    }
}

/// One round as seen by clients: each player's move (or `null`) and the
/// round winner (or `null` for a tie or an unresolved round).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub moves: PlayerKeyed<Option<String>>,
    pub winner: Option<String>,
}

impl RoundView {
    /// Project per-player moves and an optional winner onto player names.
    #[must_use]
    pub fn project(
        players: &PlayerRegistry,
        moves: &PlayerMap<Option<MoveId>>,
        winner: Option<PlayerId>,
    ) -> Self {
        let moves = players
            .iter()
            .map(|p| {
                let name = moves[p.id()].map(|m| m.name().to_string());
                (p.name().to_string(), name)
            })
            .collect();
        let winner = winner.map(|id| player_name(players, id));
        Self { moves, winner }
    }
}

/// Full state of a relation game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_type: GameTypeView,
    pub current_round: RoundView,
    pub points: PlayerKeyed<u32>,
    pub history: Vec<RoundView>,
}

impl GameSnapshot {
    /// Points ledger keyed by player name.
    #[must_use]
    pub fn project_points(players: &PlayerRegistry, points: &PlayerMap<u32>) -> PlayerKeyed<u32> {
        players
            .iter()
            .map(|p| (p.name().to_string(), points[p.id()]))
            .collect()
    }
}

fn player_name(players: &PlayerRegistry, id: PlayerId) -> String {
    match players.get(id) {
        Ok(player) => player.name().to_string(),
        Err(err) => panic!("snapshot references unregistered player: {err}"),
    }
}
