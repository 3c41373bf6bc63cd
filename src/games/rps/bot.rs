//! Random opponent for simulations.

use crate::core::{GameRng, PlayerId};
use crate::relation::{MoveId, MoveRelation};

/// Picks a uniformly random move each round.
#[derive(Clone, Debug)]
pub struct RandomMover {
    player: PlayerId,
    rng: GameRng,
}

impl RandomMover {
    /// Bot for `player`, with its own stream derived from `seed`.
    #[must_use]
    pub fn new(player: PlayerId, seed: u64) -> Self {
        Self {
            player,
            rng: GameRng::new(seed).for_player(player),
        }
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn pick(&mut self, relation: &MoveRelation) -> MoveId {
        let index = self.rng.gen_index(relation.len());
        match relation.moves().nth(index) {
            Some(mv) => mv.id(),
            None => unreachable!("index drawn within relation bounds"),
        }
    }
}
