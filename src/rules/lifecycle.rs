//! Match lifecycle driver.
//!
//! Wraps one [`Game`] and enforces the order the transport must follow:
//! players join, the game starts once, actions flow until the game is done,
//! and the game ends once.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::game::{Game, GameResult};
use crate::core::{GameError, PlayerId};

/// Where a match is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Accepting players; `on_start` not yet called.
    WaitingForPlayers,
    /// Started; accepting actions.
    InProgress,
    /// `on_end` has run.
    Finished,
}

/// One run of a game, from joining to `on_end`.
#[derive(Debug)]
pub struct Match<G: Game> {
    game: G,
    phase: MatchPhase,
}

impl<G: Game> Match<G> {
    #[must_use]
    pub fn new(game: G) -> Self {
        Self {
            game,
            phase: MatchPhase::WaitingForPlayers,
        }
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    #[must_use]
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Give up the match, returning the game.
    #[must_use]
    pub fn into_game(self) -> G {
        self.game
    }

    /// Join a player. Only allowed before the match starts.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, GameError> {
        if self.phase != MatchPhase::WaitingForPlayers {
            return Err(GameError::incorrect_match("match has already started"));
        }
        let id = self.game.add_player(name)?;
        debug!(player = name, id = id.0, "player joined");
        Ok(id)
    }

    /// Start the match, calling `on_start`.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != MatchPhase::WaitingForPlayers {
            return Err(GameError::incorrect_match("match has already started"));
        }
        let (have, need) = (self.game.num_players(), self.game.min_players());
        if have < need {
            return Err(GameError::incorrect_match(format!(
                "need at least {need} players, have {have}"
            )));
        }

        self.game.on_start();
        self.phase = MatchPhase::InProgress;
        info!(players = have, "match started");
        self.finish_if_done();
        Ok(())
    }

    /// Run one action against the game.
    ///
    /// If the action completes the game, `on_end` runs before returning.
    pub fn act<R>(
        &mut self,
        action: impl FnOnce(&mut G) -> Result<R, GameError>,
    ) -> Result<R, GameError> {
        match self.phase {
            MatchPhase::InProgress => {}
            MatchPhase::WaitingForPlayers => {
                return Err(GameError::incorrect_match("match has not started"))
            }
            MatchPhase::Finished => return Err(GameError::not_player_turn("match is over")),
        }

        let outcome = action(&mut self.game);
        self.finish_if_done();
        outcome
    }

    /// Consume the game's state-changed flag.
    pub fn take_state_changed(&mut self) -> bool {
        self.game.take_state_updated()
    }

    /// Final result, once finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            MatchPhase::Finished => self.game.result(),
            _ => None,
        }
    }

    fn finish_if_done(&mut self) {
        if self.phase == MatchPhase::InProgress && self.game.done() {
            self.game.on_end();
            self.phase = MatchPhase::Finished;
            info!(result = ?self.game.result(), "match finished");
        }
    }
}
