//! Round-robin turn tracking.
//!
//! Play starts with player 0 and passes to the next id, wrapping around.
//! Once every player has taken a turn, a round is complete. Simultaneous-move
//! games don't need this.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId};

/// Whose turn it is, and which round.
///
/// ```
/// use rust_tbg::core::PlayerId;
/// use rust_tbg::rules::TurnTracker;
///
/// let mut turns = TurnTracker::new();
/// turns.advance(2);
/// assert_eq!(turns.current_player(), PlayerId::new(1));
/// assert!(turns.is_end_of_round(2));
/// turns.advance(2);
/// assert_eq!(turns.round(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnTracker {
    current: PlayerId,
    round: u32,
}

impl Default for TurnTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnTracker {
    /// Player 0 to move, round 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: PlayerId::new(0),
            round: 1,
        }
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Round number, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// True if the current player is the last to move in this round.
    #[must_use]
    pub fn is_end_of_round(&self, num_players: usize) -> bool {
        self.current.index() + 1 == num_players
    }

    /// Pass the turn to the next player.
    ///
    /// Returns true if this completed a round.
    pub fn advance(&mut self, num_players: usize) -> bool {
        assert!(num_players > 0, "cannot advance turns without players");

        let wrapped = self.is_end_of_round(num_players);
        self.current = PlayerId::new(((self.current.index() + 1) % num_players) as u8);
        if wrapped {
            self.round += 1;
        }
        wrapped
    }

    /// Fail with `NotPlayerTurn` unless it is `player`'s turn.
    pub fn ensure_turn(&self, player: PlayerId) -> Result<(), GameError> {
        if player == self.current {
            Ok(())
        } else {
            Err(GameError::not_player_turn(format!(
                "it is {}'s turn, not {}'s",
                self.current, player
            )))
        }
    }
}
