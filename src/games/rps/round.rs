//! Rounds of simultaneous moves.

use serde::Serialize;

use crate::core::{GameError, PlayerId, PlayerMap};
use crate::relation::{MoveId, MoveRelation, Outcome};

/// One exchange of simultaneous moves.
///
/// Open while any slot is empty. A completed round that has been resolved
/// carries its winner (`None` for a tie) and is never changed again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Round {
    moves: PlayerMap<Option<MoveId>>,
    winner: Option<PlayerId>,
}

impl Round {
    /// Fresh open round with every slot unset.
    #[must_use]
    pub fn open(player_count: usize) -> Self {
        Self {
            moves: PlayerMap::with_default(player_count),
            winner: None,
        }
    }

    #[must_use]
    pub fn moves(&self) -> &PlayerMap<Option<MoveId>> {
        &self.moves
    }

    #[must_use]
    pub fn move_of(&self, player: PlayerId) -> Option<MoveId> {
        self.moves[player]
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Every player has submitted a move.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.moves.values().all(Option::is_some)
    }

    /// Record a player's move.
    ///
    /// A pending submission cannot be overwritten, even if the other player
    /// has not moved yet.
    pub fn record(&mut self, player: PlayerId, mv: MoveId) -> Result<(), GameError> {
        let slot = &mut self.moves[player];
        if let Some(existing) = slot {
            return Err(GameError::not_player_turn(format!(
                "{player} already played {existing} this round"
            )));
        }
        *slot = Some(mv);
        Ok(())
    }

    /// Work out the winner of a complete two-player round.
    ///
    /// Panics if the round is incomplete or not two-player.
    pub fn resolve(&mut self, relation: &MoveRelation) -> Option<PlayerId> {
        assert_eq!(self.moves.player_count(), 2, "relation rounds are two-player");
        let (first, second) = match (self.moves[PlayerId::new(0)], self.moves[PlayerId::new(1)]) {
            (Some(a), Some(b)) => (a, b),
            _ => panic!("cannot resolve an open round"),
        };

        self.winner = match relation.resolve(first, second) {
            Outcome::First => Some(PlayerId::new(0)),
            Outcome::Second => Some(PlayerId::new(1)),
            Outcome::Tie => None,
        };
        self.winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_once() {
        let relation = MoveRelation::build("rps").unwrap();
        let rock = relation.parse("rock").unwrap();
        let paper = relation.parse("paper").unwrap();

        let mut round = Round::open(2);
        assert!(!round.is_complete());

        round.record(PlayerId::new(0), rock).unwrap();
        let err = round.record(PlayerId::new(0), paper).unwrap_err();
        assert!(matches!(err, GameError::NotPlayerTurn { .. }));
        assert_eq!(round.move_of(PlayerId::new(0)), Some(rock));

        round.record(PlayerId::new(1), paper).unwrap();
        assert!(round.is_complete());
    }

    #[test]
    fn test_resolve() {
        let relation = MoveRelation::build("rps").unwrap();
        let id = |name| relation.parse(name).unwrap();

        let mut round = Round::open(2);
        round.record(PlayerId::new(1), id("rock")).unwrap();
        round.record(PlayerId::new(0), id("paper")).unwrap();
        assert_eq!(round.resolve(&relation), Some(PlayerId::new(0)));
        assert_eq!(round.winner(), Some(PlayerId::new(0)));

        let mut tie = Round::open(2);
        tie.record(PlayerId::new(0), id("rock")).unwrap();
        tie.record(PlayerId::new(1), id("rock")).unwrap();
        assert_eq!(tie.resolve(&relation), None);
    }

    #[test]
    #[should_panic(expected = "open round")]
    fn test_resolve_open_round_panics() {
        let relation = MoveRelation::build("rps").unwrap();
        Round::open(2).resolve(&relation);
    }
}
