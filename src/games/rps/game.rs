//! Rock-Paper-Scissors family game implementation.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::round::Round;
use crate::core::{GameError, GameOptions, PlayerId, PlayerMap};
use crate::relation::{MoveId, MoveRelation, Variant};
use crate::rules::{Game, GameCore};
use crate::snapshot::{GameSnapshot, RoundView};

/// Option key selecting the variant.
pub const VARIANT_OPTION: &str = "variant";
/// Option key for the number of round wins needed to win the match.
pub const POINTS_TO_WIN_OPTION: &str = "points_to_win";

pub const DEFAULT_VARIANT: &str = "rps";
pub const DEFAULT_POINTS_TO_WIN: u32 = 3;

const PLAYERS: usize = 2;

/// Acknowledgment of an accepted move: `{"move": "<name>"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveAck {
    #[serde(rename = "move")]
    pub accepted: String,
}

/// Round, score and history storage. Exists only after `on_start`.
#[derive(Clone, Debug)]
struct Scoreboard {
    current: Round,
    points: PlayerMap<u32>,
    history: Vector<Round>,
}

/// Two-player, first-to-N game over a move relation.
///
/// Both players submit a move each round; once both are in, the round
/// resolves through the variant's beats relation, the winner scores a
/// point, and the round goes into history. The first player to reach
/// `points_to_win` wins the match.
#[derive(Clone, Debug)]
pub struct RockPaperScissors {
    core: GameCore,
    relation: MoveRelation,
    points_to_win: u32,
    board: Option<Scoreboard>,
}

/// Builder for creating a RockPaperScissors game.
#[derive(Clone, Debug)]
pub struct RockPaperScissorsBuilder {
    variant: String,
    points_to_win: u32,
}

impl Default for RockPaperScissorsBuilder {
    fn default() -> Self {
        Self {
            variant: DEFAULT_VARIANT.to_string(),
            points_to_win: DEFAULT_POINTS_TO_WIN,
        }
    }
}

impl RockPaperScissorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self
    }

    pub fn points_to_win(mut self, points: u32) -> Self {
        self.points_to_win = points;
        self
    }

    /// Options equivalent to this builder.
    pub fn options(&self) -> GameOptions {
        GameOptions::new()
            .with(VARIANT_OPTION, self.variant.as_str())
            .with(POINTS_TO_WIN_OPTION, self.points_to_win)
    }

    pub fn build(self) -> Result<RockPaperScissors, GameError> {
        RockPaperScissors::new(self.options())
    }
}

impl RockPaperScissors {
    /// Create a game from match options.
    ///
    /// Fails with `IncorrectActionData` for an unknown variant or a
    /// non-positive `points_to_win`.
    pub fn new(options: GameOptions) -> Result<Self, GameError> {
        let relation = MoveRelation::build(options.require_text(VARIANT_OPTION, DEFAULT_VARIANT)?)?;

        let points_to_win =
            options.get_int(POINTS_TO_WIN_OPTION, DEFAULT_POINTS_TO_WIN as i64)?;
        let points_to_win = u32::try_from(points_to_win)
            .ok()
            .filter(|&p| p >= 1)
            .ok_or_else(|| {
                GameError::incorrect_action_data(format!(
                    "{POINTS_TO_WIN_OPTION} must be a positive integer, got {points_to_win}"
                ))
            })?;

        Ok(Self {
            core: GameCore::new(options),
            relation,
            points_to_win,
            board: None,
        })
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.relation.variant()
    }

    #[must_use]
    pub fn relation(&self) -> &MoveRelation {
        &self.relation
    }

    #[must_use]
    pub fn points_to_win(&self) -> u32 {
        self.points_to_win
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.board.is_some()
    }

    /// # Panics
    ///
    /// If called before `on_start`.
    #[must_use]
    pub fn points(&self, player: PlayerId) -> u32 {
        self.board().points[player]
    }

    /// Completed rounds, oldest first.
    ///
    /// # Panics
    ///
    /// If called before `on_start`.
    #[must_use]
    pub fn history(&self) -> &Vector<Round> {
        &self.board().history
    }

    /// The open round.
    ///
    /// # Panics
    ///
    /// If called before `on_start`.
    #[must_use]
    pub fn current_round(&self) -> &Round {
        &self.board().current
    }

    /// Submit `player`'s move for the open round.
    ///
    /// When this completes the round, it is resolved before returning:
    /// scores and history are updated, the round is reset and a state
    /// update is flagged.
    ///
    /// # Errors
    ///
    /// - `IncorrectMove` if the name is not a move of this variant
    /// - `NotPlayerTurn` if the game is over or the player already moved
    ///   this round
    /// - `InvalidPlayerReference` if the player is not in the match
    pub fn submit_move(&mut self, player: PlayerId, move_name: &str) -> Result<MoveAck, GameError> {
        let mv = self.relation.parse(move_name)?;
        if self.done() {
            return Err(GameError::not_player_turn("game is over"));
        }
        self.player(player)?;

        let board = self.board_mut();
        board.current.record(player, mv)?;
        debug!(%player, mv = mv.name(), "move recorded");

        if board.current.is_complete() {
            self.resolve_round();
        }

        Ok(MoveAck {
            accepted: mv.name().to_string(),
        })
    }

    fn resolve_round(&mut self) {
        let relation = &self.relation;
        let Some(board) = self.board.as_mut() else {
            panic!("game state accessed before on_start");
        };

        let mut finished = std::mem::replace(&mut board.current, Round::open(PLAYERS));
        let winner = finished.resolve(relation);
        if let Some(winner) = winner {
            board.points[winner] += 1;
        }
        let (a, b) = round_moves(&finished);
        let narration = relation.describe(a, b).unwrap_or_else(|| format!("{a} ties {b}"));
        board.history.push_back(finished);

        info!(
            round = board.history.len(),
            winner = ?winner,
            points = ?board.points,
            "round resolved: {narration}"
        );

        self.notify_update();
    }

    fn board(&self) -> &Scoreboard {
        match &self.board {
            Some(board) => board,
            None => panic!("game state accessed before on_start"),
        }
    }

    fn board_mut(&mut self) -> &mut Scoreboard {
        match &mut self.board {
            Some(board) => board,
            None => panic!("game state accessed before on_start"),
        }
    }
}

fn round_moves(round: &Round) -> (MoveId, MoveId) {
    match (round.move_of(PlayerId::new(0)), round.move_of(PlayerId::new(1))) {
        (Some(a), Some(b)) => (a, b),
        _ => panic!("completed round is missing a move"),
    }
}

impl Game for RockPaperScissors {
    type State = GameSnapshot;

    fn core(&self) -> &GameCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut GameCore {
        &mut self.core
    }

    fn min_players(&self) -> usize {
        PLAYERS
    }

    fn max_players(&self) -> usize {
        PLAYERS
    }

    /// # Panics
    ///
    /// If called before `on_start`.
    fn game_state(&self) -> GameSnapshot {
        let board = self.board();
        let players = self.players();

        GameSnapshot {
            game_type: self.variant().into(),
            current_round: RoundView::project(players, board.current.moves(), board.current.winner()),
            points: GameSnapshot::project_points(players, &board.points),
            history: board
                .history
                .iter()
                .map(|round| RoundView::project(players, round.moves(), round.winner()))
                .collect(),
        }
    }

    /// Some player has reached `points_to_win`. False before `on_start`.
    fn done(&self) -> bool {
        self.board
            .as_ref()
            .is_some_and(|b| b.points.values().any(|&p| p >= self.points_to_win))
    }

    /// The player with the strictly highest score once done; equal top
    /// scores mean no winner.
    fn winner(&self) -> Option<PlayerId> {
        if !self.done() {
            return None;
        }
        let points = &self.board().points;
        let best = points.values().copied().max()?;
        let mut leaders = points.iter().filter(|(_, &p)| p == best);
        match (leaders.next(), leaders.next()) {
            (Some((player, _)), None) => Some(player),
            _ => None,
        }
    }

    fn on_start(&mut self) {
        assert_eq!(
            self.num_players(),
            PLAYERS,
            "rock-paper-scissors starts with exactly two players"
        );
        self.board = Some(Scoreboard {
            current: Round::open(PLAYERS),
            points: PlayerMap::with_value(PLAYERS, 0),
            history: Vector::new(),
        });
        // No update is flagged here; notifications only follow a resolved round.
        info!(
            variant = self.variant().id(),
            points_to_win = self.points_to_win,
            "rock-paper-scissors started"
        );
    }

    fn on_end(&mut self) {
        debug!(winner = ?self.winner(), rounds = self.history().len(), "rock-paper-scissors ended");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(variant: &str, points_to_win: u32) -> RockPaperScissors {
        let mut game = RockPaperScissorsBuilder::new()
            .variant(variant)
            .points_to_win(points_to_win)
            .build()
            .unwrap();
        game.add_player("P0").unwrap();
        game.add_player("P1").unwrap();
        game.on_start();
        game
    }

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    #[test]
    fn test_defaults() {
        let game = RockPaperScissors::new(GameOptions::new()).unwrap();
        assert_eq!(game.variant(), Variant::Rps);
        assert_eq!(game.points_to_win(), 3);
        assert_eq!(game.min_players(), 2);
        assert_eq!(game.max_players(), 2);
        assert!(!game.is_started());
        assert!(!game.done());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_bad_options() {
        let unknown = RockPaperScissors::new(GameOptions::new().with(VARIANT_OPTION, "chess"));
        assert!(matches!(unknown, Err(GameError::IncorrectActionData { .. })));

        let zero = RockPaperScissors::new(GameOptions::new().with(POINTS_TO_WIN_OPTION, 0));
        assert!(matches!(zero, Err(GameError::IncorrectActionData { .. })));

        let negative = RockPaperScissors::new(GameOptions::new().with(POINTS_TO_WIN_OPTION, -2));
        assert!(matches!(negative, Err(GameError::IncorrectActionData { .. })));
    }

    #[test]
    fn test_half_round_does_not_resolve() {
        let mut game = started("rps", 3);

        let ack = game.submit_move(P0, "rock").unwrap();
        assert_eq!(ack.accepted, "rock");
        assert!(game.history().is_empty());
        assert!(!game.state_updated());
        assert_eq!(game.current_round().move_of(P0).unwrap().name(), "rock");
        assert_eq!(game.current_round().move_of(P1), None);
    }

    #[test]
    fn test_resubmission_rejected() {
        let mut game = started("rps", 3);

        game.submit_move(P0, "rock").unwrap();
        let err = game.submit_move(P0, "paper").unwrap_err();
        assert!(matches!(err, GameError::NotPlayerTurn { .. }));
        assert!(err.details().contains("already"));
        assert_eq!(game.current_round().move_of(P0).unwrap().name(), "rock");
    }

    #[test]
    fn test_decisive_round() {
        let mut game = started("rps", 3);

        game.submit_move(P1, "scissors").unwrap();
        game.submit_move(P0, "rock").unwrap();

        assert_eq!(game.points(P0), 1);
        assert_eq!(game.points(P1), 0);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].winner(), Some(P0));
        assert!(!game.current_round().is_complete());
        assert_eq!(game.current_round().move_of(P0), None);
        assert!(game.take_state_updated());
    }

    #[test]
    fn test_tie_round() {
        let mut game = started("rps", 3);

        game.submit_move(P0, "rock").unwrap();
        game.submit_move(P1, "rock").unwrap();

        assert_eq!(game.points(P0), 0);
        assert_eq!(game.points(P1), 0);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].winner(), None);
        assert!(game.state_updated());
        assert!(!game.done());
    }

    #[test]
    fn test_incorrect_move_leaves_round_unchanged() {
        let mut game = started("rps", 3);
        game.submit_move(P1, "paper").unwrap();

        let err = game.submit_move(P0, "fire").unwrap_err();
        assert!(matches!(err, GameError::IncorrectMove { .. }));
        assert_eq!(game.current_round().move_of(P0), None);
        assert_eq!(game.current_round().move_of(P1).unwrap().name(), "paper");

        // rpsls-only moves are not valid in the three-move variant
        assert!(game.submit_move(P0, "spock").is_err());
    }

    #[test]
    fn test_unknown_player() {
        let mut game = started("rps", 3);
        let err = game.submit_move(PlayerId::new(2), "rock").unwrap_err();
        assert_eq!(err, GameError::InvalidPlayerReference { id: 2 });
    }

    #[test]
    fn test_play_to_completion() {
        let mut game = started("rpsls", 2);

        for _ in 0..2 {
            game.submit_move(P0, "lizard").unwrap();
            game.submit_move(P1, "spock").unwrap();
        }

        assert!(game.done());
        assert_eq!(game.winner(), Some(P0));
        assert_eq!(game.points(P0), 2);

        let err = game.submit_move(P1, "rock").unwrap_err();
        assert!(matches!(err, GameError::NotPlayerTurn { .. }));
        assert_eq!(err.details(), "game is over");
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_game_state() {
        let mut game = started("rps", 3);
        game.submit_move(P0, "paper").unwrap();
        game.submit_move(P1, "rock").unwrap();
        game.submit_move(P1, "scissors").unwrap();

        let state = game.game_state();
        assert_eq!(state.game_type.id, "rps");
        assert_eq!(state.points.get("P0"), Some(&1));
        assert_eq!(state.current_round.moves.get("P0"), Some(&None));
        assert_eq!(
            state.current_round.moves.get("P1"),
            Some(&Some("scissors".to_string()))
        );
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history[0].winner.as_deref(), Some("P0"));
    }

    #[test]
    #[should_panic(expected = "before on_start")]
    fn test_game_state_before_start_panics() {
        let mut game = RockPaperScissorsBuilder::new().build().unwrap();
        game.add_player("P0").unwrap();
        game.add_player("P1").unwrap();
        let _ = game.game_state();
    }

    #[test]
    #[should_panic(expected = "exactly two players")]
    fn test_start_with_one_player_panics() {
        let mut game = RockPaperScissorsBuilder::new().build().unwrap();
        game.add_player("P0").unwrap();
        game.on_start();
    }

    #[test]
    fn test_third_player_rejected() {
        let mut game = started("rps", 3);

        let err = game.add_player("P2").unwrap_err();
        assert_eq!(err, GameError::incorrect_match("match is full"));
        assert_eq!(game.num_players(), 2);

        let err = game.submit_move(PlayerId::new(2), "rock").unwrap_err();
        assert_eq!(err, GameError::InvalidPlayerReference { id: 2 });
        assert_eq!(game.game_state().points.len(), 2);
    }
}
