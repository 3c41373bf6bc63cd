//! Match lifecycle tests.
//!
//! These tests verify the join -> start -> play -> end ordering for both the
//! simultaneous reference game and a round-robin game built on
//! `TurnTracker`.

use serde::Serialize;

use rust_tbg::core::{GameError, GameOptions, PlayerId};
use rust_tbg::games::rps::RockPaperScissorsBuilder;
use rust_tbg::rules::{Game, GameCore, GameResult, Match, MatchPhase, TurnTracker};

/// Players take turns adding 1-3 to a running total; whoever reaches the
/// target wins.
#[derive(Debug)]
struct RaceTo {
    core: GameCore,
    target: u32,
    total: u32,
    turns: TurnTracker,
    last_mover: Option<PlayerId>,
    starts: u32,
    ends: u32,
}

#[derive(Serialize)]
struct RaceState {
    total: u32,
    to_move: String,
    round: u32,
}

impl RaceTo {
    fn new(options: GameOptions) -> Result<Self, GameError> {
        let target = options.get_int("target", 10)? as u32;
        Ok(Self {
            core: GameCore::new(options),
            target,
            total: 0,
            turns: TurnTracker::new(),
            last_mover: None,
            starts: 0,
            ends: 0,
        })
    }

    fn add(&mut self, player: PlayerId, amount: u32) -> Result<u32, GameError> {
        if self.done() {
            return Err(GameError::not_player_turn("game is over"));
        }
        self.player(player)?;
        self.turns.ensure_turn(player)?;
        if !(1..=3).contains(&amount) {
            return Err(GameError::incorrect_move(format!("cannot add {amount}")));
        }

        self.total += amount;
        self.last_mover = Some(player);
        let round_over = self.turns.advance(self.num_players());
        if round_over || self.done() {
            self.notify_update();
        }
        Ok(self.total)
    }
}

impl Game for RaceTo {
    type State = RaceState;

    fn core(&self) -> &GameCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut GameCore {
        &mut self.core
    }

    fn min_players(&self) -> usize {
        2
    }

    fn max_players(&self) -> usize {
        4
    }

    fn game_state(&self) -> RaceState {
        let to_move = self.turns.current_player();
        RaceState {
            total: self.total,
            to_move: self.player(to_move).unwrap().name().to_string(),
            round: self.turns.round(),
        }
    }

    fn done(&self) -> bool {
        self.total >= self.target
    }

    fn winner(&self) -> Option<PlayerId> {
        if self.done() {
            self.last_mover
        } else {
            None
        }
    }

    fn on_start(&mut self) {
        self.starts += 1;
    }

    fn on_end(&mut self) {
        self.ends += 1;
    }
}

fn race(target: i64) -> RaceTo {
    RaceTo::new(GameOptions::new().with("target", target)).unwrap()
}

#[test]
fn test_round_robin_game_to_completion() {
    let mut m = Match::new(race(7));
    let a = m.add_player("a").unwrap();
    let b = m.add_player("b").unwrap();
    let c = m.add_player("c").unwrap();
    m.start().unwrap();

    assert_eq!(m.game().game_state_json()["to_move"], "a");

    m.act(|g| g.add(a, 3)).unwrap();
    let err = m.act(|g| g.add(a, 1)).unwrap_err();
    assert!(matches!(err, GameError::NotPlayerTurn { .. }));
    assert!(!m.take_state_changed());

    m.act(|g| g.add(b, 1)).unwrap();
    m.act(|g| g.add(c, 1)).unwrap();
    assert!(m.take_state_changed(), "end of round notifies");
    assert_eq!(m.game().game_state_json()["round"], 2);

    assert_eq!(m.act(|g| g.add(a, 2)).unwrap(), 7);
    assert_eq!(m.phase(), MatchPhase::Finished);
    assert_eq!(m.result(), Some(GameResult::Winner(a)));

    let game = m.into_game();
    assert_eq!((game.starts, game.ends), (1, 1));
}

#[test]
fn test_hooks_run_exactly_once() {
    let mut m = Match::new(race(1));
    let a = m.add_player("a").unwrap();
    m.add_player("b").unwrap();
    m.start().unwrap();
    assert!(m.start().is_err());

    m.act(|g| g.add(a, 1)).unwrap();
    assert_eq!(m.phase(), MatchPhase::Finished);

    // Further actions are refused without re-running on_end
    let err = m.act(|g| g.add(a, 1)).unwrap_err();
    assert!(matches!(err, GameError::NotPlayerTurn { .. }));

    let game = m.into_game();
    assert_eq!((game.starts, game.ends), (1, 1));
}

#[test]
fn test_capacity_enforced() {
    let mut m = Match::new(RockPaperScissorsBuilder::new().build().unwrap());

    assert!(matches!(m.start(), Err(GameError::IncorrectMatch { .. })));
    m.add_player("P0").unwrap();
    assert!(!m.game().is_playable());
    assert!(m.start().is_err(), "one player is not enough");

    m.add_player("P1").unwrap();
    assert!(m.game().is_playable());

    let err = m.add_player("P2").unwrap_err();
    assert_eq!(err.details(), "match is full");
    assert_eq!(m.game().num_players(), 2);
}

#[test]
fn test_duplicate_player_rejected() {
    let mut m = Match::new(race(10));
    m.add_player("a").unwrap();

    let err = m.add_player("a").unwrap_err();
    assert!(matches!(err, GameError::DuplicatePlayer { .. }));
    assert_eq!(err.to_payload().code, -40103);

    assert_eq!(m.add_player("b").unwrap(), PlayerId::new(1));
}

#[test]
fn test_no_joining_after_start() {
    let mut m = Match::new(race(10));
    m.add_player("a").unwrap();
    m.add_player("b").unwrap();
    m.start().unwrap();

    assert!(matches!(m.add_player("c"), Err(GameError::IncorrectMatch { .. })));
}

#[test]
fn test_actions_before_start_rejected() {
    let mut m = Match::new(race(10));
    let a = m.add_player("a").unwrap();

    let err = m.act(|g| g.add(a, 1)).unwrap_err();
    assert!(matches!(err, GameError::IncorrectMatch { .. }));
    assert_eq!(m.result(), None);
}

#[test]
fn test_player_lookup() {
    let mut m = Match::new(race(10));
    m.add_player("a").unwrap();
    m.add_player("b").unwrap();

    let game = m.game();
    assert_eq!(game.player(PlayerId::new(1)).unwrap().name(), "b");
    assert_eq!(
        game.player_by_index(5).unwrap_err(),
        GameError::InvalidPlayerReference { id: 5 }
    );
    assert_eq!(game.players().by_name("a").unwrap().id(), PlayerId::new(0));
}

#[test]
fn test_rps_match_lifecycle() {
    let game = RockPaperScissorsBuilder::new()
        .variant("rpsls")
        .points_to_win(2)
        .build()
        .unwrap();
    let mut m = Match::new(game);
    let p0 = m.add_player("P0").unwrap();
    let p1 = m.add_player("P1").unwrap();
    m.start().unwrap();
    assert_eq!(m.phase(), MatchPhase::InProgress);

    for _ in 0..2 {
        m.act(|g| g.submit_move(p1, "rock")).unwrap();
        assert!(!m.take_state_changed());
        m.act(|g| g.submit_move(p0, "spock")).unwrap();
        assert!(m.take_state_changed());
    }

    assert_eq!(m.phase(), MatchPhase::Finished);
    assert_eq!(m.result(), Some(GameResult::Winner(p0)));
    assert!(m.act(|g| g.submit_move(p1, "rock")).is_err());
}
