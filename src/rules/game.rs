//! The game lifecycle contract.
//!
//! Games implement [`Game`] to define:
//! - How many players they take
//! - What their state looks like to clients
//! - When they are over, and who won
//! - What happens right before the first move and after the last one
//!
//! Shared bookkeeping (players, options, the state-changed flag) lives in
//! [`GameCore`], which each game owns and exposes through `core()`.

use serde::Serialize;

use crate::core::{GameError, GameOptions, Player, PlayerId, PlayerRegistry};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Over with no winner.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Bookkeeping shared by every game.
#[derive(Clone, Debug, Default)]
pub struct GameCore {
    options: GameOptions,
    players: PlayerRegistry,
    state_updated: bool,
}

impl GameCore {
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        Self {
            options,
            players: PlayerRegistry::new(),
            state_updated: false,
        }
    }

    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    #[must_use]
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Add a player unless `capacity` players have already joined.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        capacity: usize,
    ) -> Result<PlayerId, GameError> {
        if self.players.len() >= capacity {
            return Err(GameError::incorrect_match("match is full"));
        }
        self.players.add(name)
    }

    pub fn notify_update(&mut self) {
        self.state_updated = true;
    }

    #[must_use]
    pub fn state_updated(&self) -> bool {
        self.state_updated
    }

    /// Return the flag and clear it.
    pub fn take_state_updated(&mut self) -> bool {
        std::mem::take(&mut self.state_updated)
    }
}

/// Game lifecycle trait.
///
/// A match constructs the game with its options, adds players one at a
/// time, calls [`on_start`](Game::on_start) once, feeds it actions until
/// [`done`](Game::done) turns true, then calls [`on_end`](Game::on_end)
/// once. [`Match`](super::Match) enforces that ordering.
///
/// ## Implementation Notes
///
/// - `done` must be monotonic: once true, it stays true
/// - `winner` is only meaningful once `done`; return `None` otherwise
/// - `game_state` may assume `on_start` has run
pub trait Game {
    /// Client-facing state snapshot.
    type State: Serialize;

    fn core(&self) -> &GameCore;

    fn core_mut(&mut self) -> &mut GameCore;

    /// Minimum number of players before the game can start.
    fn min_players(&self) -> usize;

    /// Maximum number of players allowed to join.
    fn max_players(&self) -> usize;

    /// Current full state. Rebuilt on every call.
    fn game_state(&self) -> Self::State;

    /// True once the game is over.
    fn done(&self) -> bool;

    /// Winning player, or `None` for a tie or an unfinished game.
    fn winner(&self) -> Option<PlayerId>;

    /// Runs once, after all players have joined and before the first action.
    fn on_start(&mut self);

    /// Runs once, after `done` first becomes true.
    fn on_end(&mut self) {}

    // === Convenience Methods ===

    fn options(&self) -> &GameOptions {
        self.core().options()
    }

    fn players(&self) -> &PlayerRegistry {
        self.core().players()
    }

    fn num_players(&self) -> usize {
        self.core().players().len()
    }

    /// Look up a player, failing with `InvalidPlayerReference` when the id
    /// is out of range.
    fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.core().players().get(id)
    }

    /// Look up a player by an untrusted raw index.
    fn player_by_index(&self, index: usize) -> Result<&Player, GameError> {
        self.core().players().get_index(index)
    }

    /// Add a player with the next sequential identifier.
    ///
    /// Fails with `IncorrectMatch` once `max_players` have joined.
    fn add_player(&mut self, name: &str) -> Result<PlayerId, GameError> {
        let capacity = self.max_players();
        self.core_mut().add_player(name, capacity)
    }

    /// Flag that clients should be sent a state-changed notification.
    fn notify_update(&mut self) {
        self.core_mut().notify_update();
    }

    fn state_updated(&self) -> bool {
        self.core().state_updated()
    }

    /// Consume the state-changed flag.
    fn take_state_updated(&mut self) -> bool {
        self.core_mut().take_state_updated()
    }

    /// Player count is within `[min_players, max_players]`.
    fn is_playable(&self) -> bool {
        (self.min_players()..=self.max_players()).contains(&self.num_players())
    }

    /// `None` while the game continues.
    fn result(&self) -> Option<GameResult> {
        if !self.done() {
            return None;
        }
        Some(self.winner().map_or(GameResult::Draw, GameResult::Winner))
    }

    /// State snapshot as a JSON value, ready for transmission.
    fn game_state_json(&self) -> serde_json::Value {
        match serde_json::to_value(self.game_state()) {
            Ok(value) => value,
            Err(err) => panic!("game state must serialize to JSON: {err}"),
        }
    }
}
