//! Player identification, registry and per-player data storage.
//!
//! ## PlayerId
//!
//! Dense 0-based identifier, assigned in join order.
//!
//! ## PlayerRegistry
//!
//! The ordered participants of one match plus a name lookup.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::GameError;

/// Most players a registry can hold; every id fits in a `u8`.
pub const MAX_PLAYERS: usize = 255;

/// Player identifier supporting up to 255 players.
///
/// Identifiers are 0-based and contiguous: the first player to join is
/// `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a match with `player_count` players.
    ///
    /// ```
    /// use rust_tbg::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(2).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant in one match.
///
/// Created only by [`PlayerRegistry::add`]; the id never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
}

impl Player {
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered set of the players in a match.
///
/// ## Example
///
/// ```
/// use rust_tbg::core::{PlayerId, PlayerRegistry};
///
/// let mut registry = PlayerRegistry::new();
/// let alice = registry.add("alice").unwrap();
/// let bob = registry.add("bob").unwrap();
///
/// assert_eq!(alice, PlayerId::new(0));
/// assert_eq!(bob, PlayerId::new(1));
/// assert_eq!(registry.get(bob).unwrap().name(), "bob");
/// assert!(registry.add("alice").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct PlayerRegistry {
    players: Vec<Player>,
    by_name: FxHashMap<String, PlayerId>,
}

impl PlayerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player, assigning the next sequential identifier.
    ///
    /// Fails with `DuplicatePlayer` if the name is already taken, and with
    /// `IncorrectMatch` once every `PlayerId` is in use.
    pub fn add(&mut self, name: impl Into<String>) -> Result<PlayerId, GameError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(GameError::DuplicatePlayer { name });
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(GameError::incorrect_match(format!(
                "at most {MAX_PLAYERS} players supported"
            )));
        }

        let id = PlayerId(self.players.len() as u8);
        self.by_name.insert(name.clone(), id);
        self.players.push(Player { id, name });
        Ok(id)
    }

    /// Look up a player by identifier.
    pub fn get(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.get_index(id.index())
    }

    /// Look up a player by raw index, as received from a caller.
    pub fn get_index(&self, index: usize) -> Result<&Player, GameError> {
        self.players
            .get(index)
            .ok_or(GameError::InvalidPlayerReference { id: index })
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Player> {
        self.by_name.get(name).map(|id| &self.players[id.index()])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players in join order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Player names in join order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|p| p.name.as_str())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_tbg::core::{PlayerId, PlayerMap};
///
/// let mut points: PlayerMap<u32> = PlayerMap::with_value(2, 0);
/// points[PlayerId::new(1)] += 1;
/// assert_eq!(points[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in player order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
