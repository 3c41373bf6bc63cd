//! Moves and the beats relation for one variant.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use super::variant::Variant;
use crate::core::GameError;

/// Handle to a move within a variant.
///
/// Carries its variant, so handles from different variants never compare
/// equal even when the move names match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMoveId")]
pub struct MoveId {
    variant: Variant,
    index: u8,
}

/// Unchecked wire form of [`MoveId`].
#[derive(Deserialize)]
struct RawMoveId {
    variant: Variant,
    index: u8,
}

impl TryFrom<RawMoveId> for MoveId {
    type Error = GameError;

    fn try_from(raw: RawMoveId) -> Result<Self, GameError> {
        if usize::from(raw.index) >= raw.variant.table().moves.len() {
            return Err(GameError::incorrect_action_data(format!(
                "{} has no move #{}",
                raw.variant, raw.index
            )));
        }
        Ok(MoveId { variant: raw.variant, index: raw.index })
    }
}

impl MoveId {
    #[must_use]
    pub fn variant(self) -> Variant {
        self.variant
    }

    /// Position of the move in its variant table.
    #[must_use]
    pub fn index(self) -> usize {
        self.index as usize
    }

    /// Move name as written in the variant table.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.variant.table().moves[self.index()]
    }
}

impl std::fmt::Display for MoveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A named move and the set of moves it defeats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    id: MoveId,
    /// Out-edges of the beats relation, as indices into the variant table.
    defeats: SmallVec<[u8; 4]>,
}

impl Move {
    #[must_use]
    pub fn id(&self) -> MoveId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// True iff `other` is in this move's defeats set.
    ///
    /// Always false across variants and against itself.
    #[must_use]
    pub fn beats(&self, other: MoveId) -> bool {
        other.variant == self.id.variant && self.defeats.contains(&other.index)
    }

    /// Moves this one defeats.
    pub fn defeats(&self) -> impl Iterator<Item = MoveId> + '_ {
        let variant = self.id.variant;
        self.defeats.iter().map(move |&index| MoveId { variant, index })
    }
}

/// Outcome of pitting two moves against each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The first move beats the second.
    First,
    /// The second move beats the first.
    Second,
    /// Neither beats the other (including identical moves).
    Tie,
}

/// The complete move set and beats relation of one variant.
///
/// Built once per game instance and never mutated afterwards.
///
/// ## Example
///
/// ```
/// use rust_tbg::relation::{MoveRelation, Outcome};
///
/// let relation = MoveRelation::build("rps").unwrap();
/// let rock = relation.parse("rock").unwrap();
/// let scissors = relation.parse("scissors").unwrap();
///
/// assert!(relation.beats(rock, scissors));
/// assert_eq!(relation.resolve(scissors, rock), Outcome::Second);
/// assert_eq!(relation.describe(rock, scissors).unwrap(), "rock crushes scissors");
/// assert!(relation.parse("fire").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct MoveRelation {
    variant: Variant,
    moves: Vec<Move>,
    by_name: FxHashMap<&'static str, MoveId>,
    verbs: FxHashMap<(u8, u8), &'static str>,
}

impl MoveRelation {
    /// Build the relation for a variant identifier such as `"rps"`.
    pub fn build(variant_id: &str) -> Result<Self, GameError> {
        Variant::from_id(variant_id).map(Self::for_variant)
    }

    /// Build the relation for an already-parsed variant.
    #[must_use]
    pub fn for_variant(variant: Variant) -> Self {
        let table = variant.table();

        let mut by_name = FxHashMap::default();
        let mut moves: Vec<Move> = table
            .moves
            .iter()
            .enumerate()
            .map(|(index, &name)| {
                let id = MoveId { variant, index: index as u8 };
                by_name.insert(name, id);
                Move { id, defeats: SmallVec::new() }
            })
            .collect();

        let mut verbs = FxHashMap::default();
        for &(winner, verb, loser) in table.edges {
            let w = by_name[winner];
            let l = by_name[loser];
            moves[w.index()].defeats.push(l.index);
            verbs.insert((w.index, l.index), verb);
        }

        let relation = Self { variant, moves, by_name, verbs };
        debug_assert!(relation.is_balanced_tournament(), "malformed table for {variant}");
        trace!(variant = variant.id(), moves = relation.moves.len(), "built move relation");
        relation
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Moves in table order.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Look up a move by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Move> {
        self.by_name.get(name).map(|id| &self.moves[id.index()])
    }

    /// Resolve a move name, failing with `IncorrectMove` if it is not part
    /// of this variant.
    pub fn parse(&self, name: &str) -> Result<MoveId, GameError> {
        self.by_name.get(name).copied().ok_or_else(|| {
            GameError::incorrect_move(format!(
                "'{name}' is not a move in {}",
                self.variant.description()
            ))
        })
    }

    /// Does `a` beat `b`?
    #[must_use]
    pub fn beats(&self, a: MoveId, b: MoveId) -> bool {
        a.variant == self.variant && self.moves[a.index()].beats(b)
    }

    #[must_use]
    pub fn resolve(&self, first: MoveId, second: MoveId) -> Outcome {
        if self.beats(first, second) {
            Outcome::First
        } else if self.beats(second, first) {
            Outcome::Second
        } else {
            Outcome::Tie
        }
    }

    /// Narrate a decisive pairing, e.g. "paper covers rock". `None` on a tie.
    #[must_use]
    pub fn describe(&self, first: MoveId, second: MoveId) -> Option<String> {
        let (winner, loser) = match self.resolve(first, second) {
            Outcome::First => (first, second),
            Outcome::Second => (second, first),
            Outcome::Tie => return None,
        };
        let verb = self.verbs.get(&(winner.index, loser.index))?;
        Some(format!("{} {} {}", winner.name(), verb, loser.name()))
    }

    /// Irreflexive, antisymmetric, and every move beats exactly
    /// `(n - 1) / 2` others.
    fn is_balanced_tournament(&self) -> bool {
        let expected = (self.moves.len() - 1) / 2;
        self.moves.iter().all(|m| {
            m.defeats.len() == expected
                && !m.beats(m.id)
                && m.defeats().all(|other| !self.moves[other.index()].beats(m.id))
        })
    }
}
