//! Static variant tables.
//!
//! Which move beats which is domain trivia, so it is written down as data
//! rather than derived. Each edge carries the verb used to narrate it.

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// One beats edge: `(winner, verb, loser)`.
pub(crate) type Edge = (&'static str, &'static str, &'static str);

pub(crate) struct VariantTable {
    pub id: &'static str,
    pub description: &'static str,
    pub moves: &'static [&'static str],
    pub edges: &'static [Edge],
}

static RPS: VariantTable = VariantTable {
    id: "rps",
    description: "Rock, Paper, Scissors",
    moves: &["rock", "paper", "scissors"],
    edges: &[
        ("rock", "crushes", "scissors"),
        ("paper", "covers", "rock"),
        ("scissors", "cuts", "paper"),
    ],
};

static RPSLS: VariantTable = VariantTable {
    id: "rpsls",
    description: "Rock, Paper, Scissors, Lizard, Spock",
    moves: &["rock", "paper", "scissors", "lizard", "spock"],
    edges: &[
        ("scissors", "cuts", "paper"),
        ("paper", "covers", "rock"),
        ("rock", "crushes", "lizard"),
        ("lizard", "poisons", "spock"),
        ("spock", "smashes", "scissors"),
        ("scissors", "decapitates", "lizard"),
        ("lizard", "eats", "paper"),
        ("paper", "disproves", "spock"),
        ("spock", "vaporizes", "rock"),
        ("rock", "crushes", "scissors"),
    ],
};

/// Supported move-set variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Classic three-move game.
    Rps,
    /// Five-move extension with lizard and spock.
    Rpsls,
}

impl Variant {
    /// All supported variants, in table order.
    pub const ALL: [Variant; 2] = [Variant::Rps, Variant::Rpsls];

    /// Parse a variant identifier.
    ///
    /// Fails with `IncorrectActionData` for anything but the supported ids.
    pub fn from_id(id: &str) -> Result<Self, GameError> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.id() == id)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|v| v.id()).collect();
                GameError::incorrect_action_data(format!(
                    "unknown game variant '{id}', expected one of {known:?}"
                ))
            })
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        self.table().id
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        self.table().description
    }

    /// Number of moves in this variant.
    #[must_use]
    pub fn move_count(self) -> usize {
        self.table().moves.len()
    }

    pub(crate) fn table(self) -> &'static VariantTable {
        match self {
            Variant::Rps => &RPS,
            Variant::Rpsls => &RPSLS,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
