//! # rust-tbg
//!
//! A minimal authoring framework for turn-based, multi-round games.
//!
//! ## Design Principles
//!
//! 1. **Small Contract**: A game is anything implementing [`Game`]:
//!    capacity, a state snapshot, a completion predicate, a winner, and
//!    start/end hooks. Shared bookkeeping is composed in via [`GameCore`].
//!
//! 2. **Synchronous Core**: Every operation runs to completion before it
//!    returns. The transport serializes actions per match; the core does no
//!    locking and no I/O.
//!
//! 3. **Errors Are Values**: Rule violations come back as [`GameError`]
//!    with a fixed wire code. Internal invariant violations panic.
//!
//! ## Modules
//!
//! - `core`: Players, options, errors, RNG
//! - `rules`: The `Game` trait, match lifecycle, round-robin turns
//! - `relation`: Move sets and "beats" relations for simultaneous games
//! - `snapshot`: Player-name-keyed state snapshots for clients
//! - `games`: Reference games (Rock-Paper-Scissors family)
//!
//! ## Example
//!
//! ```
//! use rust_tbg::games::rps::RockPaperScissorsBuilder;
//! use rust_tbg::rules::{Game, GameResult, Match};
//!
//! let game = RockPaperScissorsBuilder::new().points_to_win(1).build().unwrap();
//! let mut m = Match::new(game);
//! let p0 = m.add_player("P0").unwrap();
//! let p1 = m.add_player("P1").unwrap();
//! m.start().unwrap();
//!
//! m.act(|g| g.submit_move(p0, "paper")).unwrap();
//! m.act(|g| g.submit_move(p1, "rock")).unwrap();
//!
//! assert!(m.take_state_changed());
//! assert_eq!(m.result(), Some(GameResult::Winner(p0)));
//! assert_eq!(m.game().game_state_json()["points"]["P0"], 1);
//! ```

pub mod core;
pub mod games;
pub mod relation;
pub mod rules;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{
    ErrorCode, ErrorPayload, GameError, GameOptions, GameRng, OptionValue, Player, PlayerId,
    PlayerMap, PlayerRegistry,
};

pub use crate::rules::{Game, GameCore, GameResult, Match, MatchPhase, TurnTracker};

pub use crate::relation::{Move, MoveId, MoveRelation, Outcome, Variant};

pub use crate::snapshot::{GameSnapshot, GameTypeView, PlayerKeyed, RoundView};

pub use crate::games::rps::{MoveAck, RandomMover, RockPaperScissors, RockPaperScissorsBuilder, Round};
