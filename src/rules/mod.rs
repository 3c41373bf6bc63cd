//! Game lifecycle contract and shared turn machinery.
//!
//! Games implement [`Game`] to define:
//! - Player capacity
//! - Client-facing state
//! - Completion and winner
//! - Start and end hooks
//!
//! [`Match`] drives a game through its lifecycle; [`TurnTracker`] is there
//! for round-robin games.

pub mod game;
pub mod lifecycle;
pub mod turns;

pub use game::{Game, GameCore, GameResult};
pub use lifecycle::{Match, MatchPhase};
pub use turns::TurnTracker;
