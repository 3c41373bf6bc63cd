//! Core engine types: players, options, errors, RNG.
//!
//! This module contains the game-agnostic building blocks every game
//! composes. Game-specific meaning lives in the games themselves.

pub mod error;
pub mod options;
pub mod player;
pub mod rng;

pub use error::{ErrorCode, ErrorData, ErrorPayload, GameError};
pub use options::{GameOptions, OptionValue};
pub use player::{Player, PlayerId, PlayerMap, PlayerRegistry, MAX_PLAYERS};
pub use rng::GameRng;
