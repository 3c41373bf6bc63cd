//! Rock-Paper-Scissors family.
//!
//! A two-player simultaneous-move game over a configurable move relation:
//! - Both players submit a move each round, in any order
//! - The round goes to whichever move beats the other; equal or unrelated
//!   moves tie
//! - First player to `points_to_win` round wins (default 3) takes the match
//!
//! Variants: `"rps"` (3 moves) and `"rpsls"` (5 moves).

mod bot;
mod game;
mod round;

pub use bot::RandomMover;
pub use game::{
    MoveAck, RockPaperScissors, RockPaperScissorsBuilder, DEFAULT_POINTS_TO_WIN, DEFAULT_VARIANT,
    POINTS_TO_WIN_OPTION, VARIANT_OPTION,
};
pub use round::Round;
