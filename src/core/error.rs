//! Error taxonomy surfaced to callers.
//!
//! Rule violations are returned as [`GameError`] values; the transport turns
//! them into a structured `{code, message, data}` reply via
//! [`GameError::to_payload`]. Codes live in a fixed space that is disjoint
//! from the general request codes, so a caller can tell "bad request" apart
//! from "game rule violation".

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed, enumerated error code space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // General request codes
    ParseError,
    IncorrectRequest,
    NoSuchOperation,
    IncorrectParams,

    // Match management codes
    UnknownGame,
    AlreadyInMatch,
    UnknownMatch,
    DuplicatePlayer,
    IncorrectMatch,

    // Game action codes
    GameNotPlayerTurn,
    GameNoSuchAction,
    GameIncorrectActionData,
    GameIncorrectMove,
}

impl ErrorCode {
    /// Numeric wire value.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            ErrorCode::ParseError => -32700,
            ErrorCode::IncorrectRequest => -32600,
            ErrorCode::NoSuchOperation => -32601,
            ErrorCode::IncorrectParams => -32602,
            ErrorCode::UnknownGame => -40100,
            ErrorCode::AlreadyInMatch => -40101,
            ErrorCode::UnknownMatch => -40102,
            ErrorCode::DuplicatePlayer => -40103,
            ErrorCode::IncorrectMatch => -40104,
            ErrorCode::GameNotPlayerTurn => -50100,
            ErrorCode::GameNoSuchAction => -50101,
            ErrorCode::GameIncorrectActionData => -50102,
            ErrorCode::GameIncorrectMove => -50103,
        }
    }

    /// Fixed human-readable message for this code.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            ErrorCode::ParseError => "Parse error",
            ErrorCode::IncorrectRequest => "Incorrect request",
            ErrorCode::NoSuchOperation => "No such operation",
            ErrorCode::IncorrectParams => "Incorrect parameters",
            ErrorCode::UnknownGame => "Unknown game",
            ErrorCode::AlreadyInMatch => "Already in a match",
            ErrorCode::UnknownMatch => "Unknown match",
            ErrorCode::DuplicatePlayer => "Duplicate player name",
            ErrorCode::IncorrectMatch => "Incorrect match",
            ErrorCode::GameNotPlayerTurn => "Action not allowed outside player's turn",
            ErrorCode::GameNoSuchAction => "Unsupported action in game",
            ErrorCode::GameIncorrectActionData => "Incorrect data in game action",
            ErrorCode::GameIncorrectMove => "Incorrect move",
        }
    }

    /// True for codes raised by game rules (as opposed to request handling).
    #[must_use]
    pub const fn is_game_action(self) -> bool {
        self.value() <= -50100 && self.value() > -50200
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Errors raised by the game core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid player_id: {id}")]
    InvalidPlayerReference { id: usize },

    #[error("Not player turn: {details}")]
    NotPlayerTurn { details: String },

    #[error("Incorrect move: {details}")]
    IncorrectMove { details: String },

    #[error("Incorrect action data: {details}")]
    IncorrectActionData { details: String },

    #[error("Duplicate player name: {name}")]
    DuplicatePlayer { name: String },

    #[error("Incorrect match: {details}")]
    IncorrectMatch { details: String },
}

impl GameError {
    pub fn not_player_turn(details: impl Into<String>) -> Self {
        GameError::NotPlayerTurn { details: details.into() }
    }

    pub fn incorrect_move(details: impl Into<String>) -> Self {
        GameError::IncorrectMove { details: details.into() }
    }

    pub fn incorrect_action_data(details: impl Into<String>) -> Self {
        GameError::IncorrectActionData { details: details.into() }
    }

    pub fn incorrect_match(details: impl Into<String>) -> Self {
        GameError::IncorrectMatch { details: details.into() }
    }

    /// Wire code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            GameError::InvalidPlayerReference { .. } => ErrorCode::IncorrectParams,
            GameError::NotPlayerTurn { .. } => ErrorCode::GameNotPlayerTurn,
            GameError::IncorrectMove { .. } => ErrorCode::GameIncorrectMove,
            GameError::IncorrectActionData { .. } => ErrorCode::GameIncorrectActionData,
            GameError::DuplicatePlayer { .. } => ErrorCode::DuplicatePlayer,
            GameError::IncorrectMatch { .. } => ErrorCode::IncorrectMatch,
        }
    }

    /// Diagnostic details. Not meant for caller branching.
    #[must_use]
    pub fn details(&self) -> String {
        match self {
            GameError::InvalidPlayerReference { id } => format!("Invalid player_id: {id}"),
            GameError::NotPlayerTurn { details }
            | GameError::IncorrectMove { details }
            | GameError::IncorrectActionData { details }
            | GameError::IncorrectMatch { details } => details.clone(),
            GameError::DuplicatePlayer { name } => format!("Player '{name}' already in match"),
        }
    }

    /// Structured form for the transport's error reply.
    #[must_use]
    pub fn to_payload(&self) -> ErrorPayload {
        let code = self.code();
        ErrorPayload {
            code: code.value(),
            message: code.message().to_string(),
            data: ErrorData {
                details: Some(self.details()),
            },
        }
    }
}

/// Caller-visible error body: code, message and optional details.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub code: i32,
    pub message: String,
    pub data: ErrorData,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
