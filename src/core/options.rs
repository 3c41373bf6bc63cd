//! Game options supplied when a match is created.
//!
//! Options are game-specific; the framework stores them without
//! interpreting them. Each game reads the keys it understands and ignores
//! the rest.
//!
//! ## OptionValue Types
//!
//! - `Int`: Numbers (points to win, board size)
//! - `Bool`: Flags
//! - `Text`: Strings (variant identifiers)

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Value of a single game option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Int(i64),
    Bool(bool),
    Text(String),
}

impl OptionValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            OptionValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            OptionValue::Int(_) => "integer",
            OptionValue::Bool(_) => "boolean",
            OptionValue::Text(_) => "string",
        }
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        OptionValue::Int(v)
    }
}

impl From<i32> for OptionValue {
    fn from(v: i32) -> Self {
        OptionValue::Int(v as i64)
    }
}

impl From<u32> for OptionValue {
    fn from(v: u32) -> Self {
        OptionValue::Int(v as i64)
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::Text(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Text(v.to_string())
    }
}

/// Opaque per-match option bag.
///
/// ## Example
///
/// ```
/// use rust_tbg::core::GameOptions;
///
/// let options = GameOptions::new()
///     .with("variant", "rpsls")
///     .with("points_to_win", 5);
///
/// assert_eq!(options.get_text("variant", "rps"), "rpsls");
/// assert_eq!(options.get_int("points_to_win", 3).unwrap(), 5);
/// assert_eq!(options.get_int("rounds", 1).unwrap(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameOptions {
    values: FxHashMap<String, OptionValue>,
}

impl GameOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from a JSON object, as received from a transport.
    ///
    /// `null` means "no options". Nested values and floats are rejected.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, GameError> {
        use serde_json::Value;

        let object = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(object) => object,
            other => {
                return Err(GameError::incorrect_action_data(format!(
                    "game options must be an object, got {other}"
                )))
            }
        };

        let mut options = Self::default();
        for (key, value) in object {
            let value = match value {
                Value::Bool(b) => OptionValue::Bool(*b),
                Value::String(s) => OptionValue::Text(s.clone()),
                Value::Number(n) => match n.as_i64() {
                    Some(i) => OptionValue::Int(i),
                    None => {
                        return Err(GameError::incorrect_action_data(format!(
                            "option '{key}' must be an integer, got {n}"
                        )))
                    }
                },
                other => {
                    return Err(GameError::incorrect_action_data(format!(
                        "unsupported value for option '{key}': {other}"
                    )))
                }
            };
            options.values.insert(key.clone(), value);
        }
        Ok(options)
    }

    /// Set an option.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.values.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    /// Integer option, or `default` when absent.
    ///
    /// Fails if the key is present with a non-integer value.
    pub fn get_int(&self, key: &str, default: i64) -> Result<i64, GameError> {
        match self.values.get(key) {
            None => Ok(default),
            Some(value) => value.as_int().ok_or_else(|| type_mismatch(key, "integer", value)),
        }
    }

    /// Boolean option, or `default` when absent.
    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool, GameError> {
        match self.values.get(key) {
            None => Ok(default),
            Some(value) => value.as_bool().ok_or_else(|| type_mismatch(key, "boolean", value)),
        }
    }

    /// Text option, or `default` when absent or not text.
    #[must_use]
    pub fn get_text<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.values
            .get(key)
            .and_then(OptionValue::as_text)
            .unwrap_or(default)
    }

    /// Text option, or `default` when absent.
    ///
    /// Unlike [`get_text`](Self::get_text), fails on a non-text value.
    pub fn require_text<'a>(&'a self, key: &str, default: &'a str) -> Result<&'a str, GameError> {
        match self.values.get(key) {
            None => Ok(default),
            Some(value) => value.as_text().ok_or_else(|| type_mismatch(key, "string", value)),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn type_mismatch(key: &str, expected: &str, found: &OptionValue) -> GameError {
    GameError::incorrect_action_data(format!(
        "option '{key}' must be {expected}, got {}",
        found.kind()
    ))
}
