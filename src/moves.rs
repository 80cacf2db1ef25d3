use crate::errors::ActionError;
use serde::{Deserialize, Serialize};

/// Every combatant carries exactly this many moves.
pub const MOVE_SET_SIZE: usize = 4;

/// A named attack with a fixed power. Built once with the move set, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    pub power: u32,
}

impl Attack {
    pub fn new(name: impl Into<String>, power: u32) -> Self {
        Self {
            name: name.into(),
            power,
        }
    }
}

/// A validated position (0-3) in a move set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveSlot(usize);

impl MoveSlot {
    /// Converts the 1-based key the player pressed into a slot.
    pub fn from_key(key: usize) -> Result<Self, ActionError> {
        if (1..=MOVE_SET_SIZE).contains(&key) {
            Ok(MoveSlot(key - 1))
        } else {
            Err(ActionError::InvalidMoveIndex(key))
        }
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// The 1-based key shown next to the move on screen.
    pub fn key(self) -> usize {
        self.0 + 1
    }
}
