use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// One of the two participants of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Side {
    /// The player-controlled side. Always holds the opening turn.
    Trainer,
    /// The autonomous side met in an encounter.
    Opponent,
}

impl Side {
    pub fn rival(self) -> Side {
        match self {
            Side::Trainer => Side::Opponent,
            Side::Opponent => Side::Trainer,
        }
    }

    /// Short label used by the narrator ("Trainer chose ...", "Opp chose ...").
    pub fn narrator_label(self) -> &'static str {
        match self {
            Side::Trainer => "Trainer",
            Side::Opponent => "Opp",
        }
    }
}
