use serde::{Deserialize, Serialize};

/// A move as it arrives from roster population: a name with no power yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDescriptor {
    pub name: String,
}

impl MoveDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Sprite handles for the renderer. The engine never interprets these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteAssets {
    pub front: Option<String>,
    pub back: Option<String>,
}

/// Externally supplied data for one combatant.
///
/// `moves` is a candidate pool; a combatant built from the record draws
/// four of them, so the pool must hold at least four entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantRecord {
    pub name: String,
    pub moves: Vec<MoveDescriptor>,
    #[serde(default)]
    pub sprites: SpriteAssets,
}

impl CombatantRecord {
    pub fn new(name: impl Into<String>, moves: Vec<MoveDescriptor>) -> Self {
        Self {
            name: name.into(),
            moves,
            sprites: SpriteAssets::default(),
        }
    }
}
