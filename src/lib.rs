// In: src/lib.rs

//! Pokebattle Turn Resolver
//!
//! A tick-driven battle engine: two lineups of combatants trade attacks,
//! gated by frame-counted timers, until one lineup runs dry. The engine owns
//! no clock and no graphics, so a fixed sequence of ticks and inputs always
//! replays the same battle.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod combatant;
pub mod config;
pub mod errors;
pub mod lineup;
pub mod moves;
pub mod prefab_lineups;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{CombatantRecord, MoveDescriptor, Side, SpriteAssets};

// --- From this crate's modules (`src/`) ---

// Core battle engine types.
pub use battle::mediator::{AttackSink, BattleMediator};
pub use battle::render::{BattleRenderer, FloatStage};
pub use battle::state::{BattleEvent, EventBus, GameState};
pub use battle::timers::{TickTimer, TimerRegistry};

// Runtime types for a battle.
pub use combatant::{Combatant, CombatantState};
pub use config::{BattleConfig, PowerRange};
pub use lineup::{Lineup, LineupCursor};
pub use moves::{Attack, MoveSlot};

// Crate-specific error and result types.
pub use errors::{
    ActionError, BattleEngineError, BattleResult, ConfigError, LineupError, LineupResult,
    TimerError,
};
