use crate::battle::mediator::BattleMediator;
use crate::battle::render::BattleRenderer;
use crate::combatant::Combatant;
use crate::config::BattleConfig;
use crate::lineup::Lineup;
use crate::moves::{Attack, MOVE_SET_SIZE};
use schema::Side;
use std::collections::HashMap;

/// A builder for creating test combatants with common defaults.
///
/// # Example
/// ```
/// let onix = TestCombatantBuilder::new("onix")
///     .with_health(30)
///     .with_powers([10, 20, 30, 40])
///     .build();
/// ```
pub struct TestCombatantBuilder {
    name: String,
    health: i32,
    powers: [u32; MOVE_SET_SIZE],
}

impl TestCombatantBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            health: 200,
            powers: [40, 50, 60, 70],
        }
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    /// Sets the power of each of the four moves, named `move1`..`move4`.
    pub fn with_powers(mut self, powers: [u32; MOVE_SET_SIZE]) -> Self {
        self.powers = powers;
        self
    }

    pub fn build(self) -> Combatant {
        let moves = std::array::from_fn(|i| Attack::new(format!("move{}", i + 1), self.powers[i]));
        Combatant::new(self.name, moves, self.health)
    }
}

/// Renderer whose floats take exactly two calls: the first call starts the
/// motion, the second lands it. Counts outcome banners for assertions.
#[derive(Debug, Default)]
pub struct InstantStage {
    calls: HashMap<(Side, u32, bool), u32>,
    pub narrations: Vec<String>,
    pub outcome_frames: u32,
}

impl BattleRenderer for InstantStage {
    fn show(&mut self, side: Side, combatant: &mut Combatant, exiting: bool) {
        let exiting = exiting && combatant.state.ready;
        let count = self.calls.entry((side, combatant.serial(), exiting)).or_insert(0);
        *count += 1;
        let landed = *count >= 2;
        if exiting {
            combatant.state.fainted = landed;
        } else {
            combatant.state.ready = landed;
        }
    }

    fn narrate(&mut self, message: &str) {
        self.narrations.push(message.to_string());
    }

    fn show_outcome(&mut self, _winner: Side) {
        self.outcome_frames += 1;
    }
}

/// Default tuning with a fixed seed.
pub fn test_config() -> BattleConfig {
    BattleConfig {
        seed: Some(7),
        ..BattleConfig::default()
    }
}

/// Creates a battle between two lineups with the default delays.
pub fn create_test_battle(trainer: Vec<Combatant>, opponent: Vec<Combatant>) -> BattleMediator {
    BattleMediator::new(
        Lineup::with_combatants(Side::Trainer, trainer),
        Lineup::with_combatants(Side::Opponent, opponent),
        &test_config(),
    )
}

/// Standard 1v1 with full health on both sides.
pub fn create_duel() -> BattleMediator {
    create_test_battle(
        vec![TestCombatantBuilder::new("pikachu").build()],
        vec![TestCombatantBuilder::new("onix").build()],
    )
}

/// Runs `count` resolution ticks, returning the last result.
pub fn tick(mediator: &mut BattleMediator, stage: &mut InstantStage, count: u32) -> Option<Side> {
    let mut result = None;
    for _ in 0..count {
        result = mediator.current_fight(stage);
    }
    result
}

/// Ticks until both front combatants are in place and attacks are allowed.
/// Returns the number of ticks it took.
pub fn open_gate(mediator: &mut BattleMediator, stage: &mut InstantStage) -> u32 {
    for elapsed in 1..=1_000 {
        mediator.current_fight(stage);
        if mediator.allow_attacks() {
            return elapsed;
        }
    }
    panic!("attack gate never opened");
}

pub fn health(mediator: &BattleMediator, side: Side) -> i32 {
    match mediator.current(side) {
        Some(combatant) => combatant.health,
        None => panic!("{side} has no current combatant"),
    }
}
