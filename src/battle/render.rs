//! The drawing side of a battle.
//!
//! The mediator never animates anything itself: each tick it hands the front
//! combatant of a side to a [`BattleRenderer`], and the renderer flips
//! `ready` once the entry float lands and `fainted` once the exit float does.

use crate::combatant::Combatant;
use schema::Side;
use std::collections::HashMap;

pub trait BattleRenderer {
    /// Draws `combatant` and advances its entry float, or its exit float when
    /// `exiting` is set.
    fn show(&mut self, side: Side, combatant: &mut Combatant, exiting: bool);

    /// Narrator text for this tick.
    fn narrate(&mut self, _message: &str) {}

    /// Outcome banner, drawn every tick while the outcome delay runs.
    fn show_outcome(&mut self, _winner: Side) {}
}

pub const SCREEN_WIDTH: i32 = 700;
pub const ENTRY_SPEED: i32 = 5;
pub const EXIT_SPEED: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

/// Horizontal track a side's sprites travel along.
#[derive(Debug, Clone, Copy)]
struct Lane {
    off_screen: i32,
    resting: i32,
    enter: Direction,
    exit: Direction,
}

impl Lane {
    fn for_side(side: Side) -> Lane {
        match side {
            Side::Trainer => Lane {
                off_screen: -100,
                resting: 200,
                enter: Direction::Right,
                exit: Direction::Left,
            },
            Side::Opponent => Lane {
                off_screen: SCREEN_WIDTH + 100,
                resting: SCREEN_WIDTH - 200,
                enter: Direction::Left,
                exit: Direction::Right,
            },
        }
    }
}

/// Moves `x` one step toward `target`; true once it is already there.
fn float(x: &mut i32, direction: Direction, target: i32, speed: i32) -> bool {
    match direction {
        Direction::Right if *x < target => {
            *x += speed;
            false
        }
        Direction::Left if *x > target => {
            *x -= speed;
            false
        }
        _ => true,
    }
}

/// Headless renderer that only tracks sprite positions.
#[derive(Debug, Default)]
pub struct FloatStage {
    positions: HashMap<(Side, u32), i32>,
    narration: String,
    outcome: Option<Side>,
}

impl FloatStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current x of a combatant's sprite, if it is on the stage.
    pub fn position(&self, side: Side, serial: u32) -> Option<i32> {
        self.positions.get(&(side, serial)).copied()
    }

    pub fn narration(&self) -> &str {
        &self.narration
    }

    pub fn outcome(&self) -> Option<Side> {
        self.outcome
    }
}

impl BattleRenderer for FloatStage {
    fn show(&mut self, side: Side, combatant: &mut Combatant, exiting: bool) {
        let lane = Lane::for_side(side);
        let key = (side, combatant.serial());
        let x = self.positions.entry(key).or_insert(lane.off_screen);

        if !combatant.state.ready {
            combatant.state.ready = float(x, lane.enter, lane.resting, ENTRY_SPEED);
        } else if exiting {
            combatant.state.fainted = float(x, lane.exit, lane.off_screen, EXIT_SPEED);
            if combatant.state.fainted {
                self.positions.remove(&key);
            }
        } else {
            combatant.state.ready = float(x, lane.enter, lane.resting, EXIT_SPEED);
        }
    }

    fn narrate(&mut self, message: &str) {
        if self.narration != message {
            self.narration = message.to_string();
        }
    }

    fn show_outcome(&mut self, winner: Side) {
        self.outcome = Some(winner);
    }
}
