use crate::battle::mediator::AttackSink;
use crate::config::PowerRange;
use crate::errors::{LineupError, LineupResult};
use crate::moves::{Attack, MoveSlot, MOVE_SET_SIZE};
use rand::seq::IndexedRandom;
use rand::Rng;
use schema::{CombatantRecord, Side, SpriteAssets};
use serde::{Deserialize, Serialize};

/// Per-combatant flags read and written while a battle resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantState {
    /// Entry animation has landed.
    pub ready: bool,
    /// Health is gone and the exit animation has landed.
    pub fainted: bool,
    /// An attack from this combatant is in flight.
    pub attacking: bool,
    /// Health points still to drain, one per tick. `None` when nothing is queued.
    pub health_drain_remaining: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub health: i32,
    pub moves: [Attack; MOVE_SET_SIZE],
    pub state: CombatantState,
    pub sprites: SpriteAssets,
    // Position in the lineup it was recruited into; assigned by `Lineup::add`.
    pub(crate) serial: u32,
}

impl Combatant {
    pub fn new(
        name: impl Into<String>,
        moves: [Attack; MOVE_SET_SIZE],
        starting_health: i32,
    ) -> Self {
        Self {
            name: name.into(),
            health: starting_health,
            moves,
            state: CombatantState::default(),
            sprites: SpriteAssets::default(),
            serial: 0,
        }
    }

    /// Builds a combatant from an external record, drawing four distinct moves
    /// from its pool and a power for each from `power`.
    pub fn from_record<R: Rng + ?Sized>(
        record: &CombatantRecord,
        power: PowerRange,
        starting_health: i32,
        rng: &mut R,
    ) -> LineupResult<Self> {
        if record.moves.len() < MOVE_SET_SIZE {
            return Err(LineupError::NotEnoughMoves {
                name: record.name.clone(),
                found: record.moves.len(),
            });
        }

        let drawn: Vec<Attack> = record
            .moves
            .choose_multiple(rng, MOVE_SET_SIZE)
            .map(|descriptor| Attack::new(descriptor.name.clone(), power.sample(rng)))
            .collect();
        let moves: [Attack; MOVE_SET_SIZE] =
            drawn.try_into().map_err(|drawn: Vec<Attack>| LineupError::NotEnoughMoves {
                name: record.name.clone(),
                found: drawn.len(),
            })?;

        let mut combatant = Combatant::new(record.name.clone(), moves, starting_health);
        combatant.sprites = record.sprites.clone();
        Ok(combatant)
    }

    pub fn serial(&self) -> u32 {
        self.serial
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Clears every flag so the combatant floats in fresh at the start of a fight.
    pub fn prepare_for_fight(&mut self) {
        self.state = CombatantState::default();
    }

    /// The move bound to `slot`.
    pub fn move_at(&self, slot: MoveSlot) -> &Attack {
        &self.moves[slot.index()]
    }

    /// Offers the move bound to `slot` to `sink` on behalf of `side`.
    pub fn attack(&self, sink: &mut dyn AttackSink, side: Side, slot: MoveSlot) {
        sink.send_attack(side, self.move_at(slot).clone());
    }

    /// Picks one of the four moves uniformly. Used for the opponent's autonomous turn.
    pub fn choose_attack<R: Rng + ?Sized>(&self, rng: &mut R) -> Attack {
        let index = rng.random_range(0..MOVE_SET_SIZE);
        self.moves[index].clone()
    }
}
