//! A side's ordered roster of combatants. The front entry is always the one fighting.

use crate::combatant::Combatant;
use crate::config::BattleConfig;
use crate::errors::{LineupError, LineupResult};
use rand::Rng;
use schema::{CombatantRecord, Side};

#[derive(Debug, Clone)]
pub struct Lineup {
    side: Side,
    combatants: Vec<Combatant>,
    next_serial: u32,
}

impl Lineup {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            combatants: Vec::new(),
            next_serial: 0,
        }
    }

    pub fn with_combatants(side: Side, combatants: impl IntoIterator<Item = Combatant>) -> Self {
        let mut lineup = Lineup::new(side);
        for combatant in combatants {
            lineup.add(combatant);
        }
        lineup
    }

    /// Builds a lineup for `side` from external records.
    ///
    /// The trainer recruits `trainer_roster_size` records; the opponent recruits
    /// between one and `max_opponent_count`, drawn with `rng`.
    pub fn recruit<R: Rng + ?Sized>(
        side: Side,
        records: &[CombatantRecord],
        config: &BattleConfig,
        rng: &mut R,
    ) -> LineupResult<Self> {
        let wanted = match side {
            Side::Trainer => config.trainer_roster_size,
            Side::Opponent => opponent_roster_size(config, rng),
        };
        if records.len() < wanted {
            return Err(LineupError::NotEnoughRecords {
                side,
                wanted,
                available: records.len(),
            });
        }

        let power = config.power_range(side);
        let mut lineup = Lineup::new(side);
        for record in &records[..wanted] {
            let combatant = Combatant::from_record(record, power, config.starting_health, rng)?;
            lineup.add(combatant);
        }
        tracing::debug!(%side, size = lineup.len(), "lineup recruited");
        Ok(lineup)
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    /// The combatant currently fighting, if any are left.
    pub fn current(&self) -> Option<&Combatant> {
        self.combatants.first()
    }

    pub fn current_mut(&mut self) -> Option<&mut Combatant> {
        self.combatants.first_mut()
    }

    /// Appends to the back of the lineup.
    pub fn add(&mut self, mut combatant: Combatant) {
        combatant.serial = self.next_serial;
        self.next_serial += 1;
        self.combatants.push(combatant);
    }

    /// Pops the front combatant.
    pub fn remove_front(&mut self) -> LineupResult<Combatant> {
        if self.combatants.is_empty() {
            return Err(LineupError::Empty(self.side));
        }
        Ok(self.combatants.remove(0))
    }

    pub fn prepare_for_fight(&mut self) {
        for combatant in &mut self.combatants {
            combatant.prepare_for_fight();
        }
    }

    /// A fresh cursor from the front of the lineup.
    pub fn iter(&self) -> LineupCursor<'_> {
        LineupCursor {
            combatants: &self.combatants,
            position: 0,
        }
    }
}

impl<'a> IntoIterator for &'a Lineup {
    type Item = &'a Combatant;
    type IntoIter = LineupCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward-only, read-only cursor over a lineup.
///
/// A fainted entry is still yielded once so the caller can notice it, but the
/// cursor then steps an extra slot past it.
#[derive(Debug, Clone)]
pub struct LineupCursor<'a> {
    combatants: &'a [Combatant],
    position: usize,
}

impl<'a> LineupCursor<'a> {
    pub fn has_next(&self) -> bool {
        self.position < self.combatants.len()
    }
}

impl<'a> Iterator for LineupCursor<'a> {
    type Item = &'a Combatant;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        let value = &self.combatants[self.position];
        if value.state.fainted {
            self.position += 1;
        }
        self.position += 1;
        Some(value)
    }
}

/// How many combatants the opponent brings to an encounter.
pub fn opponent_roster_size<R: Rng + ?Sized>(config: &BattleConfig, rng: &mut R) -> usize {
    rng.random_range(1..=config.max_opponent_count.max(1))
}
