use schema::Side;
use serde::{Deserialize, Serialize};

/// Where the battle stands after a resolution tick.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Both sides still have combatants.
    Ongoing,
    /// A side is out of combatants and the outcome banner is counting down.
    ShowingOutcome { winner: Side },
    /// The banner has finished; the battle is over for good.
    Ended { winner: Side },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    /// A combatant started floating in.
    CombatantSentOut { side: Side, name: String },
    /// An attack passed the gate and queued a drain on the receiver.
    AttackUsed {
        side: Side,
        attacker: String,
        attack: String,
        power: u32,
    },
    /// A receiver finished draining and took back the turn.
    DrainFinished {
        side: Side,
        name: String,
        remaining_health: i32,
    },
    /// A fainted combatant left its lineup.
    CombatantFainted { side: Side, name: String },
    BattleEnded { winner: Side },
}

impl BattleEvent {
    /// Formats the event into narrator text.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::CombatantSentOut { side, name } => {
                Some(format!("{} chose {}", side.narrator_label(), name))
            }
            BattleEvent::AttackUsed { attacker, attack, .. } => {
                Some(format!("{} used {}", attacker, attack))
            }
            BattleEvent::DrainFinished { .. } => None,
            BattleEvent::CombatantFainted { name, .. } => Some(format!("{} has fainted", name)),
            BattleEvent::BattleEnded { winner } => Some(match winner {
                Side::Trainer => "You won the battle!".to_string(),
                Side::Opponent => "You lost the battle!".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    /// Hands over everything recorded so far and empties the bus.
    pub fn take(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            match event.format() {
                Some(text) => writeln!(f, "  {}", text)?,
                None => writeln!(f, "  {:?} (silent)", event)?,
            }
        }
        Ok(())
    }
}
