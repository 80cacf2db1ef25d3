//! Turn arbitration between the two lineups of a battle.

use crate::battle::render::BattleRenderer;
use crate::battle::state::{BattleEvent, EventBus, GameState};
use crate::battle::timers::{
    TickTimer, TimerRegistry, DELAY_CHOOSE, DELAY_OUTCOME, DELAY_SWITCH_TURN,
};
use crate::combatant::Combatant;
use crate::config::BattleConfig;
use crate::errors::ActionError;
use crate::lineup::Lineup;
use crate::moves::{Attack, MoveSlot};
use rand::rngs::StdRng;
use rand::SeedableRng;
use schema::Side;
use std::collections::HashSet;

/// Anything combatants can hand an attack to.
pub trait AttackSink {
    /// Offers `attack` on behalf of `side`. Submissions the receiver is not
    /// ready for are dropped without an error.
    fn send_attack(&mut self, side: Side, attack: Attack);
}

/// Owns both lineups of one battle and decides, tick by tick, who acts.
#[derive(Debug)]
pub struct BattleMediator {
    trainer: Lineup,
    opponent: Lineup,
    timers: TimerRegistry,
    turn: Side,
    allow_attacks: bool,
    game_state: GameState,
    message: String,
    events: EventBus,
    announced: HashSet<(Side, u32)>,
    rng: StdRng,
    ticks: u64,
}

impl BattleMediator {
    pub fn new(mut trainer: Lineup, mut opponent: Lineup, config: &BattleConfig) -> Self {
        trainer.prepare_for_fight();
        opponent.prepare_for_fight();

        let mut timers = TimerRegistry::new();
        timers.add(TickTimer::new(DELAY_CHOOSE, config.delay_choose));
        timers.add(TickTimer::new(DELAY_OUTCOME, config.delay_outcome));
        timers.add(TickTimer::new(DELAY_SWITCH_TURN, config.delay_switch_turn));

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            trainer,
            opponent,
            timers,
            turn: Side::Trainer,
            allow_attacks: false,
            game_state: GameState::Ongoing,
            message: String::new(),
            events: EventBus::new(),
            announced: HashSet::new(),
            rng,
            ticks: 0,
        }
    }

    // === Read-only views for the renderer and level controller ===

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn allow_attacks(&self) -> bool {
        self.allow_attacks
    }

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.game_state, GameState::Ended { .. })
    }

    /// The final winner, once the outcome banner has run its course.
    pub fn winner(&self) -> Option<Side> {
        match self.game_state {
            GameState::Ended { winner } => Some(winner),
            _ => None,
        }
    }

    /// Narrator text as of the last tick or accepted attack.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn lineup(&self, side: Side) -> &Lineup {
        match side {
            Side::Trainer => &self.trainer,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn current(&self, side: Side) -> Option<&Combatant> {
        self.lineup(side).current()
    }

    pub fn timers(&self) -> &TimerRegistry {
        &self.timers
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Drains the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<BattleEvent> {
        self.events.take()
    }

    /// Submits the trainer move bound to the 1-based `key`.
    pub fn press_move_key(&mut self, key: usize) -> Result<(), ActionError> {
        let slot = MoveSlot::from_key(key)?;
        self.trainer_attack(slot);
        Ok(())
    }

    pub fn trainer_attack(&mut self, slot: MoveSlot) {
        // The lineup owns the combatant, so submit from a snapshot of it.
        if let Some(current) = self.trainer.current().cloned() {
            current.attack(self, Side::Trainer, slot);
        }
    }

    /// Runs one resolution tick.
    ///
    /// Returns `None` while the battle is still going (including while the
    /// outcome banner is up), then the winning side on every call from the
    /// tick the banner finishes.
    pub fn current_fight<R: BattleRenderer + ?Sized>(
        &mut self,
        renderer: &mut R,
    ) -> Option<Side> {
        if let GameState::Ended { winner } = self.game_state {
            renderer.show_outcome(winner);
            return Some(winner);
        }
        self.ticks += 1;

        match self.check_winner() {
            Some(winner) => self.handle_battle_end(winner, renderer),
            None => {
                self.handle_battle(renderer);
                None
            }
        }
    }

    // Trainer defeat is checked first, so an empty-vs-empty board goes to the opponent.
    fn check_winner(&self) -> Option<Side> {
        if self.trainer.is_empty() {
            Some(Side::Opponent)
        } else if self.opponent.is_empty() {
            Some(Side::Trainer)
        } else {
            None
        }
    }

    fn handle_battle_end<R: BattleRenderer + ?Sized>(
        &mut self,
        winner: Side,
        renderer: &mut R,
    ) -> Option<Side> {
        if self.game_state == GameState::Ongoing {
            tracing::debug!(
                %winner,
                loser = %winner.rival(),
                tick = self.ticks,
                "lineup exhausted, showing outcome"
            );
            self.game_state = GameState::ShowingOutcome { winner };
        }
        renderer.show_outcome(winner);

        if self.timers.wait_finished(DELAY_OUTCOME) {
            self.game_state = GameState::Ended { winner };
            self.events.push(BattleEvent::BattleEnded { winner });
            tracing::info!(%winner, tick = self.ticks, "battle ended");
            Some(winner)
        } else {
            None
        }
    }

    fn handle_battle<R: BattleRenderer + ?Sized>(&mut self, renderer: &mut R) {
        let (Some(trainer), Some(opponent)) = (self.trainer.current(), self.opponent.current())
        else {
            return;
        };
        self.allow_attacks = trainer.state.ready
            && opponent.state.ready
            && !trainer.state.attacking
            && !opponent.state.attacking;

        self.handle_turn(Side::Trainer, renderer);

        if self.timers.wait_finished(DELAY_CHOOSE) {
            self.handle_turn(Side::Opponent, renderer);

            if self.check_winner().is_none()
                && self.timers.wait_finished(DELAY_SWITCH_TURN)
                && self.turn == Side::Opponent
            {
                self.opponent_attack();
            }
        }

        renderer.narrate(&self.message);
    }

    fn opponent_attack(&mut self) {
        let attack = match self.opponent.current() {
            Some(current) => current.choose_attack(&mut self.rng),
            None => return,
        };
        self.send_attack(Side::Opponent, attack);
    }

    /// Per-tick update of `side`'s front combatant.
    fn handle_turn<R: BattleRenderer + ?Sized>(&mut self, side: Side, renderer: &mut R) {
        let (lineup, rival) = match side {
            Side::Trainer => (&mut self.trainer, &mut self.opponent),
            Side::Opponent => (&mut self.opponent, &mut self.trainer),
        };
        let Some(current) = lineup.current_mut() else {
            return;
        };

        if current.is_alive() {
            renderer.show(side, current, false);

            let rival_attacking = rival.current().is_some_and(|r| r.state.attacking);
            if !current.state.ready {
                self.message = format!("{} chose {}", side.narrator_label(), current.name);
                if self.announced.insert((side, current.serial())) {
                    self.events.push(BattleEvent::CombatantSentOut {
                        side,
                        name: current.name.clone(),
                    });
                }
            } else if !rival_attacking && !current.state.attacking {
                self.message.clear();
            }

            // Health drains one point per tick; the tick after it bottoms out
            // hands the turn back to the side that took the hit.
            let drain = current.state.health_drain_remaining;
            match drain {
                Some(0) => {
                    if let Some(attacker) = rival.current_mut() {
                        attacker.state.attacking = false;
                    }
                    self.turn = side;
                    current.state.health_drain_remaining = None;
                    if side == Side::Opponent {
                        self.timers.reset(DELAY_SWITCH_TURN);
                    }
                    tracing::debug!(
                        %side,
                        name = %current.name,
                        health = current.health,
                        "drain finished, turn handed back"
                    );
                    self.events.push(BattleEvent::DrainFinished {
                        side,
                        name: current.name.clone(),
                        remaining_health: current.health,
                    });
                }
                Some(remaining) => {
                    current.health -= 1;
                    current.state.health_drain_remaining = Some(remaining - 1);
                }
                None => {}
            }
        } else {
            self.message = format!("{} has fainted", current.name);
            renderer.show(side, current, true);

            if current.state.fainted {
                match lineup.remove_front() {
                    Ok(fainted) => {
                        tracing::debug!(
                            %side,
                            name = %fainted.name,
                            left = lineup.len(),
                            "combatant fainted and left the lineup"
                        );
                        self.events.push(BattleEvent::CombatantFainted {
                            side,
                            name: fainted.name,
                        });
                    }
                    Err(err) => {
                        tracing::error!(%err, "fainted combatant missing from its lineup");
                        return;
                    }
                }
                self.turn = side;
                if let Some(attacker) = rival.current_mut() {
                    attacker.state.attacking = false;
                }
            }
        }
    }
}

impl AttackSink for BattleMediator {
    fn send_attack(&mut self, side: Side, attack: Attack) {
        let permitted = match side {
            Side::Trainer => self.turn == Side::Trainer && self.allow_attacks,
            Side::Opponent => self.allow_attacks,
        };
        if !permitted {
            tracing::trace!(%side, attack = %attack.name, turn = %self.turn, "attack gated");
            return;
        }

        let (attackers, receivers) = match side {
            Side::Trainer => (&mut self.trainer, &mut self.opponent),
            Side::Opponent => (&mut self.opponent, &mut self.trainer),
        };
        let (Some(attacker), Some(receiver)) = (attackers.current_mut(), receivers.current_mut())
        else {
            tracing::trace!(%side, attack = %attack.name, "attack without a target");
            return;
        };

        attacker.state.attacking = true;
        receiver.state.health_drain_remaining = Some(attack.power);
        // Nothing else may land until the next tick re-opens the gate.
        self.allow_attacks = false;

        self.message = format!("{} used {}", attacker.name, attack.name);
        tracing::debug!(
            %side,
            attacker = %attacker.name,
            target = %receiver.name,
            attack = %attack.name,
            power = attack.power,
            "attack accepted"
        );
        self.events.push(BattleEvent::AttackUsed {
            side,
            attacker: attacker.name.clone(),
            attack: attack.name,
            power: attack.power,
        });
    }
}
