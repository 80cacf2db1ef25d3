//! Tick-counted delays. Each `wait` is one frame; nothing here looks at a clock.

use crate::errors::TimerError;

/// Pause before the opponent side resolves.
pub const DELAY_CHOOSE: &str = "delay_choose";
/// How long the outcome banner stays up.
pub const DELAY_OUTCOME: &str = "delay_outcome";
/// Pause before each autonomous opponent attack.
pub const DELAY_SWITCH_TURN: &str = "delay_switch_turn";

/// A countdown advanced once per tick. Two timers are equal when they share a role.
#[derive(Debug, Clone)]
pub struct TickTimer {
    role: String,
    base_duration: u32,
    remaining: u32,
}

impl TickTimer {
    pub fn new(role: impl Into<String>, duration: u32) -> Self {
        Self {
            role: role.into(),
            base_duration: duration,
            remaining: duration,
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn base_duration(&self) -> u32 {
        self.base_duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Counts down one tick, stopping at zero.
    pub fn wait(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.remaining = self.base_duration;
    }

    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }
}

impl PartialEq for TickTimer {
    fn eq(&self, other: &Self) -> bool {
        self.role == other.role
    }
}

impl Eq for TickTimer {}

/// Timers of one battle, unique by role.
#[derive(Debug, Clone, Default)]
pub struct TimerRegistry {
    timers: Vec<TickTimer>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `timer` unless one with the same role is already registered.
    pub fn add(&mut self, timer: TickTimer) {
        if !self.timers.contains(&timer) {
            self.timers.push(timer);
        }
    }

    pub fn get(&self, role: &str) -> Option<&TickTimer> {
        self.timers.iter().find(|t| t.role == role)
    }

    pub fn get_mut(&mut self, role: &str) -> Option<&mut TickTimer> {
        self.timers.iter_mut().find(|t| t.role == role)
    }

    pub fn remove(&mut self, role: &str) -> Result<TickTimer, TimerError> {
        let position = self
            .timers
            .iter()
            .position(|t| t.role == role)
            .ok_or_else(|| TimerError::NotFound(role.to_string()))?;
        Ok(self.timers.remove(position))
    }

    /// Advances `role` one tick and reports whether it has run out.
    /// An unregistered role is never finished.
    pub fn wait_finished(&mut self, role: &str) -> bool {
        match self.get_mut(role) {
            Some(timer) => {
                timer.wait();
                timer.is_finished()
            }
            None => false,
        }
    }

    pub fn reset(&mut self, role: &str) {
        if let Some(timer) = self.get_mut(role) {
            timer.reset();
        }
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wait_counts_down_and_stops_at_zero() {
        let mut timer = TickTimer::new("t", 3);
        assert!(!timer.is_finished());

        timer.wait();
        timer.wait();
        assert_eq!(timer.remaining(), 1);
        assert!(!timer.is_finished());

        timer.wait();
        assert!(timer.is_finished());
        timer.wait();
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn reset_restores_the_base_duration() {
        let mut timer = TickTimer::new("t", 5);
        for _ in 0..5 {
            timer.wait();
        }
        timer.reset();
        assert_eq!(timer.remaining(), 5);
        assert_eq!(timer.base_duration(), 5);
    }

    #[test]
    fn zero_duration_timer_is_born_finished() {
        assert!(TickTimer::new("now", 0).is_finished());
    }

    #[test]
    fn equality_ignores_remaining_ticks() {
        let mut a = TickTimer::new("x", 10);
        a.wait();
        assert_eq!(a, TickTimer::new("x", 99));
        assert_ne!(a, TickTimer::new("y", 10));
    }

    #[test]
    fn duplicate_roles_keep_the_first_timer() {
        let mut registry = TimerRegistry::new();
        registry.add(TickTimer::new("x", 1));
        registry.add(TickTimer::new("x", 50));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("x").unwrap().base_duration(), 1);
    }

    #[test]
    fn lookup_of_unknown_role_is_none() {
        let mut registry = TimerRegistry::new();
        assert!(registry.get("missing").is_none());
        assert!(!registry.wait_finished("missing"));
    }

    #[test]
    fn remove_returns_the_timer_then_errors() {
        let mut registry = TimerRegistry::new();
        registry.add(TickTimer::new(DELAY_OUTCOME, 120));

        let removed = registry.remove(DELAY_OUTCOME).unwrap();
        assert_eq!(removed.role(), DELAY_OUTCOME);
        assert!(registry.is_empty());
        assert_eq!(
            registry.remove(DELAY_OUTCOME).unwrap_err(),
            TimerError::NotFound(DELAY_OUTCOME.to_string())
        );
    }

    #[test]
    fn wait_finished_advances_the_named_timer() {
        let mut registry = TimerRegistry::new();
        registry.add(TickTimer::new(DELAY_CHOOSE, 2));
        assert!(!registry.wait_finished(DELAY_CHOOSE));
        assert!(registry.wait_finished(DELAY_CHOOSE));

        registry.reset(DELAY_CHOOSE);
        assert_eq!(registry.get(DELAY_CHOOSE).unwrap().remaining(), 2);
    }
}
