//! Idle timer: Active → IdleAccumulating → StandTriggered → Active
//!
//! Тикает только когда персонаж стоит (current_speed < deadzone)
//! и аниматор не в боевом состоянии. Внутри того же условия, в том же кадре:
//! 1. timer += delta
//! 2. timer ≥ порог и latch не стоит → latch (таймер НЕ сбрасывается)
//! 3. latch стоит и аниматор в Stand с normalized ≥ 0.95 → сброс

use super::config::{
    ControllerConfig, COMBAT_STATE, INPUT_DEADZONE, STAND_FINISHED_NORMALIZED_TIME, STAND_STATE,
};
use super::state::CharacterMotionState;
use crate::animation::AnimationStateQuery;

/// Переходы idle latch за кадр
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdleOutcome {
    /// Latch только что выставлен
    pub stand_triggered: bool,
    /// Stand доигран, таймер и latch сброшены
    pub stand_finished: bool,
}

pub fn handle_idle_timer<A>(
    state: &mut CharacterMotionState,
    config: &ControllerConfig,
    delta: f32,
    animation: &A,
) -> IdleOutcome
where
    A: AnimationStateQuery + ?Sized,
{
    let mut outcome = IdleOutcome::default();

    if state.current_speed >= INPUT_DEADZONE || animation.is_in_state(COMBAT_STATE) {
        return outcome;
    }

    state.idle_timer += delta;

    if state.idle_timer >= config.idle_time_before_stand && !state.has_triggered_stand {
        state.has_triggered_stand = true;
        outcome.stand_triggered = true;
    }

    if state.has_triggered_stand && is_stand_finished(animation) {
        state.reset_idle();
        outcome.stand_finished = true;
    }

    outcome
}

/// Аниматор в Stand и почти доиграл
pub fn is_stand_finished<A>(animation: &A) -> bool
where
    A: AnimationStateQuery + ?Sized,
{
    animation.is_in_state(STAND_STATE)
        && animation.normalized_time() >= STAND_FINISHED_NORMALIZED_TIME
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeAnimation {
        state: &'static str,
        normalized: f32,
    }

    impl AnimationStateQuery for FakeAnimation {
        fn current_state_name(&self) -> &str {
            self.state
        }

        fn normalized_time(&self) -> f32 {
            self.normalized
        }
    }

    const IDLE: FakeAnimation = FakeAnimation { state: "Idle", normalized: 0.3 };

    #[test]
    fn test_accumulates_while_still() {
        let mut state = CharacterMotionState::default();
        let config = ControllerConfig::default();

        handle_idle_timer(&mut state, &config, 0.5, &IDLE);
        handle_idle_timer(&mut state, &config, 0.25, &IDLE);

        assert_eq!(state.idle_timer, 0.75);
        assert!(!state.has_triggered_stand);
    }

    #[test]
    fn test_moving_does_not_accumulate() {
        let mut state = CharacterMotionState {
            current_speed: 0.5,
            ..Default::default()
        };
        handle_idle_timer(&mut state, &ControllerConfig::default(), 1.0, &IDLE);
        assert_eq!(state.idle_timer, 0.0);
    }

    #[test]
    fn test_combat_state_pauses_timer() {
        let mut state = CharacterMotionState {
            idle_timer: 1.0,
            ..Default::default()
        };
        let combat = FakeAnimation { state: COMBAT_STATE, normalized: 0.5 };

        handle_idle_timer(&mut state, &ControllerConfig::default(), 1.0, &combat);
        assert_eq!(state.idle_timer, 1.0);
    }

    #[test]
    fn test_latch_sets_once_without_resetting_timer() {
        let mut state = CharacterMotionState {
            idle_timer: 4.5,
            ..Default::default()
        };
        let config = ControllerConfig::default();

        let first = handle_idle_timer(&mut state, &config, 0.5, &IDLE);
        assert!(first.stand_triggered);
        assert!(state.has_triggered_stand);
        assert_eq!(state.idle_timer, 5.0);

        let second = handle_idle_timer(&mut state, &config, 0.5, &IDLE);
        assert!(!second.stand_triggered);
        assert!(state.has_triggered_stand);
        assert_eq!(state.idle_timer, 5.5);
    }

    #[test]
    fn test_stand_finish_threshold() {
        let config = ControllerConfig::default();
        let mut state = CharacterMotionState {
            idle_timer: 6.0,
            has_triggered_stand: true,
            ..Default::default()
        };

        let almost = FakeAnimation { state: STAND_STATE, normalized: 0.94 };
        let outcome = handle_idle_timer(&mut state, &config, 0.1, &almost);
        assert!(!outcome.stand_finished);
        assert!(state.has_triggered_stand);

        let done = FakeAnimation { state: STAND_STATE, normalized: 0.95 };
        let outcome = handle_idle_timer(&mut state, &config, 0.1, &done);
        assert!(outcome.stand_finished);
        assert_eq!(state.idle_timer, 0.0);
        assert!(!state.has_triggered_stand);
    }

    #[test]
    fn test_finished_stand_without_latch_is_ignored() {
        let mut state = CharacterMotionState {
            idle_timer: 1.0,
            ..Default::default()
        };
        let done = FakeAnimation { state: STAND_STATE, normalized: 1.0 };

        let outcome = handle_idle_timer(&mut state, &ControllerConfig::default(), 0.5, &done);
        assert!(!outcome.stand_finished);
        assert_eq!(state.idle_timer, 1.5);
    }
}
