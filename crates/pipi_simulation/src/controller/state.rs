//! Runtime состояние контроллера (мутируется только per-frame tick'ом)

use bevy::prelude::*;

/// Состояние движения персонажа
///
/// Инварианты:
/// - `current_speed ≥ 0`, `idle_timer ≥ 0`
/// - `has_triggered_stand == true` только пока Stand анимация в процессе
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CharacterMotionState {
    /// |vertical| последнего кадра (0 если input в deadzone)
    pub current_speed: f32,
    /// Секунды бездействия вне боя
    pub idle_timer: f32,
    /// One-shot latch: Stand уже запущен, не запускать повторно
    pub has_triggered_stand: bool,
    /// Signed vertical input последнего кадра
    pub vertical_movement: f32,
}

/// Фаза idle state machine (выводится из полей состояния)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdlePhase {
    /// Таймер сброшен (движение/атака)
    Active,
    /// Таймер копится, Stand ещё не запущен
    IdleAccumulating,
    /// Stand запущен, ждём завершения анимации
    StandTriggered,
}

impl CharacterMotionState {
    /// Сброс в Active: любое движение или атака
    pub fn reset_idle(&mut self) {
        self.idle_timer = 0.0;
        self.has_triggered_stand = false;
    }

    pub fn idle_phase(&self) -> IdlePhase {
        if self.has_triggered_stand {
            IdlePhase::StandTriggered
        } else if self.idle_timer > 0.0 {
            IdlePhase::IdleAccumulating
        } else {
            IdlePhase::Active
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_phase_derivation() {
        let mut state = CharacterMotionState::default();
        assert_eq!(state.idle_phase(), IdlePhase::Active);

        state.idle_timer = 1.5;
        assert_eq!(state.idle_phase(), IdlePhase::IdleAccumulating);

        state.has_triggered_stand = true;
        assert_eq!(state.idle_phase(), IdlePhase::StandTriggered);

        state.reset_idle();
        assert_eq!(state.idle_phase(), IdlePhase::Active);
        assert_eq!(state.idle_timer, 0.0);
    }
}
