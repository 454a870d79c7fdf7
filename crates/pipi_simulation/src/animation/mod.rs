//! Animation boundary
//!
//! Контроллер не знает, как устроен аниматор хоста. Ему нужны две вещи:
//! - `AnimationStateQuery`: имя текущего состояния + normalized time (layer 0)
//! - `AnimationParameterSink`: запись named float/bool параметров и one-shot trigger'ов
//!
//! `Animator` — встроенная реализация (маленькая state machine по именам),
//! используется в headless симуляции, тестах и client.

use bevy::prelude::*;

pub mod animator;
pub mod systems;

pub use animator::{Animator, AnimatorStateDef, IDLE_STATE, WALK_STATE};
pub use systems::advance_animators;

/// Float: |vertical| (blend скорости)
pub const PARAM_SPEED: &str = "Speed";
/// Float: накопленное время бездействия
pub const PARAM_IDLE_TIME: &str = "idleTime";
/// Float: signed vertical input (назад < 0)
pub const PARAM_VERTICAL_MOVEMENT: &str = "VerticalMovement";
/// Bool: current_speed > speed_threshold
pub const PARAM_IS_WALKING: &str = "isWalking";
/// Trigger: атака
pub const TRIGGER_ATTACK: &str = "Attack";

/// Read-only запросы к текущему состоянию аниматора
pub trait AnimationStateQuery {
    fn current_state_name(&self) -> &str;

    /// Прогресс текущего состояния (1.0 = один полный цикл клипа)
    fn normalized_time(&self) -> f32;

    fn is_in_state(&self, name: &str) -> bool {
        self.current_state_name() == name
    }
}

/// Запись параметров в аниматор
pub trait AnimationParameterSink {
    fn set_float(&mut self, name: &str, value: f32);
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_trigger(&mut self, name: &str);
}

/// Plugin: продвижение встроенных `Animator` после controller tick
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            advance_animators.in_set(crate::controller::ControllerSet::Animate),
        );
    }
}
