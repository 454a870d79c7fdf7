//! Character controller
//!
//! Четыре обработчика каждый кадр, в фиксированном порядке:
//! 1. movement — поворот, движение вперёд/назад, гравитация
//! 2. combat — primary/secondary → Attack trigger
//! 3. idle — таймер бездействия и Stand latch
//! 4. animator params — Speed / idleTime / VerticalMovement / isWalking
//!
//! Ядро (`step`) — чистая функция без ECS. `run_frame` применяет результат
//! к mover/animator. ECS системы и `CharacterController` используют `run_frame`.

use bevy::prelude::*;

pub mod combat;
pub mod config;
pub mod driver;
pub mod idle;
pub mod movement;
pub mod spawn;
pub mod state;
pub mod step;
pub mod systems;


pub use config::{
    CapsuleDimensions, ControllerConfig, COMBAT_STATE, GRAVITY, INPUT_DEADZONE,
    STAND_FINISHED_NORMALIZED_TIME, STAND_STATE,
};
pub use driver::{run_frame, CharacterController, CharacterMover};
pub use spawn::{spawn_character, CharacterSpawn};
pub use state::{CharacterMotionState, IdlePhase};
pub use step::{step, AnimatorParams, FrameContext, FrameOutput};
pub use systems::{
    character_controller_tick, verify_character_dependencies, CharacterDependencies,
};

/// Порядок внутри кадра (Update)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    /// Grounded от Rapier, проверка зависимостей
    Sense,
    /// Per-frame tick контроллера
    Tick,
    /// Продвижение аниматоров
    Animate,
    /// Headless интеграция translation → Transform
    Integrate,
}

/// Controller Plugin
///
/// Порядок выполнения (Update, chain):
/// 1. sync_grounded_from_rapier, verify_character_dependencies
/// 2. character_controller_tick
/// 3. advance_animators (AnimationPlugin)
/// 4. integrate_headless_motion
pub struct CharacterControllerPlugin;

impl Plugin for CharacterControllerPlugin {
    fn build(&self, app: &mut App) {
        use crate::physics::{integrate_headless_motion, sync_grounded_from_rapier};

        app.add_event::<crate::input::PlayerInputEvent>()
            .configure_sets(
                Update,
                (
                    ControllerSet::Sense,
                    ControllerSet::Tick,
                    ControllerSet::Animate,
                    ControllerSet::Integrate,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    (sync_grounded_from_rapier, verify_character_dependencies)
                        .chain()
                        .in_set(ControllerSet::Sense),
                    character_controller_tick.in_set(ControllerSet::Tick),
                    integrate_headless_motion.in_set(ControllerSet::Integrate),
                ),
            );
    }
}
