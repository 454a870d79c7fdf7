//! Controller ECS systems
//!
//! # Архитектура
//! - Читает: PlayerInputEvent (только для `With<Player>`), Grounded, Animator
//! - Пишет: Transform.rotation, KinematicCharacterController.translation,
//!   CharacterMotionState, параметры Animator
//!
//! Rapier (или headless интеграция) применяет translation позже в кадре.

use bevy::ecs::error::BevyError;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::config::ControllerConfig;
use super::driver::{run_frame, CharacterMover};
use super::state::CharacterMotionState;
use crate::animation::Animator;
use crate::components::Player;
use crate::error::ControllerError;
use crate::input::{InputFrame, PlayerInputEvent};
use crate::logger::log_error;
use crate::physics::Grounded;

/// `CharacterMover` поверх ECS компонентов
///
/// Смещения накапливаются в `translation` (за кадр может быть два: input + gravity).
struct EcsMover<'a> {
    transform: &'a mut Transform,
    controller: &'a mut KinematicCharacterController,
    grounded: bool,
}

impl CharacterMover for EcsMover<'_> {
    fn facing(&self) -> Quat {
        self.transform.rotation
    }

    fn set_facing(&mut self, facing: Quat) {
        self.transform.rotation = facing;
    }

    fn move_by(&mut self, displacement: Vec3) {
        let pending = self.controller.translation.unwrap_or(Vec3::ZERO);
        self.controller.translation = Some(pending + displacement);
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }
}

/// System: per-frame tick всех персонажей
///
/// Input кадра сливается из всех PlayerInputEvent и достаётся только
/// player-controlled персонажам, остальные получают пустой input.
pub fn character_controller_tick(
    mut input_events: EventReader<PlayerInputEvent>,
    mut characters: Query<(
        &ControllerConfig,
        &mut CharacterMotionState,
        &mut Transform,
        &mut KinematicCharacterController,
        &mut Animator,
        &Grounded,
        Has<Player>,
    )>,
    time: Res<Time>,
) {
    let player_input = input_events
        .read()
        .fold(InputFrame::default(), |merged, event| merged.merge(event.frame));
    let delta = time.delta_secs();

    for (config, mut state, mut transform, mut controller, mut animator, grounded, is_player) in
        characters.iter_mut()
    {
        let input = if is_player { player_input } else { InputFrame::default() };

        let mut mover = EcsMover {
            transform: &mut *transform,
            controller: &mut *controller,
            grounded: grounded.0,
        };

        run_frame(config, &mut *state, &input, delta, &mut mover, &mut *animator);
    }
}

/// Какие зависимости tick'а есть у персонажа
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterDependencies {
    pub config: bool,
    pub kinematic_controller: bool,
    pub animator: bool,
    pub grounded: bool,
    pub collider: bool,
}

impl CharacterDependencies {
    /// Имена отсутствующих компонентов (в порядке запроса tick'а)
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (self.config, "ControllerConfig"),
            (self.kinematic_controller, "KinematicCharacterController"),
            (self.animator, "Animator"),
            (self.grounded, "Grounded"),
            (self.collider, "Collider"),
        ]
        .into_iter()
        .filter(|(present, _)| !present)
        .map(|(_, name)| name)
        .collect()
    }
}

/// System: fail fast — персонаж без компонентов, нужных tick'у
///
/// Без них `character_controller_tick` молча пропустил бы entity. Ничего не
/// добавляем сами: каждая пропажа логируется, первая уходит в Bevy error
/// handler (panic по умолчанию).
pub fn verify_character_dependencies(
    added: Query<
        (
            Entity,
            Has<ControllerConfig>,
            Has<KinematicCharacterController>,
            Has<Animator>,
            Has<Grounded>,
            Has<Collider>,
        ),
        Added<CharacterMotionState>,
    >,
) -> Result<(), BevyError> {
    let mut first_error = None;

    for (entity, config, kinematic_controller, animator, grounded, collider) in added.iter() {
        let dependencies = CharacterDependencies {
            config,
            kinematic_controller,
            animator,
            grounded,
            collider,
        };

        for component in dependencies.missing() {
            let error = ControllerError::MissingComponent { entity, component };
            log_error(&error.to_string());
            first_error.get_or_insert(error);
        }
    }

    match first_error {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}
