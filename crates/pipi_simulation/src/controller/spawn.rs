//! Spawn helper для персонажа
//!
//! Создаёт entity с полным набором компонентов:
//! - Transform (центр капсулы)
//! - ControllerConfig + CharacterMotionState + Animator
//! - Rapier: RigidBody::KinematicPositionBased + Collider (capsule) + KinematicCharacterController
//! - Grounded (+ HeadlessGround если без Rapier)
//!
//! Config и размеры капсулы проверяются ДО spawn'а.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::config::{CapsuleDimensions, ControllerConfig};
use super::state::CharacterMotionState;
use crate::animation::Animator;
use crate::components::Player;
use crate::error::ControllerError;
use crate::physics::{Grounded, HeadlessGround};

/// Параметры spawn'а персонажа
#[derive(Debug, Clone, Copy)]
pub struct CharacterSpawn {
    /// Точка на полу под персонажем
    pub feet_position: Vec3,
    pub facing: Quat,
    pub config: ControllerConfig,
    pub capsule: CapsuleDimensions,
    /// Управляется игроком (получает PlayerInputEvent)
    pub player: bool,
    /// Some(floor_y) → headless режим без Rapier
    pub headless_floor: Option<f32>,
}

impl Default for CharacterSpawn {
    fn default() -> Self {
        Self {
            feet_position: Vec3::ZERO,
            facing: Quat::IDENTITY,
            config: ControllerConfig::default(),
            capsule: CapsuleDimensions::default(),
            player: true,
            headless_floor: None,
        }
    }
}

pub fn spawn_character(
    commands: &mut Commands,
    spawn: CharacterSpawn,
) -> Result<Entity, ControllerError> {
    spawn.config.validate()?;
    spawn.capsule.validate()?;

    let center = spawn.feet_position + Vec3::Y * spawn.capsule.half_height();

    let mut entity = commands.spawn((
        Transform::from_translation(center).with_rotation(spawn.facing),
        spawn.config,
        CharacterMotionState::default(),
        Animator::new(spawn.config.idle_time_before_stand),
        spawn.capsule,
        Grounded::default(),
        // Rapier physics
        RigidBody::KinematicPositionBased,
        Collider::capsule_y(spawn.capsule.half_segment(), spawn.capsule.radius),
        KinematicCharacterController {
            offset: CharacterLength::Absolute(0.01),
            ..default()
        },
    ));

    if spawn.player {
        entity.insert(Player);
    }
    if let Some(floor_y) = spawn.headless_floor {
        entity.insert(HeadlessGround { floor_y });
    }

    Ok(entity.id())
}
