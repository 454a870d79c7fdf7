//! Movement handler: поворот, движение вперёд/назад, гравитация
//!
//! Heading считается по часовой стрелке если смотреть сверху
//! (horizontal > 0 = поворот направо). В Bevy (right-handed, +Y вверх)
//! это вращение на `-delta` вокруг +Y. Forward = -Z.

use bevy::prelude::*;

use super::config::{ControllerConfig, GRAVITY, INPUT_DEADZONE};
use super::state::CharacterMotionState;
use crate::input::InputFrame;

/// Результат movement handler'а за кадр
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementOutcome {
    /// Изменение heading (градусы, + = направо)
    pub heading_delta_degrees: f32,
    /// Ориентация после поворота
    pub facing: Quat,
    /// Смещение от input'а (до коллизий)
    pub displacement: Vec3,
}

/// Изменение heading за кадр (0 если |horizontal| в deadzone)
pub fn heading_delta(horizontal: f32, rotation_speed: f32, delta: f32) -> f32 {
    if horizontal.abs() > INPUT_DEADZONE {
        horizontal * rotation_speed * delta
    } else {
        0.0
    }
}

/// Повернуть facing на `heading_delta_degrees` (local yaw)
pub fn rotate_facing(facing: Quat, heading_delta_degrees: f32) -> Quat {
    if heading_delta_degrees == 0.0 {
        return facing;
    }
    facing * Quat::from_rotation_y(-heading_delta_degrees.to_radians())
}

/// Forward направление для ориентации (Bevy: -Z)
pub fn forward_of(facing: Quat) -> Vec3 {
    facing * Vec3::NEG_Z
}

/// Поворот + движение вдоль facing
///
/// Движение использует facing ПОСЛЕ поворота этого кадра.
/// Любой vertical за пределами deadzone сбрасывает idle timer и Stand latch.
pub fn handle_movement(
    state: &mut CharacterMotionState,
    config: &ControllerConfig,
    input: &InputFrame,
    facing: Quat,
    delta: f32,
) -> MovementOutcome {
    let heading_delta_degrees = heading_delta(input.horizontal, config.rotation_speed, delta);
    let facing = rotate_facing(facing, heading_delta_degrees);

    state.vertical_movement = input.vertical;

    let displacement = if input.vertical.abs() > INPUT_DEADZONE {
        let speed = config.speed_for(input.vertical, input.run);
        state.current_speed = input.vertical.abs();
        state.reset_idle();
        forward_of(facing) * input.vertical * speed * delta
    } else {
        state.current_speed = 0.0;
        Vec3::ZERO
    };

    MovementOutcome {
        heading_delta_degrees,
        facing,
        displacement,
    }
}

/// Гравитация: постоянное смещение вниз пока не grounded
///
/// Скорость падения не накапливается и не ограничена (terminal velocity нет).
pub fn gravity_displacement(grounded: bool, delta: f32) -> Vec3 {
    if grounded {
        Vec3::ZERO
    } else {
        Vec3::new(0.0, -GRAVITY * delta, 0.0)
    }
}
