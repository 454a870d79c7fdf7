//! Pure per-frame update
//!
//! `step(state, config, input, frame, animation) -> (state', output)`
//!
//! Порядок фиксирован: movement (+ gravity) → combat → idle timer → animator params.
//! Никаких side effects: поворот, смещения и trigger'ы возвращаются в
//! `FrameOutput`, применяет их вызывающий (driver или ECS система).

use bevy::prelude::*;

use super::combat::handle_combat;
use super::config::ControllerConfig;
use super::idle::handle_idle_timer;
use super::movement::{gravity_displacement, handle_movement};
use super::state::CharacterMotionState;
use crate::animation::{
    AnimationParameterSink, AnimationStateQuery, PARAM_IDLE_TIME, PARAM_IS_WALKING, PARAM_SPEED,
    PARAM_VERTICAL_MOVEMENT, TRIGGER_ATTACK,
};
use crate::input::InputFrame;

/// Что хост сообщает контроллеру перед кадром
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Секунды с прошлого кадра (отрицательные/NaN → 0)
    pub delta: f32,
    /// Текущая ориентация персонажа
    pub facing: Quat,
    /// Стоит ли персонаж на поверхности (результат последнего collision resolve)
    pub grounded: bool,
}

/// Параметры, которые каждый кадр уходят в аниматор
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimatorParams {
    pub speed: f32,
    pub idle_time: f32,
    pub vertical_movement: f32,
    pub is_walking: bool,
}

impl AnimatorParams {
    pub fn from_state(state: &CharacterMotionState, config: &ControllerConfig) -> Self {
        Self {
            speed: state.current_speed,
            idle_time: state.idle_timer,
            vertical_movement: state.vertical_movement,
            is_walking: state.current_speed > config.speed_threshold,
        }
    }

    /// Безусловная запись всех четырёх параметров
    pub fn write_to<S>(&self, sink: &mut S)
    where
        S: AnimationParameterSink + ?Sized,
    {
        sink.set_float(PARAM_SPEED, self.speed);
        sink.set_float(PARAM_IDLE_TIME, self.idle_time);
        sink.set_float(PARAM_VERTICAL_MOVEMENT, self.vertical_movement);
        sink.set_bool(PARAM_IS_WALKING, self.is_walking);
    }
}

/// Результат кадра
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    /// Изменение heading (градусы, + = направо)
    pub heading_delta_degrees: f32,
    /// Ориентация после поворота
    pub facing: Quat,
    /// Смещение от input'а
    pub move_displacement: Vec3,
    /// Смещение от гравитации (ноль если grounded)
    pub gravity_displacement: Vec3,
    /// Выстрелить Attack trigger
    pub attack_triggered: bool,
    /// Stand latch выставлен в этом кадре
    pub stand_triggered: bool,
    /// Stand доигран в этом кадре
    pub stand_finished: bool,
    pub animator: AnimatorParams,
}

impl FrameOutput {
    /// Суммарное смещение для collision-aware mover'а
    pub fn total_displacement(&self) -> Vec3 {
        self.move_displacement + self.gravity_displacement
    }

    /// Отправить параметры и trigger в аниматор
    pub fn write_animator<S>(&self, sink: &mut S)
    where
        S: AnimationParameterSink + ?Sized,
    {
        if self.attack_triggered {
            sink.set_trigger(TRIGGER_ATTACK);
        }
        self.animator.write_to(sink);
    }
}

pub fn step<A>(
    state: CharacterMotionState,
    config: &ControllerConfig,
    input: &InputFrame,
    frame: &FrameContext,
    animation: &A,
) -> (CharacterMotionState, FrameOutput)
where
    A: AnimationStateQuery + ?Sized,
{
    let mut state = state;
    let delta = frame.delta.max(0.0);
    let input = input.clamped();

    // 1. Movement + gravity
    let movement = handle_movement(&mut state, config, &input, frame.facing, delta);
    let gravity = gravity_displacement(frame.grounded, delta);

    // 2. Combat
    let attack_triggered = handle_combat(&mut state, &input);

    // 3. Idle timer
    let idle = handle_idle_timer(&mut state, config, delta, animation);

    // 4. Animator params
    let animator = AnimatorParams::from_state(&state, config);

    let output = FrameOutput {
        heading_delta_degrees: movement.heading_delta_degrees,
        facing: movement.facing,
        move_displacement: movement.displacement,
        gravity_displacement: gravity,
        attack_triggered,
        stand_triggered: idle.stand_triggered,
        stand_finished: idle.stand_finished,
        animator,
    };

    (state, output)
}
