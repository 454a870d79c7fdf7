//! Frame driver: pure step + применение результата к хосту
//!
//! Хост даёт два capability:
//! - `CharacterMover` — collision-aware перемещение + grounded
//! - аниматор (`AnimationStateQuery` + `AnimationParameterSink`)
//!
//! `run_frame` — общая процедура кадра (используется и `CharacterController`,
//! и ECS системой `character_controller_tick`).

use bevy::prelude::*;

use super::config::ControllerConfig;
use super::state::CharacterMotionState;
use super::step::{step, FrameContext, FrameOutput};
use crate::animation::{AnimationParameterSink, AnimationStateQuery};
use crate::error::ControllerError;
use crate::input::InputFrame;
use crate::logger::{log, log_info};

/// Collision-aware mover хоста
pub trait CharacterMover {
    fn facing(&self) -> Quat;
    fn set_facing(&mut self, facing: Quat);
    /// Запросить смещение (коллизии разрешает хост)
    fn move_by(&mut self, displacement: Vec3);
    /// Результат последнего collision resolve
    fn is_grounded(&self) -> bool;
}

/// Один кадр: step → поворот → движение → гравитация → аниматор
pub fn run_frame<M, A>(
    config: &ControllerConfig,
    state: &mut CharacterMotionState,
    input: &InputFrame,
    delta: f32,
    mover: &mut M,
    animator: &mut A,
) -> FrameOutput
where
    M: CharacterMover + ?Sized,
    A: AnimationStateQuery + AnimationParameterSink + ?Sized,
{
    let frame = FrameContext {
        delta,
        facing: mover.facing(),
        grounded: mover.is_grounded(),
    };

    let (next, output) = step(*state, config, input, &frame, &*animator);
    *state = next;

    if output.heading_delta_degrees != 0.0 {
        mover.set_facing(output.facing);
    }
    if output.move_displacement != Vec3::ZERO {
        mover.move_by(output.move_displacement);
    }
    if output.gravity_displacement != Vec3::ZERO {
        mover.move_by(output.gravity_displacement);
    }

    output.write_animator(animator);

    if output.attack_triggered {
        log_info("Attack triggered");
    }
    if output.stand_triggered {
        log(&format!("Stand triggered after {:.2}s idle", state.idle_timer));
    }
    if output.stand_finished {
        log("Stand finished, idle timer reset");
    }

    output
}

/// Engine-agnostic контроллер: владеет config, state, mover, animator
///
/// Mover и animator обязательны по типу, config проверяется в `new`.
pub struct CharacterController<M, A> {
    config: ControllerConfig,
    state: CharacterMotionState,
    mover: M,
    animator: A,
}

impl<M, A> CharacterController<M, A>
where
    M: CharacterMover,
    A: AnimationStateQuery + AnimationParameterSink,
{
    pub fn new(config: ControllerConfig, mover: M, animator: A) -> Result<Self, ControllerError> {
        config.validate()?;

        Ok(Self {
            config,
            state: CharacterMotionState::default(),
            mover,
            animator,
        })
    }

    /// Per-frame entry point
    pub fn update(&mut self, input: &InputFrame, delta: f32) -> FrameOutput {
        run_frame(
            &self.config,
            &mut self.state,
            input,
            delta,
            &mut self.mover,
            &mut self.animator,
        )
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn state(&self) -> &CharacterMotionState {
        &self.state
    }

    pub fn mover(&self) -> &M {
        &self.mover
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }
}
