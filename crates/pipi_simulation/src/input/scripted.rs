//! Scripted input для headless прогонов
//!
//! Вместо клавиатуры — seeded random "игрок": каждые N тиков новые оси,
//! иногда пауза (чтобы idle timer и Stand тоже отрабатывали), редкие атаки.
//! Всё через `DeterministicRng` → одинаковый seed = одинаковый input.

use bevy::prelude::*;
use rand::Rng;

use super::events::{InputFrame, PlayerInputEvent};
use crate::DeterministicRng;

/// Параметры scripted input
#[derive(Resource, Debug, Clone)]
pub struct ScriptedInput {
    /// Через сколько тиков выбирать новые оси
    pub change_interval: u32,
    /// Вероятность паузы (оси = 0) при смене
    pub idle_chance: f64,
    /// Вероятность атаки за тик
    pub attack_chance: f64,
    tick: u32,
    current: InputFrame,
}

impl Default for ScriptedInput {
    fn default() -> Self {
        Self {
            change_interval: 45,
            idle_chance: 0.3,
            attack_chance: 0.01,
            tick: 0,
            current: InputFrame::default(),
        }
    }
}

impl ScriptedInput {
    /// Следующий кадр input'а
    pub fn next_frame(&mut self, rng: &mut impl Rng) -> InputFrame {
        if self.tick % self.change_interval.max(1) == 0 {
            self.current = if rng.gen_bool(probability(self.idle_chance)) {
                InputFrame::default()
            } else {
                InputFrame {
                    horizontal: rng.gen_range(-1.0..=1.0),
                    vertical: rng.gen_range(-1.0..=1.0),
                    run: rng.gen_bool(0.5),
                    ..default()
                }
            };
        }
        self.tick = self.tick.wrapping_add(1);

        let primary_pressed = rng.gen_bool(probability(self.attack_chance));
        InputFrame {
            primary_pressed,
            secondary_pressed: false,
            ..self.current
        }
    }
}

/// Вероятность для `gen_bool`: clamp в [0, 1], NaN → 0
fn probability(chance: f64) -> f64 {
    if chance.is_nan() {
        0.0
    } else {
        chance.clamp(0.0, 1.0)
    }
}

/// System: scripted input → PlayerInputEvent
pub fn drive_scripted_input(
    mut script: ResMut<ScriptedInput>,
    mut rng: ResMut<DeterministicRng>,
    mut input_events: EventWriter<PlayerInputEvent>,
) {
    let frame = script.next_frame(&mut rng.rng);
    input_events.write(PlayerInputEvent::new(frame));
}

/// Plugin: scripted input (headless binary, детерминизм-тесты)
///
/// Требует `DeterministicRng` resource (есть в `create_headless_app`).
pub struct ScriptedInputPlugin;

impl Plugin for ScriptedInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScriptedInput>()
            .add_event::<PlayerInputEvent>()
            .add_systems(
                Update,
                drive_scripted_input.before(crate::controller::ControllerSet::Tick),
            );
    }
}
