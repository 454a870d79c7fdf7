//! Player input events
//!
//! Генерируются хостом (client keyboard/mouse, scripted input в headless)
//! и потребляются `character_controller_tick`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Снимок input'а за один кадр
///
/// # Fields
/// - `horizontal`: поворот, -1.0 (влево) → +1.0 (вправо)
/// - `vertical`: -1.0 (назад) → +1.0 (вперёд)
/// - `run`: модификатор бега (held)
/// - `primary_pressed` / `secondary_pressed`: кнопки действия (just_pressed, edge)
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect, Serialize, Deserialize)]
pub struct InputFrame {
    pub horizontal: f32,
    pub vertical: f32,
    pub run: bool,
    pub primary_pressed: bool,
    pub secondary_pressed: bool,
}

impl InputFrame {
    /// Оси в [-1, 1], NaN → 0
    pub fn clamped(self) -> Self {
        Self {
            horizontal: clamp_axis(self.horizontal),
            vertical: clamp_axis(self.vertical),
            ..self
        }
    }

    /// Атака: primary ИЛИ secondary нажата в этом кадре
    pub fn attack_pressed(&self) -> bool {
        self.primary_pressed || self.secondary_pressed
    }

    /// Слияние нескольких событий одного кадра
    ///
    /// Оси и модификатор берутся из более позднего события,
    /// edge-флаги OR-ятся (нажатие не теряется).
    pub fn merge(self, newer: InputFrame) -> Self {
        Self {
            horizontal: newer.horizontal,
            vertical: newer.vertical,
            run: newer.run,
            primary_pressed: self.primary_pressed || newer.primary_pressed,
            secondary_pressed: self.secondary_pressed || newer.secondary_pressed,
        }
    }
}

fn clamp_axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

/// Player input event — один на кадр (или несколько, тогда merge)
///
/// # Архитектура
/// - Emit: client `read_player_input` / headless `drive_scripted_input`
/// - Consume: `character_controller_tick` (только entities `With<Player>`)
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct PlayerInputEvent {
    pub frame: InputFrame,
}

impl PlayerInputEvent {
    pub fn new(frame: InputFrame) -> Self {
        Self { frame }
    }
}
