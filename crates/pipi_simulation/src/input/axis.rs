//! VirtualAxis — сглаженная ось из цифровых кнопок
//!
//! Клавиатура даёт -1/0/+1, а контроллер ждёт непрерывную ось в [-1, 1].
//! Ось разгоняется к цели со скоростью `sensitivity`, возвращается к нулю
//! со скоростью `gravity`. `snap`: при смене направления сразу прыгаем в 0.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct VirtualAxis {
    /// Units/sec к цели
    pub sensitivity: f32,
    /// Units/sec к нулю без input'а
    pub gravity: f32,
    pub snap: bool,
    value: f32,
}

impl Default for VirtualAxis {
    fn default() -> Self {
        Self {
            sensitivity: 3.0,
            gravity: 3.0,
            snap: true,
            value: 0.0,
        }
    }
}

impl VirtualAxis {
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Обновить ось по двум кнопкам (negative / positive)
    pub fn update(&mut self, negative: bool, positive: bool, delta: f32) -> f32 {
        let target = match (negative, positive) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };

        if target != 0.0 {
            if self.snap && self.value != 0.0 && self.value.signum() != target {
                self.value = 0.0;
            }
            self.value = move_towards(self.value, target, self.sensitivity * delta);
        } else {
            self.value = move_towards(self.value, 0.0, self.gravity * delta);
        }

        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}

fn move_towards(current: f32, target: f32, max_step: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= max_step {
        target
    } else {
        current + diff.signum() * max_step
    }
}
