//! Настройки контроллера персонажа и константы frame-логики

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ControllerError;

/// Порог для осей ввода (|axis| > deadzone считается input'ом)
pub const INPUT_DEADZONE: f32 = 0.01;

/// Гравитация (m/s²). Применяется как смещение `GRAVITY * dt` за кадр, без накопления
pub const GRAVITY: f32 = 9.81;

/// Normalized time, после которого Stand анимация считается завершённой
pub const STAND_FINISHED_NORMALIZED_TIME: f32 = 0.95;

/// Имя боевого состояния аниматора (idle timer не тикает пока оно активно)
pub const COMBAT_STATE: &str = "Madrazo";

/// Имя idle-анимации "Stand"
pub const STAND_STATE: &str = "Stand";

/// Настройки движения/idle для одного персонажа
///
/// Неизменяемы в runtime (tick только читает). Defaults = исходный тюнинг.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct ControllerConfig {
    /// Скорость ходьбы вперёд (m/s)
    pub walk_speed: f32,
    /// Скорость бега вперёд с модификатором (m/s)
    pub run_speed: f32,
    /// Скорость движения назад (m/s), модификатор не влияет
    pub backward_speed: f32,
    /// Скорость поворота (градусы/сек)
    pub rotation_speed: f32,
    /// Порог `isWalking` для аниматора
    pub speed_threshold: f32,
    /// Секунд бездействия до Stand анимации
    pub idle_time_before_stand: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 3.0,
            run_speed: 6.0,
            backward_speed: 2.0,
            rotation_speed: 120.0,
            speed_threshold: 0.1,
            idle_time_before_stand: 5.0,
        }
    }
}

impl ControllerConfig {
    /// Проверка при создании персонажа: все значения конечны, скорости и пороги ≥ 0
    ///
    /// `rotation_speed` может быть отрицательной (инвертированный поворот).
    pub fn validate(&self) -> Result<(), ControllerError> {
        let non_negative = [
            ("walk_speed", self.walk_speed),
            ("run_speed", self.run_speed),
            ("backward_speed", self.backward_speed),
            ("speed_threshold", self.speed_threshold),
            ("idle_time_before_stand", self.idle_time_before_stand),
        ];

        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ControllerError::InvalidConfig { field, value });
            }
        }

        if !self.rotation_speed.is_finite() {
            return Err(ControllerError::InvalidConfig {
                field: "rotation_speed",
                value: self.rotation_speed,
            });
        }

        Ok(())
    }

    /// Скорость для вертикального input'а (назад / бег / ходьба)
    pub fn speed_for(&self, vertical: f32, run_held: bool) -> f32 {
        if vertical < 0.0 {
            self.backward_speed
        } else if run_held {
            self.run_speed
        } else {
            self.walk_speed
        }
    }
}

/// Размеры капсулы персонажа (collider)
///
/// Default 2m × 0.5m. Высота включает полусферы.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct CapsuleDimensions {
    pub height: f32,
    pub radius: f32,
}

impl Default for CapsuleDimensions {
    fn default() -> Self {
        Self {
            height: 2.0,
            radius: 0.5,
        }
    }
}

impl CapsuleDimensions {
    /// Капсула должна быть конечной, radius > 0 и height ≥ 2 * radius
    pub fn validate(&self) -> Result<(), ControllerError> {
        let valid = self.height.is_finite()
            && self.radius.is_finite()
            && self.radius > 0.0
            && self.height >= self.radius * 2.0;

        if valid {
            Ok(())
        } else {
            Err(ControllerError::InvalidCapsule {
                height: self.height,
                radius: self.radius,
            })
        }
    }

    /// Половина длины цилиндрической части (для `Collider::capsule_y`)
    pub fn half_segment(&self) -> f32 {
        (self.height * 0.5 - self.radius).max(0.0)
    }

    /// Расстояние от центра капсулы до нижней точки
    pub fn half_height(&self) -> f32 {
        self.height * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ControllerConfig::default();
        assert_eq!(config.walk_speed, 3.0);
        assert_eq!(config.run_speed, 6.0);
        assert_eq!(config.backward_speed, 2.0);
        assert_eq!(config.rotation_speed, 120.0);
        assert_eq!(config.speed_threshold, 0.1);
        assert_eq!(config.idle_time_before_stand, 5.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_backward_speed_ignores_modifier() {
        let config = ControllerConfig::default();
        assert_eq!(config.speed_for(-0.5, true), config.backward_speed);
        assert_eq!(config.speed_for(-0.5, false), config.backward_speed);
        assert_eq!(config.speed_for(0.5, true), config.run_speed);
        assert_eq!(config.speed_for(0.5, false), config.walk_speed);
    }

    #[test]
    fn test_config_rejects_negative_speed() {
        let config = ControllerConfig {
            run_speed: -1.0,
            ..default()
        };
        assert_eq!(
            config.validate(),
            Err(ControllerError::InvalidConfig { field: "run_speed", value: -1.0 })
        );
    }

    #[test]
    fn test_config_rejects_nan_rotation() {
        let config = ControllerConfig {
            rotation_speed: f32::NAN,
            ..default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_capsule_validation() {
        assert!(CapsuleDimensions::default().validate().is_ok());
        assert_eq!(CapsuleDimensions::default().half_segment(), 0.5);

        let flat = CapsuleDimensions { height: 0.5, radius: 0.5 };
        assert!(flat.validate().is_err());

        let zero = CapsuleDimensions { height: 2.0, radius: 0.0 };
        assert!(zero.validate().is_err());
    }
}
