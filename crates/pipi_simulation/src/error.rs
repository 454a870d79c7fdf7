//! Ошибки конструирования персонажа
//!
//! Per-frame tick ошибок не имеет. Всё, что может быть неверно
//! (конфиг, размеры капсулы, недостающие компоненты), ловится при создании.

use bevy::prelude::Entity;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ControllerError {
    #[error("Invalid controller config: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f32 },

    #[error("Invalid capsule dimensions: height {height}, radius {radius}")]
    InvalidCapsule { height: f32, radius: f32 },

    #[error("Character entity {entity:?} is missing component {component}")]
    MissingComponent {
        entity: Entity,
        component: &'static str,
    },
}
