//! Player control marker component
//!
//! Отмечает персонажа, которым управляет игрок через input.

use bevy::prelude::Component;

/// Marker component для player-controlled персонажа
///
/// Персонажи БЕЗ этого компонента тикают с пустым input'ом
/// (стоят, копят idle timer, играют Stand).
///
/// # Future: Possession
/// ```ignore
/// commands.entity(old_character).remove::<Player>();
/// commands.entity(new_character).insert(Player);
/// ```
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
