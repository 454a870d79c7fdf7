//! Collision-aware перемещение персонажа
//!
//! Два режима:
//! - Rapier: контроллер пишет `KinematicCharacterController::translation`,
//!   Rapier разрешает коллизии и отдаёт `KinematicCharacterControllerOutput`
//!   (grounded синхронизируем в `Grounded`)
//! - Headless (без Rapier, `HeadlessGround`): translation применяется к
//!   `Transform` напрямую, коллизия только с плоским полом

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::controller::{CapsuleDimensions, CharacterMover};

/// Небольшой запас для ground check (numerical errors)
pub const GROUND_SKIN: f32 = 0.01;

/// На земле ли персонаж (результат последнего collision resolve)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Grounded(pub bool);

/// Headless режим: плоский пол на высоте `floor_y`, без Rapier
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct HeadlessGround {
    pub floor_y: f32,
}

/// Разрешение смещения против плоского пола
///
/// `position` = центр капсулы. Возвращает (новая позиция, grounded).
pub fn resolve_against_floor(
    position: Vec3,
    displacement: Vec3,
    half_height: f32,
    floor_y: f32,
) -> (Vec3, bool) {
    let mut next = position + displacement;
    let min_center_y = floor_y + half_height;

    if next.y <= min_center_y + GROUND_SKIN {
        next.y = next.y.max(min_center_y);
        (next, true)
    } else {
        (next, false)
    }
}

/// `CharacterMover` над плоским полом (без ECS)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatGroundMover {
    position: Vec3,
    facing: Quat,
    half_height: f32,
    floor_y: f32,
    grounded: bool,
}

impl FlatGroundMover {
    pub fn new(position: Vec3, half_height: f32, floor_y: f32) -> Self {
        let (position, grounded) =
            resolve_against_floor(position, Vec3::ZERO, half_height, floor_y);
        Self {
            position,
            facing: Quat::IDENTITY,
            half_height,
            floor_y,
            grounded,
        }
    }

    /// Персонаж стоит на полу в точке `floor_point`
    pub fn standing_at(floor_point: Vec3, half_height: f32) -> Self {
        Self::new(floor_point + Vec3::Y * half_height, half_height, floor_point.y)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}

impl CharacterMover for FlatGroundMover {
    fn facing(&self) -> Quat {
        self.facing
    }

    fn set_facing(&mut self, facing: Quat) {
        self.facing = facing;
    }

    fn move_by(&mut self, displacement: Vec3) {
        let (position, grounded) =
            resolve_against_floor(self.position, displacement, self.half_height, self.floor_y);
        self.position = position;
        self.grounded = grounded;
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }
}

/// System: Rapier output → Grounded
pub fn sync_grounded_from_rapier(
    mut query: Query<(&KinematicCharacterControllerOutput, &mut Grounded)>,
) {
    for (output, mut grounded) in query.iter_mut() {
        grounded.0 = output.grounded;
    }
}

/// System: headless интеграция translation → Transform (без Rapier)
///
/// Забирает накопленный за кадр translation (как это делает Rapier)
/// и разрешает его против пола.
pub fn integrate_headless_motion(
    mut query: Query<(
        &HeadlessGround,
        &CapsuleDimensions,
        &mut KinematicCharacterController,
        &mut Transform,
        &mut Grounded,
    )>,
) {
    for (ground, capsule, mut controller, mut transform, mut grounded) in query.iter_mut() {
        let displacement = controller.translation.take().unwrap_or(Vec3::ZERO);
        let (position, on_floor) = resolve_against_floor(
            transform.translation,
            displacement,
            capsule.half_height(),
            ground.floor_y,
        );

        transform.translation = position;
        grounded.0 = on_floor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_clamps_and_grounds() {
        let (position, grounded) =
            resolve_against_floor(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, -0.5, 0.0), 1.0, 0.0);
        assert_eq!(position, Vec3::new(1.0, 1.0, 0.0));
        assert!(grounded);
    }

    #[test]
    fn test_airborne_above_floor() {
        let (position, grounded) =
            resolve_against_floor(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0), 1.0, 0.0);
        assert_eq!(position.y, 4.0);
        assert!(!grounded);
    }

    #[test]
    fn test_skin_counts_as_grounded() {
        let (position, grounded) =
            resolve_against_floor(Vec3::new(0.0, 1.005, 0.0), Vec3::ZERO, 1.0, 0.0);
        assert_eq!(position.y, 1.005);
        assert!(grounded);
    }

    #[test]
    fn test_flat_ground_mover() {
        let mut mover = FlatGroundMover::standing_at(Vec3::new(0.0, 2.0, 0.0), 1.0);
        assert!(mover.is_grounded());
        assert_eq!(mover.position(), Vec3::new(0.0, 3.0, 0.0));

        mover.move_by(Vec3::new(0.0, 4.0, 0.0));
        assert!(!mover.is_grounded());

        mover.move_by(Vec3::new(0.0, -10.0, 0.0));
        assert!(mover.is_grounded());
        assert_eq!(mover.position().y, 3.0);
    }
}
