//! Follow camera: за спиной игрока, с запаздыванием

use bevy::prelude::*;
use bevy::transform::TransformSystem;
use bevy_rapier3d::plugin::PhysicsSet;
use pipi_simulation::Player;

#[derive(Component, Debug, Clone, Copy)]
pub struct FollowCamera {
    /// Расстояние за спиной (m)
    pub distance: f32,
    /// Высота над центром персонажа (m)
    pub height: f32,
    /// Скорость догона (1/sec)
    pub stiffness: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            distance: 6.0,
            height: 3.0,
            stiffness: 5.0,
        }
    }
}

fn follow_player(
    player: Query<&Transform, (With<Player>, Without<FollowCamera>)>,
    mut cameras: Query<(&mut Transform, &FollowCamera)>,
    time: Res<Time>,
) {
    let Some(target) = player.iter().next() else {
        return;
    };

    for (mut camera, follow) in cameras.iter_mut() {
        // Forward = -Z, значит "за спиной" = +Z в локальных осях
        let behind = target.rotation * Vec3::Z * follow.distance;
        let desired = target.translation + behind + Vec3::Y * follow.height;

        let blend = (time.delta_secs() * follow.stiffness).clamp(0.0, 1.0);
        camera.translation = camera.translation.lerp(desired, blend);
        camera.look_at(target.translation + Vec3::Y, Vec3::Y);
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            follow_player
                .after(PhysicsSet::Writeback)
                .before(TransformSystem::TransformPropagate),
        );
    }
}
