use bevy::ecs::error::BevyError;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use pipi_simulation::{
    init_logger, log, spawn_character, Animator, AnimationStateQuery, CharacterSpawn,
    SimulationPlugin,
};

mod camera;
mod input;

use camera::{CameraPlugin, FollowCamera};
use input::PlayerInputPlugin;

fn main() {
    init_logger();

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Pipi".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Collision-aware mover (KinematicCharacterController)
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        // Controller + animator
        .add_plugins(SimulationPlugin)
        .add_plugins((PlayerInputPlugin, CameraPlugin))
        .add_systems(Startup, setup_scene)
        .add_systems(Update, log_animator_transitions)
        .run();
}

/// Spawn ground, lights, camera и игрока
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) -> Result<(), BevyError> {
    // Ground plane (50x50m) + collider (верх коллайдера на y = 0.1)
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(25.0)))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.3))),
        Transform::from_xyz(0.0, 0.0, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(25.0, 0.1, 25.0),
    ));

    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4)),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.3,
        affects_lightmapped_meshes: false,
    });

    // Camera (follow)
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 4.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
        FollowCamera::default(),
    ));

    // Игрок: контроллер + капсула (mesh) + "нос" для направления
    let spawn = CharacterSpawn {
        feet_position: Vec3::Y * 0.1,
        ..default()
    };
    let player = spawn_character(&mut commands, spawn)?;

    let body_mesh = meshes.add(Capsule3d::new(
        spawn.capsule.radius,
        spawn.capsule.half_segment() * 2.0,
    ));
    let nose_mesh = meshes.add(Cuboid::new(0.2, 0.2, 0.4));

    commands
        .entity(player)
        .insert((
            Mesh3d(body_mesh),
            MeshMaterial3d(materials.add(Color::srgb(0.9, 0.6, 0.2))),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(nose_mesh),
                MeshMaterial3d(materials.add(Color::srgb(0.2, 0.2, 0.2))),
                Transform::from_xyz(0.0, 0.5, -spawn.capsule.radius),
            ));
        });

    Ok(())
}

/// Debug: лог смены состояния аниматора
fn log_animator_transitions(
    animators: Query<(Entity, &Animator), Changed<Animator>>,
    mut last: Local<Option<&'static str>>,
) {
    for (entity, animator) in animators.iter() {
        let current = animator.current_state().name;
        if *last != Some(current) {
            log(&format!(
                "Animator {:?}: {} (t = {:.2})",
                entity,
                current,
                animator.normalized_time()
            ));
            *last = Some(current);
        }
    }
}
