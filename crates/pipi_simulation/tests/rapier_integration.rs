//! Rapier integration test
//!
//! Тот же headless App, но перемещение через настоящий Rapier
//! `KinematicCharacterController` (как в клиенте):
//! - gravity translation уходит в Rapier и им же поглощается
//! - `KinematicCharacterControllerOutput.grounded` → `Grounded`

use bevy::prelude::*;
use bevy_rapier3d::prelude::{
    Collider, KinematicCharacterController, NoUserData, RapierPhysicsPlugin, RigidBody,
};
use pipi_simulation::{
    create_headless_app, spawn_character, CharacterMotionState, CharacterSpawn, Grounded,
    InputFrame, PlayerInputEvent, SimulationPlugin,
};

/// Верх пола (cuboid half-height 0.1 в начале координат)
const FLOOR_TOP: f32 = 0.1;

fn create_rapier_app() -> App {
    let mut app = create_headless_app(42);
    app.add_plugins((
        TransformPlugin,
        RapierPhysicsPlugin::<NoUserData>::default(),
        SimulationPlugin,
    ));

    app.world_mut().spawn((
        Transform::default(),
        RigidBody::Fixed,
        Collider::cuboid(25.0, FLOOR_TOP, 25.0),
    ));
    app
}

fn spawn_player(app: &mut App, feet_y: f32) -> Entity {
    let spawn = CharacterSpawn {
        feet_position: Vec3::Y * feet_y,
        ..Default::default()
    };
    let entity = spawn_character(&mut app.world_mut().commands(), spawn).expect("valid spawn");
    app.world_mut().flush();
    entity
}

fn center_y(app: &App, entity: Entity) -> f32 {
    app.world().get::<Transform>(entity).expect("transform").translation.y
}

#[test]
fn test_character_falls_onto_rapier_floor() {
    let mut app = create_rapier_app();
    let player = spawn_player(&mut app, 3.0);
    let start_y = center_y(&app, player);

    for _ in 0..60 {
        app.update();
    }

    // Центр капсулы: верх пола + half height (1m) + offset KCC
    let y = center_y(&app, player);
    assert!(y < start_y, "персонаж не упал: y = {}", y);
    assert!((y - (FLOOR_TOP + 1.0)).abs() < 0.05, "y = {}", y);

    let grounded = app.world().get::<Grounded>(player).expect("grounded");
    assert!(grounded.0, "Grounded не синхронизирован из Rapier");

    // Rapier забрал накопленный translation
    let controller = app
        .world()
        .get::<KinematicCharacterController>(player)
        .expect("kinematic controller");
    assert_eq!(controller.translation, None);
}

#[test]
fn test_grounded_character_walks_on_rapier_floor() {
    let mut app = create_rapier_app();
    let player = spawn_player(&mut app, FLOOR_TOP);

    for _ in 0..10 {
        app.update();
    }
    let settled_y = center_y(&app, player);

    let walk = InputFrame {
        vertical: 1.0,
        ..Default::default()
    };
    for _ in 0..60 {
        app.world_mut().send_event(PlayerInputEvent::new(walk));
        app.update();
    }

    let transform = app.world().get::<Transform>(player).expect("transform");
    // walk 3 m/s * 1 sec вперёд (-Z), высота не меняется
    assert!((transform.translation.z + 3.0).abs() < 0.1, "pos = {:?}", transform.translation);
    assert!((transform.translation.y - settled_y).abs() < 0.05);

    let state = app.world().get::<CharacterMotionState>(player).expect("motion state");
    assert_eq!(state.idle_timer, 0.0);
    assert!(app.world().get::<Grounded>(player).expect("grounded").0);
}
