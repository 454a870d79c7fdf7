//! Pipi Simulation Core
//!
//! Character controller на Bevy 0.16 ECS:
//! - controller: per-frame логика (movement, combat, idle timer, animator params)
//! - animation: граница с аниматором + встроенный Animator
//! - physics: Rapier KinematicCharacterController или headless пол
//! - input: PlayerInputEvent, VirtualAxis, scripted input
//!
//! Ядро (`controller::step`) — чистая функция, ECS только применяет результат.

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod animation;
pub mod components;
pub mod controller;
pub mod error;
pub mod input;
pub mod logger;
pub mod physics;

// Re-export базовых типов для удобства
pub use animation::{AnimationParameterSink, AnimationPlugin, AnimationStateQuery, Animator};
pub use components::*;
pub use controller::{
    spawn_character, step, CapsuleDimensions, CharacterController, CharacterControllerPlugin,
    CharacterMotionState, CharacterMover, CharacterSpawn, ControllerConfig, FrameContext,
    FrameOutput,
};
pub use error::ControllerError;
pub use input::{InputFrame, PlayerInputEvent, ScriptedInputPlugin};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel,
    LogPrinter, LOGGER_LEVEL,
};
pub use physics::{Grounded, HeadlessGround};

/// Шаг headless симуляции (60Hz)
pub const HEADLESS_TICK: Duration = Duration::from_nanos(16_666_667);

/// Главный plugin симуляции (controller + animator)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((CharacterControllerPlugin, AnimationPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции (60Hz, manual time)
pub fn create_headless_app(seed: u64) -> App {
    create_headless_app_with_tick(seed, HEADLESS_TICK)
}

/// Headless App с произвольным шагом времени
///
/// Время не зависит от wall clock: каждый `app.update()` = ровно `tick`
/// (кроме самого первого update, у него delta = 0).
pub fn create_headless_app_with_tick(seed: u64, tick: Duration) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(tick));

    // Virtual time по умолчанию режет delta до 250ms
    let mut virtual_time = app.world_mut().resource_mut::<Time<Virtual>>();
    let max_delta = virtual_time.max_delta().max(tick);
    virtual_time.set_max_delta(max_delta);

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
