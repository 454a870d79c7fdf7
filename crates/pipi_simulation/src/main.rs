//! Headless симуляция Pipi
//!
//! Запускает Bevy App без рендера и Rapier: scripted input,
//! персонаж на плоском полу, вывод состояния каждые 100 тиков.

use bevy::prelude::*;
use pipi_simulation::{
    create_headless_app, log_error, log_info, spawn_character, Animator, AnimationStateQuery,
    CharacterMotionState, CharacterSpawn, ScriptedInputPlugin, SimulationPlugin,
};

fn main() {
    let seed = 42;
    let mut app = create_headless_app(seed);
    app.add_plugins((SimulationPlugin, ScriptedInputPlugin));

    log_info(&format!("Starting Pipi headless simulation (seed: {})", seed));

    let spawned = spawn_character(
        &mut app.world_mut().commands(),
        CharacterSpawn {
            headless_floor: Some(0.0),
            ..Default::default()
        },
    );
    let player = match spawned {
        Ok(entity) => entity,
        Err(error) => {
            log_error(&format!("Failed to spawn character: {}", error));
            std::process::exit(1);
        }
    };
    app.world_mut().flush();

    // Запускаем 1000 тиков симуляции
    for tick in 0..1000 {
        app.update();

        if tick % 100 == 0 {
            let world = app.world();
            let (Some(transform), Some(state), Some(animator)) = (
                world.get::<Transform>(player),
                world.get::<CharacterMotionState>(player),
                world.get::<Animator>(player),
            ) else {
                continue;
            };

            log_info(&format!(
                "Tick {}: pos {:.2?}, speed {:.2}, idle {:.2}s, stand {}, anim {} ({:.2})",
                tick,
                transform.translation,
                state.current_speed,
                state.idle_timer,
                state.has_triggered_stand,
                animator.current_state_name(),
                animator.normalized_time(),
            ));
        }
    }

    log_info("Simulation complete!");
}
