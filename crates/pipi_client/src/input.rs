//! Keyboard/mouse → PlayerInputEvent
//!
//! - A/D (←/→) — поворот (horizontal)
//! - W/S (↑/↓) — вперёд/назад (vertical)
//! - Left Shift — бег
//! - LMB / RMB — атака (just_pressed)
//!
//! Оси сглаживаются через VirtualAxis (клавиши дают -1/0/+1).

use bevy::prelude::*;
use pipi_simulation::controller::ControllerSet;
use pipi_simulation::input::{InputFrame, PlayerInputEvent, VirtualAxis};

#[derive(Resource, Debug, Default)]
pub struct PlayerAxes {
    pub horizontal: VirtualAxis,
    pub vertical: VirtualAxis,
}

pub fn read_player_input(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    time: Res<Time>,
    mut axes: ResMut<PlayerAxes>,
    mut input_events: EventWriter<PlayerInputEvent>,
) {
    let delta = time.delta_secs();

    let horizontal = axes.horizontal.update(
        keys.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]),
        keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]),
        delta,
    );
    let vertical = axes.vertical.update(
        keys.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]),
        keys.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]),
        delta,
    );

    input_events.write(PlayerInputEvent::new(InputFrame {
        horizontal,
        vertical,
        run: keys.pressed(KeyCode::ShiftLeft),
        primary_pressed: mouse.just_pressed(MouseButton::Left),
        secondary_pressed: mouse.just_pressed(MouseButton::Right),
    }));
}

pub struct PlayerInputPlugin;

impl Plugin for PlayerInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerAxes>()
            .add_systems(Update, read_player_input.before(ControllerSet::Tick));
    }
}
