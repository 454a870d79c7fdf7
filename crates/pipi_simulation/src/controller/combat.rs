//! Combat handler: primary/secondary нажатие → Attack trigger
//!
//! Ни cooldown, ни combo, ни hit detection. Только trigger + сброс idle.

use super::state::CharacterMotionState;
use crate::input::InputFrame;

/// true если в этом кадре нужно выстрелить Attack trigger
pub fn handle_combat(state: &mut CharacterMotionState, input: &InputFrame) -> bool {
    if !input.attack_pressed() {
        return false;
    }

    state.reset_idle();
    true
}
