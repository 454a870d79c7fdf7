//! Animator systems

use bevy::prelude::*;

use super::Animator;

/// System: продвижение всех `Animator` на delta кадра
///
/// Запускается ПОСЛЕ controller tick (параметры этого кадра уже записаны).
pub fn advance_animators(mut animators: Query<&mut Animator>, time: Res<Time>) {
    let delta = time.delta_secs();

    for mut animator in animators.iter_mut() {
        animator.advance(delta);
    }
}
