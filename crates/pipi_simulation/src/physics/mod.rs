//! Physics module
//!
//! Collision-aware mover: Rapier KinematicCharacterController или
//! headless плоский пол.

pub mod movement;

pub use movement::{
    integrate_headless_motion, resolve_against_floor, sync_grounded_from_rapier, FlatGroundMover,
    Grounded, HeadlessGround, GROUND_SKIN,
};
