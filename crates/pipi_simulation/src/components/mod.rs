//! ECS Components, не привязанные к конкретному модулю
//!
//! - player: player control marker (Player)

pub mod player;

pub use player::*;
