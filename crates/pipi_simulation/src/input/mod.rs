//! Player input module
//!
//! # Архитектура
//!
//! ```text
//! Host input (keyboard/mouse в client, scripted в headless)
//!     ↓
//! PlayerInputEvent (ECS event) - events.rs
//!     ↓
//! character_controller_tick (controller/systems.rs)
//! ```
//!
//! - `events` - InputFrame + PlayerInputEvent
//! - `axis` - VirtualAxis (сглаживание цифровых кнопок в ось)
//! - `scripted` - seeded random input для headless

pub mod axis;
pub mod events;
pub mod scripted;

pub use axis::VirtualAxis;
pub use events::{InputFrame, PlayerInputEvent};
pub use scripted::{ScriptedInput, ScriptedInputPlugin};
