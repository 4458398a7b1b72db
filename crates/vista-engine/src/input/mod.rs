//! Pointer input model.
//!
//! Public types are platform-agnostic. Platform adapters under `platform`
//! translate window-system events into `InputEvent`s; `InputState` and
//! `InputFrame` are what camera interaction reads.

mod frame;
mod state;
mod types;

pub mod platform;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{ButtonState, InputEvent, Modifiers, MouseButton, MouseWheelDelta};
