use std::collections::HashSet;

use super::types::{InputEvent, MouseButton, MouseWheelDelta};

/// Per-frame input deltas.
///
/// `InputState` holds what is currently down and where the pointer is;
/// `InputFrame` holds what changed since the last `clear`.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    pub buttons_pressed: HashSet<MouseButton>,
    pub buttons_released: HashSet<MouseButton>,

    /// Accumulated wheel travel in notches (lines).
    pub wheel_lines: f32,

    /// Accumulated wheel travel in logical pixels.
    pub wheel_pixels: f32,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.wheel_lines = 0.0;
        self.wheel_pixels = 0.0;
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        if let InputEvent::MouseWheel(delta) = ev {
            match delta {
                MouseWheelDelta::Line { y, .. } => self.wheel_lines += y,
                MouseWheelDelta::Pixel { y, .. } => self.wheel_pixels += y,
            }
        }
        self.events.push(ev);
    }

    pub fn pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    pub fn released(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }
}
