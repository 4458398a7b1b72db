use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::ModifiersState;

use crate::input::{ButtonState, InputEvent, Modifiers, MouseButton, MouseWheelDelta};

/// Translates a winit `WindowEvent` into an `InputEvent`.
///
/// `scale_factor` is the window's current DPI scale (`Window::scale_factor`);
/// physical positions are converted to logical pixels with it, which is the
/// space the camera's viewport is expressed in.
///
/// Returns `None` for events the input model does not represent.
pub fn translate_window_event(scale_factor: f64, event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::ModifiersChanged(m) => Some(InputEvent::ModifiersChanged(map_modifiers(m.state()))),

        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_f32(scale_factor, *position);
            Some(InputEvent::PointerMoved { x, y })
        }

        WindowEvent::MouseInput { state, button, .. } => {
            let state = match state {
                ElementState::Pressed => ButtonState::Pressed,
                ElementState::Released => ButtonState::Released,
            };
            Some(InputEvent::PointerButton { button: map_mouse_button(*button), state })
        }

        WindowEvent::MouseWheel { delta, .. } => {
            let delta = match delta {
                MouseScrollDelta::LineDelta(x, y) => MouseWheelDelta::Line { x: *x, y: *y },
                MouseScrollDelta::PixelDelta(p) => {
                    let (x, y) = to_logical_f32(scale_factor, *p);
                    MouseWheelDelta::Pixel { x, y }
                }
            };
            Some(InputEvent::MouseWheel(delta))
        }

        _ => None,
    }
}

fn to_logical_f32(scale_factor: f64, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(scale_factor);
    (logical.x as f32, logical.y as f32)
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

#[cfg(test)]
mod tests {
    use winit::event::{DeviceId, TouchPhase};

    use super::*;

    fn device() -> DeviceId {
        // SAFETY: only used as an opaque tag inside synthetic test events.
        unsafe { DeviceId::dummy() }
    }

    #[test]
    fn cursor_position_becomes_logical() {
        let ev = WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(200.0, 100.0),
        };
        assert_eq!(
            translate_window_event(2.0, &ev),
            Some(InputEvent::PointerMoved { x: 100.0, y: 50.0 })
        );
    }

    #[test]
    fn wheel_lines_pass_through() {
        let ev = WindowEvent::MouseWheel {
            device_id: device(),
            delta: MouseScrollDelta::LineDelta(0.0, -1.0),
            phase: TouchPhase::Moved,
        };
        assert_eq!(
            translate_window_event(1.0, &ev),
            Some(InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: -1.0 }))
        );
    }

    #[test]
    fn button_press_maps_button_and_state() {
        let ev = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: WinitMouseButton::Middle,
        };
        assert_eq!(
            translate_window_event(1.0, &ev),
            Some(InputEvent::PointerButton { button: MouseButton::Middle, state: ButtonState::Pressed })
        );
    }

    #[test]
    fn unrelated_events_are_dropped() {
        assert_eq!(translate_window_event(1.0, &WindowEvent::CloseRequested), None);
    }
}
