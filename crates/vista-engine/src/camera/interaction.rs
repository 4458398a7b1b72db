use crate::coords::Vec2;
use crate::input::{InputFrame, InputState, MouseButton};

use super::{Camera, CameraError};

/// Mouse-driven pan, zoom and rotate.
///
/// Holding `pan_button` drags the world with the pointer; the wheel zooms
/// about the pointer by `(1 + zoom_rate)` per notch. With shift held the
/// wheel rotates about the pointer by `rotate_step` radians per notch instead.
#[derive(Debug, Clone, PartialEq)]
pub struct PanZoomControls {
    pub pan_button: MouseButton,
    pub pan_enabled: bool,

    pub zoom_enabled: bool,

    /// Fractional zoom per wheel notch. Must be greater than -1.
    pub zoom_rate: f32,

    /// Touchpad pixels that count as one wheel notch.
    pub pixels_per_notch: f32,

    /// Shift + wheel rotates; when disabled shift + wheel zooms as usual.
    pub rotate_enabled: bool,

    /// Radians per wheel notch.
    pub rotate_step: f32,
}

impl Default for PanZoomControls {
    fn default() -> Self {
        Self {
            pan_button: MouseButton::Middle,
            pan_enabled: true,
            zoom_enabled: true,
            zoom_rate: 0.1,
            pixels_per_notch: 40.0,
            rotate_enabled: true,
            rotate_step: std::f32::consts::PI / 36.0,
        }
    }
}

impl PanZoomControls {
    /// Applies one frame of input to `camera`.
    ///
    /// Call after all of the frame's events have been applied to `input`.
    /// The frame is applied as a whole: if the wheel step fails, the camera
    /// keeps its previous state, drag session included.
    ///
    /// A drag ends whenever the pan button is no longer held, whether it was
    /// released (even in the frame it was pressed), released outside the
    /// window, or dropped by a focus change.
    pub fn apply(&self, camera: &mut Camera, input: &InputState, frame: &InputFrame) -> Result<(), CameraError> {
        let mut next = camera.clone();

        match input.pointer_pos {
            Some(pointer) => {
                self.apply_pan(&mut next, input, frame, pointer);
                self.apply_wheel(&mut next, input, frame, pointer)?;
            }
            None => {
                if next.is_panning() && !input.button_down(self.pan_button) {
                    log::trace!("pan button up with pointer outside; ending pan in place");
                    next.cancel_pan();
                }
            }
        }

        *camera = next;
        Ok(())
    }

    fn apply_pan(&self, camera: &mut Camera, input: &InputState, frame: &InputFrame, pointer: Vec2) {
        if !self.pan_enabled {
            return;
        }

        if frame.pressed(self.pan_button) {
            camera.begin_pan(pointer);
        }

        if frame.released(self.pan_button) {
            camera.end_pan(pointer);
        } else if input.button_down(self.pan_button) {
            camera.update_pan(pointer);
        } else if camera.is_panning() {
            log::trace!("pan button dropped without release; ending pan in place");
            camera.cancel_pan();
        }
    }

    fn apply_wheel(&self, camera: &mut Camera, input: &InputState, frame: &InputFrame, pointer: Vec2) -> Result<(), CameraError> {
        let notches = self.notches(frame);
        if notches == 0.0 {
            return Ok(());
        }

        if self.rotate_enabled && input.modifiers.shift {
            camera.rotate_at(pointer, notches * self.rotate_step)
        } else if self.zoom_enabled {
            camera.zoom_at(pointer, (1.0 + self.zoom_rate).powf(notches))
        } else {
            Ok(())
        }
    }

    fn notches(&self, frame: &InputFrame) -> f32 {
        let pixel_notches = if self.pixels_per_notch > 0.0 {
            frame.wheel_pixels / self.pixels_per_notch
        } else {
            0.0
        };
        frame.wheel_lines + pixel_notches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Viewport;
    use crate::input::{ButtonState, InputEvent, Modifiers, MouseWheelDelta};

    struct Rig {
        camera: Camera,
        input: InputState,
        frame: InputFrame,
        controls: PanZoomControls,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                camera: Camera::new(Viewport::new(800.0, 600.0)),
                input: InputState::default(),
                frame: InputFrame::default(),
                controls: PanZoomControls::default(),
            }
        }

        /// Feeds one frame's worth of events and applies the controls.
        fn frame(&mut self, events: &[InputEvent]) {
            self.frame.clear();
            for ev in events {
                self.input.apply_event(&mut self.frame, *ev);
            }
            self.controls
                .apply(&mut self.camera, &self.input, &self.frame)
                .unwrap();
        }
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved { x, y }
    }

    fn middle(state: ButtonState) -> InputEvent {
        InputEvent::PointerButton { button: MouseButton::Middle, state }
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-2 && (a.y - b.y).abs() < 1e-2
    }

    #[test]
    fn drag_moves_grabbed_point_with_pointer() {
        let mut rig = Rig::new();
        rig.camera.set_scale(Vec2::new(2.0, 2.0)).unwrap();

        rig.frame(&[moved(100.0, 100.0), middle(ButtonState::Pressed)]);
        let grabbed = rig.camera.state().screen_to_world(Vec2::new(100.0, 100.0)).unwrap();

        rig.frame(&[moved(150.0, 120.0)]);
        rig.frame(&[moved(180.0, 90.0), middle(ButtonState::Released)]);

        assert!(!rig.camera.is_panning());
        let screen = rig.camera.state().world_to_screen(grabbed).unwrap();
        assert!(close(screen, Vec2::new(180.0, 90.0)));
    }

    #[test]
    fn wheel_zooms_about_pointer() {
        let mut rig = Rig::new();
        let pointer = Vec2::new(300.0, 200.0);

        rig.frame(&[moved(pointer.x, pointer.y)]);
        let under = rig.camera.state().screen_to_world(pointer).unwrap();

        rig.frame(&[InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: 2.0 })]);

        assert!((rig.camera.scale().x - 1.21).abs() < 1e-4);
        assert!(close(rig.camera.state().world_to_screen(under).unwrap(), pointer));
    }

    #[test]
    fn pixel_wheel_converts_to_notches() {
        let mut rig = Rig::new();
        rig.frame(&[
            moved(0.0, 0.0),
            InputEvent::MouseWheel(MouseWheelDelta::Pixel { x: 0.0, y: -40.0 }),
        ]);
        assert!((rig.camera.scale().x - 1.0 / 1.1).abs() < 1e-4);
    }

    #[test]
    fn disabled_controls_do_nothing() {
        let mut rig = Rig::new();
        rig.controls.pan_enabled = false;
        rig.controls.zoom_enabled = false;
        let before = rig.camera.clone();

        rig.frame(&[moved(10.0, 10.0), middle(ButtonState::Pressed)]);
        rig.frame(&[moved(50.0, 50.0), InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: 1.0 })]);

        assert_eq!(rig.camera, before);
    }

    #[test]
    fn releasing_outside_window_ends_drag() {
        let mut rig = Rig::new();
        rig.frame(&[moved(10.0, 10.0), middle(ButtonState::Pressed)]);
        rig.frame(&[InputEvent::PointerLeft, middle(ButtonState::Released)]);
        assert!(!rig.camera.is_panning());
    }

    #[test]
    fn click_within_one_frame_opens_and_closes_drag() {
        let mut rig = Rig::new();
        let before = rig.camera.offset();

        rig.frame(&[moved(40.0, 40.0), middle(ButtonState::Pressed), middle(ButtonState::Released)]);
        assert!(!rig.camera.is_panning());

        rig.frame(&[moved(90.0, 70.0)]);
        assert!(!rig.camera.is_panning());
        assert_eq!(rig.camera.offset(), before);
    }

    #[test]
    fn focus_loss_ends_drag() {
        let mut rig = Rig::new();
        rig.frame(&[moved(10.0, 10.0), middle(ButtonState::Pressed)]);
        assert!(rig.camera.is_panning());

        rig.frame(&[InputEvent::Focused(false)]);
        assert!(!rig.camera.is_panning());

        let offset = rig.camera.offset();
        rig.frame(&[moved(60.0, 60.0)]);
        assert_eq!(rig.camera.offset(), offset);
    }

    #[test]
    fn failed_wheel_step_discards_whole_frame() {
        let mut rig = Rig::new();
        rig.controls.zoom_rate = -1.0;
        rig.frame(&[moved(10.0, 10.0), middle(ButtonState::Pressed)]);
        let before = rig.camera.clone();

        // zoom_rate of -1 gives a zero factor, which zoom_at rejects.
        rig.frame.clear();
        for ev in [moved(50.0, 30.0), InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: 1.0 })] {
            rig.input.apply_event(&mut rig.frame, ev);
        }
        let result = rig.controls.apply(&mut rig.camera, &rig.input, &rig.frame);

        assert!(result.unwrap_err().is_invalid_parameter());
        assert_eq!(rig.camera, before);
    }

    #[test]
    fn shift_wheel_rotates_about_pointer() {
        let mut rig = Rig::new();
        let pointer = Vec2::new(250.0, 120.0);
        let shift = Modifiers { shift: true, ..Modifiers::default() };

        rig.frame(&[moved(pointer.x, pointer.y), InputEvent::ModifiersChanged(shift)]);
        let under = rig.camera.state().screen_to_world(pointer).unwrap();

        rig.frame(&[InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: 2.0 })]);

        assert!((rig.camera.rotation() - 2.0 * rig.controls.rotate_step).abs() < 1e-6);
        assert_eq!(rig.camera.scale(), Vec2::ONE);
        assert!(close(rig.camera.state().world_to_screen(under).unwrap(), pointer));
    }
}
