use crate::coords::{Rect, Vec2, Viewport};

use super::transform::validate_scale;
use super::{CameraConfig, CameraError, CameraSnapshot, ScaleLimits, TransformState};

/// A 2D camera: transform state plus the viewport it projects onto.
///
/// Every mutating operation either succeeds completely or leaves the camera
/// as it was. The `*_at` variants keep the world point under a chosen screen
/// pixel fixed on that pixel.
///
/// A camera is a plain value. Pass it by reference to drawing code
/// (see [`Camera::draw`]); there is no global instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    state: TransformState,
    viewport: Viewport,
    limits: Option<ScaleLimits>,

    /// Restored by [`reset`](Self::reset).
    home: TransformState,

    /// Last pointer position of an in-progress drag pan (screen space).
    pan_anchor: Option<Vec2>,
}

impl Camera {
    /// Identity camera over `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            state: TransformState::new(),
            viewport,
            limits: None,
            home: TransformState::new(),
            pan_anchor: None,
        }
    }

    pub fn with_config(viewport: Viewport, config: CameraConfig) -> Result<Self, CameraError> {
        let state = TransformState::from_parts(config.offset, config.scale, config.rotation)?;
        Ok(Self {
            home: state.clone(),
            state,
            viewport,
            limits: config.scale_limits,
            pan_anchor: None,
        })
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> &TransformState {
        &self.state
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Call on window resize. The transform itself is unaffected.
    ///
    /// The camera's own queries (`viewport_world_aabb`, `fit_world_rect`,
    /// visibility) use this viewport, while [`Camera::draw`] culls against the
    /// renderer's screen size. The two disagree until this is called.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if !viewport.is_valid() {
            log::debug!("camera viewport set to degenerate size {viewport:?}");
        }
        self.viewport = viewport;
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.state.offset()
    }

    #[inline]
    pub fn scale(&self) -> Vec2 {
        self.state.scale()
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.state.rotation()
    }

    pub fn set_offset(&mut self, offset: Vec2) -> Result<(), CameraError> {
        self.state.set_offset(offset)
    }

    /// Overwrites the scale verbatim; scale limits are not applied.
    pub fn set_scale(&mut self, scale: Vec2) -> Result<(), CameraError> {
        self.state.set_scale(scale)
    }

    pub fn set_rotation(&mut self, rotation: f32) -> Result<(), CameraError> {
        self.state.set_rotation(rotation)
    }

    #[inline]
    pub fn scale_limits(&self) -> Option<ScaleLimits> {
        self.limits
    }

    /// Takes effect on the next zoom; the current scale is left alone.
    pub fn set_scale_limits(&mut self, limits: Option<ScaleLimits>) {
        self.limits = limits;
    }

    // ── pan ───────────────────────────────────────────────────────────────

    /// Moves the camera by `delta` world units.
    pub fn pan_world(&mut self, delta: Vec2) {
        let offset = self.state.offset() + delta;
        if let Err(err) = self.state.set_offset(offset) {
            log::debug!("pan_world ignored: {err}");
        }
    }

    /// Drags the content by `delta` screen pixels: whatever was drawn at `s`
    /// is drawn at `s + delta` afterwards.
    pub fn pan_screen(&mut self, delta: Vec2) {
        let result = self
            .state
            .scale_to_world(delta)
            .and_then(|world| self.state.set_offset(self.state.offset() - world));

        if let Err(err) = result {
            log::debug!("pan_screen ignored: {err}");
        }
    }

    /// Starts a drag pan with the pointer at `screen`.
    pub fn begin_pan(&mut self, screen: Vec2) {
        self.pan_anchor = Some(screen);
    }

    /// Follows the pointer; no-op without an active drag.
    pub fn update_pan(&mut self, screen: Vec2) {
        if let Some(last) = self.pan_anchor {
            self.pan_screen(screen - last);
            self.pan_anchor = Some(screen);
        }
    }

    /// Applies the final pointer movement and ends the drag.
    pub fn end_pan(&mut self, screen: Vec2) {
        self.update_pan(screen);
        self.pan_anchor = None;
    }

    /// Ends the drag without applying any further movement.
    pub fn cancel_pan(&mut self) {
        self.pan_anchor = None;
    }

    #[inline]
    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }

    // ── zoom ──────────────────────────────────────────────────────────────

    /// Multiplies both scale axes by `factor` about the screen origin.
    pub fn zoom(&mut self, factor: f32) -> Result<(), CameraError> {
        if factor == 1.0 {
            return Ok(());
        }
        let scale = self.zoomed_scale(factor)?;
        self.state.set_scale(scale)
    }

    /// Zooms by `factor` keeping the world point under `screen` in place.
    pub fn zoom_at(&mut self, screen: Vec2, factor: f32) -> Result<(), CameraError> {
        let anchor = self.state.screen_to_world(screen)?;
        let scale = self.zoomed_scale(factor)?;
        self.reanchor(anchor, screen, scale, self.state.rotation())
    }

    /// Sets an absolute scale keeping the world point under `screen` in place.
    /// Scale limits apply.
    pub fn set_scale_at(&mut self, screen: Vec2, scale: Vec2) -> Result<(), CameraError> {
        validate_scale(scale)?;
        let anchor = self.state.screen_to_world(screen)?;
        let scale = self.limited(scale);
        self.reanchor(anchor, screen, scale, self.state.rotation())
    }

    fn zoomed_scale(&self, factor: f32) -> Result<Vec2, CameraError> {
        if !factor.is_finite() || factor == 0.0 {
            return Err(CameraError::invalid("factor", "must be finite and non-zero"));
        }
        let scale = self.limited(self.state.scale() * factor);
        validate_scale(scale)?;
        Ok(scale)
    }

    fn limited(&self, scale: Vec2) -> Vec2 {
        match self.limits {
            Some(limits) => {
                let clamped = limits.clamp(scale);
                if clamped != scale {
                    log::trace!("zoom clamped from {scale:?} to {clamped:?}");
                }
                clamped
            }
            None => scale,
        }
    }

    // ── rotate ────────────────────────────────────────────────────────────

    /// Rotates about the screen origin by `delta` radians.
    pub fn rotate(&mut self, delta: f32) {
        if delta == 0.0 {
            return;
        }
        if let Err(err) = self.state.set_rotation(self.state.rotation() + delta) {
            log::debug!("rotate ignored: {err}");
        }
    }

    /// Rotates by `delta` radians keeping the world point under `screen` in place.
    pub fn rotate_at(&mut self, screen: Vec2, delta: f32) -> Result<(), CameraError> {
        let anchor = self.state.screen_to_world(screen)?;
        let scale = self.state.scale();
        self.reanchor(anchor, screen, scale, self.state.rotation() + delta)
    }

    /// Commits `scale`/`rotation` with the offset solved from
    /// `screen = R·S·(anchor − offset)`.
    fn reanchor(&mut self, anchor: Vec2, screen: Vec2, scale: Vec2, rotation: f32) -> Result<(), CameraError> {
        let mut next = self.state.clone();
        next.set_parts(self.state.offset(), scale, rotation)?;

        let offset = anchor - next.scale_to_world(screen)?;
        next.set_offset(offset)?;

        self.state = next;
        Ok(())
    }

    // ── framing ───────────────────────────────────────────────────────────

    /// Centers `world` in the viewport at the largest uniform scale that fits
    /// it inside `padding` pixels of margin. Rotation is kept.
    pub fn fit_world_rect(&mut self, world: Rect, padding: f32) -> Result<(), CameraError> {
        let world = world.normalized();
        if world.is_empty() || !world.is_finite() {
            return Err(CameraError::invalid("rect", "must be finite with positive area"));
        }

        // Screen extent of the rect at unit scale under the current rotation.
        let (sin, cos) = self.state.rotation().sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        let extent = Vec2::new(
            cos * world.size.x + sin * world.size.y,
            sin * world.size.x + cos * world.size.y,
        );

        let available = (self.viewport.size() - Vec2::splat(padding * 2.0)).max(Vec2::ONE);
        let fit = (available.x / extent.x).min(available.y / extent.y);
        let scale = self.limited(Vec2::splat(fit));

        self.reanchor(world.center(), self.viewport.center(), scale, self.state.rotation())
    }

    /// Returns to the configured initial placement and cancels any drag.
    pub fn reset(&mut self) {
        self.state = self.home.clone();
        self.pan_anchor = None;
    }

    // ── persistence ───────────────────────────────────────────────────────

    pub fn snapshot(&self) -> CameraSnapshot {
        CameraSnapshot::from(&self.state)
    }

    /// Validated like the setters; a bad snapshot leaves the camera unchanged.
    pub fn restore(&mut self, snapshot: CameraSnapshot) -> Result<(), CameraError> {
        self.state.set_parts(snapshot.offset, snapshot.scale, snapshot.rotation)
    }
}
