//! Point and size conversions between world and screen space.

use crate::coords::{Rect, Vec2, Viewport};

use super::{Camera, CameraError, Space, TransformState};

impl TransformState {
    /// Maps a world point onto the screen.
    ///
    /// Fails with `NonFinite` instead of handing NaN/inf to a renderer.
    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Result<Vec2, CameraError> {
        finite(self.forward().transform_point(world), Space::Screen, world)
    }

    /// Maps a screen point into the world. Exact inverse of [`world_to_screen`](Self::world_to_screen).
    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Result<Vec2, CameraError> {
        finite(self.inverse().transform_point(screen), Space::World, screen)
    }

    /// Maps a world-space extent or displacement to screen pixels (no translation).
    #[inline]
    pub fn scale_to_screen(&self, world: Vec2) -> Result<Vec2, CameraError> {
        finite(self.forward().transform_vector(world), Space::Screen, world)
    }

    /// Maps a screen-space extent or displacement to world units (no translation).
    #[inline]
    pub fn scale_to_world(&self, screen: Vec2) -> Result<Vec2, CameraError> {
        finite(self.inverse().transform_vector(screen), Space::World, screen)
    }

    /// The viewport's size expressed in world units.
    ///
    /// Under rotation this is the rotated size vector, not the AABB extent;
    /// use [`viewport_world_aabb`](Self::viewport_world_aabb) for culling.
    pub fn screen_size_in_world(&self, viewport: Viewport) -> Result<Vec2, CameraError> {
        self.scale_to_world(viewport.size())
    }

    /// World-space bounding box of everything visible in `viewport`.
    pub fn viewport_world_aabb(&self, viewport: Viewport) -> Result<Rect, CameraError> {
        let mut corners = [Vec2::ZERO; 4];
        for (dst, src) in corners.iter_mut().zip(viewport.rect().corners()) {
            *dst = self.screen_to_world(src)?;
        }

        // Four corners are never empty.
        Ok(Rect::bounding(corners).unwrap_or_default())
    }

    /// Whether a world point falls inside the visible world AABB.
    ///
    /// Conservative under rotation: points in the AABB's corners outside the
    /// rotated viewport also count as visible.
    pub fn is_point_visible(&self, viewport: Viewport, world: Vec2) -> bool {
        self.viewport_world_aabb(viewport)
            .map(|aabb| aabb.contains(world))
            .unwrap_or(false)
    }

    /// Whether any part of a world rectangle overlaps the visible world AABB.
    pub fn is_rect_visible(&self, viewport: Viewport, world: Rect) -> bool {
        self.viewport_world_aabb(viewport)
            .map(|aabb| aabb.overlaps(world))
            .unwrap_or(false)
    }
}

/// Conversions against the camera's own viewport.
impl Camera {
    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Result<Vec2, CameraError> {
        self.state().world_to_screen(world)
    }

    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Result<Vec2, CameraError> {
        self.state().screen_to_world(screen)
    }

    #[inline]
    pub fn scale_to_screen(&self, world: Vec2) -> Result<Vec2, CameraError> {
        self.state().scale_to_screen(world)
    }

    #[inline]
    pub fn scale_to_world(&self, screen: Vec2) -> Result<Vec2, CameraError> {
        self.state().scale_to_world(screen)
    }

    pub fn screen_size_in_world(&self) -> Result<Vec2, CameraError> {
        self.state().screen_size_in_world(self.viewport())
    }

    pub fn viewport_world_aabb(&self) -> Result<Rect, CameraError> {
        self.state().viewport_world_aabb(self.viewport())
    }

    pub fn is_point_visible(&self, world: Vec2) -> bool {
        self.state().is_point_visible(self.viewport(), world)
    }

    pub fn is_rect_visible(&self, world: Rect) -> bool {
        self.state().is_rect_visible(self.viewport(), world)
    }
}

#[inline]
fn finite(out: Vec2, target: Space, input: Vec2) -> Result<Vec2, CameraError> {
    if out.is_finite() {
        Ok(out)
    } else {
        Err(CameraError::NonFinite { target, input })
    }
}
