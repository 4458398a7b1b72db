use crate::camera::{Camera, CameraError};
use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::render::{DecalId, Renderer, SpriteId};

/// World-space drawing through a camera.
///
/// Each call converts positions with the camera's forward transform, scales
/// sizes by the camera's scale, and forwards to the wrapped [`Renderer`].
///
/// Caveats:
/// - primitives that take a scalar size (circle radius, sprite and string
///   scale) use the larger scale axis, so non-uniform zoom does not stretch them
/// - sprites and strings ignore camera rotation; decals follow it
/// - a primitive whose screen-space arguments would be non-finite is skipped
pub struct WorldDraw<'a, R: Renderer + ?Sized> {
    camera: &'a Camera,
    renderer: &'a mut R,
}

impl Camera {
    /// Starts world-space drawing into `renderer` for this frame.
    ///
    /// Culling on the returned adapter uses the renderer's screen size, not
    /// [`Camera::viewport`].
    pub fn draw<'a, R: Renderer + ?Sized>(&'a self, renderer: &'a mut R) -> WorldDraw<'a, R> {
        let screen = renderer.screen_size();
        if screen != self.viewport() {
            log::debug!(
                "camera viewport {:?} differs from renderer screen {screen:?}; missing set_viewport on resize?",
                self.viewport()
            );
        }
        WorldDraw::new(self, renderer)
    }
}

impl<'a, R: Renderer + ?Sized> WorldDraw<'a, R> {
    pub fn new(camera: &'a Camera, renderer: &'a mut R) -> Self {
        Self { camera, renderer }
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        self.camera
    }

    /// Direct access for screen-space overlays drawn in the same frame.
    #[inline]
    pub fn renderer(&mut self) -> &mut R {
        &mut *self.renderer
    }

    // ── culling ───────────────────────────────────────────────────────────

    /// World-space box visible on the renderer's current screen.
    pub fn viewport_world_aabb(&self) -> Result<Rect, CameraError> {
        self.camera
            .state()
            .viewport_world_aabb(self.renderer.screen_size())
    }

    pub fn is_rect_visible(&self, world: Rect) -> bool {
        self.camera
            .state()
            .is_rect_visible(self.renderer.screen_size(), world)
    }

    // ── primitives ────────────────────────────────────────────────────────

    pub fn draw_line(&mut self, p1: Vec2, p2: Vec2, color: Color) {
        if let (Some(p1), Some(p2)) = (self.point(p1), self.point(p2)) {
            self.renderer.draw_line(p1, p2, color);
        }
    }

    /// Outline of the world rect at `pos` with `size`.
    ///
    /// Under camera rotation the rect is no longer axis-aligned on screen and
    /// is drawn as four lines.
    pub fn draw_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        if self.camera.rotation() == 0.0 {
            if let Some(r) = self.axis_aligned(pos, size) {
                self.renderer.draw_rect(r.origin, r.size, color);
            }
            return;
        }

        if let Some([a, b, c, d]) = self.quad(Rect::from_origin_size(pos, size)) {
            self.renderer.draw_line(a, b, color);
            self.renderer.draw_line(b, c, color);
            self.renderer.draw_line(c, d, color);
            self.renderer.draw_line(d, a, color);
        }
    }

    /// Filled world rect; two triangles under camera rotation.
    pub fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        if self.camera.rotation() == 0.0 {
            if let Some(r) = self.axis_aligned(pos, size) {
                self.renderer.fill_rect(r.origin, r.size, color);
            }
            return;
        }

        if let Some([a, b, c, d]) = self.quad(Rect::from_origin_size(pos, size)) {
            self.renderer.fill_triangle(a, b, c, color);
            self.renderer.fill_triangle(a, c, d, color);
        }
    }

    pub fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if let (Some(c), Some(r)) = (self.point(center), self.scalar(radius)) {
            self.renderer.draw_circle(c, r, color);
        }
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if let (Some(c), Some(r)) = (self.point(center), self.scalar(radius)) {
            self.renderer.fill_circle(c, r, color);
        }
    }

    pub fn draw_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        if let Some([a, b, c]) = self.points([a, b, c]) {
            self.renderer.draw_triangle(a, b, c, color);
        }
    }

    pub fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        if let Some([a, b, c]) = self.points([a, b, c]) {
            self.renderer.fill_triangle(a, b, c, color);
        }
    }

    // ── sprites & text ────────────────────────────────────────────────────

    pub fn draw_sprite(&mut self, pos: Vec2, sprite: SpriteId, scale: f32) {
        if let (Some(p), Some(s)) = (self.point(pos), self.scalar(scale)) {
            self.renderer.draw_sprite(p, sprite, s);
        }
    }

    pub fn draw_partial_sprite(&mut self, pos: Vec2, sprite: SpriteId, src_offset: Vec2, src_size: Vec2, scale: f32) {
        if let (Some(p), Some(s)) = (self.point(pos), self.scalar(scale)) {
            self.renderer.draw_partial_sprite(p, sprite, src_offset, src_size, s);
        }
    }

    pub fn draw_string(&mut self, pos: Vec2, text: &str, color: Color, scale: f32) {
        if let (Some(p), Some(s)) = (self.point(pos), self.scalar(scale)) {
            self.renderer.draw_string(p, text, color, s);
        }
    }

    pub fn draw_string_decal(&mut self, pos: Vec2, text: &str, tint: Color, scale: Vec2) {
        if let (Some(p), Some(s)) = (self.point(pos), self.vector_scale(scale)) {
            self.renderer.draw_string_decal(p, text, tint, s);
        }
    }

    // ── decals ────────────────────────────────────────────────────────────

    /// Decal with its top-left corner at `pos`. Under camera rotation this is
    /// forwarded as a rotated decal pivoting on that corner.
    pub fn draw_decal(&mut self, pos: Vec2, decal: DecalId, scale: Vec2, tint: Color) {
        let (Some(p), Some(s)) = (self.point(pos), self.vector_scale(scale)) else {
            return;
        };

        let rotation = self.camera.rotation();
        if rotation == 0.0 {
            self.renderer.draw_decal(p, decal, s, tint);
        } else {
            self.renderer.draw_rotated_decal(p, decal, rotation, Vec2::ZERO, s, tint);
        }
    }

    /// Decal rotated by `angle` about `center` (decal pixels), with `center`
    /// placed at world `pos`. The camera rotation is added to `angle`.
    pub fn draw_rotated_decal(&mut self, pos: Vec2, decal: DecalId, angle: f32, center: Vec2, scale: Vec2, tint: Color) {
        if let (Some(p), Some(s)) = (self.point(pos), self.vector_scale(scale)) {
            let angle = angle + self.camera.rotation();
            self.renderer.draw_rotated_decal(p, decal, angle, center, s, tint);
        }
    }

    /// Decal stretched onto four world-space corners.
    pub fn draw_warped_decal(&mut self, decal: DecalId, corners: [Vec2; 4], tint: Color) {
        if let Some(corners) = self.points(corners) {
            self.renderer.draw_warped_decal(decal, corners, tint);
        }
    }

    // ── conversion helpers ────────────────────────────────────────────────

    fn point(&self, world: Vec2) -> Option<Vec2> {
        match self.camera.world_to_screen(world) {
            Ok(p) => Some(p),
            Err(err) => {
                log::debug!("skipping primitive: {err}");
                None
            }
        }
    }

    fn points<const N: usize>(&self, world: [Vec2; N]) -> Option<[Vec2; N]> {
        let mut out = [Vec2::ZERO; N];
        for (dst, src) in out.iter_mut().zip(world) {
            *dst = self.point(src)?;
        }
        Some(out)
    }

    fn quad(&self, world: Rect) -> Option<[Vec2; 4]> {
        self.points(world.corners())
    }

    /// Screen rect for an unrotated camera, normalized so flipped axes still
    /// give a positive size.
    fn axis_aligned(&self, pos: Vec2, size: Vec2) -> Option<Rect> {
        let origin = self.point(pos)?;
        let size = self.finite(size.mul_components(self.camera.scale()))?;
        Some(Rect::from_origin_size(origin, size).normalized())
    }

    fn scalar(&self, v: f32) -> Option<f32> {
        let scale = self.camera.scale();
        let out = v * scale.x.abs().max(scale.y.abs());
        if out.is_finite() {
            Some(out)
        } else {
            log::debug!("skipping primitive: scaled size {out} is not finite");
            None
        }
    }

    fn vector_scale(&self, v: Vec2) -> Option<Vec2> {
        self.finite(v.mul_components(self.camera.scale()))
    }

    fn finite(&self, v: Vec2) -> Option<Vec2> {
        if v.is_finite() {
            Some(v)
        } else {
            log::debug!("skipping primitive: scaled size {v:?} is not finite");
            None
        }
    }
}
