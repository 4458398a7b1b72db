use crate::coords::{Vec2, Viewport};
use crate::paint::Color;

/// Opaque handle to a CPU-side sprite owned by the renderer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SpriteId(pub u32);

/// Opaque handle to a GPU-resident decal owned by the renderer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DecalId(pub u32);

/// Drawing capabilities of a rasterizing backend, in screen pixels.
///
/// Implementations know nothing about cameras; [`WorldDraw`](crate::world::WorldDraw)
/// converts world-space arguments before calling in. Rect primitives are
/// axis-aligned on screen.
pub trait Renderer {
    /// Current drawable size in pixels.
    fn screen_size(&self) -> Viewport;

    fn draw_line(&mut self, p1: Vec2, p2: Vec2, color: Color);

    fn draw_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn draw_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color);
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color);

    /// `scale` multiplies the sprite's pixel size uniformly.
    fn draw_sprite(&mut self, pos: Vec2, sprite: SpriteId, scale: f32);

    /// Draws the `src_size` region at `src_offset` (sprite pixels).
    fn draw_partial_sprite(&mut self, pos: Vec2, sprite: SpriteId, src_offset: Vec2, src_size: Vec2, scale: f32);

    fn draw_decal(&mut self, pos: Vec2, decal: DecalId, scale: Vec2, tint: Color);

    /// Rotates by `angle` radians about `center`, given in decal pixels;
    /// `pos` is where `center` lands on screen.
    fn draw_rotated_decal(&mut self, pos: Vec2, decal: DecalId, angle: f32, center: Vec2, scale: Vec2, tint: Color);

    /// Maps the decal's corners (top-left, top-right, bottom-right, bottom-left)
    /// onto `corners`.
    fn draw_warped_decal(&mut self, decal: DecalId, corners: [Vec2; 4], tint: Color);

    fn draw_string_decal(&mut self, pos: Vec2, text: &str, tint: Color, scale: Vec2);

    fn draw_string(&mut self, pos: Vec2, text: &str, color: Color, scale: f32);
}
