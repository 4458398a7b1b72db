use crate::coords::{Vec2, Viewport};
use crate::paint::Color;

use super::{DecalId, Renderer, SpriteId};

/// One recorded renderer call, arguments as received (screen space).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Line { p1: Vec2, p2: Vec2, color: Color },
    Rect { pos: Vec2, size: Vec2, color: Color, filled: bool },
    Circle { center: Vec2, radius: f32, color: Color, filled: bool },
    Triangle { points: [Vec2; 3], color: Color, filled: bool },
    Sprite { pos: Vec2, sprite: SpriteId, scale: f32 },
    PartialSprite { pos: Vec2, sprite: SpriteId, src_offset: Vec2, src_size: Vec2, scale: f32 },
    Decal { pos: Vec2, decal: DecalId, scale: Vec2, tint: Color },
    RotatedDecal { pos: Vec2, decal: DecalId, angle: f32, center: Vec2, scale: Vec2, tint: Color },
    WarpedDecal { decal: DecalId, corners: [Vec2; 4], tint: Color },
    StringDecal { pos: Vec2, text: String, tint: Color, scale: Vec2 },
    String { pos: Vec2, text: String, color: Color, scale: f32 },
}

/// Renderer that records calls instead of rasterizing.
///
/// Lets camera-aware drawing be checked end to end without a GPU, and is the
/// backend the headless demo uses.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    viewport: Viewport,
    calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, calls: Vec::new() }
    }

    /// Calls in the order they were made.
    #[inline]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Clears recorded calls. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Hands over the recorded calls, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn set_screen_size(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[inline]
    fn push(&mut self, call: DrawCall) {
        log::trace!("recorded {call:?}");
        self.calls.push(call);
    }
}

impl Renderer for RecordingRenderer {
    fn screen_size(&self) -> Viewport {
        self.viewport
    }

    fn draw_line(&mut self, p1: Vec2, p2: Vec2, color: Color) {
        self.push(DrawCall::Line { p1, p2, color });
    }

    fn draw_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.push(DrawCall::Rect { pos, size, color, filled: false });
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.push(DrawCall::Rect { pos, size, color, filled: true });
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(DrawCall::Circle { center, radius, color, filled: false });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(DrawCall::Circle { center, radius, color, filled: true });
    }

    fn draw_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.push(DrawCall::Triangle { points: [a, b, c], color, filled: false });
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.push(DrawCall::Triangle { points: [a, b, c], color, filled: true });
    }

    fn draw_sprite(&mut self, pos: Vec2, sprite: SpriteId, scale: f32) {
        self.push(DrawCall::Sprite { pos, sprite, scale });
    }

    fn draw_partial_sprite(&mut self, pos: Vec2, sprite: SpriteId, src_offset: Vec2, src_size: Vec2, scale: f32) {
        self.push(DrawCall::PartialSprite { pos, sprite, src_offset, src_size, scale });
    }

    fn draw_decal(&mut self, pos: Vec2, decal: DecalId, scale: Vec2, tint: Color) {
        self.push(DrawCall::Decal { pos, decal, scale, tint });
    }

    fn draw_rotated_decal(&mut self, pos: Vec2, decal: DecalId, angle: f32, center: Vec2, scale: Vec2, tint: Color) {
        self.push(DrawCall::RotatedDecal { pos, decal, angle, center, scale, tint });
    }

    fn draw_warped_decal(&mut self, decal: DecalId, corners: [Vec2; 4], tint: Color) {
        self.push(DrawCall::WarpedDecal { decal, corners, tint });
    }

    fn draw_string_decal(&mut self, pos: Vec2, text: &str, tint: Color, scale: Vec2) {
        self.push(DrawCall::StringDecal { pos, text: text.to_owned(), tint, scale });
    }

    fn draw_string(&mut self, pos: Vec2, text: &str, color: Color, scale: f32) {
        self.push(DrawCall::String { pos, text: text.to_owned(), color, scale });
    }
}
