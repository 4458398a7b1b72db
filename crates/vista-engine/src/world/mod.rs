//! World-space drawing.
//!
//! [`WorldDraw`] is the only camera-aware drawing layer: it owns all rescaling
//! of positions and sizes so that renderers stay in plain screen pixels.

mod draw;

pub use draw::WorldDraw;
