//! Renderer boundary.
//!
//! The camera never rasterizes. Backends implement [`Renderer`] in screen
//! pixels; [`RecordingRenderer`] is an in-memory backend for tests and
//! headless runs, and [`CameraUniform`] packs the camera matrix for GPU
//! backends.

mod recorder;
mod renderer;
mod uniform;

pub use recorder::{DrawCall, RecordingRenderer};
pub use renderer::{DecalId, Renderer, SpriteId};
pub use uniform::CameraUniform;
