//! Vista engine crate.
//!
//! A 2D camera that maps a continuous world space onto screen pixels, with
//! pivot-preserving pan/zoom/rotate and a drawing adapter that lets
//! application code issue world-space draw calls to any screen-space
//! [`render::Renderer`].

pub mod camera;
pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod world;
