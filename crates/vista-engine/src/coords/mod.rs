//! Geometry types shared by the camera, the draw adapter and renderers.
//!
//! Screen space:
//! - pixels
//! - origin top-left
//! - +X right, +Y down
//!
//! World space is whatever the application reasons in; the camera maps it onto
//! screen space with an [`Affine2`].

mod affine;
mod rect;
mod vec2;
mod viewport;

pub use affine::Affine2;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
