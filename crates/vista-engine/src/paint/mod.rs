//! Paint model handed to renderers alongside geometry.

mod color;

pub use color::Color;
