//! World ↔ screen camera.
//!
//! - `TransformState`: offset/scale/rotation and the derived matrices
//! - conversions (`convert`): points, sizes, viewport AABB, visibility
//! - `Camera`: pan/zoom/rotate operations that keep their pivot on screen
//! - `PanZoomControls`: maps pointer input onto those operations

mod config;
mod controller;
mod convert;
mod error;
mod interaction;
mod snapshot;
mod transform;

pub use config::{CameraConfig, ScaleLimits};
pub use controller::Camera;
pub use error::{CameraError, Space};
pub use interaction::PanZoomControls;
pub use snapshot::CameraSnapshot;
pub use transform::TransformState;
