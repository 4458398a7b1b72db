use serde::{Deserialize, Serialize};

use crate::coords::Vec2;

use super::TransformState;

/// Persisted camera placement: the three transform fields and nothing else.
///
/// Matrices are derived again on restore, so a snapshot cannot carry an
/// inconsistent pair.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSnapshot {
    pub offset: Vec2,
    pub scale: Vec2,
    pub rotation: f32,
}

impl From<&TransformState> for CameraSnapshot {
    fn from(state: &TransformState) -> Self {
        Self {
            offset: state.offset(),
            scale: state.scale(),
            rotation: state.rotation(),
        }
    }
}
