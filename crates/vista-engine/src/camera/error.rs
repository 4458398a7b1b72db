use std::fmt;

use crate::coords::Vec2;

/// Which coordinate space a failed conversion was producing.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Space {
    World,
    Screen,
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Space::World => f.write_str("world"),
            Space::Screen => f.write_str("screen"),
        }
    }
}

/// Errors reported by camera mutations and conversions.
///
/// A failed mutation never changes the camera; a failed conversion has no
/// state to change.
#[derive(Debug, Clone, PartialEq)]
pub enum CameraError {
    /// A mutation was given a value that would make the transform non-invertible
    /// or non-finite.
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },

    /// A conversion into `target` space produced (or was given) a non-finite value.
    NonFinite { target: Space, input: Vec2 },
}

impl CameraError {
    pub(crate) fn invalid(name: &'static str, reason: &'static str) -> Self {
        Self::InvalidParameter { name, reason }
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { name, reason } => {
                write!(f, "invalid camera parameter `{name}`: {reason}")
            }
            Self::NonFinite { target, input } => {
                write!(f, "non-finite {target}-space result for input ({}, {})", input.x, input.y)
            }
        }
    }
}

impl std::error::Error for CameraError {}
