use crate::coords::Vec2;

use super::CameraError;

/// Magnitude bounds for zoom operations.
///
/// Clamping works per axis on `|scale|` and keeps the sign, so a flipped axis
/// stays flipped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScaleLimits {
    min: f32,
    max: f32,
}

impl ScaleLimits {
    /// Requires `0 < min <= max`, both finite.
    pub fn new(min: f32, max: f32) -> Result<Self, CameraError> {
        if !(min.is_finite() && max.is_finite()) {
            return Err(CameraError::invalid("scale_limits", "bounds must be finite"));
        }
        if min <= 0.0 || min > max {
            return Err(CameraError::invalid("scale_limits", "expected 0 < min <= max"));
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> f32 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    #[inline]
    pub fn clamp(&self, scale: Vec2) -> Vec2 {
        Vec2::new(self.clamp_axis(scale.x), self.clamp_axis(scale.y))
    }

    #[inline]
    fn clamp_axis(&self, v: f32) -> f32 {
        v.abs().clamp(self.min, self.max).copysign(v)
    }
}

/// Initial camera placement and zoom policy.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// World point shown at the screen origin.
    pub offset: Vec2,

    /// Pixels per world unit, per axis.
    pub scale: Vec2,

    /// Radians.
    pub rotation: f32,

    /// Applied by zoom operations only; explicit `set_scale` calls bypass it.
    pub scale_limits: Option<ScaleLimits>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
            scale_limits: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_reject_inverted_or_non_positive_bounds() {
        assert!(ScaleLimits::new(2.0, 1.0).is_err());
        assert!(ScaleLimits::new(0.0, 1.0).is_err());
        assert!(ScaleLimits::new(0.5, f32::INFINITY).is_err());
        assert!(ScaleLimits::new(0.5, 0.5).is_ok());
    }

    #[test]
    fn clamp_keeps_axis_sign() {
        let limits = ScaleLimits::new(0.5, 4.0).unwrap();
        assert_eq!(limits.clamp(Vec2::new(-10.0, 0.1)), Vec2::new(-4.0, 0.5));
        assert_eq!(limits.clamp(Vec2::new(2.0, -1.0)), Vec2::new(2.0, -1.0));
    }
}
