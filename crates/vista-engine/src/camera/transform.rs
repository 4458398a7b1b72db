use crate::coords::{Affine2, Vec2};

use super::CameraError;

/// Camera offset/scale/rotation plus the two matrices derived from them.
///
/// Mapping:
///
/// ```text
/// screen = R(rotation) · S(scale) · (world − offset)
/// world  = offset + S(1/scale) · R(−rotation) · screen
/// ```
///
/// so `offset` is the world point that lands on the screen origin.
///
/// Fields are private: every setter validates, rebuilds both matrices, and
/// only then commits. A failed setter leaves the state untouched, and a
/// reader can never see matrices that disagree with the fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformState {
    offset: Vec2,
    scale: Vec2,
    rotation: f32,

    forward: Affine2,
    inverse: Affine2,
}

impl TransformState {
    /// Identity transform: world and screen coincide.
    pub fn new() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
            forward: Affine2::IDENTITY,
            inverse: Affine2::IDENTITY,
        }
    }

    pub fn from_parts(offset: Vec2, scale: Vec2, rotation: f32) -> Result<Self, CameraError> {
        let mut state = Self::new();
        state.set_parts(offset, scale, rotation)?;
        Ok(state)
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    #[inline]
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Rotation in radians, as stored (not normalized).
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// World → screen matrix.
    #[inline]
    pub fn forward(&self) -> &Affine2 {
        &self.forward
    }

    /// Screen → world matrix.
    #[inline]
    pub fn inverse(&self) -> &Affine2 {
        &self.inverse
    }

    pub fn set_offset(&mut self, offset: Vec2) -> Result<(), CameraError> {
        self.set_parts(offset, self.scale, self.rotation)
    }

    /// Fails with `InvalidParameter` if either axis is zero or non-finite.
    pub fn set_scale(&mut self, scale: Vec2) -> Result<(), CameraError> {
        self.set_parts(self.offset, scale, self.rotation)
    }

    pub fn set_rotation(&mut self, rotation: f32) -> Result<(), CameraError> {
        self.set_parts(self.offset, self.scale, rotation)
    }

    /// Replaces all three fields at once.
    pub fn set_parts(&mut self, offset: Vec2, scale: Vec2, rotation: f32) -> Result<(), CameraError> {
        let (forward, inverse) = build_matrices(offset, scale, rotation)?;

        self.offset = offset;
        self.scale = scale;
        self.rotation = rotation;
        self.forward = forward;
        self.inverse = inverse;
        Ok(())
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejects zero, non-finite, and subnormal-enough-to-overflow scales.
pub(crate) fn validate_scale(scale: Vec2) -> Result<(), CameraError> {
    if !scale.is_finite() {
        return Err(CameraError::invalid("scale", "must be finite"));
    }
    if scale.x == 0.0 || scale.y == 0.0 {
        return Err(CameraError::invalid("scale", "must be non-zero on both axes"));
    }
    if !(1.0 / scale.x).is_finite() || !(1.0 / scale.y).is_finite() {
        return Err(CameraError::invalid("scale", "too small to invert"));
    }
    Ok(())
}

fn build_matrices(offset: Vec2, scale: Vec2, rotation: f32) -> Result<(Affine2, Affine2), CameraError> {
    if !offset.is_finite() {
        return Err(CameraError::invalid("offset", "must be finite"));
    }
    if !rotation.is_finite() {
        return Err(CameraError::invalid("rotation", "must be finite"));
    }
    validate_scale(scale)?;

    let (sin, cos) = rotation.sin_cos();

    // R · S
    let (a, b) = (cos * scale.x, -sin * scale.y);
    let (c, d) = (sin * scale.x, cos * scale.y);
    let forward = Affine2::new(
        a,
        b,
        c,
        d,
        -(a * offset.x + b * offset.y),
        -(c * offset.x + d * offset.y),
    );

    // S⁻¹ · R⁻¹, then translate back by the offset.
    let inverse = Affine2::new(
        cos / scale.x,
        sin / scale.x,
        -sin / scale.y,
        cos / scale.y,
        offset.x,
        offset.y,
    );

    if !forward.is_finite() || !inverse.is_finite() {
        return Err(CameraError::invalid("scale", "transform would overflow"));
    }

    Ok((forward, inverse))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn new_is_identity() {
        let s = TransformState::new();
        assert_eq!(s.offset(), Vec2::ZERO);
        assert_eq!(s.scale(), Vec2::ONE);
        assert_eq!(s.rotation(), 0.0);
        assert_eq!(*s.forward(), Affine2::IDENTITY);
        assert_eq!(*s.inverse(), Affine2::IDENTITY);
    }

    // ── matrices ──────────────────────────────────────────────────────────

    #[test]
    fn matrices_are_mutual_inverses() {
        let s = TransformState::from_parts(Vec2::new(-40.0, 12.0), Vec2::new(2.5, 0.75), 1.1).unwrap();
        let p = Vec2::new(123.0, -45.0);

        assert!(close(s.inverse().transform_point(s.forward().transform_point(p)), p));
        assert!(close(s.forward().transform_point(s.inverse().transform_point(p)), p));
    }

    #[test]
    fn forward_matches_reference_composition() {
        let (offset, scale, rot) = (Vec2::new(3.0, -7.0), Vec2::new(2.0, 4.0), 0.4);
        let s = TransformState::from_parts(offset, scale, rot).unwrap();
        let reference =
            Affine2::rotation(rot) * Affine2::scale(scale) * Affine2::translation(-offset);

        let p = Vec2::new(11.0, 5.0);
        assert!(close(s.forward().transform_point(p), reference.transform_point(p)));
        assert!(close(
            s.inverse().transform_point(p),
            reference.inverse().unwrap().transform_point(p)
        ));
    }

    #[test]
    fn offset_maps_to_screen_origin() {
        let s = TransformState::from_parts(Vec2::new(5.0, 9.0), Vec2::new(3.0, 3.0), 0.8).unwrap();
        assert!(close(s.forward().transform_point(Vec2::new(5.0, 9.0)), Vec2::ZERO));
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn zero_scale_axis_is_rejected_and_state_kept() {
        let mut s = TransformState::from_parts(Vec2::new(1.0, 2.0), Vec2::new(2.0, 2.0), 0.3).unwrap();
        let before = s.clone();

        let err = s.set_scale(Vec2::new(0.0, 1.0)).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert_eq!(s, before);

        let err = s.set_scale(Vec2::new(1.0, 0.0)).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert_eq!(s, before);
    }

    #[test]
    fn non_finite_fields_are_rejected() {
        let mut s = TransformState::new();
        assert!(s.set_scale(Vec2::new(f32::INFINITY, 1.0)).is_err());
        assert!(s.set_scale(Vec2::new(1.0, f32::NAN)).is_err());
        assert!(s.set_offset(Vec2::new(f32::NAN, 0.0)).is_err());
        assert!(s.set_rotation(f32::INFINITY).is_err());
        assert!(s.set_scale(Vec2::new(1e-45, 1.0)).is_err());
        assert_eq!(s, TransformState::new());
    }

    #[test]
    fn negative_scale_is_a_valid_flip() {
        let mut s = TransformState::new();
        s.set_scale(Vec2::new(-1.0, 1.0)).unwrap();
        assert!(close(s.forward().transform_point(Vec2::new(4.0, 4.0)), Vec2::new(-4.0, 4.0)));
    }
}
