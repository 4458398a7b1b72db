use bytemuck::{Pod, Zeroable};

use crate::camera::{CameraError, TransformState};
use crate::coords::{Affine2, Viewport};

/// World → clip-space matrix for backends that transform on the GPU.
///
/// Layout matches WGSL `mat3x3<f32>` in a uniform buffer: three columns, each
/// padded to 16 bytes. Clip space is +Y up, so the pixel → NDC step flips Y.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub columns: [[f32; 4]; 3],
}

impl CameraUniform {
    /// Combines the camera's forward matrix with the pixel → NDC mapping for `viewport`.
    pub fn new(state: &TransformState, viewport: Viewport) -> Result<Self, CameraError> {
        if !viewport.is_valid() {
            return Err(CameraError::InvalidParameter {
                name: "viewport",
                reason: "must have positive finite size",
            });
        }

        let to_ndc = Affine2::new(
            2.0 / viewport.width,
            0.0,
            0.0,
            -2.0 / viewport.height,
            -1.0,
            1.0,
        );
        Ok(Self::from_affine(&(to_ndc * *state.forward())))
    }

    pub fn from_affine(m: &Affine2) -> Self {
        Self {
            columns: [
                [m.a, m.c, 0.0, 0.0],
                [m.b, m.d, 0.0, 0.0],
                [m.tx, m.ty, 1.0, 0.0],
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    fn apply(u: &CameraUniform, p: Vec2) -> Vec2 {
        let [c0, c1, c2] = u.columns;
        Vec2::new(
            c0[0] * p.x + c1[0] * p.y + c2[0],
            c0[1] * p.x + c1[1] * p.y + c2[1],
        )
    }

    #[test]
    fn layout_is_three_padded_columns() {
        let u = CameraUniform::from_affine(&Affine2::IDENTITY);
        assert_eq!(bytemuck::bytes_of(&u).len(), 48);
    }

    #[test]
    fn viewport_corners_land_on_clip_corners() {
        let state = TransformState::from_parts(Vec2::new(100.0, 50.0), Vec2::new(2.0, 2.0), 0.0).unwrap();
        let u = CameraUniform::new(&state, Viewport::new(400.0, 200.0)).unwrap();

        // World (100, 50) is the screen origin, i.e. the top-left clip corner.
        let tl = apply(&u, Vec2::new(100.0, 50.0));
        assert!((tl.x + 1.0).abs() < 1e-5 && (tl.y - 1.0).abs() < 1e-5);

        // World (300, 150) is screen (400, 200), the bottom-right clip corner.
        let br = apply(&u, Vec2::new(300.0, 150.0));
        assert!((br.x - 1.0).abs() < 1e-5 && (br.y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn degenerate_viewport_is_rejected() {
        assert!(CameraUniform::new(&TransformState::new(), Viewport::new(0.0, 10.0)).is_err());
    }
}
