//! Rotation state and the x/y/z rotation transform.

use crate::types::{Vec3, ROTATION_STEP};

/// Current rotation angles in radians. Only ever increases.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Advance by one frame's worth of rotation.
    pub fn advance(&mut self) {
        self.x += ROTATION_STEP.x;
        self.y += ROTATION_STEP.y;
        self.z += ROTATION_STEP.z;
    }

    /// Precompute sines and cosines for the current angles.
    pub fn rotation(&self) -> Rotation {
        Rotation {
            x: self.x.sin_cos(),
            y: self.y.sin_cos(),
            z: self.z.sin_cos(),
        }
    }
}

/// `Rx · Ry · Rz` for a fixed set of angles, stored as `(sin, cos)` per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    x: (f64, f64),
    y: (f64, f64),
    z: (f64, f64),
}

impl Rotation {
    pub const IDENTITY: Rotation = Rotation {
        x: (0.0, 1.0),
        y: (0.0, 1.0),
        z: (0.0, 1.0),
    };

    /// Rotate `p` about z, then y, then x.
    ///
    /// The order is part of the look of the animation; do not reorder.
    #[inline(always)]
    pub fn apply(&self, p: Vec3) -> Vec3 {
        let (sz, cz) = self.z;
        let x1 = cz * p.x - sz * p.y;
        let y1 = sz * p.x + cz * p.y;
        let z1 = p.z;

        let (sy, cy) = self.y;
        let x2 = cy * x1 + sy * z1;
        let y2 = y1;
        let z2 = -sy * x1 + cy * z1;

        let (sx, cx) = self.x;
        Vec3::new(x2, cx * y2 - sx * z2, sx * y2 + cx * z2)
    }
}

/// Rotate a single point by `state`.
pub fn rotate(p: Vec3, state: &RotationState) -> Vec3 {
    state.rotation().apply(p)
}
