//! Core types module - shared geometry and constants
//!
//! This module defines the plain data used throughout the renderer. Everything
//! here is free of I/O and external dependencies so it can be shared by the
//! rasterizer, the terminal layer and the tests alike.
//!
//! # Default Scene
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_CUBE_WIDTH` | 10 | Cube half-width in world units |
//! | `DEFAULT_SCREEN_WIDTH` | 40 | Grid width in terminal columns |
//! | `DEFAULT_SCREEN_HEIGHT` | 20 | Grid height in terminal rows |
//! | `DEFAULT_BACKGROUND` | `.` | Glyph for cells no face covers |
//! | `DEFAULT_DISTANCE` | 100 | Camera distance added to rotated z |
//! | `DEFAULT_HORIZONTAL_OFFSET` | 0 | Shift of the screen center in columns |
//! | `DEFAULT_K1` | 40 | Projection scale factor |
//! | `DEFAULT_INCREMENT` | 1 | Surface sampling step |
//! | `TICK_MS` | 16 | Default frame interval (~60 FPS) |
//!
//! # Rotation
//!
//! Every frame advances the angles by `ROTATION_STEP` = (0.05, 0.05, 0.01)
//! radians around x, y and z.
//!
//! # Faces
//!
//! The cube is never stored as a mesh. [`FACES`] describes each face as a
//! plane with one fixed axis plus two parametric axes:
//!
//! ```
//! use ascii_cube_types::{Vec3, FACES};
//!
//! let face = &FACES[0];
//! assert_eq!(face.glyph, b'@');
//! assert_eq!(face.point(1.0, 2.0, 10.0), Vec3::new(1.0, 2.0, -10.0));
//! ```

/// Default cube half-width.
pub const DEFAULT_CUBE_WIDTH: f64 = 10.0;

/// Default grid width in terminal columns.
pub const DEFAULT_SCREEN_WIDTH: u16 = 40;

/// Default grid height in terminal rows.
pub const DEFAULT_SCREEN_HEIGHT: u16 = 20;

/// Default background glyph.
pub const DEFAULT_BACKGROUND: u8 = b'.';

/// Default camera distance.
pub const DEFAULT_DISTANCE: f64 = 100.0;

/// Default horizontal offset of the screen center.
pub const DEFAULT_HORIZONTAL_OFFSET: i32 = 0;

/// Default projection scale factor.
pub const DEFAULT_K1: f64 = 40.0;

/// Default surface sampling step.
pub const DEFAULT_INCREMENT: f64 = 1.0;

/// Default frame interval in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Per-frame rotation advance in radians, as (x, y, z).
pub const ROTATION_STEP: Vec3 = Vec3::new(0.05, 0.05, 0.01);

/// A point or direction in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }
}

/// World axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Direction along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Pos,
    Neg,
}

impl Sign {
    #[inline(always)]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Sign::Pos => value,
            Sign::Neg => -value,
        }
    }
}

/// One planar face of the cube.
///
/// The face lies on `fixed_axis = ±half_width`. The grid parameters `u` and
/// `v` are written, with their signs, into the two remaining axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub name: &'static str,
    pub glyph: u8,
    pub fixed: (Axis, Sign),
    pub u: (Axis, Sign),
    pub v: (Axis, Sign),
}

impl Face {
    /// Surface point for grid parameters `(u, v)` on a cube of `half_width`.
    #[inline]
    pub fn point(&self, u: f64, v: f64, half_width: f64) -> Vec3 {
        let mut p = Vec3::default();
        p.set(self.fixed.0, self.fixed.1.apply(half_width));
        p.set(self.u.0, self.u.1.apply(u));
        p.set(self.v.0, self.v.1.apply(v));
        p
    }
}

/// The six cube faces, in sampling order.
///
/// Order matters: when two samples tie on depth the earlier one is kept.
pub const FACES: [Face; 6] = [
    Face {
        name: "-z",
        glyph: b'@',
        fixed: (Axis::Z, Sign::Neg),
        u: (Axis::X, Sign::Pos),
        v: (Axis::Y, Sign::Pos),
    },
    Face {
        name: "+x",
        glyph: b'$',
        fixed: (Axis::X, Sign::Pos),
        u: (Axis::Z, Sign::Pos),
        v: (Axis::Y, Sign::Pos),
    },
    Face {
        name: "-x",
        glyph: b'~',
        fixed: (Axis::X, Sign::Neg),
        u: (Axis::Z, Sign::Neg),
        v: (Axis::Y, Sign::Pos),
    },
    Face {
        name: "+z",
        glyph: b'#',
        fixed: (Axis::Z, Sign::Pos),
        u: (Axis::X, Sign::Neg),
        v: (Axis::Y, Sign::Pos),
    },
    Face {
        name: "-y",
        glyph: b';',
        fixed: (Axis::Y, Sign::Neg),
        u: (Axis::X, Sign::Pos),
        v: (Axis::Z, Sign::Neg),
    },
    Face {
        name: "+y",
        glyph: b'+',
        fixed: (Axis::Y, Sign::Pos),
        u: (Axis::X, Sign::Pos),
        v: (Axis::Z, Sign::Pos),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_points_match_parametric_planes() {
        let (u, v, w) = (3.0, -4.0, 10.0);
        let points: Vec<Vec3> = FACES.iter().map(|f| f.point(u, v, w)).collect();
        assert_eq!(
            points,
            vec![
                Vec3::new(u, v, -w),
                Vec3::new(w, v, u),
                Vec3::new(-w, v, -u),
                Vec3::new(-u, v, w),
                Vec3::new(u, -w, -v),
                Vec3::new(u, w, v),
            ]
        );
    }

    #[test]
    fn faces_have_distinct_glyphs_and_planes() {
        let glyphs: Vec<u8> = FACES.iter().map(|f| f.glyph).collect();
        assert_eq!(glyphs, b"@$~#;+".to_vec());

        for (i, a) in FACES.iter().enumerate() {
            for b in &FACES[i + 1..] {
                assert_ne!(a.fixed, b.fixed, "{} and {} share a plane", a.name, b.name);
            }
            assert_ne!(a.fixed.0, a.u.0);
            assert_ne!(a.fixed.0, a.v.0);
            assert_ne!(a.u.0, a.v.0);
        }
    }

    #[test]
    fn vec3_axis_access() {
        let mut p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(p.get(Axis::Y), 2.0);
        p.set(Axis::Z, -7.0);
        assert_eq!(p, Vec3::new(1.0, 2.0, -7.0));
    }
}
