//! Perspective projection from rotated world space into grid cells.

use crate::config::RenderConfig;
use crate::types::Vec3;

/// A sample projected onto the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Column, truncated toward zero. May lie outside the grid.
    pub xp: i64,
    /// Row, truncated toward zero. May lie outside the grid.
    pub yp: i64,
    /// Inverse depth. Larger is nearer.
    pub ooz: f64,
}

/// Camera parameters resolved once from a [`RenderConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    width: i64,
    len: i64,
    center_x: f64,
    center_y: f64,
    k1: f64,
    distance: f64,
}

impl Projector {
    pub fn new(config: &RenderConfig) -> Self {
        let (center_x, center_y) = config.center();
        Self {
            width: config.screen_width as i64,
            len: config.cell_count() as i64,
            center_x,
            center_y,
            k1: config.k1,
            distance: config.distance_from_camera,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.center_x, self.center_y)
    }

    /// Project a rotated point.
    ///
    /// Returns `None` when the camera-space depth is exactly zero or the
    /// inverse depth is not finite.
    #[inline(always)]
    pub fn project(&self, p: Vec3) -> Option<Projected> {
        let z = p.z + self.distance;
        if z == 0.0 {
            return None;
        }
        let ooz = 1.0 / z;
        if !ooz.is_finite() {
            return None;
        }

        // Terminal cells are roughly twice as tall as wide.
        let xp = (self.center_x + self.k1 * ooz * p.x * 2.0) as i64;
        let yp = (self.center_y + self.k1 * ooz * p.y) as i64;
        Some(Projected { xp, yp, ooz })
    }

    /// Linear buffer index for a cell, if it falls inside the buffer.
    ///
    /// Only the linear index is checked, so an `xp` past either edge wraps
    /// onto a neighbouring row.
    #[inline(always)]
    pub fn index(&self, xp: i64, yp: i64) -> Option<usize> {
        let idx = yp.checked_mul(self.width)?.checked_add(xp)?;
        if (0..self.len).contains(&idx) {
            Some(idx as usize)
        } else {
            None
        }
    }
}
