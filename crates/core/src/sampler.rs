//! Parametric sampling of the cube faces.

use crate::config::RenderConfig;
use crate::types::{Face, Vec3, FACES};

/// Walks the `[-w, w)` parameter grid and yields one point per face per grid pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSampler {
    half_width: f64,
    step: f64,
    count: usize,
}

impl SurfaceSampler {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            half_width: config.cube_width,
            step: config.increment_speed,
            count: config.samples_per_axis(),
        }
    }

    /// Grid values per axis.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Samples produced per frame.
    pub fn samples_per_frame(&self) -> usize {
        self.count * self.count * FACES.len()
    }

    /// The k-th grid value, `-w + k * step`.
    #[inline(always)]
    pub fn grid_value(&self, k: usize) -> f64 {
        -self.half_width + k as f64 * self.step
    }

    /// Visit every surface sample of every face.
    ///
    /// `u` is the outer loop, `v` the inner one, and faces follow [`FACES`]
    /// order for each pair.
    pub fn for_each(&self, mut f: impl FnMut(Vec3, u8)) {
        for i in 0..self.count {
            let u = self.grid_value(i);
            for j in 0..self.count {
                let v = self.grid_value(j);
                for face in &FACES {
                    f(face.point(u, v, self.half_width), face.glyph);
                }
            }
        }
    }

    /// Visit the samples of a single face.
    pub fn for_each_on(&self, face: &Face, mut f: impl FnMut(Vec3)) {
        for i in 0..self.count {
            let u = self.grid_value(i);
            for j in 0..self.count {
                f(face.point(u, self.grid_value(j), self.half_width));
            }
        }
    }
}
