//! Rasterizer: owns the buffers and produces one frame per call.

use anyhow::Result;

use crate::buffers::FrameBuffers;
use crate::config::RenderConfig;
use crate::projection::Projector;
use crate::rotation::{Rotation, RotationState};
use crate::sampler::SurfaceSampler;
use crate::types::Vec3;

/// Per-frame counters, reset by every [`Rasterizer::render_frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Samples that won the depth test at least momentarily.
    pub written: usize,
    /// Samples that lost the depth test.
    pub occluded: usize,
    /// Samples outside the buffer or at zero depth.
    pub dropped: usize,
}

/// Software rasterizer for the rotating cube.
#[derive(Debug, Clone)]
pub struct Rasterizer {
    config: RenderConfig,
    projector: Projector,
    sampler: SurfaceSampler,
    rotation: RotationState,
    buffers: FrameBuffers,
    frame: u64,
    stats: FrameStats,
}

impl Rasterizer {
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            projector: Projector::new(&config),
            sampler: SurfaceSampler::new(&config),
            rotation: RotationState::default(),
            buffers: FrameBuffers::new(config.screen_width, config.screen_height, config.background),
            frame: 0,
            stats: FrameStats::default(),
            config,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn buffers(&self) -> &FrameBuffers {
        &self.buffers
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: RotationState) {
        self.rotation = rotation;
    }

    /// Frames rendered so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Counters for the most recent frame.
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Clear, sample every face at the current angles, then advance the angles.
    ///
    /// This is the allocation-free hot path.
    pub fn render_frame(&mut self) {
        self.buffers.clear();
        self.draw_cube();
        self.rotation.advance();
        self.frame += 1;
    }

    /// Sample all faces into the buffers at the current angles.
    ///
    /// Does not clear first and does not advance the rotation.
    pub fn draw_cube(&mut self) {
        let rotation = self.rotation.rotation();
        let projector = self.projector;
        let buffers = &mut self.buffers;
        let mut stats = FrameStats::default();

        self.sampler.for_each(|p, glyph| {
            match plot_sample(&rotation, &projector, buffers, p, glyph) {
                Plot::Written => stats.written += 1,
                Plot::Occluded => stats.occluded += 1,
                Plot::Dropped => stats.dropped += 1,
            }
        });

        self.stats = stats;
    }

    /// Rotate, project and depth-test one surface sample.
    pub fn plot(&mut self, p: Vec3, glyph: u8) -> Plot {
        let rotation = self.rotation.rotation();
        plot_sample(&rotation, &self.projector, &mut self.buffers, p, glyph)
    }

    /// Depth-test an already projected sample at a raw linear index.
    pub fn plot_at(&mut self, idx: i64, ooz: f64, glyph: u8) -> Plot {
        if idx < 0 || idx as u64 >= self.buffers.len() as u64 {
            return Plot::Dropped;
        }
        if self.buffers.plot(idx as usize, ooz, glyph) {
            Plot::Written
        } else {
            Plot::Occluded
        }
    }
}

/// Outcome of plotting one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plot {
    Written,
    Occluded,
    Dropped,
}

#[inline(always)]
fn plot_sample(
    rotation: &Rotation,
    projector: &Projector,
    buffers: &mut FrameBuffers,
    p: Vec3,
    glyph: u8,
) -> Plot {
    let Some(hit) = projector.project(rotation.apply(p)) else {
        return Plot::Dropped;
    };
    let Some(idx) = projector.index(hit.xp, hit.yp) else {
        return Plot::Dropped;
    };
    if buffers.plot(idx, hit.ooz, glyph) {
        Plot::Written
    } else {
        Plot::Occluded
    }
}
