//! Core rendering module - pure, deterministic, and testable
//!
//! This module contains the whole cube pipeline: rotation, perspective
//! projection, depth-tested painting and surface sampling. It has **zero
//! dependencies** on the terminal, making it:
//!
//! - **Deterministic**: Same angles produce identical buffers
//! - **Testable**: Every stage can be exercised on its own
//! - **Fast**: Zero-allocation hot path once the buffers exist
//!
//! # Module Structure
//!
//! - [`config`]: Scene and camera parameters with `CUBE_*` environment overrides
//! - [`rotation`]: Rotation angles and the z-then-y-then-x transform
//! - [`projection`]: Perspective projection to grid cells
//! - [`buffers`]: Color and inverse-depth buffers with the depth test
//! - [`sampler`]: Parametric walk over the six faces
//! - [`rasterizer`]: Ties the stages together frame by frame
//!
//! # Example
//!
//! ```
//! use ascii_cube_core::{Rasterizer, RenderConfig};
//!
//! let mut r = Rasterizer::new(RenderConfig::default()).unwrap();
//! r.render_frame();
//!
//! assert_eq!(r.buffers().len(), 40 * 20);
//! assert!(r.buffers().color().iter().any(|&c| c != b'.'));
//! ```

pub mod buffers;
pub mod config;
pub mod projection;
pub mod rasterizer;
pub mod rotation;
pub mod sampler;

pub use ascii_cube_types as types;

pub use buffers::FrameBuffers;
pub use config::RenderConfig;
pub use projection::{Projected, Projector};
pub use rasterizer::{FrameStats, Plot, Rasterizer};
pub use rotation::{rotate, Rotation, RotationState};
pub use sampler::SurfaceSampler;
