//! ASCII cube (workspace facade crate).
//!
//! Re-exports the member crates under `ascii_cube::{core,input,term,types}`
//! so the binary, tests and benches share one import surface.

pub use ascii_cube_core as core;
pub use ascii_cube_input as input;
pub use ascii_cube_term as term;
pub use ascii_cube_types as types;
