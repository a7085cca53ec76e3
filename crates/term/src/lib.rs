//! Terminal output module.
//!
//! Takes the rasterizer's color buffer to the screen. Frames are composed
//! into text, prefixed with a cursor-home sequence and written in one go.
//!
//! - [`compose`]: color buffer to newline-delimited text
//! - [`renderer`]: crossterm-backed writer with raw-mode enter/exit
//! - [`pacer`]: frame interval bookkeeping
//! - [`run`]: the frame loop

pub mod compose;
pub mod pacer;
pub mod renderer;
pub mod run;

pub use ascii_cube_core as core;
pub use ascii_cube_types as types;

pub use compose::{compose, compose_into};
pub use pacer::FramePacer;
pub use renderer::{
    encode_frame_into, CursorHome, TerminalMode, TerminalRenderer, COOKED_LINE_BREAK, RAW_LINE_BREAK,
};
pub use run::run_frames;
