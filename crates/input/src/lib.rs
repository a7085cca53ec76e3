//! Stop handling.
//!
//! The renderer takes no input apart from the request to stop. That request
//! arrives two ways:
//!
//! - as a signal (SIGINT/SIGTERM), caught by [`StopFlag::install_signal_handler`]
//! - as a Ctrl+C key event while the terminal is in raw mode, read through
//!   `crossterm`
//!
//! [`InterruptWatch`] waits on both between frames.

pub mod map;
pub mod stop;
pub mod watch;

pub use map::{is_stop_event, should_stop};
pub use stop::StopFlag;
pub use watch::InterruptWatch;
