//! Waiting for the stop request.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::map::is_stop_event;
use crate::stop::StopFlag;

/// Longest single wait, so a raised [`StopFlag`] is noticed promptly.
const POLL_SLICE: Duration = Duration::from_millis(10);

/// Waits between frames for Ctrl+C keys or a raised [`StopFlag`].
///
/// Key events are only read when the terminal is in raw mode. Otherwise
/// Ctrl+C is a signal and reaches us through the flag alone.
#[derive(Debug)]
pub struct InterruptWatch {
    flag: StopFlag,
    read_keys: bool,
}

impl InterruptWatch {
    pub fn new(flag: StopFlag, read_keys: bool) -> Self {
        Self { flag, read_keys }
    }

    /// Wait up to `timeout` for a stop request.
    ///
    /// Returns as soon as one arrives. A zero timeout only drains what is
    /// already queued.
    pub fn wait(&mut self, timeout: Duration) -> Result<bool> {
        if self.read_keys {
            self.wait_on(timeout, |slice| {
                if event::poll(slice)? {
                    Ok(Some(event::read()?))
                } else {
                    Ok(None)
                }
            })
        } else {
            self.wait_on(timeout, |slice| {
                thread::sleep(slice);
                Ok(None)
            })
        }
    }

    /// Wait with `next_event` as the event source.
    ///
    /// `next_event` blocks for at most the given slice and returns the event
    /// it saw, if any. Ctrl+C raises the flag so later waits stop at once.
    pub fn wait_on(
        &mut self,
        timeout: Duration,
        mut next_event: impl FnMut(Duration) -> Result<Option<Event>>,
    ) -> Result<bool> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.flag.is_requested() {
                return Ok(true);
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            match next_event(remaining.min(POLL_SLICE)) {
                Ok(Some(ev)) if is_stop_event(&ev) => self.flag.request(),
                Ok(Some(_)) => {}
                Ok(None) if remaining.is_zero() => return Ok(self.flag.is_requested()),
                Ok(None) => {}
                // A signal can interrupt the poll; that is a stop, not a failure.
                Err(_) if self.flag.is_requested() => return Ok(true),
                Err(e) => return Err(e),
            }
        }
    }
}
