//! The frame loop.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::core::Rasterizer;
use crate::pacer::FramePacer;
use crate::renderer::TerminalRenderer;

/// Render frames until `wait_for_stop` reports a stop or the frame budget runs out.
///
/// Before every frame `wait_for_stop` is given the time left until that
/// frame is due and should return `true` once the user asked to stop. No
/// frame is drawn after that. Returns the number of frames drawn.
pub fn run_frames<W: Write>(
    rasterizer: &mut Rasterizer,
    renderer: &mut TerminalRenderer<W>,
    mut wait_for_stop: impl FnMut(Duration) -> Result<bool>,
) -> Result<u64> {
    let max_frames = rasterizer.config().max_frames;
    let mut pacer = FramePacer::new(rasterizer.config().frame_interval_ms as u64);
    let start = Instant::now();
    let now_ms = || start.elapsed().as_millis() as u64;

    let mut drawn = 0u64;
    while max_frames.map_or(true, |max| drawn < max) {
        let timeout = Duration::from_millis(pacer.remaining_ms(now_ms()));
        if wait_for_stop(timeout)? {
            break;
        }

        rasterizer.render_frame();
        renderer.draw(rasterizer.buffers())?;
        pacer.mark(now_ms());
        drawn += 1;
    }

    Ok(drawn)
}
