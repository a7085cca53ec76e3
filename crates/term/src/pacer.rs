/// Frame pacing on millisecond timestamps.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval_ms: u64,
    last_frame_ms: Option<u64>,
}

impl FramePacer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_frame_ms: None,
        }
    }

    /// Record that a frame was drawn at `now_ms`.
    pub fn mark(&mut self, now_ms: u64) {
        self.last_frame_ms = Some(now_ms);
    }

    /// Milliseconds to wait before the next frame is due.
    ///
    /// - Before the first frame: 0.
    /// - With `interval_ms == 0`: always 0 (unthrottled).
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        match self.last_frame_ms {
            None => 0,
            Some(last) => self
                .interval_ms
                .saturating_sub(now_ms.saturating_sub(last)),
        }
    }
}
