//! Color and depth buffers.

/// Row-major glyph and inverse-depth buffers sharing one indexing scheme.
///
/// Both are allocated once and overwritten in place every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffers {
    width: u16,
    height: u16,
    background: u8,
    color: Vec<u8>,
    depth: Vec<f64>,
}

impl FrameBuffers {
    pub fn new(width: u16, height: u16, background: u8) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            background,
            color: vec![background; len],
            depth: vec![0.0; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn background(&self) -> u8 {
        self.background
    }

    pub fn len(&self) -> usize {
        self.color.len()
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_empty()
    }

    /// Glyph per cell.
    pub fn color(&self) -> &[u8] {
        &self.color
    }

    /// Inverse depth per cell. 0 means nothing was drawn.
    pub fn depth(&self) -> &[f64] {
        &self.depth
    }

    /// Glyph at `(x, y)`, if inside the grid.
    pub fn glyph_at(&self, x: u16, y: u16) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.color[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Reset every cell to the background glyph and empty depth.
    pub fn clear(&mut self) {
        self.color.fill(self.background);
        self.depth.fill(0.0);
    }

    /// Depth-test a sample into cell `idx`.
    ///
    /// Writes when `ooz` is strictly nearer than what the cell holds and
    /// reports whether it did. Out-of-range indices are dropped.
    #[inline(always)]
    pub fn plot(&mut self, idx: usize, ooz: f64, glyph: u8) -> bool {
        match self.depth.get_mut(idx) {
            Some(d) if ooz > *d => {
                *d = ooz;
                self.color[idx] = glyph;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffers_are_background_and_empty() {
        let b = FrameBuffers::new(4, 3, b'.');
        assert_eq!(b.len(), 12);
        assert_eq!(b.depth().len(), 12);
        assert!(b.color().iter().all(|&c| c == b'.'));
        assert!(b.depth().iter().all(|&d| d == 0.0));
    }

    #[test]
    fn nearest_sample_wins() {
        let mut b = FrameBuffers::new(4, 3, b'.');
        assert!(b.plot(5, 0.01, b'@'));
        assert!(b.plot(5, 0.02, b'#'));
        assert!(!b.plot(5, 0.005, b'+'));
        assert_eq!(b.color()[5], b'#');
        assert_eq!(b.depth()[5], 0.02);
    }

    #[test]
    fn equal_depth_keeps_first_writer() {
        let mut b = FrameBuffers::new(2, 2, b'.');
        assert!(b.plot(0, 0.5, b'@'));
        assert!(!b.plot(0, 0.5, b'$'));
        assert_eq!(b.glyph_at(0, 0), Some(b'@'));
    }

    #[test]
    fn samples_behind_the_camera_never_land() {
        let mut b = FrameBuffers::new(2, 2, b'.');
        assert!(!b.plot(1, -0.1, b'@'));
        assert_eq!(b.color()[1], b'.');
    }

    #[test]
    fn out_of_range_plot_is_dropped() {
        let mut b = FrameBuffers::new(2, 2, b'.');
        let before = b.clone();
        assert!(!b.plot(4, 1.0, b'@'));
        assert_eq!(b, before);
    }

    #[test]
    fn clear_restores_background_without_reallocating() {
        let mut b = FrameBuffers::new(3, 2, b' ');
        b.plot(2, 0.3, b'~');
        let color_ptr = b.color().as_ptr();
        let depth_ptr = b.depth().as_ptr();
        b.clear();
        assert!(b.color().iter().all(|&c| c == b' '));
        assert!(b.depth().iter().all(|&d| d == 0.0));
        assert_eq!(b.color().as_ptr(), color_ptr);
        assert_eq!(b.depth().as_ptr(), depth_ptr);
    }

    #[test]
    fn glyph_at_bounds() {
        let b = FrameBuffers::new(3, 2, b'.');
        assert_eq!(b.glyph_at(2, 1), Some(b'.'));
        assert_eq!(b.glyph_at(3, 0), None);
        assert_eq!(b.glyph_at(0, 2), None);
    }
}
