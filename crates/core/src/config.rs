//! Render configuration.

use anyhow::{ensure, Result};

use crate::types::{
    DEFAULT_BACKGROUND, DEFAULT_CUBE_WIDTH, DEFAULT_DISTANCE, DEFAULT_HORIZONTAL_OFFSET,
    DEFAULT_INCREMENT, DEFAULT_K1, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, TICK_MS,
};

/// Scene, camera and loop parameters. Fixed for the lifetime of a [`Rasterizer`].
///
/// [`Rasterizer`]: crate::Rasterizer
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Cube half-width.
    pub cube_width: f64,
    pub screen_width: u16,
    pub screen_height: u16,
    /// Glyph for cells no face covers. Printable ASCII.
    pub background: u8,
    pub distance_from_camera: f64,
    /// Shift of the screen center in columns.
    pub horizontal_offset: i32,
    /// Projection scale factor.
    pub k1: f64,
    /// Surface sampling step. Smaller is denser and slower.
    pub increment_speed: f64,
    /// Wait between frames. 0 renders unthrottled.
    pub frame_interval_ms: u32,
    /// Stop on our own after this many frames.
    pub max_frames: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cube_width: DEFAULT_CUBE_WIDTH,
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            background: DEFAULT_BACKGROUND,
            distance_from_camera: DEFAULT_DISTANCE,
            horizontal_offset: DEFAULT_HORIZONTAL_OFFSET,
            k1: DEFAULT_K1,
            increment_speed: DEFAULT_INCREMENT,
            frame_interval_ms: TICK_MS,
            max_frames: None,
        }
    }
}

impl RenderConfig {
    /// Defaults overridden by `CUBE_*` environment variables.
    ///
    /// Unparseable values are reported on stderr and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RenderConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        override_with(&lookup, "CUBE_WIDTH", &mut config.cube_width);
        override_with(&lookup, "CUBE_SCREEN_WIDTH", &mut config.screen_width);
        override_with(&lookup, "CUBE_SCREEN_HEIGHT", &mut config.screen_height);
        override_with(&lookup, "CUBE_DISTANCE", &mut config.distance_from_camera);
        override_with(&lookup, "CUBE_OFFSET", &mut config.horizontal_offset);
        override_with(&lookup, "CUBE_K1", &mut config.k1);
        override_with(&lookup, "CUBE_STEP", &mut config.increment_speed);
        override_with(&lookup, "CUBE_FRAME_MS", &mut config.frame_interval_ms);

        if let Some(raw) = lookup("CUBE_BACKGROUND") {
            match raw.chars().next() {
                Some(ch) if is_printable_glyph(ch) => config.background = ch as u8,
                _ => eprintln!(
                    "[config] ignoring CUBE_BACKGROUND={:?}: not a printable ASCII glyph",
                    raw
                ),
            }
        }

        if let Some(raw) = lookup("CUBE_MAX_FRAMES") {
            match raw.trim().parse::<u64>() {
                Ok(n) => config.max_frames = Some(n),
                Err(e) => eprintln!("[config] ignoring CUBE_MAX_FRAMES={:?}: {}", raw, e),
            }
        }

        config
    }

    /// Reject configurations the rasterizer cannot run.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.screen_width > 0 && self.screen_height > 0,
            "screen must be at least 1x1 (got {}x{})",
            self.screen_width,
            self.screen_height
        );
        ensure!(
            self.cube_width.is_finite() && self.cube_width > 0.0,
            "cube width must be positive and finite (got {})",
            self.cube_width
        );
        ensure!(
            self.increment_speed.is_finite() && self.increment_speed > 0.0,
            "sampling step must be positive and finite (got {})",
            self.increment_speed
        );
        ensure!(
            self.distance_from_camera.is_finite(),
            "camera distance must be finite (got {})",
            self.distance_from_camera
        );
        ensure!(self.k1.is_finite(), "k1 must be finite (got {})", self.k1);
        ensure!(
            is_printable_glyph(self.background as char),
            "background glyph must be printable ASCII (got {:#04x})",
            self.background
        );
        Ok(())
    }

    /// Number of cells in the color and depth buffers.
    pub fn cell_count(&self) -> usize {
        (self.screen_width as usize) * (self.screen_height as usize)
    }

    /// Grid values per axis: `ceil(2 * cube_width / increment_speed)`.
    pub fn samples_per_axis(&self) -> usize {
        ((2.0 * self.cube_width) / self.increment_speed).ceil() as usize
    }

    /// Screen center in cell coordinates, as (x, y).
    pub fn center(&self) -> (f64, f64) {
        let cx = (self.screen_width / 2) as i64 + self.horizontal_offset as i64;
        let cy = (self.screen_height / 2) as i64;
        (cx as f64, cy as f64)
    }
}

fn is_printable_glyph(ch: char) -> bool {
    ch.is_ascii_graphic() || ch == ' '
}

fn override_with<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, slot: &mut T)
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    if let Some(raw) = lookup(key) {
        match raw.trim().parse::<T>() {
            Ok(v) => *slot = v,
            Err(e) => eprintln!("[config] ignoring {}={:?}: {}", key, raw, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_reference_scene() {
        let c = RenderConfig::default();
        assert_eq!(c.cube_width, 10.0);
        assert_eq!((c.screen_width, c.screen_height), (40, 20));
        assert_eq!(c.background, b'.');
        assert_eq!(c.distance_from_camera, 100.0);
        assert_eq!(c.horizontal_offset, 0);
        assert_eq!(c.k1, 40.0);
        assert_eq!(c.increment_speed, 1.0);
        assert_eq!(c.max_frames, None);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn center_uses_integer_halves_plus_offset() {
        let mut c = RenderConfig {
            screen_width: 41,
            screen_height: 21,
            ..RenderConfig::default()
        };
        assert_eq!(c.center(), (20.0, 10.0));
        c.horizontal_offset = -5;
        assert_eq!(c.center(), (15.0, 10.0));
    }

    #[test]
    fn samples_per_axis_follows_arange_length() {
        let mut c = RenderConfig::default();
        assert_eq!(c.samples_per_axis(), 20);
        c.increment_speed = 0.5;
        assert_eq!(c.samples_per_axis(), 40);
        c.increment_speed = 3.0;
        // -10, -7, -4, -1, 2, 5, 8
        assert_eq!(c.samples_per_axis(), 7);
    }

    #[test]
    fn env_overrides_apply_and_bad_values_are_ignored() {
        let c = RenderConfig::from_lookup(lookup_from(&[
            ("CUBE_SCREEN_WIDTH", "80"),
            ("CUBE_K1", " 25.5 "),
            ("CUBE_BACKGROUND", " "),
            ("CUBE_STEP", "fast"),
            ("CUBE_MAX_FRAMES", "3"),
        ]));
        assert_eq!(c.screen_width, 80);
        assert_eq!(c.k1, 25.5);
        assert_eq!(c.background, b' ');
        assert_eq!(c.increment_speed, 1.0);
        assert_eq!(c.max_frames, Some(3));
    }

    #[test]
    fn control_character_background_keeps_default() {
        for raw in ["\t", "\u{1b}", "é"] {
            let c = RenderConfig::from_lookup(lookup_from(&[("CUBE_BACKGROUND", raw)]));
            assert_eq!(c.background, b'.', "{:?} should be ignored", raw);
            assert!(c.validate().is_ok());
        }
    }

    #[test]
    fn validate_rejects_unrunnable_configs() {
        let bad = [
            RenderConfig {
                screen_width: 0,
                ..RenderConfig::default()
            },
            RenderConfig {
                increment_speed: 0.0,
                ..RenderConfig::default()
            },
            RenderConfig {
                increment_speed: f64::NAN,
                ..RenderConfig::default()
            },
            RenderConfig {
                cube_width: -1.0,
                ..RenderConfig::default()
            },
            RenderConfig {
                k1: f64::INFINITY,
                ..RenderConfig::default()
            },
            RenderConfig {
                background: b'\n',
                ..RenderConfig::default()
            },
        ];
        for c in bad {
            assert!(c.validate().is_err(), "{:?} should be rejected", c);
        }
    }
}
