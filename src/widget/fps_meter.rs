//! FPS meter: a smoothed frame-rate readout.

use crate::buffer::{Rgb, Style};
use crate::error::Result;
use crate::grid::{Grid, SubGrid};
use crate::module::Widget;
use std::time::{Duration, Instant};

/// Configuration for the FPS meter.
#[derive(Debug, Clone, Copy)]
pub struct FpsConfig {
    /// Weight of the newest sample in the moving average, in `(0, 1]`.
    /// Values outside the range are clamped into it; NaN counts as 1.
    pub smoothing: f64,
    /// Estimate before the first interval is measured.
    pub initial_fps: f64,
    /// Text color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
}

impl Default for FpsConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.1,
            initial_fps: 60.0,
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
        }
    }
}

/// Measures the interval between ticks and shows `FPS: <avg>`.
#[derive(Debug, Clone)]
pub struct FpsMeter {
    config: FpsConfig,
    avg: f64,
    last_tick: Option<Instant>,
}

impl FpsMeter {
    /// Create a meter with the default smoothing.
    pub fn new() -> Self {
        Self::with_config(FpsConfig::default())
    }

    /// Create a meter with custom configuration.
    pub const fn with_config(config: FpsConfig) -> Self {
        Self {
            avg: config.initial_fps,
            config,
            last_tick: None,
        }
    }

    /// The current estimate.
    #[inline]
    pub const fn fps(&self) -> f64 {
        self.avg
    }

    /// Fold one inter-frame interval into the average.
    ///
    /// Zero-length intervals carry no rate and are ignored.
    pub fn record_interval(&mut self, dt: Duration) {
        let secs = dt.as_secs_f64();
        if secs <= 0.0 {
            return;
        }
        let alpha = self.smoothing();
        self.avg = (1.0 - alpha).mul_add(self.avg, alpha / secs);
    }

    fn smoothing(&self) -> f64 {
        let alpha = self.config.smoothing;
        if alpha.is_nan() {
            1.0
        } else {
            alpha.clamp(f64::EPSILON, 1.0)
        }
    }

    /// The text the meter draws.
    pub fn label(&self) -> String {
        format!("FPS: {:.1}", self.avg)
    }
}

impl Default for FpsMeter {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for FpsMeter {
    fn tick(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last_tick.replace(now) {
            self.record_interval(now - last);
        }
    }

    fn draw(&mut self, grid: &SubGrid) -> Result<()> {
        let (rows, cols) = grid.shape();
        let style = Style::new().fg(self.config.fg).bg(self.config.bg);
        grid.fill(Some(' '), style)?;
        if rows == 0 || cols == 0 {
            return Ok(());
        }
        let label: String = self.label().chars().take(cols).collect();
        grid.print(&label, (0, 0), style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::RootGrid;

    #[test]
    fn test_fps_moving_average() {
        let mut meter = FpsMeter::new();
        assert!((meter.fps() - 60.0).abs() < f64::EPSILON);

        // 0.9 * 60 + 0.1 * 10
        meter.record_interval(Duration::from_millis(100));
        assert!((meter.fps() - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_fps_ignores_zero_interval() {
        let mut meter = FpsMeter::new();
        meter.record_interval(Duration::ZERO);
        assert!((meter.fps() - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fps_custom_smoothing() {
        let mut meter = FpsMeter::with_config(FpsConfig {
            smoothing: 1.0,
            initial_fps: 0.0,
            ..FpsConfig::default()
        });
        meter.record_interval(Duration::from_millis(20));
        assert!((meter.fps() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_fps_smoothing_out_of_range_is_clamped() {
        for smoothing in [5.0, f64::NAN] {
            let mut meter = FpsMeter::with_config(FpsConfig {
                smoothing,
                initial_fps: 0.0,
                ..FpsConfig::default()
            });
            meter.record_interval(Duration::from_millis(20));
            meter.record_interval(Duration::from_millis(20));
            assert!((meter.fps() - 50.0).abs() < 1e-9, "smoothing {smoothing}");
        }

        let mut frozen = FpsMeter::with_config(FpsConfig {
            smoothing: -1.0,
            ..FpsConfig::default()
        });
        frozen.record_interval(Duration::from_millis(20));
        assert!(frozen.fps().is_finite());
        assert!((frozen.fps() - 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_fps_first_tick_only_records_time() {
        let mut meter = FpsMeter::new();
        meter.tick();
        assert!((meter.fps() - 60.0).abs() < f64::EPSILON);
        assert!(meter.last_tick.is_some());
    }

    #[test]
    fn test_fps_draw_truncates() {
        let root = RootGrid::headless((1, 8));
        let grid = SubGrid::new(&root, 0, 0, 1, 8).unwrap();
        let mut meter = FpsMeter::new();
        meter.draw(&grid).unwrap();
        assert_eq!(root.row_text(0).unwrap(), "FPS: 60.");

        let wide = RootGrid::headless((1, 12));
        let grid = SubGrid::new(&wide, 0, 0, 1, 12).unwrap();
        meter.draw(&grid).unwrap();
        assert_eq!(wide.row_text(0).unwrap(), "FPS: 60.0   ");
    }
}
