use tracing::debug;

use crate::core::PixelPoint;
use crate::interaction::{TapResult, hit_test_series};
use crate::render::Renderer;

use super::LineChart;

impl<R: Renderer> LineChart<R> {
    /// Resolves a tap given in screen coordinates (top-left origin).
    ///
    /// The location is mirrored into chart space against the current height,
    /// then every series is hit-tested in insertion order. The result carries
    /// one entry per series plus each series' raw data, and is also passed to
    /// the delegate's `on_tap`.
    pub fn handle_tap(&mut self, x: f64, y: f64) -> TapResult {
        let location = PixelPoint::new(x, y).mirrored_vertically(self.height);
        let radius = self.config.hit_radius_px;

        let result = TapResult {
            location,
            indices: self
                .series
                .iter()
                .map(|series| hit_test_series(&series.geometry, location, radius))
                .collect(),
            values: self.series.iter().map(|series| series.data.clone()).collect(),
        };
        debug!(
            x = location.x,
            y = location.y,
            hits = result.hit_count(),
            series = result.indices.len(),
            "tap resolved"
        );

        if let Some(delegate) = self.delegate.as_mut() {
            delegate.on_tap(&result);
        }
        result
    }
}
