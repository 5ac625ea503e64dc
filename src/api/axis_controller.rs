use tracing::{debug, warn};

use crate::core::{AxisOrientation, AxisScale, CoordinateMapper};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartAxes, LineChart};

impl<R: Renderer> LineChart<R> {
    /// Lays out both axes from their tick values and titles.
    ///
    /// Both axes span `width - origin.x - horizontal_padding` pixels and share
    /// the smaller of their two steps. Unset domain bounds are resolved here,
    /// once. On success the chart height becomes the vertical axis extent plus
    /// the vertical padding and the height handler fires.
    ///
    /// Axes can be drawn once per chart. A failed call leaves the chart
    /// without axes and with height zero.
    pub fn draw_axes(
        &mut self,
        x_ticks: Vec<f64>,
        y_ticks: Vec<f64>,
        x_title: impl Into<String>,
        y_title: impl Into<String>,
    ) -> ChartResult<()> {
        if self.axes.is_some() {
            warn!("rejecting second draw_axes call");
            return Err(ChartError::AxesAlreadyDrawn);
        }

        let axes = self
            .build_axes(x_ticks, y_ticks, x_title.into(), y_title.into())
            .inspect_err(|err| warn!(error = %err, "axis layout rejected"))?;

        let axis_height = axes.axis_height;
        debug!(
            x_ticks = axes.x_scale.tick_count(),
            y_ticks = axes.y_scale.tick_count(),
            step = axes.x_scale.step(),
            axis_height,
            "axes drawn"
        );

        self.axes = Some(axes);
        self.legend_height = self.config.axis_title_block_height();
        self.update_height(axis_height);
        Ok(())
    }

    fn build_axes(
        &self,
        x_ticks: Vec<f64>,
        y_ticks: Vec<f64>,
        x_title: String,
        y_title: String,
    ) -> ChartResult<ChartAxes> {
        let origin = self.config.origin;
        let axis_length = self.config.axis_pixel_length();
        let fill_fraction = self.config.fill_fraction;

        let mut y_scale = AxisScale::build(
            y_ticks,
            AxisOrientation::Vertical,
            origin.y,
            axis_length,
            fill_fraction,
        )?;
        let mut x_scale = AxisScale::build(
            x_ticks,
            AxisOrientation::Horizontal,
            origin.x,
            axis_length,
            fill_fraction,
        )?;
        AxisScale::reconcile(&mut x_scale, &mut y_scale);

        let x_domain = self.config.x_domain.resolve(&x_scale)?;
        let y_domain = self.config.y_domain.resolve(&y_scale)?;
        let mapper = CoordinateMapper::new(&x_scale, x_domain, &y_scale, y_domain, origin);
        let axis_height = y_scale.pixel_end() + self.config.vertical_padding_px;

        Ok(ChartAxes {
            x_scale,
            y_scale,
            x_domain,
            y_domain,
            x_title,
            y_title,
            mapper,
            axis_height,
        })
    }
}
