use tracing::{debug, trace};

use crate::core::{AxisScale, CoordinateMapper, ResolvedDomain};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::{ChartConfig, ChartDelegate, ChartSeries, HeightChangedHandler};

/// Axis state fixed by a successful `draw_axes` call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartAxes {
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
    pub x_domain: ResolvedDomain,
    pub y_domain: ResolvedDomain,
    pub x_title: String,
    pub y_title: String,
    pub mapper: CoordinateMapper,
    /// Vertical extent of the axes plus the vertical padding.
    pub axis_height: f64,
}

/// Multi-series line chart facade consumed by host applications.
///
/// The chart lays itself out from the container width and reports the height
/// it needs. Layout happens in chart space (bottom-left origin, `y` up); the
/// render frame and tap handling convert to and from screen space.
pub struct LineChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) axes: Option<ChartAxes>,
    pub(super) series: Vec<ChartSeries>,
    pub(super) legend_height: f64,
    pub(super) height: f64,
    pub(super) delegate: Option<Box<dyn ChartDelegate>>,
    pub(super) height_changed: Option<HeightChangedHandler>,
}

impl<R: Renderer> LineChart<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        debug!(
            width = config.viewport.width,
            axis_length = config.axis_pixel_length(),
            "create line chart"
        );
        Ok(Self {
            renderer,
            config,
            axes: None,
            series: Vec::new(),
            legend_height: 0.0,
            height: 0.0,
            delegate: None,
            height_changed: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Total height the chart needs: axes plus legend block.
    ///
    /// Zero until axes were drawn successfully.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn axis_height(&self) -> f64 {
        self.axes.as_ref().map_or(0.0, |axes| axes.axis_height)
    }

    #[must_use]
    pub fn legend_height(&self) -> f64 {
        self.legend_height
    }

    #[must_use]
    pub fn axes(&self) -> Option<&ChartAxes> {
        self.axes.as_ref()
    }

    #[must_use]
    pub fn x_scale(&self) -> Option<&AxisScale> {
        self.axes.as_ref().map(|axes| &axes.x_scale)
    }

    #[must_use]
    pub fn y_scale(&self) -> Option<&AxisScale> {
        self.axes.as_ref().map(|axes| &axes.y_scale)
    }

    #[must_use]
    pub fn mapper(&self) -> Option<&CoordinateMapper> {
        self.axes.as_ref().map(|axes| &axes.mapper)
    }

    /// Series in insertion order, which is also draw and legend order.
    #[must_use]
    pub fn series(&self) -> &[ChartSeries] {
        &self.series
    }

    pub fn set_delegate(&mut self, delegate: Box<dyn ChartDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Installs the height-changed callback, replacing any previous one.
    pub fn set_height_changed_handler(&mut self, handler: impl FnMut(f64) + 'static) {
        self.height_changed = Some(Box::new(handler));
    }

    pub fn clear_height_changed_handler(&mut self) {
        self.height_changed = None;
    }

    pub(super) fn require_axes(&self) -> ChartResult<&ChartAxes> {
        self.axes.as_ref().ok_or(ChartError::AxesNotDrawn)
    }

    pub(super) fn update_height(&mut self, height: f64) {
        self.height = height;
        trace!(height, "chart height recomputed");
        if let Some(handler) = self.height_changed.as_mut() {
            handler(height);
        }
    }

    /// Draws the current chart through the renderer.
    ///
    /// A chart without axes renders nothing.
    pub fn render(&mut self) -> ChartResult<()> {
        if self.axes.is_none() {
            trace!("skip render: axes not drawn");
            return Ok(());
        }
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    /// Renders the chart into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        if self.axes.is_none() {
            return Ok(());
        }
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
