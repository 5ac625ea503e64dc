use tracing::trace;

use crate::core::{PixelPoint, Viewport};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

use super::axis_label_format::format_axis_label;
use super::axis_label_layout::{LabelBox, layout_tick_labels};
use super::legend_layout::{LEGEND_SWATCH_CORNER_RADIUS_PX, layout_axis_titles, layout_legend_row};
use super::{ChartAxes, LineChart};

/// Converts chart space (bottom-left origin) to screen space (top-left origin).
#[derive(Debug, Clone, Copy)]
struct ScreenMirror {
    height: f64,
}

impl ScreenMirror {
    fn point(self, point: PixelPoint) -> PixelPoint {
        point.mirrored_vertically(self.height)
    }

    fn y(self, y: f64) -> f64 {
        self.height - y
    }

    fn box_top(self, bounds: LabelBox) -> f64 {
        self.height - bounds.top()
    }
}

impl<R: Renderer> LineChart<R> {
    /// Materializes the chart into a screen-space frame.
    ///
    /// Draw order follows insertion order for series; axes, legend swatches,
    /// markers and labels come after.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let axes = self.require_axes()?;
        let mirror = ScreenMirror {
            height: self.height,
        };
        let viewport = Viewport::new(self.config.viewport.width, self.height.ceil() as u32);
        let mut frame = RenderFrame::new(viewport);

        self.push_series(&mut frame, mirror);
        self.push_axes(&mut frame, axes, mirror);
        self.push_legend(&mut frame, axes, mirror);

        trace!(
            paths = frame.paths.len(),
            lines = frame.lines.len(),
            circles = frame.circles.len(),
            texts = frame.texts.len(),
            "render frame built"
        );
        Ok(frame)
    }

    fn push_series(&self, frame: &mut RenderFrame, mirror: ScreenMirror) {
        for series in &self.series {
            let path = series.geometry.path();
            let paints = series.stroke_color.is_some() || series.fill_color.is_some();
            if path.len() >= 2 && paints {
                let commands = path
                    .iter()
                    .map(|command| command.map_points(|point| mirror.point(point)))
                    .collect();
                frame.paths.push(
                    PathPrimitive::new(commands, self.config.series_stroke_width_px)
                        .with_stroke(series.stroke_color)
                        .with_fill(series.fill_color),
                );
            }
        }

        for series in &self.series {
            let Some(color) = series.marker_color() else {
                continue;
            };
            for marker in series.geometry.markers() {
                let marker = mirror.point(*marker);
                frame.circles.push(CirclePrimitive::new(
                    marker.x,
                    marker.y,
                    self.config.marker_radius_px,
                    color,
                ));
            }
        }
    }

    fn push_axes(&self, frame: &mut RenderFrame, axes: &ChartAxes, mirror: ScreenMirror) {
        let origin = self.config.origin;
        let color = self.config.axis_color;
        let width = self.config.axis_stroke_width_px;

        frame.lines.push(LinePrimitive::new(
            origin.x,
            mirror.y(origin.y),
            origin.x,
            mirror.y(axes.y_scale.pixel_end()),
            width,
            color,
        ));
        frame.lines.push(LinePrimitive::new(
            origin.x,
            mirror.y(origin.y),
            axes.x_scale.pixel_end(),
            mirror.y(origin.y),
            width,
            color,
        ));

        let y_labels = layout_tick_labels(&axes.y_scale, origin, |value| {
            self.delegate
                .as_ref()
                .and_then(|delegate| delegate.format_y_tick_label(value))
                .unwrap_or_else(|| format_axis_label(value, self.config.y_label_config))
        });
        let x_labels = layout_tick_labels(&axes.x_scale, origin, |value| {
            self.delegate
                .as_ref()
                .and_then(|delegate| delegate.format_x_tick_label(value))
                .unwrap_or_else(|| format_axis_label(value, self.config.x_label_config))
        });

        for label in y_labels.iter().chain(x_labels.iter()) {
            let tick = mirror.point(label.tick);
            frame.circles.push(CirclePrimitive::new(
                tick.x,
                tick.y,
                self.config.tick_marker_radius_px,
                color,
            ));
            self.push_text(frame, &label.text, label.bounds, label.align, mirror);
        }
    }

    fn push_legend(&self, frame: &mut RenderFrame, axes: &ChartAxes, mirror: ScreenMirror) {
        let block_y = axes.axis_height;

        let titles = layout_axis_titles(&axes.x_title, &axes.y_title, block_y, &self.config);
        self.push_text(frame, &titles.y_title, titles.y_bounds, TextHAlign::Left, mirror);
        self.push_text(frame, &titles.x_title, titles.x_bounds, TextHAlign::Left, mirror);

        for (index, series) in self.series.iter().enumerate() {
            let row = layout_legend_row(
                index,
                &series.title,
                series.stroke_color,
                block_y,
                &self.config,
            );
            if let Some(color) = row.color {
                frame.rects.push(
                    RectPrimitive::new(
                        row.swatch.x,
                        mirror.box_top(row.swatch),
                        row.swatch.width,
                        row.swatch.height,
                        color,
                    )
                    .with_corner_radius(LEGEND_SWATCH_CORNER_RADIUS_PX),
                );
            }
            self.push_text(frame, &row.title, row.text, TextHAlign::Left, mirror);
        }
    }

    /// Places `text` vertically centered in `bounds`. Empty text is skipped.
    fn push_text(
        &self,
        frame: &mut RenderFrame,
        text: &str,
        bounds: LabelBox,
        align: TextHAlign,
        mirror: ScreenMirror,
    ) {
        if text.is_empty() {
            return;
        }
        let font_size = self.config.label_font_size_px;
        let inset = ((bounds.height - font_size) / 2.0).max(0.0);
        frame.texts.push(TextPrimitive::new(
            text,
            bounds.anchor_x(align),
            mirror.box_top(bounds) + inset,
            font_size,
            self.config.label_color,
            align,
        ));
    }
}
