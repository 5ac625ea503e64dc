use serde::{Deserialize, Serialize};

use crate::core::{AxisDomain, PixelPoint, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::DEFAULT_HIT_RADIUS_PX;
use crate::render::Color;

use super::AxisLabelConfig;

/// Public chart bootstrap configuration.
///
/// Only `viewport.width` drives layout; the chart derives its own height from
/// the axes and legend. The type is serializable so hosts can persist chart
/// setup next to their own settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(default = "default_origin")]
    pub origin: PixelPoint,
    #[serde(default = "default_padding_px")]
    pub vertical_padding_px: f64,
    #[serde(default = "default_padding_px")]
    pub horizontal_padding_px: f64,
    #[serde(default = "default_fill_fraction")]
    pub fill_fraction: f64,
    #[serde(default = "default_hit_radius_px")]
    pub hit_radius_px: f64,
    #[serde(default = "default_marker_radius_px")]
    pub marker_radius_px: f64,
    #[serde(default = "default_tick_marker_radius_px")]
    pub tick_marker_radius_px: f64,
    #[serde(default = "default_axis_stroke_width_px")]
    pub axis_stroke_width_px: f64,
    #[serde(default = "default_series_stroke_width_px")]
    pub series_stroke_width_px: f64,
    #[serde(default = "default_row_height_px")]
    pub legend_row_height_px: f64,
    #[serde(default = "default_row_height_px")]
    pub axis_title_row_height_px: f64,
    #[serde(default = "default_axis_title_top_px")]
    pub axis_title_top_px: f64,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    #[serde(default)]
    pub x_domain: AxisDomain,
    #[serde(default)]
    pub y_domain: AxisDomain,
    #[serde(default)]
    pub x_label_config: AxisLabelConfig,
    #[serde(default)]
    pub y_label_config: AxisLabelConfig,
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
}

impl ChartConfig {
    /// Creates a config with default layout constants for a container.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            origin: default_origin(),
            vertical_padding_px: default_padding_px(),
            horizontal_padding_px: default_padding_px(),
            fill_fraction: default_fill_fraction(),
            hit_radius_px: default_hit_radius_px(),
            marker_radius_px: default_marker_radius_px(),
            tick_marker_radius_px: default_tick_marker_radius_px(),
            axis_stroke_width_px: default_axis_stroke_width_px(),
            series_stroke_width_px: default_series_stroke_width_px(),
            legend_row_height_px: default_row_height_px(),
            axis_title_row_height_px: default_row_height_px(),
            axis_title_top_px: default_axis_title_top_px(),
            label_font_size_px: default_label_font_size_px(),
            x_domain: AxisDomain::default(),
            y_domain: AxisDomain::default(),
            x_label_config: AxisLabelConfig::default(),
            y_label_config: AxisLabelConfig::default(),
            axis_color: default_axis_color(),
            label_color: default_label_color(),
        }
    }

    /// Sets where the two axes meet, relative to the chart's bottom-left corner.
    #[must_use]
    pub fn with_origin(mut self, origin: PixelPoint) -> Self {
        self.origin = origin;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, vertical_px: f64, horizontal_px: f64) -> Self {
        self.vertical_padding_px = vertical_px;
        self.horizontal_padding_px = horizontal_px;
        self
    }

    /// Sets the share of each axis that carries ticks.
    #[must_use]
    pub fn with_fill_fraction(mut self, fill_fraction: f64) -> Self {
        self.fill_fraction = fill_fraction;
        self
    }

    #[must_use]
    pub fn with_hit_radius_px(mut self, radius: f64) -> Self {
        self.hit_radius_px = radius;
        self
    }

    #[must_use]
    pub fn with_marker_radius_px(mut self, radius: f64) -> Self {
        self.marker_radius_px = radius;
        self
    }

    #[must_use]
    pub fn with_label_font_size_px(mut self, font_size_px: f64) -> Self {
        self.label_font_size_px = font_size_px;
        self
    }

    /// Sets explicit data bounds for the X axis.
    #[must_use]
    pub fn with_x_domain(mut self, domain: AxisDomain) -> Self {
        self.x_domain = domain;
        self
    }

    /// Sets explicit data bounds for the Y axis.
    #[must_use]
    pub fn with_y_domain(mut self, domain: AxisDomain) -> Self {
        self.y_domain = domain;
        self
    }

    #[must_use]
    pub fn with_x_label_config(mut self, config: AxisLabelConfig) -> Self {
        self.x_label_config = config;
        self
    }

    #[must_use]
    pub fn with_y_label_config(mut self, config: AxisLabelConfig) -> Self {
        self.y_label_config = config;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, axis_color: Color, label_color: Color) -> Self {
        self.axis_color = axis_color;
        self.label_color = label_color;
        self
    }

    /// Pixel length shared by both axes before the fill fraction applies.
    #[must_use]
    pub fn axis_pixel_length(&self) -> f64 {
        f64::from(self.viewport.width) - self.origin.x - self.horizontal_padding_px
    }

    /// Height of the axis-title block that seeds the legend height.
    #[must_use]
    pub fn axis_title_block_height(&self) -> f64 {
        self.axis_title_top_px + 2.0 * self.axis_title_row_height_px
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.viewport.width == 0 {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for (name, value) in [
            ("origin x", self.origin.x),
            ("origin y", self.origin.y),
            ("vertical padding", self.vertical_padding_px),
            ("horizontal padding", self.horizontal_padding_px),
            ("hit radius", self.hit_radius_px),
            ("axis title top inset", self.axis_title_top_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }

        for (name, value) in [
            ("marker radius", self.marker_radius_px),
            ("tick marker radius", self.tick_marker_radius_px),
            ("axis stroke width", self.axis_stroke_width_px),
            ("series stroke width", self.series_stroke_width_px),
            ("legend row height", self.legend_row_height_px),
            ("axis title row height", self.axis_title_row_height_px),
            ("label font size", self.label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }

        if !self.fill_fraction.is_finite() || self.fill_fraction <= 0.0 || self.fill_fraction > 1.0
        {
            return Err(ChartError::InvalidData(
                "fill fraction must be in (0, 1]".to_owned(),
            ));
        }

        if self.axis_pixel_length() <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "viewport width {} leaves no room for axes after origin and padding",
                self.viewport.width
            )));
        }

        self.x_domain.validate()?;
        self.y_domain.validate()?;
        self.x_label_config.validate()?;
        self.y_label_config.validate()?;
        self.axis_color.validate()?;
        self.label_color.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_origin() -> PixelPoint {
    PixelPoint::new(40.0, 40.0)
}

fn default_padding_px() -> f64 {
    40.0
}

fn default_fill_fraction() -> f64 {
    0.9
}

fn default_hit_radius_px() -> f64 {
    DEFAULT_HIT_RADIUS_PX
}

fn default_marker_radius_px() -> f64 {
    1.0
}

fn default_tick_marker_radius_px() -> f64 {
    2.0
}

fn default_axis_stroke_width_px() -> f64 {
    2.0
}

fn default_series_stroke_width_px() -> f64 {
    1.0
}

fn default_row_height_px() -> f64 {
    20.0
}

fn default_axis_title_top_px() -> f64 {
    5.0
}

fn default_label_font_size_px() -> f64 {
    10.0
}

fn default_axis_color() -> Color {
    Color::BLACK
}

fn default_label_color() -> Color {
    Color::BLACK
}
