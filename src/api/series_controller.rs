use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{DataPoint, SeriesGeometry, SeriesShape, project_series_geometry};
use crate::error::ChartResult;
use crate::render::{Color, Renderer};

use super::LineChart;
use super::legend_layout::legend_height_for_rows;

/// Caller-side description of one series to add.
///
/// A fill color turns the series into a filled area closed along the Y axis'
/// first tick value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesInput {
    pub title: String,
    pub points: Vec<DataPoint>,
    pub stroke_color: Option<Color>,
    pub fill_color: Option<Color>,
    pub curved: bool,
}

impl SeriesInput {
    #[must_use]
    pub fn new(title: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            title: title.into(),
            points,
            stroke_color: None,
            fill_color: None,
            curved: false,
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, color: Color) -> Self {
        self.stroke_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    /// Connects points with a smooth curve through every point.
    #[must_use]
    pub fn curved(mut self, curved: bool) -> Self {
        self.curved = curved;
        self
    }

    #[must_use]
    pub fn shape(&self) -> SeriesShape {
        SeriesShape {
            filled: self.fill_color.is_some(),
            curved: self.curved,
        }
    }
}

/// Series stored by the chart: the caller's data plus its pixel geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub title: String,
    pub stroke_color: Option<Color>,
    pub fill_color: Option<Color>,
    pub curved: bool,
    /// Raw data, exactly as supplied.
    pub data: Vec<DataPoint>,
    pub geometry: SeriesGeometry,
}

impl ChartSeries {
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.fill_color.is_some()
    }

    /// Color used for markers and the legend swatch.
    #[must_use]
    pub fn marker_color(&self) -> Option<Color> {
        self.stroke_color.or(self.fill_color)
    }
}

impl<R: Renderer> LineChart<R> {
    /// Projects and appends one series, returning its index.
    ///
    /// Grows the legend by one row and recomputes the chart height, which
    /// fires the height handler. Rejected input leaves the chart unchanged.
    pub fn add_series(&mut self, input: SeriesInput) -> ChartResult<usize> {
        let axes = self
            .require_axes()
            .inspect_err(|err| warn!(error = %err, title = %input.title, "series rejected"))?;

        for color in [input.stroke_color, input.fill_color].into_iter().flatten() {
            color.validate()?;
        }

        let shape = input.shape();
        let geometry = project_series_geometry(
            &input.points,
            &axes.mapper,
            axes.y_scale.first_value(),
            shape,
        )
        .inspect_err(|err| warn!(error = %err, title = %input.title, "series rejected"))?;
        let axis_height = axes.axis_height;

        let index = self.series.len();
        self.series.push(ChartSeries {
            title: input.title,
            stroke_color: input.stroke_color,
            fill_color: input.fill_color,
            curved: input.curved,
            data: input.points,
            geometry,
        });

        self.legend_height = legend_height_for_rows(
            self.series.len(),
            self.config.legend_row_height_px,
            self.legend_height,
        );
        let height = self.legend_height + axis_height;
        debug!(
            index,
            points = self.series[index].data.len(),
            filled = shape.filled,
            curved = shape.curved,
            height,
            "series added"
        );
        self.update_height(height);
        Ok(index)
    }
}
