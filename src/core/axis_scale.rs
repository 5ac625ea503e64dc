use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Which chart dimension an axis scale lays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisOrientation {
    /// X axis, running left to right from the chart origin.
    Horizontal,
    /// Y axis, running bottom to top from the chart origin.
    Vertical,
}

impl fmt::Display for AxisOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("x"),
            Self::Vertical => f.write_str("y"),
        }
    }
}

/// Uniform tick layout along one axis.
///
/// Ticks are the caller-supplied values placed `step` pixels apart starting at
/// `pixel_start`. Only `fill_fraction` of the axis length is used for ticks so
/// the last tick never touches the axis end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    orientation: AxisOrientation,
    values: Vec<f64>,
    first_value: f64,
    pixel_start: f64,
    pixel_length: f64,
    fill_fraction: f64,
    natural_step: f64,
    step: f64,
}

impl AxisScale {
    /// Builds a scale from ordered tick values.
    ///
    /// A single tick divides by one instead of zero, so it sits at
    /// `pixel_start` and the scale still has a usable step.
    pub fn build(
        values: Vec<f64>,
        orientation: AxisOrientation,
        pixel_start: f64,
        pixel_length: f64,
        fill_fraction: f64,
    ) -> ChartResult<Self> {
        let Some(&first_value) = values.first() else {
            return Err(ChartError::EmptyDomain { axis: orientation });
        };
        if values.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "{orientation} axis tick values must be finite"
            )));
        }
        if !pixel_start.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "{orientation} axis pixel start must be finite"
            )));
        }
        if !pixel_length.is_finite() || pixel_length < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{orientation} axis pixel length must be finite and >= 0"
            )));
        }
        if !fill_fraction.is_finite() || fill_fraction <= 0.0 || fill_fraction > 1.0 {
            return Err(ChartError::InvalidData(
                "fill fraction must be finite and in (0, 1]".to_owned(),
            ));
        }

        let intervals = values.len().saturating_sub(1).max(1);
        let step = pixel_length * fill_fraction / intervals as f64;

        Ok(Self {
            orientation,
            values,
            first_value,
            pixel_start,
            pixel_length,
            fill_fraction,
            natural_step: step,
            step,
        })
    }

    /// Makes both scales adopt the smaller of their two steps.
    ///
    /// After reconciliation one tick interval covers the same pixel distance
    /// on both axes. Returns the shared step.
    pub fn reconcile(first: &mut Self, second: &mut Self) -> f64 {
        let shared = first.step.min(second.step);
        first.step = shared;
        second.step = shared;
        shared
    }

    #[must_use]
    pub fn orientation(&self) -> AxisOrientation {
        self.orientation
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn first_value(&self) -> f64 {
        self.first_value
    }

    #[must_use]
    pub fn last_value(&self) -> f64 {
        self.values.last().copied().unwrap_or(self.first_value)
    }

    /// `true` when the axis has a single tick and therefore no interval.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.values.len() == 1
    }

    #[must_use]
    pub fn fill_fraction(&self) -> f64 {
        self.fill_fraction
    }

    /// Step computed from this axis alone, before reconciliation.
    #[must_use]
    pub fn natural_step(&self) -> f64 {
        self.natural_step
    }

    /// Pixel distance between two adjacent ticks.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn pixel_start(&self) -> f64 {
        self.pixel_start
    }

    #[must_use]
    pub fn pixel_length(&self) -> f64 {
        self.pixel_length
    }

    /// Coordinate where the axis line ends.
    #[must_use]
    pub fn pixel_end(&self) -> f64 {
        self.pixel_start + self.pixel_length
    }

    #[must_use]
    pub fn tick_position(&self, index: usize) -> f64 {
        self.pixel_start + self.step * index as f64
    }

    #[must_use]
    pub fn tick_positions(&self) -> Vec<f64> {
        (0..self.values.len())
            .map(|index| self.tick_position(index))
            .collect()
    }

    #[must_use]
    pub fn last_tick_position(&self) -> f64 {
        self.tick_position(self.values.len() - 1)
    }
}
