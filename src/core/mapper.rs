use serde::{Deserialize, Serialize};

use crate::core::{AxisScale, DataPoint, PixelPoint};
use crate::error::{ChartError, ChartResult};

/// Optional explicit bounds for one axis.
///
/// Unset bounds are resolved against the axis ticks once, when the axes are
/// drawn: `min` falls back to the first tick and `max` to the last tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisDomain {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl AxisDomain {
    #[must_use]
    pub fn unset() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (name, bound) in [("min", self.min), ("max", self.max)] {
            if bound.is_some_and(|value| !value.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "domain {name} must be finite when set"
                )));
            }
        }
        Ok(self)
    }

    /// Resolves unset bounds against `scale`.
    pub fn resolve(self, scale: &AxisScale) -> ChartResult<ResolvedDomain> {
        let domain = self.validate()?;
        Ok(ResolvedDomain {
            min: domain.min.unwrap_or_else(|| scale.first_value()),
            max: domain.max.unwrap_or_else(|| scale.last_value()),
        })
    }
}

/// Concrete bounds used by the coordinate mapper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDomain {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisProjection {
    min: f64,
    value_per_step: Option<f64>,
    step: f64,
}

impl AxisProjection {
    fn new(scale: &AxisScale, domain: ResolvedDomain) -> Self {
        // Ticks are spaced evenly, so one step is worth `(max - first) / intervals`
        // domain units. A single tick or a zero-width interval has no such unit.
        let intervals = scale.tick_count().saturating_sub(1);
        let value_per_step = if intervals == 0 {
            None
        } else {
            let value = (domain.max - scale.first_value()) / intervals as f64;
            (value.is_finite() && value != 0.0).then_some(value)
        };

        Self {
            min: domain.min,
            value_per_step,
            step: scale.step(),
        }
    }

    fn project(self, value: f64) -> f64 {
        match self.value_per_step {
            Some(value_per_step) => (value - self.min) / value_per_step * self.step,
            None => 0.0,
        }
    }
}

/// Converts data-space points into chart pixel space.
///
/// Both axes use their reconciled step; the result is shifted by the chart
/// origin so that the data origin lands where the axes meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    x: AxisProjection,
    y: AxisProjection,
    origin: PixelPoint,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(
        x_scale: &AxisScale,
        x_domain: ResolvedDomain,
        y_scale: &AxisScale,
        y_domain: ResolvedDomain,
        origin: PixelPoint,
    ) -> Self {
        Self {
            x: AxisProjection::new(x_scale, x_domain),
            y: AxisProjection::new(y_scale, y_domain),
            origin,
        }
    }

    #[must_use]
    pub fn origin(&self) -> PixelPoint {
        self.origin
    }

    /// Maps one data point. Degenerate axes map to the origin coordinate.
    #[must_use]
    pub fn map_to_pixel(&self, point: DataPoint) -> PixelPoint {
        PixelPoint::new(self.x.project(point.x), self.y.project(point.y)).translated(self.origin)
    }

    #[must_use]
    pub fn map_all(&self, points: &[DataPoint]) -> Vec<PixelPoint> {
        points.iter().map(|point| self.map_to_pixel(*point)).collect()
    }
}
