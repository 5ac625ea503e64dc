use serde::{Deserialize, Serialize};

use crate::core::{CoordinateMapper, DataPoint, PathCommand, PixelPoint, hermite_path, polyline_path};
use crate::error::{ChartError, ChartResult};

/// Synthetic baseline points wrapped around a series' data.
///
/// Filled series get one point before and one after their data, placed at the
/// data's first/last `x` and the Y axis' first tick, so the fill closes along
/// the baseline. Unfilled series carry no synthetic points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentinelLayout {
    pub leading: usize,
    pub trailing: usize,
}

impl SentinelLayout {
    #[must_use]
    pub fn for_series(filled: bool) -> Self {
        if filled {
            Self {
                leading: 1,
                trailing: 1,
            }
        } else {
            Self {
                leading: 0,
                trailing: 0,
            }
        }
    }

    #[must_use]
    pub fn total(self) -> usize {
        self.leading + self.trailing
    }

    /// Converts an index into the internal point array to a raw data index.
    ///
    /// Returns `None` when `internal` addresses a synthetic point.
    #[must_use]
    pub fn raw_index(self, internal: usize, data_len: usize) -> Option<usize> {
        internal
            .checked_sub(self.leading)
            .filter(|raw| *raw < data_len)
    }

    /// Builds the internal data array: sentinels plus the raw points.
    #[must_use]
    pub fn wrap(self, points: &[DataPoint], baseline_y: f64) -> Vec<DataPoint> {
        let mut internal = Vec::with_capacity(points.len() + self.total());
        if let (Some(first), true) = (points.first(), self.leading > 0) {
            internal.push(DataPoint::new(first.x, baseline_y));
        }
        internal.extend_from_slice(points);
        if let (Some(last), true) = (points.last(), self.trailing > 0) {
            internal.push(DataPoint::new(last.x, baseline_y));
        }
        internal
    }
}

/// How a series connects and paints its points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeriesShape {
    pub filled: bool,
    pub curved: bool,
}

/// Pixel geometry for one series, in chart space.
///
/// Only `project_series_geometry` builds it, so `points` always holds at
/// least the sentinels plus one data point.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesGeometry {
    points: Vec<PixelPoint>,
    sentinels: SentinelLayout,
    path: Vec<PathCommand>,
}

impl SeriesGeometry {
    /// All mapped points, synthetic baseline points included.
    #[must_use]
    pub fn points(&self) -> &[PixelPoint] {
        &self.points
    }

    /// Mapped data points only; these carry the markers and hit targets.
    #[must_use]
    pub fn markers(&self) -> &[PixelPoint] {
        let end = self.points.len() - self.sentinels.trailing;
        &self.points[self.sentinels.leading..end]
    }

    #[must_use]
    pub fn sentinels(&self) -> SentinelLayout {
        self.sentinels
    }

    /// Stroke/fill outline. Empty when fewer than two points exist.
    ///
    /// Filled series are left open; fills close them implicitly along the
    /// baseline between the two sentinels.
    #[must_use]
    pub fn path(&self) -> &[PathCommand] {
        &self.path
    }

    #[must_use]
    pub fn data_len(&self) -> usize {
        self.points.len() - self.sentinels.total()
    }
}

/// Projects one series into deterministic pixel geometry.
///
/// `baseline_y` is the data-space `y` used for the synthetic fill points,
/// normally the Y axis' first tick value.
pub fn project_series_geometry(
    points: &[DataPoint],
    mapper: &CoordinateMapper,
    baseline_y: f64,
    shape: SeriesShape,
) -> ChartResult<SeriesGeometry> {
    if points.is_empty() {
        return Err(ChartError::InvalidData(
            "series must contain at least one point".to_owned(),
        ));
    }
    if points.iter().any(|point| !point.is_finite()) {
        return Err(ChartError::InvalidData(
            "series points must be finite".to_owned(),
        ));
    }

    let sentinels = SentinelLayout::for_series(shape.filled);
    let internal = sentinels.wrap(points, baseline_y);
    let mapped = mapper.map_all(&internal);

    let path = if mapped.len() < 2 {
        Vec::new()
    } else if shape.curved {
        hermite_path(&mapped)
    } else {
        polyline_path(&mapped)
    };

    Ok(SeriesGeometry {
        points: mapped,
        sentinels,
        path,
    })
}
