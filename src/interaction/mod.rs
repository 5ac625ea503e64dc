use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, PixelPoint, SeriesGeometry};

/// Default tap tolerance around a marker, in pixels.
pub const DEFAULT_HIT_RADIUS_PX: f64 = 30.0;

/// Index reported for a series with no point inside the tap radius.
pub const NO_HIT: usize = usize::MAX;

/// Returns the index of the candidate closest to `query` within `radius`.
///
/// Only candidates strictly closer than `radius` qualify. Equal distances keep
/// the earlier index.
#[must_use]
pub fn nearest_point_index(
    query: PixelPoint,
    candidates: &[PixelPoint],
    radius: f64,
) -> Option<usize> {
    nearest_point_index_by(query, candidates, radius, |_| true)
}

/// Same as [`nearest_point_index`], restricted to indices `accept` admits.
#[must_use]
pub fn nearest_point_index_by(
    query: PixelPoint,
    candidates: &[PixelPoint],
    radius: f64,
    accept: impl Fn(usize) -> bool,
) -> Option<usize> {
    let mut best: Option<(OrderedFloat<f64>, usize)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        if !accept(index) {
            continue;
        }
        let distance = candidate.distance_to(query);
        if distance.is_nan() || distance >= radius {
            continue;
        }
        let distance = OrderedFloat(distance);
        match best {
            Some((current, _)) if current <= distance => {}
            _ => best = Some((distance, index)),
        }
    }
    best.map(|(_, index)| index)
}

/// Resolves a tap against one series and returns the raw data index.
///
/// Synthetic baseline points are never hit targets.
#[must_use]
pub fn hit_test_series(geometry: &SeriesGeometry, query: PixelPoint, radius: f64) -> Option<usize> {
    let sentinels = geometry.sentinels();
    let data_len = geometry.data_len();
    let internal = nearest_point_index_by(query, geometry.points(), radius, |index| {
        sentinels.raw_index(index, data_len).is_some()
    })?;
    sentinels.raw_index(internal, data_len)
}

/// Outcome of one tap, aligned 1:1 with the chart's series order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TapResult {
    /// Tap location in chart space (already mirrored).
    pub location: PixelPoint,
    /// Raw data index hit in each series.
    pub indices: Vec<Option<usize>>,
    /// Raw data of each series, unmodified.
    pub values: Vec<Vec<DataPoint>>,
}

impl TapResult {
    /// Indices with misses encoded as [`NO_HIT`].
    #[must_use]
    pub fn indices_or_sentinel(&self) -> Vec<usize> {
        self.indices
            .iter()
            .map(|index| index.unwrap_or(NO_HIT))
            .collect()
    }

    #[must_use]
    pub fn hit_count(&self) -> usize {
        self.indices.iter().filter(|index| index.is_some()).count()
    }

    /// Data point hit in series `series`, if any.
    #[must_use]
    pub fn hit_value(&self, series: usize) -> Option<DataPoint> {
        let index = (*self.indices.get(series)?)?;
        self.values.get(series)?.get(index).copied()
    }
}
