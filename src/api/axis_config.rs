use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Largest precision `rust_decimal` can represent.
pub const MAX_LABEL_PRECISION: u8 = 28;

/// Built-in policy used when the delegate does not supply a tick label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisLabelPolicy {
    /// Round values half away from zero to `precision` decimals.
    FixedDecimals {
        precision: u8,
        trim_trailing_zeros: bool,
    },
    /// Interpret values as unix seconds and format them in UTC.
    UtcDateTime { show_seconds: bool },
    /// Interpret values as unix seconds and print the UTC calendar date.
    UtcDate,
}

impl Default for AxisLabelPolicy {
    fn default() -> Self {
        Self::FixedDecimals {
            precision: 2,
            trim_trailing_zeros: true,
        }
    }
}

/// Fallback formatter configuration for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AxisLabelConfig {
    pub policy: AxisLabelPolicy,
}

impl AxisLabelConfig {
    #[must_use]
    pub fn fixed_decimals(precision: u8) -> Self {
        Self {
            policy: AxisLabelPolicy::FixedDecimals {
                precision,
                trim_trailing_zeros: false,
            },
        }
    }

    #[must_use]
    pub fn utc_date_time(show_seconds: bool) -> Self {
        Self {
            policy: AxisLabelPolicy::UtcDateTime { show_seconds },
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        if let AxisLabelPolicy::FixedDecimals { precision, .. } = self.policy {
            if precision > MAX_LABEL_PRECISION {
                return Err(ChartError::InvalidData(format!(
                    "label precision must be <= {MAX_LABEL_PRECISION}"
                )));
            }
        }
        Ok(self)
    }
}
