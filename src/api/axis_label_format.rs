use chrono::{DateTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::{AxisLabelConfig, AxisLabelPolicy};

/// Formats one tick value with the built-in axis policy.
#[must_use]
pub fn format_axis_label(value: f64, config: AxisLabelConfig) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    match config.policy {
        AxisLabelPolicy::FixedDecimals {
            precision,
            trim_trailing_zeros,
        } => {
            let text = format_fixed_decimals(value, precision);
            if trim_trailing_zeros {
                trim_axis_decimal(text)
            } else {
                text
            }
        }
        AxisLabelPolicy::UtcDateTime { show_seconds } => {
            let pattern = if show_seconds {
                "%Y-%m-%d %H:%M:%S"
            } else {
                "%Y-%m-%d %H:%M"
            };
            format_unix_seconds(value, pattern)
        }
        AxisLabelPolicy::UtcDate => format_unix_seconds(value, "%Y-%m-%d"),
    }
}

fn format_unix_seconds(value: f64, pattern: &str) -> String {
    let seconds = value.round() as i64;
    let Some(dt) = DateTime::<Utc>::from_timestamp(seconds, 0) else {
        return format_fixed_decimals(value, 2);
    };
    dt.format(pattern).to_string()
}

fn format_fixed_decimals(value: f64, precision: u8) -> String {
    let Some(decimal) = Decimal::from_f64(value) else {
        let precision = usize::from(precision);
        return format!("{value:.precision$}");
    };

    let mut rounded = decimal
        .round_dp_with_strategy(u32::from(precision), RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.rescale(u32::from(precision));
    rounded.to_string()
}

fn trim_axis_decimal(mut text: String) -> String {
    if text.contains('.') {
        let trimmed_len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed_len);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_decimals_round_half_away_from_zero() {
        let config = AxisLabelConfig::fixed_decimals(2);
        assert_eq!(format_axis_label(0.125, config), "0.13");
        assert_eq!(format_axis_label(-0.125, config), "-0.13");
        assert_eq!(format_axis_label(10.0, config), "10.00");
    }

    #[test]
    fn trimming_drops_zero_fraction_and_separator() {
        let config = AxisLabelConfig::default();
        assert_eq!(format_axis_label(10.0, config), "10");
        assert_eq!(format_axis_label(12.5, config), "12.5");
        assert_eq!(format_axis_label(0.129, config), "0.13");
        assert_eq!(format_axis_label(-0.001, config), "0");
    }

    #[test]
    fn trim_leaves_integers_untouched() {
        assert_eq!(trim_axis_decimal("100".to_owned()), "100");
        assert_eq!(trim_axis_decimal("100.50".to_owned()), "100.5");
    }

    #[test]
    fn utc_policies_format_unix_seconds() {
        let value = 1_700_000_000.0;
        assert_eq!(
            format_axis_label(value, AxisLabelConfig::utc_date_time(false)),
            "2023-11-14 22:13"
        );
        assert_eq!(
            format_axis_label(value, AxisLabelConfig::utc_date_time(true)),
            "2023-11-14 22:13:20"
        );
        assert_eq!(
            format_axis_label(
                value,
                AxisLabelConfig {
                    policy: AxisLabelPolicy::UtcDate
                }
            ),
            "2023-11-14"
        );
    }

    #[test]
    fn non_finite_values_have_a_stable_label() {
        assert_eq!(format_axis_label(f64::NAN, AxisLabelConfig::default()), "nan");
    }
}
