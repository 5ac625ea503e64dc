use crate::render::Color;

use super::ChartConfig;
use super::axis_label_layout::LabelBox;

pub const LEGEND_SWATCH_X_PX: f64 = 20.0;
pub const LEGEND_SWATCH_WIDTH_PX: f64 = 20.0;
pub const LEGEND_SWATCH_HEIGHT_PX: f64 = 2.0;
pub const LEGEND_SWATCH_CORNER_RADIUS_PX: f64 = 1.0;
pub const LEGEND_TEXT_GAP_PX: f64 = 5.0;

/// Legend block height once `row_count` rows are present.
///
/// The block never shrinks below `current`, which starts at the axis-title
/// block height.
#[must_use]
pub fn legend_height_for_rows(row_count: usize, row_height: f64, current: f64) -> f64 {
    (row_count as f64 * row_height).max(current)
}

/// One legend entry: color swatch plus series title.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow {
    pub title: String,
    pub color: Option<Color>,
    pub swatch: LabelBox,
    pub text: LabelBox,
}

/// Axis-title pair stacked in the right half of the legend block.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTitleBlock {
    pub y_title: String,
    pub x_title: String,
    pub y_bounds: LabelBox,
    pub x_bounds: LabelBox,
}

/// Lays out legend row `index` in the left half of the block starting at
/// `block_y`.
#[must_use]
pub fn layout_legend_row(
    index: usize,
    title: &str,
    color: Option<Color>,
    block_y: f64,
    config: &ChartConfig,
) -> LegendRow {
    let row_height = config.legend_row_height_px;
    let row_width = f64::from(config.viewport.width) / 2.0;
    let row_y = block_y + index as f64 * row_height;

    let swatch = LabelBox::new(
        LEGEND_SWATCH_X_PX,
        row_y + row_height / 2.0,
        LEGEND_SWATCH_WIDTH_PX,
        LEGEND_SWATCH_HEIGHT_PX,
    );
    let text_x = LEGEND_SWATCH_X_PX + LEGEND_SWATCH_WIDTH_PX + LEGEND_TEXT_GAP_PX;
    let text = LabelBox::new(
        text_x,
        row_y,
        row_width - text_x - LEGEND_SWATCH_WIDTH_PX,
        row_height,
    );

    LegendRow {
        title: title.to_owned(),
        color,
        swatch,
        text,
    }
}

#[must_use]
pub fn layout_axis_titles(
    x_title: &str,
    y_title: &str,
    block_y: f64,
    config: &ChartConfig,
) -> AxisTitleBlock {
    let half_width = f64::from(config.viewport.width) / 2.0;
    let row_height = config.axis_title_row_height_px;

    AxisTitleBlock {
        y_title: format!("Y-axis: {y_title}"),
        x_title: format!("X-axis: {x_title}"),
        y_bounds: LabelBox::new(half_width, block_y, half_width, row_height),
        x_bounds: LabelBox::new(half_width, block_y + row_height, half_width, row_height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Viewport;

    #[test]
    fn legend_height_grows_only_past_current() {
        assert_eq!(legend_height_for_rows(1, 20.0, 45.0), 45.0);
        assert_eq!(legend_height_for_rows(2, 20.0, 45.0), 45.0);
        assert_eq!(legend_height_for_rows(3, 20.0, 45.0), 60.0);
    }

    #[test]
    fn rows_stack_from_block_start() {
        let config = ChartConfig::new(Viewport::new(480, 0));
        let row = layout_legend_row(2, "flow", Some(Color::BLACK), 480.0, &config);
        assert_eq!(row.swatch, LabelBox::new(20.0, 530.0, 20.0, 2.0));
        assert_eq!(row.text, LabelBox::new(45.0, 520.0, 175.0, 20.0));
    }

    #[test]
    fn titles_take_the_right_half() {
        let config = ChartConfig::new(Viewport::new(480, 0));
        let block = layout_axis_titles("time", "level", 100.0, &config);
        assert_eq!(block.y_title, "Y-axis: level");
        assert_eq!(block.x_title, "X-axis: time");
        assert_eq!(block.y_bounds, LabelBox::new(240.0, 100.0, 240.0, 20.0));
        assert_eq!(block.x_bounds, LabelBox::new(240.0, 120.0, 240.0, 20.0));
    }
}
