use crate::core::{AxisOrientation, AxisScale, PixelPoint};
use crate::render::TextHAlign;

/// Height of every tick label box.
pub const TICK_LABEL_BOX_HEIGHT_PX: f64 = 30.0;
/// Gap between Y tick labels and the vertical axis.
pub const Y_TICK_LABEL_GAP_PX: f64 = 3.0;
/// Offset of a Y tick label box below its tick.
pub const Y_TICK_LABEL_DROP_PX: f64 = 10.0;
/// Gap between X tick label boxes and the horizontal axis.
pub const X_TICK_LABEL_GAP_PX: f64 = 2.0;

/// Axis-aligned box in chart space; `y` is the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LabelBox {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.y + self.height
    }

    /// Horizontal text anchor for `align` inside the box.
    #[must_use]
    pub fn anchor_x(self, align: TextHAlign) -> f64 {
        match align {
            TextHAlign::Left => self.x,
            TextHAlign::Center => self.x + self.width / 2.0,
            TextHAlign::Right => self.x + self.width,
        }
    }
}

/// One positioned tick label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTickLabel {
    pub value: f64,
    pub text: String,
    pub tick: PixelPoint,
    pub bounds: LabelBox,
    pub align: TextHAlign,
}

/// Right-aligned box left of the vertical axis.
#[must_use]
pub fn y_tick_label_box(tick_y: f64, axis_x: f64) -> LabelBox {
    LabelBox::new(
        0.0,
        tick_y - Y_TICK_LABEL_DROP_PX,
        axis_x - Y_TICK_LABEL_GAP_PX,
        TICK_LABEL_BOX_HEIGHT_PX,
    )
}

/// One-step-wide box centered under a horizontal tick.
#[must_use]
pub fn x_tick_label_box(tick_x: f64, axis_y: f64, step: f64) -> LabelBox {
    LabelBox::new(
        tick_x - step / 2.0,
        axis_y - TICK_LABEL_BOX_HEIGHT_PX - X_TICK_LABEL_GAP_PX,
        step,
        TICK_LABEL_BOX_HEIGHT_PX,
    )
}

/// Positions one label per tick of `scale`.
///
/// `origin` is where the axes meet; `format` turns a tick value into text.
pub fn layout_tick_labels(
    scale: &AxisScale,
    origin: PixelPoint,
    mut format: impl FnMut(f64) -> String,
) -> Vec<AxisTickLabel> {
    scale
        .values()
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let position = scale.tick_position(index);
            let (tick, bounds, align) = match scale.orientation() {
                AxisOrientation::Vertical => (
                    PixelPoint::new(origin.x, position),
                    y_tick_label_box(position, origin.x),
                    TextHAlign::Right,
                ),
                AxisOrientation::Horizontal => (
                    PixelPoint::new(position, origin.y),
                    x_tick_label_box(position, origin.y, scale.step()),
                    TextHAlign::Center,
                ),
            };
            AxisTickLabel {
                value: *value,
                text: format(*value),
                tick,
                bounds,
                align,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_label_box_hugs_the_axis() {
        let bounds = y_tick_label_box(100.0, 40.0);
        assert_eq!(bounds, LabelBox::new(0.0, 90.0, 37.0, 30.0));
        assert_eq!(bounds.anchor_x(TextHAlign::Right), 37.0);
    }

    #[test]
    fn x_label_box_is_centered_on_tick() {
        let bounds = x_tick_label_box(160.0, 40.0, 120.0);
        assert_eq!(bounds, LabelBox::new(100.0, 8.0, 120.0, 30.0));
        assert_eq!(bounds.anchor_x(TextHAlign::Center), 160.0);
        assert_eq!(bounds.top(), 38.0);
    }
}
