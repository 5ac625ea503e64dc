use crate::interaction::TapResult;

/// Host callbacks consulted while laying out labels and resolving taps.
///
/// Returning `None` from either formatter selects the axis' built-in
/// `AxisLabelConfig` formatter, so both axes degrade the same way.
pub trait ChartDelegate {
    fn format_x_tick_label(&self, value: f64) -> Option<String>;
    fn format_y_tick_label(&self, value: f64) -> Option<String>;
    fn on_tap(&mut self, result: &TapResult);
}

/// Callback fired synchronously whenever the chart height is recomputed.
pub type HeightChangedHandler = Box<dyn FnMut(f64) + 'static>;
