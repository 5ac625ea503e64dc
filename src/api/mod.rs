mod axis_config;
mod axis_controller;
pub mod axis_label_format;
pub mod axis_label_layout;
mod chart;
mod chart_config;
mod delegate;
pub mod legend_layout;
mod render_frame_builder;
mod series_controller;
mod tap_controller;

pub use axis_config::{AxisLabelConfig, AxisLabelPolicy, MAX_LABEL_PRECISION};
pub use axis_label_format::format_axis_label;
pub use axis_label_layout::{AxisTickLabel, LabelBox};
pub use chart::{ChartAxes, LineChart};
pub use chart_config::ChartConfig;
pub use delegate::{ChartDelegate, HeightChangedHandler};
pub use legend_layout::{AxisTitleBlock, LegendRow};
pub use series_controller::{ChartSeries, SeriesInput};
