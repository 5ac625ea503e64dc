pub mod axis_scale;
pub mod interpolation;
pub mod line_series;
pub mod mapper;
pub mod path;
pub mod types;

pub use axis_scale::{AxisOrientation, AxisScale};
pub use interpolation::hermite_path;
pub use line_series::{
    SentinelLayout, SeriesGeometry, SeriesShape, project_series_geometry,
};
pub use mapper::{AxisDomain, CoordinateMapper, ResolvedDomain};
pub use path::{PathCommand, polyline_path};
pub use types::{DataPoint, PixelPoint, Viewport};
