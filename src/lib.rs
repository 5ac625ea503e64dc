//! line-graph: multi-series line chart layout engine.
//!
//! The crate lays out two uniform axes from caller-supplied ticks, projects
//! series into pixel space, derives the height the chart needs and resolves
//! taps back to data indices. Drawing goes through the `render::Renderer`
//! trait so hosts can plug in any surface.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartDelegate, LineChart, SeriesInput};
pub use error::{ChartError, ChartResult};
