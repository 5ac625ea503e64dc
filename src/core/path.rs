use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;

/// One vector-path instruction in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(PixelPoint),
    LineTo(PixelPoint),
    /// Cubic Bezier segment from the current point to `to`.
    CubicTo {
        control1: PixelPoint,
        control2: PixelPoint,
        to: PixelPoint,
    },
}

impl PathCommand {
    /// Applies `transform` to every point the command carries.
    #[must_use]
    pub fn map_points(self, transform: impl Fn(PixelPoint) -> PixelPoint) -> Self {
        match self {
            Self::MoveTo(point) => Self::MoveTo(transform(point)),
            Self::LineTo(point) => Self::LineTo(transform(point)),
            Self::CubicTo {
                control1,
                control2,
                to,
            } => Self::CubicTo {
                control1: transform(control1),
                control2: transform(control2),
                to: transform(to),
            },
        }
    }

    #[must_use]
    pub fn end_point(self) -> PixelPoint {
        match self {
            Self::MoveTo(point) | Self::LineTo(point) => point,
            Self::CubicTo { to, .. } => to,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        let finite = |point: PixelPoint| point.x.is_finite() && point.y.is_finite();
        match self {
            Self::MoveTo(point) | Self::LineTo(point) => finite(point),
            Self::CubicTo {
                control1,
                control2,
                to,
            } => finite(control1) && finite(control2) && finite(to),
        }
    }
}

/// Builds a straight polyline through `points`.
#[must_use]
pub fn polyline_path(points: &[PixelPoint]) -> Vec<PathCommand> {
    let mut commands = Vec::with_capacity(points.len());
    for (index, point) in points.iter().enumerate() {
        if index == 0 {
            commands.push(PathCommand::MoveTo(*point));
        } else {
            commands.push(PathCommand::LineTo(*point));
        }
    }
    commands
}
