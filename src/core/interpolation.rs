//! Smooth-curve construction for curved series.
//!
//! Curves are natural cubic splines expressed as Bezier segments: every input
//! point is a segment end point, and adjacent segments agree on both first and
//! second derivative at their common point. Each segment spans one unit of
//! the spline parameter, so a tangent `m` at `p` becomes the control `p ± m/3`.

use crate::core::{PathCommand, PixelPoint, polyline_path};

/// Builds an open natural cubic spline through every point in order.
///
/// Fewer than two points yield the same commands as a polyline. Two points
/// yield a single straight cubic.
#[must_use]
pub fn hermite_path(points: &[PixelPoint]) -> Vec<PathCommand> {
    if points.len() < 2 {
        return polyline_path(points);
    }

    let tangents = natural_spline_tangents(points);
    let mut commands = Vec::with_capacity(points.len());
    commands.push(PathCommand::MoveTo(points[0]));

    for (segment, ends) in points.windows(2).enumerate() {
        let (current, next) = (ends[0], ends[1]);
        let start = tangents[segment];
        let end = tangents[segment + 1];

        commands.push(PathCommand::CubicTo {
            control1: PixelPoint::new(current.x + start.x / 3.0, current.y + start.y / 3.0),
            control2: PixelPoint::new(next.x - end.x / 3.0, next.y - end.y / 3.0),
            to: next,
        });
    }

    commands
}

/// Solves the natural-spline tridiagonal system for per-point tangents.
///
/// Rows are `2m0 + m1 = 3(p1 - p0)`, `m(i-1) + 4m(i) + m(i+1) = 3(p(i+1) - p(i-1))`
/// and `m(n-2) + 2m(n-1) = 3(p(n-1) - p(n-2))`, solved for both coordinates at
/// once with the Thomas algorithm. The matrix is strictly diagonally dominant,
/// so every pivot is at least 1.
fn natural_spline_tangents(points: &[PixelPoint]) -> Vec<PixelPoint> {
    let count = points.len();
    let last = count - 1;
    let mut upper = vec![0.0; count];
    let mut rhs = vec![PixelPoint::new(0.0, 0.0); count];

    for index in 0..count {
        let (lower, diagonal, above) = match index {
            0 => (0.0, 2.0, 1.0),
            i if i == last => (1.0, 2.0, 0.0),
            _ => (1.0, 4.0, 1.0),
        };
        let before = points[index.saturating_sub(1)];
        let after = points[(index + 1).min(last)];
        let chord = PixelPoint::new(3.0 * (after.x - before.x), 3.0 * (after.y - before.y));

        let (pivot, carried) = if index == 0 {
            (diagonal, chord)
        } else {
            let previous = rhs[index - 1];
            (
                diagonal - lower * upper[index - 1],
                PixelPoint::new(chord.x - lower * previous.x, chord.y - lower * previous.y),
            )
        };
        upper[index] = above / pivot;
        rhs[index] = PixelPoint::new(carried.x / pivot, carried.y / pivot);
    }

    for index in (0..last).rev() {
        let next = rhs[index + 1];
        let current = rhs[index];
        rhs[index] = PixelPoint::new(
            current.x - upper[index] * next.x,
            current.y - upper[index] * next.y,
        );
    }

    rhs
}

#[cfg(test)]
mod tests {
    use super::hermite_path;
    use crate::core::{PathCommand, PixelPoint};

    fn sample() -> Vec<PixelPoint> {
        vec![
            PixelPoint::new(0.0, 0.0),
            PixelPoint::new(10.0, 20.0),
            PixelPoint::new(20.0, 5.0),
            PixelPoint::new(30.0, 30.0),
        ]
    }

    #[test]
    fn curve_passes_through_every_point() {
        let points = sample();
        let commands = hermite_path(&points);
        assert_eq!(commands.len(), points.len());

        let ends: Vec<PixelPoint> = commands.iter().map(|c| c.end_point()).collect();
        assert_eq!(ends, points);
    }

    fn cubic_segments(commands: &[PathCommand]) -> Vec<(PixelPoint, PixelPoint, PixelPoint, PixelPoint)> {
        let mut start = commands[0].end_point();
        commands[1..]
            .iter()
            .map(|command| {
                let PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } = *command
                else {
                    panic!("expected cubic segment, got {command:?}");
                };
                let segment = (start, control1, control2, to);
                start = to;
                segment
            })
            .collect()
    }

    #[test]
    fn adjacent_segments_share_tangent_direction() {
        let segments = cubic_segments(&hermite_path(&sample()));
        for pair in segments.windows(2) {
            let (_, _, incoming, joint) = pair[0];
            let (_, outgoing, _, _) = pair[1];
            // Incoming and outgoing handles mirror each other around the joint.
            assert!((joint.x - incoming.x - (outgoing.x - joint.x)).abs() <= 1e-9);
            assert!((joint.y - incoming.y - (outgoing.y - joint.y)).abs() <= 1e-9);
        }
    }

    #[test]
    fn second_derivative_is_continuous_at_every_joint() {
        let segments = cubic_segments(&hermite_path(&sample()));
        assert_eq!(segments.len(), 3);
        for pair in segments.windows(2) {
            let (_, c1, c2, p3) = pair[0];
            let (q0, d1, d2, _) = pair[1];
            let incoming_x = 6.0 * (p3.x - 2.0 * c2.x + c1.x);
            let incoming_y = 6.0 * (p3.y - 2.0 * c2.y + c1.y);
            let outgoing_x = 6.0 * (q0.x - 2.0 * d1.x + d2.x);
            let outgoing_y = 6.0 * (q0.y - 2.0 * d1.y + d2.y);
            assert!((incoming_x - outgoing_x).abs() <= 1e-9, "x'' jumps at {p3:?}");
            assert!((incoming_y - outgoing_y).abs() <= 1e-9, "y'' jumps at {p3:?}");
        }
    }

    #[test]
    fn curve_ends_have_zero_curvature() {
        let segments = cubic_segments(&hermite_path(&sample()));
        let (p0, c1, c2, _) = segments[0];
        assert!((p0.y - 2.0 * c1.y + c2.y).abs() <= 1e-9);
        let (_, c1, c2, p3) = segments[segments.len() - 1];
        assert!((p3.y - 2.0 * c2.y + c1.y).abs() <= 1e-9);
    }

    #[test]
    fn two_points_make_a_straight_segment() {
        let a = PixelPoint::new(0.0, 0.0);
        let b = PixelPoint::new(30.0, 60.0);
        let commands = hermite_path(&[a, b]);
        assert_eq!(
            commands[1],
            PathCommand::CubicTo {
                control1: PixelPoint::new(10.0, 20.0),
                control2: PixelPoint::new(20.0, 40.0),
                to: b,
            }
        );
    }

    #[test]
    fn short_input_degrades_to_polyline() {
        assert!(hermite_path(&[]).is_empty());
        let single = hermite_path(&[PixelPoint::new(3.0, 4.0)]);
        assert_eq!(single, vec![PathCommand::MoveTo(PixelPoint::new(3.0, 4.0))]);
    }
}
