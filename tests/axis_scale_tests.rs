use line_graph::ChartError;
use line_graph::core::{AxisOrientation, AxisScale};

fn build(values: Vec<f64>, length: f64) -> AxisScale {
    AxisScale::build(values, AxisOrientation::Horizontal, 40.0, length, 0.9).expect("valid scale")
}

#[test]
fn step_spreads_filled_length_over_intervals() {
    let x = build(vec![0.0, 1.0, 2.0, 3.0], 400.0);
    assert!((x.step() - 120.0).abs() <= 1e-9);

    let y = AxisScale::build(vec![0.0, 10.0, 20.0], AxisOrientation::Vertical, 40.0, 400.0, 0.9)
        .expect("valid scale");
    assert!((y.step() - 180.0).abs() <= 1e-9);
}

#[test]
fn reconcile_adopts_the_smaller_step_on_both_axes() {
    let mut x = build(vec![0.0, 1.0, 2.0, 3.0], 400.0);
    let mut y = AxisScale::build(vec![0.0, 10.0, 20.0], AxisOrientation::Vertical, 40.0, 400.0, 0.9)
        .expect("valid scale");

    let shared = AxisScale::reconcile(&mut x, &mut y);

    assert!((shared - 120.0).abs() <= 1e-9);
    assert_eq!(x.step(), y.step());
    assert!((y.natural_step() - 180.0).abs() <= 1e-9);
    assert_eq!(y.tick_positions(), vec![40.0, 160.0, 280.0]);
}

#[test]
fn last_tick_stays_inside_filled_part_of_axis() {
    let scale = build(vec![0.0, 5.0, 10.0, 15.0, 20.0], 300.0);
    let limit = scale.pixel_start() + scale.pixel_length() * scale.fill_fraction();
    assert!(scale.last_tick_position() <= limit + 1e-9);
    assert!(scale.last_tick_position() < scale.pixel_end());
    assert_eq!(scale.pixel_end(), 340.0);
}

#[test]
fn single_tick_divides_by_one() {
    let scale = build(vec![7.0], 400.0);
    assert!(scale.is_degenerate());
    assert!((scale.step() - 360.0).abs() <= 1e-9);
    assert_eq!(scale.last_tick_position(), scale.pixel_start());
    assert_eq!(scale.first_value(), 7.0);
    assert_eq!(scale.last_value(), 7.0);
}

#[test]
fn empty_ticks_fail_fast_with_axis_name() {
    let err = AxisScale::build(Vec::new(), AxisOrientation::Vertical, 40.0, 400.0, 0.9)
        .expect_err("empty ticks");
    assert!(matches!(
        err,
        ChartError::EmptyDomain {
            axis: AxisOrientation::Vertical
        }
    ));
    assert_eq!(err.to_string(), "y axis requires at least one tick value");
}

#[test]
fn invalid_geometry_is_rejected() {
    assert!(
        AxisScale::build(vec![0.0, 1.0], AxisOrientation::Horizontal, 40.0, -1.0, 0.9).is_err()
    );
    assert!(
        AxisScale::build(vec![0.0, 1.0], AxisOrientation::Horizontal, 40.0, 100.0, 0.0).is_err()
    );
    assert!(
        AxisScale::build(vec![0.0, 1.0], AxisOrientation::Horizontal, 40.0, 100.0, 1.5).is_err()
    );
    assert!(
        AxisScale::build(
            vec![0.0, f64::NAN],
            AxisOrientation::Horizontal,
            40.0,
            100.0,
            0.9
        )
        .is_err()
    );
}
