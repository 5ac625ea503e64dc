use line_graph::core::{
    AxisDomain, AxisOrientation, AxisScale, CoordinateMapper, DataPoint, PathCommand, PixelPoint,
    SentinelLayout, SeriesShape, project_series_geometry,
};

fn mapper() -> CoordinateMapper {
    let mut x = AxisScale::build(
        vec![0.0, 1.0, 2.0, 3.0],
        AxisOrientation::Horizontal,
        40.0,
        400.0,
        0.9,
    )
    .expect("x scale");
    let mut y = AxisScale::build(vec![0.0, 10.0, 20.0], AxisOrientation::Vertical, 40.0, 400.0, 0.9)
        .expect("y scale");
    AxisScale::reconcile(&mut x, &mut y);
    CoordinateMapper::new(
        &x,
        AxisDomain::unset().resolve(&x).expect("x domain"),
        &y,
        AxisDomain::unset().resolve(&y).expect("y domain"),
        PixelPoint::new(40.0, 40.0),
    )
}

fn sample() -> Vec<DataPoint> {
    vec![
        DataPoint::new(0.0, 0.0),
        DataPoint::new(1.0, 10.0),
        DataPoint::new(2.0, 5.0),
        DataPoint::new(3.0, 20.0),
    ]
}

#[test]
fn sentinel_layout_depends_on_fill() {
    assert_eq!(SentinelLayout::for_series(true).total(), 2);
    assert_eq!(SentinelLayout::for_series(false).total(), 0);
}

#[test]
fn raw_index_compensates_leading_sentinel() {
    let filled = SentinelLayout::for_series(true);
    assert_eq!(filled.raw_index(0, 4), None);
    assert_eq!(filled.raw_index(1, 4), Some(0));
    assert_eq!(filled.raw_index(2, 4), Some(1));
    assert_eq!(filled.raw_index(4, 4), Some(3));
    assert_eq!(filled.raw_index(5, 4), None);

    let plain = SentinelLayout::for_series(false);
    assert_eq!(plain.raw_index(2, 4), Some(2));
    assert_eq!(plain.raw_index(4, 4), None);
}

#[test]
fn wrap_places_sentinels_on_the_baseline() {
    let wrapped = SentinelLayout::for_series(true).wrap(&sample(), -5.0);
    assert_eq!(wrapped.len(), 6);
    assert_eq!(wrapped[0], DataPoint::new(0.0, -5.0));
    assert_eq!(wrapped[5], DataPoint::new(3.0, -5.0));
    assert_eq!(&wrapped[1..5], sample().as_slice());
}

#[test]
fn filled_series_markers_exclude_sentinels() {
    let shape = SeriesShape {
        filled: true,
        curved: false,
    };
    let geometry = project_series_geometry(&sample(), &mapper(), 0.0, shape).expect("geometry");

    assert_eq!(geometry.points().len(), 6);
    assert_eq!(geometry.markers().len(), 4);
    assert_eq!(geometry.data_len(), 4);
    assert_eq!(geometry.markers()[1], PixelPoint::new(160.0, 160.0));

    // Baseline ends sit at the first/last data x on the Y axis' first tick.
    assert_eq!(geometry.points()[0], PixelPoint::new(40.0, 40.0));
    assert_eq!(geometry.points()[5], PixelPoint::new(400.0, 40.0));
}

#[test]
fn straight_path_visits_every_internal_point() {
    let shape = SeriesShape {
        filled: true,
        curved: false,
    };
    let geometry = project_series_geometry(&sample(), &mapper(), 0.0, shape).expect("geometry");
    let path = geometry.path();

    assert_eq!(path.len(), 6);
    assert!(matches!(path[0], PathCommand::MoveTo(_)));
    assert!(path[1..].iter().all(|c| matches!(c, PathCommand::LineTo(_))));
    let ends: Vec<PixelPoint> = path.iter().map(|c| c.end_point()).collect();
    assert_eq!(ends, geometry.points());
}

#[test]
fn curved_path_passes_through_every_point() {
    let shape = SeriesShape {
        filled: false,
        curved: true,
    };
    let geometry = project_series_geometry(&sample(), &mapper(), 0.0, shape).expect("geometry");
    let path = geometry.path();

    assert_eq!(path.len(), 4);
    assert!(path[1..].iter().all(|c| matches!(c, PathCommand::CubicTo { .. })));
    let ends: Vec<PixelPoint> = path.iter().map(|c| c.end_point()).collect();
    assert_eq!(ends, geometry.points());
}

#[test]
fn single_point_series_keeps_its_marker() {
    let geometry = project_series_geometry(
        &[DataPoint::new(1.0, 10.0)],
        &mapper(),
        0.0,
        SeriesShape::default(),
    )
    .expect("geometry");

    assert!(geometry.path().is_empty());
    assert_eq!(geometry.markers(), &[PixelPoint::new(160.0, 160.0)]);
}

#[test]
fn single_point_filled_series_still_has_a_path() {
    let shape = SeriesShape {
        filled: true,
        curved: false,
    };
    let geometry =
        project_series_geometry(&[DataPoint::new(1.0, 10.0)], &mapper(), 0.0, shape)
            .expect("geometry");
    assert_eq!(geometry.path().len(), 3);
    assert_eq!(geometry.markers().len(), 1);
}

#[test]
fn empty_or_non_finite_series_is_rejected() {
    assert!(project_series_geometry(&[], &mapper(), 0.0, SeriesShape::default()).is_err());
    assert!(
        project_series_geometry(
            &[DataPoint::new(f64::INFINITY, 1.0)],
            &mapper(),
            0.0,
            SeriesShape::default()
        )
        .is_err()
    );
}

#[test]
fn curved_filled_path_has_continuous_curvature() {
    let shape = SeriesShape {
        filled: true,
        curved: true,
    };
    let geometry = project_series_geometry(&sample(), &mapper(), 0.0, shape).expect("geometry");
    let path = geometry.path();
    assert_eq!(path.len(), geometry.points().len());

    let mut start = path[0].end_point();
    let mut segments = Vec::new();
    for command in &path[1..] {
        let PathCommand::CubicTo {
            control1,
            control2,
            to,
        } = *command
        else {
            panic!("expected cubic segment, got {command:?}");
        };
        segments.push((start, control1, control2, to));
        start = to;
    }

    for pair in segments.windows(2) {
        let (_, c1, c2, p3) = pair[0];
        let (q0, d1, d2, _) = pair[1];
        let incoming = 6.0 * (p3.y - 2.0 * c2.y + c1.y);
        let outgoing = 6.0 * (q0.y - 2.0 * d1.y + d2.y);
        assert!(
            (incoming - outgoing).abs() <= 1e-6,
            "y'' jumps at {p3:?}: {incoming} vs {outgoing}"
        );
    }
}

#[test]
fn geometry_counts_stay_consistent_for_every_shape() {
    for filled in [false, true] {
        for len in 1..=4 {
            let shape = SeriesShape {
                filled,
                curved: true,
            };
            let geometry =
                project_series_geometry(&sample()[..len], &mapper(), 0.0, shape).expect("geometry");
            let sentinels = geometry.sentinels();

            assert_eq!(geometry.data_len(), len);
            assert_eq!(geometry.points().len(), len + sentinels.total());
            assert_eq!(geometry.markers().len(), len);
            for (raw, marker) in geometry.markers().iter().enumerate() {
                let internal = raw + sentinels.leading;
                assert_eq!(sentinels.raw_index(internal, len), Some(raw));
                assert_eq!(geometry.points()[internal], *marker);
            }
        }
    }
}
