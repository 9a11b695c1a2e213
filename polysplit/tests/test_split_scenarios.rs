mod test_utils;

use polysplit::{
    geometry::{Line, Polygon},
    line_string,
    progress::NoProgress,
    ring,
    split::{split_polygon, split_polygon_opt, SplitError, SplitMode, SplitOptions},
};
use test_utils::{
    annulus, create_property_set, property_sets_match, square, total_area, translate, u_shape,
    FragmentProperties, ModifiedPolygonSet,
};

fn props(
    ring_count: usize,
    area: f64,
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
) -> FragmentProperties {
    FragmentProperties::new(ring_count, area, min_x, min_y, max_x, max_y)
}

fn run_split_test(polygon: &Polygon, line: &Line, expected: &[FragmentProperties]) {
    let fragments = split_polygon(polygon, line).unwrap();
    let result = create_property_set(&fragments);
    assert!(
        property_sets_match(&result, expected),
        "split result does not match expected fragments"
    );
}

fn run_split_test_modified(polygon: &Polygon, line: &Line, expected: &[FragmentProperties]) {
    let modified_set = ModifiedPolygonSet::new(polygon, true, true);
    modified_set.accept_closure(&mut |modified, state| {
        let fragments = split_polygon(&modified, line).unwrap();
        let result = create_property_set(&fragments);
        assert!(
            property_sets_match(&result, expected),
            "modified state: {:?}",
            state
        );
    });
}

#[test]
fn simple_cross() {
    let polygon = square(10.0);
    let line = line_string![(5.0, -5.0), (5.0, 15.0)];
    let expected = [
        props(1, 50.0, 0.0, 0.0, 5.0, 10.0),
        props(1, 50.0, 5.0, 0.0, 10.0, 10.0),
    ];
    run_split_test(&polygon, &line, &expected);
    run_split_test_modified(&polygon, &line, &expected);
}

#[test]
fn line_fully_inside_does_not_split() {
    let polygon = square(10.0);
    let line = line_string![(2.0, 2.0), (8.0, 8.0)];
    assert!(split_polygon(&polygon, &line).unwrap().is_empty());
}

#[test]
fn line_dangling_into_polygon_does_not_split() {
    let polygon = square(10.0);
    let line = line_string![(5.0, -5.0), (5.0, 5.0)];
    assert!(split_polygon(&polygon, &line).unwrap().is_empty());
}

#[test]
fn line_missing_polygon_does_not_split() {
    let polygon = square(10.0);
    let line = line_string![(-5.0, -5.0), (-5.0, 15.0), (15.0, 15.0)];
    assert!(split_polygon(&polygon, &line).unwrap().is_empty());
}

#[test]
fn line_along_edge_does_not_split() {
    let polygon = square(10.0);
    let line = line_string![(-5.0, 10.0), (15.0, 10.0)];
    assert!(split_polygon(&polygon, &line).unwrap().is_empty());
}

#[test]
fn boundary_to_boundary_line() {
    let polygon = square(10.0);
    let line = line_string![(0.0, 5.0), (10.0, 5.0)];
    let expected = [
        props(1, 50.0, 0.0, 0.0, 10.0, 5.0),
        props(1, 50.0, 0.0, 5.0, 10.0, 10.0),
    ];
    run_split_test(&polygon, &line, &expected);
    run_split_test_modified(&polygon, &line, &expected);
}

#[test]
fn line_ending_on_boundary() {
    let polygon = square(10.0);
    let line = line_string![(5.0, -5.0), (5.0, 10.0)];
    let expected = [
        props(1, 50.0, 0.0, 0.0, 5.0, 10.0),
        props(1, 50.0, 5.0, 0.0, 10.0, 10.0),
    ];
    run_split_test(&polygon, &line, &expected);
}

#[test]
fn diagonal_through_corners() {
    let polygon = square(10.0);
    let line = line_string![(-1.0, -1.0), (11.0, 11.0)];
    let fragments = split_polygon(&polygon, &line).unwrap();
    assert_eq!(fragments.len(), 2);
    for f in fragments.iter() {
        assert_eq!(f.rings().len(), 1);
        assert_eq!(f.rings()[0].vertex_count(), 3);
        assert!((f.area() - 50.0).abs() < 1e-8);
    }
}

#[test]
fn bent_line_cuts_corner() {
    let polygon = square(10.0);
    let line = line_string![(-5.0, 5.0), (5.0, 5.0), (5.0, -5.0)];
    let expected = [
        props(1, 25.0, 0.0, 0.0, 5.0, 5.0),
        props(1, 75.0, 0.0, 0.0, 10.0, 10.0),
    ];
    run_split_test(&polygon, &line, &expected);
    run_split_test_modified(&polygon, &line, &expected);
}

#[test]
fn line_entering_and_leaving_same_edge() {
    let polygon = square(10.0);
    let line = line_string![(2.0, -1.0), (5.0, 3.0), (8.0, -1.0)];
    let expected = [
        props(1, 6.75, 2.75, 0.0, 7.25, 3.0),
        props(1, 93.25, 0.0, 0.0, 10.0, 10.0),
    ];
    run_split_test(&polygon, &line, &expected);
    run_split_test_modified(&polygon, &line, &expected);
}

#[test]
fn single_segment_crossing_non_convex_twice() {
    let polygon = u_shape();
    let line = line_string![(-5.0, 15.0), (35.0, 15.0)];
    let expected = [
        props(1, 50.0, 0.0, 15.0, 10.0, 20.0),
        props(1, 50.0, 20.0, 15.0, 30.0, 20.0),
        props(1, 400.0, 0.0, 0.0, 30.0, 15.0),
    ];
    run_split_test(&polygon, &line, &expected);
    run_split_test_modified(&polygon, &line, &expected);
}

#[test]
fn zigzag_line_three_strips() {
    let polygon = square(10.0);
    let line = line_string![(-1.0, 3.0), (11.0, 3.0), (11.0, 7.0), (-1.0, 7.0)];
    let expected = [
        props(1, 30.0, 0.0, 0.0, 10.0, 3.0),
        props(1, 40.0, 0.0, 3.0, 10.0, 7.0),
        props(1, 30.0, 0.0, 7.0, 10.0, 10.0),
    ];
    run_split_test(&polygon, &line, &expected);
    run_split_test_modified(&polygon, &line, &expected);
}

#[test]
fn self_crossing_line_four_triangles() {
    let polygon = square(10.0);
    let line = line_string![(-1.0, -1.0), (11.0, 11.0), (11.0, -1.0), (-1.0, 11.0)];
    let expected = [
        props(1, 25.0, 0.0, 0.0, 10.0, 5.0),
        props(1, 25.0, 0.0, 5.0, 10.0, 10.0),
        props(1, 25.0, 0.0, 0.0, 5.0, 10.0),
        props(1, 25.0, 5.0, 0.0, 10.0, 10.0),
    ];
    run_split_test(&polygon, &line, &expected);
}

#[test]
fn self_crossing_line_at_projected_coordinates() {
    let (ox, oy) = (512345.678, 4123456.789);
    let polygon = translate(&square(100.0), ox, oy);
    for d in [0.113, 0.313, 0.813, 1.013, 1.213] {
        let line = line_string![
            (ox - 10.0, oy - 10.0 + d),
            (ox + 110.0, oy + 110.0),
            (ox + 110.0, oy - 10.0),
            (ox - 10.0 + d, oy + 110.0)
        ];
        let fragments = split_polygon(&polygon, &line).unwrap();
        assert_eq!(fragments.len(), 4, "offset {}", d);
        assert!((total_area(&fragments) - 10000.0).abs() < 1e-6, "offset {}", d);
        assert!(fragments.iter().all(|f| f.area() > 1.0), "offset {}", d);
    }
}

#[test]
fn line_through_hole() {
    let polygon = annulus();
    let line = line_string![(-1.0, 5.0), (11.0, 5.0)];
    let expected = [
        props(1, 48.0, 0.0, 0.0, 10.0, 5.0),
        props(1, 48.0, 0.0, 5.0, 10.0, 10.0),
    ];
    run_split_test(&polygon, &line, &expected);
    run_split_test_modified(&polygon, &line, &expected);
}

#[test]
fn line_beside_hole_keeps_hole() {
    let polygon = annulus();
    let line = line_string![(2.0, -1.0), (2.0, 11.0)];
    let expected = [
        props(1, 20.0, 0.0, 0.0, 2.0, 10.0),
        props(2, 76.0, 2.0, 0.0, 10.0, 10.0),
    ];
    run_split_test(&polygon, &line, &expected);
    run_split_test_modified(&polygon, &line, &expected);
}

#[test]
fn line_from_hole_back_to_hole_cuts_pocket() {
    let polygon = annulus();
    let line = line_string![(5.0, 5.0), (5.0, 2.0), (8.0, 2.0), (8.0, 5.0), (5.0, 5.0)];
    let expected = [
        props(2, 88.0, 0.0, 0.0, 10.0, 10.0),
        props(1, 8.0, 5.0, 2.0, 8.0, 5.0),
    ];
    run_split_test(&polygon, &line, &expected);
}

#[test]
fn multi_part_untouched_parts_pass_through() {
    let polygon = Polygon::new(vec![
        ring![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
        ring![(20.0, 0.0), (30.0, 0.0), (30.0, 10.0), (20.0, 10.0)],
    ]);
    let line = line_string![(5.0, -5.0), (5.0, 15.0)];
    let expected = [
        props(1, 50.0, 0.0, 0.0, 5.0, 10.0),
        props(1, 50.0, 5.0, 0.0, 10.0, 10.0),
        props(1, 100.0, 20.0, 0.0, 30.0, 10.0),
    ];
    run_split_test(&polygon, &line, &expected);

    let missing = line_string![(15.0, -5.0), (15.0, 15.0)];
    assert!(split_polygon(&polygon, &missing).unwrap().is_empty());
}

#[test]
fn area_is_conserved() {
    let polygon = u_shape();
    let line = line_string![(-1.0, 2.0), (31.0, 17.0), (15.0, 25.0), (15.0, -5.0)];
    let fragments = split_polygon(&polygon, &line).unwrap();
    assert!(fragments.len() >= 2);
    assert!((total_area(&fragments) - polygon.area().abs()).abs() < 1e-8);
}

#[test]
fn fast_mode_single_crossing_segments() {
    let polygon = square(10.0);
    let line = line_string![(5.0, -5.0), (5.0, 5.0), (5.0, 15.0)];
    let options = SplitOptions {
        mode: SplitMode::Fast,
        ..Default::default()
    };
    let fragments = split_polygon_opt(&polygon, &line, &options, &mut NoProgress).unwrap();
    let expected = [
        props(1, 50.0, 0.0, 0.0, 5.0, 10.0),
        props(1, 50.0, 5.0, 0.0, 10.0, 10.0),
    ];
    assert!(property_sets_match(
        &create_property_set(&fragments),
        &expected
    ));
}

#[test]
fn fast_mode_refuses_multiple_crossings() {
    let polygon = u_shape();
    let line = line_string![(5.0, 15.0), (25.0, 15.0)];
    let options = SplitOptions {
        mode: SplitMode::Fast,
        ..Default::default()
    };
    let result = split_polygon_opt(&polygon, &line, &options, &mut NoProgress);
    assert_eq!(
        result,
        Err(SplitError::UnsupportedMultiplicity {
            segment: 0,
            crossings: 2
        })
    );

    // accurate mode accepts the segment, both ends dangle inside the arms so nothing is split
    assert!(split_polygon(&polygon, &line).unwrap().is_empty());

    let through = line_string![(-5.0, 15.0), (35.0, 15.0)];
    assert_eq!(
        split_polygon_opt(&polygon, &through, &options, &mut NoProgress),
        Err(SplitError::UnsupportedMultiplicity {
            segment: 0,
            crossings: 4
        })
    );
}

#[test]
fn invalid_input() {
    let line = line_string![(5.0, -5.0), (5.0, 15.0)];
    assert!(matches!(
        split_polygon(&Polygon::new(Vec::new()), &line),
        Err(SplitError::InvalidInput(_))
    ));

    let short = line_string![(5.0, -5.0)];
    assert!(matches!(
        split_polygon(&square(10.0), &short),
        Err(SplitError::InvalidInput(_))
    ));

    let nan = line_string![(5.0, f64::NAN), (5.0, 15.0)];
    assert!(matches!(
        split_polygon(&square(10.0), &nan),
        Err(SplitError::InvalidInput(_))
    ));

    let degenerate = Polygon::new(vec![ring![(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]]);
    assert!(matches!(
        split_polygon(&degenerate, &line),
        Err(SplitError::InvalidInput(_))
    ));

    let options = SplitOptions {
        tolerance: -1.0,
        ..Default::default()
    };
    assert!(matches!(
        split_polygon_opt(&square(10.0), &line, &options, &mut NoProgress),
        Err(SplitError::InvalidInput(_))
    ));
}
