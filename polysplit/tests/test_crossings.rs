use polysplit::{
    core::math::coord,
    geometry::PolygonPart,
    line_string,
    progress::NoProgress,
    ring,
    split::{
        internal::crossings::{find_line_crossings, sort_by_distance},
        IntersectionRecord,
    },
};

fn record(x: f64, edge_index: usize) -> IntersectionRecord {
    IntersectionRecord {
        point: coord(x, 0.0),
        ring_index: 0,
        edge_index,
        segment_index: 0,
    }
}

#[test]
fn sort_is_stable() {
    // distances 3, 1, 2, 1 from the origin, edge index tags discovery order
    let mut records = vec![record(3.0, 1), record(1.0, 2), record(2.0, 3), record(-1.0, 4)];
    sort_by_distance(&mut records, coord(0.0, 0.0));
    let order: Vec<usize> = records.iter().map(|r| r.edge_index).collect();
    assert_eq!(order, vec![2, 4, 3, 1]);
}

#[test]
fn line_crossings_per_segment() {
    let part = PolygonPart::new(
        ring![(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)],
        vec![ring![(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)]],
    );
    let line = line_string![(-1.0, 5.0), (11.0, 5.0), (11.0, 20.0)];
    let crossings = find_line_crossings(&part, &line, 1e-10, &NoProgress).unwrap();
    assert_eq!(crossings.len(), 2);
    assert!(crossings[1].is_empty());

    let first = &crossings[0];
    assert_eq!(first.len(), 4);
    let xs: Vec<f64> = first.iter().map(|r| r.point.x).collect();
    assert_eq!(xs, vec![0.0, 4.0, 6.0, 10.0]);
    let rings: Vec<usize> = first.iter().map(|r| r.ring_index).collect();
    assert_eq!(rings, vec![0, 1, 1, 0]);
    assert!(first.iter().all(|r| r.segment_index == 0));
}
