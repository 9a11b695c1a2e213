use polysplit::{
    geometry::{Polygon, PolygonPart, Ring},
    ring,
};

/// Axis aligned square from `(0, 0)` to `(size, size)`.
pub fn square(size: f64) -> Polygon<f64> {
    Polygon::new(vec![ring![(0.0, 0.0), (size, 0.0), (size, size), (0.0, size)]])
}

/// U shaped polygon 30 wide and 20 tall with a 10 x 10 notch cut from the top middle.
pub fn u_shape() -> Polygon<f64> {
    Polygon::new(vec![ring![
        (0.0, 0.0),
        (30.0, 0.0),
        (30.0, 20.0),
        (20.0, 20.0),
        (20.0, 10.0),
        (10.0, 10.0),
        (10.0, 20.0),
        (0.0, 20.0),
    ]])
}

/// 10 x 10 square with a 2 x 2 hole in the middle.
pub fn annulus() -> Polygon<f64> {
    Polygon::new(vec![
        ring![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
        ring![(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)],
    ])
}

/// Regular polygon with `n` vertexes around `(0, 0)`, first vertex rotated by `start_angle`.
pub fn regular_polygon(n: usize, radius: f64, start_angle: f64) -> Polygon<f64> {
    let step = std::f64::consts::TAU / n as f64;
    let coords = (0..n)
        .map(|i| {
            let a = start_angle + step * i as f64;
            polysplit::geometry::coord(radius * a.cos(), radius * a.sin())
        })
        .collect();
    Polygon::new(vec![Ring::new(coords)])
}

/// Part with clockwise shell and counter clockwise holes, as produced by ring preparation.
pub fn oriented_part(polygon: &Polygon<f64>) -> PolygonPart<f64> {
    let mut rings = polygon.rings().iter().cloned();
    let shell = rings.next().unwrap();
    PolygonPart::new(shell, rings.collect()).into_oriented()
}

/// Copy of `polygon` moved by `(dx, dy)`.
pub fn translate(polygon: &Polygon<f64>, dx: f64, dy: f64) -> Polygon<f64> {
    let rings = polygon
        .rings()
        .iter()
        .map(|r| {
            Ring::new(
                r.coords()
                    .iter()
                    .map(|c| polysplit::geometry::coord(c.x + dx, c.y + dy))
                    .collect(),
            )
        })
        .collect();
    Polygon::new(rings)
}
