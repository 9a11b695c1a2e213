mod test_utils;

use polysplit::{
    core::math::coord,
    geometry::{Line, Polygon},
    split::split_polygon,
};
use proptest::prelude::*;
use test_utils::{annulus, regular_polygon, square, total_area, translate};

proptest! {
    #[test]
    fn straight_cut_through_regular_polygon(
        n in 3usize..16,
        start_angle in 0.0f64..1.0,
        angle in 0.0f64..std::f64::consts::PI,
        offset_x in -1.0f64..1.0,
        offset_y in -1.0f64..1.0,
    ) {
        let polygon = regular_polygon(n, 10.0, start_angle);
        let (dx, dy) = (30.0 * angle.cos(), 30.0 * angle.sin());
        let line = Line::new(vec![
            coord(offset_x - dx, offset_y - dy),
            coord(offset_x + dx, offset_y + dy),
        ]);

        let fragments = split_polygon(&polygon, &line).unwrap();
        prop_assert_eq!(fragments.len(), 2);
        let expected = polygon.area().abs();
        prop_assert!((total_area(&fragments) - expected).abs() < 1e-8);
        prop_assert!(fragments.iter().all(|f| f.area() > 0.0));
    }

    #[test]
    fn bent_cut_conserves_area(
        mid_x in -3.0f64..3.0,
        mid_y in -3.0f64..3.0,
        end_angle in 0.3f64..2.8,
    ) {
        let polygon = regular_polygon(8, 10.0, 0.1);
        let line = Line::new(vec![
            coord(-30.0, mid_y),
            coord(mid_x, mid_y),
            coord(mid_x + 30.0 * end_angle.cos(), mid_y + 30.0 * end_angle.sin()),
        ]);

        let fragments = split_polygon(&polygon, &line).unwrap();
        prop_assert_eq!(fragments.len(), 2);
        prop_assert!((total_area(&fragments) - polygon.area().abs()).abs() < 1e-8);
    }

    #[test]
    fn x_cut_through_translated_squares(
        ox in -1e7f64..1e7,
        oy in -1e7f64..1e7,
        d1 in 0.1f64..20.0,
        d2 in 0.1f64..20.0,
    ) {
        // two islands, the line only reaches the first
        let mut rings = square(100.0).into_rings();
        rings.extend(translate(&square(100.0), 200.0, 0.0).into_rings());
        let polygon = translate(&Polygon::new(rings), ox, oy);
        let line = Line::new(vec![
            coord(ox - 10.0, oy - 10.0 + d1),
            coord(ox + 110.0, oy + 110.0),
            coord(ox + 110.0, oy - 10.0),
            coord(ox - 10.0 + d2, oy + 110.0),
        ]);

        let fragments = split_polygon(&polygon, &line).unwrap();
        prop_assert_eq!(fragments.len(), 5);
        prop_assert!((total_area(&fragments) - 20000.0).abs() < 1e-5);
        prop_assert!(fragments.iter().all(|f| f.area() > 0.0));
    }

    #[test]
    fn zigzag_cut_through_translated_annulus(
        ox in -1e7f64..1e7,
        oy in -1e7f64..1e7,
        y1 in 0.5f64..3.5,
        y2 in 4.5f64..5.5,
        y3 in 6.5f64..9.5,
    ) {
        // middle pass runs through the hole, the turns lie outside the shell
        let polygon = translate(&annulus(), ox, oy);
        let line = Line::new(vec![
            coord(ox - 1.0, oy + y1),
            coord(ox + 11.0, oy + y1),
            coord(ox + 11.0, oy + y2),
            coord(ox - 1.0, oy + y2),
            coord(ox - 1.0, oy + y3),
            coord(ox + 11.0, oy + y3),
        ]);

        let fragments = split_polygon(&polygon, &line).unwrap();
        prop_assert_eq!(fragments.len(), 4);
        prop_assert!((total_area(&fragments) - 96.0).abs() < 1e-5);
        prop_assert!(fragments.iter().all(|f| f.area() > 0.0));
        prop_assert!(fragments.iter().all(|f| f.rings().len() == 1));
    }
}
