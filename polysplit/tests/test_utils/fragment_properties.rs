use polysplit::{core::traits::Real, geometry::Polygon, AABB};

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Holds a set of properties of a fragment polygon for comparison in tests
#[derive(Debug, Copy, Clone)]
pub struct FragmentProperties {
    pub ring_count: usize,
    pub area: f64,
    pub extents: AABB<f64>,
}

impl FragmentProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-8;

    pub fn new(
        ring_count: usize,
        area: f64,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Self {
        Self {
            ring_count,
            area,
            extents: AABB::new(min_x, min_y, max_x, max_y),
        }
    }

    pub fn from_polygon(polygon: &Polygon<f64>) -> Self {
        Self {
            ring_count: polygon.rings().len(),
            area: polygon.area(),
            extents: polygon.extents().unwrap(),
        }
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.ring_count == other.ring_count
            && self.area.fuzzy_eq_eps(other.area, eps)
            && aabb_fuzzy_eq_eps(&self.extents, &other.extents, eps)
    }
}

pub fn create_property_set(polygons: &[Polygon<f64>]) -> Vec<FragmentProperties> {
    polygons.iter().map(FragmentProperties::from_polygon).collect()
}

pub fn property_sets_match(
    result_set: &[FragmentProperties],
    expected_set: &[FragmentProperties],
) -> bool {
    let mut sets_match = true;
    if result_set.len() != expected_set.len() {
        sets_match = false;
    } else {
        // simple N^2 comparison, fragment sets are small
        for properties_expected in expected_set {
            let match_count = result_set
                .iter()
                .filter(|properties_result| {
                    properties_expected
                        .fuzzy_eq_eps(properties_result, FragmentProperties::PROP_CMP_EPS)
                })
                .count();

            if match_count != 1 {
                sets_match = false;
                break;
            }
        }
    }

    if !sets_match {
        eprintln!("result:\n{:?}", result_set);
        eprintln!("expected:\n{:?}", expected_set);
    }

    sets_match
}

/// Sum of the fragment areas.
pub fn total_area(polygons: &[Polygon<f64>]) -> f64 {
    polygons.iter().map(|p| p.area()).sum()
}
