/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Used by the construction macros to count repetitions for reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a closed ring from a list of (x, y) tuples. The closing coordinate is added if it is
/// not given.
///
/// # Examples
///
/// ```
/// # use polysplit::ring;
/// # use polysplit::geometry::*;
/// let r = ring![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)];
/// assert_eq!(r.vertex_count(), 3);
/// assert_eq!(r.coords().len(), 4);
/// assert_eq!(r.coords()[0], r.coords()[3]);
/// ```
#[macro_export]
macro_rules! ring {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut coords = ::std::vec::Vec::with_capacity(size + 1);
            $(
                coords.push($crate::core::math::Coord::new($x.0, $x.1));
            )*
            $crate::geometry::Ring::new(coords)
        }
    };
}

/// Construct an open line from a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use polysplit::line_string;
/// # use polysplit::geometry::*;
/// let l = line_string![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)];
/// assert_eq!(l.len(), 3);
/// assert_eq!(l.segment_count(), 2);
/// ```
#[macro_export]
macro_rules! line_string {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut coords = ::std::vec::Vec::with_capacity(size);
            $(
                coords.push($crate::core::math::Coord::new($x.0, $x.1));
            )*
            $crate::geometry::Line::new(coords)
        }
    };
}
