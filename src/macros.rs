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

/// Macro used for implementing other macros. Used for extracting macro
/// repetition count for reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a contour with the points given as a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use polyclip::contour;
/// # use polyclip::core::math::Point;
/// let c = contour![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)];
/// assert_eq!(c.len(), 3);
/// assert_eq!(c.point(1), Point::new(1.0, 0.0));
/// assert!(c.counter_clockwise());
/// ```
#[macro_export]
macro_rules! contour {
    ($( $p:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($p) ())),*]);
            let mut c = $crate::polygon::Contour::with_capacity(size);
            $(
                c.add_xy($p.0, $p.1);
            )*
            c
        }
    };
}

/// Construct a polygon from a list of contours (each a list of (x, y)
/// tuples). Hole relations are not set, use
/// [compute_holes](crate::polygon::Polygon::compute_holes) for that.
///
/// # Examples
///
/// ```
/// # use polyclip::polygon;
/// let p = polygon![
///     [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)],
///     [(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)],
/// ];
/// assert_eq!(p.len(), 2);
/// ```
#[macro_export]
macro_rules! polygon {
    ($( [ $( $p:expr ),* $(,)? ] ),* $(,)?) => {
        {
            let mut poly = $crate::polygon::Polygon::new();
            $(
                poly.add($crate::contour![$( $p ),*]);
            )*
            poly
        }
    };
}
