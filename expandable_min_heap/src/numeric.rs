use std::cmp::Ordering;

/// Two keys closer than this are considered equal.
pub const EPSILON: f64 = 0.000001;

/// Returns `true` if `a` and `b` differ by less than [`EPSILON`].
///
/// ```
/// use expandable_min_heap::numeric::approx_equal;
/// assert!(approx_equal(5.0, 5.0000001));
/// assert!(!approx_equal(5.0, 5.00001));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Epsilon-tolerant key comparison shared by every heap strategy.
///
/// Returns `Equal` when the keys are [`approx_equal`],
/// otherwise orders them by numeric value.
/// NaN keys are a logic error: they compare as `Greater` to everything.
#[inline]
pub fn compare_keys(a: f64, b: f64) -> Ordering {
    if approx_equal(a, b) {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}
