//! Periodic range folding.


/// Maps `value` into `[lo, hi)` by adding or subtracting multiples of
/// the period `hi - lo`.
///
/// # Behavior
/// - A non-positive period (a single sample, or `hi <= lo`) collapses
///   every query onto `lo`.
/// - When rounding would place the result on `hi` itself, `lo` is
///   returned instead; the two are the same point of the period.
/// - Non-finite `value` is passed through untouched.
///
/// ```
/// use periodic_rbf::interpolation::wrap::wrap_to_range;
///
/// assert_eq!(wrap_to_range(6.0, 0.0, 4.0), 2.0);
/// assert_eq!(wrap_to_range(-1.0, 0.0, 4.0), 3.0);
/// assert_eq!(wrap_to_range(4.0, 0.0, 4.0), 0.0);
/// ```
#[inline]
pub fn wrap_to_range(value: f64, lo: f64, hi: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let period = hi - lo;
    if period <= 0.0 {
        return lo;
    }
    if value >= lo && value < hi {
        return value;
    }

    let wrapped = lo + (value - lo).rem_euclid(period);
    if wrapped >= hi { lo } else { wrapped }
}
