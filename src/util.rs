use num_traits::Float;

/// Return `(min, max)` for two owned values.
pub fn sorted_pair<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Convert an `f64` literal into the working float type.
///
/// Every `Float` can represent (an approximation of) an `f64` constant, so this
/// only panics for types whose `NumCast` implementation is broken.
pub(crate) fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap()
}

/// Convert a signed index into the working float type.
pub(crate) fn index_value<T: Float>(index: isize) -> T {
    T::from(index).unwrap_or_else(T::nan)
}

/// Floor a float to a signed index, or `None` when it is NaN or out of range.
pub(crate) fn floor_index<T: Float>(value: T) -> Option<isize> {
    value.floor().to_isize()
}

/// Signed doubled area of the triangle `(a, b, c)`.
///
/// Positive when the vertices turn counter-clockwise in a y-up frame.
pub(crate) fn signed_area<T: Float>(a: (T, T), b: (T, T), c: (T, T)) -> T {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}
