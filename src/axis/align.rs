use num_traits::Float;

use crate::util::constant;

/// Relative nudge applied before snapping so that a step a rounding error
/// below a candidate still snaps to it.
const SNAP_NUDGE: f64 = 1e-9;

/// Rounds a raw tick step to a "nice" step: 1, 2, 2.5 or 5 times a power of
/// ten.
///
/// The step is normalized into `[10, 100)` by a power of ten, snapped with
/// these thresholds (ties go to the larger candidate) and scaled back:
///
/// | normalized    | snapped |
/// |---------------|---------|
/// | `< 15`        | 10      |
/// | `15 ..< 25`   | 20      |
/// | `25 ..< 35`   | 25      |
/// | `35 ..< 75`   | 50      |
/// | `>= 75`       | 100     |
///
/// Steps that are NaN, infinite or not larger than `T::epsilon()` come back
/// as `T::epsilon()`, so loops stepping by the result always terminate.
///
/// ```rust
/// use specgrid::align_tick_step;
///
/// assert_eq!(align_tick_step(23.0), 20.0);
/// assert_eq!(align_tick_step(47.0), 50.0);
/// assert_eq!(align_tick_step(83.0), 100.0);
/// assert_eq!(align_tick_step(0.003), 0.0025);
/// assert_eq!(align_tick_step(7.0), 5.0);
///
/// assert_eq!(align_tick_step(0.0), f64::EPSILON);
/// assert_eq!(align_tick_step(f64::NAN), f64::EPSILON);
/// ```
pub fn align_tick_step<T: Float>(step: T) -> T {
    align(step, true)
}

/// Rounds a raw step to 1, 2 or 5 times a power of ten.
///
/// Same as [`align_tick_step`] without the 2.5 candidate: normalized steps in
/// `[15, 35)` all snap to 20. Color maps use this for their bin edges.
///
/// ```rust
/// use specgrid::align_grid_step;
///
/// assert_eq!(align_grid_step(23.0), 20.0);
/// assert_eq!(align_grid_step(30.0), 20.0);
/// assert_eq!(align_grid_step(0.4), 0.5);
/// ```
pub fn align_grid_step<T: Float>(step: T) -> T {
    align(step, false)
}

fn align<T: Float>(step: T, quarter: bool) -> T {
    let epsilon = T::epsilon();
    if step.is_nan() || step.is_infinite() || step <= epsilon {
        return epsilon;
    }

    let exponent = decade_exponent(step);
    let normalized = rescale(step, -exponent) * (T::one() + constant(SNAP_NUDGE));

    let nice = if normalized < constant(15.0) {
        10.0
    } else if normalized < constant(35.0) {
        if quarter && normalized >= constant(25.0) {
            25.0
        } else {
            20.0
        }
    } else if normalized < constant(75.0) {
        50.0
    } else {
        100.0
    };
    rescale(constant(nice), exponent)
}

/// Power of ten `e` such that `value / 10^e` lies in `[10, 100)`.
fn decade_exponent<T: Float>(value: T) -> i32 {
    let ten = constant::<T>(10.0);
    let hundred = constant::<T>(100.0);
    let mut probe = value;
    let mut exponent = 0;
    while probe < ten {
        probe = probe * ten;
        exponent -= 1;
    }
    while probe >= hundred {
        probe = probe / ten;
        exponent += 1;
    }
    exponent
}

/// `value * 10^exponent` with a single rounding step.
fn rescale<T: Float>(value: T, exponent: i32) -> T {
    let power = constant::<T>(10.0).powi(exponent.abs());
    if exponent >= 0 {
        value * power
    } else {
        value / power
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_tick_step_candidates() {
        assert_eq!(align_tick_step(10.0), 10.0);
        assert_eq!(align_tick_step(14.9), 10.0);
        assert_eq!(align_tick_step(15.0), 20.0);
        assert_eq!(align_tick_step(24.9), 20.0);
        assert_eq!(align_tick_step(25.0), 25.0);
        assert_eq!(align_tick_step(34.0), 25.0);
        assert_eq!(align_tick_step(35.0), 50.0);
        assert_eq!(align_tick_step(74.0), 50.0);
        assert_eq!(align_tick_step(75.0), 100.0);
        assert_eq!(align_tick_step(99.0), 100.0);
    }

    #[test]
    fn test_align_tick_step_decades() {
        assert_eq!(align_tick_step(930.0), 1000.0);
        assert_eq!(align_tick_step(0.003), 0.0025);
        assert_eq!(align_tick_step(2300.0), 2000.0);
        assert_eq!(align_tick_step(0.47), 0.5);
        assert_eq!(align_tick_step(1.0), 1.0);
        assert_eq!(align_tick_step(100.0), 100.0);
    }

    #[test]
    fn test_align_tick_step_idempotent() {
        for s in [0.003, 7.0, 23.0, 47.0, 83.0, 930.0, 1e-7, 3.3e12, 0.25] {
            let once = align_tick_step(s);
            assert_eq!(align_tick_step(once), once, "step {s}");
        }
    }

    #[test]
    fn test_align_grid_step_has_no_quarter() {
        assert_eq!(align_grid_step(25.0), 20.0);
        assert_eq!(align_grid_step(34.0), 20.0);
        assert_eq!(align_grid_step(35.0), 50.0);
        assert_eq!(align_grid_step(0.003), 0.002);
        for s in [0.003, 7.0, 23.0, 47.0, 83.0, 930.0] {
            let once = align_grid_step(s);
            assert_eq!(align_grid_step(once), once);
        }
    }

    #[test]
    fn test_align_degenerate_input() {
        assert_eq!(align_tick_step(-3.0), f64::EPSILON);
        assert_eq!(align_tick_step(f64::INFINITY), f64::EPSILON);
        assert_eq!(align_grid_step(f32::NAN), f32::EPSILON);
        assert_eq!(align_grid_step(1e-300), f64::EPSILON);
    }

    #[test]
    fn test_align_f32() {
        assert_eq!(align_tick_step(23.0f32), 20.0f32);
        assert_eq!(align_tick_step(0.47f32), 0.5f32);
    }
}
