use num_traits::Float;

use super::CoordinateGrid1D;
use crate::error::{GridError, Result};
use crate::range::Range1D;
use crate::util::{constant, index_value};

/// Equally spaced grid: `point_at(i) = start + i * step`.
///
/// `LinearGrid1D` is the workhorse grid for evenly sampled spectra and for the
/// tick grids an [`AxisMap`](crate::AxisMap) regenerates on every zoom. All
/// lookups are O(1).
///
/// # Construction
///
/// - [`with_length`](Self::with_length) - `length` samples from `start` to `end`
/// - [`with_step`](Self::with_step) - samples every `step` from `start` towards
///   `end`; the step must point from `start` to `end`
///
/// Descending grids (`start > end`, negative step) are fully supported.
///
/// # Domain
///
/// [`coordinate_at`](CoordinateGrid1D::coordinate_at) and
/// [`point_at`](CoordinateGrid1D::point_at) extrapolate with the constant step.
/// [`value_at`](CoordinateGrid1D::value_at) returns NaN for coordinates outside
/// the half-cell band `[-0.5, length - 0.5]`.
///
/// # Examples
///
/// ```rust
/// use specgrid::grid::{CoordinateGrid1D, LinearGrid1D};
///
/// let grid = LinearGrid1D::with_length(0.0_f64, 10.0, 5).unwrap();
/// assert_eq!(grid.step(), 2.5);
/// assert_eq!(grid.point_at(2), 5.0);
/// assert_eq!(grid.coordinate_at(5.0), 2.0);
///
/// // extrapolation beyond the last sample
/// assert_eq!(grid.point_at(6), 15.0);
/// assert_eq!(grid.coordinate_at(12.5), 5.0);
///
/// // value_at only accepts half a cell of slack
/// assert_eq!(grid.value_at(4.5), 11.25);
/// assert!(grid.value_at(4.6).is_nan());
/// ```
///
/// ```rust
/// use specgrid::grid::{CoordinateGrid1D, LinearGrid1D};
///
/// // a step pointing away from the end is an illegal grid
/// assert!(LinearGrid1D::with_step(0.0, 10.0, -1.0).is_err());
///
/// let descending = LinearGrid1D::with_step(4000.0, 400.0, -400.0).unwrap();
/// assert_eq!(descending.len(), 10);
/// assert!(!descending.is_ascending());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGrid1D<T = f64> {
    start: T,
    end: T,
    step: T,
    len: usize,
}

impl<T: Float> LinearGrid1D<T> {
    /// Creates a grid of `len` samples spanning `start..=end`.
    ///
    /// Fails when `len < 2` or when the bounds coincide or are not finite.
    pub fn with_length(start: T, end: T, len: usize) -> Result<Self> {
        if len < 2 {
            return Err(GridError::TooFewSamples { len, min: 2 });
        }
        if !start.is_finite() || !end.is_finite() || start == end {
            return Err(GridError::DegenerateRange);
        }
        let step = (end - start) / index_value(len as isize - 1);
        Ok(Self {
            start,
            end,
            step,
            len,
        })
    }

    /// Creates a grid sampling every `step` from `start` up to `end`.
    ///
    /// The last sample is the last multiple of `step` that does not overshoot
    /// `end` (a relative slack of 1e-9 absorbs rounding), and becomes the
    /// grid's end.
    pub fn with_step(start: T, end: T, step: T) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() || start == end {
            return Err(GridError::DegenerateRange);
        }
        let span = end - start;
        if !step.is_finite() || step == T::zero() || span.signum() != step.signum() {
            return Err(GridError::IllegalStep);
        }

        let cells = span / step;
        let slack = constant::<T>(1e-9) * cells.max(T::one());
        let intervals = (cells + slack)
            .floor()
            .to_usize()
            .ok_or(GridError::IllegalStep)?;
        if intervals == 0 {
            return Err(GridError::TooFewSamples { len: 1, min: 2 });
        }

        Ok(Self {
            start,
            end: start + step * index_value(intervals as isize),
            step,
            len: intervals + 1,
        })
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn end(&self) -> T {
        self.end
    }

    /// Signed distance between consecutive samples.
    pub fn step(&self) -> T {
        self.step
    }
}

impl<T: Float> CoordinateGrid1D<T> for LinearGrid1D<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn point_at(&self, index: isize) -> T {
        self.start + self.step * index_value(index)
    }

    fn coordinate_at(&self, value: T) -> T {
        (value - self.start) / self.step
    }

    fn value_at(&self, coordinate: T) -> T {
        let half = constant::<T>(0.5);
        let upper = index_value::<T>(self.len as isize) - half;
        // NaN fails both comparisons and falls through to NaN as well
        if coordinate >= -half && coordinate <= upper {
            self.start + coordinate * self.step
        } else {
            T::nan()
        }
    }

    fn range(&self) -> Range1D<T> {
        Range1D::new(self.start, self.end)
    }

    fn is_ascending(&self) -> bool {
        self.step > T::zero()
    }

    fn scale(&mut self, factor: T) -> Result<()> {
        if factor == T::zero() || !factor.is_finite() {
            return Err(GridError::InvalidScaleFactor);
        }
        self.start = self.start * factor;
        self.end = self.end * factor;
        self.step = self.step * factor;
        Ok(())
    }

    fn translate(&mut self, offset: T) {
        self.start = self.start + offset;
        self.end = self.end + offset;
    }
}
