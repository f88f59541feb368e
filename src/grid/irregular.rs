use num_traits::Float;

use super::CoordinateGrid1D;
use crate::error::{GridError, Result};
use crate::range::Range1D;
use crate::util::{floor_index, index_value, sorted_pair};

/// Grid over arbitrary, strictly monotone samples.
///
/// `IrregularGrid1D` holds the exact sample positions of non-uniformly spaced
/// data, such as instrument calibration markers. Samples may be strictly
/// ascending or strictly descending; anything else is rejected when the grid
/// is built or when [`set_samples`](Self::set_samples) replaces them.
///
/// # Lookups
///
/// - [`coordinate_at`](CoordinateGrid1D::coordinate_at) brackets the value with
///   a binary search and interpolates linearly between the two neighbours
/// - [`value_at`](CoordinateGrid1D::value_at) interpolates inside the bin left
///   of the coordinate
/// - both extrapolate outside the samples using the slope of the nearest
///   boundary segment
///
/// # Ownership
///
/// [`new`](Self::new) takes the sample vector by value and never copies it;
/// [`from_slice`](Self::from_slice) copies borrowed samples.
///
/// # Examples
///
/// ```rust
/// use specgrid::grid::{CoordinateGrid1D, IrregularGrid1D};
///
/// let grid = IrregularGrid1D::new(vec![1.0, 2.0, 4.0, 8.0]).unwrap();
/// assert!(grid.is_ascending());
/// assert_eq!(grid.coordinate_at(3.0), 1.5);
/// assert_eq!(grid.value_at(2.25), 5.0);
///
/// // extrapolation uses the first and last segments
/// assert_eq!(grid.coordinate_at(0.0), -1.0);
/// assert_eq!(grid.coordinate_at(12.0), 4.0);
///
/// // order violations are construction errors
/// assert!(IrregularGrid1D::new(vec![1.0, 3.0, 2.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IrregularGrid1D<T = f64> {
    samples: Vec<T>,
    ascending: bool,
}

impl<T: Float> IrregularGrid1D<T> {
    /// Builds a grid that owns `samples`.
    pub fn new(samples: Vec<T>) -> Result<Self> {
        let ascending = validate(&samples)?;
        Ok(Self { samples, ascending })
    }

    /// Builds a grid from a copy of `samples`.
    pub fn from_slice(samples: &[T]) -> Result<Self> {
        Self::new(samples.to_vec())
    }

    /// Builds a grid over the samples of `source` that cover `range`.
    ///
    /// The bounds of `range` are located as fractional indices, widened to
    /// whole indices (floor of the lower, ceiling of the upper), and every
    /// index in between is sampled. Indices inside `source` reproduce its
    /// samples; indices beyond it are extrapolated, so the result may be
    /// wider or narrower than `source`.
    ///
    /// ```rust
    /// use specgrid::Range1D;
    /// use specgrid::grid::{CoordinateGrid1D, IrregularGrid1D};
    ///
    /// let markers = IrregularGrid1D::new(vec![0.0, 1.0, 3.0, 6.0]).unwrap();
    ///
    /// let clipped = IrregularGrid1D::resampled(&markers, Range1D::new(0.5, 2.0)).unwrap();
    /// assert_eq!(clipped.samples(), &[0.0, 1.0, 3.0]);
    ///
    /// let widened = IrregularGrid1D::resampled(&markers, Range1D::new(-1.0, 7.0)).unwrap();
    /// assert_eq!(widened.samples(), &[-1.0, 0.0, 1.0, 3.0, 6.0, 9.0]);
    /// ```
    pub fn resampled(source: &Self, range: Range1D<T>) -> Result<Self> {
        let (lo, hi) = sorted_pair(
            source.coordinate_at(range.min()),
            source.coordinate_at(range.max()),
        );
        let first = floor_index(lo).ok_or(GridError::DegenerateRange)?;
        let last = hi.ceil().to_isize().ok_or(GridError::DegenerateRange)?;
        let last = last.max(first + 1);

        let samples = (first..=last).map(|i| source.point_at(i)).collect();
        Self::new(samples)
    }

    /// Replaces the samples after validating them.
    ///
    /// On error the grid keeps its previous samples.
    pub fn set_samples(&mut self, samples: Vec<T>) -> Result<()> {
        self.ascending = validate(&samples)?;
        self.samples = samples;
        Ok(())
    }

    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<T> {
        self.samples
    }

    /// Samples lying inside `range`, in index order.
    pub fn points_within(&self, range: &Range1D<T>) -> Vec<T> {
        self.samples
            .iter()
            .copied()
            .filter(|&v| range.contains(v))
            .collect()
    }

    /// Fractional index of `value` along the segment `index..index + 1`.
    fn segment_coordinate(&self, index: usize, value: T) -> T {
        let a = self.samples[index];
        let b = self.samples[index + 1];
        index_value::<T>(index as isize) + (value - a) / (b - a)
    }

    /// Real-world value at `coordinate` along the segment `index..index + 1`.
    fn segment_value(&self, index: usize, coordinate: T) -> T {
        let a = self.samples[index];
        let b = self.samples[index + 1];
        a + (coordinate - index_value(index as isize)) * (b - a)
    }
}

/// Checks strict monotonicity and returns the direction.
fn validate<T: Float>(samples: &[T]) -> Result<bool> {
    if samples.len() < 2 {
        return Err(GridError::TooFewSamples {
            len: samples.len(),
            min: 2,
        });
    }
    let ascending = samples[1] > samples[0];
    for (i, pair) in samples.windows(2).enumerate() {
        let ordered = if ascending {
            pair[1] > pair[0]
        } else {
            pair[1] < pair[0]
        };
        if !ordered {
            return Err(GridError::NotMonotone { index: i + 1 });
        }
    }
    Ok(ascending)
}

impl<T: Float> CoordinateGrid1D<T> for IrregularGrid1D<T> {
    fn len(&self) -> usize {
        self.samples.len()
    }

    fn point_at(&self, index: isize) -> T {
        match usize::try_from(index) {
            Ok(i) if i < self.samples.len() => self.samples[i],
            _ => self.value_at(index_value(index)),
        }
    }

    fn coordinate_at(&self, value: T) -> T {
        if value.is_nan() {
            return T::nan();
        }
        let n = self.samples.len();
        let first = self.samples[0];
        let last = self.samples[n - 1];

        let (before, after) = if self.ascending {
            (value < first, value > last)
        } else {
            (value > first, value < last)
        };
        if before {
            return self.segment_coordinate(0, value);
        }
        if after {
            return self.segment_coordinate(n - 2, value);
        }

        // index of the first sample past `value` in grid direction
        let upper = if self.ascending {
            self.samples.partition_point(|&s| s <= value)
        } else {
            self.samples.partition_point(|&s| s >= value)
        };
        let lower = upper.saturating_sub(1).min(n - 2);
        self.segment_coordinate(lower, value)
    }

    fn value_at(&self, coordinate: T) -> T {
        if coordinate.is_nan() {
            return T::nan();
        }
        let n = self.samples.len();
        if coordinate < T::zero() {
            return self.segment_value(0, coordinate);
        }
        if coordinate > index_value(n as isize - 1) {
            return self.segment_value(n - 2, coordinate);
        }

        let bin = coordinate.floor().to_usize().unwrap_or(0);
        if bin >= n - 1 {
            return self.samples[n - 1];
        }
        self.segment_value(bin, coordinate)
    }

    fn range(&self) -> Range1D<T> {
        Range1D::new(self.samples[0], self.samples[self.samples.len() - 1])
    }

    fn is_ascending(&self) -> bool {
        self.ascending
    }

    fn scale(&mut self, factor: T) -> Result<()> {
        if factor == T::zero() || !factor.is_finite() {
            return Err(GridError::InvalidScaleFactor);
        }
        for s in &mut self.samples {
            *s = *s * factor;
        }
        if factor < T::zero() {
            self.ascending = !self.ascending;
        }
        Ok(())
    }

    fn translate(&mut self, offset: T) {
        for s in &mut self.samples {
            *s = *s + offset;
        }
    }
}
