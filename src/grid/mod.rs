//! Coordinate grids over discrete samples.
//!
//! A grid is an ordered, strictly monotone set of real-world sample positions.
//! It translates between two coordinate spaces:
//!
//! - **Grid coordinates**: continuous (fractional) indices into the sample
//!   array. Integer coordinates sit exactly on samples.
//! - **Real-world values**: the physical positions of the samples, e.g. a
//!   wavenumber, a chemical shift or a retention time.
//!
//! # One-dimensional grids
//!
//! - [`LinearGrid1D`] - equally spaced samples, O(1) lookups
//! - [`IrregularGrid1D`] - arbitrary monotone samples, O(log n) lookups
//! - [`NullGrid1D`] - the empty sentinel grid; every lookup is NaN
//!
//! All three implement [`CoordinateGrid1D`] and are gathered in the closed
//! [`Grid1D`] enum for callers that hold "some 1D grid".
//!
//! # Two-dimensional grids
//!
//! - [`RectangularGrid2D`] - tensor product of two [`Grid1D`]s
//! - [`LinearGrid2D`] - tensor product of two linear grids, with
//!   [`LinearGrid2D::interpolate`] for resampling scalar fields
//! - [`TopologicalGrid2D`] - a quadrilateral mesh that need not be axis aligned
//!
//! # Out-of-domain queries
//!
//! Lookups never fail. One-dimensional grids extrapolate linearly from the
//! nearest boundary segment (the linear `value_at` is the exception, returning
//! NaN outside a half-cell band). Two-dimensional value lookups outside the
//! half-cell band, and failed point locations, return NaN.
//!
//! ```rust
//! use specgrid::grid::{CoordinateGrid1D, IrregularGrid1D, LinearGrid1D};
//!
//! let linear = LinearGrid1D::with_length(0.0, 10.0, 5).unwrap();
//! assert_eq!(linear.point_at(2), 5.0);
//! assert_eq!(linear.coordinate_at(5.0), 2.0);
//!
//! let irregular = IrregularGrid1D::new(vec![0.0, 1.0, 4.0]).unwrap();
//! assert_eq!(irregular.coordinate_at(2.5), 1.5);
//! assert_eq!(irregular.value_at(1.5), 2.5);
//! ```

mod bilinear;
mod irregular;
mod linear;
mod null;
mod rectangular;
mod topological;

pub use irregular::IrregularGrid1D;
pub use linear::LinearGrid1D;
pub use null::NullGrid1D;
pub use rectangular::{LinearGrid2D, RectangularGrid2D};
pub use topological::TopologicalGrid2D;

use num_traits::Float;

use crate::error::Result;
use crate::range::{Range1D, Range2D};

/// Bidirectional mapping between grid coordinates and real-world values along
/// one axis.
///
/// For every in-domain value `v`, `value_at(coordinate_at(v))` reproduces `v`
/// up to floating-point rounding, and `coordinate_at(point_at(i))` reproduces
/// every valid index `i`.
pub trait CoordinateGrid1D<T: Float> {
    /// Number of samples.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Real-world position of sample `index`. Indices outside `0..len`
    /// are extrapolated.
    fn point_at(&self, index: isize) -> T;

    /// Continuous grid coordinate of a real-world value.
    fn coordinate_at(&self, value: T) -> T;

    /// Real-world value at a continuous grid coordinate.
    fn value_at(&self, coordinate: T) -> T;

    /// Smallest range containing every sample.
    fn range(&self) -> Range1D<T>;

    /// True when real-world values grow with the index.
    fn is_ascending(&self) -> bool;

    /// Multiplies every sample by `factor` in place.
    fn scale(&mut self, factor: T) -> Result<()>;

    /// Shifts every sample by `offset` in place.
    fn translate(&mut self, offset: T);

    /// Batch form of [`coordinate_at`](Self::coordinate_at).
    fn coordinates_at(&self, values: &[T]) -> Vec<T> {
        values.iter().map(|&v| self.coordinate_at(v)).collect()
    }

    /// Batch form of [`value_at`](Self::value_at).
    fn values_at(&self, coordinates: &[T]) -> Vec<T> {
        coordinates.iter().map(|&g| self.value_at(g)).collect()
    }

    /// All sample positions in index order.
    fn points(&self) -> Vec<T> {
        (0..self.len() as isize).map(|i| self.point_at(i)).collect()
    }
}

/// Bidirectional mapping between 2D grid coordinates and real-world points.
///
/// Points are passed and returned as `(x, y)` tuples; grid coordinates as
/// `(gx, gy)`. Samples are addressed row-major: `index = iy * len_x + ix`.
pub trait CoordinateGrid2D<T: Float> {
    fn len_x(&self) -> usize;

    fn len_y(&self) -> usize;

    /// Total number of mesh points.
    fn len(&self) -> usize {
        self.len_x() * self.len_y()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Real-world position of the sample at `(ix, iy)`.
    fn point_at(&self, ix: isize, iy: isize) -> (T, T);

    /// Continuous grid coordinates of a real-world point.
    fn coordinate_at(&self, x: T, y: T) -> (T, T);

    /// Real-world point at continuous grid coordinates.
    fn value_at(&self, gx: T, gy: T) -> (T, T);

    /// Bounding box of every sample.
    fn range(&self) -> Range2D<T>;

    /// Multiplies x samples by `fx` and y samples by `fy` in place.
    fn scale(&mut self, fx: T, fy: T) -> Result<()>;

    /// Shifts every sample by `(dx, dy)` in place.
    fn translate(&mut self, dx: T, dy: T);
}

/// A one-dimensional grid of any supported kind.
///
/// This is the closed set of grid shapes the rest of the crate works with;
/// axis maps and rectangular grids hold a `Grid1D` and dispatch by `match`.
#[derive(Debug, Clone, PartialEq)]
pub enum Grid1D<T = f64> {
    Linear(LinearGrid1D<T>),
    Irregular(IrregularGrid1D<T>),
    Null(NullGrid1D),
}

impl<T> Default for Grid1D<T> {
    fn default() -> Self {
        Grid1D::Null(NullGrid1D)
    }
}

impl<T> Grid1D<T> {
    /// True for the [`NullGrid1D`] sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, Grid1D::Null(_))
    }

    pub fn as_linear(&self) -> Option<&LinearGrid1D<T>> {
        match self {
            Grid1D::Linear(grid) => Some(grid),
            _ => None,
        }
    }

    pub fn as_irregular(&self) -> Option<&IrregularGrid1D<T>> {
        match self {
            Grid1D::Irregular(grid) => Some(grid),
            _ => None,
        }
    }
}

impl<T> From<LinearGrid1D<T>> for Grid1D<T> {
    fn from(grid: LinearGrid1D<T>) -> Self {
        Grid1D::Linear(grid)
    }
}

impl<T> From<IrregularGrid1D<T>> for Grid1D<T> {
    fn from(grid: IrregularGrid1D<T>) -> Self {
        Grid1D::Irregular(grid)
    }
}

impl<T> From<NullGrid1D> for Grid1D<T> {
    fn from(grid: NullGrid1D) -> Self {
        Grid1D::Null(grid)
    }
}

impl<T: Float> CoordinateGrid1D<T> for Grid1D<T> {
    fn len(&self) -> usize {
        match self {
            Grid1D::Linear(g) => g.len(),
            Grid1D::Irregular(g) => g.len(),
            Grid1D::Null(g) => CoordinateGrid1D::<T>::len(g),
        }
    }

    fn point_at(&self, index: isize) -> T {
        match self {
            Grid1D::Linear(g) => g.point_at(index),
            Grid1D::Irregular(g) => g.point_at(index),
            Grid1D::Null(g) => CoordinateGrid1D::<T>::point_at(g, index),
        }
    }

    fn coordinate_at(&self, value: T) -> T {
        match self {
            Grid1D::Linear(g) => g.coordinate_at(value),
            Grid1D::Irregular(g) => g.coordinate_at(value),
            Grid1D::Null(g) => CoordinateGrid1D::<T>::coordinate_at(g, value),
        }
    }

    fn value_at(&self, coordinate: T) -> T {
        match self {
            Grid1D::Linear(g) => g.value_at(coordinate),
            Grid1D::Irregular(g) => g.value_at(coordinate),
            Grid1D::Null(g) => CoordinateGrid1D::<T>::value_at(g, coordinate),
        }
    }

    fn range(&self) -> Range1D<T> {
        match self {
            Grid1D::Linear(g) => g.range(),
            Grid1D::Irregular(g) => g.range(),
            Grid1D::Null(g) => CoordinateGrid1D::<T>::range(g),
        }
    }

    fn is_ascending(&self) -> bool {
        match self {
            Grid1D::Linear(g) => g.is_ascending(),
            Grid1D::Irregular(g) => g.is_ascending(),
            Grid1D::Null(g) => CoordinateGrid1D::<T>::is_ascending(g),
        }
    }

    fn scale(&mut self, factor: T) -> Result<()> {
        match self {
            Grid1D::Linear(g) => g.scale(factor),
            Grid1D::Irregular(g) => g.scale(factor),
            Grid1D::Null(g) => CoordinateGrid1D::<T>::scale(g, factor),
        }
    }

    fn translate(&mut self, offset: T) {
        match self {
            Grid1D::Linear(g) => g.translate(offset),
            Grid1D::Irregular(g) => g.translate(offset),
            Grid1D::Null(g) => CoordinateGrid1D::<T>::translate(g, offset),
        }
    }
}
