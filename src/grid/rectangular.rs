use num_traits::Float;

use super::bilinear::{CellPosition, blend};
use super::{CoordinateGrid1D, CoordinateGrid2D, Grid1D, LinearGrid1D};
use crate::error::{GridError, Result};
use crate::range::Range2D;

/// Axis-aligned 2D grid: the tensor product of an x grid and a y grid.
///
/// Every lookup decomposes into independent 1D lookups, so the out-of-domain
/// behaviour of each axis follows its [`Grid1D`] kind.
///
/// ```rust
/// use specgrid::grid::{CoordinateGrid2D, IrregularGrid1D, LinearGrid1D, RectangularGrid2D};
///
/// let grid = RectangularGrid2D::new(
///     LinearGrid1D::with_length(0.0, 3.0, 4).unwrap(),
///     IrregularGrid1D::new(vec![10.0, 20.0, 40.0]).unwrap(),
/// );
/// assert_eq!(grid.point_at(1, 2), (1.0, 40.0));
/// assert_eq!(grid.coordinate_at(1.5, 30.0), (1.5, 1.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RectangularGrid2D<T = f64> {
    x: Grid1D<T>,
    y: Grid1D<T>,
}

impl<T: Float> RectangularGrid2D<T> {
    pub fn new(x: impl Into<Grid1D<T>>, y: impl Into<Grid1D<T>>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn x_grid(&self) -> &Grid1D<T> {
        &self.x
    }

    pub fn y_grid(&self) -> &Grid1D<T> {
        &self.y
    }
}

impl<T: Float> CoordinateGrid2D<T> for RectangularGrid2D<T> {
    fn len_x(&self) -> usize {
        self.x.len()
    }

    fn len_y(&self) -> usize {
        self.y.len()
    }

    fn point_at(&self, ix: isize, iy: isize) -> (T, T) {
        (self.x.point_at(ix), self.y.point_at(iy))
    }

    fn coordinate_at(&self, x: T, y: T) -> (T, T) {
        (self.x.coordinate_at(x), self.y.coordinate_at(y))
    }

    fn value_at(&self, gx: T, gy: T) -> (T, T) {
        (self.x.value_at(gx), self.y.value_at(gy))
    }

    fn range(&self) -> Range2D<T> {
        Range2D::new(self.x.range(), self.y.range())
    }

    fn scale(&mut self, fx: T, fy: T) -> Result<()> {
        // validate both factors before touching either axis
        if fx == T::zero() || !fx.is_finite() || fy == T::zero() || !fy.is_finite() {
            return Err(GridError::InvalidScaleFactor);
        }
        self.x.scale(fx)?;
        self.y.scale(fy)
    }

    fn translate(&mut self, dx: T, dy: T) {
        self.x.translate(dx);
        self.y.translate(dy);
    }
}

/// Rectangular grid with equally spaced samples on both axes.
///
/// Besides the coordinate lookups it can resample a scalar field that lives
/// on any other 2D grid onto its own sample points, see
/// [`interpolate`](Self::interpolate).
///
/// ```rust
/// use specgrid::grid::{CoordinateGrid2D, LinearGrid1D, LinearGrid2D};
///
/// let grid = LinearGrid2D::new(
///     LinearGrid1D::with_length(0.0_f64, 4.0, 5).unwrap(),
///     LinearGrid1D::with_length(0.0, 2.0, 3).unwrap(),
/// );
/// assert_eq!(grid.len(), 15);
/// assert_eq!(grid.value_at(2.5, 1.0), (2.5, 1.0));
/// // half a cell beyond the last sample is the limit
/// assert!(grid.value_at(4.6, 1.0).0.is_nan());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGrid2D<T = f64> {
    x: LinearGrid1D<T>,
    y: LinearGrid1D<T>,
}

impl<T: Float> LinearGrid2D<T> {
    pub fn new(x: LinearGrid1D<T>, y: LinearGrid1D<T>) -> Self {
        Self { x, y }
    }

    pub fn x_grid(&self) -> &LinearGrid1D<T> {
        &self.x
    }

    pub fn y_grid(&self) -> &LinearGrid1D<T> {
        &self.y
    }

    /// Resamples a scalar field from `source` onto the points of this grid.
    ///
    /// `data` holds one value per point of `source`, row-major
    /// (`data[iy * len_x + ix]`). For every point of this grid the fractional
    /// coordinate in `source` is computed and the four surrounding values are
    /// blended bilinearly. Points that fall outside `source` (beyond its
    /// half-cell band) come out as NaN. The result is row-major in this grid's
    /// dimensions.
    ///
    /// ```rust
    /// use specgrid::grid::{LinearGrid1D, LinearGrid2D};
    ///
    /// let coarse = LinearGrid2D::new(
    ///     LinearGrid1D::with_length(0.0, 1.0, 2).unwrap(),
    ///     LinearGrid1D::with_length(0.0, 1.0, 2).unwrap(),
    /// );
    /// let fine = LinearGrid2D::new(
    ///     LinearGrid1D::with_length(0.0, 1.0, 3).unwrap(),
    ///     LinearGrid1D::with_length(0.0, 1.0, 3).unwrap(),
    /// );
    ///
    /// let values = fine.interpolate(&coarse, &[0.0, 2.0, 4.0, 6.0]).unwrap();
    /// assert_eq!(values, vec![0.0, 1.0, 2.0, 2.0, 3.0, 4.0, 4.0, 5.0, 6.0]);
    /// ```
    pub fn interpolate<G>(&self, source: &G, data: &[T]) -> Result<Vec<T>>
    where
        G: CoordinateGrid2D<T> + ?Sized,
    {
        let (len_x, len_y) = (source.len_x(), source.len_y());
        if data.len() != len_x * len_y {
            return Err(GridError::LengthMismatch {
                expected: len_x * len_y,
                actual: data.len(),
            });
        }

        let mut out = Vec::with_capacity(self.len());
        for iy in 0..self.y.len() as isize {
            let y = self.y.point_at(iy);
            for ix in 0..self.x.len() as isize {
                let (gx, gy) = source.coordinate_at(self.x.point_at(ix), y);
                let value = match CellPosition::locate(len_x, len_y, gx, gy) {
                    Some(cell) => {
                        let [a, b, c, d] = cell.corner_indices(len_x);
                        blend([data[a], data[b], data[c], data[d]], cell.dx, cell.dy)
                    }
                    None => T::nan(),
                };
                out.push(value);
            }
        }
        Ok(out)
    }
}

impl<T: Float> From<LinearGrid2D<T>> for RectangularGrid2D<T> {
    fn from(grid: LinearGrid2D<T>) -> Self {
        RectangularGrid2D::new(grid.x, grid.y)
    }
}

impl<T: Float> CoordinateGrid2D<T> for LinearGrid2D<T> {
    fn len_x(&self) -> usize {
        self.x.len()
    }

    fn len_y(&self) -> usize {
        self.y.len()
    }

    fn point_at(&self, ix: isize, iy: isize) -> (T, T) {
        (self.x.point_at(ix), self.y.point_at(iy))
    }

    fn coordinate_at(&self, x: T, y: T) -> (T, T) {
        (self.x.coordinate_at(x), self.y.coordinate_at(y))
    }

    fn value_at(&self, gx: T, gy: T) -> (T, T) {
        (self.x.value_at(gx), self.y.value_at(gy))
    }

    fn range(&self) -> Range2D<T> {
        Range2D::new(self.x.range(), self.y.range())
    }

    fn scale(&mut self, fx: T, fy: T) -> Result<()> {
        if fx == T::zero() || !fx.is_finite() || fy == T::zero() || !fy.is_finite() {
            return Err(GridError::InvalidScaleFactor);
        }
        self.x.scale(fx)?;
        self.y.scale(fy)
    }

    fn translate(&mut self, dx: T, dy: T) {
        self.x.translate(dx);
        self.y.translate(dy);
    }
}
