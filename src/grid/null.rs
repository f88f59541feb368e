use num_traits::Float;

use super::CoordinateGrid1D;
use crate::error::Result;
use crate::range::Range1D;

/// The empty grid.
///
/// Stands in wherever a grid is required but none exists yet, for example
/// inside an axis map before its first grid is computed. It has no samples,
/// every lookup yields NaN, its range is `[0, 0]` and transforms do nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullGrid1D;

impl<T: Float> CoordinateGrid1D<T> for NullGrid1D {
    fn len(&self) -> usize {
        0
    }

    fn point_at(&self, _index: isize) -> T {
        T::nan()
    }

    fn coordinate_at(&self, _value: T) -> T {
        T::nan()
    }

    fn value_at(&self, _coordinate: T) -> T {
        T::nan()
    }

    fn range(&self) -> Range1D<T> {
        Range1D::point(T::zero())
    }

    fn is_ascending(&self) -> bool {
        true
    }

    fn scale(&mut self, _factor: T) -> Result<()> {
        Ok(())
    }

    fn translate(&mut self, _offset: T) {}
}
