//! Quantization of continuous values into discrete colors.
//!
//! A color map splits a value range into `N` equal bins with an internal
//! [`LinearGrid1D`] of `N + 1` edges. Values are assigned to the bin their
//! grid coordinate falls into; values outside the range clamp to the first or
//! last bin and NaN lands in the first.
//!
//! # Examples
//!
//! ```rust
//! use specgrid::{ColorMap, ColorTable, GreyColorMap, Palette, Range1D, Rgb};
//!
//! let table = ColorTable::with_palette(Range1D::new(0.0, 16.0), Palette::Colors16).unwrap();
//! assert_eq!(table.len(), 16);
//! assert_eq!(table.map(-3.0), table.colors()[0]);
//! assert_eq!(table.map(99.0), table.colors()[15]);
//!
//! let grey = GreyColorMap::new(Range1D::new(0.0, 1.0)).unwrap();
//! assert_eq!(grey.map(0.0), Rgb::new(255, 255, 255));
//! assert_eq!(grey.map(1.0), Rgb::new(0, 0, 0));
//! ```

mod grey;
mod palette;
mod table;

pub use grey::GreyColorMap;
pub use palette::{COLORS_16, COLORS_256, Palette};
pub use table::ColorTable;

use num_traits::Float;

use crate::error::Result;
use crate::grid::{CoordinateGrid1D, LinearGrid1D};
use crate::range::Range1D;
use crate::util::index_value;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A neutral grey with all channels at `level`.
    pub const fn grey(level: u8) -> Self {
        Self::new(level, level, level)
    }
}

/// Maps values onto a fixed number of colors.
pub trait ColorMap<T: Float> {
    /// Color of the bin containing `value`.
    fn map(&self, value: T) -> Rgb;

    /// The `[low, high)` value range of every bin, in bin order.
    fn legend(&self) -> Vec<Range1D<T>>;

    /// Number of bins.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value range covered by the bins.
    fn range(&self) -> Range1D<T>;

    fn map_all(&self, values: &[T]) -> Vec<Rgb> {
        values.iter().map(|&v| self.map(v)).collect()
    }
}

/// Equal-width value bins backed by a grid over the bin edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bins<T> {
    edges: LinearGrid1D<T>,
}

impl<T: Float> Bins<T> {
    pub fn new(low: T, high: T, count: usize) -> Result<Self> {
        Ok(Self {
            edges: LinearGrid1D::with_length(low, high, count + 1)?,
        })
    }

    pub fn count(&self) -> usize {
        self.edges.len() - 1
    }

    /// Bin holding `value`, clamped to the valid bins.
    pub fn index(&self, value: T) -> usize {
        let coordinate = self.edges.coordinate_at(value);
        if coordinate.is_nan() {
            return 0;
        }
        let last = index_value::<T>(self.count() as isize - 1);
        coordinate
            .max(T::zero())
            .min(last)
            .floor()
            .to_usize()
            .unwrap_or(0)
    }

    /// Position of `value` across the bins in `[0, 1]`; NaN maps to `0`.
    pub fn fraction(&self, value: T) -> T {
        let last = index_value::<T>(self.count() as isize - 1);
        if last == T::zero() {
            return T::zero();
        }
        index_value::<T>(self.index(value) as isize) / last
    }

    pub fn legend(&self) -> Vec<Range1D<T>> {
        (0..self.count() as isize)
            .map(|i| Range1D::new(self.edges.point_at(i), self.edges.point_at(i + 1)))
            .collect()
    }

    pub fn range(&self) -> Range1D<T> {
        self.edges.range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bins_clamp_and_nan() {
        let bins = Bins::new(0.0, 10.0, 5).unwrap();

        assert_eq!(bins.count(), 5);
        assert_eq!(bins.index(-1.0), 0);
        assert_eq!(bins.index(0.0), 0);
        assert_eq!(bins.index(1.99), 0);
        assert_eq!(bins.index(2.0), 1);
        assert_eq!(bins.index(9.99), 4);
        assert_eq!(bins.index(10.0), 4);
        assert_eq!(bins.index(f64::INFINITY), 4);
        assert_eq!(bins.index(f64::NEG_INFINITY), 0);
        assert_eq!(bins.index(f64::NAN), 0);
    }

    #[test]
    fn test_bins_fraction() {
        let bins = Bins::new(0.0, 4.0, 4).unwrap();
        assert_eq!(bins.fraction(0.5), 0.0);
        assert_eq!(bins.fraction(2.5), 2.0 / 3.0);
        assert_eq!(bins.fraction(3.5), 1.0);

        let single = Bins::new(0.0, 1.0, 1).unwrap();
        assert_eq!(single.fraction(0.7), 0.0);
    }

    #[test]
    fn test_bins_legend() {
        let bins = Bins::new(10.0, 20.0, 4).unwrap();
        let legend = bins.legend();

        assert_eq!(legend.len(), 4);
        assert_eq!(legend[0], Range1D::new(10.0, 12.5));
        assert_eq!(legend[3], Range1D::new(17.5, 20.0));
        for pair in legend.windows(2) {
            assert_eq!(pair[0].max(), pair[1].min());
        }
    }

    #[test]
    fn test_bins_reject_degenerate_range() {
        assert!(Bins::new(1.0, 1.0, 4).is_err());
        assert!(Bins::new(0.0, f64::NAN, 4).is_err());
    }
}
