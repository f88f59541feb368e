use log::debug;
use num_traits::Float;

use super::{Bins, ColorMap, Palette, Rgb};
use crate::axis::align_grid_step;
use crate::error::{GridError, Result};
use crate::range::Range1D;
use crate::util::index_value;

/// A color map over an explicit table of colors, one per bin.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable<T = f64> {
    bins: Bins<T>,
    colors: Vec<Rgb>,
}

impl<T: Float> ColorTable<T> {
    /// Splits `range` into one bin per color.
    ///
    /// Fails with [`GridError::EmptyColorTable`] when `colors` is empty and
    /// with [`GridError::DegenerateRange`] when `range` has zero width or
    /// non-finite bounds.
    pub fn new(range: Range1D<T>, colors: Vec<Rgb>) -> Result<Self> {
        if colors.is_empty() {
            return Err(GridError::EmptyColorTable);
        }
        let bins = Bins::new(range.min(), range.max(), colors.len())?;
        Ok(Self { bins, colors })
    }

    pub fn with_palette(range: Range1D<T>, palette: Palette) -> Result<Self> {
        Self::new(range, palette.colors().to_vec())
    }

    /// Like [`with_palette`](Self::with_palette), but with bin edges on
    /// multiples of a nice step.
    ///
    /// The step starts at [`align_grid_step`] of the width per color and is
    /// doubled (and re-aligned) until the bins cover `range`, so the table's
    /// own range usually extends past `range`.
    ///
    /// ```rust
    /// use specgrid::{ColorMap, ColorTable, Palette, Range1D};
    ///
    /// let table = ColorTable::aligned(Range1D::new(0.0, 150.0), Palette::Colors16).unwrap();
    /// assert_eq!(table.range(), Range1D::new(0.0, 160.0));
    /// assert_eq!(table.legend()[1], Range1D::new(10.0, 20.0));
    /// ```
    pub fn aligned(range: Range1D<T>, palette: Palette) -> Result<Self> {
        if !range.min().is_finite() || !range.max().is_finite() || range.width() == T::zero() {
            return Err(GridError::DegenerateRange);
        }
        let count = index_value::<T>(palette.len() as isize);
        let mut step = align_grid_step(range.width() / count);
        loop {
            let low = (range.min() / step).floor() * step;
            let high = low + step * count;
            if high >= range.max() {
                debug!("aligned color table to step {:?}", step.to_f64());
                return Self::new(Range1D::new(low, high), palette.colors().to_vec());
            }
            step = align_grid_step(step + step);
        }
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

impl<T: Float> ColorMap<T> for ColorTable<T> {
    fn map(&self, value: T) -> Rgb {
        self.colors[self.bins.index(value)]
    }

    fn legend(&self) -> Vec<Range1D<T>> {
        self.bins.legend()
    }

    fn len(&self) -> usize {
        self.colors.len()
    }

    fn range(&self) -> Range1D<T> {
        self.bins.range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::COLORS_16;

    fn rgb_ramp(n: u8) -> Vec<Rgb> {
        (0..n).map(Rgb::grey).collect()
    }

    #[test]
    fn test_color_table_clamps_both_ends() {
        let table = ColorTable::new(Range1D::new(0.0, 1.0), rgb_ramp(4)).unwrap();

        assert_eq!(table.map(-100.0), Rgb::grey(0));
        assert_eq!(table.map(0.3), Rgb::grey(1));
        assert_eq!(table.map(0.5), Rgb::grey(2));
        assert_eq!(table.map(100.0), Rgb::grey(3));
        assert_eq!(table.map(f64::NAN), Rgb::grey(0));
    }

    #[test]
    fn test_color_table_rejects_empty() {
        assert_eq!(
            ColorTable::new(Range1D::new(0.0, 1.0), Vec::new()).unwrap_err(),
            GridError::EmptyColorTable
        );
        assert_eq!(
            ColorTable::new(Range1D::point(2.0), rgb_ramp(3)).unwrap_err(),
            GridError::DegenerateRange
        );
    }

    #[test]
    fn test_color_table_palette() {
        let table = ColorTable::with_palette(Range1D::new(-8.0, 8.0), Palette::Colors16).unwrap();

        assert_eq!(table.len(), 16);
        assert_eq!(table.map(-7.5), COLORS_16[0]);
        assert_eq!(table.map(0.5), COLORS_16[8]);
        assert_eq!(table.map(7.5), COLORS_16[15]);
        assert_eq!(table.legend().len(), 16);
    }

    #[test]
    fn test_color_table_aligned_doubles_step() {
        // 94 / 16 aligns to 5, which only reaches 80; the next step is 10
        let table = ColorTable::aligned(Range1D::new(3.0, 97.0), Palette::Colors16).unwrap();
        assert_eq!(table.range(), Range1D::new(0.0, 160.0));

        let table =
            ColorTable::<f64>::aligned(Range1D::new(-1.0, 1.0), Palette::Colors256).unwrap();
        let legend = table.legend();
        assert!(table.range().contains_range(&Range1D::new(-1.0, 1.0)));
        assert!((legend[0].width() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_color_table_f32() {
        let table =
            ColorTable::with_palette(Range1D::new(0.0f32, 256.0), Palette::Colors256).unwrap();
        assert_eq!(table.map(255.5), table.colors()[255]);
        assert_eq!(table.map(0.25), table.colors()[0]);
    }
}
