use num_traits::Float;

use super::{Bins, ColorMap, Rgb};
use crate::error::Result;
use crate::range::Range1D;

const LEVELS: usize = 64;

/// 64-level greyscale: low values white, high values black.
///
/// ```rust
/// use specgrid::{ColorMap, GreyColorMap, Range1D, Rgb};
///
/// let grey = GreyColorMap::new(Range1D::new(0.0, 64.0)).unwrap();
/// assert_eq!(grey.len(), 64);
/// assert_eq!(grey.map(-1.0), Rgb::grey(255));
/// assert_eq!(grey.map(31.5), Rgb::grey(130));
/// assert_eq!(grey.map(1e9), Rgb::grey(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreyColorMap<T = f64> {
    bins: Bins<T>,
}

impl<T: Float> GreyColorMap<T> {
    pub fn new(range: Range1D<T>) -> Result<Self> {
        Ok(Self {
            bins: Bins::new(range.min(), range.max(), LEVELS)?,
        })
    }
}

impl<T: Float> ColorMap<T> for GreyColorMap<T> {
    fn map(&self, value: T) -> Rgb {
        let fraction = self.bins.fraction(value).to_f64().unwrap_or(0.0);
        let level = (255.0 * (1.0 - fraction)).round().clamp(0.0, 255.0);
        Rgb::grey(level as u8)
    }

    fn legend(&self) -> Vec<Range1D<T>> {
        self.bins.legend()
    }

    fn len(&self) -> usize {
        LEVELS
    }

    fn range(&self) -> Range1D<T> {
        self.bins.range()
    }
}
