//! Axis maps: zoomable mappings between real-world values and normalized
//! display positions.
//!
//! An [`AxisMap`] tracks four ranges:
//!
//! - the **data range**, covering the data the axis was built for
//! - the **full view range**, what "zoom out completely" shows
//! - the **zoom range**, the currently visible interval in real units
//! - the **grid zoom range**, the zoom range expressed in coordinates of the
//!   axis grid
//!
//! Every change of the zoom range rebuilds the axis grid according to the
//! map's [`AxisKind`]. Linear kinds snap to "nice" tick steps found by
//! [`align_tick_step`]; irregular maps keep their calibration markers as long
//! as a readable number of them is visible.
//!
//! # Examples
//!
//! ```rust
//! use specgrid::{AxisMap, Range1D};
//!
//! let mut axis = AxisMap::linear(Range1D::new(0.0_f64, 100.0)).unwrap();
//! assert_eq!(axis.map(0.0), 0.0);
//! assert_eq!(axis.map(100.0), 1.0);
//! assert_eq!(axis.reverse_map(0.25), 25.0);
//!
//! axis.set_zoom_range(Range1D::new(20.0, 40.0)).unwrap();
//! assert!((axis.map(30.0) - 0.5).abs() < 1e-12);
//!
//! let ticks: Vec<f64> = axis.ticks().map(|t| t.value).collect();
//! assert_eq!(ticks, vec![20.0, 25.0, 30.0, 35.0, 40.0]);
//! ```

mod align;
mod tick_iter;

pub use align::{align_grid_step, align_tick_step};
pub use tick_iter::{Tick, TickIter};

use log::debug;
use num_traits::Float;

use crate::error::{GridError, Result};
use crate::grid::{CoordinateGrid1D, Grid1D, IrregularGrid1D, LinearGrid1D};
use crate::range::Range1D;
use crate::util::{constant, index_value};

/// Slack on normalized positions when deciding which grid points are ticks.
const TICK_SLACK: f64 = 1e-9;

/// Tuning knobs for grid rebuilding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisConfig {
    /// Target number of tick intervals across the zoom range.
    pub tick_divisions: usize,
    /// Most calibration markers an irregular axis shows before it falls back
    /// to a linear tick grid.
    pub max_calibration_ticks: usize,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            tick_divisions: 5,
            max_calibration_ticks: 19,
        }
    }
}

/// How an axis map builds its grid.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisKind<T = f64> {
    /// Ascending tick-aligned linear grid.
    Linear,
    /// Descending tick-aligned linear grid; larger values map to smaller
    /// positions.
    ReversedLinear,
    /// Calibration markers, shown as long as few enough are visible.
    Irregular(IrregularGrid1D<T>),
}

impl<T> AxisKind<T> {
    pub fn name(&self) -> &'static str {
        match self {
            AxisKind::Linear => "linear",
            AxisKind::ReversedLinear => "reversed linear",
            AxisKind::Irregular(_) => "irregular",
        }
    }
}

/// Maps real-world values on one axis to normalized display positions.
///
/// A map is created over a data range, which also becomes its full view and
/// initial zoom. Positions are `0` at one end of the zoom range and `1` at
/// the other; for [`AxisKind::ReversedLinear`] the larger value sits at `0`.
///
/// Ranges of zero width are widened symmetrically by half their absolute
/// center, or by `0.5` when the center is zero. Ranges with non-finite bounds
/// are rejected with [`GridError::DegenerateRange`] and leave the map
/// unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisMap<T = f64> {
    kind: AxisKind<T>,
    config: AxisConfig,
    data_range: Range1D<T>,
    full_view_range: Range1D<T>,
    zoom_range: Range1D<T>,
    grid_zoom_range: Range1D<T>,
    grid: Grid1D<T>,
}

impl<T: Float> AxisMap<T> {
    /// Linear axis over `data_range` with the default configuration.
    pub fn linear(data_range: Range1D<T>) -> Result<Self> {
        Self::with_config(AxisKind::Linear, data_range, AxisConfig::default())
    }

    /// Reversed linear axis over `data_range`.
    ///
    /// ```rust
    /// use specgrid::{AxisMap, Range1D};
    ///
    /// let axis = AxisMap::reversed_linear(Range1D::new(400.0, 4000.0)).unwrap();
    /// assert_eq!(axis.map(4000.0), 0.0);
    /// assert_eq!(axis.map(400.0), 1.0);
    /// ```
    pub fn reversed_linear(data_range: Range1D<T>) -> Result<Self> {
        Self::with_config(AxisKind::ReversedLinear, data_range, AxisConfig::default())
    }

    /// Irregular axis over the calibration markers of `calibration`.
    ///
    /// The data range is the span of the markers. While the whole span is in
    /// view the markers themselves are the axis grid.
    ///
    /// ```rust
    /// use specgrid::{AxisMap, Range1D};
    /// use specgrid::grid::IrregularGrid1D;
    ///
    /// let markers = IrregularGrid1D::new(vec![0.0_f64, 1.0, 3.0, 7.0]).unwrap();
    /// let axis = AxisMap::irregular(markers).unwrap();
    ///
    /// assert_eq!(axis.data_range(), Range1D::new(0.0, 7.0));
    /// assert!((axis.map(3.0) - 2.0 / 3.0).abs() < 1e-12);
    /// ```
    pub fn irregular(calibration: IrregularGrid1D<T>) -> Result<Self> {
        let data_range = calibration.range();
        Self::with_config(AxisKind::Irregular(calibration), data_range, AxisConfig::default())
    }

    /// Axis of any kind with an explicit configuration.
    ///
    /// `tick_divisions` below one are treated as one.
    pub fn with_config(
        kind: AxisKind<T>,
        data_range: Range1D<T>,
        config: AxisConfig,
    ) -> Result<Self> {
        let data_range = padded(data_range)?;
        let mut axis = Self {
            kind,
            config,
            data_range,
            full_view_range: data_range,
            zoom_range: data_range,
            grid_zoom_range: data_range,
            grid: Grid1D::default(),
        };
        axis.reset_zoom()?;
        Ok(axis)
    }

    pub fn kind(&self) -> &AxisKind<T> {
        &self.kind
    }

    pub fn config(&self) -> AxisConfig {
        self.config
    }

    pub fn data_range(&self) -> Range1D<T> {
        self.data_range
    }

    pub fn full_view_range(&self) -> Range1D<T> {
        self.full_view_range
    }

    pub fn zoom_range(&self) -> Range1D<T> {
        self.zoom_range
    }

    /// The zoom range in coordinates of [`grid`](Self::grid).
    pub fn grid_zoom_range(&self) -> Range1D<T> {
        self.grid_zoom_range
    }

    /// The grid built for the current zoom range.
    pub fn grid(&self) -> &Grid1D<T> {
        &self.grid
    }

    /// Shows `range` and rebuilds the grid for it.
    pub fn set_zoom_range(&mut self, range: Range1D<T>) -> Result<()> {
        let zoom = padded(range)?;
        let (grid, grid_zoom_range) = self.calc_grid(&zoom)?;
        debug!(
            "rebuilt {} axis grid with {} points",
            self.kind.name(),
            grid.len()
        );
        self.zoom_range = zoom;
        self.grid = grid;
        self.grid_zoom_range = grid_zoom_range;
        Ok(())
    }

    /// Replaces the full view and zooms out to it.
    pub fn set_full_view_range(&mut self, range: Range1D<T>) -> Result<()> {
        let previous = std::mem::replace(&mut self.full_view_range, padded(range)?);
        if let Err(err) = self.reset_zoom() {
            self.full_view_range = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Zooms out to the full view range.
    pub fn reset_zoom(&mut self) -> Result<()> {
        self.set_zoom_range(self.full_view_range)
    }

    /// Shifts the zoom range by `delta` times its width.
    ///
    /// ```rust
    /// use specgrid::{AxisMap, Range1D};
    ///
    /// let mut axis = AxisMap::linear(Range1D::new(0.0, 10.0)).unwrap();
    /// axis.pan(0.5).unwrap();
    /// assert_eq!(axis.zoom_range(), Range1D::new(5.0, 15.0));
    /// ```
    pub fn pan(&mut self, delta: T) -> Result<()> {
        let shift = self.zoom_range.width() * delta;
        self.set_zoom_range(self.zoom_range.translated(shift))
    }

    /// Divides the zoom width by `factor`, keeping the value at the
    /// normalized `anchor` (default `0.5`) in place.
    ///
    /// Factors above one zoom in. Non-positive or non-finite factors fail
    /// with [`GridError::InvalidScaleFactor`].
    ///
    /// ```rust
    /// use specgrid::{AxisMap, Range1D};
    ///
    /// let mut axis = AxisMap::linear(Range1D::new(0.0, 100.0)).unwrap();
    /// axis.zoom(2.0, None).unwrap();
    /// assert_eq!(axis.zoom_range(), Range1D::new(25.0, 75.0));
    ///
    /// axis.zoom(0.5, Some(0.0)).unwrap();
    /// assert_eq!(axis.zoom_range(), Range1D::new(25.0, 125.0));
    /// ```
    pub fn zoom(&mut self, factor: T, anchor: Option<T>) -> Result<()> {
        if !(factor > T::zero()) || !factor.is_finite() {
            return Err(GridError::InvalidScaleFactor);
        }
        let anchor = self.reverse_map(anchor.unwrap_or_else(|| constant(0.5)));
        let low = anchor - (anchor - self.zoom_range.min()) / factor;
        let high = anchor + (self.zoom_range.max() - anchor) / factor;
        self.set_zoom_range(Range1D::new(low, high))
    }

    /// Normalized position of `value` within the zoom range.
    pub fn map(&self, value: T) -> T {
        let gzr = self.grid_zoom_range;
        (self.grid.coordinate_at(value) - gzr.min()) / gzr.width()
    }

    /// Real-world value at normalized `position`.
    ///
    /// Positions far enough outside `[0, 1]` to leave the grid's half-cell
    /// band yield NaN on linear axes.
    pub fn reverse_map(&self, position: T) -> T {
        let gzr = self.grid_zoom_range;
        self.grid.value_at(gzr.min() + position * gzr.width())
    }

    pub fn map_all(&self, values: &[T]) -> Vec<T> {
        values.iter().map(|&v| self.map(v)).collect()
    }

    pub fn reverse_map_all(&self, positions: &[T]) -> Vec<T> {
        positions.iter().map(|&p| self.reverse_map(p)).collect()
    }

    /// Maps both bounds of `range`; the result is ordered.
    pub fn map_range(&self, range: &Range1D<T>) -> Range1D<T> {
        Range1D::new(self.map(range.min()), self.map(range.max()))
    }

    pub fn reverse_map_range(&self, range: &Range1D<T>) -> Range1D<T> {
        Range1D::new(self.reverse_map(range.min()), self.reverse_map(range.max()))
    }

    /// Grid and grid zoom range for showing `zoom`.
    fn calc_grid(&self, zoom: &Range1D<T>) -> Result<(Grid1D<T>, Range1D<T>)> {
        let grid: Grid1D<T> = match &self.kind {
            AxisKind::Linear => self.tick_grid(zoom, false)?.into(),
            AxisKind::ReversedLinear => self.tick_grid(zoom, true)?.into(),
            AxisKind::Irregular(calibration) => {
                if *zoom == self.full_view_range {
                    calibration.clone().into()
                } else {
                    let visible = calibration.points_within(zoom);
                    if (2..=self.config.max_calibration_ticks).contains(&visible.len()) {
                        IrregularGrid1D::new(visible)?.into()
                    } else {
                        self.tick_grid(zoom, !calibration.is_ascending())?.into()
                    }
                }
            }
        };

        let grid_zoom_range = Range1D::new(
            grid.coordinate_at(zoom.min()),
            grid.coordinate_at(zoom.max()),
        );
        if !(grid_zoom_range.width() > T::zero()) {
            return Err(GridError::DegenerateRange);
        }
        Ok((grid, grid_zoom_range))
    }

    /// Linear grid over `zoom` with bounds on multiples of a nice step.
    fn tick_grid(&self, zoom: &Range1D<T>, descending: bool) -> Result<LinearGrid1D<T>> {
        let divisions = index_value::<T>(self.config.tick_divisions.max(1) as isize);
        let step = align_tick_step(zoom.width() / divisions);

        let low = (zoom.min() / step).floor() * step;
        let mut high = (zoom.max() / step).ceil() * step;
        if high <= low {
            high = low + step;
        }

        if descending {
            LinearGrid1D::with_step(high, low, -step)
        } else {
            LinearGrid1D::with_step(low, high, step)
        }
    }
}

impl<T: Float + 'static> AxisMap<T> {
    /// Grid points inside the zoom range with their normalized positions.
    ///
    /// ```rust
    /// use specgrid::{AxisMap, Range1D};
    ///
    /// let axis = AxisMap::reversed_linear(Range1D::new(0.0, 10.0)).unwrap();
    /// let ticks: Vec<(f64, f64)> = axis.ticks().map(|t| (t.value, t.position)).collect();
    ///
    /// assert_eq!(ticks.first(), Some(&(10.0, 0.0)));
    /// assert_eq!(ticks.last(), Some(&(0.0, 1.0)));
    /// assert_eq!(ticks.len(), 6);
    /// ```
    pub fn ticks(&self) -> TickIter<T> {
        if self.grid.is_null() {
            return TickIter::empty();
        }
        let slack = constant::<T>(TICK_SLACK);
        let low = -slack;
        let high = T::one() + slack;

        let ticks = self
            .grid
            .points()
            .into_iter()
            .map(|value| Tick {
                value,
                position: self.map(value),
            })
            .filter(|tick| tick.position >= low && tick.position <= high)
            .collect();
        TickIter::from_vec(ticks)
    }
}

/// Checks that `range` is finite and widens it when it has zero width.
fn padded<T: Float>(range: Range1D<T>) -> Result<Range1D<T>> {
    if !range.min().is_finite() || !range.max().is_finite() {
        return Err(GridError::DegenerateRange);
    }
    if range.width() > T::zero() {
        return Ok(range);
    }
    let center = range.center();
    let mut half = center.abs() * constant(0.5);
    if half == T::zero() {
        half = constant(0.5);
    }
    Ok(Range1D::new(center - half, center + half))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn values(axis: &AxisMap) -> Vec<f64> {
        axis.ticks().map(|t| t.value).collect()
    }

    #[test]
    fn test_linear_axis_maps_ends() {
        let axis = AxisMap::linear(Range1D::new(0.0, 100.0)).unwrap();

        assert_eq!(axis.map(0.0), 0.0);
        assert_eq!(axis.map(100.0), 1.0);
        assert_eq!(axis.map(50.0), 0.5);
        for v in [0.0, 12.5, 33.3, 99.0] {
            assert_relative_eq!(axis.reverse_map(axis.map(v)), v, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_linear_axis_grid_is_tick_aligned() {
        let axis = AxisMap::linear(Range1D::new(3.0, 97.0)).unwrap();
        let grid = axis.grid().as_linear().unwrap();

        // width 94 / 5 divisions -> 18.8 -> step 20
        assert_eq!(grid.step(), 20.0);
        assert_eq!(grid.start(), 0.0);
        assert_eq!(grid.end(), 100.0);
        assert_eq!(values(&axis), vec![20.0, 40.0, 60.0, 80.0]);
        assert_relative_eq!(axis.map(3.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(axis.map(97.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reversed_axis() {
        let axis = AxisMap::reversed_linear(Range1D::new(0.0, 100.0)).unwrap();
        let grid = axis.grid().as_linear().unwrap();

        assert!(grid.step() < 0.0);
        assert_eq!(axis.map(100.0), 0.0);
        assert_eq!(axis.map(0.0), 1.0);
        assert_eq!(axis.reverse_map(0.25), 75.0);
    }

    #[test]
    fn test_zero_width_ranges_are_padded() {
        let axis = AxisMap::linear(Range1D::point(4.0)).unwrap();
        assert_eq!(axis.zoom_range(), Range1D::new(2.0, 6.0));

        let axis = AxisMap::linear(Range1D::point(0.0)).unwrap();
        assert_eq!(axis.zoom_range(), Range1D::new(-0.5, 0.5));

        let axis = AxisMap::linear(Range1D::point(-10.0)).unwrap();
        assert_eq!(axis.zoom_range(), Range1D::new(-15.0, -5.0));
    }

    #[test]
    fn test_non_finite_ranges_rejected() {
        assert_eq!(
            AxisMap::linear(Range1D::new(0.0, f64::INFINITY)).unwrap_err(),
            GridError::DegenerateRange
        );

        let mut axis = AxisMap::linear(Range1D::new(0.0, 10.0)).unwrap();
        let before = axis.clone();
        assert!(axis.set_zoom_range(Range1D::new(f64::NAN, 1.0)).is_err());
        assert_eq!(axis, before);
    }

    #[test]
    fn test_full_view_and_reset() {
        let mut axis = AxisMap::linear(Range1D::new(0.0, 10.0)).unwrap();

        axis.set_full_view_range(Range1D::new(-20.0, 20.0)).unwrap();
        assert_eq!(axis.full_view_range(), Range1D::new(-20.0, 20.0));
        assert_eq!(axis.zoom_range(), Range1D::new(-20.0, 20.0));
        assert_eq!(axis.data_range(), Range1D::new(0.0, 10.0));

        axis.set_zoom_range(Range1D::new(1.0, 2.0)).unwrap();
        axis.reset_zoom().unwrap();
        assert_eq!(axis.zoom_range(), Range1D::new(-20.0, 20.0));
    }

    #[test]
    fn test_pan_and_zoom() {
        let mut axis = AxisMap::linear(Range1D::new(0.0, 100.0)).unwrap();

        axis.pan(-0.1).unwrap();
        assert_eq!(axis.zoom_range(), Range1D::new(-10.0, 90.0));

        axis.zoom(4.0, Some(1.0)).unwrap();
        assert_eq!(axis.zoom_range(), Range1D::new(65.0, 90.0));

        assert_eq!(axis.zoom(0.0, None), Err(GridError::InvalidScaleFactor));
        assert_eq!(axis.zoom(-2.0, None), Err(GridError::InvalidScaleFactor));
        assert_eq!(axis.zoom_range(), Range1D::new(65.0, 90.0));
    }

    #[test]
    fn test_irregular_axis_uses_calibration_in_full_view() {
        let markers = IrregularGrid1D::new(vec![0.0, 1.0, 2.0, 4.0, 8.0]).unwrap();
        let axis = AxisMap::irregular(markers.clone()).unwrap();

        assert_eq!(axis.grid().as_irregular(), Some(&markers));
        assert_eq!(axis.grid_zoom_range(), Range1D::new(0.0, 4.0));
        assert_eq!(axis.map(2.0), 0.5);
        assert_eq!(axis.reverse_map(0.75), 4.0);
        assert_eq!(values(&axis), vec![0.0, 1.0, 2.0, 4.0, 8.0]);
    }

    #[test]
    fn test_irregular_axis_zoomed_subgrid() {
        let markers = IrregularGrid1D::new(vec![0.0, 1.0, 2.0, 4.0, 8.0]).unwrap();
        let mut axis = AxisMap::irregular(markers).unwrap();

        axis.set_zoom_range(Range1D::new(0.5, 5.0)).unwrap();
        assert_eq!(axis.grid().as_irregular().unwrap().samples(), &[1.0, 2.0, 4.0]);
        assert_relative_eq!(axis.map(0.5), 0.0, epsilon = 1e-12);
        assert_relative_eq!(axis.map(5.0), 1.0, epsilon = 1e-12);
        assert_eq!(values(&axis), vec![1.0, 2.0, 4.0]);
    }

    #[test]
    fn test_irregular_axis_falls_back_to_ticks() {
        let markers = IrregularGrid1D::new(vec![0.0, 1.0, 2.0, 4.0, 8.0]).unwrap();

        // one marker in view
        let mut axis = AxisMap::irregular(markers.clone()).unwrap();
        axis.set_zoom_range(Range1D::new(4.5, 7.5)).unwrap();
        assert!(axis.grid().as_linear().unwrap().step() > 0.0);

        // too many markers in view
        let config = AxisConfig {
            max_calibration_ticks: 2,
            ..AxisConfig::default()
        };
        let mut axis = AxisMap::with_config(
            AxisKind::Irregular(markers),
            Range1D::new(0.0, 8.0),
            config,
        )
        .unwrap();
        axis.set_zoom_range(Range1D::new(0.0, 5.0)).unwrap();
        assert_eq!(axis.grid().as_linear().unwrap().step(), 1.0);
    }

    #[test]
    fn test_irregular_full_view_matches_reset() {
        let markers = IrregularGrid1D::new(vec![0.0, 1.0, 2.0, 4.0, 8.0]).unwrap();
        let mut axis = AxisMap::irregular(markers.clone()).unwrap();

        axis.set_full_view_range(Range1D::new(0.5, 5.0)).unwrap();
        let grid = axis.grid().clone();
        let mapped = axis.map_all(&[0.5, 3.0, 5.0]);
        assert_eq!(grid.as_irregular(), Some(&markers));

        axis.reset_zoom().unwrap();
        assert_eq!(axis.grid(), &grid);
        assert_eq!(axis.map_all(&[0.5, 3.0, 5.0]), mapped);
        assert_relative_eq!(axis.map(5.0), 1.0, epsilon = 1e-12);

        // a rejected full view leaves the map untouched
        let before = axis.clone();
        assert!(axis.set_full_view_range(Range1D::new(f64::NAN, 1.0)).is_err());
        assert_eq!(axis, before);
    }

    #[test]
    fn test_irregular_calibration_count_limit() {
        let markers = IrregularGrid1D::new((0..=30).map(f64::from).collect()).unwrap();
        let mut axis = AxisMap::irregular(markers).unwrap();

        // markers 1 ..= 19 in view
        axis.set_zoom_range(Range1D::new(0.5, 19.5)).unwrap();
        let grid = axis.grid().as_irregular().unwrap();
        assert_eq!(grid.len(), 19);
        assert_eq!(grid.samples()[0], 1.0);

        // markers 1 ..= 20 in view
        axis.set_zoom_range(Range1D::new(0.5, 20.5)).unwrap();
        assert_eq!(axis.grid().as_linear().unwrap().step(), 5.0);
    }

    #[test]
    fn test_descending_calibration_keeps_direction() {
        let markers = IrregularGrid1D::new(vec![10.0, 8.0, 5.0, 1.0]).unwrap();
        let mut axis = AxisMap::irregular(markers).unwrap();
        assert_eq!(axis.map(10.0), 0.0);
        assert_eq!(axis.map(1.0), 1.0);

        axis.set_zoom_range(Range1D::new(2.0, 4.0)).unwrap();
        let grid = axis.grid().as_linear().unwrap();
        assert!(grid.step() < 0.0);
        assert_relative_eq!(axis.map(4.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(axis.map(2.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_batch_and_range_forms() {
        let axis = AxisMap::linear(Range1D::new(-5.0, 5.0)).unwrap();
        let values = [-5.0, -1.25, 0.0, 3.0, 5.0];

        let mapped = axis.map_all(&values);
        for (v, m) in values.iter().zip(&mapped) {
            assert_eq!(axis.map(*v), *m);
        }
        let back = axis.reverse_map_all(&mapped);
        for (v, b) in values.iter().zip(&back) {
            assert_relative_eq!(*v, *b, epsilon = 1e-12);
        }

        let r = axis.map_range(&Range1D::new(0.0, 5.0));
        assert_eq!(r, Range1D::new(0.5, 1.0));
        assert_eq!(axis.reverse_map_range(&r), Range1D::new(0.0, 5.0));
    }

    #[test]
    fn test_tick_divisions_config() {
        let config = AxisConfig {
            tick_divisions: 10,
            ..AxisConfig::default()
        };
        let axis = AxisMap::with_config(AxisKind::Linear, Range1D::new(0.0, 1.0), config).unwrap();
        assert_eq!(axis.grid().as_linear().unwrap().step(), 0.1);
        assert_eq!(axis.ticks().count(), 11);
    }

    #[test_log::test]
    fn test_zoom_rebuilds_grid() {
        let mut axis = AxisMap::linear(Range1D::new(0.0, 1000.0)).unwrap();
        assert_eq!(axis.grid().as_linear().unwrap().step(), 200.0);

        axis.zoom(10.0, None).unwrap();
        assert_eq!(axis.zoom_range(), Range1D::new(450.0, 550.0));
        assert_eq!(axis.grid().as_linear().unwrap().step(), 20.0);
        assert_eq!(values(&axis), vec![460.0, 480.0, 500.0, 520.0, 540.0]);
    }
}
