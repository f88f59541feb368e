//! Grids, axis maps and color quantization for spectroscopy data
//!
//! `specgrid` translates between three coordinate spaces:
//!
//! - **grid coordinates**, fractional sample indices (`0.0` is the first
//!   sample, `2.5` lies halfway between the third and fourth)
//! - **values**, the real-world quantity at a position (wavenumber, ppm,
//!   retention time, ...)
//! - **normalized display positions** in `[0, 1]` across a zoomed view
//!
//! # Core Concepts
//!
//! ## Grids
//!
//! A grid maps grid coordinates to values and back. Samples are strictly
//! monotone along every axis, so both directions are well defined.
//!
//! - [`grid::LinearGrid1D`] - uniformly spaced samples
//! - [`grid::IrregularGrid1D`] - arbitrary strictly monotone samples
//! - [`grid::NullGrid1D`] - the empty placeholder grid
//! - [`grid::RectangularGrid2D`] / [`grid::LinearGrid2D`] - tensor products of
//!   two 1D grids
//! - [`grid::TopologicalGrid2D`] - curvilinear meshes with a point location
//!   search
//!
//! Out-of-domain lookups never fail: 1D grids extrapolate, 2D grids return
//! NaN.
//!
//! ## Axis Maps
//!
//! [`AxisMap`] maps values to display positions for the current zoom range
//! and rebuilds a tick-aligned grid whenever the zoom changes. Tick steps are
//! rounded by [`align_tick_step`].
//!
//! ## Color Maps
//!
//! [`ColorMap`] implementations split a value range into equal bins, one
//! color each: [`ColorTable`] over a palette and the 64-level
//! [`GreyColorMap`].
//!
//! # Examples
//!
//! ## Grid Lookups
//!
//! ```rust
//! use specgrid::grid::{CoordinateGrid1D, IrregularGrid1D, LinearGrid1D};
//!
//! let grid = LinearGrid1D::with_length(0.0, 10.0, 5).unwrap();
//! assert_eq!(grid.point_at(2), 5.0);
//! assert_eq!(grid.coordinate_at(5.0), 2.0);
//!
//! let markers = IrregularGrid1D::new(vec![3.0, 2.0, 1.0]).unwrap();
//! assert!(!markers.is_ascending());
//! assert_eq!(markers.coordinate_at(1.5), 1.5);
//! ```
//!
//! ## Resampling onto a Regular Mesh
//!
//! ```rust
//! use specgrid::grid::{CoordinateGrid2D, LinearGrid1D, LinearGrid2D, RectangularGrid2D};
//!
//! let x = LinearGrid1D::with_length(0.0, 1.0, 2).unwrap();
//! let y = LinearGrid1D::with_length(0.0, 1.0, 2).unwrap();
//! let source = RectangularGrid2D::new(x, y);
//! let data = [0.0, 1.0, 2.0, 3.0];
//!
//! let fine = LinearGrid1D::with_length(0.0, 1.0, 3).unwrap();
//! let target = LinearGrid2D::new(fine, fine);
//! let resampled = target.interpolate(&source, &data).unwrap();
//!
//! // the cell center gets the mean of the four corners
//! assert_eq!(resampled[4], 1.5);
//! assert_eq!(resampled.len(), target.len());
//! ```
//!
//! ## Zooming an Axis
//!
//! ```rust
//! use specgrid::{AxisMap, Range1D};
//!
//! let mut axis = AxisMap::linear(Range1D::new(0.0, 100.0)).unwrap();
//! assert_eq!(axis.map(25.0), 0.25);
//!
//! axis.zoom(2.0, None).unwrap();
//! assert_eq!(axis.zoom_range(), Range1D::new(25.0, 75.0));
//!
//! for tick in axis.ticks() {
//!     assert!(tick.position >= 0.0 && tick.position <= 1.0);
//! }
//! ```
//!
//! ## Coloring Values
//!
//! ```rust
//! use specgrid::{ColorMap, ColorTable, Palette, Range1D};
//!
//! let table = ColorTable::aligned(Range1D::new(0.0, 150.0), Palette::Colors16).unwrap();
//! let color = table.map(42.0);
//! assert_eq!(color, table.colors()[4]);
//! ```
//!

pub mod axis;
pub mod color;
pub mod error;
pub mod grid;
pub mod range;
mod util;

pub use axis::{AxisConfig, AxisKind, AxisMap, Tick, TickIter, align_grid_step, align_tick_step};
pub use color::{ColorMap, ColorTable, GreyColorMap, Palette, Rgb};
pub use error::{GridError, Result};
pub use num_traits::Float;
pub use range::{Range1D, Range2D, Range3D};
