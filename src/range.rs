//! Closed numeric intervals used as bounds descriptors.
//!
//! Every range keeps `min <= max` per dimension: constructors and setters order
//! the two values they are given, so `Range1D::new(10, 2)` and
//! `Range1D::new(2, 10)` describe the same interval.
//!
//! ```rust
//! use specgrid::Range1D;
//!
//! let mut r = Range1D::new(10.0, 2.0);
//! assert_eq!((r.min(), r.max()), (2.0, 10.0));
//! assert_eq!(r.width(), 8.0);
//! assert_eq!(r.center(), 6.0);
//!
//! r.include(12.0);
//! assert_eq!(r.max(), 12.0);
//! ```

use num_traits::Num;

use crate::util::sorted_pair;

/// A closed one-dimensional interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range1D<T> {
    min: T,
    max: T,
}

impl<T: Copy + PartialOrd> Range1D<T> {
    /// Creates a range from two bounds given in either order.
    pub fn new(a: T, b: T) -> Self {
        let (min, max) = sorted_pair(a, b);
        Self { min, max }
    }

    /// A range containing a single value.
    pub fn point(value: T) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    /// Replaces both bounds, ordering them.
    pub fn set(&mut self, a: T, b: T) {
        *self = Self::new(a, b);
    }

    /// Grows the range in place so it contains `value`.
    pub fn include(&mut self, value: T) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Grows the range in place so it contains `other`.
    pub fn extend(&mut self, other: &Self) {
        self.include(other.min);
        self.include(other.max);
    }

    /// Returns true if `value` lies inside the closed interval.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns true if `other` lies completely inside this range.
    pub fn contains_range(&self, other: &Self) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    /// Smallest range containing both ranges.
    pub fn union(&self, other: &Self) -> Self {
        let mut out = *self;
        out.extend(other);
        out
    }

    /// Overlap of both ranges, or `None` when they are disjoint.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let min = if other.min > self.min { other.min } else { self.min };
        let max = if other.max < self.max { other.max } else { self.max };
        if min <= max { Some(Self { min, max }) } else { None }
    }
}

impl<T: Copy + PartialOrd + Num> Range1D<T> {
    pub fn width(&self) -> T {
        self.max - self.min
    }

    pub fn center(&self) -> T {
        (self.min + self.max) / (T::one() + T::one())
    }

    /// Range with both bounds multiplied by `factor` (re-ordered if negative).
    pub fn scaled(&self, factor: T) -> Self {
        Self::new(self.min * factor, self.max * factor)
    }

    /// Range shifted by `offset`.
    pub fn translated(&self, offset: T) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

/// A closed axis-aligned rectangle `[x.min, x.max] × [y.min, y.max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range2D<T> {
    pub x: Range1D<T>,
    pub y: Range1D<T>,
}

impl<T: Copy + PartialOrd> Range2D<T> {
    pub fn new(x: Range1D<T>, y: Range1D<T>) -> Self {
        Self { x, y }
    }

    /// Creates a rectangle from two opposite corners given in any order.
    pub fn from_corners(a: (T, T), b: (T, T)) -> Self {
        Self {
            x: Range1D::new(a.0, b.0),
            y: Range1D::new(a.1, b.1),
        }
    }

    pub fn include(&mut self, x: T, y: T) {
        self.x.include(x);
        self.y.include(y);
    }

    pub fn extend(&mut self, other: &Self) {
        self.x.extend(&other.x);
        self.y.extend(&other.y);
    }

    pub fn contains(&self, x: T, y: T) -> bool {
        self.x.contains(x) && self.y.contains(y)
    }
}

/// A closed axis-aligned box over three dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range3D<T> {
    pub x: Range1D<T>,
    pub y: Range1D<T>,
    pub z: Range1D<T>,
}

impl<T: Copy + PartialOrd> Range3D<T> {
    pub fn new(x: Range1D<T>, y: Range1D<T>, z: Range1D<T>) -> Self {
        Self { x, y, z }
    }

    pub fn include(&mut self, x: T, y: T, z: T) {
        self.x.include(x);
        self.y.include(y);
        self.z.include(z);
    }

    pub fn extend(&mut self, other: &Self) {
        self.x.extend(&other.x);
        self.y.extend(&other.y);
        self.z.extend(&other.z);
    }

    pub fn contains(&self, x: T, y: T, z: T) -> bool {
        self.x.contains(x) && self.y.contains(y) && self.z.contains(z)
    }
}
