//! Cell location and bilinear blending shared by the 2D grids.
//!
//! Corner order is always `[c00, c10, c01, c11]`, where `cIJ` is the corner
//! at `(ix + I, iy + J)`.

use num_traits::Float;

use crate::util::{constant, floor_index, index_value};

const NEWTON_STEPS: usize = 8;

/// A fractional grid position split into its cell and the offset inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CellPosition<T> {
    pub ix: usize,
    pub iy: usize,
    pub dx: T,
    pub dy: T,
}

impl<T: Float> CellPosition<T> {
    /// Locates `(gx, gy)` in a `len_x × len_y` mesh.
    ///
    /// Returns `None` when either coordinate is NaN or lies outside the
    /// half-cell band `[-0.5, len - 0.5]`, or when an axis has fewer than two
    /// points. Positions in the band beyond the outer samples keep the edge
    /// cell and get offsets slightly outside `[0, 1]`.
    pub fn locate(len_x: usize, len_y: usize, gx: T, gy: T) -> Option<Self> {
        if len_x < 2 || len_y < 2 {
            return None;
        }
        let (ix, dx) = axis_cell(len_x, gx)?;
        let (iy, dy) = axis_cell(len_y, gy)?;
        Some(Self { ix, iy, dx, dy })
    }

    /// Row-major indices of the four corners.
    pub fn corner_indices(&self, len_x: usize) -> [usize; 4] {
        let base = self.iy * len_x + self.ix;
        [base, base + 1, base + len_x, base + len_x + 1]
    }
}

fn axis_cell<T: Float>(len: usize, g: T) -> Option<(usize, T)> {
    let half = constant::<T>(0.5);
    let upper = index_value::<T>(len as isize) - half;
    if !(g >= -half && g <= upper) {
        return None;
    }
    let cell = floor_index(g)?.clamp(0, len as isize - 2);
    Some((cell as usize, g - index_value(cell)))
}

/// Bilinear blend of the four corner values at offset `(dx, dy)`.
///
/// Written as a weighted sum so that integer offsets reproduce the stored
/// corner value exactly and the cell center yields the mean of all four.
pub(crate) fn blend<T: Float>(corners: [T; 4], dx: T, dy: T) -> T {
    let ex = T::one() - dx;
    let ey = T::one() - dy;
    corners[0] * (ex * ey)
        + corners[1] * (dx * ey)
        + corners[2] * (ex * dy)
        + corners[3] * (dx * dy)
}

/// Refines `(dx, dy)` so the bilinear map of `points` hits `target`.
///
/// Newton iteration on the cell's bilinear map, started from a guess taken
/// from the containing triangle. Parallelogram cells are already exact after
/// the first step.
pub(crate) fn refine<T: Float>(points: [(T, T); 4], target: (T, T), guess: (T, T)) -> (T, T) {
    let [p00, p10, p01, p11] = points;
    let tolerance = constant::<T>(1e-14);
    let (mut dx, mut dy) = guess;

    for _ in 0..NEWTON_STEPS {
        let x = blend([p00.0, p10.0, p01.0, p11.0], dx, dy);
        let y = blend([p00.1, p10.1, p01.1, p11.1], dx, dy);
        let (rx, ry) = (x - target.0, y - target.1);

        let ex = T::one() - dx;
        let ey = T::one() - dy;
        // partial derivatives of the bilinear map
        let ju = (
            ey * (p10.0 - p00.0) + dy * (p11.0 - p01.0),
            ey * (p10.1 - p00.1) + dy * (p11.1 - p01.1),
        );
        let jv = (
            ex * (p01.0 - p00.0) + dx * (p11.0 - p10.0),
            ex * (p01.1 - p00.1) + dx * (p11.1 - p10.1),
        );

        let det = ju.0 * jv.1 - jv.0 * ju.1;
        if det == T::zero() || !det.is_finite() {
            break;
        }
        let step_u = (rx * jv.1 - jv.0 * ry) / det;
        let step_v = (ju.0 * ry - rx * ju.1) / det;
        dx = dx - step_u;
        dy = dy - step_v;

        if step_u.abs() + step_v.abs() < tolerance {
            break;
        }
    }
    (dx, dy)
}
