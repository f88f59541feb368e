use log::{debug, trace};
use num_traits::Float;

use super::CoordinateGrid2D;
use super::bilinear::{CellPosition, blend, refine};
use crate::error::{GridError, Result};
use crate::range::{Range1D, Range2D};
use crate::util::{constant, index_value, signed_area};

/// Relative slack on the in-triangle tests, as a fraction of the cell area.
const EDGE_TOLERANCE: f64 = 1e-10;

/// A structured quadrilateral mesh whose cells need not be axis aligned.
///
/// The mesh has `len_x × len_y` points stored as two parallel arrays of x and
/// y positions, row-major (`index = iy * len_x + ix`). Neighbouring points
/// form quadrilateral cells with corners
///
/// ```text
///   A (ix, iy) ─────── B (ix + 1, iy)
///       │                  │
///   D (ix, iy + 1) ─── C (ix + 1, iy + 1)
/// ```
///
/// [`value_at`](CoordinateGrid2D::value_at) blends the four corners of a cell
/// bilinearly. [`coordinate_at`](CoordinateGrid2D::coordinate_at) runs the
/// inverse: it locates the cell containing a point by a 2D bisection over the
/// cell indices, splitting each cell into the triangles A-B-D and B-C-D, then
/// inverts the map inside the cell.
///
/// # Limitations
///
/// The bisection assumes the mesh is structured: cell indices grow in roughly
/// the same direction everywhere and the orientation of the corner triangle
/// (top-left, bottom-left, bottom-right) holds for every cell. Folded or
/// strongly curved meshes may not be searched successfully; the lookup then
/// returns NaN rather than a wrong cell.
///
/// ```rust
/// use specgrid::grid::{CoordinateGrid2D, TopologicalGrid2D};
///
/// // a 2 × 2 mesh sheared to the right
/// let mesh = TopologicalGrid2D::new(
///     vec![0.0_f64, 2.0, 1.0, 3.0],
///     vec![0.0, 0.0, 2.0, 2.0],
///     2,
///     2,
/// )
/// .unwrap();
///
/// assert_eq!(mesh.value_at(0.5, 0.5), (1.5, 1.0));
/// let (gx, gy) = mesh.coordinate_at(1.5, 1.0);
/// assert!((gx - 0.5).abs() < 1e-12 && (gy - 0.5).abs() < 1e-12);
///
/// // far outside the mesh
/// assert!(mesh.coordinate_at(10.0, 10.0).0.is_nan());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TopologicalGrid2D<T = f64> {
    xs: Vec<T>,
    ys: Vec<T>,
    len_x: usize,
    len_y: usize,
    /// +1 or -1 so that `orientation * area(A, B, D)` is positive inside.
    orientation: T,
}

#[derive(Debug, Clone, Copy)]
enum Triangle {
    /// A-B-D, the corner at `(ix, iy)`.
    Lower,
    /// B-C-D, the corner at `(ix + 1, iy + 1)`.
    Upper,
}

impl<T: Float> TopologicalGrid2D<T> {
    /// Builds a mesh that owns the two sample arrays.
    pub fn new(xs: Vec<T>, ys: Vec<T>, len_x: usize, len_y: usize) -> Result<Self> {
        if len_x < 2 || len_y < 2 {
            return Err(GridError::TooFewSamples {
                len: len_x.min(len_y),
                min: 2,
            });
        }
        let expected = len_x * len_y;
        for actual in [xs.len(), ys.len()] {
            if actual != expected {
                return Err(GridError::LengthMismatch { expected, actual });
            }
        }

        let mut mesh = Self {
            xs,
            ys,
            len_x,
            len_y,
            orientation: T::one(),
        };
        mesh.orientation = mesh.probe_orientation();
        Ok(mesh)
    }

    /// Builds a mesh from copies of the two sample arrays.
    pub fn from_slices(xs: &[T], ys: &[T], len_x: usize, len_y: usize) -> Result<Self> {
        Self::new(xs.to_vec(), ys.to_vec(), len_x, len_y)
    }

    /// Builds the mesh spanned by the points of any other 2D grid.
    pub fn from_grid<G>(grid: &G) -> Result<Self>
    where
        G: CoordinateGrid2D<T> + ?Sized,
    {
        let (len_x, len_y) = (grid.len_x(), grid.len_y());
        let mut xs = Vec::with_capacity(len_x * len_y);
        let mut ys = Vec::with_capacity(len_x * len_y);
        for iy in 0..len_y as isize {
            for ix in 0..len_x as isize {
                let (x, y) = grid.point_at(ix, iy);
                xs.push(x);
                ys.push(y);
            }
        }
        Self::new(xs, ys, len_x, len_y)
    }

    pub fn x_samples(&self) -> &[T] {
        &self.xs
    }

    pub fn y_samples(&self) -> &[T] {
        &self.ys
    }

    fn corner(&self, ix: isize, iy: isize) -> (T, T) {
        let i = iy as usize * self.len_x + ix as usize;
        (self.xs[i], self.ys[i])
    }

    /// Sign convention derived once from the (top-left, bottom-left,
    /// bottom-right) corner triangle.
    fn probe_orientation(&self) -> T {
        let right = self.len_x as isize - 1;
        let bottom = self.len_y as isize - 1;
        let probe = signed_area(
            self.corner(0, 0),
            self.corner(0, bottom),
            self.corner(right, bottom),
        );
        // A-B-D turns the opposite way to top-left, bottom-left, bottom-right
        if probe > T::zero() {
            -T::one()
        } else {
            T::one()
        }
    }

    /// Grid coordinates of `p`, known to lie in `triangle` of cell `(ix, iy)`.
    fn invert(&self, ix: isize, iy: isize, triangle: Triangle, p: (T, T)) -> (T, T) {
        let a = self.corner(ix, iy);
        let b = self.corner(ix + 1, iy);
        let c = self.corner(ix + 1, iy + 1);
        let d = self.corner(ix, iy + 1);

        let guess = match triangle {
            Triangle::Lower => affine_inverse(a, b, d, p),
            Triangle::Upper => {
                let (u, v) = affine_inverse(c, d, b, p);
                (T::one() - u, T::one() - v)
            }
        };
        let (dx, dy) = refine([a, b, d, c], p, guess);
        (index_value::<T>(ix) + dx, index_value::<T>(iy) + dy)
    }
}

/// Solves `p = origin + u * (u_end - origin) + v * (v_end - origin)`.
fn affine_inverse<T: Float>(origin: (T, T), u_end: (T, T), v_end: (T, T), p: (T, T)) -> (T, T) {
    let e1 = (u_end.0 - origin.0, u_end.1 - origin.1);
    let e2 = (v_end.0 - origin.0, v_end.1 - origin.1);
    let r = (p.0 - origin.0, p.1 - origin.1);
    let det = e1.0 * e2.1 - e2.0 * e1.1;
    (
        (r.0 * e2.1 - e2.0 * r.1) / det,
        (e1.0 * r.1 - r.0 * e1.1) / det,
    )
}

impl<T: Float> CoordinateGrid2D<T> for TopologicalGrid2D<T> {
    fn len_x(&self) -> usize {
        self.len_x
    }

    fn len_y(&self) -> usize {
        self.len_y
    }

    fn point_at(&self, ix: isize, iy: isize) -> (T, T) {
        let inside =
            (0..self.len_x as isize).contains(&ix) && (0..self.len_y as isize).contains(&iy);
        if inside {
            self.corner(ix, iy)
        } else {
            self.value_at(index_value(ix), index_value(iy))
        }
    }

    fn coordinate_at(&self, x: T, y: T) -> (T, T) {
        if x.is_nan() || y.is_nan() {
            return (T::nan(), T::nan());
        }
        let p = (x, y);
        let s = self.orientation;
        let max_ix = self.len_x as isize - 2;
        let max_iy = self.len_y as isize - 2;

        let mut ix = (self.len_x as isize - 1) / 2;
        let mut iy = (self.len_y as isize - 1) / 2;
        let mut step_x = ((self.len_x as isize - 1) / 2).max(1);
        let mut step_y = ((self.len_y as isize - 1) / 2).max(1);
        let mut previous = None;
        let edge_tolerance = constant::<T>(EDGE_TOLERANCE);

        for iteration in 0..self.len_x * self.len_y {
            ix = ix.clamp(0, max_ix);
            iy = iy.clamp(0, max_iy);
            if previous == Some((ix, iy)) {
                // pinned against the mesh border
                break;
            }
            previous = Some((ix, iy));

            let a = self.corner(ix, iy);
            let b = self.corner(ix + 1, iy);
            let c = self.corner(ix + 1, iy + 1);
            let d = self.corner(ix, iy + 1);

            // points on a shared edge must not be rejected by both cells
            let size = (signed_area(a, b, d).abs() + signed_area(b, c, d).abs()) * edge_tolerance;
            let slack = -size;

            let north = s * signed_area(a, b, p);
            let diagonal = s * signed_area(b, d, p);
            let west = s * signed_area(d, a, p);
            if north >= slack && diagonal >= slack && west >= slack {
                return self.invert(ix, iy, Triangle::Lower, p);
            }

            let east = s * signed_area(b, c, p);
            let south = s * signed_area(c, d, p);
            if east >= slack && south >= slack && diagonal <= size {
                return self.invert(ix, iy, Triangle::Upper, p);
            }

            trace!("mesh search iteration {iteration}: point outside cell ({ix}, {iy})");
            step_x = (step_x / 2).max(1);
            step_y = (step_y / 2).max(1);
            if north < slack {
                iy -= step_y;
            } else if south < slack {
                iy += step_y;
            }
            if west < slack {
                ix -= step_x;
            } else if east < slack {
                ix += step_x;
            }
        }

        debug!(
            "no mesh cell of the {}x{} grid contains the point",
            self.len_x, self.len_y
        );
        (T::nan(), T::nan())
    }

    fn value_at(&self, gx: T, gy: T) -> (T, T) {
        match CellPosition::locate(self.len_x, self.len_y, gx, gy) {
            Some(cell) => {
                let [i00, i10, i01, i11] = cell.corner_indices(self.len_x);
                let xs = [self.xs[i00], self.xs[i10], self.xs[i01], self.xs[i11]];
                let ys = [self.ys[i00], self.ys[i10], self.ys[i01], self.ys[i11]];
                (blend(xs, cell.dx, cell.dy), blend(ys, cell.dx, cell.dy))
            }
            None => (T::nan(), T::nan()),
        }
    }

    fn range(&self) -> Range2D<T> {
        let mut x = Range1D::point(self.xs[0]);
        let mut y = Range1D::point(self.ys[0]);
        for (&px, &py) in self.xs.iter().zip(&self.ys) {
            x.include(px);
            y.include(py);
        }
        Range2D::new(x, y)
    }

    fn scale(&mut self, fx: T, fy: T) -> Result<()> {
        if fx == T::zero() || !fx.is_finite() || fy == T::zero() || !fy.is_finite() {
            return Err(GridError::InvalidScaleFactor);
        }
        for v in &mut self.xs {
            *v = *v * fx;
        }
        for v in &mut self.ys {
            *v = *v * fy;
        }
        // mirroring along one axis flips the orientation
        self.orientation = self.probe_orientation();
        Ok(())
    }

    fn translate(&mut self, dx: T, dy: T) {
        for v in &mut self.xs {
            *v = *v + dx;
        }
        for v in &mut self.ys {
            *v = *v + dy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{LinearGrid1D, LinearGrid2D};

    fn regular_mesh(nx: usize, ny: usize) -> TopologicalGrid2D {
        let grid = LinearGrid2D::new(
            LinearGrid1D::with_length(100.0, 100.0 + 2.0 * (nx - 1) as f64, nx).unwrap(),
            LinearGrid1D::with_length(-5.0, -5.0 + 0.5 * (ny - 1) as f64, ny).unwrap(),
        );
        TopologicalGrid2D::from_grid(&grid).unwrap()
    }

    /// A curved, rotated mesh: polar-like coordinates over a quarter annulus.
    fn curved_mesh(nx: usize, ny: usize) -> TopologicalGrid2D {
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        for iy in 0..ny {
            for ix in 0..nx {
                let radius = 1.0 + iy as f64 * 0.25;
                let angle = 0.1 + ix as f64 * 0.05;
                xs.push(radius * angle.cos());
                ys.push(radius * angle.sin());
            }
        }
        TopologicalGrid2D::new(xs, ys, nx, ny).unwrap()
    }

    #[test]
    fn test_topological_validation() {
        assert_eq!(
            TopologicalGrid2D::new(vec![0.0; 3], vec![0.0; 4], 2, 2),
            Err(GridError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            TopologicalGrid2D::<f64>::new(vec![0.0; 3], vec![0.0; 3], 3, 1),
            Err(GridError::TooFewSamples { len: 1, min: 2 })
        );
    }

    #[test]
    fn test_topological_regular_round_trip() {
        let mesh = regular_mesh(9, 6);

        for k in 0..=32 {
            for j in 0..=20 {
                let gx = 8.0 * k as f64 / 32.0;
                let gy = 5.0 * j as f64 / 20.0;
                let (x, y) = mesh.value_at(gx, gy);
                let (bx, by) = mesh.coordinate_at(x, y);
                assert!(
                    (bx - gx).abs() < 1e-9 && (by - gy).abs() < 1e-9,
                    "({gx}, {gy}) came back as ({bx}, {by})"
                );
            }
        }
    }

    #[test]
    fn test_topological_curved_round_trip() {
        let mesh = curved_mesh(12, 7);

        for k in 1..22 {
            for j in 1..12 {
                let gx = 11.0 * k as f64 / 22.0;
                let gy = 6.0 * j as f64 / 12.0;
                let (x, y) = mesh.value_at(gx, gy);
                let (bx, by) = mesh.coordinate_at(x, y);
                assert!(
                    (bx - gx).abs() < 1e-9 && (by - gy).abs() < 1e-9,
                    "({gx}, {gy}) came back as ({bx}, {by})"
                );
            }
        }
    }

    #[test]
    fn test_topological_points_are_exact() {
        let mesh = curved_mesh(5, 4);

        for iy in 0..4 {
            for ix in 0..5 {
                let (x, y) = mesh.point_at(ix, iy);
                assert_eq!(mesh.value_at(ix as f64, iy as f64), (x, y));
                let (gx, gy) = mesh.coordinate_at(x, y);
                assert!((gx - ix as f64).abs() < 1e-9);
                assert!((gy - iy as f64).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_topological_outside_is_nan() {
        let mesh = regular_mesh(5, 5);

        let (gx, gy) = mesh.coordinate_at(0.0, 0.0);
        assert!(gx.is_nan() && gy.is_nan());
        let (gx, gy) = mesh.coordinate_at(f64::NAN, -4.0);
        assert!(gx.is_nan() && gy.is_nan());
        let (x, y) = mesh.value_at(-0.6, 1.0);
        assert!(x.is_nan() && y.is_nan());
    }

    #[test]
    fn test_topological_mirrored_mesh() {
        let mut mesh = curved_mesh(6, 5);
        let (x, y) = mesh.value_at(2.25, 1.75);

        mesh.scale(-1.0, 1.0).unwrap();
        let (gx, gy) = mesh.coordinate_at(-x, y);
        assert!((gx - 2.25).abs() < 1e-9);
        assert!((gy - 1.75).abs() < 1e-9);

        mesh.translate(3.0, -1.0);
        let (gx, gy) = mesh.coordinate_at(3.0 - x, y - 1.0);
        assert!((gx - 2.25).abs() < 1e-9);
        assert!((gy - 1.75).abs() < 1e-9);
    }

    #[test]
    fn test_topological_range() {
        let mesh = regular_mesh(3, 3);
        let range = mesh.range();
        assert_eq!(range.x, Range1D::new(100.0, 104.0));
        assert_eq!(range.y, Range1D::new(-5.0, -4.0));
    }
}
