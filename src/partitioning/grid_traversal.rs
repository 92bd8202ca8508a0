use crate::math::{CellIndex, CellShift, Point, Real, Vector, DIM};
use crate::query::Ray;

/// An iterator over the grid cells pierced by a ray, in traversal order.
///
/// This is the incremental Amanatides–Woo walk: each axis keeps the ray
/// parameter at which the next cell boundary on that axis is crossed
/// (`t_max`) and the parameter step a full cell costs (`t_delta`); every
/// iteration steps the axis whose boundary is nearest. Iteration stops once
/// the traversal parameter exceeds `max_toi`, so with a unit-length ray
/// direction the walk covers exactly `max_toi` world units.
pub struct RayGridTraversal {
    cell: CellIndex,
    step: CellShift,
    t_max: Vector,
    t_delta: Vector,
    t: Real,
    max_toi: Real,
}

impl RayGridTraversal {
    /// Starts a traversal of the grid with the given cell size, beginning at
    /// the cell containing the ray origin.
    pub fn new(cell_size: Real, ray: &Ray, max_toi: Real) -> RayGridTraversal {
        let cell = cell_at(cell_size, &ray.origin);

        let mut step = CellShift::zeros();
        let mut t_max = Vector::repeat(Real::INFINITY);
        let mut t_delta = Vector::repeat(Real::INFINITY);

        for i in 0..DIM {
            if ray.dir[i] > 0.0 {
                step[i] = 1;
                let boundary = (cell[i] + 1) as Real * cell_size;
                t_max[i] = (boundary - ray.origin[i]) / ray.dir[i];
                t_delta[i] = cell_size / ray.dir[i];
            } else if ray.dir[i] < 0.0 {
                step[i] = -1;
                let boundary = cell[i] as Real * cell_size;
                t_max[i] = (boundary - ray.origin[i]) / ray.dir[i];
                t_delta[i] = -cell_size / ray.dir[i];
            }
        }

        RayGridTraversal {
            cell,
            step,
            t_max,
            t_delta,
            t: 0.0,
            max_toi,
        }
    }
}

impl Iterator for RayGridTraversal {
    type Item = CellIndex;

    fn next(&mut self) -> Option<CellIndex> {
        if self.t > self.max_toi {
            return None;
        }

        let current = self.cell;

        let axis = self.t_max.imin();
        self.t = self.t_max[axis];
        self.cell[axis] += self.step[axis];
        self.t_max[axis] += self.t_delta[axis];

        Some(current)
    }
}

/// The index of the grid cell containing `point`.
#[inline]
pub(crate) fn cell_at(cell_size: Real, point: &Point) -> CellIndex {
    CellIndex::from(point.coords.map(|x| (x / cell_size).floor() as i32))
}
