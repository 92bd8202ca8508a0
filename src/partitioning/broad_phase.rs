use smallvec::SmallVec;

use crate::bounding_volume::Aabb;
use crate::math::{CellIndex, Point, Real, DEFAULT_EPSILON};
use crate::partitioning::{CellRange, RayGridTraversal};
use crate::query::{Ray, RayCast};
use crate::shape::Shape;
use crate::utils::{HashMap, HashSet};

use super::grid_traversal::cell_at;

/// An opaque identifier for a shape registered in a [`BroadPhaseGrid`].
///
/// Handles are chosen by the caller and round-tripped without
/// interpretation, so they can carry any context the owning system wants:
/// an entity id, an index into a collider table, etc. Two registered shapes
/// must not share a handle.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ShapeHandle(pub u64);

#[derive(Clone)]
struct ShapeEntry {
    shape: Shape,
    /// The inflated bound the shape is currently indexed under.
    bounds: Aabb,
}

#[derive(Clone, Default)]
struct GridCell {
    /// Handles of the shapes whose inflated bound touches this cell, in
    /// insertion order, without duplicates.
    shapes: SmallVec<[ShapeHandle; 8]>,
}

/// A broadphase built on a sparse uniform grid.
///
/// Shapes are indexed in every grid cell their *inflated* bound
/// (`compute_aabb(scale_factor)`) touches. Queries walk the cells covered
/// by the query shape's inflated bound (or pierced by a ray) and filter the
/// shapes found there against *uninflated* bounds, yielding a small,
/// duplicate-free candidate list. A narrow phase must refine it: the
/// broadphase itself never claims an exact overlap.
///
/// With a `scale_factor` above one, a shape whose motion stays inside the
/// inflation margin keeps spanning the same cells, so calling
/// [`update`](BroadPhaseGrid::update) for it each frame is cheap.
pub struct BroadPhaseGrid {
    cell_size: Real,
    scale_factor: Real,
    cells: HashMap<CellIndex, GridCell>,
    shapes: HashMap<ShapeHandle, ShapeEntry>,
}

impl BroadPhaseGrid {
    /// Creates an empty grid with the given cell size and bound inflation
    /// factor.
    ///
    /// # Panics
    /// Panics if `cell_size` is not positive or `scale_factor` is below one.
    pub fn new(cell_size: Real, scale_factor: Real) -> BroadPhaseGrid {
        assert!(cell_size > 0.0, "cell size must be positive");
        assert!(scale_factor >= 1.0, "scale factor must be at least 1");

        BroadPhaseGrid {
            cell_size,
            scale_factor,
            cells: HashMap::default(),
            shapes: HashMap::default(),
        }
    }

    /// The edge length of the grid cells.
    #[inline]
    pub fn cell_size(&self) -> Real {
        self.cell_size
    }

    /// The inflation factor applied to shape bounds before indexing.
    #[inline]
    pub fn scale_factor(&self) -> Real {
        self.scale_factor
    }

    /// The number of registered shapes.
    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Tests whether no shape is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Tests whether `handle` is registered in this grid.
    #[inline]
    pub fn contains(&self, handle: ShapeHandle) -> bool {
        self.shapes.contains_key(&handle)
    }

    /// The number of grid cells currently storing at least one shape.
    ///
    /// Cells are created and destroyed on demand; a cell left without any
    /// shape is never kept around, so this is exactly the footprint of the
    /// sparse grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The cell range spanned by `aabb`.
    fn cell_range(cell_size: Real, aabb: &Aabb) -> CellRange {
        CellRange::new(
            cell_at(cell_size, &aabb.mins),
            cell_at(cell_size, &aabb.maxs),
        )
    }

    /// The index of the cell containing `point`.
    #[inline]
    pub fn cell_index(&self, point: &Point) -> CellIndex {
        cell_at(self.cell_size, point)
    }

    fn insert_into_cells(
        cells: &mut HashMap<CellIndex, GridCell>,
        range: CellRange,
        handle: ShapeHandle,
    ) {
        for key in range {
            let cell = cells.entry(key).or_default();
            if !cell.shapes.contains(&handle) {
                cell.shapes.push(handle);
            }
        }
    }

    fn remove_from_cell(
        cells: &mut HashMap<CellIndex, GridCell>,
        key: &CellIndex,
        handle: ShapeHandle,
    ) {
        let emptied = match cells.get_mut(key) {
            Some(cell) => {
                cell.shapes.retain(|h| *h != handle);
                cell.shapes.is_empty()
            }
            None => false,
        };

        if emptied {
            // Cell iteration order is never observed.
            let _ = cells.swap_remove(key);
        }
    }

    /// Registers `shape` under `handle`, or refreshes its indexing if the
    /// handle is already registered.
    ///
    /// Re-registering moves the handle between exactly the cells its old and
    /// new inflated bounds disagree on; if both bounds span the same cell
    /// range, no cell is touched at all.
    pub fn update(&mut self, handle: ShapeHandle, shape: &Shape) {
        let bounds = shape.compute_aabb(self.scale_factor);
        let new_range = Self::cell_range(self.cell_size, &bounds);

        if let Some(entry) = self.shapes.get_mut(&handle) {
            let old_range = Self::cell_range(self.cell_size, &entry.bounds);
            entry.shape = *shape;
            entry.bounds = bounds;

            if old_range == new_range {
                return;
            }

            for key in old_range {
                if !new_range.contains(&key) {
                    Self::remove_from_cell(&mut self.cells, &key, handle);
                }
            }
            Self::insert_into_cells(&mut self.cells, new_range, handle);
        } else {
            Self::insert_into_cells(&mut self.cells, new_range, handle);
            let _ = self.shapes.insert(handle, ShapeEntry { shape: *shape, bounds });
        }
    }

    /// Registers or refreshes several shapes at once.
    pub fn update_many<'a>(&mut self, shapes: impl IntoIterator<Item = (ShapeHandle, &'a Shape)>) {
        for (handle, shape) in shapes {
            self.update(handle, shape);
        }
    }

    /// Rebuilds the whole grid from the registered shapes, in registration
    /// order.
    pub fn update_all(&mut self) {
        self.cells.clear();

        let cell_size = self.cell_size;
        let scale_factor = self.scale_factor;

        for (handle, entry) in self.shapes.iter_mut() {
            entry.bounds = entry.shape.compute_aabb(scale_factor);
            Self::insert_into_cells(
                &mut self.cells,
                Self::cell_range(cell_size, &entry.bounds),
                *handle,
            );
        }
    }

    /// Unregisters `handle`, removing it from every cell it was indexed in
    /// and deleting the cells this empties. Removing an unknown handle is a
    /// no-op.
    pub fn remove(&mut self, handle: ShapeHandle) {
        let Some(entry) = self.shapes.shift_remove(&handle) else {
            return;
        };

        for key in Self::cell_range(self.cell_size, &entry.bounds) {
            Self::remove_from_cell(&mut self.cells, &key, handle);
        }
    }

    /// The candidates a registered shape may overlap: every other
    /// registered shape sharing a cell with the query's inflated bound and
    /// whose uninflated bound overlaps the query's uninflated bound.
    ///
    /// The result never contains the query handle itself nor duplicates. An
    /// unknown handle yields no candidates.
    pub fn candidates(&self, handle: ShapeHandle) -> Vec<ShapeHandle> {
        match self.shapes.get(&handle) {
            Some(entry) => self.candidates_filtered(&entry.shape, Some(handle)),
            None => Vec::new(),
        }
    }

    /// The candidates an arbitrary (unregistered) query shape may overlap.
    pub fn candidates_with_shape(&self, shape: &Shape) -> Vec<ShapeHandle> {
        self.candidates_filtered(shape, None)
    }

    fn candidates_filtered(&self, query: &Shape, exclude: Option<ShapeHandle>) -> Vec<ShapeHandle> {
        let mut result = Vec::new();
        let mut visited = HashSet::default();

        let query_bounds = query.compute_aabb(1.0);
        let inflated = query.compute_aabb(self.scale_factor);

        for key in Self::cell_range(self.cell_size, &inflated) {
            let Some(cell) = self.cells.get(&key) else {
                continue;
            };

            for &handle in &cell.shapes {
                if Some(handle) == exclude || !visited.insert(handle) {
                    continue;
                }

                if query_bounds.intersects(&self.shapes[&handle].shape.compute_aabb(1.0)) {
                    result.push(handle);
                }
            }
        }

        result
    }

    /// The candidates a ray may hit within `max_toi` world units: every
    /// registered shape found in a cell the ray pierces whose uninflated
    /// bound is hit by the ray within `max_toi`.
    ///
    /// The ray direction is normalised internally; a zero-length direction
    /// yields no candidates. The result is duplicate-free and ordered by
    /// cell traversal.
    pub fn candidates_along_ray(&self, ray: &Ray, max_toi: Real) -> Vec<ShapeHandle> {
        let Some(dir) = ray.dir.try_normalize(DEFAULT_EPSILON) else {
            log::debug!("ray candidates requested with a zero-length direction");
            return Vec::new();
        };
        let unit_ray = Ray::new(ray.origin, dir);

        let mut result = Vec::new();
        let mut visited = HashSet::default();

        for key in RayGridTraversal::new(self.cell_size, &unit_ray, max_toi) {
            let Some(cell) = self.cells.get(&key) else {
                continue;
            };

            for &handle in &cell.shapes {
                if !visited.insert(handle) {
                    continue;
                }

                let bounds = self.shapes[&handle].shape.compute_aabb(1.0);
                if let Some(hit) = bounds.cast_unit_ray(&unit_ray) {
                    if hit.toi <= max_toi {
                        result.push(handle);
                    }
                }
            }
        }

        result
    }
}
