//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};

/// An Axis Aligned Bounding Box.
///
/// Every shape of this crate can compute its own `Aabb`, optionally
/// inflated by a scale factor so the broadphase does not have to re-index
/// shapes on every small movement (see
/// [`Shape::compute_aabb`](crate::shape::Shape::compute_aabb)).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with the smallest coordinates of this AABB.
    pub mins: Point,
    /// The point with the greatest coordinates of this AABB.
    pub maxs: Point,
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each
    ///     component of `mins` must be smaller than the related components of
    ///     `maxs`.
    #[inline]
    pub fn new(mins: Point, maxs: Point) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point, half_extents: Vector) -> Aabb {
        Aabb::new(center - half_extents, center + half_extents)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point {
        na::center(&self.mins, &self.maxs)
    }

    /// The half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector {
        (self.maxs - self.mins) * 0.5
    }

    /// An AABB with the same center and its half-extents multiplied by
    /// `factor`.
    ///
    /// For `factor ≥ 1` the result contains `self`, which is what the
    /// broadphase relies on when it indexes inflated bounds.
    #[inline]
    pub fn scaled_wrt_center(&self, factor: Real) -> Aabb {
        Aabb::from_half_extents(self.center(), self.half_extents() * factor.abs())
    }

    /// Tests whether `point` lies inside of this AABB, boundary included.
    #[inline]
    pub fn contains_point(&self, point: &Point) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// Tests whether this AABB and `other` overlap. Touching boxes count as
    /// overlapping.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        for i in 0..DIM {
            if self.mins[i] > other.maxs[i] || self.maxs[i] < other.mins[i] {
                return false;
            }
        }

        true
    }

    /// The point of this AABB closest to `point`.
    #[inline]
    pub fn clamp_point(&self, point: &Point) -> Point {
        Point::from(Vector::from_fn(|i, _| {
            point[i].clamp(self.mins[i], self.maxs[i])
        }))
    }
}
