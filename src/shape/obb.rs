use crate::math::{Point, Real, Vector, DIM};

/// An oriented box shape: a box whose local axes may be rotated freely
/// with respect to the world axes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Obb {
    /// The center of the box.
    pub center: Point,
    /// The half-extents of the box along each of its local axes. Each
    /// component must be positive.
    pub half_extents: Vector,
    /// The local orientation axes. Must be unit-length and mutually
    /// orthogonal.
    pub axes: [Vector; DIM],
}

impl Obb {
    /// Creates a new oriented box from its center, half-extents, and
    /// orthonormal axes.
    #[inline]
    pub fn new(center: Point, half_extents: Vector, axes: [Vector; DIM]) -> Obb {
        Obb {
            center,
            half_extents,
            axes,
        }
    }

    /// Creates an oriented box aligned with the world axes.
    pub fn axis_aligned(center: Point, half_extents: Vector) -> Obb {
        let axes = core::array::from_fn(|i| {
            let mut axis = Vector::zeros();
            axis[i] = 1.0;
            axis
        });

        Obb {
            center,
            half_extents,
            axes,
        }
    }

    /// Creates an oriented box whose axes are the world basis rotated by
    /// `rotation`.
    #[cfg(feature = "dim3")]
    pub fn from_rotation(
        center: Point,
        half_extents: Vector,
        rotation: &na::UnitQuaternion<Real>,
    ) -> Obb {
        Obb {
            center,
            half_extents,
            axes: [
                rotation * Vector::x(),
                rotation * Vector::y(),
                rotation * Vector::z(),
            ],
        }
    }

    /// Creates an oriented box rotated by `angle` radians.
    #[cfg(feature = "dim2")]
    pub fn from_angle(center: Point, half_extents: Vector, angle: Real) -> Obb {
        let rotation = na::UnitComplex::new(angle);
        Obb {
            center,
            half_extents,
            axes: [rotation * Vector::x(), rotation * Vector::y()],
        }
    }

    /// Expresses a world-space point in this box's local frame, as an
    /// offset from its center along its axes.
    #[inline]
    pub fn to_local_point(&self, pt: &Point) -> Vector {
        let d = pt - self.center;
        Vector::from_fn(|i, _| self.axes[i].dot(&d))
    }

    /// Maps local-frame coordinates back to a world-space point.
    #[inline]
    pub fn to_world_point(&self, local: &Vector) -> Point {
        let mut pt = self.center;
        for i in 0..DIM {
            pt += self.axes[i] * local[i];
        }
        pt
    }

    /// Expresses a world-space direction in this box's local frame.
    #[inline]
    pub fn to_local_vector(&self, v: &Vector) -> Vector {
        Vector::from_fn(|i, _| self.axes[i].dot(v))
    }

    /// Maps a local-frame direction back to world space.
    #[inline]
    pub fn to_world_vector(&self, local: &Vector) -> Vector {
        let mut v = Vector::zeros();
        for i in 0..DIM {
            v += self.axes[i] * local[i];
        }
        v
    }

    /// Clamps local-frame coordinates to this box's extents.
    #[inline]
    pub fn clamp_local(&self, local: &Vector) -> Vector {
        Vector::from_fn(|i, _| local[i].clamp(-self.half_extents[i], self.half_extents[i]))
    }
}
