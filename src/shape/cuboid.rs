use crate::math::{Point, Vector};

/// An axis-aligned box shape, described by its center and half-extents.
///
/// Unlike [`Obb`](super::Obb), a cuboid's faces stay parallel to the world
/// axes. Its bound under [`compute_aabb`](super::Shape::compute_aabb) is
/// itself.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Cuboid {
    /// The center of the cuboid.
    pub center: Point,
    /// The half-extents of the cuboid along each world axis. Each component
    /// must be positive.
    pub half_extents: Vector,
}

impl Cuboid {
    /// Creates a new cuboid from its center and half-extents.
    #[inline]
    pub fn new(center: Point, half_extents: Vector) -> Cuboid {
        Cuboid {
            center,
            half_extents,
        }
    }

    /// The point with the smallest coordinates covered by this cuboid.
    #[inline]
    pub fn mins(&self) -> Point {
        self.center - self.half_extents
    }

    /// The point with the greatest coordinates covered by this cuboid.
    #[inline]
    pub fn maxs(&self) -> Point {
        self.center + self.half_extents
    }
}
