use crate::math::DIM;
use crate::shape::Cuboid;

/// Tests whether two axis-aligned boxes overlap.
#[inline]
pub fn overlap_cuboid_cuboid(a: &Cuboid, b: &Cuboid) -> bool {
    for i in 0..DIM {
        if (a.center[i] - b.center[i]).abs() > a.half_extents[i] + b.half_extents[i] {
            return false;
        }
    }

    true
}
