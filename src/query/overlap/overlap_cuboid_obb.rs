use crate::shape::{Cuboid, Obb};

/// Tests whether an axis-aligned box and an oriented box overlap.
///
/// The cuboid is promoted to a world-axis oriented box and the full SAT
/// test is reused.
#[cfg(feature = "dim3")]
#[inline]
pub fn overlap_cuboid_obb(cuboid: &Cuboid, obb: &Obb) -> bool {
    let promoted = Obb::axis_aligned(cuboid.center, cuboid.half_extents);
    super::overlap_obb_obb(&promoted, obb)
}

/// Tests whether an axis-aligned box and an oriented box overlap, by
/// projecting the rectangle onto the oriented box's two local axes.
#[cfg(feature = "dim2")]
#[inline]
pub fn overlap_cuboid_obb(cuboid: &Cuboid, obb: &Obb) -> bool {
    use crate::math::DIM;

    let local = obb.to_local_point(&cuboid.center);

    for i in 0..DIM {
        let mut extent = 0.0;
        for k in 0..DIM {
            extent += cuboid.half_extents[k] * obb.axes[i][k].abs();
        }

        if local[i].abs() > obb.half_extents[i] + extent {
            return false;
        }
    }

    true
}
