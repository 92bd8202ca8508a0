use crate::shape::{Capsule, Cuboid};

/// Tests whether a capsule and an axis-aligned box overlap.
///
/// Each capsule endpoint is clamped to the box per axis; the midpoint of the
/// two clamped endpoints serves as the reference point whose distance to the
/// capsule's segment decides the test.
#[cfg(feature = "dim3")]
pub fn overlap_capsule_cuboid(capsule: &Capsule, cuboid: &Cuboid) -> bool {
    use crate::math::{Point, Vector, DIM};

    let mins = cuboid.mins();
    let maxs = cuboid.maxs();

    let mut reference = Vector::zeros();
    for i in 0..DIM {
        let clamped_a = capsule.segment.a[i].clamp(mins[i], maxs[i]);
        let clamped_b = capsule.segment.b[i].clamp(mins[i], maxs[i]);
        reference[i] = (clamped_a + clamped_b) * 0.5;
    }

    capsule.segment.distance_to_point(&Point::from(reference)) <= capsule.radius
}

/// Tests whether a capsule and an axis-aligned box overlap.
///
/// Overlap holds if either clamped endpoint stays within the radius, or the
/// rectangle's center is within the radius of the capsule's segment.
#[cfg(feature = "dim2")]
pub fn overlap_capsule_cuboid(capsule: &Capsule, cuboid: &Cuboid) -> bool {
    let aabb = cuboid.aabb();
    let radius_sq = capsule.radius * capsule.radius;

    let clamped_a = aabb.clamp_point(&capsule.segment.a);
    if (clamped_a - capsule.segment.a).norm_squared() <= radius_sq {
        return true;
    }

    let clamped_b = aabb.clamp_point(&capsule.segment.b);
    if (clamped_b - capsule.segment.b).norm_squared() <= radius_sq {
        return true;
    }

    capsule.segment.distance_squared_to_point(&cuboid.center) <= radius_sq
}
