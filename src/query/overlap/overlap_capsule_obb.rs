use crate::shape::{Capsule, Obb};

/// Tests whether a capsule and an oriented box overlap.
///
/// The capsule's segment is expressed in the box's local frame where the
/// box is axis-aligned. Overlap holds if either clamped endpoint stays
/// within the radius, or the midpoint of the clamped endpoints is within
/// the radius of the local segment.
#[cfg(feature = "dim3")]
pub fn overlap_capsule_obb(capsule: &Capsule, obb: &Obb) -> bool {
    use crate::math::{Point, Vector, DIM};
    use crate::shape::Segment;

    let local_a = obb.to_local_point(&capsule.segment.a);
    let local_b = obb.to_local_point(&capsule.segment.b);
    let radius_sq = capsule.radius * capsule.radius;

    let clamped_a = obb.clamp_local(&local_a);
    if (clamped_a - local_a).norm_squared() <= radius_sq {
        return true;
    }

    let clamped_b = obb.clamp_local(&local_b);
    if (clamped_b - local_b).norm_squared() <= radius_sq {
        return true;
    }

    let mut reference = Vector::zeros();
    for i in 0..DIM {
        reference[i] = (clamped_a[i] + clamped_b[i]) * 0.5;
    }

    let local_segment = Segment::new(Point::from(local_a), Point::from(local_b));
    local_segment.distance_to_point(&Point::from(reference)) <= capsule.radius
}

/// Tests whether a capsule and an oriented box overlap, by clipping the
/// capsule's segment against the box in its local frame (Liang–Barsky) and
/// comparing the squared segment/box distance with the squared radius.
#[cfg(feature = "dim2")]
pub fn overlap_capsule_obb(capsule: &Capsule, obb: &Obb) -> bool {
    use crate::math::Point;
    use crate::query::clip::local_segment_aabb_distance_squared;
    use crate::shape::Segment;

    let local_segment = Segment::new(
        Point::from(obb.to_local_point(&capsule.segment.a)),
        Point::from(obb.to_local_point(&capsule.segment.b)),
    );

    let dist_sq = local_segment_aabb_distance_squared(&local_segment, &obb.half_extents);
    dist_sq <= capsule.radius * capsule.radius
}
