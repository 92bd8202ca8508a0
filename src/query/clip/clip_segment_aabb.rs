use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DEFAULT_EPSILON, DIM};
use crate::shape::Segment;

/// The squared distance between a segment and an origin-centered box with
/// the given half-extents.
///
/// Runs a Liang–Barsky clip of the segment against the box; if any part of
/// the segment survives the clip, they intersect and the distance is zero.
/// Otherwise the clip's entry parameter points at the closest approach, and
/// the squared distance from that point to the box is returned.
pub fn local_segment_aabb_distance_squared(segment: &Segment, half_extents: &Vector) -> Real {
    let d = segment.scaled_direction();

    let mut t_min: Real = 0.0;
    let mut t_max: Real = 1.0;
    let mut outside = false;

    for i in 0..DIM {
        let p = d[i];
        let q0 = segment.a[i] + half_extents[i];
        let q1 = half_extents[i] - segment.a[i];

        if p.abs() < DEFAULT_EPSILON {
            if q0 < 0.0 || q1 < 0.0 {
                outside = true;
                break;
            }
        } else {
            let mut t0 = -q0 / p;
            let mut t1 = q1 / p;
            if t0 > t1 {
                core::mem::swap(&mut t0, &mut t1);
            }

            t_min = t_min.max(t0);
            t_max = t_max.min(t1);

            if t_min > t_max {
                outside = true;
                break;
            }
        }
    }

    if !outside {
        return 0.0;
    }

    let t = t_min.clamp(0.0, 1.0);
    let closest_on_segment = segment.a + d * t;
    let aabb = Aabb::from_half_extents(Point::origin(), *half_extents);
    let closest_on_box = aabb.clamp_point(&closest_on_segment);

    (closest_on_segment - closest_on_box).norm_squared()
}
