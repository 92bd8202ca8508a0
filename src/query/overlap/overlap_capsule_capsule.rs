use crate::shape::Capsule;

/// Tests whether two capsules overlap.
///
/// Approximates the segment/segment distance by the smallest of the four
/// endpoint/segment distances; exact whenever the closest features involve
/// an endpoint.
#[inline]
pub fn overlap_capsule_capsule(a: &Capsule, b: &Capsule) -> bool {
    let d1 = b.segment.distance_squared_to_point(&a.segment.a);
    let d2 = b.segment.distance_squared_to_point(&a.segment.b);
    let d3 = a.segment.distance_squared_to_point(&b.segment.a);
    let d4 = a.segment.distance_squared_to_point(&b.segment.b);

    let radii = a.radius + b.radius;
    d1.min(d2).min(d3).min(d4) <= radii * radii
}
