use approx::abs_diff_eq;

use crate::math::{Vector, DEFAULT_EPSILON, DIM};
use crate::shape::Obb;

/// Tests whether the projections of two oriented boxes onto `axis` overlap.
///
/// Near-zero axes (as produced by cross products of nearly parallel edges)
/// cannot separate anything and report an overlap.
#[inline]
pub fn overlap_on_axis(a: &Obb, b: &Obb, axis: &Vector) -> bool {
    if abs_diff_eq!(axis.norm_squared(), 0.0, epsilon = DEFAULT_EPSILON) {
        return true;
    }

    let mut a_proj = 0.0;
    let mut b_proj = 0.0;
    for i in 0..DIM {
        a_proj += a.half_extents[i] * a.axes[i].dot(axis).abs();
        b_proj += b.half_extents[i] * b.axes[i].dot(axis).abs();
    }

    let centers_dist = (b.center - a.center).dot(axis).abs();
    centers_dist <= a_proj + b_proj
}

/// Tests whether two oriented boxes overlap, using the separating axis
/// theorem.
///
/// In 3D the candidate axes are the three face normals of each box plus the
/// nine pairwise edge cross products; in 2D the face normals of both boxes
/// suffice. If no axis separates the projections, the boxes overlap.
pub fn overlap_obb_obb(a: &Obb, b: &Obb) -> bool {
    for axis in &a.axes {
        if !overlap_on_axis(a, b, axis) {
            return false;
        }
    }

    for axis in &b.axes {
        if !overlap_on_axis(a, b, axis) {
            return false;
        }
    }

    #[cfg(feature = "dim3")]
    for a_axis in &a.axes {
        for b_axis in &b.axes {
            if !overlap_on_axis(a, b, &a_axis.cross(b_axis)) {
                return false;
            }
        }
    }

    true
}
