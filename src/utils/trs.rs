//! Helpers for composing, decomposing, and inverting affine
//! translation-rotation-scale matrices.
//!
//! The scene graph stores its cached matrices as homogeneous
//! [`Matrix4`] values of the form `T · R · S`. Scale components are assumed
//! non-negative: decomposing a matrix built from a negative scale is
//! undefined (the sign ends up folded into the recovered rotation).

use approx::abs_diff_eq;
use na::{Matrix3, Matrix4, Rotation3, UnitQuaternion};

use crate::math::{Real, Vector, DEFAULT_EPSILON};

/// Builds the homogeneous matrix `T · R · S`.
#[inline]
pub fn compose(
    translation: &Vector,
    rotation: &UnitQuaternion<Real>,
    scale: &Vector,
) -> Matrix4<Real> {
    Matrix4::new_translation(translation)
        * rotation.to_homogeneous()
        * Matrix4::new_nonuniform_scaling(scale)
}

/// The translation part of a TRS matrix (its last column).
#[inline]
pub fn translation(m: &Matrix4<Real>) -> Vector {
    m.fixed_view::<3, 1>(0, 3).into_owned()
}

/// The scale part of a TRS matrix: the norms of its three basis columns.
#[inline]
pub fn scale(m: &Matrix4<Real>) -> Vector {
    Vector::new(
        m.fixed_view::<3, 1>(0, 0).norm(),
        m.fixed_view::<3, 1>(0, 1).norm(),
        m.fixed_view::<3, 1>(0, 2).norm(),
    )
}

/// The rotation part of a TRS matrix.
///
/// Returns the identity if any scale component vanishes; a zero basis
/// column carries no orientation to recover.
pub fn rotation(m: &Matrix4<Real>) -> UnitQuaternion<Real> {
    let s = scale(m);

    for i in 0..3 {
        if abs_diff_eq!(s[i], 0.0, epsilon = DEFAULT_EPSILON) {
            return UnitQuaternion::identity();
        }
    }

    let basis = Matrix3::from_columns(&[
        m.fixed_view::<3, 1>(0, 0).into_owned() / s.x,
        m.fixed_view::<3, 1>(0, 1).into_owned() / s.y,
        m.fixed_view::<3, 1>(0, 2).into_owned() / s.z,
    ]);

    UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(basis))
}

/// Splits a TRS matrix into its translation, rotation, and scale parts.
#[inline]
pub fn decompose(m: &Matrix4<Real>) -> (Vector, UnitQuaternion<Real>, Vector) {
    (translation(m), rotation(m), scale(m))
}

/// The inverse of a TRS matrix, computed analytically as `S⁻¹ · R⁻¹ · T⁻¹`.
pub fn inverse(m: &Matrix4<Real>) -> Matrix4<Real> {
    let (t, r, s) = decompose(m);
    let inv_scale = s.map(|x| {
        if abs_diff_eq!(x, 0.0, epsilon = DEFAULT_EPSILON) {
            0.0
        } else {
            1.0 / x
        }
    });

    Matrix4::new_nonuniform_scaling(&inv_scale)
        * r.inverse().to_homogeneous()
        * Matrix4::new_translation(&-t)
}
