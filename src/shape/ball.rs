use crate::math::{Point, Real};

/// A ball shape: a sphere in 3D, a disc in 2D.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Ball {
    /// The center of the ball.
    pub center: Point,
    /// The radius of the ball. Must be positive.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball with the given center and radius.
    #[inline]
    pub fn new(center: Point, radius: Real) -> Ball {
        Ball { center, radius }
    }
}
