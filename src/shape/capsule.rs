use crate::math::{Point, Real};
use crate::shape::{Ball, Segment};

/// A capsule shape defined as a round segment: every point within `radius`
/// of the segment `[a, b]`.
///
/// The endpoints may coincide, in which case the capsule degenerates to a
/// [`Ball`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Capsule {
    /// The endpoints of the capsule's principal axis.
    pub segment: Segment,
    /// The radius of the capsule. Must be positive.
    pub radius: Real,
}

impl Capsule {
    /// Creates a new capsule defined as the segment between `a` and `b`,
    /// inflated by the given `radius`.
    #[inline]
    pub fn new(a: Point, b: Point, radius: Real) -> Capsule {
        Capsule {
            segment: Segment::new(a, b),
            radius,
        }
    }

    /// The ball covering the cap at the capsule's first endpoint.
    #[inline]
    pub fn ball_a(&self) -> Ball {
        Ball::new(self.segment.a, self.radius)
    }

    /// The ball covering the cap at the capsule's second endpoint.
    #[inline]
    pub fn ball_b(&self) -> Ball {
        Ball::new(self.segment.b, self.radius)
    }
}
