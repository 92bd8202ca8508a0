//! The closed set of shapes understood by every query in this crate.

use crate::shape::{Ball, Capsule, Cuboid, Obb};

/// A tagged union over the supported primitive shapes.
///
/// Queries dispatch on the tag with a plain `match`; shapes stay `Copy`
/// value types and never touch the heap.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Shape {
    /// A ball (sphere in 3D, disc in 2D).
    Ball(Ball),
    /// An axis-aligned box.
    Cuboid(Cuboid),
    /// An oriented box.
    Obb(Obb),
    /// A capsule.
    Capsule(Capsule),
}

impl From<Ball> for Shape {
    #[inline]
    fn from(ball: Ball) -> Shape {
        Shape::Ball(ball)
    }
}

impl From<Cuboid> for Shape {
    #[inline]
    fn from(cuboid: Cuboid) -> Shape {
        Shape::Cuboid(cuboid)
    }
}

impl From<Obb> for Shape {
    #[inline]
    fn from(obb: Obb) -> Shape {
        Shape::Obb(obb)
    }
}

impl From<Capsule> for Shape {
    #[inline]
    fn from(capsule: Capsule) -> Shape {
        Shape::Capsule(capsule)
    }
}
