//! Shapes supported by lattice.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::cuboid::Cuboid;
pub use self::obb::Obb;
pub use self::segment::Segment;
pub use self::shape::Shape;

mod ball;
mod capsule;
mod cuboid;
mod obb;
mod segment;
#[doc(hidden)]
pub mod shape;
