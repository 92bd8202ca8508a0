//! Compilation-flag dependent aliases for the mathematical types.

/// The scalar type used throughout this crate.
#[cfg(feature = "f64")]
pub type Real = f64;

/// The scalar type used throughout this crate.
#[cfg(feature = "f32")]
pub type Real = f32;

/// The tolerance used for axis-degeneracy checks and small-distance clamping.
pub const DEFAULT_EPSILON: Real = 1.0e-6;

#[cfg(feature = "dim3")]
mod dim {
    use super::Real;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub type Point<N = Real> = na::Point3<N>;

    /// The vector type.
    pub type Vector<N = Real> = na::Vector3<N>;

    /// The index of a broadphase grid cell on the integer lattice.
    pub type CellIndex = na::Point3<i32>;

    /// A displacement between two grid cells.
    pub type CellShift = na::Vector3<i32>;
}

#[cfg(feature = "dim2")]
mod dim {
    use super::Real;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The point type.
    pub type Point<N = Real> = na::Point2<N>;

    /// The vector type.
    pub type Vector<N = Real> = na::Vector2<N>;

    /// The index of a broadphase grid cell on the integer lattice.
    pub type CellIndex = na::Point2<i32>;

    /// A displacement between two grid cells.
    pub type CellShift = na::Vector2<i32>;
}

pub use dim::*;
