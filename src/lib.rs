/*!
lattice
========

**lattice** is a 2 and 3-dimensional spatial query library written with
the rust programming language. It provides boolean overlap tests between
a closed set of primitive shapes, analytic ray/shape intersections, a
uniform-grid broadphase, and a lazily-evaluated scene-graph transform
hierarchy (3D only).

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![doc(html_root_url = "https://docs.rs/lattice/0.1.0")]

#[cfg(all(feature = "dim2", feature = "dim3"))]
std::compile_error!("The `dim2` and `dim3` features are mutually exclusive; depend on the `lattice2d` or `lattice3d` crate instead of enabling both.");
#[cfg(not(any(feature = "dim2", feature = "dim3")))]
std::compile_error!("Exactly one of the `dim2` or `dim3` features must be enabled.");
#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");
#[cfg(not(any(feature = "f32", feature = "f64")))]
std::compile_error!("Exactly one of the `f32` or `f64` features must be enabled.");

extern crate num_traits as num;
pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod math;
pub mod partitioning;
pub mod query;
#[cfg(feature = "dim3")]
pub mod scene;
pub mod shape;
pub mod utils;
