/*!
keyblock3d
==========

**keyblock3d** is a 3-dimensional rock-mass block decomposition library
written with the rust programming language.

A rock volume is described as a convex intersection of half-spaces and
successively cut by planar geological discontinuities (joints). Each cut
splits the blocks straddling the joint plane, and the surviving blocks
are reduced to a minimal half-space description suitable for downstream
slope-stability analysis.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]

#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod io;
pub mod query;
pub mod shape;
pub mod transformation;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    /// The scalar type used throughout this crate.
    pub use f64 as Real;

    /// The default tolerance used for geometric comparisons.
    ///
    /// Feasibility, binding-face, and normalization tests all share this
    /// tolerance so that a face tangent to a block is classified the same
    /// way by every stage of the decomposition.
    pub const DEFAULT_EPSILON: Real = 1.0e-6;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub type Point = na::Point3<Real>;

    /// The vector type.
    pub type Vector = na::Vector3<Real>;

    /// The unit vector type.
    pub type UnitVector = na::UnitVector3<Real>;
}
