//! Generic vectors and matrices.
//!
//! [`Vector<T, D>`] is `D` values of type `T`. A matrix is a vector of column
//! vectors, [`Mat<T, W, H>`], so the whole operator and method surface is
//! written once and shared by every shape.
//!
//! - Arithmetic, bitwise and shift operators work componentwise, between
//!   vectors of the same shape or with a scalar on either side.
//! - Mixed scalar types combine in their [`Larger`] type. Pairs without one
//!   (e.g. `i32` and `u32`) do not compile.
//! - [`Vector::mul`] is the matrix product, `*` is componentwise.
//! - [`num`] holds rounding, clamping and floored division helpers.
//!
//! ```
//! use tc_math::{FMat3, FVec2, vec2, vec3};
//!
//! let pos: FVec2 = vec2(1.0, 2.0);
//! let m = FMat3::translate(vec2(10.0, 0.0)).mul(FMat3::scale(vec2(2.0, 2.0)));
//! assert_eq!(m.mul(pos.to_vec3_with(1.0)), vec3(12.0, 4.0, 1.0));
//! assert_eq!(pos.to_string(), "[1,2]");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Modules

mod aliases;
mod element;
mod fields;
mod format;
mod impls;
mod larger;
mod matrix;
mod ops;
mod resize;
mod scalar;
mod vector;

pub mod num;

// -----------------------------------------------------------------------------
// Top-level exports

pub use aliases::*;
pub use element::{BaseT, ChangeBaseT, Element};
pub use format::ParseVectorError;
pub use larger::{Larger, LargerT};
pub use matrix::{Mat, MatMul};
pub use scalar::{Numeric, Real, Scalar, Signed};
pub use vector::{Truthy, Vector, vec2, vec3, vec4};
