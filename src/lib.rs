//! Core crates of the TileCraft engine, re-exported under one roof.
//!
//! - [`math`]: fixed-size vectors and matrices over any element type.
//! - [`reflect`]: runtime reflection with a text format.
//! - [`utils`]: hashing and small shared helpers.
//!
//! ```
//! use tc_core::math::{IVec2, vec2};
//!
//! let v: IVec2 = vec2(1, -2);
//! assert_eq!(tc_core::reflect::to_string(&v), "{x=1,y=-2}");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use tc_math as math;
pub use tc_reflect as reflect;
pub use tc_utils as utils;
