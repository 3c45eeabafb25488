//! Runtime reflection and a text format for reflected values.
//!
//! Every reflected type is in one of three categories:
//!
//! - [`Primitive`]: a single token, e.g. `12`, `0.5`, `"text"`.
//! - [`Structure`]: named fields, e.g. `{x=1,y=2}`.
//! - [`Container`]: a list of elements, e.g. `[1,2,3]`.
//!
//! [`Interface`] binds to one value and exposes what its category allows,
//! [`to_string`] and [`from_string`] convert to and from text.
//!
//! ```
//! use tc_reflect::{FromStringMode, from_string, structure, to_string};
//!
//! structure! {
//!     #[derive(Debug, PartialEq)]
//!     pub struct Point {
//!         (optional) x: i32 = 0,
//!         y: i32,
//!     }
//! }
//!
//! let mut point = Point::default();
//! from_string(&mut point, "{y = 5}", FromStringMode::Full).unwrap();
//! assert_eq!(point, Point { x: 0, y: 5 });
//!
//! let err = from_string(&mut point, "{}", FromStringMode::Full).unwrap_err();
//! assert!(err.to_string().ends_with("Following fields are missing: `y`."));
//!
//! assert_eq!(to_string(&Point { x: 1, y: 2 }), "{x=1,y=2}");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code refers to `::tc_reflect`, which has to resolve inside this
// crate too, e.g. for derives in unit tests.
extern crate self as tc_reflect;

// -----------------------------------------------------------------------------
// Modules

mod container;
mod cursor;
mod error;
mod impls;
mod interface;
mod primitive;
mod reflect;
mod structure;
mod text;

pub mod layout;

// -----------------------------------------------------------------------------
// Top-level exports

pub use container::{Container, ContainerInsert};
pub use cursor::Cursor;
pub use error::{FieldPath, ParseErrorKind, PathSegment, ReflectError};
pub use interface::{Interface, from_string, to_string};
pub use primitive::Primitive;
pub use reflect::{Categorized, Reflect, ReflectKind, ReflectMut, ReflectRef, kind};
pub use structure::{FieldAt, FieldCategory, FieldInfo, Structure, StructureInfo};
pub use text::FromStringMode;

pub use tc_reflect_derive as derive;
pub use tc_reflect_derive::structure;
