//! See following macros:
//!
//! - [`Structure`]
//! - [`structure!`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod declare;
mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// Implements `Reflect`, `Structure` and `FieldAt<I>` for a struct.
///
/// Every field is reflected, in declaration order, and its type must
/// implement `Reflect`. Tuple structs name their fields `0`, `1`, ...
///
/// Fields are mandatory by default. `#[reflect(optional)]` on a field makes
/// it optional, and on the struct changes the default for all its fields;
/// `#[reflect(mandatory)]` switches back.
///
/// ```rust, ignore
/// #[derive(Structure, Default)]
/// #[reflect(optional)]
/// struct Tile {
///     #[reflect(mandatory)]
///     id: u16,
///     solid: bool,
/// }
/// ```
#[proc_macro_derive(Structure, attributes(reflect))]
pub fn derive_structure(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::StructureData::from_derive(&ast) {
        Ok(data) => impls::impl_structure(&data, &path::tc_reflect()).into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Declares a struct with per-field defaults and reflects it.
///
/// Fields sharing a type and a default can be declared together, and a
/// group may start with `(optional)` or `(mandatory)`. A `Default` impl is
/// generated from the initializers, fields without one use
/// `Default::default()`.
///
/// ```rust, ignore
/// structure! {
///     #[derive(Debug, Clone)]
///     pub struct Camera {
///         (optional) pub x, y: f32 = 0.0,
///         (optional) pub zoom: f32 = 1.0,
///         pub target: String,
///     }
/// }
/// ```
#[proc_macro]
pub fn structure(input: TokenStream) -> TokenStream {
    let declaration = parse_macro_input!(input as declare::Declaration);

    match declaration.expand(&path::tc_reflect()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
