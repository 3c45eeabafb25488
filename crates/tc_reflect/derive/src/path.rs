//! Paths used by generated code.

/// Get the correct access path to the `tc_reflect` crate.
///
/// 1. For crates that depend on `tc_reflect`, `::tc_reflect` is returned.
/// 2. For crates that depend on a facade such as `tc_core`, `::tc_core::reflect` is returned.
/// 3. For other situations, `::tc_reflect` is returned, but this may be incorrect.
///
/// This reads the caller's manifest, so the path is obtained once per
/// macro invocation and passed around.
pub(crate) fn tc_reflect() -> syn::Path {
    tc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("tc_reflect"))
}
