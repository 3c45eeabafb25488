use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::Span;
use toml_edit::{Document, Item, Table};

/// The caller's `Cargo.toml`, used to find how generated code can name
/// another `tc_*` crate.
///
/// # Example
///
/// ```rust
/// # use tc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("tc_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. A direct dependency on the crate resolves to `::tc_reflect`.
/// 2. For a `tc_` crate, a dependency on one of the facades `tilecraft`,
///    `tc_core` or `tc` (checked in that order) resolves to
///    `::facade::reflect`.
/// 3. Rules 1 and 2 again for `dev-dependencies`.
/// 4. Anything else, including a manifest that cannot be read, resolves to
///    `::tc_reflect`.
///
/// A crate that uses its own derive macros should declare
/// `extern crate self as tc_reflect;` so the absolute path also works inside it.
#[derive(Debug)]
pub struct Manifest {
    document: Option<Document<Box<str>>>,
    modified_time: Option<SystemTime>,
}

const FACADE_NAMES: [&str; 3] = ["tilecraft", "tc_core", "tc"];
const CRATE_PREFIX: &str = "tc_";

impl Manifest {
    fn manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        Some(path)
    }

    fn modified_time(path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path).and_then(|meta| meta.modified()).ok()
    }

    fn load(path: &Path) -> Self {
        let document = std::fs::read_to_string(path)
            .ok()
            .and_then(|text| Document::parse(text.into_boxed_str()).ok());
        Manifest {
            document,
            modified_time: Self::modified_time(path),
        }
    }

    fn absolute(name: &str) -> syn::Path {
        let ident = syn::Ident::new(name, Span::call_site());
        let mut path = syn::Path::from(ident);
        path.leading_colon = Some(Default::default());
        path
    }

    fn find_in(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute(name));
        }
        let module = name.strip_prefix(CRATE_PREFIX)?;
        let facade = FACADE_NAMES.iter().find(|facade| deps.contains_key(facade))?;
        let mut path = Self::absolute(facade);
        path.segments
            .push(syn::Ident::new(module, Span::call_site()).into());
        Some(path)
    }

    /// The path under which generated code can reach the crate `name`.
    ///
    /// See the type documentation for the rules.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        let Some(document) = &self.document else {
            return Self::absolute(name);
        };
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .filter_map(|key| match document.get(key) {
                Some(Item::Table(deps)) => Self::find_in(deps, name),
                _ => None,
            })
            .next()
            .unwrap_or_else(|| Self::absolute(name))
    }

    /// Runs `func` with the manifest of the crate being compiled.
    ///
    /// Manifests are cached per path and re-read when the file changes.
    /// Reading still costs a lock and a `stat`, so call this once per macro
    /// invocation and pass the resulting paths around.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(path) = Self::manifest_path() else {
            return func(&Manifest {
                document: None,
                modified_time: None,
            });
        };
        let modified_time = Self::modified_time(&path);

        {
            let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = manifests.get(&path)
                && manifest.modified_time.is_some()
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let manifest = Self::load(&path);
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Manifest;
    use quote::ToTokens;
    use toml_edit::Document;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            document: Some(Document::parse(text.into()).unwrap()),
            modified_time: None,
        }
    }

    fn path(manifest: &Manifest, name: &str) -> String {
        manifest.get_crate_path(name).to_token_stream().to_string().replace(' ', "")
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\ntc_reflect = \"0.1\"\ntc_core = \"0.1\"\n");
        assert_eq!(path(&m, "tc_reflect"), "::tc_reflect");
    }

    #[test]
    fn through_facade() {
        let m = manifest("[dependencies]\ntc_core = { path = \"..\" }\n");
        assert_eq!(path(&m, "tc_reflect"), "::tc_core::reflect");

        let m = manifest("[dev-dependencies]\ntc = { package = \"tc_core\", path = \"..\" }\n");
        assert_eq!(path(&m, "tc_math"), "::tc::math");
    }

    #[test]
    fn fallback() {
        let m = manifest("[dependencies]\nserde = \"1\"\n");
        assert_eq!(path(&m, "tc_reflect"), "::tc_reflect");
        assert_eq!(path(&Manifest { document: None, modified_time: None }, "tc_math"), "::tc_math");
    }
}
