use proc_macro2::Span;
use syn::{Attribute, Data, DeriveInput, Fields, Generics, Ident, Member, Type};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Category

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Category {
    Mandatory,
    Optional,
}

impl Category {
    pub(crate) fn variant(self) -> Ident {
        let name = match self {
            Self::Mandatory => "Mandatory",
            Self::Optional => "Optional",
        };
        Ident::new(name, Span::call_site())
    }

    /// Parses `optional` or `mandatory`.
    pub(crate) fn from_ident(ident: &Ident) -> syn::Result<Self> {
        if ident == "optional" {
            Ok(Self::Optional)
        } else if ident == "mandatory" {
            Ok(Self::Mandatory)
        } else {
            Err(syn::Error::new(
                ident.span(),
                "expected `optional` or `mandatory`",
            ))
        }
    }

    /// Reads `#[reflect(optional)]` / `#[reflect(mandatory)]`, the last one wins.
    pub(crate) fn from_attrs(attrs: &[Attribute], default: Self) -> syn::Result<Self> {
        let mut category = default;
        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                let Some(ident) = meta.path.get_ident() else {
                    return Err(meta.error("expected `optional` or `mandatory`"));
                };
                category = Self::from_ident(ident)?;
                Ok(())
            })?;
        }
        Ok(category)
    }
}

// -----------------------------------------------------------------------------
// Structure data

/// One reflected field.
pub(crate) struct FieldData {
    /// How the field is accessed, `self.#member`.
    pub member: Member,
    /// The name used in text.
    pub name: String,
    pub ty: Type,
    pub category: Category,
}

/// Everything needed to implement `Structure` for a type.
pub(crate) struct StructureData {
    pub ident: Ident,
    pub generics: Generics,
    pub fields: Vec<FieldData>,
}

impl StructureData {
    /// Collects the fields of a derive input. Only structs are supported.
    pub(crate) fn from_derive(ast: &DeriveInput) -> syn::Result<Self> {
        let Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new(
                ast.ident.span(),
                "`Structure` can only be derived for structs",
            ));
        };

        let default = Category::from_attrs(&ast.attrs, Category::Mandatory)?;

        let fields = match &data.fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            Fields::Unnamed(unnamed) => unnamed.unnamed.iter().collect(),
            Fields::Unit => Vec::new(),
        };

        let fields = fields
            .into_iter()
            .enumerate()
            .map(|(index, field)| {
                let member = match &field.ident {
                    Some(ident) => Member::Named(ident.clone()),
                    None => Member::Unnamed(index.into()),
                };
                Ok(FieldData {
                    name: member_name(&member),
                    member,
                    ty: field.ty.clone(),
                    category: Category::from_attrs(&field.attrs, default)?,
                })
            })
            .collect::<syn::Result<_>>()?;

        Ok(Self {
            ident: ast.ident.clone(),
            generics: ast.generics.clone(),
            fields,
        })
    }
}

/// `field` for named members, `0`, `1`, ... for tuple members.
///
/// Raw identifiers lose their `r#` prefix.
pub(crate) fn member_name(member: &Member) -> String {
    match member {
        Member::Named(ident) => {
            let name = ident.to_string();
            match name.strip_prefix("r#") {
                Some(raw) => raw.to_owned(),
                None => name,
            }
        }
        Member::Unnamed(index) => index.index.to_string(),
    }
}
