//! Input of `structure!`.
//!
//! ```text
//! #[attrs] vis struct Name<generics> where ... {
//!     (optional) #[attrs] vis a, b: Type = init,
//!     c: Type,
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::token::{Brace, Paren};
use syn::{Attribute, Expr, Generics, Ident, Member, Token, Type, Visibility};
use syn::{braced, parenthesized};

use crate::REFLECT_ATTRIBUTE_NAME;
use crate::derive_data::{Category, FieldData, StructureData, member_name};
use crate::impls::{impl_default, impl_structure};

/// Fields declared together, sharing type, initializer and attributes.
struct FieldGroup {
    category: Option<Category>,
    attrs: Vec<Attribute>,
    vis: Visibility,
    names: Vec<Ident>,
    ty: Type,
    init: Option<Expr>,
}

impl Parse for FieldGroup {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let category = if input.peek(Paren) {
            let inner;
            parenthesized!(inner in input);
            let ident: Ident = inner.parse()?;
            Some(Category::from_ident(&ident)?)
        } else {
            None
        };

        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;

        let mut names = vec![input.parse::<Ident>()?];
        while input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            names.push(input.parse()?);
        }

        input.parse::<Token![:]>()?;
        let ty: Type = input.parse()?;

        let init = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            Some(input.parse()?)
        } else {
            None
        };

        Ok(Self {
            category,
            attrs,
            vis,
            names,
            ty,
            init,
        })
    }
}

/// The whole `structure!` input.
pub(crate) struct Declaration {
    attrs: Vec<Attribute>,
    vis: Visibility,
    ident: Ident,
    generics: Generics,
    groups: Vec<FieldGroup>,
}

impl Parse for Declaration {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![struct]>()?;
        let ident: Ident = input.parse()?;
        let mut generics: Generics = input.parse()?;
        generics.where_clause = input.parse()?;

        let content;
        let _: Brace = braced!(content in input);
        let mut groups = Vec::new();
        while !content.is_empty() {
            groups.push(content.parse::<FieldGroup>()?);
            if content.is_empty() {
                break;
            }
            content.parse::<Token![,]>()?;
        }

        Ok(Self {
            attrs,
            vis,
            ident,
            generics,
            groups,
        })
    }
}

fn is_reflect_attr(attr: &Attribute) -> bool {
    attr.path().is_ident(REFLECT_ATTRIBUTE_NAME)
}

impl Declaration {
    /// The struct definition, its `Default` impl and the reflection impls.
    pub(crate) fn expand(self, tc_reflect: &syn::Path) -> syn::Result<TokenStream> {
        let default = Category::from_attrs(&self.attrs, Category::Mandatory)?;

        let mut fields = Vec::new();
        let mut inits = Vec::new();
        let mut definitions = Vec::new();
        for group in &self.groups {
            let category = match group.category {
                Some(category) => category,
                None => Category::from_attrs(&group.attrs, default)?,
            };
            let attrs = group.attrs.iter().filter(|attr| !is_reflect_attr(attr));
            let attrs: Vec<_> = attrs.collect();
            let vis = &group.vis;
            let ty = &group.ty;

            for name in &group.names {
                let member = Member::Named(name.clone());
                fields.push(FieldData {
                    name: member_name(&member),
                    member,
                    ty: ty.clone(),
                    category,
                });
                inits.push(group.init.clone());
                definitions.push(quote! {
                    #(#attrs)*
                    #vis #name: #ty
                });
            }
        }

        let data = StructureData {
            ident: self.ident,
            generics: self.generics,
            fields,
        };

        let attrs = self.attrs.iter().filter(|attr| !is_reflect_attr(attr));
        let vis = &self.vis;
        let ident = &data.ident;
        let generics = &data.generics;
        let where_clause = &data.generics.where_clause;

        let default_impl = impl_default(&data, &inits);
        let structure_impl = impl_structure(&data, tc_reflect);

        Ok(quote! {
            #(#attrs)*
            #vis struct #ident #generics #where_clause {
                #(#definitions,)*
            }

            #default_impl

            #structure_impl
        })
    }
}
