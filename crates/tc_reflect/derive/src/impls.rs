use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{LitStr, Path, WhereClause, parse_quote};

use crate::derive_data::StructureData;

/// Adds the bounds generic structures need: every field reflected, and
/// `Self` usable as `dyn Any`.
fn reflect_where_clause(data: &StructureData, tc_reflect: &Path) -> Option<WhereClause> {
    let mut where_clause = data.generics.where_clause.clone();
    if data.generics.type_params().next().is_none() {
        return where_clause;
    }

    let predicates = &mut where_clause
        .get_or_insert_with(|| parse_quote!(where))
        .predicates;
    predicates.push(parse_quote!(Self: ::core::marker::Send + ::core::marker::Sync + 'static));
    for field in &data.fields {
        let ty = &field.ty;
        predicates.push(parse_quote!(#ty: #tc_reflect::Reflect));
    }
    where_clause
}

/// `Reflect`, `Structure` and one `FieldAt<I>` per field.
pub(crate) fn impl_structure(data: &StructureData, tc_reflect: &Path) -> TokenStream {
    let ident = &data.ident;
    let type_name = LitStr::new(&ident.to_string(), ident.span());
    let (impl_generics, ty_generics, _) = data.generics.split_for_impl();
    let where_clause = reflect_where_clause(data, tc_reflect);

    let field_infos = data.fields.iter().map(|field| {
        let name = &field.name;
        let category = field.category.variant();
        quote! {
            #tc_reflect::FieldInfo::new(#name, #tc_reflect::FieldCategory::#category)
        }
    });

    let indices: Vec<_> = (0..data.fields.len()).map(Literal::usize_unsuffixed).collect();
    let members: Vec<_> = data.fields.iter().map(|field| &field.member).collect();
    let types = data.fields.iter().map(|field| &field.ty);

    quote! {
        const _: () = {
            static STRUCTURE_INFO: #tc_reflect::StructureInfo = #tc_reflect::StructureInfo::new(&[
                #(#field_infos,)*
            ]);

            impl #impl_generics #tc_reflect::Categorized for #ident #ty_generics #where_clause {
                type Kind = #tc_reflect::kind::Structure;
            }

            impl #impl_generics #tc_reflect::Reflect for #ident #ty_generics #where_clause {
                #[inline]
                fn type_name(&self) -> &'static str {
                    #type_name
                }

                #[inline]
                fn reflect_ref(&self) -> #tc_reflect::ReflectRef<'_> {
                    #tc_reflect::ReflectRef::Structure(self)
                }

                #[inline]
                fn reflect_mut(&mut self) -> #tc_reflect::ReflectMut<'_> {
                    #tc_reflect::ReflectMut::Structure(self)
                }
            }

            impl #impl_generics #tc_reflect::Structure for #ident #ty_generics #where_clause {
                #[inline]
                fn structure_info(&self) -> &'static #tc_reflect::StructureInfo {
                    &STRUCTURE_INFO
                }

                fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #tc_reflect::Reflect> {
                    match index {
                        #(#indices => ::core::option::Option::Some(&self.#members as &dyn #tc_reflect::Reflect),)*
                        _ => ::core::option::Option::None,
                    }
                }

                fn field_at_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #tc_reflect::Reflect> {
                    match index {
                        #(#indices => ::core::option::Option::Some(&mut self.#members as &mut dyn #tc_reflect::Reflect),)*
                        _ => ::core::option::Option::None,
                    }
                }
            }

            #(
                impl #impl_generics #tc_reflect::FieldAt<#indices> for #ident #ty_generics #where_clause {
                    type Field = #types;

                    #[inline]
                    fn field_ref(&self) -> &Self::Field {
                        &self.#members
                    }

                    #[inline]
                    fn field_mut(&mut self) -> &mut Self::Field {
                        &mut self.#members
                    }
                }
            )*
        };
    }
}

/// `Default` for `structure!`, fields without an initializer use `Default::default()`.
pub(crate) fn impl_default(data: &StructureData, inits: &[Option<syn::Expr>]) -> TokenStream {
    let ident = &data.ident;
    let (impl_generics, ty_generics, _) = data.generics.split_for_impl();

    let mut where_clause = data.generics.where_clause.clone();
    if data.generics.type_params().next().is_some() {
        let predicates = &mut where_clause
            .get_or_insert_with(|| parse_quote!(where))
            .predicates;
        for (field, init) in data.fields.iter().zip(inits) {
            if init.is_none() {
                let ty = &field.ty;
                predicates.push(parse_quote!(#ty: ::core::default::Default));
            }
        }
    }

    let values = data.fields.iter().zip(inits).map(|(field, init)| {
        let member = &field.member;
        match init {
            Some(expr) => quote!(#member: #expr),
            None => quote!(#member: ::core::default::Default::default()),
        }
    });

    quote! {
        impl #impl_generics ::core::default::Default for #ident #ty_generics #where_clause {
            fn default() -> Self {
                Self {
                    #(#values,)*
                }
            }
        }
    }
}
