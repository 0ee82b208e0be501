//! # typeidl Derive
//!
//! Procedural macro generating reflection metadata for structs.
//!
//! `#[derive(Describe)]` implements `typeidl::core::Describe`, listing the
//! struct's fields in declaration order together with the shapes of their
//! types.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Error, Fields, LitStr, Path, parse_macro_input};

/// Derives the Describe trait for a struct with named fields.
///
/// # Attributes
/// * `#[idl(name = "...")]` - type name in the schema (defaults to the struct name)
/// * `#[idl(namespace = "...")]` - namespace (defaults to the declaring module)
/// * `#[idl(crate_path = "...")]` - path of the crate exporting `core`
///   (defaults to `::typeidl`)
/// * `#[idl(rename = "...")]` on a field - field name in the schema
///
/// # Example
/// ```ignore
/// #[derive(Describe)]
/// #[idl(namespace = "geom")]
/// struct Point {
///     #[idl(rename = "X")]
///     x: i64,
///     #[idl(rename = "Y")]
///     y: i64,
/// }
/// ```
#[proc_macro_derive(Describe, attributes(idl))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

#[derive(Default)]
struct ContainerAttrs {
    name: Option<LitStr>,
    namespace: Option<LitStr>,
    crate_path: Option<Path>,
}

impl ContainerAttrs {
    fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("idl")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    out.name = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("namespace") {
                    out.namespace = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("crate_path") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.crate_path = Some(lit.parse()?);
                } else {
                    return Err(meta.error("unsupported idl attribute"));
                }
                Ok(())
            })?;
        }
        Ok(out)
    }
}

fn field_rename(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut rename: Option<LitStr> = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("idl")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                rename = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported idl field attribute"))
            }
        })?;
    }
    Ok(rename)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Describe cannot be derived for generic types",
        ));
    }

    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(data) => {
            return Err(Error::new_spanned(
                data.enum_token,
                "Describe can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(Error::new_spanned(
                data.union_token,
                "Describe can only be derived for structs",
            ));
        }
    };

    let attrs = ContainerAttrs::parse(&input.attrs)?;
    let krate = attrs
        .crate_path
        .map_or_else(|| quote!(::typeidl), |path| quote!(#path));

    let mut fields = Vec::new();
    match &data.fields {
        Fields::Named(named) => {
            for field in &named.named {
                let name = match field_rename(&field.attrs)? {
                    Some(lit) => lit.value(),
                    None => field
                        .ident
                        .as_ref()
                        .map(|ident| ident.unraw().to_string())
                        .unwrap_or_default(),
                };
                let ty = &field.ty;
                fields.push(quote! {
                    #krate::core::FieldShape::new(&[#name], <#ty as #krate::core::Describe>::shape)
                });
            }
        }
        Fields::Unit => {}
        Fields::Unnamed(unnamed) => {
            return Err(Error::new_spanned(
                unnamed,
                "Describe requires named fields",
            ));
        }
    }

    let ident = &input.ident;
    let type_name = attrs
        .name
        .map_or_else(|| ident.unraw().to_string(), |lit| lit.value());
    let module = match attrs.namespace {
        Some(lit) => quote!(#lit),
        None => quote!(::core::module_path!()),
    };

    Ok(quote! {
        impl #krate::core::Describe for #ident {
            fn shape() -> #krate::core::Shape {
                const FIELDS: &[#krate::core::FieldShape] = &[#(#fields),*];
                #krate::core::Shape::structure(#type_name, #module, FIELDS)
            }
        }
    })
}
