//! Record derive macro implementation
//!
//! This module contains the implementation of the `Record` derive macro,
//! which generates a static descriptor table with typed field accessors.

use darling::{ast, FromDeriveInput, FromField};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, DeriveInput};

use crate::utils;

/// Receiver for the struct that derives `Record`
#[derive(Debug, FromDeriveInput)]
#[darling(supports(struct_named))]
pub struct RecordReceiver {
    /// The struct identifier
    ident: syn::Ident,
    /// Generics, which records may not declare
    generics: syn::Generics,
    /// The struct data with parsed fields
    data: ast::Data<(), RecordFieldReceiver>,
}

/// Receiver for the fields in the struct
#[derive(Debug, FromField)]
#[darling(forward_attrs(glue))]
pub struct RecordFieldReceiver {
    /// The field identifier
    ident: Option<syn::Ident>,
    /// The field visibility
    vis: syn::Visibility,
    /// The field type
    ty: syn::Type,
    /// The raw `#[glue(...)]` attributes
    attrs: Vec<syn::Attribute>,
}

/// Process the `Record` derive macro
pub fn process_derive_record(input: TokenStream) -> TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    match expand_record(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.write_errors().into(),
    }
}

/// Expand a parsed struct into its schema, `Record` impl and catalog entry
pub fn expand_record(input: &DeriveInput) -> darling::Result<TokenStream2> {
    let receiver = RecordReceiver::from_derive_input(input)?;

    if !receiver.generics.params.is_empty() || receiver.generics.where_clause.is_some() {
        return Err(darling::Error::custom(
            "glue records cannot be generic; derive `Record` on a concrete struct",
        )
        .with_span(&receiver.generics));
    }

    // Extract the fields
    let ast::Data::Struct(fields) = &receiver.data else {
        unreachable!("Darling ensures this is a struct")
    };

    let struct_name = &receiver.ident;
    let mut errors = darling::Error::accumulator();
    let mut accessors = Vec::with_capacity(fields.len());
    let mut descriptors = Vec::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let Some(options) = errors.handle(
            utils::parse_field_options(&field.attrs).map_err(darling::Error::from),
        ) else {
            continue;
        };

        let get_fn = format_ident!("__glue_get_{}", index);
        let get_mut_fn = format_ident!("__glue_get_mut_{}", index);
        accessors.push(generate_accessors(struct_name, ident, &get_fn, &get_mut_fn));
        descriptors.push(generate_field_schema(
            field,
            ident,
            &options,
            &get_fn,
            &get_mut_fn,
        ));
    }

    errors.finish()?;

    let struct_name_str = struct_name.to_string();

    Ok(quote! {
        const _: () = {
            #(#accessors)*

            static SCHEMA: ::glue::schema::RecordSchema = ::glue::schema::RecordSchema {
                name: #struct_name_str,
                value_type: ::glue::schema::ValueType::of::<#struct_name>(),
                fields: &[#(#descriptors),*],
            };

            #[automatically_derived]
            impl ::glue::Record for #struct_name {
                fn schema() -> &'static ::glue::schema::RecordSchema {
                    &SCHEMA
                }

                fn record_schema(&self) -> &'static ::glue::schema::RecordSchema {
                    &SCHEMA
                }
            }

            ::glue::inventory::submit! {
                ::glue::schema::RecordEntry(<#struct_name as ::glue::Record>::schema)
            }
        };
    })
}

/// Generate the shared and mutable accessors for one field
fn generate_accessors(
    struct_name: &syn::Ident,
    field: &syn::Ident,
    get_fn: &syn::Ident,
    get_mut_fn: &syn::Ident,
) -> TokenStream2 {
    quote! {
        fn #get_fn(
            record: &dyn ::core::any::Any,
        ) -> ::core::option::Option<&dyn ::core::any::Any> {
            record
                .downcast_ref::<#struct_name>()
                .map(|record| &record.#field as &dyn ::core::any::Any)
        }

        fn #get_mut_fn(
            record: &mut dyn ::core::any::Any,
        ) -> ::core::option::Option<&mut dyn ::core::any::Any> {
            record
                .downcast_mut::<#struct_name>()
                .map(|record| &mut record.#field as &mut dyn ::core::any::Any)
        }
    }
}

/// Generate the `FieldSchema` literal for one field
fn generate_field_schema(
    field: &RecordFieldReceiver,
    ident: &syn::Ident,
    options: &utils::FieldOptions,
    get_fn: &syn::Ident,
    get_mut_fn: &syn::Ident,
) -> TokenStream2 {
    let name = utils::field_name(ident);
    let field_type = &field.ty;
    let public = utils::is_public(&field.vis);

    let annotation = match &options.annotation {
        Some(lit) => quote! { ::core::option::Option::Some(#lit) },
        None => quote! { ::core::option::Option::None },
    };

    let embedded = if options.embed {
        quote! { ::core::option::Option::Some(<#field_type as ::glue::Record>::schema) }
    } else {
        quote! { ::core::option::Option::None }
    };

    // Restricted fields are described for lookup but can never be assigned
    let ops = if public {
        quote! { ::core::option::Option::Some(::glue::schema::ValueOps::of::<#field_type>()) }
    } else {
        quote! { ::core::option::Option::None }
    };

    quote! {
        ::glue::schema::FieldSchema {
            name: #name,
            annotation: #annotation,
            public: #public,
            value_type: ::glue::schema::ValueType::of::<#field_type>(),
            embedded: #embedded,
            get: #get_fn,
            get_mut: #get_mut_fn,
            ops: #ops,
        }
    }
}
