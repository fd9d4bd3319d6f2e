//! Procedural macros for the glue crate
//!
//! This crate provides the `Record` derive, which generates the static field
//! descriptor table the glue engine reads in place of runtime reflection.

use proc_macro::TokenStream;

// Import modules
mod utils;
mod record_impl;


/// Derive macro for generating a glue record schema
///
/// Every named field is described in declaration order. Public fields take
/// part in copying; restricted fields are described but never written.
///
/// # Field annotations
///
/// * `#[glue("Alias")]` - match the counterpart field named `Alias` instead
///   of this field's own name
/// * `#[glue("-")]` - never drive a copy from or to this field
/// * `#[glue(embed)]` - the field's type is itself a record whose fields are
///   searched (breadth first) when resolving counterparts
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, Default, glue::Record)]
/// pub struct Account {
///     #[glue("owner_name")]
///     pub name: String,
///
///     #[glue("-")]
///     pub audit_token: u64,
///
///     #[glue(embed)]
///     pub address: Address,
/// }
/// ```
#[proc_macro_derive(Record, attributes(glue))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record_impl::process_derive_record(input)
}
