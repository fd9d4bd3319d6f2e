//! Utility functions for procedural macros
//!
//! This module contains the helpers used by the `Record` derive: parsing the
//! `#[glue(...)]` field annotations, visibility checks and name handling.

use syn::ext::IdentExt;
use syn::{Attribute, LitStr, Visibility};

/// Options collected from the `#[glue(...)]` attributes of one field
#[derive(Debug, Default)]
pub struct FieldOptions {
    /// Raw annotation text, carried verbatim into the schema
    pub annotation: Option<LitStr>,
    /// Whether the field is an embedded record
    pub embed: bool,
}

/// Parse every `#[glue(...)]` attribute on a field
///
/// Each attribute holds exactly one item: a string literal (alias or the
/// `"-"` marker) or the bare word `embed`. The alias text is not validated
/// here; the engine validates it when the record is first used.
pub fn parse_field_options(attrs: &[Attribute]) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("glue")) {
        attr.parse_args_with(|input: syn::parse::ParseStream<'_>| {
            if input.peek(LitStr) {
                let lit: LitStr = input.parse()?;
                if options.annotation.is_some() {
                    return Err(syn::Error::new(
                        lit.span(),
                        "a field takes at most one glue alias",
                    ));
                }
                options.annotation = Some(lit);
            } else {
                let word: syn::Ident = input.parse()?;
                if word != "embed" {
                    return Err(syn::Error::new(
                        word.span(),
                        format!("unknown glue option `{word}`, expected a string alias or `embed`"),
                    ));
                }
                options.embed = true;
            }
            if !input.is_empty() {
                return Err(input.error("expected a single glue option per attribute"));
            }
            Ok(())
        })?;
    }

    Ok(options)
}

/// Check if a field is externally visible
///
/// Only a bare `pub` counts; `pub(crate)` and friends are restricted.
pub fn is_public(vis: &Visibility) -> bool {
    matches!(vis, Visibility::Public(_))
}

/// The declared name of a field with any raw-identifier prefix removed
pub fn field_name(ident: &syn::Ident) -> String {
    ident.unraw().to_string()
}
