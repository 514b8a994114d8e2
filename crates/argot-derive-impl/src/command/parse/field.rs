// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! ```rust,ignore
//! #[argot("human-readable|h")]  // tag
//! pub human_readable: bool,
//!
//! #[argot(skip)]                // excluded, same as #[argot("-")]
//! pub cache: Cache,
//!
//! pub verbose: bool,            // empty tag
//! ```
//!
//! Tags are run through [`TagSpec::parse`] here, so malformed tags fail the
//! build with the span of the offending literal.

use argot_core::{SKIP, TagSpec};
use syn::{
    Attribute, Field, Ident, LitStr, Type, Visibility, ext::IdentExt, parse::ParseStream
};

mod kw {
    syn::custom_keyword!(skip);
}

/// Parsed `#[argot(...)]` field attribute.
#[derive(Debug)]
enum FieldAttr {
    Tag(LitStr),
    Skip
}

/// Parse a single `#[argot(...)]` field attribute.
fn parse_field_attr(attr: &Attribute) -> syn::Result<FieldAttr> {
    attr.parse_args_with(|input: ParseStream<'_>| {
        let lookahead = input.lookahead1();
        if lookahead.peek(LitStr) {
            input.parse().map(FieldAttr::Tag)
        } else if lookahead.peek(kw::skip) {
            input.parse::<kw::skip>().map(|_| FieldAttr::Skip)
        } else {
            Err(lookahead.error())
        }
    })
}

/// Validate a tag literal with the runtime tag parser.
fn validate_tag(lit: &LitStr) -> darling::Result<String> {
    let tag = lit.value();
    TagSpec::parse(&tag)
        .map(|_| tag)
        .map_err(|err| darling::Error::custom(format!("invalid argot tag: {err}")).with_span(lit))
}

/// Field definition with its parsed attribute.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Field type.
    pub ty: Type,

    /// Validated tag, empty when the field has no `#[argot]` attribute.
    pub tag: String,

    /// Whether the field has a `pub` visibility.
    pub exported: bool,

    /// Whether the field is excluded from emission.
    pub skip: bool
}

impl FieldDef {
    /// Parse a field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// Returns error if the field has no identifier, the attribute is neither
    /// a string literal nor `skip`, or the tag is malformed.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Command fields must be named").with_span(field)
        })?;

        let mut tag = String::new();
        let mut skip = false;

        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("argot")) {
            match parse_field_attr(attr)? {
                FieldAttr::Tag(lit) => tag = validate_tag(&lit)?,
                FieldAttr::Skip => skip = true
            }
        }

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            skip: skip || tag == SKIP,
            tag,
            exported: !matches!(field.vis, Visibility::Inherited)
        })
    }

    /// Field name without a raw identifier prefix.
    #[must_use]
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Check if the field is part of the generated schema.
    #[must_use]
    pub fn is_emitted(&self) -> bool {
        self.exported && !self.skip
    }
}
