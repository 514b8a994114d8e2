// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Command derive macro.
//!
//! Container attributes like `#[argot(name = "ls")]` are parsed with darling.
//! Field attributes (`#[argot("tag")]`, `#[argot(skip)]`) take a bare string
//! literal or marker and are parsed by hand.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── container.rs - Container-level parsing (CommandAttrs)
//! └── field.rs     - Field-level parsing and tag validation (FieldDef)
//! ```
//!
//! # Data Structures
//!
//! ```text
//! CommandDef
//! ├── ident: Ident          (struct name, e.g., "Ls")
//! ├── generics: Generics    (carried into the generated impls)
//! ├── name: Option<String>  (explicit command word)
//! └── fields: Vec<FieldDef>
//!     └── FieldDef
//!         ├── ident: Ident     (field name)
//!         ├── ty: Type         (field type)
//!         ├── tag: String      (validated tag)
//!         ├── exported: bool   (has a `pub` visibility)
//!         └── skip: bool       (`#[argot(skip)]` or tag `-`)
//! ```

mod container;
mod field;

pub use container::CommandAttrs;
use darling::FromDeriveInput;
pub use field::FieldDef;
use syn::{DeriveInput, Generics, Ident, ext::IdentExt, parse_quote};

/// Complete parsed descriptor definition.
#[derive(Debug)]
pub struct CommandDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Explicit command word from `#[argot(name = "...")]`.
    pub name: Option<String>,

    /// All named fields in declaration order.
    pub fields: Vec<FieldDef>
}

impl CommandDef {
    /// Parse a descriptor definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Applied to an enum, union, tuple struct or unit struct
    /// - Unknown or malformed container attributes
    /// - An empty `name`
    /// - Malformed field attributes or tags
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = CommandAttrs::from_derive_input(input)?;

        let fields = match &input.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(named),
                ..
            }) => named
                .named
                .iter()
                .map(FieldDef::from_field)
                .collect::<darling::Result<Vec<_>>>()?,
            _ => {
                return Err(darling::Error::custom(
                    "Command can only be derived for structs with named fields"
                )
                .with_span(&input.ident));
            }
        };

        if attrs.name.as_deref() == Some("") {
            return Err(
                darling::Error::custom("command name must not be empty").with_span(&input.ident)
            );
        }

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            name: attrs.name,
            fields
        })
    }

    /// Type name without a raw identifier prefix.
    #[must_use]
    pub fn type_name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Fields that take part in emission.
    pub fn emitted_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|field| field.is_emitted())
    }

    /// Struct generics with a `ToValue` bound on every emitted field type.
    ///
    /// Non-generic structs are returned unchanged.
    #[must_use]
    pub fn bounded_generics(&self) -> Generics {
        let mut generics = self.generics.clone();
        if generics.params.is_empty() {
            return generics;
        }

        let where_clause = generics.make_where_clause();
        for field in self.emitted_fields() {
            let ty = &field.ty;
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::argot::ToValue));
        }
        generics
    }
}
