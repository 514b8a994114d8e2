// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! command.rs (orchestrator)
//! │
//! ├── parse/         → Attribute parsing (CommandDef, FieldDef)
//! │
//! ├── descriptor.rs  → impl Descriptor (type name, command name, schema)
//! └── value.rs       → impl ToValue (nested record classification)
//! ```
//!
//! # Generated Code
//!
//! For a descriptor like:
//!
//! ```rust,ignore
//! #[derive(Command)]
//! #[argot(name = "ls")]
//! pub struct List {
//!     #[argot("all|a")]
//!     pub all: bool,
//! }
//! ```
//!
//! The macro generates:
//!
//! ```rust,ignore
//! impl ::argot::Descriptor for List {
//!     fn type_name(&self) -> &'static str { "List" }
//!     fn command_name(&self) -> Option<&'static str> { Some("ls") }
//!     fn fields(&self) -> Vec<::argot::Field<'_>> {
//!         vec![::argot::Field::new("all", "all|a", &self.all)]
//!     }
//! }
//!
//! impl ::argot::ToValue for List {
//!     fn to_value(&self) -> ::argot::Value<'_> {
//!         ::argot::Value::Record(self)
//!     }
//! }
//! ```

mod descriptor;
pub mod parse;
mod value;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::CommandDef;

/// Main entry point for the Command derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match CommandDef::from_derive_input(&input) {
        Ok(command) => generate(&command).into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(command: &CommandDef) -> TokenStream2 {
    let descriptor = descriptor::generate(command);
    let value = value::generate(command);

    quote! {
        #descriptor
        #value
    }
}
