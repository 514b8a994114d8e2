// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `ToValue` implementation generation.
//!
//! A derived descriptor used as a field of another descriptor is classified
//! as [`Value::Record`](argot_core::Value::Record), which makes the emitter
//! recurse into it.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::CommandDef;

/// Generate `impl ToValue` for the descriptor.
pub fn generate(command: &CommandDef) -> TokenStream {
    let ident = &command.ident;
    let generics = command.bounded_generics();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::argot::ToValue for #ident #ty_generics #where_clause {
            fn to_value(&self) -> ::argot::Value<'_> {
                ::argot::Value::Record(self)
            }
        }
    }
}
