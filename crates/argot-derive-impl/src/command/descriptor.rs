// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Descriptor` implementation generation.
//!
//! The generated `fields` method lists every emitted field in declaration
//! order. Tags are embedded as string literals after they were validated by
//! the parser, so the runtime only ever sees well-formed tags from derived
//! code.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::CommandDef;

/// Generate `impl Descriptor` for the descriptor.
pub fn generate(command: &CommandDef) -> TokenStream {
    let ident = &command.ident;
    let generics = command.bounded_generics();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let type_name = command.type_name();

    let command_name = command.name.as_ref().map(|name| {
        quote! {
            fn command_name(&self) -> ::std::option::Option<&'static str> {
                ::std::option::Option::Some(#name)
            }
        }
    });

    let fields = command.emitted_fields().map(|field| {
        let ident = &field.ident;
        let name = field.name();
        let tag = &field.tag;
        quote! { ::argot::Field::new(#name, #tag, &self.#ident) }
    });

    quote! {
        impl #impl_generics ::argot::Descriptor for #ident #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            #command_name

            fn fields(&self) -> ::std::vec::Vec<::argot::Field<'_>> {
                ::std::vec![#(#fields),*]
            }
        }
    }
}
