// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Procedural macro implementation for argot.
//!
//! This crate is an implementation detail. Depend on `argot`, which re-exports
//! the [`Command`](macro@Command) derive together with the runtime it targets.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod command;

use proc_macro::TokenStream;

/// Derive macro turning a struct into a command descriptor.
///
/// # Overview
///
/// The derive builds the schema the marshaller walks at run time: one entry
/// per emitted field with its name, tag and a borrowed value, in declaration
/// order. It also makes the struct usable as a nested field of another
/// descriptor.
///
/// # Generated Code
///
/// For a struct `Ls` the macro generates:
///
/// - **`impl argot::Descriptor for Ls`**: type name, optional command name and
///   field schema
/// - **`impl argot::ToValue for Ls`**: classifies the struct as a nested
///   record
///
/// # Container Attributes
///
/// | Attribute | Default | Description |
/// |-----------|---------|-------------|
/// | `#[argot(name = "...")]` | formatted type name | Command word a top-level descriptor starts with |
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[argot("tag")]` | Field tag, `name[\|alias...][,key[=value]]*` |
/// | `#[argot(skip)]` | Leave the field out, same as the tag `"-"` |
///
/// A field without `#[argot]` has an empty tag. Only fields with a `pub`
/// visibility are emitted; private fields are left out of the schema and
/// need not implement `ToValue`.
///
/// Every tag is checked with the runtime parser while the macro expands, so a
/// value option without a value is a compile error:
///
/// ```rust,ignore
/// #[derive(Command)]
/// pub struct Broken {
///     #[argot("level,delimiters")] // error: tag option `delimiters` requires a value
///     pub level: u8,
/// }
/// ```
///
/// # Examples
///
/// ## Basic Usage
///
/// ```rust,ignore
/// use argot::{Command, parse};
///
/// #[derive(Command)]
/// pub struct Ls {
///     #[argot("all|a")]
///     pub all: bool,
///     #[argot("l")]
///     pub long_format: bool,
///     #[argot(",positional")]
///     pub paths: Vec<String>,
/// }
///
/// let ls = Ls { all: true, long_format: true, paths: vec!["/tmp".into()] };
/// assert_eq!(parse(&ls)?, ["ls", "--all", "-l", "/tmp"]);
/// ```
///
/// ## Nested Descriptors
///
/// ```rust,ignore
/// use argot::{ArgName, Command, CommandName};
///
/// #[derive(Command)]
/// pub struct Codec {
///     #[argot("codec,short")]
///     pub arg: ArgName,
///     #[argot(",suffixprev,delimiters=[:]")]
///     pub stream: String,
///     #[argot(",skipname")]
///     pub name: String,
/// }
///
/// #[derive(Command)]
/// pub struct Ffmpeg {
///     #[argot("ffmpeg")]
///     pub command: CommandName,
///     pub video: Codec,
///     #[argot(",positional,required")]
///     pub output: String,
/// }
/// ```
///
/// # Errors
///
/// The derive rejects enums, unions and tuple structs, unknown container
/// options, and malformed field tags.
#[proc_macro_derive(Command, attributes(argot))]
pub fn derive_command(input: TokenStream) -> TokenStream {
    command::derive(input)
}
