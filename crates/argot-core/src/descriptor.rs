// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command descriptor schema.
//!
//! A descriptor is a record type describing one command invocation. Its
//! schema is the ordered list of [`Field`]s returned by
//! [`Descriptor::fields`]: name, tag, export flag, and a borrowed value.
//!
//! `#[derive(Command)]` generates the schema at compile time. Implementing
//! the trait by hand is the explicit registration API:
//!
//! ```rust
//! use argot_core::{Descriptor, Field, parse};
//!
//! struct Ls {
//!     all:   bool,
//!     paths: Vec<String>
//! }
//!
//! impl Descriptor for Ls {
//!     fn type_name(&self) -> &'static str {
//!         "Ls"
//!     }
//!
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::new("all", "all|a", &self.all),
//!             Field::new("paths", ",positional", &self.paths),
//!         ]
//!     }
//! }
//!
//! let ls = Ls { all: true, paths: vec!["/tmp".into()] };
//! assert_eq!(parse(&ls).unwrap(), ["ls", "--all", "/tmp"]);
//! ```

use crate::{
    tag::SKIP,
    value::{ToValue, Value}
};

/// A record type that can be marshalled into command-line tokens.
pub trait Descriptor {
    /// Name of the Rust type.
    ///
    /// Formatted as a command word, it seeds the token sequence of a
    /// top-level descriptor (`Ls` becomes `ls`).
    fn type_name(&self) -> &'static str;

    /// Explicit command word overriding [`Descriptor::type_name`].
    fn command_name(&self) -> Option<&'static str> {
        None
    }

    /// Fields in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// One field of a descriptor schema.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    /// Field identifier.
    pub name: &'static str,

    /// Raw tag annotation.
    pub tag: &'static str,

    /// Whether the field takes part in emission.
    pub exported: bool,

    /// Borrowed field value.
    pub value: &'a dyn ToValue
}

impl<'a> Field<'a> {
    /// Create an exported field.
    pub fn new(name: &'static str, tag: &'static str, value: &'a dyn ToValue) -> Self {
        Self {
            name,
            tag,
            exported: true,
            value
        }
    }

    /// Mark the field as unexported.
    #[must_use]
    pub fn unexported(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Whether the walker leaves this field out entirely.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        !self.exported || self.tag == SKIP
    }
}

impl std::fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("exported", &self.exported)
            .finish_non_exhaustive()
    }
}

impl<'a> std::fmt::Debug for dyn Descriptor + 'a {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Descriptor").field(&self.type_name()).finish()
    }
}

/// Sentinel naming the command being built.
///
/// A field holding this value replaces every token accumulated so far in its
/// scope with the command word, and its tag's delimiters and joiners become
/// the defaults for the fields after it. An empty literal falls back to the
/// tag label, then the primary option name, then the formatted field name.
///
/// ```rust
/// use argot_core::CommandName;
///
/// assert!(CommandName::default().is_empty());
/// assert_eq!(CommandName::new("ffmpeg").as_str(), "ffmpeg");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CommandName(pub String);

impl CommandName {
    /// Create a sentinel with a literal command word.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The literal override.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether no literal override was given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for CommandName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl ToValue for CommandName {
    fn to_value(&self) -> Value<'_> {
        Value::CommandName(&self.0)
    }
}

/// Sentinel injecting a bare option flag into its scope.
///
/// Renders as `--name` (or `-name` with `short`) using the tag label, the
/// primary option name, or the formatted field name, and carries no value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ArgName;

impl ToValue for ArgName {
    fn to_value(&self) -> Value<'_> {
        Value::ArgName
    }
}
