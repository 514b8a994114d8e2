// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core runtime for argot.
//!
//! This crate turns typed command descriptors into argument vectors. It is
//! what `#[derive(Command)]` generated code calls into, and it can be used on
//! its own by implementing [`Descriptor`] by hand.
//!
//! # Overview
//!
//! - [`Descriptor`] and [`Field`]: the per-type schema of a command
//! - [`TagSpec`]: the field annotation grammar
//! - [`Value`] and [`ToValue`]: run-time classification of field values
//! - [`CommandName`] and [`ArgName`]: sentinel field types
//! - [`Marshaller`] and [`MarshalOptions`]: configured marshalling
//! - [`marshal`], [`parse`], [`parse_value`], [`command`]: default entry points
//! - [`prelude`]: convenient re-exports
//!
//! # Usage
//!
//! ```rust
//! use argot_core::prelude::*;
//!
//! struct Ls {
//!     all:   bool,
//!     long:  bool,
//!     paths: Vec<&'static str>
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
//!             Field::new("long", "l", &self.long),
//!             Field::new("paths", ",positional", &self.paths),
//!         ]
//!     }
//! }
//!
//! let ls = Ls { all: true, long: true, paths: vec!["/tmp"] };
//! assert_eq!(marshal(&ls).unwrap(), "ls --all -l /tmp");
//! ```
//!
//! # Logging
//!
//! Emission is instrumented with [`tracing`]: one `debug` event per marshalled
//! descriptor and per built process, one `trace` event per emitted field
//! value. The crate installs no subscriber.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod descriptor;
mod emit;
mod error;
mod marshal;
mod options;
pub mod prelude;
mod process;
mod tag;
mod value;
mod walker;

pub use descriptor::{ArgName, CommandName, Descriptor, Field};
pub use emit::{Emission, Emitter, Scope};
pub use error::{Error, Result};
pub use marshal::{
    CommandExt, Marshaller, command, marshal, must_command, must_parse, parse, parse_value
};
pub use options::{
    DEFAULT_DELIMITER, DEFAULT_JOINER, DEFAULT_KEY_JOINER, DEFAULT_WORD_SEPARATOR, MarshalOptions
};
pub use process::Invocation;
pub use tag::{FieldTag, SKIP, TagDefaults, TagError, TagSpec};
pub use value::{ToValue, Value};
pub use walker::{Rule, WalkedField, classify, walk};
