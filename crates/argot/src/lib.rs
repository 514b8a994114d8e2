// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # argot
//!
//! One crate, all features. Re-exports:
//! - [`Command`](macro@Command) derive macro from `argot-derive-impl`
//! - All types from `argot-core` ([`Descriptor`], [`Marshaller`],
//!   [`CommandName`], [`ArgName`], [`Value`], ...)
//!
//! # Quick Start
//!
//! ```rust
//! use argot::{Command, marshal};
//!
//! #[derive(Command)]
//! pub struct Ls {
//!     #[argot("all|a")]
//!     pub all: bool,
//!     #[argot("block-size,long,required")]
//!     pub block_size: u32,
//!     #[argot(",positional")]
//!     pub paths: Vec<String>
//! }
//!
//! let ls = Ls {
//!     all:        true,
//!     block_size: 0,
//!     paths:      vec!["/tmp".into()]
//! };
//! assert_eq!(marshal(&ls).unwrap(), "ls --all --block-size 0 /tmp");
//! ```

pub use argot_core::*;
pub use argot_derive_impl::Command;
