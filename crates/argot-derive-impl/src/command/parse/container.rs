// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Container-level attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `name` | No | formatted type name | Command word of a top-level descriptor |

use darling::FromDeriveInput;
use syn::{Generics, Ident};

/// Container attributes parsed from `#[argot(...)]`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Command)]
/// #[argot(name = "git-lfs")]
/// pub struct Lfs { /* ... */ }
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(argot), supports(struct_named))]
pub struct CommandAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Explicit command word.
    #[darling(default)]
    pub name: Option<String>
}
