// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for descriptor marshalling.
//!
//! Every failure aborts the whole emission: the first error raised anywhere in
//! the descriptor tree is returned unchanged to the caller and no partial
//! token sequence is produced.
//!
//! # Error Kinds
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`Error::MalformedTag`] | A tag names a value option without `=value` |
//! | [`Error::UnsupportedValue`] | A value cannot be rendered where a scalar is needed |
//! | [`Error::EmptyInput`] | There is nothing to build a command from |
//! | [`Error::NonStructInput`] | Dynamic input is not a record or token list |

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while turning a descriptor into tokens or a process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A field tag references a value option but gives it no value.
    #[error("field `{field}`: tag option `{key}` requires a value")]
    MalformedTag {
        /// Name of the field carrying the tag.
        field: String,
        /// The offending tag option.
        key:   String
    },

    /// A value of this kind cannot be rendered as an argument here.
    #[error("field `{field}`: {kind} value cannot be rendered as an argument")]
    UnsupportedValue {
        /// Name of the field holding the value.
        field: String,
        /// Kind of the value, e.g. `record` or `map`.
        kind:  &'static str
    },

    /// No usable command input was supplied.
    #[error("cannot build a command from empty input")]
    EmptyInput,

    /// Dynamic input did not have a supported shape.
    #[error("expected a command descriptor, string, or list of strings, got {found}")]
    NonStructInput {
        /// Kind of the value that was supplied.
        found: &'static str
    }
}

impl Error {
    /// Name of the field the error was raised for, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MalformedTag { field, .. } | Self::UnsupportedValue { field, .. } => Some(field),
            Self::EmptyInput | Self::NonStructInput { .. } => None
        }
    }

    /// Check if this error comes from a malformed field tag.
    #[must_use]
    pub const fn is_malformed_tag(&self) -> bool {
        matches!(self, Self::MalformedTag { .. })
    }

    pub(crate) fn unsupported(field: &str, kind: &'static str) -> Self {
        Self::UnsupportedValue {
            field: field.to_owned(),
            kind
        }
    }
}
