// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust
//! use argot_core::prelude::*;
//! ```

pub use crate::{
    ArgName, CommandExt, CommandName, Descriptor, Error, Field, MarshalOptions, Marshaller,
    ToValue, Value, command, marshal, must_command, must_parse, parse, parse_value
};
