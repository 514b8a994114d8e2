// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Process construction from marshalled tokens.
//!
//! [`Invocation`] is everything [`command`](crate::command) accepts. Each input
//! shape resolves to a token list; the first token becomes the program and
//! the rest its arguments.
//!
//! | Input | Tokens |
//! |-------|--------|
//! | `&T where T: Descriptor` | [`parse`](crate::parse) output |
//! | `&str`, `String` | the string as the only token |
//! | `Vec<String>`, `&[&str]`, `&[String]` | the tokens as given |
//! | [`Value`] | record → parsed, scalar → one token, list → one token per item |

use std::{borrow::Cow, process::Command};

use tracing::debug;

use crate::{
    descriptor::Descriptor,
    error::{Error, Result},
    marshal::Marshaller,
    value::Value
};

/// Input accepted by [`Marshaller::command`].
#[derive(Debug)]
pub enum Invocation<'a> {
    /// A descriptor, marshalled first.
    Descriptor(&'a dyn Descriptor),

    /// A single program name.
    Line(Cow<'a, str>),

    /// A program followed by its arguments.
    Tokens(Vec<String>),

    /// A dynamically typed value.
    Value(Value<'a>)
}

impl Invocation<'_> {
    /// Resolve the input into tokens.
    pub(crate) fn into_tokens(self, marshaller: &Marshaller) -> Result<Vec<String>> {
        match self {
            Self::Descriptor(record) => marshaller.parse(record),
            Self::Line(line) => Ok(vec![line.into_owned()]),
            Self::Tokens(tokens) => Ok(tokens),
            Self::Value(value) => value_tokens(value, marshaller)
        }
    }
}

fn value_tokens(value: Value<'_>, marshaller: &Marshaller) -> Result<Vec<String>> {
    match value {
        Value::Record(record) => marshaller.parse(record),
        Value::List(items) => items
            .iter()
            .map(|item| {
                item.as_text()
                    .map(Cow::into_owned)
                    .ok_or_else(|| Error::NonStructInput { found: item.kind() })
            })
            .collect(),
        other => other
            .as_text()
            .map(|text| vec![text.into_owned()])
            .ok_or_else(|| Error::NonStructInput { found: other.kind() })
    }
}

/// Build a process command from resolved tokens.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] when there is no token or the program name
/// is empty.
pub(crate) fn build(tokens: Vec<String>) -> Result<Command> {
    let mut tokens = tokens.into_iter();
    let program = tokens
        .next()
        .filter(|program| !program.is_empty())
        .ok_or(Error::EmptyInput)?;
    let args: Vec<String> = tokens.collect();

    debug!(%program, ?args, "built process command");

    let mut command = Command::new(program);
    command.args(args);
    Ok(command)
}

impl<'a, T: Descriptor> From<&'a T> for Invocation<'a> {
    fn from(record: &'a T) -> Self {
        Self::Descriptor(record)
    }
}

impl<'a> From<&'a dyn Descriptor> for Invocation<'a> {
    fn from(record: &'a dyn Descriptor) -> Self {
        Self::Descriptor(record)
    }
}

impl<'a> From<&'a str> for Invocation<'a> {
    fn from(line: &'a str) -> Self {
        Self::Line(Cow::Borrowed(line))
    }
}

impl From<String> for Invocation<'_> {
    fn from(line: String) -> Self {
        Self::Line(Cow::Owned(line))
    }
}

impl From<Vec<String>> for Invocation<'_> {
    fn from(tokens: Vec<String>) -> Self {
        Self::Tokens(tokens)
    }
}

impl From<&[&str]> for Invocation<'_> {
    fn from(tokens: &[&str]) -> Self {
        Self::Tokens(tokens.iter().map(|token| (*token).to_owned()).collect())
    }
}

impl From<&[String]> for Invocation<'_> {
    fn from(tokens: &[String]) -> Self {
        Self::Tokens(tokens.to_vec())
    }
}

impl<'a> From<Value<'a>> for Invocation<'a> {
    fn from(value: Value<'a>) -> Self {
        Self::Value(value)
    }
}
