// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field walking and value classification.
//!
//! The walker turns a descriptor into a sequence of [`WalkedField`]s: skipped
//! fields are dropped, tags are parsed, and every value is split into the
//! elements it is emitted as (a list field contributes one element per item).
//! [`classify`] then picks the emission [`Rule`] for each element.

use std::borrow::Cow;

use crate::{
    descriptor::Descriptor,
    error::{Error, Result},
    tag::{FieldTag, TagSpec},
    value::Value
};

/// Emission rule for one value element, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Rename the command and reset scope defaults.
    CommandName,
    /// Inject a bare option flag.
    ArgName,
    /// Explode a mapping into key/value options.
    Map,
    /// Recurse into a nested descriptor.
    Record,
    /// Suffix the previous token with the value.
    Suffix,
    /// Emit the value without an option name.
    Positional,
    /// Emit an option with its value, or a boolean flag.
    Scalar
}

/// A field ready for emission.
#[derive(Debug)]
pub struct WalkedField<'a> {
    /// Field identifier.
    pub name: &'static str,

    /// Parsed tag, not yet resolved against scope defaults.
    pub spec: TagSpec,

    /// Value elements in emission order.
    pub elements: Vec<Value<'a>>
}

/// Walk the emitted fields of a descriptor.
///
/// # Errors
///
/// Returns [`Error::MalformedTag`] for the first field whose tag does not
/// parse.
pub fn walk(record: &dyn Descriptor) -> Result<Vec<WalkedField<'_>>> {
    record
        .fields()
        .into_iter()
        .filter(|field| !field.is_skipped())
        .map(|field| {
            TagSpec::parse(field.tag)
                .map(|spec| WalkedField {
                    name: field.name,
                    spec,
                    elements: elements(field.value.to_value())
                })
                .map_err(|err| err.for_field(field.name))
        })
        .collect()
}

/// Split a field value into the elements emitted one by one.
#[must_use]
pub fn elements(value: Value<'_>) -> Vec<Value<'_>> {
    match value {
        Value::List(items) => items,
        other => vec![other]
    }
}

/// Pick the rule a value element is emitted with.
#[must_use]
pub fn classify(value: &Value<'_>, tag: &FieldTag) -> Rule {
    match value {
        Value::CommandName(_) => Rule::CommandName,
        Value::ArgName => Rule::ArgName,
        Value::Map(_) => Rule::Map,
        Value::Record(_) => Rule::Record,
        _ if tag.suffix_previous => Rule::Suffix,
        _ if tag.positional => Rule::Positional,
        _ => Rule::Scalar
    }
}

/// Render one element as a single token.
///
/// # Errors
///
/// Returns [`Error::UnsupportedValue`] for values without a textual form.
pub fn text<'a>(value: &Value<'a>, field: &str) -> Result<Cow<'a, str>> {
    value
        .as_text()
        .ok_or_else(|| Error::unsupported(field, value.kind()))
}

/// Render one element as tokens, flattening a nested list.
///
/// Nil items contribute nothing.
///
/// # Errors
///
/// Returns [`Error::UnsupportedValue`] for records, maps, and sentinels.
pub fn texts(value: &Value<'_>, field: &str) -> Result<Vec<String>> {
    match value {
        Value::Nil => Ok(Vec::new()),
        Value::List(items) => items
            .iter()
            .filter(|item| !matches!(item, Value::Nil))
            .map(|item| text(item, field).map(Cow::into_owned))
            .collect(),
        single => Ok(vec![text(single, field)?.into_owned()])
    }
}
