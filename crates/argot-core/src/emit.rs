// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Recursive token emission.
//!
//! One call to [`Emitter::emit`] handles one scope: a descriptor instance with
//! its own token accumulator and [`Scope`]. Fields are processed in
//! declaration order; each value element is dispatched on its [`Rule`]:
//!
//! ```text
//! CommandName → replace scope tokens, adopt the tag's delimiters/joiners
//! ArgName     → push `--label` / `-label`
//! Map         → push `key.path<joiner>value` per leaf
//! Record      → emit child scope, splice tokens or one joined blob
//! Suffix      → append `<delimiter>value` to the last token
//! Positional  → push the value(s)
//! Scalar      → push `-name value`, `--name<joiner>value`, or a bare flag
//! ```
//!
//! The scope configuration is threaded through the field loop by value: the
//! only rule that changes it is `CommandName`, and only for the fields that
//! follow it.

use tracing::trace;

use crate::{
    descriptor::Descriptor,
    error::Result,
    options::MarshalOptions,
    tag::{FieldTag, TagDefaults},
    value::Value,
    walker::{self, Rule}
};

/// Configuration a scope runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    /// Separator joining this scope's tokens.
    pub separator: String,

    /// Defaults inherited by every tag in the scope.
    pub defaults: TagDefaults
}

impl Scope {
    /// Configuration of a top-level scope.
    #[must_use]
    pub fn root(options: &MarshalOptions) -> Self {
        Self {
            separator: options.delimiter.clone(),
            defaults:  options.tag_defaults()
        }
    }
}

/// Tokens of one scope and the separator that joins them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emission {
    /// Tokens in emission order.
    pub tokens: Vec<String>,

    /// Separator for [`Emission::join`].
    pub separator: String
}

impl Emission {
    /// Join the tokens with the scope separator.
    #[must_use]
    pub fn join(&self) -> String {
        self.tokens.join(&self.separator)
    }
}

/// Walks descriptors and emits their tokens.
#[derive(Debug, Clone, Copy)]
pub struct Emitter<'o> {
    options: &'o MarshalOptions
}

impl<'o> Emitter<'o> {
    /// Create an emitter using the given options as fallbacks.
    #[must_use]
    pub const fn new(options: &'o MarshalOptions) -> Self {
        Self { options }
    }

    /// Emit one scope.
    ///
    /// A top-level scope is seeded with the descriptor's command word. Nested
    /// scopes start empty.
    ///
    /// `scope` is the configuration the fields start with; every descriptor,
    /// nested or not, normally starts from [`Scope::root`].
    ///
    /// # Errors
    ///
    /// Propagates the first tag or rendering error found anywhere in the
    /// descriptor tree.
    pub fn emit(
        &self,
        record: &dyn Descriptor,
        mut scope: Scope,
        top_level: bool
    ) -> Result<Emission> {
        let mut tokens = Vec::new();

        if top_level {
            tokens.push(self.command_word(record));
        }

        for field in walker::walk(record)? {
            for value in field.elements {
                if matches!(value, Value::Nil) {
                    continue;
                }

                let tag = field.spec.resolve(&scope.defaults);
                let rule = walker::classify(&value, &tag);
                trace!(field = field.name, ?rule, "emitting field value");

                match (rule, value) {
                    (Rule::CommandName, Value::CommandName(literal)) => {
                        scope = self.name_command(&mut tokens, &tag, field.name, literal, scope);
                    }
                    (Rule::ArgName, _) => tokens.push(self.bare_flag(&tag, field.name)),
                    (Rule::Map, Value::Map(entries)) => {
                        let mut path = Vec::new();
                        self.expand_map(&mut tokens, &entries, &mut path, &tag, &scope, field.name)?;
                    }
                    (Rule::Record, Value::Record(child)) => {
                        self.descend(&mut tokens, child, &scope)?;
                    }
                    (Rule::Suffix, value) => self.suffix(&mut tokens, &value, &tag, field.name)?,
                    (Rule::Positional, value) => {
                        tokens.extend(walker::texts(&value, field.name)?);
                    }
                    (_, value) => self.scalar(&mut tokens, &value, &tag, field.name)?
                }
            }
        }

        Ok(Emission {
            tokens,
            separator: scope.separator
        })
    }

    fn command_word(&self, record: &dyn Descriptor) -> String {
        record
            .command_name()
            .map_or_else(|| self.options.format_word(record.type_name()), str::to_owned)
    }

    /// Label, else primary option, else the formatted field name.
    fn display_name(&self, tag: &FieldTag, field: &str) -> String {
        tag.label
            .as_deref()
            .or_else(|| tag.primary())
            .map_or_else(|| self.options.format_word(field), str::to_owned)
    }

    fn name_command(
        &self,
        tokens: &mut Vec<String>,
        tag: &FieldTag,
        field: &str,
        literal: &str,
        scope: Scope
    ) -> Scope {
        let separator = tag.delimiters.first().cloned().unwrap_or(scope.separator);
        let word = if literal.is_empty() {
            self.display_name(tag, field)
        } else {
            literal.to_owned()
        };

        tokens.clear();
        tokens.push(word);

        Scope {
            separator,
            defaults: tag.defaults()
        }
    }

    fn bare_flag(&self, tag: &FieldTag, field: &str) -> String {
        let prefix = if tag.force_short { "-" } else { "--" };
        format!("{prefix}{}", self.display_name(tag, field))
    }

    fn expand_map(
        &self,
        tokens: &mut Vec<String>,
        entries: &[(std::borrow::Cow<'_, str>, Value<'_>)],
        path: &mut Vec<String>,
        tag: &FieldTag,
        scope: &Scope,
        field: &str
    ) -> Result<()> {
        for (key, value) in entries {
            path.push(key.to_string());
            match value {
                Value::Map(children) => {
                    self.expand_map(tokens, children, path, tag, scope, field)?;
                }
                leaf => map_leaf(tokens, path, leaf, tag, scope, field)?
            }
            path.pop();
        }
        Ok(())
    }

    fn descend(
        &self,
        tokens: &mut Vec<String>,
        child: &dyn Descriptor,
        scope: &Scope
    ) -> Result<()> {
        let emission = self.emit(child, Scope::root(self.options), false)?;

        if emission.separator == scope.separator {
            tokens.extend(emission.tokens);
        } else if !emission.tokens.is_empty() {
            tokens.push(emission.join());
        }
        Ok(())
    }

    fn suffix(
        &self,
        tokens: &mut [String],
        value: &Value<'_>,
        tag: &FieldTag,
        field: &str
    ) -> Result<()> {
        if value.is_zero() && !tag.required {
            return Ok(());
        }
        let Some(last) = tokens.last_mut() else {
            return Ok(());
        };

        let text = walker::texts(value, field)?.concat();
        last.push_str(tag.delimiter_at(0, &self.options.delimiter));
        last.push_str(&text);
        Ok(())
    }

    fn scalar(
        &self,
        tokens: &mut Vec<String>,
        value: &Value<'_>,
        tag: &FieldTag,
        field: &str
    ) -> Result<()> {
        let name = tag
            .primary()
            .map_or_else(|| self.options.format_word(field), str::to_owned);

        match value {
            Value::Bool(true) => push_option(tokens, tag, &name, Vec::new()),
            Value::Bool(false) => {}
            value if value.is_zero() && !tag.required => {}
            value => {
                let values = walker::texts(value, field)?;
                push_option(tokens, tag, &name, values);
            }
        }
        Ok(())
    }
}

/// Emit one map leaf under the current key path.
fn map_leaf(
    tokens: &mut Vec<String>,
    path: &[String],
    leaf: &Value<'_>,
    tag: &FieldTag,
    scope: &Scope,
    field: &str
) -> Result<()> {
    let prefix = if tag.force_short {
        "-"
    } else if tag.long {
        "--"
    } else {
        ""
    };
    let key = format!("{prefix}{}", path.join(&tag.key_joiner));

    match leaf {
        Value::Nil => tokens.push(key),
        Value::List(items) => {
            for item in items {
                map_leaf(tokens, path, item, tag, scope, field)?;
            }
        }
        value => {
            let text = walker::text(value, field)?;
            push_joined(tokens, key, &text, &tag.joiner, &scope.separator);
        }
    }
    Ok(())
}

/// Push `name` and `value` as two tokens when the joiner is the scope
/// separator, or as one joined token otherwise.
fn push_joined(tokens: &mut Vec<String>, name: String, value: &str, joiner: &str, separator: &str) {
    if joiner == separator {
        tokens.push(name);
        tokens.push(value.to_owned());
    } else {
        tokens.push(format!("{name}{joiner}{value}"));
    }
}

/// Push an option with its values.
///
/// A long option is joined with its first value into one token using the
/// tag's joiner, whatever the scope separator is.
fn push_option(tokens: &mut Vec<String>, tag: &FieldTag, name: &str, values: Vec<String>) {
    if tag.skip_name {
        tokens.extend(values);
        return;
    }

    if tag.long && !tag.force_short {
        let flag = format!("--{name}");
        let mut values = values.into_iter();
        match values.next() {
            Some(first) => tokens.push(format!("{flag}{}{first}", tag.joiner)),
            None => tokens.push(flag)
        }
        tokens.extend(values);
    } else {
        tokens.push(format!("-{name}"));
        tokens.extend(values);
    }
}
