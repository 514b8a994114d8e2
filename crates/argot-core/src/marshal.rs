// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Public marshalling entry points.
//!
//! [`Marshaller`] owns a [`MarshalOptions`] and exposes every operation as a
//! method. The free functions use a default-configured marshaller, and
//! [`CommandExt`] offers the same operations on any descriptor.
//!
//! | Operation | Output |
//! |-----------|--------|
//! | [`marshal`] | Tokens joined by the top-level separator |
//! | [`parse`] | Raw token list |
//! | [`parse_value`] | Raw token list from a dynamic value |
//! | [`command`] | [`std::process::Command`] built from the tokens |
//!
//! The `must_*` variants panic with the error message instead of returning
//! it.

use std::process::Command;

use tracing::debug;

use crate::{
    descriptor::Descriptor,
    emit::{Emission, Emitter, Scope},
    error::{Error, Result},
    options::MarshalOptions,
    process::{self, Invocation},
    value::{ToValue, Value}
};

/// Marshals descriptors with a fixed set of options.
///
/// # Example
///
/// ```rust
/// use argot_core::{Descriptor, Field, MarshalOptions, Marshaller};
///
/// struct Fetch {
///     depth: u32
/// }
///
/// impl Descriptor for Fetch {
///     fn type_name(&self) -> &'static str {
///         "Fetch"
///     }
///
///     fn command_name(&self) -> Option<&'static str> {
///         Some("git-fetch")
///     }
///
///     fn fields(&self) -> Vec<Field<'_>> {
///         vec![Field::new("depth", "depth,long", &self.depth)]
///     }
/// }
///
/// let marshaller = Marshaller::new(MarshalOptions::new().with_joiner("="));
/// let line = marshaller.marshal(&Fetch { depth: 1 }).unwrap();
/// assert_eq!(line, "git-fetch --depth=1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Marshaller {
    options: MarshalOptions
}

impl Marshaller {
    /// Create a marshaller with the given options.
    #[must_use]
    pub const fn new(options: MarshalOptions) -> Self {
        Self { options }
    }

    /// Options this marshaller runs with.
    #[must_use]
    pub const fn options(&self) -> &MarshalOptions {
        &self.options
    }

    /// Emit a top-level descriptor.
    ///
    /// # Errors
    ///
    /// Returns the first tag or rendering error found in the descriptor tree.
    pub fn emit(&self, record: &dyn Descriptor) -> Result<Emission> {
        let emission = Emitter::new(&self.options).emit(record, Scope::root(&self.options), true)?;
        debug!(
            command = record.type_name(),
            tokens = emission.tokens.len(),
            "emitted command descriptor"
        );
        Ok(emission)
    }

    /// Marshal a descriptor into one command line.
    ///
    /// # Errors
    ///
    /// See [`Marshaller::emit`].
    pub fn marshal(&self, record: &dyn Descriptor) -> Result<String> {
        self.emit(record).map(|emission| emission.join())
    }

    /// Marshal a descriptor into its token list.
    ///
    /// # Errors
    ///
    /// See [`Marshaller::emit`].
    pub fn parse(&self, record: &dyn Descriptor) -> Result<Vec<String>> {
        self.emit(record).map(|emission| emission.tokens)
    }

    /// Marshal a dynamically typed value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonStructInput`] unless the value is a descriptor,
    /// otherwise see [`Marshaller::emit`].
    pub fn parse_value(&self, value: &dyn ToValue) -> Result<Vec<String>> {
        match value.to_value() {
            Value::Record(record) => self.parse(record),
            other => Err(Error::NonStructInput {
                found: other.kind()
            })
        }
    }

    /// Build a process command from a descriptor, string, or token list.
    ///
    /// The first token is the program and the rest are its arguments. The
    /// process is only configured, never spawned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] when no program name results,
    /// [`Error::NonStructInput`] for unsupported dynamic values, and any
    /// marshalling error of a descriptor input.
    pub fn command<'a>(&self, input: impl Into<Invocation<'a>>) -> Result<Command> {
        let tokens = input.into().into_tokens(self)?;
        process::build(tokens)
    }
}

/// Marshal a descriptor into one command line with default options.
///
/// # Errors
///
/// See [`Marshaller::emit`].
pub fn marshal(record: &dyn Descriptor) -> Result<String> {
    Marshaller::default().marshal(record)
}

/// Marshal a descriptor into its token list with default options.
///
/// # Errors
///
/// See [`Marshaller::emit`].
pub fn parse(record: &dyn Descriptor) -> Result<Vec<String>> {
    Marshaller::default().parse(record)
}

/// Marshal a descriptor into its token list, panicking on failure.
///
/// # Panics
///
/// Panics with the error message if marshalling fails.
#[must_use]
pub fn must_parse(record: &dyn Descriptor) -> Vec<String> {
    parse(record).unwrap_or_else(|err| panic!("argot: {err}"))
}

/// Marshal a dynamically typed value with default options.
///
/// # Errors
///
/// See [`Marshaller::parse_value`].
pub fn parse_value(value: &dyn ToValue) -> Result<Vec<String>> {
    Marshaller::default().parse_value(value)
}

/// Build a process command with default options.
///
/// # Errors
///
/// See [`Marshaller::command`].
pub fn command<'a>(input: impl Into<Invocation<'a>>) -> Result<Command> {
    Marshaller::default().command(input)
}

/// Build a process command, panicking on failure.
///
/// # Panics
///
/// Panics with the error message if the command cannot be built.
#[must_use]
pub fn must_command<'a>(input: impl Into<Invocation<'a>>) -> Command {
    command(input).unwrap_or_else(|err| panic!("argot: {err}"))
}

/// Marshalling operations available on every descriptor.
///
/// ```rust
/// use argot_core::{CommandExt, Descriptor, Field};
///
/// struct Echo {
///     words: Vec<&'static str>
/// }
///
/// impl Descriptor for Echo {
///     fn type_name(&self) -> &'static str {
///         "Echo"
///     }
///
///     fn fields(&self) -> Vec<Field<'_>> {
///         vec![Field::new("words", ",positional", &self.words)]
///     }
/// }
///
/// let echo = Echo { words: vec!["hello", "world"] };
/// assert_eq!(echo.to_command_line().unwrap(), "echo hello world");
/// assert_eq!(echo.to_command().unwrap().get_program(), "echo");
/// ```
pub trait CommandExt: Descriptor {
    /// See [`marshal`].
    ///
    /// # Errors
    ///
    /// See [`Marshaller::emit`].
    fn to_command_line(&self) -> Result<String>;

    /// See [`parse`].
    ///
    /// # Errors
    ///
    /// See [`Marshaller::emit`].
    fn to_args(&self) -> Result<Vec<String>>;

    /// See [`command`].
    ///
    /// # Errors
    ///
    /// See [`Marshaller::command`].
    fn to_command(&self) -> Result<Command>;
}

impl<T: Descriptor> CommandExt for T {
    fn to_command_line(&self) -> Result<String> {
        marshal(self)
    }

    fn to_args(&self) -> Result<Vec<String>> {
        parse(self)
    }

    fn to_command(&self) -> Result<Command> {
        command(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{CommandName, Field};

    struct Grep {
        name:    CommandName,
        ignore:  bool,
        pattern: String,
        files:   Vec<&'static str>
    }

    impl Descriptor for Grep {
        fn type_name(&self) -> &'static str {
            "Grep"
        }

        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::new("name", "rg", &self.name),
                Field::new("ignore", "ignore-case|i", &self.ignore),
                Field::new("pattern", ",positional", &self.pattern),
                Field::new("files", ",positional", &self.files),
            ]
        }
    }

    impl ToValue for Grep {
        fn to_value(&self) -> Value<'_> {
            Value::Record(self)
        }
    }

    fn grep() -> Grep {
        Grep {
            name:    CommandName::default(),
            ignore:  true,
            pattern: "TODO".into(),
            files:   vec!["a.rs", "b.rs"]
        }
    }

    #[test]
    fn marshal_joins_with_top_level_separator() {
        assert_eq!(
            marshal(&grep()).unwrap(),
            "rg --ignore-case TODO a.rs b.rs"
        );
    }

    #[test]
    fn parse_returns_tokens() {
        assert_eq!(
            parse(&grep()).unwrap(),
            ["rg", "--ignore-case", "TODO", "a.rs", "b.rs"]
        );
        assert_eq!(must_parse(&grep()), parse(&grep()).unwrap());
    }

    #[test]
    fn options_change_word_formatting() {
        struct GitLfs;
        impl Descriptor for GitLfs {
            fn type_name(&self) -> &'static str {
                "GitLfs"
            }

            fn fields(&self) -> Vec<Field<'_>> {
                Vec::new()
            }
        }

        let marshaller = Marshaller::new(MarshalOptions::new().with_word_separator("_"));
        assert_eq!(marshaller.parse(&GitLfs).unwrap(), ["git_lfs"]);
        assert_eq!(marshaller.options().word_separator, "_");
    }

    #[test]
    fn parse_value_requires_a_record() {
        assert_eq!(parse_value(&grep()).unwrap(), parse(&grep()).unwrap());
        assert_eq!(
            parse_value(&"ls").unwrap_err(),
            Error::NonStructInput { found: "scalar" }
        );
        assert_eq!(
            parse_value(&vec![1, 2]).unwrap_err(),
            Error::NonStructInput { found: "list" }
        );
    }

    #[test]
    fn extension_trait_matches_free_functions() {
        let record = grep();
        assert_eq!(record.to_args().unwrap(), parse(&record).unwrap());
        assert_eq!(record.to_command_line().unwrap(), marshal(&record).unwrap());
    }

    #[test]
    #[should_panic(expected = "requires a value")]
    fn must_parse_panics_on_malformed_tag() {
        struct Broken {
            level: u8
        }
        impl Descriptor for Broken {
            fn type_name(&self) -> &'static str {
                "Broken"
            }

            fn fields(&self) -> Vec<Field<'_>> {
                vec![Field::new("level", "level,joiner", &self.level)]
            }
        }

        let _ = must_parse(&Broken { level: 1 });
    }
}
