// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field tag parsing.
//!
//! A tag is a small annotation string attached to each descriptor field:
//!
//! ```text
//! name[|alias...][,key[=value]]*
//! ```
//!
//! The first comma-separated segment lists alternative option names (the
//! first one is primary). Every later segment toggles an option:
//!
//! | Key | Value | Effect |
//! |-----|-------|--------|
//! | `required` |  | Emit even when the value is zero |
//! | `positional` |  | Emit the value without an option name |
//! | `long` |  | Render as `--name` |
//! | `short` |  | Render as `-name`, wins over `long` |
//! | `suffixprev` |  | Append the value to the previous token |
//! | `skipname` |  | Emit the value without its option name |
//! | `label` | string | Explicit name override |
//! | `delimiters` | chars | One delimiter per character |
//! | `joiner` | string | Joiner between option name and value |
//! | `keyjoiner` | string | Joiner between nested map key segments |
//! | `exclusive` | `a\|b` | Labels this option conflicts with (not enforced) |
//!
//! Values may be wrapped in one pair of brackets (`delimiters=[:]`), which is
//! stripped before use.
//!
//! Parsing happens in two steps: [`TagSpec::parse`] reads the annotation on
//! its own, and [`TagSpec::resolve`] fills every unset delimiter and joiner
//! from the [`TagDefaults`] of the scope the field lives in.

use thiserror::Error;

use crate::error::Error;

/// Tag marking a field as excluded from emission.
pub const SKIP: &str = "-";

/// A value option was given without `=value`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("tag option `{key}` requires a value")]
pub struct TagError {
    /// The offending tag option.
    pub key: String
}

impl TagError {
    /// Attach the name of the field the tag belongs to.
    #[must_use]
    pub fn for_field(self, field: &str) -> Error {
        Error::MalformedTag {
            field: field.to_owned(),
            key:   self.key
        }
    }
}

/// Scope-level defaults a tag inherits unless it overrides them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDefaults {
    /// Delimiters used when the tag declares none.
    pub delimiters: Vec<String>,

    /// Option/value joiner.
    pub joiner: String,

    /// Map key segment joiner.
    pub key_joiner: String
}

/// A parsed tag before scope defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSpec {
    /// Alternative option names, primary first.
    pub options: Vec<String>,

    /// Explicit name override.
    pub label: Option<String>,

    /// Emit values without the option name.
    pub skip_name: bool,

    /// Emit even zero values.
    pub required: bool,

    /// Emit values without an option name, unconditionally.
    pub positional: bool,

    /// Render the option in long form.
    pub long: bool,

    /// Render the option in short form.
    pub force_short: bool,

    /// Append the value to the previous token.
    pub suffix_previous: bool,

    /// Delimiter override.
    pub delimiters: Option<Vec<String>>,

    /// Labels of conflicting options. Informational only.
    pub mutually_exclusive_with: Vec<String>,

    /// Map key joiner override.
    pub key_joiner: Option<String>,

    /// Option/value joiner override.
    pub joiner: Option<String>
}

impl TagSpec {
    /// Parse a raw tag annotation.
    ///
    /// An empty annotation yields an anonymous tag with no options.
    ///
    /// # Errors
    ///
    /// Returns [`TagError`] when a value option (`label`, `delimiters`,
    /// `joiner`, `keyjoiner`, or any unrecognized key) has no `=value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use argot_core::TagSpec;
    ///
    /// let spec = TagSpec::parse("human-readable|h").unwrap();
    /// assert_eq!(spec.options, ["human-readable", "h"]);
    /// assert!(spec.long);
    ///
    /// assert!(TagSpec::parse("foo,delimiters").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, TagError> {
        if raw.is_empty() {
            return Ok(Self::default());
        }

        let mut segments = raw.split(',');
        let options = segments
            .next()
            .unwrap_or_default()
            .split('|')
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect();

        let mut spec = Self {
            options,
            ..Self::default()
        };

        for segment in segments {
            let (key, value) = match segment.split_once('=') {
                Some((key, value)) => (key, Some(value)),
                None => (segment, None)
            };

            match key {
                "required" => spec.required = true,
                "positional" => spec.positional = true,
                "long" => spec.long = true,
                "short" => spec.force_short = true,
                "suffixprev" => spec.suffix_previous = true,
                "skipname" => spec.skip_name = true,
                _ => {
                    let value = value.ok_or_else(|| TagError {
                        key: key.to_owned()
                    })?;
                    spec.apply_value(key, unbracket(value));
                }
            }
        }

        if spec.force_short {
            spec.long = false;
        } else if !spec.long && spec.options.len() > 1 {
            spec.long = true;
        }

        Ok(spec)
    }

    fn apply_value(&mut self, key: &str, value: &str) {
        match key {
            "label" => self.label = Some(value.to_owned()).filter(|label| !label.is_empty()),
            "delimiters" => self.delimiters = Some(value.chars().map(String::from).collect()),
            "joiner" => self.joiner = Some(value.to_owned()),
            "keyjoiner" => self.key_joiner = Some(value.to_owned()),
            "exclusive" => {
                self.mutually_exclusive_with = value
                    .split('|')
                    .filter(|label| !label.is_empty())
                    .map(str::to_owned)
                    .collect();
            }
            _ => {}
        }
    }

    /// Fill unset delimiters and joiners from the scope defaults.
    #[must_use]
    pub fn resolve(&self, defaults: &TagDefaults) -> FieldTag {
        FieldTag {
            options:                 self.options.clone(),
            label:                   self.label.clone(),
            skip_name:               self.skip_name,
            required:                self.required,
            positional:              self.positional,
            long:                    self.long,
            force_short:             self.force_short,
            suffix_previous:         self.suffix_previous,
            delimiters:              self
                .delimiters
                .clone()
                .unwrap_or_else(|| defaults.delimiters.clone()),
            mutually_exclusive_with: self.mutually_exclusive_with.clone(),
            key_joiner:              self
                .key_joiner
                .clone()
                .unwrap_or_else(|| defaults.key_joiner.clone()),
            joiner:                  self
                .joiner
                .clone()
                .unwrap_or_else(|| defaults.joiner.clone())
        }
    }
}

/// Strip one enclosing pair of brackets.
fn unbracket(value: &str) -> &str {
    value
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(value)
}

/// A tag resolved against its scope defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTag {
    /// Alternative option names, primary first.
    pub options: Vec<String>,

    /// Explicit name override.
    pub label: Option<String>,

    /// Emit values without the option name.
    pub skip_name: bool,

    /// Emit even zero values.
    pub required: bool,

    /// Emit values without an option name, unconditionally.
    pub positional: bool,

    /// Render the option in long form.
    pub long: bool,

    /// Render the option in short form.
    pub force_short: bool,

    /// Append the value to the previous token.
    pub suffix_previous: bool,

    /// Delimiters, index-selected by [`FieldTag::delimiter_at`].
    pub delimiters: Vec<String>,

    /// Labels of conflicting options. Informational only.
    pub mutually_exclusive_with: Vec<String>,

    /// Map key segment joiner.
    pub key_joiner: String,

    /// Option/value joiner.
    pub joiner: String
}

impl FieldTag {
    /// The primary option name, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.options.first().map(String::as_str)
    }

    /// Delimiter for position `index`.
    ///
    /// Positions past the end repeat the last delimiter; a tag without
    /// delimiters yields `fallback`.
    #[must_use]
    pub fn delimiter_at<'a>(&'a self, index: usize, fallback: &'a str) -> &'a str {
        self.delimiters
            .get(index)
            .or_else(|| self.delimiters.last())
            .map_or(fallback, String::as_str)
    }

    /// The defaults this tag hands to the fields processed after it.
    #[must_use]
    pub fn defaults(&self) -> TagDefaults {
        TagDefaults {
            delimiters: self.delimiters.clone(),
            joiner:     self.joiner.clone(),
            key_joiner: self.key_joiner.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> TagDefaults {
        TagDefaults {
            delimiters: vec![" ".to_string()],
            joiner:     " ".to_string(),
            key_joiner: ".".to_string()
        }
    }

    #[test]
    fn empty_tag_is_anonymous() {
        let spec = TagSpec::parse("").unwrap();
        assert!(spec.options.is_empty());
        let tag = spec.resolve(&defaults());
        assert_eq!(tag.delimiters, vec![" "]);
        assert_eq!(tag.joiner, " ");
        assert_eq!(tag.key_joiner, ".");
        assert_eq!(tag.primary(), None);
    }

    #[test]
    fn option_alternatives_drop_empty_entries() {
        let spec = TagSpec::parse("help||h|?").unwrap();
        assert_eq!(spec.options, ["help", "h", "?"]);
    }

    #[test]
    fn leading_comma_has_no_options() {
        let spec = TagSpec::parse(",positional").unwrap();
        assert!(spec.options.is_empty());
        assert!(spec.positional);
    }

    #[test]
    fn boolean_toggles() {
        let spec = TagSpec::parse("i,required,suffixprev,skipname").unwrap();
        assert!(spec.required);
        assert!(spec.suffix_previous);
        assert!(spec.skip_name);
        assert!(!spec.positional);
    }

    #[test]
    fn multiple_aliases_infer_long() {
        assert!(TagSpec::parse("all|a").unwrap().long);
        assert!(!TagSpec::parse("l").unwrap().long);
    }

    #[test]
    fn short_wins_over_long() {
        let spec = TagSpec::parse("loglevel|v,short").unwrap();
        assert!(spec.force_short);
        assert!(!spec.long);

        let spec = TagSpec::parse("x,short,long").unwrap();
        assert!(spec.force_short);
        assert!(!spec.long);
    }

    #[test]
    fn delimiters_split_per_character() {
        // A comma always starts a new segment, so `]` becomes a bare key.
        assert!(TagSpec::parse("map,delimiters=[:=,]").is_err());

        let spec = TagSpec::parse("map,delimiters=[:=]").unwrap();
        assert_eq!(spec.delimiters, Some(vec![":".to_string(), "=".to_string()]));
    }

    #[test]
    fn value_options_strip_brackets() {
        let spec = TagSpec::parse("x,joiner=[=],keyjoiner=/,label=[Name]").unwrap();
        assert_eq!(spec.joiner.as_deref(), Some("="));
        assert_eq!(spec.key_joiner.as_deref(), Some("/"));
        assert_eq!(spec.label.as_deref(), Some("Name"));
    }

    #[test]
    fn bare_equals_is_a_valid_joiner() {
        let spec = TagSpec::parse("format,long,joiner==").unwrap();
        assert_eq!(spec.joiner.as_deref(), Some("="));
    }

    #[test]
    fn exclusive_labels_are_recorded() {
        let spec = TagSpec::parse("y,exclusive=[n|never]").unwrap();
        assert_eq!(spec.mutually_exclusive_with, ["n", "never"]);
    }

    #[test]
    fn value_option_without_value_fails() {
        let err = TagSpec::parse("foo,delimiters").unwrap_err();
        assert_eq!(err.key, "delimiters");

        let err = TagSpec::parse("foo,label").unwrap_err();
        assert_eq!(err.key, "label");

        let err = err.for_field("foo_field");
        assert!(err.is_malformed_tag());
        assert_eq!(err.field(), Some("foo_field"));
    }

    #[test]
    fn unknown_keys_with_values_are_ignored() {
        let spec = TagSpec::parse("x,color=blue").unwrap();
        assert_eq!(spec.options, ["x"]);
        assert!(TagSpec::parse("x,color").is_err());
    }

    #[test]
    fn resolve_prefers_overrides() {
        let tag = TagSpec::parse("x,delimiters=[:],joiner=[=]")
            .unwrap()
            .resolve(&defaults());
        assert_eq!(tag.delimiters, vec![":"]);
        assert_eq!(tag.joiner, "=");
        assert_eq!(tag.key_joiner, ".");
    }

    #[test]
    fn empty_delimiters_override_clears_inherited() {
        let tag = TagSpec::parse("x,delimiters=[]")
            .unwrap()
            .resolve(&defaults());
        assert!(tag.delimiters.is_empty());
        assert_eq!(tag.delimiter_at(0, " "), " ");
    }

    #[test]
    fn delimiter_at_repeats_last() {
        let tag = TagSpec::parse("x,delimiters=[:=]")
            .unwrap()
            .resolve(&defaults());
        assert_eq!(tag.delimiter_at(0, " "), ":");
        assert_eq!(tag.delimiter_at(1, " "), "=");
        assert_eq!(tag.delimiter_at(5, " "), "=");
    }

    #[test]
    fn defaults_carry_resolved_values() {
        let tag = TagSpec::parse("ffmpeg,delimiters=[*],keyjoiner=[/]")
            .unwrap()
            .resolve(&defaults());
        let next = tag.defaults();
        assert_eq!(next.delimiters, vec!["*"]);
        assert_eq!(next.key_joiner, "/");
        assert_eq!(next.joiner, " ");
    }
}
