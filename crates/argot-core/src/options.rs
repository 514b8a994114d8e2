// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Marshalling configuration.
//!
//! [`MarshalOptions`] carries the defaults every emission scope starts from:
//!
//! | Option | Default | Used for |
//! |--------|---------|----------|
//! | `delimiter` | `" "` | Joining a scope's tokens, suffix fallback |
//! | `word_separator` | `"-"` | Formatting identifiers as command words |
//! | `key_joiner` | `"."` | Joining nested map key segments |
//! | `joiner` | `" "` | Joining an option name with its value |
//!
//! # Example
//!
//! ```rust
//! use argot_core::MarshalOptions;
//!
//! let options = MarshalOptions::new().with_joiner("=").with_word_separator("_");
//! assert_eq!(options.joiner, "=");
//! assert_eq!(options.format_word("BlockSize"), "block_size");
//! ```

use convert_case::{Case, Casing};

use crate::tag::TagDefaults;

/// Default separator between tokens of one scope.
pub const DEFAULT_DELIMITER: &str = " ";

/// Default separator between words of a formatted identifier.
pub const DEFAULT_WORD_SEPARATOR: &str = "-";

/// Default joiner between nested map key segments.
pub const DEFAULT_KEY_JOINER: &str = ".";

/// Default joiner between an option name and its value.
pub const DEFAULT_JOINER: &str = DEFAULT_DELIMITER;

/// Defaults applied to every descriptor marshalled with a
/// [`Marshaller`](crate::Marshaller).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MarshalOptions {
    /// Separator used to join the tokens of a scope.
    pub delimiter: String,

    /// Separator placed between words when formatting identifiers.
    pub word_separator: String,

    /// Joiner placed between nested map key segments.
    pub key_joiner: String,

    /// Joiner placed between an option name and its value.
    pub joiner: String
}

impl Default for MarshalOptions {
    fn default() -> Self {
        Self {
            delimiter:      DEFAULT_DELIMITER.to_string(),
            word_separator: DEFAULT_WORD_SEPARATOR.to_string(),
            key_joiner:     DEFAULT_KEY_JOINER.to_string(),
            joiner:         DEFAULT_JOINER.to_string()
        }
    }
}

impl MarshalOptions {
    /// Create options with the crate defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the command word separator.
    #[must_use]
    pub fn with_word_separator(mut self, separator: impl Into<String>) -> Self {
        self.word_separator = separator.into();
        self
    }

    /// Set the map key joiner.
    #[must_use]
    pub fn with_key_joiner(mut self, joiner: impl Into<String>) -> Self {
        self.key_joiner = joiner.into();
        self
    }

    /// Set the option/value joiner.
    #[must_use]
    pub fn with_joiner(mut self, joiner: impl Into<String>) -> Self {
        self.joiner = joiner.into();
        self
    }

    /// Format an identifier as a command word.
    ///
    /// The identifier is converted to snake case and underscores are replaced
    /// by [`word_separator`](Self::word_separator): `BlockSize` and
    /// `block_size` both become `block-size` with the default separator.
    #[must_use]
    pub fn format_word(&self, ident: &str) -> String {
        let ident = ident.strip_prefix("r#").unwrap_or(ident);
        ident
            .to_case(Case::Snake)
            .replace('_', &self.word_separator)
    }

    /// Tag defaults a fresh top-level scope starts with.
    pub(crate) fn tag_defaults(&self) -> TagDefaults {
        TagDefaults {
            delimiters: vec![self.delimiter.clone()],
            joiner:     self.joiner.clone(),
            key_joiner: self.key_joiner.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let options = MarshalOptions::new();
        assert_eq!(options.delimiter, " ");
        assert_eq!(options.word_separator, "-");
        assert_eq!(options.key_joiner, ".");
        assert_eq!(options.joiner, " ");
    }

    #[test]
    fn builder_overrides() {
        let options = MarshalOptions::new()
            .with_delimiter(",")
            .with_key_joiner("/")
            .with_joiner("=");
        assert_eq!(options.delimiter, ",");
        assert_eq!(options.key_joiner, "/");
        assert_eq!(options.joiner, "=");
    }

    #[test]
    fn format_word_from_type_and_field_names() {
        let options = MarshalOptions::new();
        assert_eq!(options.format_word("Ls"), "ls");
        assert_eq!(options.format_word("GitLfs"), "git-lfs");
        assert_eq!(options.format_word("block_size"), "block-size");
        assert_eq!(options.format_word("r#type"), "type");
    }

    #[test]
    fn tag_defaults_seed_from_options() {
        let defaults = MarshalOptions::new().with_delimiter(":").tag_defaults();
        assert_eq!(defaults.delimiters, vec![":".to_string()]);
        assert_eq!(defaults.joiner, " ");
        assert_eq!(defaults.key_joiner, ".");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_config() {
        let options: MarshalOptions = serde_json::from_str(r#"{"joiner": "="}"#).unwrap();
        assert_eq!(options.joiner, "=");
        assert_eq!(options.delimiter, " ");
    }
}
