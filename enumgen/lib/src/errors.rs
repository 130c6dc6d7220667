//! Error types for the enum generator.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a schema, generating code, or
/// writing the result.
#[derive(Debug, Error)]
pub enum EnumGenError {
    /// The input schema file does not exist
    #[error("Cannot find input file '{path}'")]
    NotFound { path: PathBuf },

    /// The input schema file exists but could not be read
    #[error("Failed to read input file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The schema document is not well-formed YAML of the expected shape
    #[error("Failed to parse enum schema: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The schema parsed but violates one of the schema invariants
    #[error("Invalid enum schema: {0}")]
    Validation(#[from] ValidationError),

    /// Template substitution failed on an already-validated schema
    #[error("Code generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// Failed to write the output file
    #[error("Failed to write output file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A schema invariant that did not hold.
///
/// Each variant names the offending field or value so the message can be
/// acted on without looking at the generator source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required string field was empty.
    #[error("{field} must not be empty string")]
    EmptyField { field: &'static str },

    /// A field or entry name contained whitespace.
    #[error("{field} must not contain white space, got '{value}'")]
    Whitespace { field: &'static str, value: String },

    /// The namespace contained an uppercase character (or no letters at all).
    #[error("namespace must be all lower case, got '{value}'")]
    NamespaceNotLowercase { value: String },

    /// `enum_entries` was an empty list.
    #[error("enum_entries must not be empty")]
    EmptyEntries,

    /// An entry string split into more than two comma-separated parts.
    #[error("enum entry must be 'NAME' or 'NAME, VALUE', got '{entry}'")]
    MalformedEntry { entry: String },

    /// Some entries carry explicit values and some do not.
    #[error(
        "enum entries must either all have values or all omit them; '{offending}' does not match the style of '{first}'"
    )]
    MixedEntryStyle { first: String, offending: String },

    /// An entry name does not start with an uppercase letter.
    #[error("enum item must start with an upper case letter, got '{name}'")]
    NameNotUppercase { name: String },

    /// Two entries share a name.
    #[error("duplicate item '{name}' found in enum")]
    DuplicateName { name: String },

    /// An explicit value is not an integer literal.
    #[error("value '{value}' of enum item '{name}' is not an integer")]
    InvalidValue { name: String, value: String },

    /// An explicit value is an integer literal that does not fit in `i64`.
    #[error("value '{value}' of enum item '{name}' is out of range for a 64-bit integer")]
    ValueOutOfRange { name: String, value: String },

    /// Two entries share an explicit value.
    #[error("duplicate value {value} found in enum")]
    DuplicateValue { value: i64 },
}

/// Template substitution failure.
///
/// Validated schemas never trigger these with the built-in template; they
/// exist so a broken template fails loudly instead of emitting bad source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A `{{key}}` placeholder had no value.
    #[error("unresolved template placeholder '{{{{{key}}}}}'")]
    UnresolvedPlaceholder { key: String },

    /// A `{{` opened at `offset` was never closed.
    #[error("unterminated template placeholder at byte {offset}")]
    UnterminatedPlaceholder { offset: usize },
}
