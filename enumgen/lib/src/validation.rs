//! Schema invariant checks.
//!
//! Validation runs before any code is generated so an inconsistent schema
//! can never produce a header. Checks run in a fixed order and the first
//! violation wins:
//!
//! - **Scalar fields**: `namespace`, `enum_name` and `underlying_type` must be
//!   non-empty and free of whitespace; `namespace` must also be lower case.
//! - **Entries**: the list must be non-empty, share a single style (all
//!   named-only or all with values), have well-formed distinct names, and,
//!   when values are present, distinct integer values.
//!
//! ## Examples
//!
//! ```
//! use enumgen::validation::{validate_identifier, validate_namespace};
//!
//! assert!(validate_namespace("trading").is_ok());
//! assert!(validate_namespace("MyNamespace").is_err());
//! assert!(validate_identifier("enum_name", "Side").is_ok());
//! assert!(validate_identifier("enum_name", "Order Side").is_err());
//! ```

use std::collections::HashSet;
use std::num::IntErrorKind;

use tracing::debug;

use crate::errors::ValidationError;
use crate::schema::{EntryStyle, EnumEntry, RawEntry};

/// Checks that `value` is non-empty and contains no whitespace.
///
/// `field` is only used to label the error.
pub fn validate_identifier(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }

    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError::Whitespace {
            field,
            value: value.to_string(),
        });
    }

    Ok(())
}

/// Checks the namespace: a valid identifier made only of lower case
/// letters and uncased characters such as digits and `_`.
///
/// At least one lower case letter is required, so `"123"` is rejected.
pub fn validate_namespace(value: &str) -> Result<(), ValidationError> {
    validate_identifier("namespace", value)?;

    let has_lower = value.chars().any(char::is_lowercase);
    let has_upper = value.chars().any(char::is_uppercase);
    if !has_lower || has_upper {
        return Err(ValidationError::NamespaceNotLowercase {
            value: value.to_string(),
        });
    }

    Ok(())
}

/// Validates the raw entry list and converts it into typed entries.
///
/// Uniform style is established first, before anything looks at values,
/// so later code can branch on the returned [`EntryStyle`] instead of
/// inspecting individual entries.
///
/// ## Errors
///
/// - [`ValidationError::EmptyEntries`] if `raw` is empty
/// - [`ValidationError::MixedEntryStyle`] if named-only and valued entries are mixed
/// - [`ValidationError::EmptyField`] / [`ValidationError::Whitespace`] for malformed names
/// - [`ValidationError::NameNotUppercase`] if a name does not start upper case
/// - [`ValidationError::DuplicateName`] on the second occurrence of a name
/// - [`ValidationError::InvalidValue`] if a value token is not an integer
/// - [`ValidationError::ValueOutOfRange`] if a value token does not fit in `i64`
/// - [`ValidationError::DuplicateValue`] on the second occurrence of a value
pub fn validate_entries(
    raw: &[RawEntry],
) -> Result<(EntryStyle, Vec<EnumEntry>), ValidationError> {
    let first = raw.first().ok_or(ValidationError::EmptyEntries)?;
    let style = first.style();

    if let Some(offending) = raw.iter().find(|entry| entry.style() != style) {
        return Err(ValidationError::MixedEntryStyle {
            first: first.to_string(),
            offending: offending.to_string(),
        });
    }
    debug!(?style, count = raw.len(), "entry style is uniform");

    let mut names = HashSet::with_capacity(raw.len());
    for entry in raw {
        let name = entry.name();
        validate_identifier("enum entry name", name)?;

        if !name.chars().next().is_some_and(char::is_uppercase) {
            return Err(ValidationError::NameNotUppercase {
                name: name.to_string(),
            });
        }

        if !names.insert(name) {
            return Err(ValidationError::DuplicateName {
                name: name.to_string(),
            });
        }
    }

    let entries = raw.iter().map(to_entry).collect::<Result<Vec<_>, _>>()?;

    if style == EntryStyle::Explicit {
        let mut values = HashSet::with_capacity(entries.len());
        for value in entries.iter().filter_map(|entry| entry.value) {
            if !values.insert(value) {
                return Err(ValidationError::DuplicateValue { value });
            }
        }
    }

    Ok((style, entries))
}

fn to_entry(raw: &RawEntry) -> Result<EnumEntry, ValidationError> {
    match raw {
        RawEntry::NamedOnly(name) => Ok(EnumEntry {
            name: name.clone(),
            value: None,
        }),
        RawEntry::NamedWithValue(name, token) => {
            let value = token.parse::<i64>().map_err(|e| match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    ValidationError::ValueOutOfRange {
                        name: name.clone(),
                        value: token.clone(),
                    }
                }
                _ => ValidationError::InvalidValue {
                    name: name.clone(),
                    value: token.clone(),
                },
            })?;
            Ok(EnumEntry {
                name: name.clone(),
                value: Some(value),
            })
        }
    }
}
