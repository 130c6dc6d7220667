//! Enum schema loading.
//!
//! A schema is a YAML document with exactly four keys:
//!
//! ```yaml
//! namespace: trading
//! enum_name: Side
//! underlying_type: int8_t
//! enum_entries:
//!   - BUY, 1
//!   - SELL, 2
//! ```
//!
//! Each item of `enum_entries` is either a bare name (`CALL`) or a name and
//! an integer value separated by a comma (`CALL, 1`). All items must use
//! the same form.
//!
//! Loading goes through three steps: deserialize the document, split every
//! entry string into a [`RawEntry`], then run the checks in
//! [`crate::validation`]. Only a fully validated [`EnumDefinition`] leaves
//! this module.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::errors::{EnumGenError, ValidationError};
use crate::validation::{validate_entries, validate_identifier, validate_namespace};

/// The schema document as written on disk, before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDocument {
    namespace: String,
    enum_name: String,
    underlying_type: String,
    enum_entries: Vec<String>,
}

/// One `enum_entries` item after comma splitting, before value parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEntry {
    /// `"NAME"`
    NamedOnly(String),
    /// `"NAME, VALUE"`; the value is still an unparsed token
    NamedWithValue(String, String),
}

impl RawEntry {
    pub fn name(&self) -> &str {
        match self {
            RawEntry::NamedOnly(name) | RawEntry::NamedWithValue(name, _) => name,
        }
    }

    pub fn style(&self) -> EntryStyle {
        match self {
            RawEntry::NamedOnly(_) => EntryStyle::Implicit,
            RawEntry::NamedWithValue(..) => EntryStyle::Explicit,
        }
    }
}

impl fmt::Display for RawEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawEntry::NamedOnly(name) => write!(f, "{name}"),
            RawEntry::NamedWithValue(name, value) => write!(f, "{name}, {value}"),
        }
    }
}

impl From<&EnumEntry> for RawEntry {
    fn from(entry: &EnumEntry) -> Self {
        match entry.value {
            Some(value) => RawEntry::NamedWithValue(entry.name.clone(), value.to_string()),
            None => RawEntry::NamedOnly(entry.name.clone()),
        }
    }
}

/// Whether enumerators get their values implicitly or explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStyle {
    /// Values are assigned by declaration order, starting at 0.
    Implicit,
    /// Every entry carries its own integer value.
    Explicit,
}

/// A single enumerator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    pub name: String,
    pub value: Option<i64>,
}

impl EnumEntry {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn with_value(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
        }
    }
}

/// A validated enum schema.
///
/// Fields are private; every constructor runs the full validation, so a
/// value of this type always satisfies the schema invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    namespace: String,
    enum_name: String,
    underlying_type: String,
    style: EntryStyle,
    entries: Vec<EnumEntry>,
}

impl EnumDefinition {
    /// Builds a definition from already-typed entries.
    ///
    /// ## Examples
    ///
    /// ```
    /// use enumgen::schema::{EnumDefinition, EnumEntry};
    ///
    /// let def = EnumDefinition::new(
    ///     "trading",
    ///     "Side",
    ///     "int8_t",
    ///     vec![EnumEntry::with_value("BUY", 1), EnumEntry::with_value("SELL", 2)],
    /// )
    /// .unwrap();
    /// assert!(def.has_explicit_values());
    ///
    /// let mixed = EnumDefinition::new(
    ///     "trading",
    ///     "Side",
    ///     "int8_t",
    ///     vec![EnumEntry::named("BUY"), EnumEntry::with_value("SELL", 2)],
    /// );
    /// assert!(mixed.is_err());
    /// ```
    pub fn new(
        namespace: impl Into<String>,
        enum_name: impl Into<String>,
        underlying_type: impl Into<String>,
        entries: Vec<EnumEntry>,
    ) -> Result<Self, ValidationError> {
        let raw: Vec<RawEntry> = entries.iter().map(RawEntry::from).collect();
        Self::from_raw(namespace.into(), enum_name.into(), underlying_type.into(), &raw)
    }

    fn from_raw(
        namespace: String,
        enum_name: String,
        underlying_type: String,
        raw: &[RawEntry],
    ) -> Result<Self, ValidationError> {
        validate_namespace(&namespace)?;
        validate_identifier("enum_name", &enum_name)?;
        validate_identifier("underlying_type", &underlying_type)?;
        let (style, entries) = validate_entries(raw)?;

        Ok(Self {
            namespace,
            enum_name,
            underlying_type,
            style,
            entries,
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn enum_name(&self) -> &str {
        &self.enum_name
    }

    pub fn underlying_type(&self) -> &str {
        &self.underlying_type
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[EnumEntry] {
        &self.entries
    }

    pub fn style(&self) -> EntryStyle {
        self.style
    }

    pub fn has_explicit_values(&self) -> bool {
        self.style == EntryStyle::Explicit
    }
}

/// Splits one `enum_entries` item on commas, trimming each part.
///
/// ## Examples
///
/// ```
/// use enumgen::schema::{parse_entry, RawEntry};
///
/// assert_eq!(parse_entry("CALL").unwrap(), RawEntry::NamedOnly("CALL".into()));
/// assert_eq!(
///     parse_entry(" PUT ,  2 ").unwrap(),
///     RawEntry::NamedWithValue("PUT".into(), "2".into())
/// );
/// assert!(parse_entry("PUT, 2, 3").is_err());
/// ```
pub fn parse_entry(raw: &str) -> Result<RawEntry, ValidationError> {
    let mut parts = raw.split(',').map(str::trim);

    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), None, None) => Ok(RawEntry::NamedOnly(name.to_string())),
        (Some(name), Some(value), None) => {
            Ok(RawEntry::NamedWithValue(name.to_string(), value.to_string()))
        }
        _ => Err(ValidationError::MalformedEntry {
            entry: raw.to_string(),
        }),
    }
}

/// Parses and validates a schema held in memory.
///
/// ## Errors
///
/// Returns [`EnumGenError::Parse`] if the text is not a YAML mapping with
/// exactly the four schema keys, and [`EnumGenError::Validation`] if any
/// invariant is violated.
pub fn parse_definition(text: &str) -> Result<EnumDefinition, EnumGenError> {
    let doc: RawDocument = serde_yaml::from_str(text)?;
    debug!(
        namespace = %doc.namespace,
        enum_name = %doc.enum_name,
        entries = doc.enum_entries.len(),
        "parsed schema document"
    );

    // Scalar fields are checked before entry strings are split so that
    // errors come out in document order.
    validate_namespace(&doc.namespace)?;
    validate_identifier("enum_name", &doc.enum_name)?;
    validate_identifier("underlying_type", &doc.underlying_type)?;

    let raw = doc
        .enum_entries
        .iter()
        .map(String::as_str)
        .map(parse_entry)
        .collect::<Result<Vec<_>, _>>()?;

    EnumDefinition::from_raw(doc.namespace, doc.enum_name, doc.underlying_type, &raw)
        .map_err(EnumGenError::from)
}

/// Loads and validates a schema file.
///
/// ## Errors
///
/// - [`EnumGenError::NotFound`] if `path` does not exist
/// - [`EnumGenError::Io`] if the file cannot be read
/// - anything [`parse_definition`] returns
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_definition(path: &Path) -> Result<EnumDefinition, EnumGenError> {
    if !path.exists() {
        return Err(EnumGenError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path).map_err(|source| EnumGenError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_definition(&text)
}
