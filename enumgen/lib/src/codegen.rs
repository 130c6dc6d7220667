//! Maps a validated [`EnumDefinition`] onto [`ENUM_TEMPLATE`].
//!
//! Every derived fragment preserves declaration order. Nothing is sorted,
//! deduplicated or renumbered here; validation has already guaranteed
//! unique names and values.
//!
//! ## Generated fragments
//!
//! For entries `BUY, 1` and `SELL, 2`:
//!
//! ```text
//! enum_to_value       BUY = 1,\n    SELL = 2
//! switch_enum_to_str  case BUY:\n      return "BUY"; ...
//! switch_enum_to_true case BUY:\n      return true; ...
//! enum_str_to_type    if (sv == "BUY") { return BUY; } ...
//! enums               BUY, SELL
//! enum_count          2
//! ```

use tracing::{debug, instrument};

use crate::errors::GenerationError;
use crate::schema::{EntryStyle, EnumDefinition, EnumEntry};
use crate::template::{ENUM_TEMPLATE, render_template};

/// Enumerator declarations: `NAME` for implicit values, `NAME = VALUE`
/// for explicit ones.
pub fn enum_to_value(def: &EnumDefinition) -> String {
    const SEP: &str = ",\n    ";

    match def.style() {
        EntryStyle::Implicit => join(def.entries(), SEP, |entry| entry.name.clone()),
        EntryStyle::Explicit => join(def.entries(), SEP, |entry| match entry.value {
            Some(value) => format!("{} = {}", entry.name, value),
            None => entry.name.clone(),
        }),
    }
}

/// `switch` cases mapping each enumerator to its display name.
pub fn switch_enum_to_str(def: &EnumDefinition) -> String {
    join(def.entries(), "\n    ", |entry| {
        format!("case {0}:\n      return \"{0}\";", entry.name)
    })
}

/// `switch` cases returning `true` for every declared enumerator.
pub fn switch_enum_to_true(def: &EnumDefinition) -> String {
    join(def.entries(), "\n    ", |entry| {
        format!("case {}:\n      return true;", entry.name)
    })
}

/// String comparisons mapping each display name back to its enumerator.
pub fn enum_str_to_type(def: &EnumDefinition) -> String {
    join(def.entries(), "\n    ", |entry| {
        format!("if (sv == \"{0}\") {{ return {0}; }}", entry.name)
    })
}

/// Comma separated enumerator names for the `allValues()` initializer.
pub fn enum_list(def: &EnumDefinition) -> String {
    join(def.entries(), ", ", |entry| entry.name.clone())
}

fn join(entries: &[EnumEntry], sep: &str, f: impl Fn(&EnumEntry) -> String) -> String {
    entries.iter().map(f).collect::<Vec<_>>().join(sep)
}

/// Renders the complete header for `def`.
///
/// Output is a pure function of the definition: the same input always
/// produces byte-identical text.
///
/// ## Examples
///
/// ```
/// use enumgen::codegen::render;
/// use enumgen::schema::{EnumDefinition, EnumEntry};
///
/// let def = EnumDefinition::new(
///     "trading",
///     "Side",
///     "int8_t",
///     vec![EnumEntry::with_value("BUY", 1), EnumEntry::with_value("SELL", 2)],
/// )
/// .unwrap();
///
/// let header = render(&def).unwrap();
/// assert!(header.contains("enum class Type : int8_t {"));
/// assert!(header.contains("BUY = 1,"));
/// assert!(header.contains("std::array<Side, 2> allValues()"));
/// ```
///
/// ## Errors
///
/// Returns a [`GenerationError`] only if the template itself is broken.
#[instrument(skip(def), fields(namespace = def.namespace(), enum_name = def.enum_name()))]
pub fn render(def: &EnumDefinition) -> Result<String, GenerationError> {
    let values = [
        ("namespace", def.namespace().to_string()),
        ("enum_type", def.enum_name().to_string()),
        ("underlying_type", def.underlying_type().to_string()),
        ("enum_to_value", enum_to_value(def)),
        ("switch_enum_to_str", switch_enum_to_str(def)),
        ("switch_enum_to_true", switch_enum_to_true(def)),
        ("enum_str_to_type", enum_str_to_type(def)),
        ("enums", enum_list(def)),
        ("enum_count", def.entries().len().to_string()),
    ];

    let rendered = render_template(ENUM_TEMPLATE, &values)?;
    debug!(bytes = rendered.len(), "rendered enum header");
    Ok(rendered)
}
