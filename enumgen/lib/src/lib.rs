//! Type-safe C++ enum wrapper generator.
//!
//! This crate turns a small YAML schema into a C++20 header containing an
//! enum wrapper class with string conversion, validity checks, parsing,
//! an `allValues()` accessor, stream/`fmt` formatting and `std::hash`
//! support.
//!
//! ## Modules
//!
//! - [`schema`] - Schema document loading and the validated [`EnumDefinition`]
//! - [`validation`] - Naming, casing and uniqueness invariants
//! - [`template`] - The header template and `{{key}}` substitution
//! - [`codegen`] - Derives template values from a definition and renders it
//! - [`output`] - Writes headers without leaving partial or stale files
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use enumgen::{parse_definition, render};
//!
//! let def = parse_definition(
//!     "namespace: trading\n\
//!      enum_name: Side\n\
//!      underlying_type: int8_t\n\
//!      enum_entries: [\"BUY, 1\", \"SELL, 2\"]\n",
//! )
//! .unwrap();
//!
//! let header = render(&def).unwrap();
//! assert!(header.contains("BUY = 1"));
//! assert!(header.contains("if (sv == \"SELL\") { return SELL; }"));
//! ```

pub mod codegen;
pub mod errors;
pub mod output;
pub mod schema;
pub mod template;
pub mod validation;

pub use codegen::render;
pub use errors::{EnumGenError, GenerationError, ValidationError};
pub use output::{generate, generate_file, write_output};
pub use schema::{
    EntryStyle, EnumDefinition, EnumEntry, RawEntry, load_definition, parse_definition,
};
