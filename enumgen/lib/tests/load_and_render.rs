//! Schema fixtures run through the full load -> render -> write pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use enumgen::{EnumGenError, ValidationError, generate, load_definition, render};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn validation_error(name: &str) -> ValidationError {
    match load_definition(&fixture(name)) {
        Err(EnumGenError::Validation(err)) => err,
        other => panic!("expected validation error for {name}, got {other:?}"),
    }
}

mod rejected_schemas {
    use super::*;

    #[test]
    fn empty_entries_must_not_be_empty() {
        let err = validation_error("empty_entries.yaml");
        assert_eq!(err, ValidationError::EmptyEntries);
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn mixed_entry_style() {
        assert!(matches!(
            validation_error("mixed_style.yaml"),
            ValidationError::MixedEntryStyle { .. }
        ));
    }

    #[test]
    fn mixed_case_namespace() {
        assert_eq!(
            validation_error("mixed_case_namespace.yaml"),
            ValidationError::NamespaceNotLowercase {
                value: "MyNamespace".to_string()
            }
        );
    }

    #[test]
    fn duplicate_name() {
        assert_eq!(
            validation_error("duplicate_name.yaml"),
            ValidationError::DuplicateName {
                name: "CALL".to_string()
            }
        );
    }

    #[test]
    fn duplicate_value() {
        assert_eq!(
            validation_error("duplicate_value.yaml"),
            ValidationError::DuplicateValue { value: 1 }
        );
    }

    #[test]
    fn character_values() {
        assert!(matches!(
            validation_error("char_values.yaml"),
            ValidationError::InvalidValue { .. }
        ));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        assert!(matches!(
            load_definition(&fixture("malformed.yaml")),
            Err(EnumGenError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_not_found() {
        assert!(matches!(
            load_definition(&fixture("no_such_schema.yaml")),
            Err(EnumGenError::NotFound { .. })
        ));
    }
}

mod rendered_headers {
    use super::*;

    #[test]
    fn side_declares_explicit_values_and_lookups() {
        let def = load_definition(&fixture("side.yaml")).unwrap();
        let header = render(&def).unwrap();

        assert!(header.contains("namespace trading {"));
        assert!(header.contains("enum class Type : int8_t {\n    BUY = 1,\n    SELL = 2\n  };"));
        assert!(header.contains("if (sv == \"BUY\") { return BUY; }"));
        assert!(header.contains("if (sv == \"SELL\") { return SELL; }"));
        assert!(header.contains(
            "constexpr static std::array<Side, 2> allValues() noexcept {\n    return { BUY, SELL };"
        ));
    }

    #[test]
    fn implicit_values_follow_declaration_order() {
        let def = load_definition(&fixture("option_type.yaml")).unwrap();
        let header = render(&def).unwrap();

        assert!(header.contains("    CALL,\n    PUT,\n    STRADDLE\n  };"));
        assert!(!header.contains(" = "));
        assert!(header.contains("std::array<OptionType, 3>"));
    }

    #[test]
    fn every_entry_round_trips_through_string_tables() {
        let def = load_definition(&fixture("option_type.yaml")).unwrap();
        let header = render(&def).unwrap();

        for entry in def.entries() {
            let name = &entry.name;
            assert!(header.contains(&format!("case {name}:\n      return \"{name}\";")));
            assert!(header.contains(&format!("if (sv == \"{name}\") {{ return {name}; }}")));
            assert!(header.contains(&format!("case {name}:\n      return true;")));
        }
    }
}

mod written_output {
    use super::*;

    #[test]
    fn regeneration_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("include/trading/side.h");

        generate(&fixture("side.yaml"), &output, false).unwrap();
        let first = fs::read(&output).unwrap();
        generate(&fixture("side.yaml"), &output, false).unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn rejected_schema_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("option_type.h");

        let result = generate(&fixture("duplicate_name.yaml"), &output, false);

        assert!(result.is_err());
        assert!(!output.exists());
    }

    #[test]
    fn rejected_schema_keeps_existing_header() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("side.h");
        generate(&fixture("side.yaml"), &output, false).unwrap();
        let good = fs::read(&output).unwrap();

        let result = generate(&fixture("mixed_case_namespace.yaml"), &output, false);

        assert!(matches!(result, Err(EnumGenError::Validation(_))));
        assert_eq!(fs::read(&output).unwrap(), good);
    }
}
