//! The C++ enum wrapper template and the placeholder substitution engine.
//!
//! Placeholders are written `{{key}}`. Substitution is a single left-to-right
//! pass: substituted text is never rescanned, so values may contain braces
//! freely. Every placeholder must resolve; a leftover or unterminated
//! placeholder is a [`GenerationError`] rather than silently emitted text.

use crate::errors::GenerationError;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Header template for a `<namespace>::<enum_type>` wrapper class.
///
/// Keys: `namespace`, `enum_type`, `underlying_type`, `enum_to_value`,
/// `switch_enum_to_str`, `switch_enum_to_true`, `enum_str_to_type`,
/// `enums`, `enum_count`.
pub const ENUM_TEMPLATE: &str = r#"// This file is automatically generated by enumgen. Do not edit manually.
#pragma once

#include <array>
#include <fmt/ostream.h>
#include <ostream>
#include <stdexcept>
#include <string_view>
#include <type_traits>

namespace {{namespace}} {
class {{enum_type}} {
 public:
  enum class Type : {{underlying_type}} {
    {{enum_to_value}}
  };
  using enum Type;
  // Allow implicit conversion from {{enum_type}}::Type to {{enum_type}}
  constexpr {{enum_type}}(Type v) noexcept : value_(v) {}
  constexpr static std::string_view toString(Type v) noexcept {
    switch (v) {
    {{switch_enum_to_str}}
    default:
      return "UNKNOWN";
    }
  }
  constexpr static const char *c_str(Type v) noexcept {
    switch (v) {
    {{switch_enum_to_str}}
    default:
      return "UNKNOWN";
    }
  }
  [[nodiscard]] constexpr static bool isValid(Type v) noexcept {
    switch (v) {
    {{switch_enum_to_true}}
    default:
      return false;
    }
  }
  constexpr static std::array<{{enum_type}}, {{enum_count}}> allValues() noexcept {
    return { {{enums}} };
  }
  static Type parseFrom(std::string_view sv) {
    {{enum_str_to_type}}
    throw std::runtime_error("Unknown enum " + std::string(sv));
  }
  template <class T>
  requires std::is_convertible_v<T, std::underlying_type_t<Type>>
  constexpr static Type parseFrom(T t) noexcept {
    return static_cast<Type>(static_cast<std::underlying_type_t<Type>>(t));
  }
  constexpr std::string_view toString() const noexcept {
    return {{enum_type}}::toString(value_);
  }
  [[nodiscard]] constexpr bool isValid() const noexcept {
    return {{enum_type}}::isValid(value_);
  }
  constexpr const char* c_str() const noexcept {
    return {{enum_type}}::c_str(value_);
  }
  explicit constexpr operator Type() const noexcept {
    return value_;
  }
  friend constexpr bool operator==({{enum_type}} lhs, {{enum_type}} rhs) noexcept {
    return lhs.value_ == rhs.value_;
  }
  friend constexpr bool operator!=({{enum_type}} lhs, {{enum_type}} rhs) noexcept {
    return !(lhs == rhs);
  }
 private:
  Type value_;
};
constexpr std::string_view toString({{enum_type}} t) noexcept {
  return t.toString();
}
constexpr std::string_view toString({{enum_type}}::Type t) noexcept {
  return {{enum_type}}::toString(t);
}
inline std::ostream& operator<<(std::ostream& os, {{enum_type}} t) {
  return os << t.toString();
}
inline std::ostream& operator<<(std::ostream& os, {{enum_type}}::Type t) {
  return os << {{enum_type}}::toString(t);
}
}  // namespace {{namespace}}

template<>
struct fmt::formatter<::{{namespace}}::{{enum_type}}>
    : fmt::ostream_formatter {};

namespace std {
template<>
struct hash<::{{namespace}}::{{enum_type}}> {
  std::size_t operator()(::{{namespace}}::{{enum_type}} t) noexcept {
    return hash<::{{namespace}}::{{enum_type}}::Type>{}(
        static_cast<::{{namespace}}::{{enum_type}}::Type>(t));
  }
};
}  // namespace std
"#;

/// Replaces every `{{key}}` in `template` with its value from `values`.
///
/// Whitespace just inside the braces is ignored, so `{{ key }}` and
/// `{{key}}` are equivalent.
///
/// ## Examples
///
/// ```
/// use enumgen::template::render_template;
///
/// let out = render_template("enum {{name}} { {{body}} };", &[
///     ("name", "Side".to_string()),
///     ("body", "BUY, SELL".to_string()),
/// ])
/// .unwrap();
/// assert_eq!(out, "enum Side { BUY, SELL };");
///
/// assert!(render_template("{{missing}}", &[]).is_err());
/// ```
///
/// ## Errors
///
/// - [`GenerationError::UnresolvedPlaceholder`] if a key has no value
/// - [`GenerationError::UnterminatedPlaceholder`] if `{{` is never closed
pub fn render_template(
    template: &str,
    values: &[(&str, String)],
) -> Result<String, GenerationError> {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;
    let mut consumed = 0;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);

        let after_open = &rest[start + OPEN.len()..];
        let end = after_open
            .find(CLOSE)
            .ok_or(GenerationError::UnterminatedPlaceholder {
                offset: consumed + start,
            })?;

        let key = after_open[..end].trim();
        let value = values
            .iter()
            .find_map(|(k, v)| (*k == key).then_some(v))
            .ok_or_else(|| GenerationError::UnresolvedPlaceholder {
                key: key.to_string(),
            })?;
        out.push_str(value);

        let advance = start + OPEN.len() + end + CLOSE.len();
        consumed += advance;
        rest = &rest[advance..];
    }

    out.push_str(rest);
    Ok(out)
}
