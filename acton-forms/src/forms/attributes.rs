//! Attribute compilation
//!
//! Turns a field's `extraAttributes` into an HTML attribute fragment.
//!
//! # Trust model
//!
//! Attribute **values are not HTML-escaped**. Descriptors are authored by the
//! application, not by end users, and values are emitted exactly as given
//! inside single quotes. Never route user input into `extraAttributes`.
//! Attribute **names** are checked: a name that could break out of the tag
//! (whitespace, quotes, `=`, `<`, `>`, `/`) is dropped.
//!
//! # Suppression
//!
//! Length constraints mean nothing on numeric inputs and range constraints
//! mean nothing on textual ones, so each policy names the keys it drops:
//!
//! | Policy    | Dropped keys              |
//! |-----------|---------------------------|
//! | `Numeric` | `maxlength`, `minlength`  |
//! | `Textual` | `max`, `min`              |

use std::fmt::Write;

use super::field::ExtraAttributes;

/// Which constraint attributes a control accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributePolicy {
    /// `number` inputs: range constraints allowed, length constraints dropped
    Numeric,
    /// Every other control: length constraints allowed, range constraints dropped
    Textual,
}

impl AttributePolicy {
    /// Keys this policy drops
    #[must_use]
    pub const fn suppressed(self) -> &'static [&'static str] {
        match self {
            Self::Numeric => &["maxlength", "minlength"],
            Self::Textual => &["max", "min"],
        }
    }

    /// Whether `key` survives this policy
    #[must_use]
    pub fn allows(self, key: &str) -> bool {
        !self
            .suppressed()
            .iter()
            .any(|dropped| dropped.eq_ignore_ascii_case(key))
    }
}

/// Compile `attrs` into ` key='value' ` pairs, in insertion order
///
/// ```rust
/// use acton_forms::forms::{compile_attributes, AttributePolicy, ExtraAttributes};
///
/// let mut attrs = ExtraAttributes::new();
/// attrs.insert("maxlength".into(), "10".into());
/// attrs.insert("max".into(), "5".into());
///
/// assert_eq!(compile_attributes(AttributePolicy::Numeric, &attrs), " max='5' ");
/// assert_eq!(compile_attributes(AttributePolicy::Textual, &attrs), " maxlength='10' ");
/// ```
#[must_use]
pub fn compile_attributes(policy: AttributePolicy, attrs: &ExtraAttributes) -> String {
    let mut out = String::new();
    for (key, value) in attrs {
        if !is_valid_name(key) {
            tracing::warn!(attribute = %key, "Dropping attribute with invalid name");
            continue;
        }
        if !policy.allows(key) {
            tracing::trace!(attribute = %key, ?policy, "Suppressed constraint attribute");
            continue;
        }
        let _ = write!(out, " {key}='{value}' ");
    }
    out
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '=' | '<' | '>' | '/'))
}

/// Write ` name="value"` with the value escaped
pub(crate) fn write_attr(html: &mut String, name: &str, value: &str) {
    html.push(' ');
    html.push_str(name);
    html.push_str("=\"");
    html.push_str(&escape_attr(value));
    html.push('"');
}

/// Write ` name="value"` only when `value` is non-empty
pub(crate) fn write_opt_attr(html: &mut String, name: &str, value: &str) {
    if !value.is_empty() {
        write_attr(html, name, value);
    }
}

/// Join non-empty class tokens with single spaces
pub(crate) fn class_list(parts: &[&str]) -> String {
    parts
        .iter()
        .flat_map(|part| part.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape a string for use in HTML attribute values
pub(crate) fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a string for use in HTML content
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> ExtraAttributes {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_numeric_drops_length_constraints() {
        let compiled = compile_attributes(
            AttributePolicy::Numeric,
            &attrs(&[("maxlength", "10"), ("max", "5"), ("minlength", "1"), ("min", "0")]),
        );
        assert_eq!(compiled, " max='5'  min='0' ");
    }

    #[test]
    fn test_textual_drops_range_constraints() {
        let compiled = compile_attributes(
            AttributePolicy::Textual,
            &attrs(&[("max", "5"), ("maxlength", "10"), ("min", "1"), ("minlength", "2")]),
        );
        assert_eq!(compiled, " maxlength='10'  minlength='2' ");
    }

    #[test]
    fn test_other_keys_pass_through_in_order() {
        let compiled = compile_attributes(
            AttributePolicy::Textual,
            &attrs(&[("data-b", "2"), ("pattern", "[a-z]+"), ("data-a", "1")]),
        );
        assert_eq!(compiled, " data-b='2'  pattern='[a-z]+'  data-a='1' ");
    }

    #[test]
    fn test_values_are_not_escaped() {
        let compiled = compile_attributes(AttributePolicy::Textual, &attrs(&[("data-x", "a<b")]));
        assert_eq!(compiled, " data-x='a<b' ");
    }

    #[test]
    fn test_suppression_ignores_case() {
        assert!(!AttributePolicy::Numeric.allows("MaxLength"));
        assert!(!AttributePolicy::Textual.allows("MIN"));
        assert!(AttributePolicy::Textual.allows("minlength"));
    }

    #[test]
    fn test_invalid_names_dropped() {
        let compiled = compile_attributes(
            AttributePolicy::Textual,
            &attrs(&[("onclick=alert(1) x", "y"), ("", "z"), ("ok", "1")]),
        );
        assert_eq!(compiled, " ok='1' ");
    }

    #[test]
    fn test_class_list_skips_empty() {
        assert_eq!(class_list(&["form-group", "", "  extra  wide "]), "form-group extra wide");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("\"test\""), "&quot;test&quot;");
        assert_eq!(escape_attr("it's"), "it&#39;s");
    }
}
