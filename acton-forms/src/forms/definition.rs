//! Form definitions loaded from JSON or TOML documents
//!
//! A definition is an object with an optional `form` table (the
//! [`FormTag`]) and a `fields` list. A bare list of fields is accepted too.
//!
//! ```toml
//! [form]
//! class = "contact"
//! id = "contact-form"
//!
//! [[fields]]
//! type = "email"
//! name = "email"
//! label = "Email"
//! required = true
//!
//! [[fields]]
//! type = "submit"
//! value = "Send"
//! ```
//!
//! Entries are decoded one at a time. An entry that does not decode is
//! logged and kept as [`Field::Unknown`], so one bad field never takes the
//! whole form down.

use serde_json::Value;

use crate::error::FormError;

use super::envelope::FormTag;
use super::field::Field;
use super::render::FormRenderer;

/// A form tag and its fields, as authored
#[derive(Debug, Clone, Default)]
pub struct FormDefinition {
    /// Envelope attributes
    pub form: FormTag,
    /// Field descriptors, in authored order
    pub fields: Vec<Field>,
}

impl FormDefinition {
    /// Parse a JSON document
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Json`] if the text is not JSON, or
    /// [`FormError::InvalidDefinition`] if its shape is wrong.
    pub fn from_json_str(source: &str) -> Result<Self, FormError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(value)
    }

    /// Parse a TOML document
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Toml`] if the text is not TOML, or
    /// [`FormError::InvalidDefinition`] if its shape is wrong.
    pub fn from_toml_str(source: &str) -> Result<Self, FormError> {
        let value: Value = toml::from_str(source)?;
        Self::from_value(value)
    }

    /// Build from an already-parsed document
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidDefinition`] if the document is neither a
    /// list of fields nor an object whose `fields` is a list, or if its
    /// `form` table is malformed.
    pub fn from_value(value: Value) -> Result<Self, FormError> {
        let (form, entries) = match value {
            Value::Array(entries) => (FormTag::default(), entries),
            Value::Object(mut document) => {
                let form = match document.remove("form") {
                    None | Some(Value::Null) => FormTag::default(),
                    Some(form) => serde_json::from_value(form).map_err(|e| {
                        FormError::invalid_definition(format!("`form` is malformed: {e}"))
                    })?,
                };
                let entries = match document.remove("fields") {
                    None | Some(Value::Null) => Vec::new(),
                    Some(Value::Array(entries)) => entries,
                    Some(_) => {
                        return Err(FormError::invalid_definition("`fields` must be a list"));
                    }
                };
                (form, entries)
            }
            _ => {
                return Err(FormError::invalid_definition(
                    "expected a list of fields or an object with a `fields` list",
                ));
            }
        };

        let fields = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| decode_field(index, entry))
            .collect::<Vec<_>>();

        tracing::debug!(fields = fields.len(), form_id = %form.id, "Loaded form definition");
        Ok(Self { form, fields })
    }

    /// Render with the given renderer
    #[must_use]
    pub fn render(&self, renderer: &FormRenderer) -> String {
        renderer.render(&self.fields, &self.form)
    }
}

fn decode_field(index: usize, entry: Value) -> Field {
    serde_json::from_value(entry).unwrap_or_else(|error| {
        tracing::warn!(index, %error, "Malformed field descriptor, skipping");
        Field::Unknown
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_str() {
        let definition = FormDefinition::from_json_str(
            r#"{
                "form": {"class": "signup", "id": "signup-form"},
                "fields": [
                    {"type": "email", "name": "email", "required": true},
                    {"type": "submit"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(definition.form.id, "signup-form");
        assert_eq!(definition.fields.len(), 2);
        assert_eq!(definition.fields[0].type_name(), "email");
        assert_eq!(definition.fields[1].type_name(), "submit");
    }

    #[test]
    fn test_from_toml_str() {
        let definition = FormDefinition::from_toml_str(
            r#"
            [form]
            class = "contact"

            [[fields]]
            type = "select"
            name = "topic"
            order = 2
            [fields.options]
            sales = "Sales"
            support = "Support"

            [[fields]]
            type = "text"
            name = "subject"
            order = 1
            "#,
        )
        .unwrap();

        assert_eq!(definition.form.class, "contact");
        let Field::Select(select) = &definition.fields[0] else {
            panic!("expected select");
        };
        let keys: Vec<&str> = select.options.keys().map(String::as_str).collect();
        assert_eq!(keys, ["sales", "support"]);
        assert_eq!(definition.fields[1].order(), 1);
    }

    #[test]
    fn test_bare_list_accepted() {
        let definition =
            FormDefinition::from_json_str(r#"[{"type": "text", "name": "q"}]"#).unwrap();
        assert_eq!(definition.form, FormTag::default());
        assert_eq!(definition.fields.len(), 1);
    }

    #[test]
    fn test_malformed_entry_becomes_unknown() {
        let definition = FormDefinition::from_json_str(
            r#"{"fields": [
                {"type": "text", "name": "ok"},
                {"type": "hidden", "inputs": [{"name": "missing-value"}]},
                {"type": "text", "order": "first"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(definition.fields.len(), 3);
        assert_eq!(definition.fields[0].type_name(), "text");
        assert!(matches!(definition.fields[1], Field::Unknown));
        assert!(matches!(definition.fields[2], Field::Unknown));
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let definition = FormDefinition::from_json_str(
            r#"[{"type": "textarea", "name": "bio", "rows": "5", "order": " 2 "}]"#,
        )
        .unwrap();
        let Field::Textarea(textarea) = &definition.fields[0] else {
            panic!("expected textarea, got {:?}", definition.fields[0]);
        };
        assert_eq!(textarea.rows, 5);
        assert_eq!(textarea.order, 2);

        let html = definition.render(&FormRenderer::default());
        assert!(html.contains(r#"rows="5""#));
    }

    #[test]
    fn test_string_flags_accepted() {
        let definition = FormDefinition::from_json_str(
            r#"[{"type": "checkbox", "choices": [
                {"name": "a", "checked": "checked", "required": "1"},
                {"name": "b", "checked": "", "required": "true"},
                {"name": "c", "checked": 0, "required": "false"}
            ]}]"#,
        )
        .unwrap();
        let Field::Checkbox(group) = &definition.fields[0] else {
            panic!("expected checkbox, got {:?}", definition.fields[0]);
        };
        let flags: Vec<(bool, bool)> = group.choices.iter().map(|c| (c.checked, c.required)).collect();
        assert_eq!(flags, [(true, true), (false, true), (false, false)]);

        let html = definition.render(&FormRenderer::default());
        assert_eq!(html.matches("<input ").count(), 3);
    }

    #[test]
    fn test_string_multiple_accepted() {
        let definition = FormDefinition::from_json_str(
            r#"[{"type": "select", "name": "tags", "multiple": "multiple"},
                {"type": "file", "name": "docs", "multiple": "yes"}]"#,
        )
        .unwrap();
        let html = definition.render(&FormRenderer::default());
        assert_eq!(html.matches(" multiple").count(), 2);
    }

    #[test]
    fn test_numeric_option_labels_accepted() {
        let definition = FormDefinition::from_json_str(
            r#"[{"type": "select", "name": "year", "options": {"2024": 2024, "na": null}}]"#,
        )
        .unwrap();
        let Field::Select(select) = &definition.fields[0] else {
            panic!("expected select, got {:?}", definition.fields[0]);
        };
        assert_eq!(select.options.get("2024").map(String::as_str), Some("2024"));
        assert_eq!(select.options.get("na").map(String::as_str), Some(""));
    }

    #[test]
    fn test_non_scalar_flag_still_rejected() {
        let definition =
            FormDefinition::from_json_str(r#"[{"type": "switch", "checked": [true]}]"#).unwrap();
        assert!(matches!(definition.fields[0], Field::Unknown));
    }

    #[test]
    fn test_hidden_top_level_pair() {
        let definition = FormDefinition::from_json_str(
            r#"[{"type": "hidden", "name": "action", "value": "save"},
                {"type": "text", "name": "q"}]"#,
        )
        .unwrap();
        let html = definition.render(&FormRenderer::default());
        assert!(html.contains(r#"<input type="hidden" name="action" value="save">"#));
    }

    #[test]
    fn test_hidden_numeric_values() {
        let definition = FormDefinition::from_toml_str(
            r#"
            [[fields]]
            type = "hidden"
            inputs = [{ name = "user_id", value = 42 }]
            "#,
        )
        .unwrap();
        let Field::Hidden(hidden) = &definition.fields[0] else {
            panic!("expected hidden, got {:?}", definition.fields[0]);
        };
        assert_eq!(hidden.inputs[0].value, "42");
    }

    #[test]
    fn test_fields_not_a_list_is_an_error() {
        let error = FormDefinition::from_json_str(r#"{"fields": {"type": "text"}}"#).unwrap_err();
        assert!(matches!(error, FormError::InvalidDefinition(_)));
    }

    #[test]
    fn test_scalar_document_is_an_error() {
        let error = FormDefinition::from_json_str("42").unwrap_err();
        assert!(matches!(error, FormError::InvalidDefinition(_)));
    }

    #[test]
    fn test_unparseable_documents() {
        assert!(matches!(
            FormDefinition::from_json_str("{not json").unwrap_err(),
            FormError::Json(_)
        ));
        assert!(matches!(
            FormDefinition::from_toml_str("fields = [").unwrap_err(),
            FormError::Toml(_)
        ));
    }

    #[test]
    fn test_render_definition() {
        let definition = FormDefinition::from_json_str(
            r#"{"fields": [{"type": "text", "name": "city", "label": "City"}]}"#,
        )
        .unwrap();
        let html = definition.render(&FormRenderer::default());
        assert!(html.contains(r#"<label for="app_city" class="app-label">City</label>"#));
    }
}
