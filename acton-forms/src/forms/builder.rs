//! Form builder API with fluent interface
//!
//! Builds the same [`Field`] descriptors a form definition would contain,
//! then renders them with a [`FormRenderer`].

use super::attributes::write_attr;
use super::envelope::FormTag;
use super::field::{Field, HiddenFields, HiddenInput, InputField, InputType, NonceField, SubmitButton};
use super::render::FormRenderer;

/// Builder for constructing HTML forms
///
/// # Examples
///
/// ```rust
/// use acton_forms::forms::FormBuilder;
///
/// let html = FormBuilder::new()
///     .id("login-form")
///     .class("login")
///     .email("email")
///         .label("Email Address")
///         .required()
///         .placeholder("you@example.com")
///         .done()
///     .password("password")
///         .label("Password")
///         .required()
///         .done()
///     .submit("Sign In")
///     .build_default();
///
/// assert!(html.contains(r#"id="app_email""#));
/// assert!(html.contains(">Sign In</button>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    pub(crate) tag: FormTag,
    pub(crate) fields: Vec<Field>,
}

impl FormBuilder {
    /// Create an empty form builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the form ID
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.tag.id = id.into();
        self
    }

    /// Set the classes shared by the form and its container
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.tag.class = class.into();
        self
    }

    /// Set classes for the `<form>` element only
    #[must_use]
    pub fn form_class(mut self, class: impl Into<String>) -> Self {
        self.tag.form_class = class.into();
        self
    }

    /// Set the form action URL
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.tag.action = Some(action.into());
        self
    }

    /// Set the HTTP method
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.tag.method = Some(method.into());
        self
    }

    /// Add an attribute to the `<form>` tag; the value is escaped
    #[must_use]
    pub fn attr(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        let mut fragment = self.tag.attr.0.trim().to_string();
        write_attr(&mut fragment, name.as_ref(), value.as_ref());
        self.tag.attr.0 = fragment.trim_start().to_string();
        self
    }

    // =========================================================================
    // Field Builders
    // =========================================================================

    /// Add a text input and return a field builder
    #[must_use]
    pub fn text(self, name: impl Into<String>) -> InputFieldBuilder {
        InputFieldBuilder::new(self, InputType::Text, name)
    }

    /// Add an email input and return a field builder
    #[must_use]
    pub fn email(self, name: impl Into<String>) -> InputFieldBuilder {
        InputFieldBuilder::new(self, InputType::Email, name)
    }

    /// Add a password input and return a field builder
    #[must_use]
    pub fn password(self, name: impl Into<String>) -> InputFieldBuilder {
        InputFieldBuilder::new(self, InputType::Password, name)
    }

    /// Add a number input and return a field builder
    #[must_use]
    pub fn number(self, name: impl Into<String>) -> InputFieldBuilder {
        InputFieldBuilder::new(self, InputType::Number, name)
    }

    /// Add a hidden field
    ///
    /// Consecutive calls share one hidden field entry.
    #[must_use]
    pub fn hidden(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let input = HiddenInput::new(name, value);
        match self.fields.last_mut() {
            Some(Field::Hidden(hidden)) => hidden.inputs.push(input),
            _ => self.fields.push(Field::Hidden(HiddenFields {
                inputs: vec![input],
                ..HiddenFields::default()
            })),
        }
        self
    }

    /// Add a security-token field, rendered by the renderer's token emitter
    #[must_use]
    pub fn nonce(mut self, name: impl Into<String>, action: impl Into<String>) -> Self {
        self.fields.push(Field::Nonce(NonceField {
            name: name.into(),
            value: action.into(),
            order: 0,
        }));
        self
    }

    /// Add a submit button
    #[must_use]
    pub fn submit(mut self, label: impl Into<String>) -> Self {
        self.fields.push(Field::Submit(SubmitButton {
            value: Some(label.into()),
            ..SubmitButton::default()
        }));
        self
    }

    /// Add a pre-built field
    #[must_use]
    pub fn field(mut self, field: impl Into<Field>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Split into the form tag and the field list
    #[must_use]
    pub fn into_parts(self) -> (FormTag, Vec<Field>) {
        (self.tag, self.fields)
    }

    /// Build the form HTML
    #[must_use]
    pub fn build(&self, renderer: &FormRenderer) -> String {
        renderer.render(&self.fields, &self.tag)
    }

    /// Build the form HTML with default settings and no token emitter
    #[must_use]
    pub fn build_default(&self) -> String {
        self.build(&FormRenderer::default())
    }
}

// =============================================================================
// Input Field Builder
// =============================================================================

/// Builder for text, email, password and number inputs
#[derive(Debug)]
pub struct InputFieldBuilder {
    form: FormBuilder,
    input_type: InputType,
    field: InputField,
}

impl InputFieldBuilder {
    fn new(form: FormBuilder, input_type: InputType, name: impl Into<String>) -> Self {
        Self {
            form,
            input_type,
            field: InputField::new(name),
        }
    }

    /// Set the field label
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.field.label = label.into();
        self
    }

    /// Set placeholder text
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.field.placeholder = placeholder.into();
        self
    }

    /// Set the current value
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.field.value = value.into();
        self
    }

    /// Mark field as required
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.field.required = true;
        self
    }

    /// Set help text shown below the control
    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.field.hint = hint.into();
        self
    }

    /// Set the sort key
    #[must_use]
    pub const fn order(mut self, order: i64) -> Self {
        self.field.order = order;
        self
    }

    /// Set an explicit element id
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.field.id = Some(id.into());
        self
    }

    /// Set wrapper CSS classes
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.field.class = class.into();
        self
    }

    /// Add an extra attribute
    ///
    /// The first call replaces the default attribute set.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.field
            .extra_attributes
            .get_or_insert_with(Default::default)
            .insert(name.into(), value.into());
        self
    }

    /// Finish building this field and return to form builder
    #[must_use]
    pub fn done(mut self) -> FormBuilder {
        self.form.fields.push(Field::input(self.input_type, self.field));
        self.form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;

    #[test]
    fn test_form_builder_tag() {
        let form = FormBuilder::new()
            .id("my-form")
            .class("contact")
            .form_class("wide")
            .action("/contact")
            .method("POST");
        assert_eq!(form.tag.id, "my-form");
        assert_eq!(form.tag.class, "contact");
        assert_eq!(form.tag.form_class, "wide");
        assert_eq!(form.tag.action.as_deref(), Some("/contact"));
        assert_eq!(form.tag.method.as_deref(), Some("POST"));
    }

    #[test]
    fn test_form_attr_accumulates() {
        let form = FormBuilder::new().attr("novalidate", "").attr("data-step", "1");
        assert_eq!(form.tag.attr.as_str(), r#"novalidate="" data-step="1""#);
    }

    #[test]
    fn test_field_builder() {
        let form = FormBuilder::new()
            .email("email")
            .label("Email")
            .required()
            .placeholder("test@example.com")
            .hint("Work address")
            .order(5)
            .done();

        assert_eq!(form.fields.len(), 1);
        let Field::Email(field) = &form.fields[0] else {
            panic!("expected email field");
        };
        assert_eq!(field.name, "email");
        assert_eq!(field.label, "Email");
        assert!(field.required);
        assert_eq!(field.placeholder, "test@example.com");
        assert_eq!(field.hint, "Work address");
        assert_eq!(form.fields[0].order(), 5);
    }

    #[test]
    fn test_attr_replaces_default_set() {
        let form = FormBuilder::new().number("qty").attr("min", "1").done();
        let html = form.build_default();
        assert!(html.contains("min='1'"));
        assert!(!html.contains("maxlength"));
    }

    #[test]
    fn test_hidden_fields_grouped() {
        let form = FormBuilder::new().hidden("user_id", "123").hidden("step", "2");
        assert_eq!(form.fields.len(), 1);
        let Field::Hidden(hidden) = &form.fields[0] else {
            panic!("expected hidden field");
        };
        assert_eq!(
            hidden.inputs,
            vec![HiddenInput::new("user_id", "123"), HiddenInput::new("step", "2")]
        );
    }

    #[test]
    fn test_nonce_and_submit() {
        let renderer = FormRenderer::new(FormConfig::default())
            .with_token_emitter(|name: &str, action: &str| format!("<!-- {name}:{action} -->\n"));
        let html = FormBuilder::new()
            .text("q")
            .done()
            .nonce("_token", "search")
            .submit("Go")
            .build(&renderer);

        assert!(html.contains("<!-- _token:search -->"));
        assert!(html.contains(">Go</button>"));
    }

    #[test]
    fn test_empty_builder_renders_nothing() {
        assert_eq!(FormBuilder::new().id("x").build_default(), "");
    }

    #[test]
    fn test_into_parts() {
        let (tag, fields) = FormBuilder::new().id("f").submit("Send").into_parts();
        assert_eq!(tag.id, "f");
        assert!(matches!(fields[0], Field::Submit(_)));
    }
}
