//! Form rendering to HTML
//!
//! [`FormRenderer`] orders the fields, fills their defaults and dispatches
//! each one to the renderer for its type. Output is a plain markup string
//! meant to be embedded in a larger page.
//!
//! Text values (labels, hints, placeholders, values) are escaped. Raw
//! fragments (`before`, `after`, `visibility`, the form `attr`) and
//! `extraAttributes` values are emitted verbatim; see
//! [`compile_attributes`](super::attributes::compile_attributes).

use std::fmt::Write;
use std::sync::Arc;

use crate::config::FormConfig;

use super::attributes::{
    class_list, compile_attributes, escape_attr, escape_html, write_attr, write_opt_attr,
    AttributePolicy,
};
use super::envelope::{self, FormTag};
use super::field::{
    CheckboxGroup, Field, FileField, HiddenInput, InputField, InputType, NonceField, RadioGroup,
    RawHtml, SelectField, SubmitButton, SwitchField, TextareaField,
};
use super::order::order_fields;
use super::token::TokenEmitter;

/// Renders field descriptors to HTML
///
/// The renderer holds no per-render state; one instance can serve any number
/// of renders, concurrently.
///
/// # Examples
///
/// ```rust
/// use acton_forms::forms::{Field, FormRenderer, FormTag, InputField};
///
/// let renderer = FormRenderer::default();
/// let html = renderer.render(
///     &[Field::Email(InputField::new("email"))],
///     &FormTag { id: "signup".into(), ..FormTag::default() },
/// );
///
/// assert!(html.contains(r#"<form class="app_form" id="signup">"#));
/// assert!(html.contains(r#"id="app_email""#));
/// ```
#[derive(Clone, Default)]
pub struct FormRenderer {
    config: FormConfig,
    token_emitter: Option<Arc<dyn TokenEmitter>>,
}

impl std::fmt::Debug for FormRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormRenderer")
            .field("config", &self.config)
            .field("token_emitter", &self.token_emitter.is_some())
            .finish()
    }
}

impl FormRenderer {
    /// Create a renderer with the given settings
    #[must_use]
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            token_emitter: None,
        }
    }

    /// Attach the host's security-token emitter, used by nonce fields
    #[must_use]
    pub fn with_token_emitter(mut self, emitter: impl TokenEmitter + 'static) -> Self {
        self.token_emitter = Some(Arc::new(emitter));
        self
    }

    /// The renderer's settings
    #[must_use]
    pub const fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Render a complete form
    ///
    /// Returns an empty string when `fields` is empty; no envelope is
    /// emitted around nothing.
    #[must_use]
    pub fn render(&self, fields: &[Field], form_tag: &FormTag) -> String {
        if fields.is_empty() {
            tracing::debug!("No fields to render, skipping form");
            return String::new();
        }

        let span = tracing::debug_span!("render_form", fields = fields.len(), form_id = %form_tag.id);
        let _entered = span.enter();

        let mut html = envelope::open(form_tag, &self.config);
        for field in order_fields(fields.to_vec()) {
            html.push_str(&self.render_field(&field));
        }
        html.push_str(&envelope::close());

        tracing::debug!(bytes = html.len(), "Form rendered");
        html
    }

    /// Render one field
    ///
    /// Defaults are merged first, so partial descriptors are fine. Unknown
    /// types render to an empty string.
    #[must_use]
    pub fn render_field(&self, field: &Field) -> String {
        tracing::trace!(field_type = field.type_name(), order = field.order(), "Rendering field");

        match field.clone().with_defaults(&self.config) {
            Field::Text(f) => self.render_input(InputType::Text, &f),
            Field::Email(f) => self.render_input(InputType::Email, &f),
            Field::Password(f) => self.render_input(InputType::Password, &f),
            Field::Number(f) => self.render_input(InputType::Number, &f),
            Field::Textarea(f) => self.render_textarea(&f),
            Field::File(f) => self.render_file(&f),
            Field::Select(f) => self.render_select(&f),
            Field::Checkbox(f) => self.render_checkbox(&f),
            Field::Radio(f) => self.render_radio(&f),
            Field::Switch(f) => self.render_switch(&f),
            Field::Hidden(f) => {
                if f.inputs.is_empty() {
                    tracing::warn!("Hidden field has no name/value pairs, skipping");
                }
                Self::render_hidden(&f.inputs)
            }
            Field::Nonce(f) => self.render_nonce(&f),
            Field::Submit(f) => self.render_submit(&f),
            Field::Unknown => {
                tracing::warn!("Skipping field with unknown type");
                String::new()
            }
        }
    }

    /// Render hidden controls, one per pair, with no wrapper or label
    #[must_use]
    pub fn render_hidden(inputs: &[HiddenInput]) -> String {
        let mut html = String::with_capacity(inputs.len() * 64);
        for input in inputs {
            html.push_str("  <input");
            write_attr(&mut html, "type", "hidden");
            write_attr(&mut html, "name", &input.name);
            write_attr(&mut html, "value", &input.value);
            html.push_str(">\n");
        }
        html
    }

    fn render_input(&self, input_type: InputType, field: &InputField) -> String {
        let mut html = String::with_capacity(512);
        let id = field.id.as_deref().unwrap_or_default();
        let policy = if input_type == InputType::Number {
            AttributePolicy::Numeric
        } else {
            AttributePolicy::Textual
        };

        self.open_group(&mut html, &field.class);
        push_raw(&mut html, "    ", &field.before);
        self.push_label(&mut html, id, &field.label);
        push_required(&mut html, field.required, field.required_title.as_deref());

        html.push_str("    <input");
        write_attr(&mut html, "type", input_type.as_str());
        write_attr(&mut html, "class", &format!("form-control {}", self.hook("input")));
        write_opt_attr(&mut html, "id", id);
        write_opt_attr(&mut html, "name", &field.name);
        write_opt_attr(&mut html, "value", field.effective_value());
        write_opt_attr(&mut html, "autocomplete", &field.autocomplete);
        write_opt_attr(&mut html, "placeholder", &field.placeholder);
        write_described_by(&mut html, id, &field.hint);
        if let Some(ref attrs) = field.extra_attributes {
            html.push_str(&compile_attributes(policy, attrs));
        }
        push_inline_raw(&mut html, &field.visibility);
        if field.required {
            html.push_str(" required");
        }
        html.push_str(">\n");

        push_hint(&mut html, id, &field.hint);
        push_raw(&mut html, "    ", &field.after);
        html.push_str("  </div>\n");
        html
    }

    fn render_textarea(&self, field: &TextareaField) -> String {
        let mut html = String::with_capacity(512);
        let id = field.id.as_deref().unwrap_or_default();

        self.open_group(&mut html, &field.class);
        push_raw(&mut html, "    ", &field.before);
        self.push_label(&mut html, id, &field.label);
        push_required(&mut html, field.required, field.required_title.as_deref());

        html.push_str("    <textarea");
        write_attr(&mut html, "class", &format!("form-control {}", self.hook("textarea")));
        write_opt_attr(&mut html, "id", id);
        write_opt_attr(&mut html, "name", &field.name);
        write_opt_attr(&mut html, "placeholder", &field.placeholder);
        write_opt_attr(&mut html, "autocomplete", &field.autocomplete);
        write_attr(&mut html, "rows", &field.rows.to_string());
        write_described_by(&mut html, id, &field.hint);
        if field.required {
            html.push_str(" required");
        }
        html.push_str(&compile_attributes(AttributePolicy::Textual, &field.extra_attributes));
        html.push('>');
        html.push_str(&escape_html(&field.value));
        html.push_str("</textarea>\n");

        push_hint(&mut html, id, &field.hint);
        push_raw(&mut html, "    ", &field.after);
        html.push_str("  </div>\n");
        html
    }

    fn render_file(&self, field: &FileField) -> String {
        let mut html = String::with_capacity(512);
        let id = field.id.as_deref().unwrap_or_default();

        self.open_group(&mut html, &field.class);
        if !field.label.is_empty() {
            let _ = writeln!(
                html,
                "    <p class=\"{}\">{}</p>",
                self.hook("label"),
                escape_html(&field.label)
            );
        }
        push_required(&mut html, field.required, field.required_title.as_deref());

        html.push_str("    <div class=\"custom-file\">\n");
        push_raw(&mut html, "      ", &field.before);
        html.push_str("      <input");
        write_attr(&mut html, "type", "file");
        write_attr(&mut html, "class", &format!("custom-file-input {}", self.hook("input")));
        write_opt_attr(&mut html, "id", id);
        write_opt_attr(&mut html, "name", &field.name);
        write_described_by(&mut html, id, &field.hint);
        html.push_str(&compile_attributes(AttributePolicy::Textual, &field.extra_attributes));
        write_opt_attr(&mut html, "accept", &field.accept);
        if field.multiple {
            html.push_str(" multiple");
        }
        if field.required {
            html.push_str(" required");
        }
        html.push_str(">\n");
        html.push_str("      <label class=\"custom-file-label\"");
        write_opt_attr(&mut html, "for", id);
        let _ = writeln!(html, ">{}</label>", escape_html(&field.label));
        html.push_str("    </div>\n");

        push_hint(&mut html, id, &field.hint);
        push_raw(&mut html, "    ", &field.after);
        html.push_str("  </div>\n");
        html
    }

    fn render_select(&self, field: &SelectField) -> String {
        let mut html = String::with_capacity(512 + field.options.len() * 48);
        let id = field.id.as_deref().unwrap_or_default();

        self.open_group(&mut html, &field.class);
        push_raw(&mut html, "    ", &field.before);
        self.push_label(&mut html, id, &field.label);
        push_required(&mut html, field.required, field.required_title.as_deref());

        html.push_str("    <select");
        write_attr(&mut html, "class", &format!("form-control {}", self.hook("input")));
        write_opt_attr(&mut html, "id", id);
        write_opt_attr(&mut html, "name", &field.name);
        write_described_by(&mut html, id, &field.hint);
        if field.multiple {
            html.push_str(" multiple");
        }
        html.push_str(&compile_attributes(AttributePolicy::Textual, &field.extra_attributes));
        if field.required {
            html.push_str(" required");
        }
        html.push_str(">\n");

        if field.shows_placeholder() {
            let _ = writeln!(
                html,
                "      <option value=\"\" disabled selected>{}</option>",
                escape_html(&field.placeholder)
            );
        }
        for (value, label) in &field.options {
            html.push_str("      <option");
            write_attr(&mut html, "value", value);
            if !field.default_option.is_empty() && field.default_option == *value {
                html.push_str(" selected");
            }
            let _ = writeln!(html, ">{}</option>", escape_html(label));
        }
        html.push_str("    </select>\n");

        push_hint(&mut html, id, &field.hint);
        push_raw(&mut html, "    ", &field.after);
        html.push_str("  </div>\n");
        html
    }

    fn render_checkbox(&self, group: &CheckboxGroup) -> String {
        let ns = &self.config.namespace;
        let mut html = String::with_capacity(256 + group.choices.len() * 320);
        let mut index = 0usize;

        push_raw(&mut html, "  ", &group.before);
        let _ = writeln!(
            html,
            "  <div class=\"{}\">",
            escape_attr(&class_list(&[&self.hook("checkbox-group"), &group.class]))
        );

        for choice in &group.choices {
            let id = match choice.id.as_deref().filter(|id| !id.is_empty()) {
                Some(id) => id.to_string(),
                None => {
                    let id = if choice.name.is_empty() {
                        String::new()
                    } else {
                        format!("{ns}_{}_{index}", sanitize_name(&choice.name))
                    };
                    index += 1;
                    id
                }
            };

            let _ = writeln!(
                html,
                "    <div class=\"{}\">",
                escape_attr(&class_list(&["form-check", &self.hook("input-wrapper"), &choice.class]))
            );
            push_raw(&mut html, "      ", &choice.before);
            if choice.required {
                let _ = writeln!(html, "      {}", required_marker(choice.required_title.as_deref()));
            }
            html.push_str("      <input");
            write_attr(&mut html, "type", "checkbox");
            write_attr(&mut html, "class", &format!("form-control {}", self.hook("checkbox")));
            write_opt_attr(&mut html, "id", &id);
            write_opt_attr(&mut html, "name", &choice.name);
            write_opt_attr(&mut html, "value", &choice.value);
            if choice.required {
                html.push_str(" required");
            }
            html.push_str(&compile_attributes(AttributePolicy::Textual, &choice.extra_attributes));
            if choice.checked {
                html.push_str(" checked");
            }
            html.push_str(">\n");
            self.push_choice_label(&mut html, &id, &choice.label);
            push_raw(&mut html, "      ", &choice.after);
            html.push_str("    </div>\n");
        }

        html.push_str("  </div>\n");
        push_raw(&mut html, "  ", &group.after);
        html
    }

    fn render_radio(&self, group: &RadioGroup) -> String {
        let ns = &self.config.namespace;
        let name = sanitize_name(&group.name);
        let mut html = String::with_capacity(256 + group.choices.len() * 320);
        let mut index = 0usize;

        push_raw(&mut html, "  ", &group.before);
        let _ = writeln!(
            html,
            "  <div class=\"{}\">",
            escape_attr(&class_list(&[&self.hook("radio-group"), &group.class]))
        );

        if group.required || !group.title.is_empty() {
            let _ = write!(html, "    <label class=\"{}\">", self.hook("group-title"));
            if group.required {
                html.push_str(&required_marker(group.required_title.as_deref()));
                html.push(' ');
            }
            let _ = writeln!(html, "{}</label>", escape_html(&group.title));
        }

        for choice in &group.choices {
            let id = match choice.id.as_deref().filter(|id| !id.is_empty()) {
                Some(id) => id.to_string(),
                None => {
                    let id = if name.is_empty() {
                        String::new()
                    } else {
                        format!("{ns}_{name}{index}")
                    };
                    index += 1;
                    id
                }
            };

            let _ = writeln!(
                html,
                "    <div class=\"{}\">",
                escape_attr(&class_list(&["form-check", &self.hook("input-wrapper"), &choice.class]))
            );
            push_raw(&mut html, "      ", &choice.before);
            html.push_str("      <input");
            write_attr(&mut html, "type", "radio");
            write_attr(&mut html, "class", &format!("form-control {}", self.hook("radio")));
            write_opt_attr(&mut html, "id", &id);
            write_opt_attr(&mut html, "name", &group.name);
            write_opt_attr(&mut html, "value", &choice.value);
            if group.required {
                html.push_str(" required");
            }
            html.push_str(&compile_attributes(AttributePolicy::Textual, &choice.extra_attributes));
            if choice.checked {
                html.push_str(" checked");
            }
            html.push_str(">\n");
            self.push_choice_label(&mut html, &id, &choice.label);
            push_raw(&mut html, "      ", &choice.after);
            html.push_str("    </div>\n");
        }

        html.push_str("  </div>\n");
        push_raw(&mut html, "  ", &group.after);
        html
    }

    fn render_switch(&self, field: &SwitchField) -> String {
        let ns = &self.config.namespace;
        let mut html = String::with_capacity(512);
        let id = field.id.as_deref().unwrap_or_default();

        let _ = writeln!(
            html,
            "  <div class=\"{}\">",
            escape_attr(&class_list(&[
                "custom-control custom-switch",
                &self.hook("input-wrapper"),
                &field.class,
            ]))
        );
        push_raw(&mut html, "    ", &field.before);
        push_required(&mut html, field.required, field.required_title.as_deref());

        let namespaced_classes: Vec<String> = field
            .class
            .split_whitespace()
            .map(|class| format!("{ns}-{class}"))
            .collect();
        html.push_str("    <input");
        write_attr(&mut html, "type", "checkbox");
        write_attr(
            &mut html,
            "class",
            &class_list(&[
                "custom-control-input",
                &self.hook("input"),
                &self.hook("switch"),
                &namespaced_classes.join(" "),
            ]),
        );
        write_opt_attr(&mut html, "id", id);
        write_opt_attr(&mut html, "name", &field.name);
        write_described_by(&mut html, id, &field.hint);
        if field.required {
            html.push_str(" required");
        }
        html.push_str(&compile_attributes(AttributePolicy::Textual, &field.extra_attributes));
        if field.checked {
            html.push_str(" checked");
        }
        html.push_str(">\n");
        html.push_str("    <label class=\"custom-control-label\"");
        write_opt_attr(&mut html, "for", id);
        let _ = writeln!(html, ">{}</label>", escape_html(&field.label));

        push_hint(&mut html, id, &field.hint);
        push_raw(&mut html, "    ", &field.after);
        html.push_str("  </div>\n");
        html
    }

    fn render_nonce(&self, field: &NonceField) -> String {
        let Some(ref emitter) = self.token_emitter else {
            tracing::warn!(name = %field.name, "No token emitter configured, skipping nonce field");
            return String::new();
        };
        emitter.emit(&field.name, &field.value)
    }

    fn render_submit(&self, button: &SubmitButton) -> String {
        let mut html = String::with_capacity(256);
        html.push_str("  <div class=\"form-group\">\n");
        push_raw(&mut html, "    ", &button.before);
        html.push_str("    <button");
        write_attr(
            &mut html,
            "class",
            &class_list(&["btn btn-primary", &self.hook("btn"), &button.class]),
        );
        write_opt_attr(&mut html, "id", &button.id);
        write_attr(&mut html, "type", "submit");
        let label = button.value.as_deref().unwrap_or(&self.config.submit_label);
        let _ = writeln!(html, ">{}</button>", escape_html(label));
        push_raw(&mut html, "    ", &button.after);
        html.push_str("  </div>\n");
        html
    }

    /// Namespaced CSS hook, e.g. `app-label`
    fn hook(&self, suffix: &str) -> String {
        format!("{}-{suffix}", self.config.namespace)
    }

    fn open_group(&self, html: &mut String, class: &str) {
        let _ = writeln!(
            html,
            "  <div class=\"{}\">",
            escape_attr(&class_list(&["form-group", &self.hook("input-wrapper"), class]))
        );
    }

    fn push_label(&self, html: &mut String, id: &str, label: &str) {
        if label.is_empty() {
            return;
        }
        html.push_str("    <label");
        write_opt_attr(html, "for", id);
        write_attr(html, "class", &self.hook("label"));
        let _ = writeln!(html, ">{}</label>", escape_html(label));
    }

    fn push_choice_label(&self, html: &mut String, id: &str, label: &str) {
        if label.is_empty() {
            return;
        }
        html.push_str("      <label");
        write_opt_attr(html, "for", id);
        write_attr(html, "class", &self.hook("label"));
        let _ = writeln!(html, ">{}</label>", escape_html(label));
    }
}

/// Strip array-submission brackets so names like `tags[]` make valid ids
fn sanitize_name(name: &str) -> String {
    name.replace("[]", "")
}

fn required_marker(title: Option<&str>) -> String {
    format!(
        "<abbr class=\"required\" title=\"{}\">*</abbr>",
        escape_attr(title.unwrap_or_default())
    )
}

fn push_required(html: &mut String, required: bool, title: Option<&str>) {
    if required {
        let _ = writeln!(html, "    {}", required_marker(title));
    }
}

fn push_raw(html: &mut String, indent: &str, raw: &RawHtml) {
    if !raw.is_empty() {
        html.push_str(indent);
        html.push_str(raw.as_str().trim());
        html.push('\n');
    }
}

fn push_inline_raw(html: &mut String, raw: &RawHtml) {
    if !raw.is_empty() {
        html.push(' ');
        html.push_str(raw.as_str().trim());
    }
}

fn write_described_by(html: &mut String, id: &str, hint: &str) {
    if !hint.is_empty() && !id.is_empty() {
        write_attr(html, "aria-describedby", &format!("{id}_help"));
    }
}

fn push_hint(html: &mut String, id: &str, hint: &str) {
    if hint.is_empty() {
        return;
    }
    html.push_str("    <small");
    if !id.is_empty() {
        write_attr(html, "id", &format!("{id}_help"));
    }
    let _ = writeln!(html, " class=\"form-text text-muted\">{}</small>", escape_html(hint));
}
