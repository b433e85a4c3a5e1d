//! Default merging
//!
//! Static per-case defaults live in each case's `Default` impl and are
//! applied by serde for keys a descriptor leaves out. What remains here are
//! the defaults that depend on other keys or on [`FormConfig`]: computed ids,
//! the required-marker tooltip, the default attribute set of text-like
//! inputs and the submit label.
//!
//! A key the caller set always wins, even when it is empty.

use crate::config::FormConfig;

use super::field::{ExtraAttributes, Field, InputField};

impl Field {
    /// Fill every unset key with its default
    ///
    /// Hidden and nonce fields are returned unchanged; they have no defaults.
    #[must_use]
    pub fn with_defaults(self, config: &FormConfig) -> Self {
        match self {
            Self::Text(f) => Self::Text(merge_input(f, config)),
            Self::Email(f) => Self::Email(merge_input(f, config)),
            Self::Password(f) => Self::Password(merge_input(f, config)),
            Self::Number(f) => Self::Number(merge_input(f, config)),
            Self::Textarea(mut f) => {
                fill_id(&mut f.id, &f.name, config);
                fill_title(&mut f.required_title, config);
                Self::Textarea(f)
            }
            Self::File(mut f) => {
                fill_id(&mut f.id, &f.name, config);
                fill_title(&mut f.required_title, config);
                Self::File(f)
            }
            Self::Select(mut f) => {
                fill_id(&mut f.id, &f.name, config);
                fill_title(&mut f.required_title, config);
                Self::Select(f)
            }
            Self::Switch(mut f) => {
                fill_id(&mut f.id, &f.name, config);
                fill_title(&mut f.required_title, config);
                Self::Switch(f)
            }
            Self::Checkbox(mut f) => {
                for choice in &mut f.choices {
                    fill_title(&mut choice.required_title, config);
                }
                Self::Checkbox(f)
            }
            Self::Radio(mut f) => {
                fill_title(&mut f.required_title, config);
                Self::Radio(f)
            }
            Self::Submit(mut f) => {
                if f.value.is_none() {
                    f.value = Some(config.submit_label.clone());
                }
                Self::Submit(f)
            }
            other @ (Self::Hidden(_) | Self::Nonce(_) | Self::Unknown) => other,
        }
    }
}

fn merge_input(mut field: InputField, config: &FormConfig) -> InputField {
    fill_id(&mut field.id, &field.name, config);
    fill_title(&mut field.required_title, config);
    if field.extra_attributes.is_none() {
        let mut attrs = ExtraAttributes::new();
        attrs.insert("maxlength".to_string(), config.text_max_length.clone());
        field.extra_attributes = Some(attrs);
    }
    field
}

fn fill_id(id: &mut Option<String>, name: &str, config: &FormConfig) {
    if id.is_none() {
        *id = Some(config.namespaced(name));
    }
}

fn fill_title(title: &mut Option<String>, config: &FormConfig) {
    if title.is_none() {
        *title = Some(config.required_title.clone());
    }
}
