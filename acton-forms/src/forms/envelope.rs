//! Form envelope
//!
//! The container `<div>` and `<form>` tag around the rendered fields.
//! [`open`] and [`close`] always come in pairs around one run of fields.

use serde::Deserialize;

use crate::config::FormConfig;

use super::attributes::{class_list, escape_attr, write_attr, write_opt_attr};
use super::field::RawHtml;

/// Attributes of the `<form>` tag and its container
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormTag {
    /// Classes shared by container and form; the first token also names the container
    pub class: String,
    /// Classes for the `<form>` element only
    #[serde(alias = "form_class")]
    pub form_class: String,
    /// Form element id
    pub id: String,
    /// Form action URL
    pub action: Option<String>,
    /// HTTP method
    pub method: Option<String>,
    /// Raw attributes appended to the `<form>` tag
    pub attr: RawHtml,
}

impl FormTag {
    /// Create an empty form tag
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Container class derived from the form's `class`
///
/// The first whitespace-separated token gets a `-container` suffix; the
/// remaining tokens are kept. An empty `class` yields an empty string.
///
/// ```rust
/// use acton_forms::forms::container_class;
///
/// assert_eq!(container_class("login wide"), "login-container wide");
/// assert_eq!(container_class(""), "");
/// ```
#[must_use]
pub fn container_class(class: &str) -> String {
    let mut tokens = class.split_whitespace();
    let Some(first) = tokens.next() else {
        return String::new();
    };
    std::iter::once(format!("{first}-container"))
        .chain(tokens.map(str::to_string))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Opening markup: container `<div>` and `<form>` tag
#[must_use]
pub fn open(tag: &FormTag, config: &FormConfig) -> String {
    let ns = &config.namespace;
    let mut html = String::with_capacity(256);

    let container = class_list(&[&format!("{ns}_form_container"), &container_class(&tag.class)]);
    html.push_str("<div class=\"");
    html.push_str(&escape_attr(&container));
    html.push_str("\">\n");

    html.push_str("<form");
    if let Some(ref action) = tag.action {
        write_attr(&mut html, "action", action);
    }
    if let Some(ref method) = tag.method {
        write_attr(&mut html, "method", method);
    }
    write_attr(
        &mut html,
        "class",
        &class_list(&[&format!("{ns}_form"), &tag.class, &tag.form_class]),
    );
    write_opt_attr(&mut html, "id", &tag.id);
    if !tag.attr.is_empty() {
        html.push(' ');
        html.push_str(tag.attr.as_str().trim());
    }
    html.push_str(">\n");
    html
}

/// Closing markup matching [`open`]
#[must_use]
pub fn close() -> String {
    "</form>\n</div>\n".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_class() {
        assert_eq!(container_class("contact"), "contact-container");
        assert_eq!(container_class("  contact   dark "), "contact-container dark");
        assert_eq!(container_class("   "), "");
    }

    #[test]
    fn test_open_full_tag() {
        let tag = FormTag {
            class: "contact dark".into(),
            form_class: "needs-validation".into(),
            id: "contact-form".into(),
            action: Some("/contact".into()),
            method: Some("POST".into()),
            attr: RawHtml::new("novalidate data-step=\"1\""),
        };
        let html = open(&tag, &FormConfig::default());

        assert_eq!(
            html,
            "<div class=\"app_form_container contact-container dark\">\n\
             <form action=\"/contact\" method=\"POST\" class=\"app_form contact dark needs-validation\" \
             id=\"contact-form\" novalidate data-step=\"1\">\n"
        );
    }

    #[test]
    fn test_open_empty_tag() {
        let html = open(&FormTag::new(), &FormConfig::default());
        assert_eq!(
            html,
            "<div class=\"app_form_container\">\n<form class=\"app_form\">\n"
        );
    }

    #[test]
    fn test_close_pairs_with_open() {
        assert_eq!(close(), "</form>\n</div>\n");
    }
}
