//! Declarative form rendering
//!
//! Forms are described as a list of [`Field`] descriptors, one tagged case
//! per control, plus a [`FormTag`] for the envelope. Rendering:
//!
//! 1. sorts fields (and the choices of checkbox/radio groups) by `order`,
//!    keeping authored order on ties
//! 2. fills unset keys with their defaults
//! 3. dispatches each field to the renderer for its type
//! 4. wraps the result in the container `<div>` and `<form>` tag
//!
//! # Quick Start
//!
//! ```rust
//! use acton_forms::forms::FormBuilder;
//!
//! let form = FormBuilder::new()
//!     .class("signup")
//!     .text("username")
//!         .label("Username")
//!         .required()
//!         .done()
//!     .number("age")
//!         .label("Age")
//!         .attr("min", "13")
//!         .done()
//!     .submit("Sign Up")
//!     .build_default();
//!
//! println!("{form}");
//! ```
//!
//! # Definitions
//!
//! The same descriptors load from JSON or TOML:
//!
//! ```rust
//! use acton_forms::forms::{FormDefinition, FormRenderer};
//!
//! let definition = FormDefinition::from_json_str(r#"{
//!     "form": {"class": "search"},
//!     "fields": [
//!         {"type": "text", "name": "q", "placeholder": "Search"},
//!         {"type": "submit", "value": "Go"}
//!     ]
//! }"#)?;
//!
//! let html = definition.render(&FormRenderer::default());
//! assert!(html.contains(r#"placeholder="Search""#));
//! # Ok::<(), acton_forms::error::FormError>(())
//! ```

mod attributes;
mod builder;
mod defaults;
mod definition;
mod envelope;
mod field;
mod order;
mod render;
mod token;

pub use attributes::{compile_attributes, AttributePolicy};
pub use builder::{FormBuilder, InputFieldBuilder};
pub use definition::FormDefinition;
pub use envelope::{close, container_class, open, FormTag};
pub use field::{
    CheckboxChoice, CheckboxGroup, ExtraAttributes, Field, FileField, HiddenFields, HiddenInput,
    InputField, InputType, NonceField, Passthrough, RadioChoice, RadioGroup, RawHtml, SelectField,
    SubmitButton, SwitchField, TextareaField,
};
pub use order::order_fields;
pub use render::FormRenderer;
pub use token::TokenEmitter;
