//! acton-forms: declarative form-markup compiler
//!
//! Field descriptors in, HTML form markup out. Descriptors are authored in
//! code with [`forms::FormBuilder`] or loaded from JSON/TOML with
//! [`forms::FormDefinition`]; [`forms::FormRenderer`] turns them into a
//! markup string for the host page.
//!
//! # Quick Start
//!
//! ```rust
//! use acton_forms::prelude::*;
//!
//! let renderer = FormRenderer::new(FormConfig::default());
//! let html = FormBuilder::new()
//!     .id("contact")
//!     .email("email")
//!         .label("Email")
//!         .required()
//!         .done()
//!     .submit("Send")
//!     .build(&renderer);
//!
//! assert!(html.starts_with(r#"<div class="app_form_container">"#));
//! ```
//!
//! # Configuration
//!
//! Renderer settings (namespace, required-marker tooltip, submit label,
//! default text length) come from [`config::FormConfig`], loadable with
//! figment from TOML files and `ACTON_FORMS_*` environment variables.

// Lint configuration is handled at the workspace level in Cargo.toml

pub mod config;
pub mod error;
pub mod forms;
pub mod observability;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! ```rust
    //! use acton_forms::prelude::*;
    //! ```

    pub use crate::config::{ActonFormsConfig, FormConfig};
    pub use crate::error::FormError;
    pub use crate::forms::{
        Field, FormBuilder, FormDefinition, FormRenderer, FormTag, InputField, InputType, RawHtml,
        TokenEmitter,
    };
}
