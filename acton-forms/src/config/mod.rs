//! Configuration management for acton-forms
//!
//! Settings that shape the emitted markup without belonging to any single
//! field: the id namespace, the required-marker tooltip text and the default
//! submit label. Configuration is loaded from multiple sources with clear
//! precedence:
//!
//! 1. Environment variables (highest priority, `ACTON_FORMS_` prefix, `__` for nesting)
//! 2. `./config.toml` (development)
//! 3. `~/.config/acton-forms/{service}/config.toml` (user config, XDG)
//! 4. `/etc/acton-forms/{service}/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # config.toml
//! [forms]
//! namespace = "shop"
//! required_title = "Required"
//! submit_label = "Send"
//! text_max_length = "80"
//! ```
//!
//! # Usage
//!
//! ```rust
//! use acton_forms::config::ActonFormsConfig;
//!
//! let config = ActonFormsConfig::default();
//! assert_eq!(config.forms.namespace, "app");
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Renderer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Prefix for computed element ids and CSS hooks (`<namespace>_<name>`)
    pub namespace: String,

    /// Tooltip text of the `*` required marker
    pub required_title: String,

    /// Label of a submit button that carries no `value`
    pub submit_label: String,

    /// Default `maxlength` attribute for text-like inputs without `extraAttributes`
    pub text_max_length: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            namespace: "app".to_string(),
            required_title: "This field is required".to_string(),
            submit_label: "Submit".to_string(),
            text_max_length: "50".to_string(),
        }
    }
}

impl FormConfig {
    /// Namespaced element identifier for `name`
    ///
    /// Returns an empty string when `name` is empty, so a missing name never
    /// produces a dangling `<namespace>_` id.
    #[must_use]
    pub fn namespaced(&self, name: &str) -> String {
        if name.is_empty() {
            String::new()
        } else {
            format!("{}_{name}", self.namespace)
        }
    }
}

/// Complete acton-forms configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActonFormsConfig {
    /// Renderer settings
    #[serde(default)]
    pub forms: FormConfig,
}

impl ActonFormsConfig {
    /// Load configuration for a specific service
    ///
    /// Searches XDG-compliant locations, then `./config.toml`, then the
    /// environment, each layer overriding the previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file exists but cannot be read or parsed
    /// - A value has the wrong type
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use acton_forms::config::ActonFormsConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = ActonFormsConfig::load_for_service("storefront")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_for_service(service_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new()
            // 5. Start with defaults (lowest priority)
            .merge(Toml::string(&toml::to_string(&Self::default())?));

        // 4. System config
        let system_config = PathBuf::from("/etc/acton-forms")
            .join(service_name)
            .join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        // 3. User config
        let user_config = Self::recommended_path(service_name);
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        // 2. Local config
        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        // 1. Environment variables
        figment = figment.merge(Env::prefixed("ACTON_FORMS_").split("__").lowercase(true));

        let config = figment.extract()?;
        tracing::debug!(service = service_name, "Loaded form configuration");
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or a value has the
    /// wrong type. A missing file leaves the defaults in place.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use acton_forms::config::ActonFormsConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = ActonFormsConfig::load_from("./config/forms.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        let config = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path))
            .merge(Env::prefixed("ACTON_FORMS_").split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// Get the recommended XDG config path for a service
    ///
    /// ```rust
    /// use acton_forms::config::ActonFormsConfig;
    ///
    /// let path = ActonFormsConfig::recommended_path("storefront");
    /// assert!(path.ends_with("config.toml"));
    /// ```
    #[must_use]
    pub fn recommended_path(service_name: &str) -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| {
                config_dir
                    .join("acton-forms")
                    .join(service_name)
                    .join("config.toml")
            },
        )
    }
}
