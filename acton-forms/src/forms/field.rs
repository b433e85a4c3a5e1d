//! Form field descriptors
//!
//! A [`Field`] is a tagged union with one case per supported control. Each
//! case carries only its own attributes; keys the caller leaves out fall back
//! to the case's defaults (see [`Field::with_defaults`]).
//!
//! Descriptors deserialize from the same key layout used by hand-authored
//! form definitions:
//!
//! ```rust
//! use acton_forms::forms::Field;
//!
//! let field: Field = serde_json::from_value(serde_json::json!({
//!     "type": "email",
//!     "name": "email",
//!     "label": "Email address",
//!     "required": true,
//! }))
//! .unwrap();
//! assert_eq!(field.type_name(), "email");
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Free-form attributes emitted on a control, in insertion order
pub type ExtraAttributes = IndexMap<String, String>;

/// Keys a descriptor carried that this version does not understand
pub type Passthrough = Map<String, Value>;

// =============================================================================
// Trusted raw markup
// =============================================================================

/// Trusted markup fragment
///
/// Emitted exactly as given, never escaped. Used for `before`, `after` and
/// `visibility`, which exist precisely so callers can inject their own markup.
/// Plain text values (labels, hints, placeholders) use `String` and are
/// escaped on output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RawHtml(pub String);

impl RawHtml {
    /// Wrap a trusted fragment
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The fragment as written
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether there is anything to emit
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for RawHtml {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RawHtml {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RawHtml {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// =============================================================================
// Input types
// =============================================================================

/// HTML input types rendered by the text-like renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    /// Text input (default)
    #[default]
    Text,
    /// Email input
    Email,
    /// Password input (masked)
    Password,
    /// Number input
    Number,
}

impl InputType {
    /// Get the HTML type attribute value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
        }
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Field cases
// =============================================================================

/// One form control descriptor
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Field {
    /// `<input type="text">`
    Text(InputField),
    /// `<input type="email">`
    Email(InputField),
    /// `<input type="password">`
    Password(InputField),
    /// `<input type="number">`
    Number(InputField),
    /// Multi-line text
    Textarea(TextareaField),
    /// File upload
    File(FileField),
    /// Dropdown
    Select(SelectField),
    /// Group of independent checkboxes
    Checkbox(CheckboxGroup),
    /// Group of mutually exclusive radio buttons
    Radio(RadioGroup),
    /// Styled boolean toggle
    Switch(SwitchField),
    /// Hidden `name`/`value` pairs
    Hidden(HiddenFields),
    /// Security token, emitted by the host
    Nonce(NonceField),
    /// Submit button
    Submit(SubmitButton),
    /// Any `type` this renderer does not know; renders nothing
    #[serde(other)]
    Unknown,
}

impl Field {
    /// The `type` discriminator as it appears in descriptors
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Email(_) => "email",
            Self::Password(_) => "password",
            Self::Number(_) => "number",
            Self::Textarea(_) => "textarea",
            Self::File(_) => "file",
            Self::Select(_) => "select",
            Self::Checkbox(_) => "checkbox",
            Self::Radio(_) => "radio",
            Self::Switch(_) => "switch",
            Self::Hidden(_) => "hidden",
            Self::Nonce(_) => "nonce",
            Self::Submit(_) => "submit",
            Self::Unknown => "unknown",
        }
    }

    /// Sort key (defaults to 0)
    #[must_use]
    pub const fn order(&self) -> i64 {
        match self {
            Self::Text(f) | Self::Email(f) | Self::Password(f) | Self::Number(f) => f.order,
            Self::Textarea(f) => f.order,
            Self::File(f) => f.order,
            Self::Select(f) => f.order,
            Self::Checkbox(f) => f.order,
            Self::Radio(f) => f.order,
            Self::Switch(f) => f.order,
            Self::Hidden(f) => f.order,
            Self::Nonce(f) => f.order,
            Self::Submit(f) => f.order,
            Self::Unknown => 0,
        }
    }

    /// Build a text-like field of the given input type
    #[must_use]
    pub fn input(input_type: InputType, field: InputField) -> Self {
        match input_type {
            InputType::Text => Self::Text(field),
            InputType::Email => Self::Email(field),
            InputType::Password => Self::Password(field),
            InputType::Number => Self::Number(field),
        }
    }
}

/// Text, email, password and number inputs
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputField {
    /// Label text
    pub label: String,
    /// Submission name
    pub name: String,
    /// Element id (computed from `name` when absent)
    pub id: Option<String>,
    /// Whether the field is required
    #[serde(deserialize_with = "lenient::flag")]
    pub required: bool,
    /// CSS class(es) for the wrapper
    pub class: String,
    /// Markup emitted before the label
    pub before: RawHtml,
    /// Markup emitted after the control
    pub after: RawHtml,
    /// Help text shown below the control
    pub hint: String,
    /// Sort key
    #[serde(deserialize_with = "lenient::integer")]
    pub order: i64,
    /// Placeholder text
    pub placeholder: String,
    /// Current value
    pub value: String,
    /// Value that wins over `value` when non-empty
    #[serde(alias = "default_value")]
    pub default_value: String,
    /// Autocomplete attribute
    pub autocomplete: String,
    /// Raw attribute injection, e.g. `hidden` or `style="display:none"`
    pub visibility: RawHtml,
    /// Tooltip of the required marker
    #[serde(alias = "abbr")]
    pub required_title: Option<String>,
    /// Extra attributes; replaces the default set wholesale when present
    #[serde(alias = "extra_attr", deserialize_with = "lenient::optional")]
    pub extra_attributes: Option<ExtraAttributes>,
    /// Unrecognized keys, kept but never rendered
    #[serde(flatten)]
    pub passthrough: Passthrough,
}

impl Default for InputField {
    fn default() -> Self {
        Self {
            label: String::new(),
            name: String::new(),
            id: None,
            required: false,
            class: String::new(),
            before: RawHtml::default(),
            after: RawHtml::default(),
            hint: String::new(),
            order: 0,
            placeholder: String::new(),
            value: String::new(),
            default_value: String::new(),
            autocomplete: "on".to_string(),
            visibility: RawHtml::default(),
            required_title: None,
            extra_attributes: None,
            passthrough: Passthrough::new(),
        }
    }
}

impl InputField {
    /// Create an input field with a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The value shown in the control: `default_value` when set, else `value`
    #[must_use]
    pub fn effective_value(&self) -> &str {
        if self.default_value.is_empty() {
            &self.value
        } else {
            &self.default_value
        }
    }
}

/// Multi-line text area
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextareaField {
    /// Label text
    pub label: String,
    /// Submission name
    pub name: String,
    /// Element id (computed from `name` when absent)
    pub id: Option<String>,
    /// Whether the field is required
    #[serde(deserialize_with = "lenient::flag")]
    pub required: bool,
    /// CSS class(es) for the wrapper
    pub class: String,
    /// Markup emitted before the label
    pub before: RawHtml,
    /// Markup emitted after the control
    pub after: RawHtml,
    /// Help text shown below the control
    pub hint: String,
    /// Sort key
    #[serde(deserialize_with = "lenient::integer")]
    pub order: i64,
    /// Placeholder text
    pub placeholder: String,
    /// Initial content
    pub value: String,
    /// Autocomplete attribute
    pub autocomplete: String,
    /// Number of visible text lines
    #[serde(deserialize_with = "lenient::count")]
    pub rows: u32,
    /// Tooltip of the required marker
    #[serde(alias = "abbr")]
    pub required_title: Option<String>,
    /// Extra attributes
    #[serde(alias = "extra_attr", deserialize_with = "lenient::map")]
    pub extra_attributes: ExtraAttributes,
    /// Unrecognized keys, kept but never rendered
    #[serde(flatten)]
    pub passthrough: Passthrough,
}

impl Default for TextareaField {
    fn default() -> Self {
        Self {
            label: String::new(),
            name: String::new(),
            id: None,
            required: false,
            class: String::new(),
            before: RawHtml::default(),
            after: RawHtml::default(),
            hint: String::new(),
            order: 0,
            placeholder: String::new(),
            value: String::new(),
            autocomplete: "on".to_string(),
            rows: 3,
            required_title: None,
            extra_attributes: ExtraAttributes::new(),
            passthrough: Passthrough::new(),
        }
    }
}

/// File upload input
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileField {
    /// Label text
    pub label: String,
    /// Submission name
    pub name: String,
    /// Element id (computed from `name` when absent)
    pub id: Option<String>,
    /// Whether the field is required
    #[serde(deserialize_with = "lenient::flag")]
    pub required: bool,
    /// CSS class(es) for the wrapper
    pub class: String,
    /// Markup emitted before the control
    pub before: RawHtml,
    /// Markup emitted after the control
    pub after: RawHtml,
    /// Help text shown below the control
    pub hint: String,
    /// Sort key
    #[serde(deserialize_with = "lenient::integer")]
    pub order: i64,
    /// Accepted MIME types or extensions, e.g. `image/png,.jpg`
    pub accept: String,
    /// Allow selecting several files
    #[serde(deserialize_with = "lenient::flag")]
    pub multiple: bool,
    /// Tooltip of the required marker
    #[serde(alias = "abbr")]
    pub required_title: Option<String>,
    /// Extra attributes
    #[serde(alias = "extra_attr", deserialize_with = "lenient::map")]
    pub extra_attributes: ExtraAttributes,
    /// Unrecognized keys, kept but never rendered
    #[serde(flatten)]
    pub passthrough: Passthrough,
}

/// Dropdown select
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectField {
    /// Label text
    pub label: String,
    /// Submission name
    pub name: String,
    /// Element id (computed from `name` when absent)
    pub id: Option<String>,
    /// Whether the field is required
    #[serde(deserialize_with = "lenient::flag")]
    pub required: bool,
    /// CSS class(es) for the wrapper
    pub class: String,
    /// Markup emitted before the label
    pub before: RawHtml,
    /// Markup emitted after the control
    pub after: RawHtml,
    /// Help text shown below the control
    pub hint: String,
    /// Sort key
    #[serde(deserialize_with = "lenient::integer")]
    pub order: i64,
    /// Text of the disabled placeholder option
    pub placeholder: String,
    /// Options as `value => label`, in display order
    #[serde(deserialize_with = "lenient::labels")]
    pub options: IndexMap<String, String>,
    /// Option value rendered as selected; suppresses the placeholder
    #[serde(alias = "default_option")]
    pub default_option: String,
    /// Suppresses the placeholder without selecting anything
    #[serde(alias = "select_option")]
    pub select_option: String,
    /// Allow multiple selections
    #[serde(deserialize_with = "lenient::flag")]
    pub multiple: bool,
    /// Tooltip of the required marker
    #[serde(alias = "abbr")]
    pub required_title: Option<String>,
    /// Extra attributes
    #[serde(alias = "extra_attr", deserialize_with = "lenient::map")]
    pub extra_attributes: ExtraAttributes,
    /// Unrecognized keys, kept but never rendered
    #[serde(flatten)]
    pub passthrough: Passthrough,
}

impl SelectField {
    /// Whether the disabled placeholder option is emitted
    #[must_use]
    pub fn shows_placeholder(&self) -> bool {
        self.default_option.is_empty() && self.select_option.is_empty()
    }
}

/// Group of checkboxes, each with its own name
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckboxGroup {
    /// CSS class(es) for the group wrapper
    pub class: String,
    /// Markup emitted before the group
    pub before: RawHtml,
    /// Markup emitted after the group
    pub after: RawHtml,
    /// Sort key
    #[serde(deserialize_with = "lenient::integer")]
    pub order: i64,
    /// The checkboxes
    pub choices: Vec<CheckboxChoice>,
    /// Unrecognized keys, kept but never rendered
    #[serde(flatten)]
    pub passthrough: Passthrough,
}

/// One checkbox within a [`CheckboxGroup`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckboxChoice {
    /// Label text
    pub label: String,
    /// Submission name; `tags[]` style array names are allowed
    pub name: String,
    /// Submitted value
    pub value: String,
    /// Initially checked
    #[serde(deserialize_with = "lenient::flag")]
    pub checked: bool,
    /// Element id (synthesized from `name` and position when absent)
    pub id: Option<String>,
    /// Whether this checkbox must be checked
    #[serde(deserialize_with = "lenient::flag")]
    pub required: bool,
    /// CSS class(es) for the choice wrapper
    pub class: String,
    /// Markup emitted before the control
    pub before: RawHtml,
    /// Markup emitted after the label
    pub after: RawHtml,
    /// Sort key within the group
    #[serde(deserialize_with = "lenient::integer")]
    pub order: i64,
    /// Tooltip of the required marker
    #[serde(alias = "abbr")]
    pub required_title: Option<String>,
    /// Extra attributes
    #[serde(alias = "extra_attr", deserialize_with = "lenient::map")]
    pub extra_attributes: ExtraAttributes,
}

/// Group of radio buttons sharing one name
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadioGroup {
    /// Group heading
    pub title: String,
    /// Submission name shared by every choice
    pub name: String,
    /// CSS class(es) for the group wrapper
    pub class: String,
    /// Markup emitted before the group
    pub before: RawHtml,
    /// Markup emitted after the group
    pub after: RawHtml,
    /// Whether a choice must be selected (defaults to `true`)
    #[serde(deserialize_with = "lenient::flag")]
    pub required: bool,
    /// Tooltip of the required marker
    #[serde(alias = "abbr")]
    pub required_title: Option<String>,
    /// Sort key
    #[serde(deserialize_with = "lenient::integer")]
    pub order: i64,
    /// The radio buttons
    pub choices: Vec<RadioChoice>,
    /// Unrecognized keys, kept but never rendered
    #[serde(flatten)]
    pub passthrough: Passthrough,
}

impl Default for RadioGroup {
    fn default() -> Self {
        Self {
            title: String::new(),
            name: String::new(),
            class: String::new(),
            before: RawHtml::default(),
            after: RawHtml::default(),
            required: true,
            required_title: None,
            order: 0,
            choices: Vec::new(),
            passthrough: Passthrough::new(),
        }
    }
}

/// One radio button within a [`RadioGroup`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadioChoice {
    /// Label text
    pub label: String,
    /// Submitted value
    pub value: String,
    /// Initially selected
    #[serde(deserialize_with = "lenient::flag")]
    pub checked: bool,
    /// Element id (synthesized from the group name and position when absent)
    pub id: Option<String>,
    /// CSS class(es) for the choice wrapper
    pub class: String,
    /// Markup emitted before the control
    pub before: RawHtml,
    /// Markup emitted after the label
    pub after: RawHtml,
    /// Sort key within the group
    #[serde(deserialize_with = "lenient::integer")]
    pub order: i64,
    /// Extra attributes
    #[serde(alias = "extra_attr", deserialize_with = "lenient::map")]
    pub extra_attributes: ExtraAttributes,
}

/// Styled boolean toggle
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwitchField {
    /// Label text
    pub label: String,
    /// Submission name
    pub name: String,
    /// Element id (computed from `name` when absent)
    pub id: Option<String>,
    /// Whether the toggle must be on
    #[serde(deserialize_with = "lenient::flag")]
    pub required: bool,
    /// CSS class(es) for the wrapper
    pub class: String,
    /// Markup emitted before the control
    pub before: RawHtml,
    /// Markup emitted after the label
    pub after: RawHtml,
    /// Help text shown below the control
    pub hint: String,
    /// Initially on
    #[serde(deserialize_with = "lenient::flag")]
    pub checked: bool,
    /// Sort key
    #[serde(deserialize_with = "lenient::integer")]
    pub order: i64,
    /// Tooltip of the required marker
    #[serde(alias = "abbr")]
    pub required_title: Option<String>,
    /// Extra attributes
    #[serde(alias = "extra_attr", deserialize_with = "lenient::map")]
    pub extra_attributes: ExtraAttributes,
    /// Unrecognized keys, kept but never rendered
    #[serde(flatten)]
    pub passthrough: Passthrough,
}

/// Hidden inputs; no wrapper, label or defaults
///
/// Pairs go in `inputs`. A descriptor may instead carry a single pair as
/// top-level `name`/`value`; when both forms are present the top-level pair
/// comes first.
///
/// ```rust
/// use acton_forms::forms::{Field, HiddenInput};
///
/// let field: Field = serde_json::from_value(serde_json::json!({
///     "type": "hidden",
///     "name": "action",
///     "value": "save",
///     "inputs": [{"name": "step", "value": 2}],
/// }))
/// .unwrap();
///
/// let Field::Hidden(hidden) = field else { unreachable!() };
/// assert_eq!(
///     hidden.inputs,
///     [HiddenInput::new("action", "save"), HiddenInput::new("step", "2")]
/// );
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "HiddenFieldsRepr")]
pub struct HiddenFields {
    /// The `name`/`value` pairs, one hidden control each
    pub inputs: Vec<HiddenInput>,
    /// Sort key
    pub order: i64,
    /// Unrecognized keys, kept but never rendered
    pub passthrough: Passthrough,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HiddenFieldsRepr {
    #[serde(default)]
    inputs: Vec<HiddenInput>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    value: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    order: i64,
    #[serde(flatten)]
    passthrough: Passthrough,
}

impl From<HiddenFieldsRepr> for HiddenFields {
    fn from(repr: HiddenFieldsRepr) -> Self {
        let mut inputs = Vec::with_capacity(repr.inputs.len() + 1);
        if let Some(name) = repr.name.filter(|name| !name.is_empty()) {
            inputs.push(HiddenInput::new(name, repr.value.unwrap_or_default()));
        }
        inputs.extend(repr.inputs);
        Self {
            inputs,
            order: repr.order,
            passthrough: repr.passthrough,
        }
    }
}

/// One hidden control
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HiddenInput {
    /// Submission name
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    /// Submitted value
    #[serde(deserialize_with = "lenient::text")]
    pub value: String,
}

impl HiddenInput {
    /// Create a hidden pair
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Security token field, forwarded to the host's token emitter
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonceField {
    /// Name of the submitted token field
    pub name: String,
    /// Action the token is bound to
    pub value: String,
    /// Sort key
    #[serde(default, deserialize_with = "lenient::integer")]
    pub order: i64,
}

/// Submit button
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubmitButton {
    /// Button label (defaults to the configured submit label)
    pub value: Option<String>,
    /// CSS class(es) for the button
    pub class: String,
    /// Element id
    pub id: String,
    /// Markup emitted before the button
    pub before: RawHtml,
    /// Markup emitted after the button
    pub after: RawHtml,
    /// Sort key
    #[serde(deserialize_with = "lenient::integer")]
    pub order: i64,
    /// Unrecognized keys, kept but never rendered
    #[serde(flatten)]
    pub passthrough: Passthrough,
}

macro_rules! impl_into_field {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Field {
                fn from(field: $ty) -> Self {
                    Self::$variant(field)
                }
            }
        )*
    };
}

impl_into_field! {
    TextareaField => Textarea,
    FileField => File,
    SelectField => Select,
    CheckboxGroup => Checkbox,
    RadioGroup => Radio,
    SwitchField => Switch,
    HiddenFields => Hidden,
    NonceField => Nonce,
    SubmitButton => Submit,
}

/// Lenient scalar decoding for hand-authored descriptors
///
/// Values are often written with the wrong scalar type (`"rows": "5"`,
/// `"checked": "checked"`, numeric option labels). These helpers coerce
/// such scalars instead of failing the whole field. Arrays and objects
/// where a scalar is expected are still errors.
mod lenient {
    use serde::de::Error as _;

    use super::{Deserialize, Deserializer, ExtraAttributes, IndexMap, Value};

    /// String form of a scalar; `None` for `null`
    fn scalar_text<E: serde::de::Error>(value: Value) -> Result<Option<String>, E> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            Value::Bool(b) => Ok(Some(b.to_string())),
            Value::Number(n) => Ok(Some(n.to_string())),
            other => Err(E::custom(format!("expected a scalar, found {other}"))),
        }
    }

    /// Attribute map; `null` entries are dropped
    pub fn map<'de, D>(deserializer: D) -> Result<ExtraAttributes, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut attrs = ExtraAttributes::with_capacity(raw.len());
        for (key, value) in raw {
            if let Some(value) = scalar_text::<D::Error>(value)? {
                attrs.insert(key, value);
            }
        }
        Ok(attrs)
    }

    pub fn optional<'de, D>(deserializer: D) -> Result<Option<ExtraAttributes>, D::Error>
    where
        D: Deserializer<'de>,
    {
        map(deserializer).map(Some)
    }

    /// Select options; a `null` label becomes empty
    pub fn labels<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut options = IndexMap::with_capacity(raw.len());
        for (value, label) in raw {
            options.insert(value, scalar_text::<D::Error>(label)?.unwrap_or_default());
        }
        Ok(options)
    }

    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(scalar_text::<D::Error>(Value::deserialize(deserializer)?)?.unwrap_or_default())
    }

    pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        scalar_text(Value::deserialize(deserializer)?)
    }

    /// `true`, non-zero numbers and non-empty strings are set; `""`, `"0"`,
    /// `"false"`, `"off"`, `"no"` and `null` are not
    pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(false),
            Value::Bool(b) => Ok(b),
            Value::Number(n) => Ok(n.as_f64().is_some_and(|n| n.abs() > 0.0)),
            Value::String(s) => Ok(!matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "" | "0" | "false" | "off" | "no"
            )),
            other => Err(D::Error::custom(format!("expected a boolean, found {other}"))),
        }
    }

    /// Integer or numeric string; `null` and `""` are 0
    pub fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(0),
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| D::Error::custom(format!("expected an integer, found {n}"))),
            Value::String(s) if s.trim().is_empty() => Ok(0),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| D::Error::custom(format!("expected an integer, found \"{s}\""))),
            other => Err(D::Error::custom(format!("expected an integer, found {other}"))),
        }
    }

    /// Non-negative integer that fits a `u32`
    pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = integer(deserializer)?;
        u32::try_from(n).map_err(|_| D::Error::custom(format!("expected a count, found {n}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input_type_as_str() {
        assert_eq!(InputType::Email.as_str(), "email");
        assert_eq!(InputType::Number.to_string(), "number");
    }

    #[test]
    fn test_deserialize_text_field() {
        let field: Field = serde_json::from_value(json!({
            "type": "text",
            "name": "first_name",
            "label": "First name",
            "order": 2,
        }))
        .unwrap();

        let Field::Text(input) = &field else {
            panic!("expected a text field, got {field:?}");
        };
        assert_eq!(input.name, "first_name");
        assert_eq!(input.autocomplete, "on");
        assert!(input.id.is_none());
        assert!(input.extra_attributes.is_none());
        assert_eq!(field.order(), 2);
    }

    #[test]
    fn test_unknown_type_maps_to_unknown() {
        let field: Field = serde_json::from_value(json!({"type": "colorpicker", "name": "c"})).unwrap();
        assert!(matches!(field, Field::Unknown));
        assert_eq!(field.order(), 0);
    }

    #[test]
    fn test_legacy_keys_are_accepted() {
        let field: Field = serde_json::from_value(json!({
            "type": "select",
            "name": "country",
            "default_option": "eg",
            "extra_attr": {"data-live": true, "tabindex": 3, "skip": null},
            "abbr": "Pick one",
        }))
        .unwrap();

        let Field::Select(select) = field else {
            panic!("expected a select field");
        };
        assert_eq!(select.default_option, "eg");
        assert_eq!(select.required_title.as_deref(), Some("Pick one"));
        assert_eq!(select.extra_attributes.get("data-live").map(String::as_str), Some("true"));
        assert_eq!(select.extra_attributes.get("tabindex").map(String::as_str), Some("3"));
        assert!(!select.extra_attributes.contains_key("skip"));
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let field: Field = serde_json::from_value(json!({
            "type": "switch",
            "name": "newsletter",
            "tracking": "signup-v2",
        }))
        .unwrap();

        let Field::Switch(switch) = field else {
            panic!("expected a switch field");
        };
        assert_eq!(switch.passthrough.get("tracking"), Some(&json!("signup-v2")));
    }

    #[test]
    fn test_options_keep_insertion_order() {
        let field: Field = serde_json::from_str(
            r#"{"type": "select", "options": {"z": "Zed", "a": "Ay", "m": "Em"}}"#,
        )
        .unwrap();
        let Field::Select(select) = field else {
            panic!("expected a select field");
        };
        let keys: Vec<&str> = select.options.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_radio_required_by_default() {
        assert!(RadioGroup::default().required);
        let field: Field = serde_json::from_value(json!({"type": "radio", "name": "size"})).unwrap();
        let Field::Radio(radio) = field else {
            panic!("expected a radio field");
        };
        assert!(radio.required);
    }

    #[test]
    fn test_hidden_pair_requires_name_and_value() {
        let result: Result<Field, _> = serde_json::from_value(json!({
            "type": "hidden",
            "inputs": [{"name": "action"}],
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_effective_value_prefers_default_value() {
        let mut field = InputField::new("age");
        field.value = "30".into();
        assert_eq!(field.effective_value(), "30");
        field.default_value = "18".into();
        assert_eq!(field.effective_value(), "18");
    }

    #[test]
    fn test_raw_html_display() {
        let raw = RawHtml::new("<hr>");
        assert_eq!(format!("{raw}"), "<hr>");
        assert!(RawHtml::default().is_empty());
    }
}
