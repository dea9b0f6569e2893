//! Field definitions — the items moved between containers.
//!
//! A [`Field`] is one entry in the form being assembled: a kind (text input,
//! checkbox, select, ...), display label, runtime form key, and a small set
//! of kind-specific properties. The kind-specific properties live in
//! [`FieldExtra`], a tagged variant over the kind, so a select's option list
//! or a number's range simply does not exist on fields of other kinds.

use std::fmt;

use formboard_core::FieldId;

/// The closed set of field kinds a form can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Email address input.
    Email,
    /// Password input (masked).
    Password,
    /// Telephone number input.
    Tel,
    /// Date picker.
    Date,
    /// Numeric input with optional range and step.
    Number,
    /// Boolean checkbox.
    Checkbox,
    /// Drop-down selection from a fixed option list.
    Select,
    /// Multi-line text area.
    TextArea,
}

impl FieldKind {
    /// All kinds, in the order the editor's kind picker presents them.
    pub const ALL: [FieldKind; 9] = [
        FieldKind::Text,
        FieldKind::Email,
        FieldKind::Password,
        FieldKind::Tel,
        FieldKind::Number,
        FieldKind::Date,
        FieldKind::Checkbox,
        FieldKind::Select,
        FieldKind::TextArea,
    ];

    /// Human-readable name for UI labels.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Tel => "Telephone",
            Self::Date => "Date",
            Self::Number => "Number",
            Self::Checkbox => "Checkbox",
            Self::Select => "Select",
            Self::TextArea => "Text Area",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind-specific field properties.
///
/// Only the variant matching the field's kind is ever present, which keeps
/// "property meaningless for this kind" states unrepresentable.
#[derive(Debug, Clone)]
pub enum FieldExtra {
    /// Kinds with no extra properties.
    None,
    /// Option list for [`FieldKind::Select`].
    Select {
        /// Ordered options, as shown in the drop-down.
        options: Vec<String>,
    },
    /// Range constraints for [`FieldKind::Number`].
    ///
    /// Unset constraints are NaN; the renderer forwards only finite values
    /// to the native input. Values arrive from free-text editor input with
    /// no validation gate, so NaN can also mean "the user typed garbage".
    Number {
        /// Minimum accepted value.
        min: f64,
        /// Maximum accepted value.
        max: f64,
        /// Step between values.
        step: f64,
    },
    /// Validation pattern for [`FieldKind::Tel`].
    Tel {
        /// Regex source string forwarded to the native input.
        pattern: String,
    },
}

impl FieldExtra {
    /// Returns the blank variant appropriate for a kind.
    pub fn default_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Select => Self::Select {
                options: Vec::new(),
            },
            FieldKind::Number => Self::Number {
                min: f64::NAN,
                max: f64::NAN,
                step: f64::NAN,
            },
            FieldKind::Tel => Self::Tel {
                pattern: String::new(),
            },
            _ => Self::None,
        }
    }

    /// Returns `true` if this variant is the one a field of `kind` carries.
    pub fn matches(&self, kind: FieldKind) -> bool {
        match self {
            Self::Select { .. } => kind == FieldKind::Select,
            Self::Number { .. } => kind == FieldKind::Number,
            Self::Tel { .. } => kind == FieldKind::Tel,
            Self::None => !matches!(
                kind,
                FieldKind::Select | FieldKind::Number | FieldKind::Tel
            ),
        }
    }
}

// NaN placeholders must not break whole-field comparison, so numbers are
// compared bitwise.
impl PartialEq for FieldExtra {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Select { options: a }, Self::Select { options: b }) => a == b,
            (
                Self::Number {
                    min: a_min,
                    max: a_max,
                    step: a_step,
                },
                Self::Number {
                    min: b_min,
                    max: b_max,
                    step: b_step,
                },
            ) => {
                a_min.to_bits() == b_min.to_bits()
                    && a_max.to_bits() == b_max.to_bits()
                    && a_step.to_bits() == b_step.to_bits()
            }
            (Self::Tel { pattern: a }, Self::Tel { pattern: b }) => a == b,
            _ => false,
        }
    }
}

/// A single field definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Unique id, stable for the field's lifetime.
    pub id: FieldId,
    /// What kind of input this field renders as.
    pub kind: FieldKind,
    /// Display label shown above the input.
    pub label: String,
    /// Runtime form key. Not required to be unique, but value collection is
    /// ambiguous when it isn't.
    pub name: String,
    /// Whether the runtime form marks this input as required.
    pub required: bool,
    /// Placeholder text for empty text-like inputs.
    pub placeholder: Option<String>,
    /// Help text shown next to the label.
    pub description: Option<String>,
    /// Kind-specific properties.
    pub extra: FieldExtra,
}

impl Field {
    /// Creates a field of the given kind with a fresh unique id.
    pub fn new(kind: FieldKind, label: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: FieldId::next(),
            kind,
            label: label.into(),
            name: name.into(),
            required: false,
            placeholder: None,
            description: None,
            extra: FieldExtra::default_for(kind),
        }
    }

    /// Creates the default field produced by the "add field" action.
    pub fn blank() -> Self {
        let id = FieldId::next();
        Self {
            id,
            kind: FieldKind::Text,
            label: "New Field".into(),
            name: format!("new_field_{}", id.raw()),
            required: false,
            placeholder: Some("Enter value".into()),
            description: None,
            extra: FieldExtra::None,
        }
    }

    /// Sets the required flag.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the help text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the option list. Only meaningful for select fields; ignored for
    /// other kinds.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let FieldExtra::Select {
            options: ref mut slot,
        } = self.extra
        {
            *slot = options.into_iter().map(Into::into).collect();
        }
        self
    }

    /// Sets the numeric range. Only meaningful for number fields; ignored
    /// for other kinds.
    pub fn with_range(mut self, min: f64, max: f64, step: f64) -> Self {
        if let FieldExtra::Number {
            min: ref mut lo,
            max: ref mut hi,
            step: ref mut st,
        } = self.extra
        {
            *lo = min;
            *hi = max;
            *st = step;
        }
        self
    }

    /// Sets the validation pattern. Only meaningful for tel fields; ignored
    /// for other kinds.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        if let FieldExtra::Tel {
            pattern: ref mut slot,
        } = self.extra
        {
            *slot = pattern.into();
        }
        self
    }

    /// Switches the field's kind.
    ///
    /// The kind-specific properties are reset to the new kind's blank
    /// variant when the old variant no longer applies; switching between
    /// kinds that share a variant (e.g. text to email) keeps everything.
    pub fn change_kind(&mut self, kind: FieldKind) {
        self.kind = kind;
        if !self.extra.matches(kind) {
            self.extra = FieldExtra::default_for(kind);
        }
    }
}
