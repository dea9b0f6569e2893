//! Field editing sessions.
//!
//! An [`EditSession`] is an isolated copy-on-open buffer for exactly one
//! field. All mutators touch the buffer only; the registry sees nothing
//! until the session is committed, at which point the buffer replaces the
//! field wholesale at its existing index. Cancelling discards the buffer
//! and leaves the registry bit-for-bit unchanged.
//!
//! Session lifecycle — when a session may open, what commit does when the
//! field has been deleted mid-edit, mutual exclusion with dragging — is
//! owned by [`FormBoard`](crate::board::FormBoard); this module is just the
//! buffer and its edit operations.

use formboard_core::FieldId;

use crate::field::{Field, FieldExtra, FieldKind};

/// Text-valued properties editable through the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextProp {
    /// Display label.
    Label,
    /// Runtime form key.
    Name,
    /// Placeholder text.
    Placeholder,
    /// Help text.
    Description,
    /// Validation regex (tel fields only).
    Pattern,
}

/// Numeric properties editable through the session (number fields only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericProp {
    /// Minimum accepted value.
    Min,
    /// Maximum accepted value.
    Max,
    /// Step between values.
    Step,
}

/// A transient, single-field edit buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    target: FieldId,
    buffer: Field,
}

impl EditSession {
    /// Opens a session over an independent copy of a field.
    pub(crate) fn open(field: Field) -> Self {
        Self {
            target: field.id,
            buffer: field,
        }
    }

    /// The id of the field this session edits.
    pub fn target(&self) -> FieldId {
        self.target
    }

    /// The current buffer contents, for editor-panel rendering.
    pub fn buffer(&self) -> &Field {
        &self.buffer
    }

    /// Consumes the session, yielding the value to commit.
    pub(crate) fn into_buffer(self) -> Field {
        self.buffer
    }

    /// Sets a text property on the buffer.
    ///
    /// `Pattern` lands only when the buffer is a tel field; on any other
    /// kind it has no property to land on and the edit is dropped.
    pub fn set_text(&mut self, prop: TextProp, value: impl Into<String>) {
        let value = value.into();
        match prop {
            TextProp::Label => self.buffer.label = value,
            TextProp::Name => self.buffer.name = value,
            TextProp::Placeholder => self.buffer.placeholder = Some(value),
            TextProp::Description => self.buffer.description = Some(value),
            TextProp::Pattern => {
                if let FieldExtra::Tel { ref mut pattern } = self.buffer.extra {
                    *pattern = value;
                } else {
                    tracing::debug!(
                        target: "formboard::editor",
                        kind = %self.buffer.kind,
                        "pattern edit dropped: buffer is not a tel field"
                    );
                }
            }
        }
    }

    /// Switches the buffer's kind, resetting kind-specific properties when
    /// the old ones no longer apply.
    pub fn set_kind(&mut self, kind: FieldKind) {
        self.buffer.change_kind(kind);
    }

    /// Sets the required flag on the buffer.
    pub fn set_required(&mut self, required: bool) {
        self.buffer.required = required;
    }

    /// Sets a numeric constraint from raw editor input.
    ///
    /// The text is parsed as a leading floating-point prefix; empty or
    /// non-numeric input yields NaN, which is stored as-is — there is no
    /// validation gate before commit. Dropped unless the buffer is a
    /// number field.
    pub fn set_numeric(&mut self, prop: NumericProp, raw: &str) {
        let FieldExtra::Number {
            ref mut min,
            ref mut max,
            ref mut step,
        } = self.buffer.extra
        else {
            tracing::debug!(
                target: "formboard::editor",
                kind = %self.buffer.kind,
                ?prop,
                "numeric edit dropped: buffer is not a number field"
            );
            return;
        };
        let value = parse_float_prefix(raw);
        match prop {
            NumericProp::Min => *min = value,
            NumericProp::Max => *max = value,
            NumericProp::Step => *step = value,
        }
    }

    /// Rebuilds the option list from raw comma-separated editor input.
    ///
    /// Each comma-separated token is trimmed; order is preserved. Empty
    /// input therefore yields a list containing one empty string, not an
    /// empty list. Dropped unless the buffer is a select field.
    pub fn set_options(&mut self, raw: &str) {
        let FieldExtra::Select { ref mut options } = self.buffer.extra else {
            tracing::debug!(
                target: "formboard::editor",
                kind = %self.buffer.kind,
                "options edit dropped: buffer is not a select field"
            );
            return;
        };
        *options = raw.split(',').map(|t| t.trim().to_string()).collect();
    }
}

/// Parses the longest leading floating-point prefix of `raw`, NaN if there
/// is none.
///
/// Mirrors lenient UI-input parsing: `"12abc"` is 12, `""` and `"abc"` are
/// NaN, surrounding whitespace is ignored.
fn parse_float_prefix(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let mut seen_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        seen_digit = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            seen_digit = true;
        }
    }
    if !seen_digit {
        return f64::NAN;
    }
    // Optional exponent; only consumed when well-formed.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number_session() -> EditSession {
        EditSession::open(Field::new(FieldKind::Number, "Age", "age"))
    }

    #[test]
    fn test_open_copies_the_field() {
        let field = Field::new(FieldKind::Text, "Label", "name");
        let session = EditSession::open(field.clone());
        assert_eq!(session.target(), field.id);
        assert_eq!(session.buffer(), &field);
    }

    #[test]
    fn test_text_edits_touch_buffer_only() {
        let mut session = EditSession::open(Field::new(FieldKind::Text, "Old", "old"));
        session.set_text(TextProp::Label, "New");
        session.set_text(TextProp::Name, "new_name");
        session.set_text(TextProp::Description, "help");

        assert_eq!(session.buffer().label, "New");
        assert_eq!(session.buffer().name, "new_name");
        assert_eq!(session.buffer().description.as_deref(), Some("help"));
    }

    #[test]
    fn test_pattern_only_lands_on_tel() {
        let mut session = EditSession::open(Field::new(FieldKind::Tel, "Phone", "phone"));
        session.set_text(TextProp::Pattern, "[0-9]+");
        assert!(matches!(
            session.buffer().extra,
            FieldExtra::Tel { ref pattern } if pattern == "[0-9]+"
        ));

        let mut session = EditSession::open(Field::new(FieldKind::Text, "T", "t"));
        session.set_text(TextProp::Pattern, "[0-9]+");
        assert_eq!(session.buffer().extra, FieldExtra::None);
    }

    #[test]
    fn test_numeric_parse_is_lenient() {
        let mut session = number_session();

        session.set_numeric(NumericProp::Min, "3.5");
        session.set_numeric(NumericProp::Max, "  12abc");
        session.set_numeric(NumericProp::Step, "-2e1x");
        let FieldExtra::Number { min, max, step } = session.buffer().extra else {
            panic!("number buffer lost its variant");
        };
        assert_eq!(min, 3.5);
        assert_eq!(max, 12.0);
        assert_eq!(step, -20.0);
    }

    #[test]
    fn test_numeric_parse_failure_stores_nan() {
        let mut session = number_session();

        session.set_numeric(NumericProp::Min, "");
        session.set_numeric(NumericProp::Max, "abc");
        let FieldExtra::Number { min, max, .. } = session.buffer().extra else {
            panic!("number buffer lost its variant");
        };
        assert!(min.is_nan());
        assert!(max.is_nan());
    }

    #[test]
    fn test_options_split_and_trim() {
        let mut session = EditSession::open(Field::new(FieldKind::Select, "Dept", "dept"));
        session.set_options(" Engineering, Sales ,Support");
        assert!(matches!(
            session.buffer().extra,
            FieldExtra::Select { ref options }
                if options == &["Engineering", "Sales", "Support"]
        ));
    }

    #[test]
    fn test_empty_options_input_yields_one_empty_string() {
        let mut session = EditSession::open(Field::new(FieldKind::Select, "Dept", "dept"));
        session.set_options("");
        assert!(matches!(
            session.buffer().extra,
            FieldExtra::Select { ref options } if options == &[""]
        ));
    }

    #[test]
    fn test_kind_switch_resets_extras() {
        let mut session = EditSession::open(Field::new(FieldKind::Select, "Dept", "dept"));
        session.set_options("A,B");
        session.set_kind(FieldKind::Number);

        let FieldExtra::Number { min, .. } = session.buffer().extra else {
            panic!("expected number variant after kind switch");
        };
        assert!(min.is_nan());

        // Options no longer have anywhere to land.
        session.set_options("C,D");
        assert!(matches!(session.buffer().extra, FieldExtra::Number { .. }));
    }

    #[test]
    fn test_parse_float_prefix_edge_cases() {
        assert_eq!(parse_float_prefix("42"), 42.0);
        assert_eq!(parse_float_prefix("-0.5"), -0.5);
        assert_eq!(parse_float_prefix("+.25"), 0.25);
        assert_eq!(parse_float_prefix("1e3"), 1000.0);
        assert_eq!(parse_float_prefix("1e"), 1.0);
        assert_eq!(parse_float_prefix("  7 days"), 7.0);
        assert!(parse_float_prefix("").is_nan());
        assert!(parse_float_prefix(".").is_nan());
        assert!(parse_float_prefix("e5").is_nan());
        assert!(parse_float_prefix("- 1").is_nan());
    }
}
