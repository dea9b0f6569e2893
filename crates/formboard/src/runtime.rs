//! Form runtime model — the preview-mode value collector.
//!
//! When the shell enters preview it captures the canvas container's field
//! list into a [`FormRuntime`]: one input per field, keyed by the field's
//! `name`. The renderer reports value changes back through
//! [`set_value`](FormRuntime::set_value); [`submit`](FormRuntime::submit)
//! freezes the collected values into an immutable [`FormSubmission`].
//!
//! There is no validation here. Native input constraints (`required`,
//! `pattern`, min/max/step) are carried by the lent field list and
//! forwarded by the renderer; the runtime just accumulates whatever the
//! inputs report.

use std::sync::Arc;

use crate::field::Field;

/// A value entered into a rendered form input.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    /// Text-like inputs (text, email, password, tel, date, number, select,
    /// textarea) report their raw string.
    Text(String),
    /// Checkboxes report their checked state.
    Checked(bool),
}

/// The runtime form: a captured field list plus collected values.
#[derive(Debug, Clone)]
pub struct FormRuntime {
    fields: Vec<Field>,
    /// Collected values in first-entry order; one slot per distinct name.
    values: Vec<(String, FormValue)>,
    submitted: bool,
}

impl FormRuntime {
    /// Builds a runtime over a captured field list.
    pub(crate) fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            values: Vec::new(),
            submitted: false,
        }
    }

    /// The captured fields, in render order, with their native constraints.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Records a value change reported by an input.
    ///
    /// Later changes for the same name overwrite the earlier value; fields
    /// sharing a name therefore collapse into one slot, which is why names
    /// should in practice be unique.
    pub fn set_value(&mut self, name: impl Into<String>, value: FormValue) {
        let name = name.into();
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((name, value)),
        }
    }

    /// The current value for a name, if one was entered.
    pub fn value(&self, name: &str) -> Option<&FormValue> {
        self.values
            .iter()
            .find_map(|(n, v)| (n == name).then_some(v))
    }

    /// Whether the form has been submitted since the last reset.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Submits the form, freezing the collected values.
    pub fn submit(&mut self) -> FormSubmission {
        self.submitted = true;
        tracing::info!(
            target: "formboard::runtime",
            values = self.values.len(),
            "form submitted"
        );
        FormSubmission {
            values: Arc::new(self.values.clone()),
        }
    }

    /// Clears collected values and the submitted flag, ready for another
    /// response.
    pub fn reset(&mut self) {
        self.values.clear();
        self.submitted = false;
    }
}

/// An immutable snapshot of submitted form values.
#[derive(Debug, Clone)]
pub struct FormSubmission {
    values: Arc<Vec<(String, FormValue)>>,
}

impl FormSubmission {
    /// The submitted values, in first-entry order.
    pub fn values(&self) -> &[(String, FormValue)] {
        &self.values
    }

    /// Looks up a submitted value by name.
    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.values
            .iter()
            .find_map(|(n, v)| (n == name).then_some(v))
    }
}
