//! The text field a bound picker keeps in sync with its selection.

/// Host text input mirrored by the picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundField {
    value: String,
    hidden: bool,
}

impl BoundField {
    /// Creates a visible field holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            hidden: false,
        }
    }

    /// Creates a hidden field; the picker never returns focus to it.
    pub fn hidden(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            hidden: true,
        }
    }

    /// Returns the current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the text.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Returns true for hidden inputs.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}
