//! Validation rule types and evaluation.
//!
//! A [`ValidationRule`] is a set of named constraints; a [`FieldValue`] is
//! the text or numeric value of a single form field. A rule is satisfied
//! only when every constraint present in the set holds for the value, and
//! constraints that do not apply to the value's type are vacuously
//! satisfied, as are constraints absent from the set.

/// A single form field value under validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Free-form text input.
    Text(&'a str),
    /// Numeric input.
    Number(i64),
}

/// Named constraint set for one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRule {
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    min: Option<i64>,
    max: Option<i64>,
}

impl ValidationRule {
    /// Creates a rule with no constraints; it accepts every value.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Requires the value's trimmed string form to be non-empty.
    #[must_use]
    pub const fn with_required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Requires text values to have at least `length` trimmed characters.
    #[must_use]
    pub const fn with_min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Requires text values to have at most `length` trimmed characters.
    #[must_use]
    pub const fn with_max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Requires numeric values to be at least `bound`.
    #[must_use]
    pub const fn with_min(mut self, bound: i64) -> Self {
        self.min = Some(bound);
        self
    }

    /// Requires numeric values to be at most `bound`.
    #[must_use]
    pub const fn with_max(mut self, bound: i64) -> Self {
        self.max = Some(bound);
        self
    }

    /// Returns true when every constraint in the set holds for `value`.
    ///
    /// Length constraints apply only to [`FieldValue::Text`] and compare the
    /// trimmed character count; bound constraints apply only to
    /// [`FieldValue::Number`].
    #[must_use]
    pub fn is_satisfied_by(&self, value: FieldValue<'_>) -> bool {
        let mut is_valid = true;
        if self.required {
            is_valid = is_valid && required_holds(value);
        }
        if let (Some(min_length), FieldValue::Text(text)) = (self.min_length, value) {
            is_valid = is_valid && trimmed_length(text) >= min_length;
        }
        if let (Some(max_length), FieldValue::Text(text)) = (self.max_length, value) {
            is_valid = is_valid && trimmed_length(text) <= max_length;
        }
        if let (Some(min), FieldValue::Number(number)) = (self.min, value) {
            is_valid = is_valid && number >= min;
        }
        if let (Some(max), FieldValue::Number(number)) = (self.max, value) {
            is_valid = is_valid && number <= max;
        }
        is_valid
    }
}

/// A number's string form is never blank, so `required` only ever rejects
/// whitespace-only text.
fn required_holds(value: FieldValue<'_>) -> bool {
    match value {
        FieldValue::Text(text) => !text.trim().is_empty(),
        FieldValue::Number(_) => true,
    }
}

fn trimmed_length(text: &str) -> usize {
    text.trim().chars().count()
}
