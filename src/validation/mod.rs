//! Declarative field constraint evaluation.
//!
//! The input boundary checks each form field against a [`ValidationRule`]
//! before an item reaches the board store. Evaluation is pure: the same
//! value and rule always produce the same verdict, and nothing is mutated.

mod rules;

pub use rules::{FieldValue, ValidationRule};
