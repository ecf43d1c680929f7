//! Field-scoped validation errors shared by the reservation and card forms.
//!
//! Every check on a form runs; failures are collected rather than returned
//! at the first problem, so each field shows its own message at once.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::i18n::Bilingual;

/// A validation failure tied to exactly one form field.
pub trait FieldError: Copy {
    type Field: Copy + PartialEq;

    fn field(self) -> Self::Field;
    fn message(self) -> Bilingual;
}

/// Collected failures for one form submission, at most one per field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors<E> {
    errors: Vec<E>,
}

impl<E> Default for FieldErrors<E> {
    fn default() -> Self {
        Self { errors: Vec::new() }
    }
}

impl<E: FieldError> FieldErrors<E> {
    /// Record `error` unless its field already has one.
    pub fn push(&mut self, error: E) {
        if self.for_field(error.field()).is_none() {
            self.errors.push(error);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn for_field(&self, field: E::Field) -> Option<E> {
        self.errors.iter().copied().find(|e| e.field() == field)
    }

    /// Message for `field`, or `None` when the field passed.
    pub fn message_for(&self, field: E::Field) -> Option<Bilingual> {
        self.for_field(field).map(FieldError::message)
    }

    /// `Ok(value)` when nothing failed, otherwise the collected errors.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}
