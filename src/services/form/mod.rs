//! Date-of-birth form: field binding, validation schema and submit handling.
//!
//! Validation runs on submit. After the first submit attempt the field is
//! re-validated on every change, so the error clears as soon as a date is
//! picked and returns if the selection is removed.

use crate::models::form::DobFormValues;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use thiserror::Error;

pub const DATE_FIELD: &str = "date";
pub const DATE_REQUIRED_MESSAGE: &str = "A date of birth is required.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{message}")]
    Required {
        field: &'static str,
        message: &'static str,
    },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field, .. } => field,
        }
    }
}

/// Errors keyed by field name.
pub type FieldErrors = BTreeMap<&'static str, ValidationError>;

/// Receives the validated values of a successful submit.
#[cfg_attr(test, mockall::automock)]
pub trait SubmitHandler {
    fn on_submit(&mut self, values: &DobFormValues);
}

impl<F> SubmitHandler for F
where
    F: FnMut(&DobFormValues),
{
    fn on_submit(&mut self, values: &DobFormValues) {
        self(values)
    }
}

/// Schema for the form: the date must be present.
pub fn validate(values: &DobFormValues) -> Result<NaiveDate, ValidationError> {
    values.date.ok_or(ValidationError::Required {
        field: DATE_FIELD,
        message: DATE_REQUIRED_MESSAGE,
    })
}

/// `{ value, on_change }` binding for the date field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateField {
    value: Option<NaiveDate>,
}

impl DateField {
    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    pub fn on_change(&mut self, value: Option<NaiveDate>) {
        self.value = value;
    }
}

#[derive(Debug, Default)]
pub struct DobForm {
    field: DateField,
    errors: FieldErrors,
    submit_count: u32,
}

impl DobForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self) -> &DateField {
        &self.field
    }

    pub fn values(&self) -> DobFormValues {
        DobFormValues {
            date: self.field.value(),
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_for(&self, field: &str) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Update the date through the field binding.
    pub fn on_change(&mut self, value: Option<NaiveDate>) {
        self.field.on_change(value);
        if self.submit_count > 0 {
            self.revalidate();
        }
    }

    /// Validate and hand the values to `handler` if they pass.
    /// Returns `true` when the handler was called.
    pub fn handle_submit<H>(&mut self, handler: &mut H) -> bool
    where
        H: SubmitHandler + ?Sized,
    {
        self.submit_count += 1;
        if !self.revalidate() {
            log::info!("Form submit blocked: {} error(s)", self.errors.len());
            return false;
        }

        let values = self.values();
        handler.on_submit(&values);
        true
    }

    fn revalidate(&mut self) -> bool {
        self.errors.clear();
        match validate(&self.values()) {
            Ok(_) => true,
            Err(err) => {
                self.errors.insert(err.field(), err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_submit_without_date_reports_required() {
        let mut form = DobForm::new();
        let mut handler = MockSubmitHandler::new();
        handler.expect_on_submit().never();

        assert!(!form.handle_submit(&mut handler));

        let err = form.error_for(DATE_FIELD).unwrap();
        assert_eq!(err.to_string(), DATE_REQUIRED_MESSAGE);
        assert_eq!(form.submit_count(), 1);
    }

    #[test]
    fn test_submit_with_date_calls_handler_once() {
        let birth = date(1990, 6, 15);
        let mut form = DobForm::new();
        form.on_change(Some(birth));

        let mut handler = MockSubmitHandler::new();
        handler
            .expect_on_submit()
            .with(eq(DobFormValues::new(birth)))
            .times(1)
            .return_const(());

        assert!(form.handle_submit(&mut handler));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_change_before_submit_does_not_validate() {
        let mut form = DobForm::new();
        form.on_change(Some(date(2000, 1, 1)));
        form.on_change(None);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_change_after_failed_submit_revalidates() {
        let mut form = DobForm::new();
        let mut calls = 0;
        form.handle_submit(&mut |_: &DobFormValues| calls += 1);
        assert!(form.error_for(DATE_FIELD).is_some());

        form.on_change(Some(date(2000, 1, 1)));
        assert!(form.errors().is_empty());

        form.on_change(None);
        assert!(form.error_for(DATE_FIELD).is_some());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_validate_schema() {
        assert!(validate(&DobFormValues::default()).is_err());
        assert_eq!(
            validate(&DobFormValues::new(date(1985, 3, 2))),
            Ok(date(1985, 3, 2))
        );
    }
}
