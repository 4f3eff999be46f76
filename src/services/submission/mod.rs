// Submission handler used by the application
// Logs each accepted form as JSON together with the derived age

use crate::models::form::DobFormValues;
use crate::services::form::SubmitHandler;
use crate::utils::date::age_on;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub date: NaiveDate,
    pub age: u32,
}

/// Keeps the latest accepted submission; `today` is the reference date for ages.
#[derive(Debug)]
pub struct SubmissionLog {
    today: NaiveDate,
    last: Option<Submission>,
    count: usize,
}

impl SubmissionLog {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            last: None,
            count: 0,
        }
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    /// Number of submissions accepted so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn last(&self) -> Option<&Submission> {
        self.last.as_ref()
    }
}

impl SubmitHandler for SubmissionLog {
    fn on_submit(&mut self, values: &DobFormValues) {
        let Some(date) = values.date else {
            log::warn!("Submit handler called without a date");
            return;
        };

        let submission = Submission {
            date,
            age: age_on(date, self.today),
        };
        match serde_json::to_string(&submission) {
            Ok(json) => log::info!("Form submitted: {}", json),
            Err(err) => log::error!("Failed to serialize submission: {}", err),
        }
        self.last = Some(submission);
        self.count += 1;
    }
}
