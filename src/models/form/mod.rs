// Form values model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Values handed to the submit handler once validation passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DobFormValues {
    pub date: Option<NaiveDate>,
}

impl DobFormValues {
    pub fn new(date: NaiveDate) -> Self {
        Self { date: Some(date) }
    }
}
