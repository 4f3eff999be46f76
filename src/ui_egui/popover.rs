// Popover open state
// The calendar component only exists while the popover is open

use crate::models::locale::Locale;
use crate::ui_egui::calendar::CalendarComponent;
use chrono::NaiveDate;

#[derive(Debug, Default)]
pub struct PopoverState {
    content: Option<CalendarComponent>,
}

impl PopoverState {
    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    /// Open with a fresh calendar focused on `today`.
    pub fn open(&mut self, today: NaiveDate, locale: Locale) {
        self.content = Some(CalendarComponent::new(today, locale));
    }

    pub fn close(&mut self) {
        self.content = None;
    }

    pub fn toggle(&mut self, today: NaiveDate, locale: Locale) {
        if self.is_open() {
            self.close();
        } else {
            self.open(today, locale);
        }
    }

    pub fn content_mut(&mut self) -> Option<&mut CalendarComponent> {
        self.content.as_mut()
    }
}
