//! "Date of birth" form item: label, popover trigger, description and error.

use crate::models::settings::Settings;
use crate::services::form::{DobForm, DATE_FIELD};
use crate::ui_egui::calendar::CalendarProps;
use crate::ui_egui::popover::PopoverState;
use crate::ui_egui::theme::PickerTheme;
use crate::utils::date::format_date;
use chrono::NaiveDate;

pub const FIELD_LABEL: &str = "Date of birth";
pub const FIELD_PLACEHOLDER: &str = "Pick a date";
pub const FIELD_DESCRIPTION: &str = "Your date of birth is used to calculate your age.";

const TRIGGER_WIDTH: f32 = 240.0;

/// Text shown on the trigger button. Falls back to ISO 8601 if `date_format`
/// cannot render a date.
pub fn trigger_text(value: Option<NaiveDate>, date_format: &str) -> String {
    match value {
        Some(date) => format_date(date, date_format).unwrap_or_else(|| date.to_string()),
        None => FIELD_PLACEHOLDER.to_string(),
    }
}

/// Whether the popover should close after this frame. `dropdown_was_open`
/// must be sampled before the selectors render: a combo box closes its list
/// in the same frame an entry is clicked.
pub fn should_close_popover(
    picked: bool,
    escape: bool,
    clicked_elsewhere: bool,
    dropdown_was_open: bool,
) -> bool {
    picked || escape || (clicked_elsewhere && !dropdown_was_open)
}

/// Render the field. Returns the new value when a day was picked or cleared.
pub fn render_date_field(
    ui: &mut egui::Ui,
    form: &DobForm,
    popover: &mut PopoverState,
    settings: &Settings,
    theme: &PickerTheme,
    today: NaiveDate,
) -> Option<Option<NaiveDate>> {
    let value = form.field().value();
    let mut change = None;

    ui.label(egui::RichText::new(FIELD_LABEL).strong());

    let text_color = if value.is_some() {
        theme.text_primary
    } else {
        theme.text_muted
    };
    let trigger = ui.add(
        egui::Button::new(
            egui::RichText::new(format!("{}    📅", trigger_text(value, &settings.date_format)))
                .color(text_color),
        )
        .min_size(egui::vec2(TRIGGER_WIDTH, 0.0)),
    );
    if trigger.clicked() {
        popover.toggle(today, settings.locale);
    }

    let dropdown_was_open = ui.memory(|mem| mem.any_popup_open());

    if let Some(component) = popover.content_mut() {
        let mut props = CalendarProps::new(today, today);
        props.selected = value;
        props.week_start = settings.week_start.weekday();
        props.show_outside_days = settings.show_outside_days;
        props.disable_navigation = true;

        let area = egui::Area::new(egui::Id::new("date_field_popover"))
            .order(egui::Order::Foreground)
            .fixed_pos(trigger.rect.left_bottom() + egui::vec2(0.0, 4.0))
            .show(ui.ctx(), |ui| {
                egui::Frame::popup(ui.style())
                    .inner_margin(egui::Margin::same(8.0))
                    .show(ui, |ui| component.show(ui, props, theme))
                    .inner
            });
        change = area.inner;

        // Selector dropdowns extend past the area, so clicks in an open list don't count.
        let clicked_elsewhere = ui.input(|i| {
            i.pointer.any_click()
                && i
                    .pointer
                    .interact_pos()
                    .is_some_and(|pos| !area.response.rect.contains(pos) && !trigger.rect.contains(pos))
        });
        let escape = ui.input(|i| i.key_pressed(egui::Key::Escape));

        if should_close_popover(change.is_some(), escape, clicked_elsewhere, dropdown_was_open) {
            popover.close();
        }
    }

    ui.label(egui::RichText::new(FIELD_DESCRIPTION).small().color(theme.text_muted));

    if let Some(err) = form.error_for(DATE_FIELD) {
        ui.label(egui::RichText::new(err.to_string()).small().color(theme.error_text));
    }

    change
}
