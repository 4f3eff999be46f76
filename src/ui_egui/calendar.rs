//! Calendar popover content: month/year selectors above a month grid.
//!
//! `render_calendar` draws whatever month it is given and reports day clicks.
//! `CalendarComponent` owns the `DateNavigator` and feeds its focused date to
//! the grid on every frame.

use crate::models::locale::Locale;
use crate::services::calendar_grid::{month_grid, weekday_headers};
use crate::services::navigation::{DateNavigator, FocusedDate};
use crate::ui_egui::select::render_select;
use crate::ui_egui::theme::PickerTheme;
use chrono::{Datelike, NaiveDate, Weekday};

const CELL_SIZE: f32 = 32.0;

/// Glyphs for the month navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarIcons {
    pub left: &'static str,
    pub right: &'static str,
}

impl Default for CalendarIcons {
    fn default() -> Self {
        Self {
            left: "⏴",
            right: "⏵",
        }
    }
}

/// Outcome of one frame of calendar interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarAction {
    None,
    /// A day was clicked; `None` means the selected day was clicked again.
    Select(Option<NaiveDate>),
    /// Navigation buttons moved the displayed month.
    Navigate(i32),
}

/// Single-selection month grid.
#[derive(Debug, Clone)]
pub struct CalendarProps {
    pub month: NaiveDate,
    pub selected: Option<NaiveDate>,
    pub today: NaiveDate,
    pub week_start: Weekday,
    pub show_outside_days: bool,
    pub disable_navigation: bool,
    pub icons: CalendarIcons,
}

impl CalendarProps {
    pub fn new(month: NaiveDate, today: NaiveDate) -> Self {
        Self {
            month,
            selected: None,
            today,
            week_start: Weekday::Sun,
            show_outside_days: true,
            disable_navigation: false,
            icons: CalendarIcons::default(),
        }
    }
}

/// Single mode: clicking the selected day clears it.
pub fn toggle_selection(selected: Option<NaiveDate>, clicked: NaiveDate) -> Option<NaiveDate> {
    if selected == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

pub fn render_calendar(
    ui: &mut egui::Ui,
    props: &CalendarProps,
    theme: &PickerTheme,
) -> CalendarAction {
    let mut action = CalendarAction::None;

    if !props.disable_navigation {
        ui.horizontal(|ui| {
            if ui.small_button(props.icons.left).clicked() {
                action = CalendarAction::Navigate(-1);
            }
            ui.with_layout(
                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                |ui| {
                    ui.label(format!("{}", props.month.format("%B %Y")));
                },
            );
            if ui.small_button(props.icons.right).clicked() {
                action = CalendarAction::Navigate(1);
            }
        });
    }

    let weeks = month_grid(props.month, props.week_start, props.today, props.selected);

    egui::Grid::new(("calendar_grid", props.month.year(), props.month.month()))
        .num_columns(7)
        .spacing([2.0, 2.0])
        .min_col_width(CELL_SIZE)
        .show(ui, |ui| {
            for header in weekday_headers(props.week_start) {
                ui.label(
                    egui::RichText::new(header)
                        .small()
                        .color(theme.text_muted),
                );
            }
            ui.end_row();

            for week in &weeks {
                for day in week {
                    if day.outside && !props.show_outside_days {
                        ui.allocate_exact_size(
                            egui::vec2(CELL_SIZE, CELL_SIZE),
                            egui::Sense::hover(),
                        );
                        continue;
                    }

                    let visuals = theme.day_visuals(day);
                    let mut text = egui::RichText::new(day.date.day().to_string()).color(visuals.text);
                    if visuals.strong {
                        text = text.strong();
                    }

                    let mut button = egui::Button::new(text)
                        .min_size(egui::vec2(CELL_SIZE, CELL_SIZE))
                        .frame(visuals.fill.is_some());
                    if let Some(fill) = visuals.fill {
                        button = button.fill(fill);
                    }

                    if ui.add(button).clicked() {
                        action =
                            CalendarAction::Select(toggle_selection(props.selected, day.date));
                    }
                }
                ui.end_row();
            }
        });

    action
}

/// Selector pair plus grid. Created when the popover opens, dropped on close.
#[derive(Debug, Clone)]
pub struct CalendarComponent {
    navigator: DateNavigator,
}

impl CalendarComponent {
    pub fn new(today: NaiveDate, locale: Locale) -> Self {
        Self {
            navigator: DateNavigator::new(today, locale),
        }
    }

    pub fn focused(&self) -> FocusedDate {
        self.navigator.focused()
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.navigator.set_locale(locale);
    }

    pub fn navigator_mut(&mut self) -> &mut DateNavigator {
        &mut self.navigator
    }

    /// Returns `Some(selection)` when a day was clicked.
    /// `props.month` is overwritten with the focused date.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        mut props: CalendarProps,
        theme: &PickerTheme,
    ) -> Option<Option<NaiveDate>> {
        ui.horizontal(|ui| {
            let focused = self.navigator.focused();

            if let Some(token) = render_select(
                ui,
                "calendar_month_select",
                &self.navigator.month_options(),
                &focused.month_token(),
                120.0,
            ) {
                if let Err(err) = self.navigator.select_month(&token) {
                    log::warn!("{}", err);
                }
            }

            if let Some(token) = render_select(
                ui,
                "calendar_year_select",
                &self.navigator.year_options(),
                &focused.year_token(),
                80.0,
            ) {
                if let Err(err) = self.navigator.select_year(&token) {
                    log::warn!("{}", err);
                }
            }
        });

        ui.add_space(4.0);

        props.month = self.navigator.focused().date();
        match render_calendar(ui, &props, theme) {
            CalendarAction::Select(selection) => Some(selection),
            CalendarAction::Navigate(delta) => {
                if delta < 0 {
                    self.navigator.previous_month();
                } else {
                    self.navigator.next_month();
                }
                None
            }
            CalendarAction::None => None,
        }
    }
}
