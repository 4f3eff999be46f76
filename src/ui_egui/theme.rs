//! Theme module for the date picker
//!
//! Defines the color palette and how per-day visuals are composed from the
//! state flags of a grid cell.

use crate::models::settings::ThemePreference;
use crate::services::calendar_grid::GridDay;
use egui::Color32;

/// Colors used by the form and calendar
#[derive(Debug, Clone, PartialEq)]
pub struct PickerTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    pub app_background: Color32,
    pub day_background: Color32,

    /// Primary text color (labels, day numbers)
    pub text_primary: Color32,

    /// Muted text (placeholder, description, outside days)
    pub text_muted: Color32,

    pub selected_background: Color32,
    pub selected_text: Color32,

    /// Accent used for today's cell
    pub accent_background: Color32,
    pub accent_text: Color32,

    pub error_text: Color32,
}

/// Resolved look of one day cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayVisuals {
    pub fill: Option<Color32>,
    pub text: Color32,
    pub strong: bool,
}

impl PickerTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            day_background: Color32::from_rgb(255, 255, 255),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_muted: Color32::from_rgb(120, 120, 120),
            selected_background: Color32::from_rgb(24, 24, 27),
            selected_text: Color32::from_rgb(250, 250, 250),
            accent_background: Color32::from_rgb(230, 240, 255),
            accent_text: Color32::from_rgb(30, 60, 120),
            error_text: Color32::from_rgb(200, 40, 40),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            day_background: Color32::from_rgb(40, 40, 40),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_muted: Color32::from_rgb(150, 150, 150),
            selected_background: Color32::from_rgb(240, 240, 240),
            selected_text: Color32::from_rgb(24, 24, 27),
            accent_background: Color32::from_rgb(50, 60, 80),
            accent_text: Color32::from_rgb(180, 210, 255),
            error_text: Color32::from_rgb(255, 120, 120),
        }
    }

    /// Pick a palette for the preference, asking the OS when set to `System`.
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    /// Selected wins over today, today over outside.
    pub fn day_visuals(&self, day: &GridDay) -> DayVisuals {
        if day.selected {
            DayVisuals {
                fill: Some(self.selected_background),
                text: self.selected_text,
                strong: true,
            }
        } else if day.today {
            DayVisuals {
                fill: Some(self.accent_background),
                text: if day.outside {
                    self.text_muted
                } else {
                    self.accent_text
                },
                strong: true,
            }
        } else if day.outside {
            DayVisuals {
                fill: None,
                text: self.text_muted.gamma_multiply(0.6),
                strong: false,
            }
        } else {
            DayVisuals {
                fill: None,
                text: self.text_primary,
                strong: false,
            }
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.day_background;
        visuals.panel_fill = self.app_background;
        visuals.widgets.inactive.bg_fill = self.day_background;
        visuals.widgets.hovered.bg_fill = self.accent_background;
        visuals.selection.bg_fill = self.selected_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
