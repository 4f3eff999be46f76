use crate::models::locale::Locale;
use crate::models::settings::{Settings, ThemePreference};
use crate::services::form::DobForm;
use crate::services::settings::SettingsService;
use crate::services::submission::SubmissionLog;
use crate::ui_egui::date_field::{render_date_field, trigger_text};
use crate::ui_egui::popover::PopoverState;
use crate::ui_egui::theme::PickerTheme;
use crate::ui_egui::toast::ToastManager;
use chrono::{Local, NaiveDate};

const FORM_TOP_MARGIN: f32 = 128.0;

pub struct DobPickerApp {
    settings_service: SettingsService,
    settings: Settings,
    active_theme: PickerTheme,
    form: DobForm,
    popover: PopoverState,
    submissions: SubmissionLog,
    toast_manager: ToastManager,
}

impl eframe::App for DobPickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let today = Local::now().date_naive();
        self.submissions.set_today(today);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(FORM_TOP_MARGIN);
            ui.vertical_centered(|ui| {
                ui.set_max_width(280.0);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    self.render_form(ui, today);
                    ui.add_space(24.0);
                    self.render_preferences(ui, ctx);
                });
            });
        });

        self.toast_manager.render(ctx, self.active_theme.is_dark);
    }
}

impl DobPickerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings_service: SettingsService) -> Self {
        let settings = settings_service.get_or_default();
        log::info!(
            "Loaded settings: locale={}, theme={:?}, date_format={}",
            settings.locale,
            settings.theme,
            settings.date_format
        );

        let active_theme = PickerTheme::for_preference(settings.theme);
        active_theme.apply_to_context(&cc.egui_ctx);

        Self {
            settings_service,
            settings,
            active_theme,
            form: DobForm::new(),
            popover: PopoverState::default(),
            submissions: SubmissionLog::new(Local::now().date_naive()),
            toast_manager: ToastManager::new(),
        }
    }

    fn render_form(&mut self, ui: &mut egui::Ui, today: NaiveDate) {
        if let Some(value) = render_date_field(
            ui,
            &self.form,
            &mut self.popover,
            &self.settings,
            &self.active_theme,
            today,
        ) {
            self.form.on_change(value);
        }

        ui.add_space(16.0);

        if ui.button("Submit").clicked() && self.form.handle_submit(&mut self.submissions) {
            if let Some(submission) = self.submissions.last() {
                let message = format!(
                    "Submitted {} (age {})",
                    trigger_text(Some(submission.date), &self.settings.date_format),
                    submission.age
                );
                self.toast_manager.success(message);
            }
        }
    }

    fn render_preferences(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut locale = self.settings.locale;
        let mut theme = self.settings.theme;

        ui.horizontal(|ui| {
            ui.label("Month names:");
            egui::ComboBox::from_id_source("locale_combo")
                .selected_text(locale.display_name())
                .show_ui(ui, |ui| {
                    for option in Locale::ALL {
                        ui.selectable_value(&mut locale, option, option.display_name());
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.label("Theme:");
            egui::ComboBox::from_id_source("theme_combo")
                .selected_text(theme.label())
                .show_ui(ui, |ui| {
                    for option in ThemePreference::ALL {
                        ui.selectable_value(&mut theme, option, option.label());
                    }
                });
        });

        if locale != self.settings.locale {
            self.set_locale(locale);
        }
        if theme != self.settings.theme {
            self.set_theme(theme, ctx);
        }
    }

    fn set_locale(&mut self, locale: Locale) {
        self.settings.locale = locale;
        if let Some(component) = self.popover.content_mut() {
            component.set_locale(locale);
        }
        self.save_settings();
    }

    fn set_theme(&mut self, preference: ThemePreference, ctx: &egui::Context) {
        self.settings.theme = preference;
        self.active_theme = PickerTheme::for_preference(preference);
        self.active_theme.apply_to_context(ctx);
        self.save_settings();
    }

    fn save_settings(&mut self) {
        if let Err(err) = self.settings_service.update(&self.settings) {
            log::error!("Failed to save settings: {err:#}");
            self.toast_manager.error("Could not save preferences");
        }
    }
}
