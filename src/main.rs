// Date-of-birth picker application
// Main entry point

use dob_picker::services::settings::SettingsService;
use dob_picker::ui_egui::DobPickerApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting date-of-birth picker");

    let settings_service = SettingsService::from_default_location();
    log::info!("Settings file: {}", settings_service.path().display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Date of birth")
            .with_inner_size([480.0, 560.0])
            .with_min_inner_size([320.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "dob-picker",
        options,
        Box::new(|cc| Ok(Box::new(DobPickerApp::new(cc, settings_service)))),
    )
}
