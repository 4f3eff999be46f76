mod app;
pub mod calendar;
pub mod date_field;
pub mod popover;
pub mod select;
pub mod theme;
pub mod toast;

pub use app::DobPickerApp;
