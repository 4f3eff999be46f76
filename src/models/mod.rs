// Module exports for models

pub mod form;
pub mod locale;
pub mod select;
pub mod settings;
