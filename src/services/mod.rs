// Service module exports

pub mod calendar_grid;
pub mod form;
pub mod navigation;
pub mod settings;
pub mod submission;
