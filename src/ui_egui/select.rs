use crate::models::select::{label_for, SelectOption};

/// Render a combo box over `options`. Returns the newly chosen value, if any.
pub fn render_select(
    ui: &mut egui::Ui,
    id_source: &str,
    options: &[SelectOption],
    value: &str,
    width: f32,
) -> Option<String> {
    let mut chosen = value.to_string();
    let selected_text = label_for(options, value).unwrap_or(value).to_string();

    egui::ComboBox::from_id_source(id_source)
        .width(width)
        .height(240.0)
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(&mut chosen, option.value.clone(), &option.label);
            }
        });

    (chosen != value).then_some(chosen)
}
