use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::Selection;
use crate::data::model::DiscreteValue;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets and variable selectors
// ---------------------------------------------------------------------------

/// What the user did in a multi-select.
enum MultiSelectEvent {
    Toggle(DiscreteValue),
    Clear,
}

/// Checkbox list over `options`; reports at most one change per frame.
fn multi_select(
    ui: &mut Ui,
    title: &str,
    options: &[DiscreteValue],
    selected: &Selection,
) -> Option<MultiSelectEvent> {
    let mut event = None;
    let header_text = if selected.is_empty() {
        format!("{title}  (all)")
    } else {
        format!("{title}  ({}/{})", selected.len(), options.len())
    };

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(title)
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            if ui.small_button("Clear").clicked() {
                event = Some(MultiSelectEvent::Clear);
            }
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for &value in options {
                    let mut checked = selected.contains(&value);
                    if ui.checkbox(&mut checked, value.to_string()).changed() {
                        event = Some(MultiSelectEvent::Toggle(value));
                    }
                }
            });
        });

    event
}

/// Combo box over the variable names; returns the newly picked one.
fn variable_selector(ui: &mut Ui, id: &str, current: &str, variables: &[String]) -> Option<String> {
    let mut picked = None;
    egui::ComboBox::from_id_salt(id)
        .selected_text(current)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for name in variables {
                if ui.selectable_label(current == name, name).clicked() {
                    picked = Some(name.clone());
                }
            }
        });
    picked
}

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.dataset.is_empty() {
        ui.label("No results loaded.");
        return;
    }

    let index = state.index.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let rate_title = state.config.dims.c_rate.clone();
            match multi_select(ui, &rate_title, &index.c_rates, &state.filters.c_rates) {
                Some(MultiSelectEvent::Toggle(v)) => state.toggle_c_rate(v),
                Some(MultiSelectEvent::Clear) => state.clear_c_rates(),
                None => {}
            }

            let temp_title = state.config.dims.temperature.clone();
            match multi_select(ui, &temp_title, &index.temperatures, &state.filters.temperatures) {
                Some(MultiSelectEvent::Toggle(v)) => state.toggle_temperature(v),
                Some(MultiSelectEvent::Clear) => state.clear_temperatures(),
                None => {}
            }

            if !state.filters.is_empty() && ui.button("Show all").clicked() {
                state.clear_filters();
            }

            ui.separator();
            ui.heading("Variables");

            ui.strong("X variable");
            if let Some(name) = variable_selector(ui, "x_variable", &state.x_variable, &index.variables) {
                state.set_x_variable(name);
            }
            ui.strong("Y variable");
            if let Some(name) = variable_selector(ui, "y_variable", &state.y_variable, &index.variables) {
                state.set_y_variable(name);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(!state.visible_indices.is_empty(), egui::Button::new("Export table…"))
                .clicked()
            {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} results loaded, {} visible",
            state.dataset.len(),
            state.visible_indices.len()
        ));

        let n_issues = state.chart.issues.len();
        if n_issues > 0 {
            ui.separator();
            ui.label(RichText::new(format!("{n_issues} records not plotted")).color(Color32::YELLOW))
                .on_hover_text(
                    state
                        .chart
                        .issues
                        .iter()
                        .map(|issue| issue.to_string())
                        .collect::<Vec<_>>()
                        .join("\n"),
                );
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open simulation results")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load(&path);
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export results table")
        .add_filter("CSV", &["csv"])
        .set_file_name("results.csv")
        .save_file();

    if let Some(path) = file {
        state.export(&path);
    }
}
