use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Results table (bottom panel)
// ---------------------------------------------------------------------------

const ROW_HEIGHT: f32 = 20.0;

/// Two-decimal cell text for a metric; `-` when the record lacks it.
fn metric_cell(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".to_string())
}

/// Render the filtered results.  Clicking a row toggles its C-rate and
/// temperature in the filters.
pub fn results_table(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Results");

    let dims = state.config.dims.clone();
    let columns = state.config.metric_columns.clone();
    let mut clicked: Option<usize> = None;

    TableBuilder::new(ui)
        .striped(true)
        .sense(egui::Sense::click())
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(120.0))
        .columns(Column::remainder().at_least(100.0), columns.len())
        .header(ROW_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong(&dims.c_rate);
            });
            header.col(|ui| {
                ui.strong(&dims.temperature);
            });
            for column in &columns {
                header.col(|ui| {
                    ui.strong(&column.label);
                });
            }
        })
        .body(|mut body| {
            for &idx in &state.visible_indices {
                let rec = &state.dataset.records[idx];
                let selected = state.row_selected(idx);

                body.row(ROW_HEIGHT, |mut row| {
                    row.set_selected(selected);
                    let show = |key: &str| {
                        rec.discrete(key)
                            .map(|v| v.to_string())
                            .unwrap_or_else(|| "-".to_string())
                    };
                    row.col(|ui| {
                        ui.label(show(&dims.c_rate));
                    });
                    row.col(|ui| {
                        ui.label(show(&dims.temperature));
                    });
                    for column in &columns {
                        row.col(|ui| {
                            ui.label(RichText::new(metric_cell(rec.metric(&column.key))).monospace());
                        });
                    }
                    if row.response().clicked() {
                        clicked = Some(idx);
                    }
                });
            }
        });

    if let Some(idx) = clicked {
        state.toggle_row(idx);
    }
}
