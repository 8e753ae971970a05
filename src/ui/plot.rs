use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Battery chart (central panel)
// ---------------------------------------------------------------------------

/// Render one line per visible record of `y_variable` against `x_variable`.
pub fn battery_chart(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No results loaded  (File → Open…)");
        });
        return;
    }

    let x_name = state.x_variable.clone();
    let y_name = state.y_variable.clone();

    Plot::new("battery_chart")
        .legend(Legend::default())
        .x_axis_label(x_name.as_str())
        .y_axis_label(y_name.as_str())
        .label_formatter(move |_name, value| {
            format!("{x_name}: {:.2}\n{y_name}: {:.2}", value.x, value.y)
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (position, curve) in state.chart.curves.iter().enumerate() {
                let points: PlotPoints = curve.points.iter().copied().collect();

                let line = Line::new(points)
                    .name(&curve.label)
                    .color(state.palette.color_for(position))
                    .width(2.0);

                plot_ui.line(line);
            }
        });
}
