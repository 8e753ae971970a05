use eframe::egui;

use crate::config::ViewerConfig;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BatteryViewerApp {
    pub state: AppState,
}

impl BatteryViewerApp {
    /// Create the app and load the results file once.
    pub fn new(config: ViewerConfig) -> Self {
        let path = config.results_path.clone();
        let mut state = AppState::new(config);
        state.load(&path);
        Self { state }
    }
}

impl eframe::App for BatteryViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters and variables ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: results table ----
        egui::TopBottomPanel::bottom("results_table")
            .default_height(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                table::results_table(ui, &mut self.state);
            });

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::battery_chart(ui, &self.state);
        });
    }
}
