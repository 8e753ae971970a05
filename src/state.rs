use std::path::Path;

use crate::color::CurvePalette;
use crate::config::ViewerConfig;
use crate::data::export::export_table;
use crate::data::extract::DatasetIndex;
use crate::data::filter::{filtered_indices, toggle, FilterSelection};
use crate::data::loader::load_or_empty;
use crate::data::model::{Dataset, DiscreteValue};
use crate::data::pairing::{build_chart, ChartData};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: ViewerConfig,

    /// Loaded dataset (empty until a load succeeds).
    pub dataset: Dataset,

    /// Distinct levels and variable names of `dataset`.
    pub index: DatasetIndex,

    /// C-rate and temperature selections.
    pub filters: FilterSelection,

    /// Chosen chart variables.
    pub x_variable: String,
    pub y_variable: String,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Curves and per-record issues for the current view (cached).
    pub chart: ChartData,

    pub palette: CurvePalette,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            x_variable: config.default_x.clone(),
            y_variable: config.default_y.clone(),
            config,
            dataset: Dataset::default(),
            index: DatasetIndex::default(),
            filters: FilterSelection::default(),
            visible_indices: Vec::new(),
            chart: ChartData::default(),
            palette: CurvePalette::default(),
            status_message: None,
        }
    }

    /// Load `path` and adopt the result.  A failure leaves an empty dataset
    /// and a status message.
    pub fn load(&mut self, path: &Path) {
        let (dataset, error) = load_or_empty(path);
        self.set_dataset(dataset);
        self.status_message = error;
    }

    /// Ingest a newly loaded dataset, reset filters and recompute the view.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.index = DatasetIndex::build(&dataset, &self.config.dims);
        log::info!(
            "{} records, {} C-rates, {} temperatures, {} variables",
            dataset.len(),
            self.index.c_rates.len(),
            self.index.temperatures.len(),
            self.index.variables.len()
        );
        self.dataset = dataset;
        self.filters.clear();
        self.status_message = None;
        self.refresh();
    }

    /// Recompute visible rows and chart after any input changed.
    pub fn refresh(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.config.dims, &self.filters);
        self.chart = build_chart(
            &self.dataset,
            &self.config.dims,
            &self.visible_indices,
            &self.x_variable,
            &self.y_variable,
        );
        self.palette = CurvePalette::new(self.chart.curves.len());
    }

    pub fn toggle_c_rate(&mut self, value: DiscreteValue) {
        toggle(&mut self.filters.c_rates, value);
        self.refresh();
    }

    pub fn toggle_temperature(&mut self, value: DiscreteValue) {
        toggle(&mut self.filters.temperatures, value);
        self.refresh();
    }

    /// Table row click: toggle both dimensions for that record.
    pub fn toggle_row(&mut self, record: usize) {
        if let Some(rec) = self.dataset.records.get(record) {
            self.filters.toggle_row(rec, &self.config.dims);
            self.refresh();
        }
    }

    /// Untick every C-rate level.
    pub fn clear_c_rates(&mut self) {
        self.filters.c_rates.clear();
        self.refresh();
    }

    /// Untick every temperature level.
    pub fn clear_temperatures(&mut self) {
        self.filters.temperatures.clear();
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.refresh();
    }

    pub fn set_x_variable(&mut self, name: String) {
        if self.x_variable != name {
            self.x_variable = name;
            self.refresh();
        }
    }

    pub fn set_y_variable(&mut self, name: String) {
        if self.y_variable != name {
            self.y_variable = name;
            self.refresh();
        }
    }

    /// Whether a visible record's row is highlighted.
    pub fn row_selected(&self, record: usize) -> bool {
        self.dataset
            .records
            .get(record)
            .is_some_and(|rec| self.filters.row_selected(rec, &self.config.dims))
    }

    /// Write the visible rows to `path` as CSV.
    pub fn export(&mut self, path: &Path) {
        match export_table(
            path,
            &self.dataset,
            &self.config.dims,
            &self.config.metric_columns,
            &self.visible_indices,
        ) {
            Ok(()) => {
                log::info!(
                    "Exported {} rows to {}",
                    self.visible_indices.len(),
                    path.display()
                );
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export table: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
