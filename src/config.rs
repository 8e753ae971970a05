use std::path::PathBuf;

use crate::data::export::MetricColumn;
use crate::data::model::DiscreteDims;

/// Fixed viewer settings.  There is no config file; everything is a default.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Results file read once at startup.
    pub results_path: PathBuf,
    pub dims: DiscreteDims,
    /// Initial X and Y variables of the chart.
    pub default_x: String,
    pub default_y: String,
    /// Metric columns of the results table, after C-rate and temperature.
    pub metric_columns: Vec<MetricColumn>,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            results_path: PathBuf::from("public").join("results.json"),
            dims: DiscreteDims::default(),
            default_x: "Capacity [A.h]".to_string(),
            default_y: "Voltage [V]".to_string(),
            metric_columns: vec![
                MetricColumn::new("Capacity [Ah]", "Capacity [Ah]"),
                MetricColumn::new("Energy [Wh]", "Energy [Wh]"),
            ],
            window_size: [1200.0, 800.0],
            min_window_size: [600.0, 400.0],
        }
    }
}
