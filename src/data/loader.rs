use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a results dataset from a file.  Dispatch by extension.
///
/// Only `.json` is supported: the file written by the simulation batch and
/// served by `results-server` at `/api/results`.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Load once, never fail: on error the dataset is empty and the error text
/// is handed back for the status line.
pub fn load_or_empty(path: &Path) -> (Dataset, Option<String>) {
    match load_file(path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} records from {}",
                dataset.len(),
                path.display()
            );
            (dataset, None)
        }
        Err(e) => {
            log::error!("Failed to load {}: {e:#}", path.display());
            (Dataset::default(), Some(format!("Error: {e:#}")))
        }
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// [
///   {
///     "parameters": { "C-rate": 1.0, "Temperature [°C]": 25.0 },
///     "outputs":    { "Voltage [V]": [4.2, 4.1, ...], ... },
///     "metrics":    { "Capacity [Ah]": 4.85, ... }
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_results(&text)
}

/// Parse the text of a results file.
pub fn parse_results(text: &str) -> Result<Dataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let rows = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        if !row.is_object() {
            bail!("Row {i} is not a JSON object");
        }
        let record: Record = serde_json::from_value(row.clone())
            .with_context(|| format!("Row {i}: invalid result record"))?;
        records.push(record);
    }

    Ok(Dataset::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::extract::DatasetIndex;
    use crate::data::model::{DiscreteDims, DiscreteValue};
    use crate::data::pairing::build_chart;

    const TWO_RECORDS: &str = r#"[
        {"parameters": {"rate": 1, "temp": 25}, "outputs": {"V": [3.0, 3.1]}, "metrics": {"cap": 2.0}},
        {"parameters": {"rate": 2, "temp": 25}, "outputs": {"V": [2.8]}, "metrics": {"cap": 1.8}}
    ]"#;

    #[test]
    fn parses_records_in_file_order() {
        let ds = parse_results(TWO_RECORDS).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].outputs["V"].values(), &[3.0, 3.1]);
        assert_eq!(ds.records[1].metric("cap"), Some(1.8));
        assert_eq!(ds.records[1].parameters["rate"].as_scalar(), Some(2.0));
    }

    #[test]
    fn rejects_non_array_root() {
        let err = parse_results(r#"{"parameters": {}}"#).unwrap_err();
        assert!(format!("{err:#}").contains("top-level JSON array"));
    }

    #[test]
    fn names_the_bad_row() {
        let text = r#"[{"parameters": {"rate": 1}}, {"outputs": {"V": "3.0"}}]"#;
        let err = parse_results(text).unwrap_err();
        assert!(format!("{err:#}").contains("Row 1"));

        let err = parse_results("[1]").unwrap_err();
        assert!(format!("{err:#}").contains("Row 0 is not a JSON object"));
    }

    #[test]
    fn odd_shapes_still_load_every_record() {
        let text = r#"[
            {"parameters": {"rate": 1, "temp": 25}, "outputs": {"V": [3.0, 3.1], "t": [0, 1]}},
            {"parameters": {"rate": 2, "temp": 25}, "outputs": {"V": 2.8, "t": 0}, "metrics": {"cap": [1.8]}},
            {"parameters": {"rate": 2, "temp": 40}, "outputs": {"V": [2.9, 2.7], "t": [0, 1]}}
        ]"#;
        let ds = parse_results(text).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records[1].outputs["V"].values(), &[2.8]);

        let dims = DiscreteDims {
            c_rate: "rate".to_string(),
            temperature: "temp".to_string(),
        };
        let chart = build_chart(&ds, &dims, &[0, 1, 2], "t", "V");
        let records: Vec<usize> = chart.curves.iter().map(|c| c.record).collect();
        assert_eq!(records, vec![0, 1, 2]);
        assert_eq!(chart.curves[1].points, vec![[0.0, 2.8]]);
        assert_eq!(chart.curves[2].points, vec![[0.0, 2.9], [1.0, 2.7]]);
        assert!(chart.issues.is_empty());
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let err = load_file(Path::new("results.parquet")).unwrap_err();
        assert!(err.to_string().contains(".parquet"));
    }

    #[test]
    fn missing_file_yields_empty_dataset_and_message() {
        let path = std::env::temp_dir().join("battery-viewer-no-such-file.json");
        let (ds, msg) = load_or_empty(&path);
        assert!(ds.is_empty());
        assert!(msg.unwrap().starts_with("Error: reading JSON file"));
    }

    #[test]
    fn loads_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "battery-viewer-loader-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, TWO_RECORDS).unwrap();
        let (ds, msg) = load_or_empty(&path);
        std::fs::remove_file(&path).ok();
        assert!(msg.is_none());
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn bundled_results_match_generator_grid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("public/results.json");
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 9);

        let index = DatasetIndex::build(&ds, &DiscreteDims::default());
        let levels = |values: &[DiscreteValue]| values.iter().map(|v| v.get()).collect::<Vec<_>>();
        assert_eq!(levels(&index.c_rates), vec![0.5, 1.0, 2.0]);
        assert_eq!(levels(&index.temperatures), vec![0.0, 25.0, 45.0]);
        for rec in &ds.records {
            assert_eq!(rec.outputs["Voltage [V]"].values().len(), 50);
            assert_eq!(rec.outputs["Capacity [A.h]"].values().len(), 50);
        }
    }
}
