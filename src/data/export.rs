use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{Dataset, DiscreteDims, DiscreteValue};

/// A metric shown as a table column: header text and `metrics` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricColumn {
    pub label: String,
    pub key: String,
}

impl MetricColumn {
    pub fn new(label: &str, key: &str) -> Self {
        Self {
            label: label.to_string(),
            key: key.to_string(),
        }
    }
}

/// Write the visible table rows as CSV.  Missing cells are left empty.
pub fn write_table<W: io::Write>(
    writer: W,
    dataset: &Dataset,
    dims: &DiscreteDims,
    columns: &[MetricColumn],
    visible: &[usize],
) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);

    let mut header = vec![dims.c_rate.as_str(), dims.temperature.as_str()];
    header.extend(columns.iter().map(|c| c.label.as_str()));
    out.write_record(&header).context("writing CSV header")?;

    for &idx in visible {
        let Some(rec) = dataset.records.get(idx) else {
            continue;
        };
        let cell = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();

        let mut row = vec![
            cell(rec.discrete(&dims.c_rate).map(DiscreteValue::get)),
            cell(rec.discrete(&dims.temperature).map(DiscreteValue::get)),
        ];
        row.extend(columns.iter().map(|c| cell(rec.metric(&c.key))));
        out.write_record(&row)
            .with_context(|| format!("writing CSV row for record {idx}"))?;
    }

    out.flush().context("flushing CSV")?;
    Ok(())
}

/// [`write_table`] into a file.
pub fn export_table(
    path: &Path,
    dataset: &Dataset,
    dims: &DiscreteDims,
    columns: &[MetricColumn],
    visible: &[usize],
) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_table(file, dataset, dims, columns, visible)
}
