use thiserror::Error;

use super::model::{Dataset, DiscreteDims, Record};
use super::series::resolve;

// ---------------------------------------------------------------------------
// Per-record diagnostics
// ---------------------------------------------------------------------------

/// Why a record contributed no points to the chart.  Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesIssue {
    #[error("record {record}: variable '{variable}' not found")]
    VariableNotFound { record: usize, variable: String },
    #[error("record {record}: x has {x_len} values but y has {y_len}")]
    LengthMismatch {
        record: usize,
        x_len: usize,
        y_len: usize,
    },
}

/// Pair `x` and `y` of one record index by index.
///
/// `index` is the record's position in the dataset, used only for the
/// diagnostic.
pub fn pair_record(
    index: usize,
    record: &Record,
    x: &str,
    y: &str,
) -> Result<Vec<[f64; 2]>, SeriesIssue> {
    let not_found = |variable: &str| SeriesIssue::VariableNotFound {
        record: index,
        variable: variable.to_string(),
    };
    let xs = resolve(record, x).ok_or_else(|| not_found(x))?.values();
    let ys = resolve(record, y).ok_or_else(|| not_found(y))?.values();

    if xs.len() != ys.len() {
        return Err(SeriesIssue::LengthMismatch {
            record: index,
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }

    Ok(xs.iter().zip(ys).map(|(&xi, &yi)| [xi, yi]).collect())
}

// ---------------------------------------------------------------------------
// Chart build over the filtered subset
// ---------------------------------------------------------------------------

/// One line of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Index of the source record in the dataset.
    pub record: usize,
    /// Legend text, e.g. `C-rate: 1, Temp: 25°C`.
    pub label: String,
    pub points: Vec<[f64; 2]>,
}

/// Everything the chart needs for one (selection, x, y) combination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub curves: Vec<Curve>,
    pub issues: Vec<SeriesIssue>,
}

/// Legend text for a record.
pub fn curve_label(record: &Record, dims: &DiscreteDims) -> String {
    let show = |key: &str| {
        record
            .discrete(key)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "?".to_string())
    };
    format!(
        "C-rate: {}, Temp: {}°C",
        show(&dims.c_rate),
        show(&dims.temperature)
    )
}

/// Pair `x` against `y` for every visible record.  Bad records are skipped
/// and reported in [`ChartData::issues`]; the rest still produce curves.
pub fn build_chart(
    dataset: &Dataset,
    dims: &DiscreteDims,
    visible: &[usize],
    x: &str,
    y: &str,
) -> ChartData {
    let mut chart = ChartData::default();

    for &idx in visible {
        let Some(record) = dataset.records.get(idx) else {
            continue;
        };
        match pair_record(idx, record, x, y) {
            Ok(points) if points.is_empty() => {}
            Ok(points) => chart.curves.push(Curve {
                record: idx,
                label: curve_label(record, dims),
                points,
            }),
            Err(issue) => {
                log::warn!("{issue}");
                chart.issues.push(issue);
            }
        }
    }

    chart
}
