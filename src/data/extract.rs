use std::collections::BTreeSet;

use super::model::{Dataset, DiscreteDims, DiscreteValue};

// ---------------------------------------------------------------------------
// Discrete levels and variable names found in a dataset
// ---------------------------------------------------------------------------

/// Distinct levels of both filter dimensions plus every variable name,
/// computed once per loaded dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetIndex {
    /// Ascending distinct C-rate levels.
    pub c_rates: Vec<DiscreteValue>,
    /// Ascending distinct temperature levels.
    pub temperatures: Vec<DiscreteValue>,
    /// Sorted union of `outputs`, `metrics` and `parameters` keys.
    /// The same list feeds both the X and Y selectors.
    pub variables: Vec<String>,
}

impl DatasetIndex {
    pub fn build(dataset: &Dataset, dims: &DiscreteDims) -> Self {
        DatasetIndex {
            c_rates: discrete_values(dataset, &dims.c_rate),
            temperatures: discrete_values(dataset, &dims.temperature),
            variables: variable_names(dataset),
        }
    }
}

/// Ascending distinct values of `parameters[key]`.  Records without the key
/// contribute nothing.
pub fn discrete_values(dataset: &Dataset, key: &str) -> Vec<DiscreteValue> {
    dataset
        .records
        .iter()
        .filter_map(|rec| rec.discrete(key))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Every key of every namespace of every record, sorted and de-duplicated.
pub fn variable_names(dataset: &Dataset) -> Vec<String> {
    let mut names: BTreeSet<&str> = BTreeSet::new();
    for rec in &dataset.records {
        names.extend(rec.outputs.keys().map(String::as_str));
        names.extend(rec.metrics.keys().map(String::as_str));
        names.extend(rec.parameters.keys().map(String::as_str));
    }
    names.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_results;

    fn dataset() -> Dataset {
        parse_results(
            r#"[
            {"parameters": {"C-rate": 2, "Temperature [°C]": 25}, "outputs": {"V": [3.0]}, "metrics": {"cap": 2.0}},
            {"parameters": {"C-rate": 0.5, "Temperature [°C]": 10}, "outputs": {"V": [3.1], "I": [1.0]}},
            {"parameters": {"C-rate": 2, "Temperature [°C]": 40}, "metrics": {"cap": 1.5, "E": 7.0}},
            {"parameters": {"C-rate": 1, "Temperature [°C]": 25.0}}
        ]"#,
        )
        .unwrap()
    }

    fn floats(values: &[DiscreteValue]) -> Vec<f64> {
        values.iter().map(|v| v.get()).collect()
    }

    #[test]
    fn discrete_values_sorted_and_unique() {
        let ds = dataset();
        assert_eq!(floats(&discrete_values(&ds, "C-rate")), vec![0.5, 1.0, 2.0]);
        assert_eq!(
            floats(&discrete_values(&ds, "Temperature [°C]")),
            vec![10.0, 25.0, 40.0]
        );
    }

    #[test]
    fn missing_key_yields_no_levels() {
        assert!(discrete_values(&dataset(), "SOC").is_empty());
        assert!(discrete_values(&Dataset::default(), "C-rate").is_empty());
    }

    #[test]
    fn variables_span_all_namespaces() {
        let names = variable_names(&dataset());
        assert_eq!(
            names,
            vec!["C-rate", "E", "I", "Temperature [°C]", "V", "cap"]
        );
    }

    #[test]
    fn index_is_deterministic() {
        let ds = dataset();
        let dims = DiscreteDims::default();
        assert_eq!(DatasetIndex::build(&ds, &dims), DatasetIndex::build(&ds, &dims));
    }
}
