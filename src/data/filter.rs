use std::collections::BTreeSet;

use super::model::{Dataset, DiscreteDims, DiscreteValue, Record};

// ---------------------------------------------------------------------------
// Filter selection: which levels are ticked per dimension
// ---------------------------------------------------------------------------

/// Ticked levels of one dimension.  Empty means "no filter" (show all).
pub type Selection = BTreeSet<DiscreteValue>;

/// Add `value` if absent, remove it if present.  Applying it twice is a no-op.
pub fn toggle(selection: &mut Selection, value: DiscreteValue) {
    if !selection.remove(&value) {
        selection.insert(value);
    }
}

/// Whether a record's level passes one dimension's selection.
///
/// A record without the dimension only passes an empty selection.
fn dimension_matches(selection: &Selection, value: Option<DiscreteValue>) -> bool {
    selection.is_empty() || value.is_some_and(|v| selection.contains(&v))
}

/// Both filter dimensions together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub c_rates: Selection,
    pub temperatures: Selection,
}

impl FilterSelection {
    /// Whether both selections are empty.
    pub fn is_empty(&self) -> bool {
        self.c_rates.is_empty() && self.temperatures.is_empty()
    }

    /// Reset both dimensions to "show all".
    pub fn clear(&mut self) {
        self.c_rates.clear();
        self.temperatures.clear();
    }

    /// Whether `record` passes both dimensions.
    pub fn matches(&self, record: &Record, dims: &DiscreteDims) -> bool {
        dimension_matches(&self.c_rates, record.discrete(&dims.c_rate))
            && dimension_matches(&self.temperatures, record.discrete(&dims.temperature))
    }

    /// Row-click semantics of the results table: toggle the record's level in
    /// *both* dimensions at once.
    pub fn toggle_row(&mut self, record: &Record, dims: &DiscreteDims) {
        if let Some(rate) = record.discrete(&dims.c_rate) {
            toggle(&mut self.c_rates, rate);
        }
        if let Some(temp) = record.discrete(&dims.temperature) {
            toggle(&mut self.temperatures, temp);
        }
    }

    /// A table row is highlighted when both of its levels are ticked.
    pub fn row_selected(&self, record: &Record, dims: &DiscreteDims) -> bool {
        let has = |selection: &Selection, value: Option<DiscreteValue>| {
            value.is_some_and(|v| selection.contains(&v))
        };
        has(&self.c_rates, record.discrete(&dims.c_rate))
            && has(&self.temperatures, record.discrete(&dims.temperature))
    }
}

/// Return indices of records that pass both dimensions, in dataset order.
pub fn filtered_indices(
    dataset: &Dataset,
    dims: &DiscreteDims,
    selection: &FilterSelection,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.matches(rec, dims))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record(rate: f64, temp: f64) -> Record {
        Record {
            parameters: BTreeMap::from([
                ("C-rate".to_string(), rate.into()),
                ("Temperature [°C]".to_string(), temp.into()),
            ]),
            ..Record::default()
        }
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![
            record(1.0, 25.0),
            record(2.0, 25.0),
            record(1.0, 40.0),
            record(0.5, 10.0),
            record(2.0, 40.0),
        ])
    }

    fn sel(values: &[f64]) -> Selection {
        values.iter().copied().map(DiscreteValue::new).collect()
    }

    #[test]
    fn empty_selection_is_identity() {
        let ds = dataset();
        let idx = filtered_indices(&ds, &DiscreteDims::default(), &FilterSelection::default());
        assert_eq!(idx, (0..ds.len()).collect::<Vec<_>>());
    }

    #[test]
    fn single_dimension_filter() {
        let selection = FilterSelection {
            c_rates: sel(&[1.0]),
            ..Default::default()
        };
        let idx = filtered_indices(&dataset(), &DiscreteDims::default(), &selection);
        assert_eq!(idx, vec![0, 2]);
    }

    #[test]
    fn both_dimensions_sound_and_complete() {
        let ds = dataset();
        let dims = DiscreteDims::default();
        let selection = FilterSelection {
            c_rates: sel(&[2.0, 1.0]),
            temperatures: sel(&[40.0]),
        };
        let idx = filtered_indices(&ds, &dims, &selection);
        assert_eq!(idx, vec![2, 4]);

        for (i, rec) in ds.records.iter().enumerate() {
            let rate = rec.discrete(&dims.c_rate).unwrap();
            let temp = rec.discrete(&dims.temperature).unwrap();
            let expected = selection.c_rates.contains(&rate) && selection.temperatures.contains(&temp);
            assert_eq!(idx.contains(&i), expected, "record {i}");
        }
    }

    #[test]
    fn selection_order_does_not_change_output_order() {
        let ds = dataset();
        let dims = DiscreteDims::default();
        let mut a = FilterSelection::default();
        toggle(&mut a.c_rates, DiscreteValue::new(2.0));
        toggle(&mut a.c_rates, DiscreteValue::new(0.5));
        let mut b = FilterSelection::default();
        toggle(&mut b.c_rates, DiscreteValue::new(0.5));
        toggle(&mut b.c_rates, DiscreteValue::new(2.0));
        assert_eq!(filtered_indices(&ds, &dims, &a), vec![1, 3, 4]);
        assert_eq!(filtered_indices(&ds, &dims, &a), filtered_indices(&ds, &dims, &b));
    }

    #[test]
    fn toggle_twice_restores_selection() {
        let original = sel(&[1.0, 25.0]);
        for v in [1.0, 3.0] {
            let mut s = original.clone();
            toggle(&mut s, DiscreteValue::new(v));
            assert_ne!(s, original);
            toggle(&mut s, DiscreteValue::new(v));
            assert_eq!(s, original);
        }
    }

    #[test]
    fn record_missing_dimension_only_passes_empty_selection() {
        let mut rec = record(1.0, 25.0);
        rec.parameters.remove("Temperature [°C]");
        let dims = DiscreteDims::default();

        let mut selection = FilterSelection::default();
        assert!(selection.matches(&rec, &dims));
        selection.temperatures.insert(DiscreteValue::new(25.0));
        assert!(!selection.matches(&rec, &dims));
    }

    #[test]
    fn sequence_level_only_passes_empty_selection() {
        let mut rec = record(1.0, 25.0);
        rec.parameters
            .insert("C-rate".to_string(), vec![1.0, 2.0].into());
        let dims = DiscreteDims::default();

        let mut selection = FilterSelection::default();
        assert!(selection.matches(&rec, &dims));
        toggle(&mut selection.c_rates, DiscreteValue::new(1.0));
        assert!(!selection.matches(&rec, &dims));
    }

    #[test]
    fn row_click_toggles_both_dimensions() {
        let ds = dataset();
        let dims = DiscreteDims::default();
        let mut selection = FilterSelection::default();

        selection.toggle_row(&ds.records[0], &dims);
        assert_eq!(selection.c_rates, sel(&[1.0]));
        assert_eq!(selection.temperatures, sel(&[25.0]));
        assert!(selection.row_selected(&ds.records[0], &dims));
        assert!(!selection.row_selected(&ds.records[1], &dims));

        // Same temperature as row 0: temperature 25 is removed again.
        selection.toggle_row(&ds.records[1], &dims);
        assert_eq!(selection.c_rates, sel(&[1.0, 2.0]));
        assert!(selection.temperatures.is_empty());
        assert_eq!(filtered_indices(&ds, &dims, &selection), vec![0, 1, 2, 4]);

        selection.clear();
        assert!(selection.is_empty());
    }
}
