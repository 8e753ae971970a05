use super::model::{Record, Value};

// ---------------------------------------------------------------------------
// Namespace – where a variable was found
// ---------------------------------------------------------------------------

/// The three per-record namespaces, in lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Outputs,
    Metrics,
    Parameters,
}

/// Look `name` up in `outputs`, then `metrics`, then `parameters`.
///
/// The first namespace holding the name wins, so an output always shadows a
/// metric or parameter of the same name.  Callers read samples through
/// [`Value::values`].
pub fn resolve_in<'a>(record: &'a Record, name: &str) -> Option<(Namespace, &'a Value)> {
    [
        (Namespace::Outputs, &record.outputs),
        (Namespace::Metrics, &record.metrics),
        (Namespace::Parameters, &record.parameters),
    ]
    .into_iter()
    .find_map(|(ns, map)| map.get(name).map(|value| (ns, value)))
}

/// [`resolve_in`] without the namespace.
pub fn resolve<'a>(record: &'a Record, name: &str) -> Option<&'a Value> {
    resolve_in(record, name).map(|(_, value)| value)
}
