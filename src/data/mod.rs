/// Data layer: result records, loading, and the filter/chart pipeline.
///
/// Architecture:
/// ```text
///    results.json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ├──────────────► extract   distinct levels, variable names
///        ▼
///   ┌──────────┐
///   │  filter   │  selections → visible indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  series   │  name → outputs / metrics / parameters
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  pairing  │  x, y → points per record, issues
///   └──────────┘
/// ```

pub mod export;
pub mod extract;
pub mod filter;
pub mod loader;
pub mod model;
pub mod pairing;
pub mod series;
