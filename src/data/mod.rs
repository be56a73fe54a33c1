/// Data layer: record types, the builtin dataset, and the query engine.
///
/// Architecture:
/// ```text
///   ┌──────────┐
///   │ dataset   │  hardcoded faculty + department rows, enumerations
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  predicates + sort → ordered view, aggregates
///   └──────────┘
///        │
///        ▼
///   ┌───────────────────┐
///   │ metrics / history  │  per-record derived figures, synthetic series
///   └───────────────────┘
/// ```
///
/// `export` writes the two tables to CSV/JSON; `sources` is the static
/// catalog behind the data-sources page.

pub mod dataset;
pub mod export;
pub mod history;
pub mod metrics;
pub mod model;
pub mod query;
pub mod sources;
