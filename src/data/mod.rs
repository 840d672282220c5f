/// Data layer: core types, loading, and cleaning.
///
/// Architecture:
/// ```text
///  winequality-red.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RawTable (text cells)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  clean    │  drop incomplete rows, coerce numbers → Table
///   └──────────┘
/// ```
pub mod clean;
pub mod loader;
pub mod model;
