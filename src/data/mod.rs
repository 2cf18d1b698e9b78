/// Data layer: core types, loading, and view derivation.
///
/// Architecture:
/// ```text
///  .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → WorldDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ WorldDataset  │  Vec<IndicatorRecord>, country/year indices
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   view    │  apply Selection → one view per widget
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod view;
