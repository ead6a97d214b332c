/// Data layer: track records, CSV normalization, and filtering.
///
/// Architecture:
/// ```text
///   raw CSV text
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  coerce cells → Vec<TrackRecord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ TrackDataset  │  immutable rows + artist/year options
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  six-facet predicate → filtered view
///   └──────────┘
///        │
///        ▼
///     charts
/// ```

pub mod loader;
pub mod model;
pub mod filter;
