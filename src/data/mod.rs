/// Data layer: the embedded descriptor table, the tabular result type, and
/// its export formats.
///
/// Architecture:
/// ```text
///   solvent names
///        │
///        ▼
///   ┌──────────┐
///   │  table    │  exact name → [f64; 15] descriptor tuple
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ FeatureFrame │  column labels + row-major values
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  frame → .csv / .json / .parquet / RecordBatch
///   └──────────┘
/// ```

pub mod export;
pub mod frame;
pub mod table;
