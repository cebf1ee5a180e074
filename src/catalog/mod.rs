/// Catalog layer: filename listing, parsing, and CSV output.
///
/// Architecture:
/// ```text
///  cwd entries (*duplicates_marked*.bam)
///        │
///        ▼
///   ┌──────────┐
///   │ scanner  │  read_dir + name match → sorted Vec<String>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model   │  split on '_' → FileRecord
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer  │  header + one row per record → stdout
///   └──────────┘
/// ```

pub mod error;
pub mod model;
pub mod scanner;
pub mod writer;
