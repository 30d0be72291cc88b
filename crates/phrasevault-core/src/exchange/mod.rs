//! Import and export of record batches.
//!
//! Two interchange formats:
//! - JSON: the same record-array shape the store persists.
//! - CSV: a flat five-column table; lossy, since icons and categories are
//!   not representable and get resynthesized with placeholders on import.
//!
//! Import is forgiving by policy: entries missing required fields are
//! dropped silently, and only a batch with nothing valid left is an error.

pub mod csv;
pub mod json;

pub use csv::{export_csv, import_csv, CSV_HEADERS};
pub use json::{export_json, import_json};
