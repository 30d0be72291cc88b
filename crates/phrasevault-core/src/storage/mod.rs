//! Record persistence.
//!
//! The storage layer is deliberately small: saved phrases live in a flat
//! list of [`PhraseRecord`] values behind the [`RecordStore`] trait, and
//! the shipped backend persists that list as a single JSON file.
//!
//! Records are append-and-delete only; a saved record is never mutated in
//! place.

pub mod json_file;
pub mod traits;
pub mod types;

pub use json_file::JsonFileStore;
pub use traits::RecordStore;
pub use types::PhraseRecord;
