//! # Phrasevault Core
//!
//! Core library for phrasevault - mnemonic passphrase generation and
//! passphrase-encrypted secret storage.
//!
//! This crate provides the domain logic independent of the CLI interface:
//!
//! - **wordbank**: categorized word/icon catalog (injected, immutable)
//! - **sampler**: cryptographically seeded phrase generation
//! - **cipher**: passphrase-based encryption of small secrets (Age)
//! - **ident**: random record identifiers
//! - **storage**: flat record store backed by a single JSON file
//! - **exchange**: JSON/CSV import and export of record batches
//! - **quiz**: memory-test planning and grading
//!
//! All randomness flows through the [`random::SecureRandom`] trait; the
//! core never performs I/O except through the storage backend, and never
//! presents UI.

pub mod cipher;
pub mod error;
pub mod exchange;
pub mod fs;
pub mod ident;
pub mod quiz;
pub mod random;
pub mod sampler;
pub mod storage;
pub mod wordbank;

pub use cipher::{decrypt, encrypt};
pub use error::{Result, VaultError};
pub use ident::generate_id;
pub use random::{OsRandom, SecureRandom};
pub use sampler::{generate_phrase, phrase_to_string, Phrase, PhraseSampler, SLOT_ATTEMPT_LIMIT};
pub use storage::{JsonFileStore, PhraseRecord, RecordStore};
pub use wordbank::{WordBank, WordEntry};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
