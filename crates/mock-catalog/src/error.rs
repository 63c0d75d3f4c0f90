//! Error types for the mock-catalog crate.
//!
//! Registry parsing and validation failures are reported through
//! [`RegistryError`]. Generation itself cannot fail once a registry has been
//! validated.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or validating a catalog registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// A table that must hold rows is empty.
    #[error("registry table '{table}' must not be empty")]
    EmptyTable {
        /// Name of the empty table.
        table: String,
    },

    /// A row key is blank once trimmed.
    #[error("registry table '{table}' has a blank key at index {index}")]
    BlankKey {
        /// Name of the offending table.
        table: String,
        /// Index of the row with the blank key.
        index: usize,
    },

    /// Two rows in the same table share a key.
    #[error("registry table '{table}' contains duplicate key '{key}'")]
    DuplicateKey {
        /// Name of the offending table.
        table: String,
        /// The duplicated key.
        key: String,
    },

    /// The `players_online` bounds are inverted.
    #[error("players online range is invalid: min {min} exceeds max {max}")]
    InvalidPlayersOnlineRange {
        /// Lower bound found in the registry.
        min: u32,
        /// Upper bound found in the registry.
        max: u32,
    },
}
