//! In-memory credential store keyed by username.
//!
//! Passwords are kept as unsalted SHA-256 digests rendered as lowercase hex.
//! This is a placeholder scheme for the demo: identical passwords produce
//! identical digests and the comparison in [`CredentialStore::verify`] is a
//! plain string equality, not a constant-time one.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use sha2::{Digest, Sha256};

/// Fixed-length hex digest of a password.
///
/// # Examples
/// ```
/// use gamehub::domain::PasswordDigest;
///
/// let digest = PasswordDigest::of("admin123");
/// assert_eq!(digest.as_str().len(), 64);
/// assert_eq!(digest, PasswordDigest::of("admin123"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Hash `password` with SHA-256.
    pub fn of(password: &str) -> Self {
        Self(hex::encode(Sha256::digest(password.as_bytes())))
    }

    /// Hex representation of the digest.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Username to digest mapping supporting lookup and insert-if-absent.
///
/// ## Invariants
/// - Entries are never removed or overwritten once inserted.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    entries: HashMap<String, PasswordDigest>,
}

impl CredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `(username, password)` pairs.
    ///
    /// Later duplicates of a username are ignored, matching
    /// [`CredentialStore::register`].
    pub fn with_accounts<'a>(accounts: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut store = Self::new();
        for (username, password) in accounts {
            store.register(username, password);
        }
        store
    }

    /// Check `password` against the stored digest for `username`.
    ///
    /// Returns `false` when the username is unknown.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.entries
            .get(username)
            .is_some_and(|stored| *stored == PasswordDigest::of(password))
    }

    /// Store the digest of `password` unless `username` is already present.
    ///
    /// Returns `false` without touching the existing entry on collision.
    pub fn register(&mut self, username: &str, password: &str) -> bool {
        match self.entries.entry(username.to_owned()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(PasswordDigest::of(password));
                true
            }
        }
    }

    /// Stored digest for `username`, if any.
    pub fn digest(&self, username: &str) -> Option<&PasswordDigest> {
        self.entries.get(username)
    }

    /// Number of registered usernames.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no usernames are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
