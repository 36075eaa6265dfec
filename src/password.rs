//! Salted bcrypt hashes of user passwords.

use bcrypt::{BcryptError, hash, verify};

use crate::Error;

/// A salted and hashed password, as stored in the user table.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// The bcrypt cost used by the server unless configured otherwise.
    pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

    /// Hash `raw_password` with a random salt.
    ///
    /// Each increment of `cost` doubles the time needed to hash and verify a password.
    /// Tests use the minimum cost of 4 to stay fast.
    ///
    /// # Errors
    ///
    /// Returns [Error::HashingError] if bcrypt rejects `cost` or fails to hash.
    pub fn new(raw_password: &str, cost: u32) -> Result<Self, Error> {
        hash(raw_password, cost)
            .map(Self)
            .map_err(|error| Error::HashingError(error.to_string()))
    }

    /// Wrap a hash string read back from the database.
    ///
    /// No check is made that `raw_password_hash` is a bcrypt hash. A malformed hash makes
    /// [PasswordHash::verify] return an error.
    pub fn new_unchecked(raw_password_hash: &str) -> Self {
        Self(raw_password_hash.to_owned())
    }

    /// Whether `raw_password` hashes to this hash.
    pub fn verify(&self, raw_password: &str) -> Result<bool, BcryptError> {
        verify(raw_password, &self.0)
    }

    /// The hash string as stored in the database.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
