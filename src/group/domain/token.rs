//! Single-use invitation token type.

use rand::{Rng, distributions::Alphanumeric};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of alphanumeric characters in a generated token.
///
/// 32 characters carry roughly 190 bits of entropy, well above the 16-byte
/// floor the workflow requires, so collisions are left to the storage
/// layer's unique constraint rather than checked for up front.
const TOKEN_LENGTH: usize = 32;

/// Unguessable, URL-safe token identifying a group-join invitation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InviteToken(String);

impl InviteToken {
    /// Generates a fresh random token.
    #[must_use]
    pub fn generate() -> Self {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();
        Self(token)
    }

    /// Wraps a token presented by a caller or read from persistence.
    #[must_use]
    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for InviteToken {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for InviteToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
