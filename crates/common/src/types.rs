use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Identifier of a product in the catalog service.
///
/// Wraps the catalog's numeric key to keep product identifiers from being
/// mixed up with quantities or other integers. Zero is not a valid catalog
/// key; requests reject it before any remote call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates a product ID from the catalog's numeric key.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying numeric key.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ProductId> for u32 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

/// The email address is not syntactically valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid email address: {0:?}")]
pub struct InvalidEmail(pub String);

// Local part of letters, digits, dots and underscores; domain of alphabetic
// labels with at least one dot.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._]+@[a-zA-Z]+(\.[a-zA-Z]+)+$").expect("email pattern")
});

/// A customer's email address, the key under which the Customer Directory
/// and the Cart Store identify the customer.
///
/// Only constructible through [`CustomerEmail::parse`], so a value of this
/// type is always syntactically valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerEmail(String);

impl CustomerEmail {
    /// Parses and validates an email address.
    pub fn parse(email: impl Into<String>) -> Result<Self, InvalidEmail> {
        let email = email.into();
        if EMAIL_PATTERN.is_match(&email) {
            Ok(Self(email))
        } else {
            Err(InvalidEmail(email))
        }
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CustomerEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for one cart-mutation attempt.
///
/// Generated when an orchestration run starts and returned with the
/// outcome so a caller-reported failure can be correlated with the
/// gateway's logs. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MutationId(Uuid);

impl MutationId {
    /// Creates a new random mutation ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a mutation ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for MutationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MutationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for MutationId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<MutationId> for Uuid {
    fn from(id: MutationId) -> Self {
        id.0
    }
}
