//! Developer domain model.
//!
//! # Invariants
//! - `id == 0` marks a record that has not been persisted yet.
//! - A developer references exactly one profile.
//! - Plaintext passwords only appear in write payloads (`NewDeveloper`,
//!   `AdminCredentials`) and are never serialized.

use super::profile::{Profile, ProfileId};
use serde::{Deserialize, Serialize};

/// Store-assigned developer identifier.
pub type DeveloperId = i64;

/// Read model for one administered developer.
///
/// Text fields are `None` when the stored column is NULL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    pub id: DeveloperId,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub profile: Profile,
}

impl Developer {
    /// Builds a developer with every display field populated.
    pub fn new(
        id: DeveloperId,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        profile: Profile,
    ) -> Self {
        Self {
            id,
            last_name: Some(last_name.into()),
            first_name: Some(first_name.into()),
            phone: Some(phone.into()),
            email: Some(email.into()),
            profile,
        }
    }

    /// Whether the store has assigned an identifier to this record.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

/// Insert payload for a developer that does not exist yet.
#[derive(Clone, PartialEq, Eq)]
pub struct NewDeveloper {
    pub last_name: String,
    pub first_name: String,
    pub phone: String,
    pub email: String,
    /// Initial plaintext secret, hashed by the store at write time.
    pub password: String,
    pub profile_id: ProfileId,
}

impl std::fmt::Debug for NewDeveloper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewDeveloper")
            .field("last_name", &self.last_name)
            .field("first_name", &self.first_name)
            .field("phone", &self.phone)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("profile_id", &self.profile_id)
            .finish()
    }
}

/// Candidate identity for the administrator credential check.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub last_name: String,
    pub first_name: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("last_name", &self.last_name)
            .field("first_name", &self.first_name)
            .field("password", &"<redacted>")
            .finish()
    }
}
